//! IP classification and risk-scoring engine.
//!
//! Every function here is pure: the same address and lookup record always
//! produce the same profile. The flow is
//!
//! 1. [`determine_ip_type`] - datacenter vs. residential from keyword tables
//!    and the record's hosting/mobile flags
//! 2. [`calculate_risk_score`] - base score by network kind plus a jitter
//!    derived from the address via the LCG
//! 3. [`risk_tier`] and [`shared_users_bucket`]
//! 4. [`format_location`], [`country_flag`], [`asn_info`] and owner links
//!
//! [`build_display_profile`] runs all of them; [`fallback_display_profile`]
//! supplies the documented defaults when no record is available.

mod classify;
mod display;
mod keywords;
mod links;
mod location;
mod native;
mod risk;
mod shared;


pub use classify::{determine_ip_type, is_cloud_provider, ClassificationResult, IpType};
pub use display::{build_display_profile, fallback_display_profile, DisplayProfile};
pub use keywords::{CLOUD_PROVIDERS, HOME_ISPS, KEYWORD_TABLE_VERSION};
pub use links::{OwnerKind, OwnerLink};
pub use location::{asn_info, country_flag, format_location, UNKNOWN_FLAG};
pub use native::{check_native_ip, NativeIpStatus};
pub use risk::{calculate_risk_score, jitter, risk_tier, RiskProfile, RiskTier};
pub use shared::{shared_users_bucket, SharedUsersBucket};
