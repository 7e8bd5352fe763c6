//! Native vs. broadcast address status.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::lookup::RawLookupRecord;

/// Whether an address is announced from its registration country.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NativeIpStatus {
    #[serde(alias = "原生IP")]
    Native,
    #[serde(alias = "广播IP")]
    Broadcast,
}

/// Registration-country check.
///
/// There is no registry data source, so every address is reported as native.
pub fn check_native_ip(_record: &RawLookupRecord) -> NativeIpStatus {
    NativeIpStatus::Native
}
