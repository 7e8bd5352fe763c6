//! Risk score, tier and color.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, IntoStaticStr};

use super::classify::{is_cloud_provider, IpType};
use super::shared::SharedUsersBucket;
use crate::ip::IpNumber;
use crate::lookup::RawLookupRecord;

/// Risk tiers, ordered from cleanest to riskiest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskTier {
    UltraClean,
    Clean,
    Normal,
    SlightRisk,
    GeneralRisk,
    ExtremeRisk,
}

impl RiskTier {
    /// Inclusive upper score bound, `None` for the open-ended top tier.
    pub fn upper_bound(&self) -> Option<u32> {
        match self {
            RiskTier::UltraClean => Some(15),
            RiskTier::Clean => Some(25),
            RiskTier::Normal => Some(40),
            RiskTier::SlightRisk => Some(50),
            RiskTier::GeneralRisk => Some(70),
            RiskTier::ExtremeRisk => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::UltraClean => "#006400",
            RiskTier::Clean => "#008000",
            RiskTier::Normal => "#9ACD32",
            RiskTier::SlightRisk => "#FFD700",
            RiskTier::GeneralRisk => "#FF8C00",
            RiskTier::ExtremeRisk => "#FF0000",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::UltraClean => "Ultra clean IP",
            RiskTier::Clean => "Clean IP",
            RiskTier::Normal => "Normal IP",
            RiskTier::SlightRisk => "Slight risk IP",
            RiskTier::GeneralRisk => "General risk IP",
            RiskTier::ExtremeRisk => "Extreme risk IP",
        }
    }
}

/// Score, tier and the shared-users estimate for one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub score: u32,
    pub tier: RiskTier,
    pub color: String,
    pub shared_users: SharedUsersBucket,
}

impl RiskProfile {
    /// Builds a profile whose tier and color follow from `score`.
    pub fn from_score(score: u32, shared_users: SharedUsersBucket) -> Self {
        let tier = risk_tier(score);
        RiskProfile {
            score,
            tier,
            color: tier.color().to_string(),
            shared_users,
        }
    }

    /// Values reported when no lookup record is available.
    ///
    /// These are fixed, not derived: a score of 50 would map to
    /// `SlightRisk`, but the fallback reports `GeneralRisk` with the
    /// `SlightRisk` color.
    pub fn fallback() -> Self {
        RiskProfile {
            score: 50,
            tier: RiskTier::GeneralRisk,
            color: RiskTier::SlightRisk.color().to_string(),
            shared_users: SharedUsersBucket::HundredToThousand,
        }
    }

    /// Replaces the score, recomputing tier and color.
    pub fn set_score(&mut self, score: u32) {
        let tier = risk_tier(score);
        self.score = score;
        self.tier = tier;
        self.color = tier.color().to_string();
    }
}

/// Maps a score to its tier: thresholds 15, 25, 40, 50 and 70 are inclusive
/// upper bounds, checked from the lowest.
pub fn risk_tier(score: u32) -> RiskTier {
    match score {
        0..=15 => RiskTier::UltraClean,
        16..=25 => RiskTier::Clean,
        26..=40 => RiskTier::Normal,
        41..=50 => RiskTier::SlightRisk,
        51..=70 => RiskTier::GeneralRisk,
        _ => RiskTier::ExtremeRisk,
    }
}

/// Deterministic offset in `[-10, 10]` derived from the address.
pub fn jitter(ip_number: IpNumber) -> i64 {
    (ip_number.random() % 21) as i64 - 10
}

/// Base score before jitter.
fn base_score(ip_type: IpType, record: &RawLookupRecord) -> i64 {
    match ip_type {
        IpType::Residential => {
            let mut base = 20;
            base += if record.hosting { 30 } else { -5 };
            base += if record.proxy { 40 } else { -5 };
            base
        }
        // Cloud membership is recomputed from the record, independent of
        // the classification result.
        IpType::Datacenter if is_cloud_provider(record) => {
            let mut base = 70;
            if record.hosting {
                base += 10;
            }
            if record.proxy {
                base += 10;
            }
            base
        }
        IpType::Datacenter => {
            let mut base = 50;
            base += if record.hosting { 15 } else { -5 };
            base += if record.proxy { 15 } else { -5 };
            base
        }
    }
}

/// Computes the risk score: base score by network kind plus the address
/// jitter, floored at zero.
pub fn calculate_risk_score(ip_type: IpType, record: &RawLookupRecord, ip_number: IpNumber) -> u32 {
    let score = base_score(ip_type, record) + jitter(ip_number);
    score.max(0) as u32
}
