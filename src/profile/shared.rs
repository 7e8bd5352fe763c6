//! Shared-users estimate.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::ip::IpNumber;

/// Estimated number of users sharing one address, in increasing order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum SharedUsersBucket {
    #[serde(rename = "1-10", alias = "1-10 (极好)")]
    #[strum(serialize = "1-10")]
    OneToTen,
    #[serde(rename = "10-100", alias = "10-100 (一般)")]
    #[strum(serialize = "10-100")]
    TenToHundred,
    #[serde(rename = "100-1000", alias = "100-1000 (风险)")]
    #[strum(serialize = "100-1000")]
    HundredToThousand,
    #[serde(rename = "1000-10000", alias = "1000-10000 (高危)")]
    #[strum(serialize = "1000-10000")]
    ThousandToTenThousand,
    #[serde(rename = "10000+", alias = "10000+ (极度风险)")]
    #[strum(serialize = "10000+")]
    TenThousandPlus,
}

impl SharedUsersBucket {
    /// All buckets, indexable by `lcg mod 5`.
    pub const ORDERED: [SharedUsersBucket; 5] = [
        SharedUsersBucket::OneToTen,
        SharedUsersBucket::TenToHundred,
        SharedUsersBucket::HundredToThousand,
        SharedUsersBucket::ThousandToTenThousand,
        SharedUsersBucket::TenThousandPlus,
    ];

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SharedUsersBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the bucket at index `lcg(seed) mod 5`.
pub fn shared_users_bucket(ip_number: IpNumber) -> SharedUsersBucket {
    SharedUsersBucket::ORDERED[(ip_number.random() % 5) as usize]
}
