//! Manual annotation entries as stored in the annotation file.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::AnnotateAddArgs;
use crate::profile::{IpType, NativeIpStatus, SharedUsersBucket};

/// Operator-provided overrides for one address.
///
/// Every field is optional; only fields that are present replace the engine's
/// values. Keys the type does not know are collected in `unknown` so they can
/// be reported, and are never merged or written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualAnnotation {
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_info: Option<String>,
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub asn_info: Option<String>,
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub asn_owner: Option<String>,
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization: Option<String>,
    #[serde(
        default,
        deserialize_with = "coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        deserialize_with = "label",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_type: Option<IpType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u32>,
    #[serde(
        default,
        rename = "isNativeIP",
        alias = "nativeIp",
        deserialize_with = "label",
        skip_serializing_if = "Option::is_none"
    )]
    pub native_ip: Option<NativeIpStatus>,
    #[serde(
        default,
        deserialize_with = "label",
        skip_serializing_if = "Option::is_none"
    )]
    pub shared_users: Option<SharedUsersBucket>,
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rdns: Option<String>,
    #[serde(
        default,
        deserialize_with = "text",
        skip_serializing_if = "Option::is_none"
    )]
    pub country_flag: Option<String>,
    #[serde(flatten, skip_serializing)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl ManualAnnotation {
    /// Names of keys that were present in the file but are not recognized.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// True when no override is set.
    pub fn is_empty(&self) -> bool {
        self.location_info.is_none()
            && self.asn_info.is_none()
            && self.asn_owner.is_none()
            && self.organization.is_none()
            && self.longitude.is_none()
            && self.latitude.is_none()
            && self.ip_type.is_none()
            && self.risk_score.is_none()
            && self.native_ip.is_none()
            && self.shared_users.is_none()
            && self.rdns.is_none()
            && self.country_flag.is_none()
    }
}

impl From<&AnnotateAddArgs> for ManualAnnotation {
    fn from(args: &AnnotateAddArgs) -> Self {
        ManualAnnotation {
            location_info: args.location.clone(),
            asn_info: args.asn.clone(),
            asn_owner: args.asn_owner.clone(),
            organization: args.organization.clone(),
            longitude: args.longitude,
            latitude: args.latitude,
            ip_type: args.ip_type,
            risk_score: args.risk_score,
            native_ip: args.native_ip,
            shared_users: args.shared_users,
            rdns: args.rdns.clone(),
            country_flag: args.country_flag.clone(),
            unknown: BTreeMap::new(),
        }
    }
}

/// Values the annotation editor writes for fields the operator left alone.
const PLACEHOLDERS: &[&str] = &["检测中...", "检测中", "正在加载..."];

/// True for empty strings and editor placeholders, which mean "not set".
pub fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !is_unset(value)))
}

/// Enum labels: unset values decode to `None`, anything else must name a
/// variant or one of its aliases.
fn label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !is_unset(&value) => {
            T::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(value.trim()))
                .map(Some)
        }
        _ => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

/// Coordinates were hand-edited as both `116.4` and `"116.4"`; an empty
/// string or placeholder means "not set".
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Coordinate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Coordinate::Number(value)) => Ok(Some(value)),
        Some(Coordinate::Text(text)) => {
            let text = text.trim();
            if is_unset(text) {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid coordinate: {text:?}")))
        }
    }
}
