//! Location line, country flag and ASN line.

use crate::lookup::RawLookupRecord;

/// Country name the lookup API returns for Taiwan in some locales
const ROC_COUNTRY_NAME: &str = "中華民國";
/// Replacement shown instead of [`ROC_COUNTRY_NAME`]
const CHINA_COUNTRY_NAME: &str = "中国";

/// Region names like "Bavaria or Free State of Bavaria" are cut here.
const REGION_ALTERNATIVE_SEPARATOR: &str = " or ";

/// Glyph for country codes missing from [`FLAGS`]
pub const UNKNOWN_FLAG: &str = "🌍";

const FLAGS: &[(&str, &str)] = &[
    ("CN", "🇨🇳"),
    ("US", "🇺🇸"),
    ("JP", "🇯🇵"),
    ("KR", "🇰🇷"),
    ("TW", "🇹🇼"),
    ("HK", "🇭🇰"),
    ("SG", "🇸🇬"),
    ("GB", "🇬🇧"),
    ("DE", "🇩🇪"),
    ("FR", "🇫🇷"),
    ("CA", "🇨🇦"),
    ("AU", "🇦🇺"),
    ("RU", "🇷🇺"),
    ("IN", "🇮🇳"),
    ("BR", "🇧🇷"),
];

/// Flag glyph for an ISO country code.
///
/// Lookup is exact (upper-case codes, as the API returns them). Unknown codes
/// get [`UNKNOWN_FLAG`]; an empty code gets an empty string.
pub fn country_flag(country_code: &str) -> &'static str {
    if country_code.is_empty() {
        return "";
    }
    FLAGS
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, flag)| *flag)
        .unwrap_or(UNKNOWN_FLAG)
}

fn country_display(country: &str) -> &str {
    if country == ROC_COUNTRY_NAME {
        CHINA_COUNTRY_NAME
    } else {
        country
    }
}

fn region_display(region_name: &str) -> &str {
    region_name
        .split(REGION_ALTERNATIVE_SEPARATOR)
        .next()
        .unwrap_or(region_name)
}

/// Builds the one-line location string.
///
/// `flag continent country region city`, followed by district and zip when
/// present. Only the ends are trimmed; empty middle fields leave their
/// separating spaces in place.
pub fn format_location(record: &RawLookupRecord) -> String {
    let mut location = format!(
        "{} {} {} {} {}",
        country_flag(&record.country_code),
        record.continent,
        country_display(&record.country),
        region_display(&record.region_name),
        record.city
    );

    if !record.district.is_empty() {
        location.push(' ');
        location.push_str(&record.district);
    }
    if !record.zip.is_empty() {
        location.push(' ');
        location.push_str(&record.zip);
    }

    location.trim().to_string()
}

/// `"<as> <asname>"`, trimmed.
pub fn asn_info(record: &RawLookupRecord) -> String {
    format!("{} {}", record.as_number, record.as_name)
        .trim()
        .to_string()
}
