//! Provider keyword tables.
//!
//! Matching is lowercase substring containment against the ISP and
//! organization names. The tables are a fixed, versioned constant: short
//! entries such as `"cloud"`, `"ocn"`, `"mts"` or `"wow"` match loosely, and
//! that is kept as-is.

/// Version of the keyword tables, bumped whenever either list changes.
pub const KEYWORD_TABLE_VERSION: u32 = 1;

/// Cloud, hosting and transit providers.
pub const CLOUD_PROVIDERS: &[&str] = &[
    "aws",
    "amazon",
    "microsoft",
    "azure",
    "google",
    "cloud",
    "alibaba",
    "tencent",
    "digitalocean",
    "vultr",
    "linode",
    "cloudflare",
    "ovh",
    "hetzner",
    "scaleway",
    "rackspace",
    "ibm cloud",
    "oracle cloud",
    "akari networks",
    "choopa",
    "psychz",
    "quadranet",
    "cogent",
    "level3",
    "hurricane electric",
    "leaseweb",
    "servermani",
    "zenlayer",
    "gthost",
    "hostinger",
    "contabo",
    "ionos",
    "godaddy",
    "namecheap",
    "bluehost",
    "hostgator",
    "siteground",
    "dreamhost",
    "inmotion",
    "a2hosting",
    "hostmonster",
    "justhost",
    "fatcow",
    "ipage",
    "startlogic",
    "hostpapa",
    "greengeeks",
    "hostwinds",
    "interserver",
    "namehero",
    "fastcomet",
];

/// Residential broadband and mobile carriers.
pub const HOME_ISPS: &[&str] = &[
    "chinanet",
    "hinet",
    "at&t",
    "verizon",
    "comcast",
    "bt group",
    "deutsche telekom",
    "orange",
    "telefonica",
    "vodafone",
    "ntt",
    "kddi",
    "softbank",
    "sk broadband",
    "kt corporation",
    "rostelecom",
    "mts",
    "beeline",
    "turkcell",
    "etisalat",
    "saudi telecom",
    "bharti airtel",
    "reliance jio",
    "china telecom",
    "china unicom",
    "china mobile",
    "chunghwa telecom",
    "so-net",
    "biglobe",
    "ocn",
    "plala",
    "asahi-net",
    "dti",
    "wakwak",
    "hi-ho",
    "excite",
    "nifty",
    "tikitiki",
    "cox communications",
    "charter spectrum",
    "centurylink",
    "frontier",
    "windstream",
    "mediacom",
    "suddenlink",
    "optimum",
    "rcn",
    "wow",
    "metronet",
];

/// True when any keyword occurs in the lowercased `isp` or `org`.
pub fn matches_any(keywords: &[&str], isp: &str, org: &str) -> bool {
    let isp = isp.to_lowercase();
    let org = org.to_lowercase();
    keywords
        .iter()
        .any(|keyword| isp.contains(keyword) || org.contains(keyword))
}
