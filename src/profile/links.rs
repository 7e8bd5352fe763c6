//! ISP and organization search links.

use serde::Serialize;

const SEARCH_BASE_URL: &str = "https://www.bing.com/search";

/// Which record field a link was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Isp,
    Org,
}

/// A network owner name with a web-search link for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerLink {
    pub kind: OwnerKind,
    pub name: String,
    pub search_url: String,
}

impl OwnerLink {
    /// Builds a link, or `None` when `name` is empty.
    pub fn new(kind: OwnerKind, name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(OwnerLink {
            kind,
            name: name.to_string(),
            search_url: search_url(name),
        })
    }

    /// `"(ISP/IDC) <name>"`
    pub fn display_text(&self) -> String {
        format!("(ISP/IDC) {}", self.name)
    }
}

fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{SEARCH_BASE_URL}?q={encoded}")
}
