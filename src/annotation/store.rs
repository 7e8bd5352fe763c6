//! Annotation file: a JSON object mapping IPv4 addresses to overrides.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::path::Path;

use log::{debug, info, warn};

use super::types::ManualAnnotation;
use crate::error_handling::AnnotationError;

/// Highest score an annotation may set.
pub const MAX_RISK_SCORE: u32 = 100;

/// In-memory copy of the annotation file, ordered by address string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    entries: BTreeMap<String, ManualAnnotation>,
}

fn validate(ip: &str, annotation: &ManualAnnotation) -> Result<(), AnnotationError> {
    if ip.parse::<Ipv4Addr>().is_err() {
        return Err(AnnotationError::InvalidAddress(ip.to_string()));
    }
    if let Some(score) = annotation.risk_score {
        if score > MAX_RISK_SCORE {
            return Err(AnnotationError::RiskScoreOutOfRange(score));
        }
    }
    Ok(())
}

impl AnnotationStore {
    /// Reads the annotation file at `path`.
    ///
    /// A missing file yields an empty store. Entries that do not decode, or
    /// that carry an invalid address or score, are skipped with a warning.
    /// Editor placeholders such as `"检测中..."` decode as unset fields.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or is not a
    /// JSON object.
    pub fn load(path: &Path) -> Result<Self, AnnotationError> {
        if !path.exists() {
            info!("No annotation file at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&contents)?;

        let mut entries = BTreeMap::new();
        for (ip, value) in raw {
            let annotation = match serde_json::from_value::<ManualAnnotation>(value) {
                Ok(annotation) => annotation,
                Err(e) => {
                    warn!("Skipping unreadable annotation for {:?}: {}", ip, e);
                    continue;
                }
            };
            if let Err(e) = validate(&ip, &annotation) {
                warn!("Skipping annotation for {:?}: {}", ip, e);
                continue;
            }
            for key in annotation.unknown_keys() {
                debug!("Ignoring unknown annotation key {:?} for {}", key, ip);
            }
            entries.insert(ip, annotation);
        }

        info!("Loaded {} annotation(s) from {}", entries.len(), path.display());
        Ok(AnnotationStore { entries })
    }

    /// Writes the store to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), AnnotationError> {
        let mut json = serde_json::to_string_pretty(&self.entries)?;
        json.push('\n');
        std::fs::write(path, json)?;
        debug!("Saved {} annotation(s) to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Adds or replaces the annotation for `ip`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` unless `ip` is an IPv4 literal, and
    /// `RiskScoreOutOfRange` for scores above 100.
    pub fn insert(&mut self, ip: &str, annotation: ManualAnnotation) -> Result<(), AnnotationError> {
        let ip = ip.trim();
        validate(ip, &annotation)?;
        self.entries.insert(ip.to_string(), annotation);
        Ok(())
    }

    /// Removes the annotation for `ip`, returning it if there was one.
    pub fn remove(&mut self, ip: &str) -> Option<ManualAnnotation> {
        self.entries.remove(ip.trim())
    }

    pub fn get(&self, ip: &str) -> Option<&ManualAnnotation> {
        self.entries.get(ip)
    }

    /// Annotated addresses in ascending string order.
    pub fn ips(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
