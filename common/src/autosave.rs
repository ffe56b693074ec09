//! Auto-save record
//!
//! Flat name -> value mapping persisted under one localStorage key.
//! File inputs and the anti-forgery token never enter the record; empty
//! values are skipped so restores don't blank fields the user has since
//! filled in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Field names that must never be persisted
pub const EXCLUDED_FIELDS: [&str; 2] = ["csrf_token", "images"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutosaveRecord {
    fields: BTreeMap<String, String>,
}

impl AutosaveRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field value, dropping excluded names and empty values.
    pub fn insert(&mut self, name: &str, value: &str) {
        if value.is_empty() || EXCLUDED_FIELDS.contains(&name) {
            return;
        }
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut record = AutosaveRecord::new();
        record.insert("make", "Toyota");
        assert_eq!(record.get("make"), Some("Toyota"));
        assert_eq!(record.get("model"), None);
    }

    #[test]
    fn test_excluded_fields_dropped() {
        let mut record = AutosaveRecord::new();
        record.insert("csrf_token", "deadbeef");
        record.insert("images", "front.jpg");
        record.insert("price", "25,000");
        assert_eq!(record.get("csrf_token"), None);
        assert_eq!(record.get("images"), None);
        assert_eq!(record.get("price"), Some("25,000"));
    }

    #[test]
    fn test_empty_values_skipped() {
        let mut record = AutosaveRecord::new();
        record.insert("description", "");
        assert!(record.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut record = AutosaveRecord::new();
        record.insert("make", "Toyota");
        record.insert("model", "Camry");
        let json = record.to_json().unwrap();
        let restored = AutosaveRecord::from_json(&json).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_json_is_flat_object() {
        let mut record = AutosaveRecord::new();
        record.insert("make", "Toyota");
        assert_eq!(record.to_json().unwrap(), r#"{"make":"Toyota"}"#);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AutosaveRecord::from_json("{not json").is_err());
    }
}
