//! Lookup table of railway, location and class codes

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Read-only mapping from human names to the numeric codes the API expects
///
/// The serialized form uses the three namespaces `ferrovia`, `locais` and
/// `classes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalog {
    #[serde(rename = "ferrovia", default)]
    railways: HashMap<String, u32>,
    #[serde(rename = "locais", default)]
    locations: HashMap<String, u32>,
    #[serde(rename = "classes", default)]
    classes: HashMap<String, u32>,
}

impl RouteCatalog {
    /// Create a catalog from the three namespaces
    #[must_use]
    pub fn new(
        railways: HashMap<String, u32>,
        locations: HashMap<String, u32>,
        classes: HashMap<String, u32>,
    ) -> Self {
        Self {
            railways,
            locations,
            classes,
        }
    }

    /// Add a railway entry
    #[must_use]
    pub fn with_railway(mut self, name: impl Into<String>, code: u32) -> Self {
        self.railways.insert(name.into(), code);
        self
    }

    /// Add a location entry
    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>, code: u32) -> Self {
        self.locations.insert(name.into(), code);
        self
    }

    /// Add a class entry
    #[must_use]
    pub fn with_class(mut self, name: impl Into<String>, code: u32) -> Self {
        self.classes.insert(name.into(), code);
        self
    }

    /// Code of a railway
    pub fn railway_code(&self, name: &str) -> Result<u32, DomainError> {
        lookup(&self.railways, "ferrovia", name)
    }

    /// Code of a station
    pub fn location_code(&self, name: &str) -> Result<u32, DomainError> {
        lookup(&self.locations, "locais", name)
    }

    /// Code of a travel class
    pub fn class_code(&self, name: &str) -> Result<u32, DomainError> {
        lookup(&self.classes, "classes", name)
    }

    /// Known station names, sorted
    #[must_use]
    pub fn location_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check whether every namespace is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.railways.is_empty() && self.locations.is_empty() && self.classes.is_empty()
    }
}

fn lookup(map: &HashMap<String, u32>, namespace: &str, name: &str) -> Result<u32, DomainError> {
    map.get(name)
        .copied()
        .ok_or_else(|| DomainError::unknown_key(namespace, name))
}
