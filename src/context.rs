//! Identifier context - the value set driving one generation invocation
//!
//! A context maps template-facing attribute names (`serviceName`,
//! `targetName`, `groupName`, ...) to values. Only string values take part
//! in placeholder substitution; anything else an orchestrator stashes in
//! the context is carried along untouched.

use std::collections::BTreeMap;

use crate::errors::{Error, Result};
use crate::naming::{PackageNameBreakdown, PathBreakdown};

// Re-exports (alphabetized)
pub use serde_json::Value as JsonValue;

/// Named identifier values available for substitution during one
/// generation invocation. Immutable once handed to a
/// [`Substitutor`](crate::substitution::Substitutor).
///
/// Keys are ordered so the derived substitution table is deterministic
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentifierContext {
    values: BTreeMap<String, JsonValue>,
}

impl IdentifierContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object value
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::configuration("identifier context must be a JSON object")
        })?;
        let values = object
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Self { values })
    }

    /// Add a value to the context
    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) {
        self.values.insert(key.into(), value);
    }

    /// Add a string value to the context
    pub fn insert_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), JsonValue::String(value.into()));
    }

    /// Look up a string value; non-string entries yield `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(JsonValue::as_str)
    }

    /// Check if an attribute exists
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate the string-valued entries in key order. Non-string entries
    /// are skipped; they never take part in substitution.
    pub fn string_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|v| (key.as_str(), v)))
    }

    /// Install the canonical attributes derived from a package name
    pub fn apply_package(&mut self, breakdown: &PackageNameBreakdown) {
        self.insert_str("packageName", &breakdown.package_name);
        self.insert_str("serviceName", &breakdown.service_name);
        self.insert_str("organizationName", &breakdown.organization_name);
        self.insert_str("sharedPackagePrefix", &breakdown.shared_package_prefix);
    }

    /// Install the canonical attributes derived from a target path
    pub fn apply_path(&mut self, breakdown: &PathBreakdown) {
        self.insert_str("groupName", &breakdown.group_name);
        self.insert_str("targetName", &breakdown.target_name);
    }
}

impl From<&PackageNameBreakdown> for IdentifierContext {
    fn from(breakdown: &PackageNameBreakdown) -> Self {
        let mut context = Self::new();
        context.apply_package(breakdown);
        context
    }
}
