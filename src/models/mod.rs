//! Radio model descriptors, the built-in catalog and model selection.

pub mod catalog;
pub mod selector;

pub use catalog::CatalogModel;
pub use selector::ModelRef;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Language tag whose patterns are used unless another one is selected.
pub const DEFAULT_LANGUAGE_TAG: &str = "php";

/// Regex patterns keyed by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternSet(BTreeMap<String, String>);

impl PatternSet {
    /// A set holding one pattern under [`DEFAULT_LANGUAGE_TAG`].
    pub fn single(pattern: impl Into<String>) -> Self {
        let mut patterns = BTreeMap::new();
        patterns.insert(DEFAULT_LANGUAGE_TAG.to_string(), pattern.into());
        Self(patterns)
    }

    pub fn get(&self, language_tag: &str) -> Option<&str> {
        self.0.get(language_tag).map(String::as_str)
    }

    pub fn insert(&mut self, language_tag: impl Into<String>, pattern: impl Into<String>) {
        self.0.insert(language_tag.into(), pattern.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(tag, pattern)| (tag.as_str(), pattern.as_str()))
    }
}

impl From<&str> for PatternSet {
    fn from(pattern: &str) -> Self {
        Self::single(pattern)
    }
}

impl From<String> for PatternSet {
    fn from(pattern: String) -> Self {
        Self::single(pattern)
    }
}

impl From<BTreeMap<String, String>> for PatternSet {
    fn from(patterns: BTreeMap<String, String>) -> Self {
        Self(patterns)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PatternSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, pattern)| (tag.into(), pattern.into()))
                .collect(),
        )
    }
}

/// A supported radio/navigation unit and its input rules.
///
/// Everything except the active language tag is fixed at construction.
///
/// ```
/// use radio_code::models::RadioModel;
/// use radio_code::error::ErrorCode;
///
/// let model = RadioModel::new("ford-m-series", 6, "/^([0-9]{6})$/");
/// assert_eq!(model.validate("123456", None), ErrorCode::Success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioModel {
    name: String,
    serial_max_len: usize,
    serial_patterns: PatternSet,
    #[serde(default)]
    extra_max_len: usize,
    #[serde(default)]
    extra_patterns: Option<PatternSet>,
    #[serde(default = "default_language_tag")]
    language_tag: String,
}

fn default_language_tag() -> String {
    DEFAULT_LANGUAGE_TAG.to_string()
}

impl RadioModel {
    /// Create a model without an extra field.
    ///
    /// `serial_patterns` is either a single pattern (stored under
    /// [`DEFAULT_LANGUAGE_TAG`]) or a full [`PatternSet`].
    pub fn new(
        name: impl Into<String>,
        serial_max_len: usize,
        serial_patterns: impl Into<PatternSet>,
    ) -> Self {
        Self {
            name: name.into(),
            serial_max_len,
            serial_patterns: serial_patterns.into(),
            extra_max_len: 0,
            extra_patterns: None,
            language_tag: default_language_tag(),
        }
    }

    /// Add the extra field. A zero length disables it and drops the patterns.
    pub fn with_extra(
        mut self,
        extra_max_len: usize,
        extra_patterns: impl Into<PatternSet>,
    ) -> Self {
        let patterns = extra_patterns.into();
        self.extra_max_len = extra_max_len;
        self.extra_patterns = (extra_max_len != 0 && !patterns.is_empty()).then_some(patterns);
        self
    }

    pub fn with_language_tag(mut self, language_tag: impl Into<String>) -> Self {
        self.language_tag = language_tag.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serial_max_len(&self) -> usize {
        self.serial_max_len
    }

    pub fn extra_max_len(&self) -> usize {
        self.extra_max_len
    }

    /// Whether the model takes extra data (e.g. a supplier code).
    pub fn uses_extra(&self) -> bool {
        self.extra_max_len > 0
    }

    pub fn serial_patterns(&self) -> &PatternSet {
        &self.serial_patterns
    }

    pub fn extra_patterns(&self) -> Option<&PatternSet> {
        self.extra_patterns.as_ref()
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn set_language_tag(&mut self, language_tag: impl Into<String>) {
        self.language_tag = language_tag.into();
    }

    /// Serial pattern for the active language tag, or `""` when there is none.
    /// An empty pattern never matches.
    pub fn serial_pattern(&self) -> &str {
        self.serial_patterns.get(&self.language_tag).unwrap_or_default()
    }

    /// Extra pattern for the active language tag, if any.
    pub fn extra_pattern(&self) -> Option<&str> {
        self.extra_patterns.as_ref()?.get(&self.language_tag)
    }

    /// Validate a serial number and optional extra data without any network access.
    pub fn validate(&self, serial: &str, extra: Option<&str>) -> ErrorCode {
        crate::validation::validate(self, serial, extra)
    }
}

impl From<CatalogModel> for RadioModel {
    fn from(model: CatalogModel) -> Self {
        model.model()
    }
}

impl fmt::Display for RadioModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (serial: {} chars", self.name, self.serial_max_len)?;
        if self.uses_extra() {
            write!(f, ", extra: {} chars", self.extra_max_len)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pattern_uses_default_tag() {
        let model = RadioModel::new("renault-dacia", 4, "/^([A-Z]{1}[0-9]{3})$/");
        assert_eq!(model.language_tag(), DEFAULT_LANGUAGE_TAG);
        assert_eq!(model.serial_pattern(), "/^([A-Z]{1}[0-9]{3})$/");
        assert_eq!(model.extra_pattern(), None);
    }

    #[test]
    fn pattern_map_follows_language_tag() {
        let patterns: PatternSet = [("php", "/^([0-9]{4})$/"), ("python", "^([0-9]{4})$")]
            .into_iter()
            .collect();
        let mut model = RadioModel::new("fiat-daiichi", 4, patterns);
        assert_eq!(model.serial_pattern(), "/^([0-9]{4})$/");

        model.set_language_tag("python");
        assert_eq!(model.serial_pattern(), "^([0-9]{4})$");

        model.set_language_tag("cobol");
        assert_eq!(model.serial_pattern(), "");
    }

    #[test]
    fn language_tag_is_per_instance() {
        let a = RadioModel::new("a", 4, "^[0-9]{4}$");
        let b = a.clone().with_language_tag("js");
        assert_eq!(a.language_tag(), "php");
        assert_eq!(b.language_tag(), "js");
    }

    #[test]
    fn zero_extra_length_drops_patterns() {
        let model = RadioModel::new("a", 4, "^[0-9]{4}$").with_extra(0, "^[0-9]$");
        assert!(!model.uses_extra());
        assert!(model.extra_patterns().is_none());
    }

    #[test]
    fn extra_pattern_lookup() {
        let model = RadioModel::new("a", 4, "^[0-9]{4}$").with_extra(3, "^[A-Z]{3}$");
        assert_eq!(model.extra_pattern(), Some("^[A-Z]{3}$"));
        let model = model.with_language_tag("python");
        assert_eq!(model.extra_pattern(), None);
    }

    #[test]
    fn serde_defaults_language_tag() {
        let model: RadioModel = serde_json::from_value(serde_json::json!({
            "name": "jaguar-alpine",
            "serial_max_len": 5,
            "serial_patterns": {"php": "/^([0-9]{5})$/"}
        }))
        .unwrap();
        assert_eq!(model.language_tag(), "php");
        assert_eq!(model.validate("12345", None), ErrorCode::Success);
    }

    #[test]
    fn display_mentions_extra_only_when_used() {
        let model = RadioModel::new("a", 4, "^[0-9]{4}$");
        assert_eq!(model.to_string(), "a (serial: 4 chars)");
        let model = model.with_extra(2, "^..$");
        assert_eq!(model.to_string(), "a (serial: 4 chars, extra: 2 chars)");
    }
}
