use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale tag gating region-specific patterns, e.g. `en_us` or `en_ca`.
///
/// Tags are free-form so callers can introduce their own jurisdictions; the
/// built-in catalog only distinguishes `en_us` and `en_ca`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn en_us() -> Self {
        Self::new("en_us")
    }

    pub fn en_ca() -> Self {
        Self::new("en_ca")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Which configuration locales a pattern is eligible under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocaleScope {
    /// Eligible everywhere.
    All,
    /// Eligible only when the active locale matches exactly.
    Only(Locale),
}

impl LocaleScope {
    pub fn applies_to(&self, locale: &Locale) -> bool {
        match self {
            Self::All => true,
            Self::Only(scoped) => scoped == locale,
        }
    }
}

/// Coarse PII classification. Introspection only — never consulted while
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Contact,
    Financial,
    GovernmentId,
    Location,
    Identity,
    Temporal,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Free-form attributes attached to a pattern for downstream classification
/// and analytics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub description: Option<String>,
}

impl PatternMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_all_applies_to_every_locale() {
        assert!(LocaleScope::All.applies_to(&Locale::en_us()));
        assert!(LocaleScope::All.applies_to(&Locale::new("fr_ca")));
    }

    #[test]
    fn scoped_pattern_requires_exact_locale() {
        let scope = LocaleScope::Only(Locale::en_ca());
        assert!(scope.applies_to(&Locale::en_ca()));
        assert!(!scope.applies_to(&Locale::en_us()));
    }

    #[test]
    fn metadata_serializes_snake_case() {
        let metadata = PatternMetadata::new()
            .category(Category::GovernmentId)
            .severity(Severity::High);
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["category"], "government_id");
        assert_eq!(value["severity"], "high");
    }
}
