use crate::error::{Error, Result};
use crate::strategy::RedactionStrategy;
use crate::types::{LocaleScope, PatternMetadata};
use regex::Regex;

/// Priority assigned when a definition does not specify one. Custom patterns
/// default past the whole built-in catalog so structural patterns keep
/// first claim on contested spans.
pub const DEFAULT_PRIORITY: i32 = 50;

/// Immutable description of one detectable PII category.
///
/// Lower `priority` runs earlier in the redaction pipeline; ties are broken
/// by registry insertion order. Replacement happens by registering a new
/// definition under the same key, never by mutating one in place.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    key: String,
    matcher: Regex,
    priority: i32,
    locale_scope: LocaleScope,
    metadata: PatternMetadata,
    strategy: RedactionStrategy,
}

impl PatternDefinition {
    /// Compile `pattern` and build a definition with defaults: priority 50,
    /// all locales, empty metadata, the generic substitution strategy.
    ///
    /// A malformed pattern fails here, at registration time — the engine
    /// never silently skips an invalid matcher.
    pub fn new(key: impl Into<String>, pattern: &str) -> Result<Self> {
        let key = key.into();
        let matcher = Regex::new(pattern).map_err(|source| Error::InvalidMatcher {
            key: key.clone(),
            source,
        })?;
        Ok(Self {
            key,
            matcher,
            priority: DEFAULT_PRIORITY,
            locale_scope: LocaleScope::All,
            metadata: PatternMetadata::default(),
            strategy: RedactionStrategy::Default,
        })
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_locale(mut self, scope: LocaleScope) -> Self {
        self.locale_scope = scope;
        self
    }

    pub fn with_metadata(mut self, metadata: PatternMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_strategy(mut self, strategy: RedactionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn locale_scope(&self) -> &LocaleScope {
        &self.locale_scope
    }

    pub fn metadata(&self) -> &PatternMetadata {
        &self.metadata
    }

    pub fn strategy(&self) -> &RedactionStrategy {
        &self.strategy
    }

    /// True if this category's shape occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Run this pattern's strategy over `text`.
    pub fn redact(&self, text: &str, template: &str) -> Result<String> {
        self.strategy.apply(text, &self.matcher, &self.key, template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Locale;

    #[test]
    fn malformed_matcher_is_a_registration_error() {
        let err = PatternDefinition::new("badge_id", r"([0-9]{4}").unwrap_err();
        assert!(matches!(err, Error::InvalidMatcher { key, .. } if key == "badge_id"));
    }

    #[test]
    fn defaults_apply_everywhere_with_generic_strategy() {
        let def = PatternDefinition::new("badge_id", r"ID-\d{4}").unwrap();
        assert_eq!(def.priority(), DEFAULT_PRIORITY);
        assert!(def.locale_scope().applies_to(&Locale::new("fr_fr")));
        assert!(matches!(def.strategy(), RedactionStrategy::Default));
    }

    #[test]
    fn redact_uses_bound_strategy_and_key() {
        let def = PatternDefinition::new("badge_id", r"ID-\d{4}").unwrap();
        let out = def.redact("tag ID-1234 seen", "[%s_REDACTED]").unwrap();
        assert_eq!(out, "tag [BADGE_ID_REDACTED] seen");
    }
}
