use crate::pattern::PatternDefinition;
use crate::types::Locale;
use std::collections::HashSet;

/// Which catalog entries participate in redaction. A closed allow-list:
/// `Only` restricts redaction to the named keys, everything else in the
/// catalog stays untouched. Detection probes deliberately ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnabledPatterns {
    All,
    Only(HashSet<String>),
}

impl EnabledPatterns {
    pub fn only<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::Only(keys.into_iter().map(Into::into).collect())
    }

    pub fn allows(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(keys) => keys.contains(key),
        }
    }
}

/// Caller-facing configuration: active locale, enabled-pattern allow-list,
/// default placeholder template, and custom pattern definitions merged into
/// the registry when a service is constructed.
///
/// Nothing derived from this is cached across calls, so setter changes take
/// effect on the next `redact`/`detect_*` call.
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    default_placeholder_template: String,
    locale: Locale,
    enabled_patterns: EnabledPatterns,
    custom_patterns: Vec<PatternDefinition>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            default_placeholder_template: "[%s_REDACTED]".to_string(),
            locale: Locale::en_us(),
            enabled_patterns: EnabledPatterns::All,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn placeholder_template(&self) -> &str {
        &self.default_placeholder_template
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn enabled_patterns(&self) -> &EnabledPatterns {
        &self.enabled_patterns
    }

    pub fn custom_patterns(&self) -> &[PatternDefinition] {
        &self.custom_patterns
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_enabled_patterns(&mut self, enabled: EnabledPatterns) {
        self.enabled_patterns = enabled;
    }

    pub fn set_placeholder_template(&mut self, template: impl Into<String>) {
        self.default_placeholder_template = template.into();
    }
}

/// Fluent builder for `RedactionConfig`.
///
/// Matcher validity is enforced upstream: custom definitions arrive here
/// already compiled via `PatternDefinition::new`, which is where a malformed
/// pattern fails.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: RedactionConfig,
}

impl ConfigBuilder {
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    pub fn enabled_patterns(mut self, enabled: EnabledPatterns) -> Self {
        self.config.enabled_patterns = enabled;
        self
    }

    pub fn placeholder_template(mut self, template: impl Into<String>) -> Self {
        self.config.default_placeholder_template = template.into();
        self
    }

    /// Add a custom definition. A definition with a key matching a built-in
    /// replaces it when the service merges the config into its registry.
    pub fn register_pattern(mut self, definition: PatternDefinition) -> Self {
        self.config.custom_patterns.push(definition);
        self
    }

    /// Remove a previously registered custom definition.
    pub fn unregister_pattern(mut self, key: &str) -> Self {
        self.config.custom_patterns.retain(|def| def.key() != key);
        self
    }

    pub fn build(self) -> RedactionConfig {
        self.config
    }
}
