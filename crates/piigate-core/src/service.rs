use crate::config::RedactionConfig;
use crate::error::Result;
use crate::pattern::PatternDefinition;
use crate::registry::PatternRegistry;
use crate::types::PatternMetadata;
use serde::Serialize;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// One detected category, paired with its metadata for downstream
/// classification and analytics. Carries no matched text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiiDetection {
    pub key: String,
    pub metadata: PatternMetadata,
}

/// The orchestrator: composes a configuration and a pattern registry into
/// the redact/detect operations.
///
/// Construction is cheap and side-effect free — build one per call context
/// and pass it by reference, there is no process-wide instance. All
/// operations are pure, synchronous, in-memory transformations; a stable
/// service is safe to share across threads.
#[derive(Debug, Clone)]
pub struct RedactionService {
    config: RedactionConfig,
    registry: PatternRegistry,
}

impl Default for RedactionService {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}

impl RedactionService {
    /// Service over the built-in catalog plus the config's custom patterns.
    pub fn new(config: RedactionConfig) -> Self {
        Self::with_registry(config, PatternRegistry::with_builtins())
    }

    /// Service over an explicit registry; custom patterns from the config
    /// are merged in, replacing same-key entries.
    pub fn with_registry(config: RedactionConfig, mut registry: PatternRegistry) -> Self {
        for definition in config.custom_patterns() {
            registry.register(definition.clone());
        }
        Self { config, registry }
    }

    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    /// Locale and allow-list changes through here apply on the next call;
    /// the filtered, sorted pattern list is never cached.
    pub fn config_mut(&mut self) -> &mut RedactionConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Mask every enabled, locale-eligible PII category in `text` using the
    /// configured placeholder template.
    pub fn redact(&self, text: &str) -> Result<String> {
        self.redact_with(text, self.config.placeholder_template())
    }

    /// Like [`redact`](Self::redact) with an explicit template override.
    ///
    /// The pipeline is a strictly sequential fold over the candidate
    /// patterns sorted ascending by priority: later patterns only ever see
    /// the output of earlier ones. That ordering is the overlap-resolution
    /// mechanism — the earliest-priority pattern wins a contested span.
    pub fn redact_with(&self, text: &str, template: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(text.to_string());
        }

        let mut candidates: Vec<&PatternDefinition> = self
            .registry
            .for_locale(self.config.locale())
            .into_iter()
            .filter(|definition| self.config.enabled_patterns().allows(definition.key()))
            .collect();
        candidates.sort_by_key(|definition| definition.priority());

        let mut current = text.to_string();
        for definition in candidates {
            trace!(key = definition.key(), "applying redaction pass");
            let next = match definition.redact(&current, template) {
                Ok(next) => next,
                Err(err) => {
                    // Fail closed: wipe the working text instead of letting
                    // a partially redacted copy linger.
                    current.zeroize();
                    return Err(err);
                }
            };
            if next != current {
                debug!(key = definition.key(), "pattern redacted text");
            }
            // The superseded text may still hold PII a later pass would
            // have masked; wipe it as the fold advances.
            let mut superseded = std::mem::replace(&mut current, next);
            superseded.zeroize();
        }

        Ok(current)
    }

    /// Whether `text` contains anything the locale-eligible catalog knows
    /// about. Short-circuits on the first match.
    ///
    /// Deliberately ignores `enabled_patterns`: detection answers "could
    /// this contain PII", independent of the current redaction policy.
    pub fn contains_pii(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.registry
            .for_locale(self.config.locale())
            .iter()
            .any(|definition| definition.is_match(text))
    }

    /// Keys of every locale-eligible pattern that matches, in registry
    /// iteration order. Ignores `enabled_patterns`, like
    /// [`contains_pii`](Self::contains_pii).
    pub fn detect_pii_types(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.registry
            .for_locale(self.config.locale())
            .into_iter()
            .filter(|definition| definition.is_match(text))
            .map(|definition| definition.key().to_string())
            .collect()
    }

    /// Same as [`detect_pii_types`](Self::detect_pii_types), with each key
    /// paired with its metadata.
    pub fn detect_pii_with_metadata(&self, text: &str) -> Vec<PiiDetection> {
        if text.is_empty() {
            return Vec::new();
        }
        self.registry
            .for_locale(self.config.locale())
            .into_iter()
            .filter(|definition| definition.is_match(text))
            .map(|definition| PiiDetection {
                key: definition.key().to_string(),
                metadata: definition.metadata().clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys;
    use crate::config::EnabledPatterns;
    use crate::error::Error;
    use crate::strategy::RedactionStrategy;
    use crate::types::Locale;
    use std::sync::Arc;

    #[test]
    fn empty_text_passes_through_untouched() {
        let service = RedactionService::default();
        assert_eq!(service.redact("").unwrap(), "");
        assert!(!service.contains_pii(""));
        assert!(service.detect_pii_types("").is_empty());
        assert!(service.detect_pii_with_metadata("").is_empty());
    }

    #[test]
    fn custom_pattern_replaces_builtin_with_same_key() {
        let strict_email = PatternDefinition::new(keys::EMAIL, r"\b\w+@corp\.example\b")
            .unwrap()
            .with_priority(10);
        let config = RedactionConfig::builder()
            .register_pattern(strict_email)
            .build();
        let service = RedactionService::new(config);

        assert_eq!(service.registry().len(), 12);
        let out = service.redact("mail alice@corp.example today").unwrap();
        assert_eq!(out, "mail [EMAIL_REDACTED] today");
        // The loose built-in shape no longer matches as `email` (the URL
        // pattern may still claim the host part).
        let types = service.detect_pii_types("reach other@example.org today");
        assert!(!types.contains(&keys::EMAIL.to_string()));
    }

    #[test]
    fn failing_custom_strategy_aborts_the_call() {
        let broken = PatternDefinition::new("broken", r"zzz")
            .unwrap()
            .with_priority(1)
            .with_strategy(RedactionStrategy::Custom(Arc::new(|_, _, _, _| {
                Err("strategy offline".into())
            })));
        let config = RedactionConfig::builder().register_pattern(broken).build();
        let service = RedactionService::new(config);

        let err = service.redact("zzz and test@example.com").unwrap_err();
        assert!(matches!(err, Error::RedactionFailed { key, .. } if key == "broken"));
    }

    #[test]
    fn config_changes_apply_on_next_call() {
        let mut service = RedactionService::default();
        assert_eq!(service.redact("ZIP: 90210").unwrap(), "ZIP: [ZIP_CODE_REDACTED]");

        service.config_mut().set_locale(Locale::en_ca());
        assert_eq!(service.redact("ZIP: 90210").unwrap(), "ZIP: 90210");

        service
            .config_mut()
            .set_enabled_patterns(EnabledPatterns::only([keys::EMAIL]));
        service.config_mut().set_locale(Locale::en_us());
        assert_eq!(service.redact("ZIP: 90210").unwrap(), "ZIP: 90210");
    }
}
