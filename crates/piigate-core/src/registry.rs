use crate::catalog;
use crate::pattern::PatternDefinition;
use crate::types::Locale;
use indexmap::IndexMap;

/// In-memory collection of pattern definitions, keyed by category.
///
/// Owns no text — purely a lookup/filter structure. Insertion order is
/// preserved and is the deterministic tie-break when priorities are equal;
/// registering over an existing key replaces the definition in place without
/// moving it. Intended to be populated once at startup and treated as
/// read-only afterwards; runtime catalog changes should swap in a fresh
/// snapshot rather than mutate a shared instance.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: IndexMap<String, PatternDefinition>,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl PatternRegistry {
    /// A registry with no catalog at all, for fully isolated setups.
    pub fn empty() -> Self {
        Self {
            patterns: IndexMap::new(),
        }
    }

    /// A registry pre-loaded with the built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for definition in catalog::builtin_definitions() {
            registry.register(definition);
        }
        registry
    }

    /// Insert or replace by key. Replacement keeps the original slot so
    /// iteration order stays stable across overrides.
    pub fn register(&mut self, definition: PatternDefinition) {
        self.patterns
            .insert(definition.key().to_string(), definition);
    }

    /// Remove a definition; no-op if the key is absent.
    pub fn unregister(&mut self, key: &str) -> Option<PatternDefinition> {
        self.patterns.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&PatternDefinition> {
        self.patterns.get(key)
    }

    /// Every definition, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.values()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The subset eligible under `locale`. This is the sole locale gate and
    /// must be applied before any priority sort.
    pub fn for_locale(&self, locale: &Locale) -> Vec<&PatternDefinition> {
        self.patterns
            .values()
            .filter(|definition| definition.locale_scope().applies_to(locale))
            .collect()
    }

    /// Every definition ascending by priority, stable for ties.
    pub fn sorted_by_priority(&self) -> Vec<&PatternDefinition> {
        let mut sorted: Vec<_> = self.patterns.values().collect();
        sorted.sort_by_key(|definition| definition.priority());
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys;

    #[test]
    fn builtins_are_loaded_at_construction() {
        let registry = PatternRegistry::with_builtins();
        assert_eq!(registry.len(), 12);
        assert!(registry.get(keys::EMAIL).is_some());
        assert!(registry.get(keys::NAME).is_some());
    }

    #[test]
    fn register_replaces_by_key_without_moving_it() {
        let mut registry = PatternRegistry::with_builtins();
        let first_key = registry.all().next().unwrap().key().to_string();
        assert_eq!(first_key, keys::EMAIL);

        let override_def = PatternDefinition::new(keys::EMAIL, r"@").unwrap();
        registry.register(override_def);

        assert_eq!(registry.len(), 12);
        assert_eq!(registry.all().next().unwrap().key(), keys::EMAIL);
        assert_eq!(registry.get(keys::EMAIL).unwrap().matcher().as_str(), "@");
    }

    #[test]
    fn unregister_is_a_no_op_when_absent() {
        let mut registry = PatternRegistry::with_builtins();
        assert!(registry.unregister("no_such_key").is_none());
        assert_eq!(registry.len(), 12);
        assert!(registry.unregister(keys::DATE).is_some());
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn for_locale_keeps_all_scope_and_exact_matches_only() {
        let registry = PatternRegistry::with_builtins();
        let ca: Vec<_> = registry
            .for_locale(&Locale::en_ca())
            .iter()
            .map(|d| d.key().to_string())
            .collect();
        assert!(ca.contains(&keys::EMAIL.to_string()));
        assert!(ca.contains(&keys::SIN.to_string()));
        assert!(ca.contains(&keys::POSTAL_CODE_CA.to_string()));
        assert!(!ca.contains(&keys::SSN.to_string()));
        assert!(!ca.contains(&keys::ZIP_CODE.to_string()));
    }

    #[test]
    fn priority_sort_is_stable_for_ties() {
        let mut registry = PatternRegistry::empty();
        registry.register(PatternDefinition::new("alpha", r"a").unwrap().with_priority(50));
        registry.register(PatternDefinition::new("beta", r"b").unwrap().with_priority(50));
        registry.register(PatternDefinition::new("gamma", r"g").unwrap().with_priority(10));

        let order: Vec<_> = registry
            .sorted_by_priority()
            .iter()
            .map(|d| d.key().to_string())
            .collect();
        assert_eq!(order, ["gamma", "alpha", "beta"]);
    }
}
