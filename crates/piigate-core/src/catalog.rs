//! Built-in pattern catalog.
//!
//! Priorities are ordered so the more structural pattern always runs first:
//! a category whose shape can be a substring of another's (digits inside a
//! credit card, an email inside a URL path) must claim its span before the
//! looser heuristics (`address`, `date`, `name`) get a chance to
//! false-positive on fragments. Locale-gated pairs (`sin`/`ssn`,
//! `postal_code_ca`/`zip_code`) are separate entries so each carries its own
//! gate and priority.

use crate::pattern::PatternDefinition;
use crate::strategy::RedactionStrategy;
use crate::types::{Category, Locale, LocaleScope, PatternMetadata, Severity};

/// Canonical keys of the built-in catalog.
pub mod keys {
    pub const EMAIL: &str = "email";
    pub const URL: &str = "url";
    pub const IP_ADDRESS: &str = "ip_address";
    pub const CREDIT_CARD: &str = "credit_card";
    pub const SIN: &str = "sin";
    pub const SSN: &str = "ssn";
    pub const PHONE: &str = "phone";
    pub const POSTAL_CODE_CA: &str = "postal_code_ca";
    pub const ZIP_CODE: &str = "zip_code";
    pub const ADDRESS: &str = "address";
    pub const DATE: &str = "date";
    pub const NAME: &str = "name";
}

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

const URL_PATTERN: &str =
    r"(?i)\b(?:https?://)?(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*";

const IP_ADDRESS_PATTERN: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";

const CREDIT_CARD_PATTERN: &str = r"\b(?:\d{4}[-\s]?){3}\d{4}\b";

// 3-3-3 digit grouping, Canadian Social Insurance Number shape.
const SIN_PATTERN: &str = r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{3}\b";

// 3-2-4 digit grouping, US Social Security Number shape.
const SSN_PATTERN: &str = r"\b\d{3}[-.\s]?\d{2}[-.\s]?\d{4}\b";

const PHONE_PATTERN: &str =
    r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b";

const POSTAL_CODE_CA_PATTERN: &str = r"(?i)\b[A-Z]\d[A-Z]\s?\d[A-Z]\d\b";

const ZIP_CODE_PATTERN: &str = r"\b\d{5}(?:-\d{4})?\b";

const ADDRESS_PATTERN: &str = r"(?i)\b\d+\s+[A-Z][a-z]+(?:\s+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Court|Ct|Place|Pl|Way|Circle|Cir|Crescent|Cres|Terrace|Terr))\b";

const DATE_PATTERN: &str = r"(?i)\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b";

// Group 1: free-standing capitalized 2-3 word sequence at line start or
// after sentence-ending punctuation (the sentence-starter stop list is
// applied by the name-aware strategy, since this engine has no lookahead).
// Group 2: sequence following a name-introducing cue phrase; the capture is
// case-insensitive on purpose, so a trailing conjunction is swallowed with
// the name rather than left dangling next to the placeholder.
const NAME_PATTERN: &str = r"(?m)(?:^|\.\s+)([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2})\b|(?i:(?:name is|I am|called|known as|Mr\.|Mrs\.|Ms\.|Dr\.)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}))\b";

// Built-in patterns are compile-time constants; failing to compile one is a
// programmer error, not a runtime condition.
fn builtin(key: &str, pattern: &str) -> PatternDefinition {
    PatternDefinition::new(key, pattern).expect("built-in pattern must compile")
}

/// The default catalog, in ascending-priority order. Insertion order is the
/// deterministic tie-break for equal priorities.
pub(crate) fn builtin_definitions() -> Vec<PatternDefinition> {
    vec![
        builtin(keys::EMAIL, EMAIL_PATTERN)
            .with_priority(10)
            .with_metadata(
                PatternMetadata::new()
                    .category(Category::Contact)
                    .description("Email addresses"),
            ),
        builtin(keys::URL, URL_PATTERN)
            .with_priority(12)
            .with_metadata(PatternMetadata::new().category(Category::Contact)),
        builtin(keys::IP_ADDRESS, IP_ADDRESS_PATTERN)
            .with_priority(13)
            .with_metadata(PatternMetadata::new().category(Category::Technical)),
        builtin(keys::CREDIT_CARD, CREDIT_CARD_PATTERN)
            .with_priority(15)
            .with_metadata(
                PatternMetadata::new()
                    .category(Category::Financial)
                    .severity(Severity::High),
            ),
        builtin(keys::SIN, SIN_PATTERN)
            .with_priority(16)
            .with_locale(LocaleScope::Only(Locale::en_ca()))
            .with_metadata(
                PatternMetadata::new()
                    .category(Category::GovernmentId)
                    .severity(Severity::High),
            ),
        builtin(keys::SSN, SSN_PATTERN)
            .with_priority(16)
            .with_locale(LocaleScope::Only(Locale::en_us()))
            .with_metadata(
                PatternMetadata::new()
                    .category(Category::GovernmentId)
                    .severity(Severity::High),
            ),
        builtin(keys::PHONE, PHONE_PATTERN)
            .with_priority(20)
            .with_strategy(RedactionStrategy::PhoneAware)
            .with_metadata(PatternMetadata::new().category(Category::Contact)),
        builtin(keys::POSTAL_CODE_CA, POSTAL_CODE_CA_PATTERN)
            .with_priority(25)
            .with_locale(LocaleScope::Only(Locale::en_ca()))
            .with_metadata(PatternMetadata::new().category(Category::Location)),
        builtin(keys::ZIP_CODE, ZIP_CODE_PATTERN)
            .with_priority(25)
            .with_locale(LocaleScope::Only(Locale::en_us()))
            .with_metadata(PatternMetadata::new().category(Category::Location)),
        builtin(keys::ADDRESS, ADDRESS_PATTERN)
            .with_priority(30)
            .with_metadata(PatternMetadata::new().category(Category::Location)),
        builtin(keys::DATE, DATE_PATTERN)
            .with_priority(35)
            .with_metadata(PatternMetadata::new().category(Category::Temporal)),
        builtin(keys::NAME, NAME_PATTERN)
            .with_priority(40)
            .with_strategy(RedactionStrategy::NameAware)
            .with_metadata(PatternMetadata::new().category(Category::Identity)),
    ]
}
