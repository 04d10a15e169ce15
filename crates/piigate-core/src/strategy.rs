use crate::error::{Error, Result};
use regex::{Captures, NoExpand, Regex};
use std::fmt;
use std::sync::Arc;

/// Signature for caller-supplied strategies: `(text, matcher, key, template)`.
///
/// An `Err` aborts the whole redaction call — the engine fails closed rather
/// than returning partially redacted text.
pub type CustomStrategyFn = dyn Fn(&str, &Regex, &str, &str) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>
    + Send
    + Sync;

/// How a raw pattern match is turned into masked output.
///
/// A closed set of built-ins plus `Custom` as the extension point, bound to a
/// pattern at registration time.
#[derive(Clone)]
pub enum RedactionStrategy {
    /// Every match is replaced wholesale by the rendered placeholder.
    Default,
    /// The matcher carries two alternative capture groups (a free-standing
    /// capitalized name, or a name following a cue phrase); only the captured
    /// span inside each match is replaced, cue words and punctuation around
    /// it survive.
    NameAware,
    /// Same observable contract as `Default`. Split out so phone formatting
    /// normalization can land later without touching the generic strategy.
    PhoneAware,
    /// Caller-supplied strategy.
    Custom(Arc<CustomStrategyFn>),
}

impl fmt::Debug for RedactionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::NameAware => f.write_str("NameAware"),
            Self::PhoneAware => f.write_str("PhoneAware"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Words that may open a sentence with the same surface shape as a
/// capitalized name. A free-standing name capture starting with one of these
/// is left alone.
const SENTENCE_STARTERS: &[&str] = &[
    "My", "The", "A", "An", "I", "Name", "This", "That", "These", "Those", "Contact", "Postal",
    "Email", "Phone", "Address", "Date", "Reset", "Vision", "Coverage", "Massage", "Dental",
    "Hello", "Hi", "Hey", "Greetings", "Welcome",
];

impl RedactionStrategy {
    /// Render the placeholder for `key`: the first `%s` slot takes the
    /// upper-cased key. A template without a slot is a constant placeholder.
    pub fn render_placeholder(template: &str, key: &str) -> String {
        template.replacen("%s", &key.to_uppercase(), 1)
    }

    /// Apply this strategy to `text`, producing the next pipeline text.
    pub fn apply(&self, text: &str, matcher: &Regex, key: &str, template: &str) -> Result<String> {
        match self {
            Self::Default | Self::PhoneAware => {
                let placeholder = Self::render_placeholder(template, key);
                // NoExpand: placeholders are literal, `$` in a template must
                // not be treated as a capture reference.
                Ok(matcher
                    .replace_all(text, NoExpand(placeholder.as_str()))
                    .into_owned())
            }
            Self::NameAware => {
                let placeholder = Self::render_placeholder(template, key);
                Ok(replace_captured_name(text, matcher, &placeholder))
            }
            Self::Custom(strategy) => {
                strategy(text, matcher, key, template).map_err(|source| Error::RedactionFailed {
                    key: key.to_string(),
                    message: source.to_string(),
                })
            }
        }
    }
}

fn starts_with_sentence_starter(captured: &str) -> bool {
    let first_word = captured.split_whitespace().next().unwrap_or("");
    SENTENCE_STARTERS
        .iter()
        .any(|starter| starter.eq_ignore_ascii_case(first_word))
}

/// Replace only the captured name span inside each match, keeping the rest of
/// the match (cue phrase, sentence punctuation) verbatim. Group 1 is the
/// free-standing alternative and is subject to the sentence-starter stop
/// list; group 2 follows an explicit cue phrase and always masks.
fn replace_captured_name(text: &str, matcher: &Regex, placeholder: &str) -> String {
    matcher
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let whole_start = caps.get(0).map(|m| m.start()).unwrap_or(0);

            let mask_span = |span: regex::Match<'_>| {
                let mut masked = String::with_capacity(whole.len() + placeholder.len());
                masked.push_str(&whole[..span.start() - whole_start]);
                masked.push_str(placeholder);
                masked.push_str(&whole[span.end() - whole_start..]);
                masked
            };

            if let Some(span) = caps.get(1) {
                if starts_with_sentence_starter(span.as_str()) {
                    whole.to_string()
                } else {
                    mask_span(span)
                }
            } else if let Some(span) = caps.get(2) {
                mask_span(span)
            } else {
                placeholder.to_string()
            }
        })
        .into_owned()
}
