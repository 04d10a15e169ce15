//! Pattern-based PII redaction engine.
//!
//! piigate-core is the privacy enforcement point between user-supplied chat
//! text and an external text-generation provider: it detects and masks
//! personally identifiable information before the text leaves the process.
//! Detection is purely pattern-based — a priority-ordered catalog of
//! compiled regexes with per-category redaction strategies, filtered by the
//! active locale and an enabled-pattern allow-list.
//!
//! ```
//! use piigate_core::{RedactionConfig, RedactionService};
//!
//! let service = RedactionService::new(RedactionConfig::default());
//! let sanitized = service.redact("Contact me at john.doe@example.com")?;
//! assert_eq!(sanitized, "Contact me at [EMAIL_REDACTED]");
//! # Ok::<(), piigate_core::Error>(())
//! ```

pub mod catalog;
mod config;
mod error;
mod pattern;
mod registry;
mod service;
mod strategy;
mod types;

pub use config::{ConfigBuilder, EnabledPatterns, RedactionConfig};
pub use error::{Error, Result};
pub use pattern::{PatternDefinition, DEFAULT_PRIORITY};
pub use registry::PatternRegistry;
pub use service::{PiiDetection, RedactionService};
pub use strategy::{CustomStrategyFn, RedactionStrategy};
pub use types::{Category, Locale, LocaleScope, PatternMetadata, Severity};
