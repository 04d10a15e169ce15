use thiserror::Error;

/// Failures the engine can surface.
///
/// Registration-time failures (`InvalidMatcher`) are configuration errors and
/// never occur once a service is constructed. `RedactionFailed` is fatal for
/// that call: partially redacted text is never returned, since it could still
/// carry PII a later pass would have caught.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid matcher for pattern `{key}`: {source}")]
    InvalidMatcher {
        key: String,
        #[source]
        source: regex::Error,
    },

    #[error("redaction failed at pattern `{key}`: {message}")]
    RedactionFailed { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_matcher_names_the_offending_key() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidMatcher {
            key: "badge_id".to_string(),
            source,
        };
        assert!(err.to_string().contains("badge_id"));
    }

    #[test]
    fn redaction_failed_carries_strategy_message() {
        let err = Error::RedactionFailed {
            key: "custom".to_string(),
            message: "normalizer unavailable".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("custom"));
        assert!(rendered.contains("normalizer unavailable"));
    }
}
