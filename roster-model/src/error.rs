use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
    #[error("record identifier must not be empty")]
    EmptyId,
}

impl ModelError {
    pub(crate) fn unknown(
        kind: &'static str,
        value: &str,
        expected: &[&str],
    ) -> Self {
        ModelError::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
