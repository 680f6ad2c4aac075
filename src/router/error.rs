#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid pattern: {pattern:?}")]
    InvalidPattern { pattern: String },
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_owned(),
        }
    }
}
