use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Malformed input supplied while building an [`Element`](super::Element)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
