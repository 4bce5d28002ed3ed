use thiserror::Error;

/// Core error types for Swatchbook
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme document is not syntactically valid JSON
    #[error("Invalid theme JSON: {0}")]
    Document(#[from] serde_json::Error),

    /// A color string could not be parsed
    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),
}

/// Per-entry color parsing errors
///
/// These are never fatal to a whole extraction: the offending entry is
/// skipped and reported, and the remaining entries proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid {component} component in {value}")]
    InvalidComponent { component: &'static str, value: String },

    #[error("unknown color name: {0}")]
    UnknownName(String),

    #[error("unrecognized color notation: {0}")]
    UnrecognizedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
