use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

impl From<serde_json::Error> for StyleParseError {
    fn from(e: serde_json::Error) -> Self {
        StyleParseError::Parse(e.to_string())
    }
}
