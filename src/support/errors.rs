use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl DomainError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidInput { field, .. } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for fare operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = DomainError::invalid_input("distance_km", "must not be negative");
        assert_eq!(err.to_string(), "Invalid input: distance_km must not be negative");
        assert_eq!(err.field(), "distance_km");
    }

    #[test]
    fn config_error_wraps_toml_parse_error() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(err.to_string().starts_with("Config parse error:"));
    }
}
