use thiserror::Error;

#[derive(Error, Debug)]
pub enum BmiError {
    #[error("Arithmetic error: {message}")]
    Arithmetic { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BmiError {
    pub fn division_by_zero() -> Self {
        BmiError::Arithmetic {
            message: "division by zero".to_string(),
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, BmiError::Arithmetic { .. })
    }
}

pub type Result<T> = std::result::Result<T, BmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        let err = BmiError::division_by_zero();
        assert!(err.is_arithmetic());
        assert_eq!(err.to_string(), "Arithmetic error: division by zero");
    }

    #[test]
    fn test_io_error_is_not_arithmetic() {
        let err: BmiError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_arithmetic());
        assert!(err.to_string().starts_with("IO error"));
    }
}
