use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("time of day out of range [0, 24): {0}")]
    OutOfRange(f64),

    #[error("invalid group at index {index}: {reason}")]
    InvalidGroup { index: usize, reason: String },

    #[error("invalid score bounds: {0}")]
    InvalidBounds(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    /// True for errors caused by caller-supplied values rather than the environment.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            RiskError::OutOfRange(_) | RiskError::InvalidGroup { .. } | RiskError::InvalidBounds(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_includes_value() {
        let err = RiskError::OutOfRange(24.0);
        assert_eq!(err.to_string(), "time of day out of range [0, 24): 24");
    }

    #[test]
    fn contract_violations_are_distinguished_from_io() {
        assert!(RiskError::OutOfRange(-1.0).is_contract_violation());
        assert!(RiskError::InvalidGroup {
            index: 0,
            reason: "x".to_string()
        }
        .is_contract_violation());
        let io = RiskError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!io.is_contract_violation());
    }
}
