use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PhylloError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("sphere.points = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: sphere.points = 3 is out of range"
        );
    }

    #[test]
    fn phyllo_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PhylloError = config_err.into();
        assert!(matches!(err, PhylloError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn phyllo_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PhylloError = io_err.into();
        assert!(matches!(err, PhylloError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn phyllo_error_other_variants() {
        let err = PhylloError::Serialize("bad float".into());
        assert_eq!(err.to_string(), "serialization error: bad float");

        let err = PhylloError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
