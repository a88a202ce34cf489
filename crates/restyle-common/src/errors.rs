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
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache serialization error: {0}")]
    Serialize(String),

    #[error("cache entry too large: {size} bytes exceeds {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("cache backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RestyleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(String),

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

        let err = ConfigError::ValidationError("limits.max_rule_bytes = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: limits.max_rule_bytes = 0"
        );
    }

    #[test]
    fn cache_error_display() {
        let err = CacheError::TooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "cache entry too large: 2048 bytes exceeds 1024"
        );

        let err = CacheError::Backend("connection refused".into());
        assert_eq!(err.to_string(), "cache backend error: connection refused");
    }

    #[test]
    fn restyle_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: RestyleError = config_err.into();
        assert!(matches!(err, RestyleError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn restyle_error_from_cache() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only");
        let cache_err: CacheError = io_err.into();
        let err: RestyleError = cache_err.into();
        assert!(matches!(err, RestyleError::Cache(CacheError::Io(_))));
        assert!(err.to_string().contains("read only"));
    }

    #[test]
    fn restyle_error_other_variants() {
        let err = RestyleError::Settings("resolver offline".into());
        assert_eq!(err.to_string(), "settings error: resolver offline");

        let err = RestyleError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
