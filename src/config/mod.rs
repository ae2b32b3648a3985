mod models;

use std::{fs, path::Path};

use url::Url;

use crate::ubuntu::mirrors::{DEFAULT_AMD64_MIRRORS, DEFAULT_PORTS_MIRRORS};

pub use models::MirrorConfig; // Re-export the model type to callers.

// ---- Public API (serde hidden from callers) ----

impl MirrorConfig {
    /// Load from a JSON file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&data)
    }

    /// Load from a JSON string. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let parsed: MirrorConfig = serde_json::from_str(json).map_err(ConfigError::Json)?;
        parsed.validated()
    }

    /// Load from an env var containing JSON.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        let s = std::env::var(var).map_err(|_| ConfigError::MissingEnv(var.to_string()))?;
        Self::from_json_str(&s)
    }

    /// Check the mirror lists keep the default shape (amd64: primary then
    /// security, ports: one host), every base is an absolute http(s) URL, and
    /// the probe timeout is non-zero. Trailing slashes are dropped so
    /// candidates never contain `//`.
    fn validated(mut self) -> Result<Self, ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let lists = [
            (&mut self.amd64, "amd64", DEFAULT_AMD64_MIRRORS.len()),
            (&mut self.ports, "ports", DEFAULT_PORTS_MIRRORS.len()),
        ];
        for (list, name, expected) in lists {
            if list.len() != expected {
                return Err(ConfigError::MirrorCount {
                    list: name,
                    expected,
                    found: list.len(),
                });
            }
            for base in list.iter_mut() {
                let parsed = Url::parse(base).map_err(|e| ConfigError::InvalidUrl {
                    url: base.clone(),
                    reason: e.to_string(),
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::InvalidUrl {
                        url: base.clone(),
                        reason: format!("unsupported scheme '{}'", parsed.scheme()),
                    });
                }
                let trimmed = base.trim_end_matches('/').len();
                base.truncate(trimmed);
            }
        }
        Ok(self)
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid mirror URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("{list} mirrors: expected {expected} bases, found {found}")]
    MirrorCount {
        list: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_object_uses_defaults() {
        let config = MirrorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MirrorConfig::default());
        assert_eq!(config.amd64().len(), 2);
        assert_eq!(config.ports().len(), 1);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn overrides_and_trims_bases() {
        let config = MirrorConfig::from_json_str(
            r#"{"amd64": ["http://localhost:8080/pool/", "https://localhost:8443/pool"], "concurrency": 0}"#,
        )
        .unwrap();
        assert_eq!(
            config.amd64(),
            ["http://localhost:8080/pool".to_string(), "https://localhost:8443/pool".to_string()]
        );
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn rejects_bad_bases() {
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"ports": ["ftp://example.com/pool"]}"#),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"amd64": ["not a url", "http://example.com/pool"]}"#),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            MirrorConfig::from_json_str("[1, 2]"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn mirror_lists_keep_their_length() {
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"amd64": []}"#),
            Err(ConfigError::MirrorCount { list: "amd64", expected: 2, found: 0 })
        ));
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"amd64": ["http://a.example/l"]}"#),
            Err(ConfigError::MirrorCount { list: "amd64", expected: 2, found: 1 })
        ));
        assert!(matches!(
            MirrorConfig::from_json_str(
                r#"{"amd64": ["http://a.example/l", "http://b.example/l", "http://c.example/l"]}"#
            ),
            Err(ConfigError::MirrorCount { list: "amd64", expected: 2, found: 3 })
        ));
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"ports": ["http://a.example/l", "http://b.example/l"]}"#),
            Err(ConfigError::MirrorCount { list: "ports", expected: 1, found: 2 })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(matches!(
            MirrorConfig::from_json_str(r#"{"timeout_secs": 0}"#),
            Err(ConfigError::ZeroTimeout)
        ));
        assert_eq!(
            MirrorConfig::from_json_str(r#"{"timeout_secs": 1}"#).unwrap().timeout(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn missing_env_var_is_reported() {
        let err = MirrorConfig::from_env("UBUNTU_HEADERS_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ref v) if v == "UBUNTU_HEADERS_TEST_UNSET_VAR"));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            MirrorConfig::from_file("/nonexistent/ubuntu-headers/mirrors.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
