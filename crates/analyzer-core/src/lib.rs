use std::time::Duration;
use thiserror::Error;

pub mod config_file;
pub mod display;
pub mod selected_file;
pub mod session;
pub mod surface;
pub mod transfer;

// Re-export for convenience
pub use display::DisplayContent;
pub use selected_file::{SelectedFile, display_name};
pub use session::{Completion, RequestId, Session};
pub use surface::UploadSurface;
pub use transfer::{ExtractionResponse, Extractor, HttpExtractor, upload_path};

/// Environment variable holding the extraction service endpoint.
pub const BACKEND_URL_ENV: &str = "ANALYZER_BACKEND_URL";

/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "ANALYZER_TIMEOUT_SECS";

/// Default per-request timeout. OCR on a large scan can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors produced by a single upload.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("no backend URL configured (set {BACKEND_URL_ENV} or [backend] url)")]
    MissingEndpoint,
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    MalformedResponse(String),
}

/// Resolved runtime configuration shared by the front-ends.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the extraction endpoint. `None` is allowed at startup;
    /// uploads then fail with [`UploadError::MissingEndpoint`].
    pub backend_url: Option<String>,
    pub timeout: Duration,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            theme: "hacker".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration: explicit values > env vars > config files > defaults.
    pub fn resolve(backend_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let file = config_file::load_config();
        Self::resolve_with(backend_url, timeout_secs, &file, |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`Config::resolve`] with an injectable file and environment.
    pub fn resolve_with(
        backend_url: Option<String>,
        timeout_secs: Option<u64>,
        file: &config_file::ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let backend = file.backend.as_ref();

        let backend_url = backend_url
            .or_else(|| env(BACKEND_URL_ENV))
            .or_else(|| backend.and_then(|b| b.url.clone()))
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let timeout_secs = timeout_secs
            .or_else(|| env(TIMEOUT_ENV).and_then(|v| v.parse().ok()))
            .or_else(|| backend.and_then(|b| b.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let theme = file
            .display
            .as_ref()
            .and_then(|d| d.theme.clone())
            .unwrap_or_else(|| "hacker".to_string());

        Self {
            backend_url,
            timeout: Duration::from_secs(timeout_secs),
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_file::{BackendConfig, ConfigFile};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn explicit_url_beats_env_and_file() {
        let file = ConfigFile {
            backend: Some(BackendConfig {
                url: Some("http://file/api/analyze".into()),
                timeout_secs: None,
            }),
            ..Default::default()
        };
        let config = Config::resolve_with(
            Some("http://flag/api/analyze".into()),
            None,
            &file,
            |_| Some("http://env/api/analyze".into()),
        );
        assert_eq!(config.backend_url.as_deref(), Some("http://flag/api/analyze"));
    }

    #[test]
    fn env_beats_file() {
        let file = ConfigFile {
            backend: Some(BackendConfig {
                url: Some("http://file/api/analyze".into()),
                timeout_secs: Some(5),
            }),
            ..Default::default()
        };
        let config = Config::resolve_with(None, None, &file, |key| match key {
            BACKEND_URL_ENV => Some("http://env/api/analyze".into()),
            _ => None,
        });
        assert_eq!(config.backend_url.as_deref(), Some("http://env/api/analyze"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_url_is_treated_as_missing() {
        let config = Config::resolve_with(Some("   ".into()), None, &ConfigFile::default(), no_env);
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let config = Config::resolve_with(None, None, &ConfigFile::default(), no_env);
        assert!(config.backend_url.is_none());
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.theme, "hacker");
    }

    #[test]
    fn unparsable_timeout_env_falls_through() {
        let config = Config::resolve_with(None, None, &ConfigFile::default(), |key| match key {
            TIMEOUT_ENV => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
