//! Prediction service endpoints and client settings.

use std::time::Duration;

/// Paths of the remote prediction service, relative to the base URL
pub struct Endpoints {
    pub upload: &'static str,
    pub predict: &'static str,
    pub model_info: &'static str,
}

/// The Master API Configuration
pub struct ApiConfig {
    /// Base URL used when neither the CLI nor the environment override it
    pub default_base_url: &'static str,
    /// Environment variable that overrides the default base URL
    pub base_url_env_var: &'static str,
    /// Name of the multipart field carrying the CSV
    pub file_field: &'static str,
    pub endpoints: Endpoints,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:8000/api",
    base_url_env_var: "FORECAST_API_URL",
    file_field: "file",
    endpoints: Endpoints {
        upload: "/upload",
        predict: "/predict",
        model_info: "/model-info",
    },
};

/// Runtime settings for the HTTP client, resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    /// `None` leaves the network stack default in place
    pub timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: API.default_base_url.to_string(),
            timeout: None,
        }
    }
}

impl ApiSettings {
    /// Resolve the base URL: CLI argument first, then environment, then default.
    pub fn resolve(
        cli_base_url: Option<&str>,
        env_base_url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let chosen = [cli_base_url, env_base_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(API.default_base_url);

        Self {
            base_url: chosen.trim_end_matches('/').to_string(),
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }

    /// Same as [`ApiSettings::resolve`], reading the override from the process environment.
    pub fn from_env(cli_base_url: Option<&str>, timeout_secs: Option<u64>) -> Self {
        let env_value = std::env::var(API.base_url_env_var).ok();
        Self::resolve(cli_base_url, env_value.as_deref(), timeout_secs)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_beats_env_and_default() {
        let settings = ApiSettings::resolve(
            Some("http://cli:9000/api/"),
            Some("http://env:8000/api"),
            None,
        );
        assert_eq!(settings.base_url, "http://cli:9000/api");
    }

    #[test]
    fn env_used_when_cli_missing_or_blank() {
        let settings = ApiSettings::resolve(Some("  "), Some("http://env:8000/api"), None);
        assert_eq!(settings.base_url, "http://env:8000/api");
    }

    #[test]
    fn falls_back_to_default() {
        let settings = ApiSettings::resolve(None, None, Some(0));
        assert_eq!(settings.base_url, API.default_base_url);
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let settings = ApiSettings::resolve(None, None, Some(30));
        assert_eq!(
            settings.endpoint(API.endpoints.predict),
            "http://localhost:8000/api/predict"
        );
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }
}
