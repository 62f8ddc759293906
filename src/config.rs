use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    Fake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub http_timeout: Option<Duration>,
    pub source: SourceKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: None,
            source: SourceKind::Http,
        }
    }
}

impl AppConfig {
    /// Reads `LEAGUES_*` from the process environment. Call after the
    /// dotenv files have been loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let opt = |key: &str| {
            lookup(key).and_then(|val| {
                let trimmed = val.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let api_base = opt("LEAGUES_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let http_timeout = opt("LEAGUES_HTTP_TIMEOUT_SECS")
            .and_then(|val| val.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let source = match opt("LEAGUES_SOURCE")
            .map(|val| val.to_lowercase())
            .as_deref()
        {
            Some("fake") | Some("demo") => SourceKind::Fake,
            _ => SourceKind::Http,
        };

        Self {
            api_base,
            http_timeout,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{AppConfig, DEFAULT_API_BASE, SourceKind};

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_fixed_backend() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.http_timeout, None);
    }

    #[test]
    fn base_override_drops_trailing_slash() {
        let config = config_from(&[("LEAGUES_API_BASE", " http://api.local:9000/ ")]);
        assert_eq!(config.api_base, "http://api.local:9000");
    }

    #[test]
    fn slash_only_base_falls_back_to_default() {
        let config = config_from(&[("LEAGUES_API_BASE", "/")]);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn timeout_requires_positive_integer() {
        assert_eq!(
            config_from(&[("LEAGUES_HTTP_TIMEOUT_SECS", "15")]).http_timeout,
            Some(Duration::from_secs(15))
        );
        assert_eq!(
            config_from(&[("LEAGUES_HTTP_TIMEOUT_SECS", "0")]).http_timeout,
            None
        );
        assert_eq!(
            config_from(&[("LEAGUES_HTTP_TIMEOUT_SECS", "soon")]).http_timeout,
            None
        );
    }

    #[test]
    fn source_switch_is_case_insensitive() {
        assert_eq!(
            config_from(&[("LEAGUES_SOURCE", "FAKE")]).source,
            SourceKind::Fake
        );
        assert_eq!(
            config_from(&[("LEAGUES_SOURCE", "demo")]).source,
            SourceKind::Fake
        );
        assert_eq!(
            config_from(&[("LEAGUES_SOURCE", "sleeper")]).source,
            SourceKind::Http
        );
    }
}
