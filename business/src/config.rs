use std::any::Any;
use std::env::vars;

use log::info;
use roster_states::State;
use serde::Deserialize;

/// Connection settings for the team store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`. Empty means unconfigured.
    pub url: String,
    /// Anon/service key, sent as `apikey` and bearer token when present.
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_store_url: String,
    roster_store_key: Option<String>,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Reads `ROSTER_STORE_URL` and optional `ROSTER_STORE_KEY`.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading store configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<S: AsRef<str>>(vars: impl IntoIterator<Item = (S, S)>) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_store_url,
            roster_store_key,
        } = raw;

        let url = roster_store_url.trim().to_owned();
        if url.is_empty() {
            anyhow::bail!("ROSTER_STORE_URL must not be empty");
        }

        Ok(Self {
            url,
            api_key: roster_store_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// REST endpoint of `table`: `{url}/rest/v1/{table}`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url.trim().trim_end_matches('/'))
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl State for StoreConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_url_and_key() {
        let config = StoreConfig::from_vars(vec![
            ("ROSTER_STORE_URL", "https://abc.supabase.co"),
            ("ROSTER_STORE_KEY", "anon-key"),
        ])
        .expect("config should load");

        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.api_key(), Some("anon-key"));
    }

    #[test]
    fn key_is_optional() {
        let config = StoreConfig::from_vars(vec![("ROSTER_STORE_URL", "http://localhost:54321")])
            .expect("config should load without a key");

        assert!(config.api_key().is_none());
        assert!(config.is_configured());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = StoreConfig::from_vars(vec![
            ("ROSTER_STORE_URL", "http://localhost:54321"),
            ("ROSTER_STORE_KEY", "  "),
        ])
        .expect("config should load");

        assert!(config.api_key().is_none());
    }

    #[test]
    fn url_is_required() {
        let result = StoreConfig::from_vars(Vec::<(&str, &str)>::new());
        assert!(result.is_err());
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = StoreConfig::from_vars(vec![("ROSTER_STORE_URL", " ")])
            .expect_err("blank url must fail");
        assert!(err.to_string().contains("ROSTER_STORE_URL"));
    }

    #[test]
    fn rest_url_trims_trailing_slash() {
        let config = StoreConfig::new("https://abc.supabase.co/");
        assert_eq!(
            config.rest_url("team_members"),
            "https://abc.supabase.co/rest/v1/team_members"
        );
    }

    #[test]
    fn default_is_unconfigured() {
        assert!(!StoreConfig::default().is_configured());
    }
}
