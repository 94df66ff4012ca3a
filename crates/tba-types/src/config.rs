use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{errors::Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Settings for talking to the Bot API file endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileApiConfig {
    pub bot_token: String,
    /// Base URL without trailing slash.
    pub api_url: String,
    pub request_timeout: Duration,
    /// Directory for `download_temp` when the caller passes none.
    pub temp_dir: Option<PathBuf>,
}

impl FileApiConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            temp_dir: None,
        }
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = normalize_url(url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Load from `.env` (if present) and the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(".env"))
    }

    /// Like [`load`](Self::load) with an explicit dotenv path. A missing file is ignored.
    pub fn load_from(dotenv: &Path) -> Result<Self> {
        let contents = fs::read_to_string(dotenv).unwrap_or_default();
        Self::from_dotenv(&contents, |key| env::var(key).ok())
    }

    /// Build from dotenv `contents` layered under `env`; existing env values win.
    pub fn from_dotenv(contents: &str, env_lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = parse_dotenv(contents);
        Self::from_lookup(|key| env_lookup(key).or_else(|| file.get(key).cloned()))
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty).ok_or_else(|| {
            Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })?;

        let mut cfg = Self::new(bot_token);

        if let Some(url) = lookup("TELEGRAM_API_URL").and_then(non_empty) {
            cfg = cfg.with_api_url(url);
        }

        if let Some(raw) = lookup("TELEGRAM_REQUEST_TIMEOUT_MS").and_then(non_empty) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("TELEGRAM_REQUEST_TIMEOUT_MS is not a number: {raw}"))
            })?;
            cfg = cfg.with_timeout(Duration::from_millis(ms));
        }

        if let Some(dir) = lookup("TEMP_DIR").and_then(non_empty) {
            cfg = cfg.with_temp_dir(dir);
        }

        Ok(cfg)
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .filter(|(k, _)| !k.trim().is_empty())
        .map(|(k, v)| (k.trim().to_string(), unquote(v.trim()).to_string()))
        .collect()
}

fn unquote(val: &str) -> &str {
    for quote in ['"', '\''] {
        if val.len() >= 2 && val.starts_with(quote) && val.ends_with(quote) {
            return &val[1..val.len() - 1];
        }
    }
    val
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = FileApiConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = FileApiConfig::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "  ")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_apply() {
        let cfg = FileApiConfig::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")]))
            .unwrap();
        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.request_timeout, Duration::from_secs(60));
        assert_eq!(cfg.temp_dir, None);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = FileApiConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_API_URL", "http://localhost:8081/"),
            ("TELEGRAM_REQUEST_TIMEOUT_MS", "1500"),
            ("TEMP_DIR", "/var/tmp/tba"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_url, "http://localhost:8081");
        assert_eq!(cfg.request_timeout, Duration::from_millis(1500));
        assert_eq!(cfg.temp_dir, Some(PathBuf::from("/var/tmp/tba")));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = FileApiConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_REQUEST_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("soon")));
    }

    #[test]
    fn dotenv_fills_gaps_but_env_wins() {
        let dotenv = r#"
# local overrides
TELEGRAM_BOT_TOKEN="123:from-file"
TELEGRAM_API_URL='http://127.0.0.1:8081/'
TEMP_DIR = /tmp/tba
not a pair
=orphan
"#;
        let cfg = FileApiConfig::from_dotenv(
            dotenv,
            lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:from-env")]),
        )
        .unwrap();
        assert_eq!(cfg.bot_token, "123:from-env");
        assert_eq!(cfg.api_url, "http://127.0.0.1:8081");
        assert_eq!(cfg.temp_dir, Some(PathBuf::from("/tmp/tba")));
    }

    #[test]
    fn empty_dotenv_still_requires_token() {
        let err = FileApiConfig::from_dotenv("# nothing here\n", lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("TELEGRAM_BOT_TOKEN")));
    }
}
