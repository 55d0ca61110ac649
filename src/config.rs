// Application settings
//
// Design Decision: Environment variables with `.env` support
//
// Settings are read once at startup and are immutable afterwards. Everything
// has a default, so a bare checkout runs against local files in the working
// directory. `from_lookup` takes any key lookup, which keeps tests away from
// the process environment.

use crate::error::{Result, SeamsError};
use std::path::PathBuf;

/// Environment variable names
pub mod keys {
    pub const CONFIG_PATH: &str = "SEAMS_CONFIG_PATH";
    pub const PAYMENTS_API_URL: &str = "PAYMENTS_API_URL";
    pub const REVENUE_LEDGER_PATH: &str = "REVENUE_LEDGER_PATH";
    pub const REPORTS_DIR: &str = "REPORTS_DIR";
    pub const OUTBOX_DIR: &str = "OUTBOX_DIR";
    pub const MAIL_FROM: &str = "MAIL_FROM";
}

/// Runtime settings for the production adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Flat JSON config read by the user processor
    pub config_path: PathBuf,

    /// Base URL of the payment status API
    pub payments_api_url: String,

    /// JSON order ledger read by the revenue reader
    pub revenue_ledger_path: PathBuf,

    /// Directory acting as the report object store
    pub reports_dir: PathBuf,

    /// Directory receiving outgoing mail
    pub outbox_dir: PathBuf,

    /// Sender address on outgoing mail
    pub mail_from: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            payments_api_url: "https://api.payments.com".to_string(),
            revenue_ledger_path: PathBuf::from("orders.json"),
            reports_dir: PathBuf::from("reports"),
            outbox_dir: PathBuf::from("outbox"),
            mail_from: "sender@example.com".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment (and `.env` if present)
    ///
    /// Environment Variables (all optional):
    /// - SEAMS_CONFIG_PATH: defaults to config.json
    /// - PAYMENTS_API_URL: defaults to https://api.payments.com
    /// - REVENUE_LEDGER_PATH: defaults to orders.json
    /// - REPORTS_DIR: defaults to reports
    /// - OUTBOX_DIR: defaults to outbox
    /// - MAIL_FROM: defaults to sender@example.com
    ///
    /// # Errors
    /// - A variable is set but empty
    /// - PAYMENTS_API_URL is not an http(s) URL
    pub fn load() -> Result<Self> {
        // Load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let value = |key: &str| -> Result<Option<String>> {
            match lookup(key) {
                Some(v) if v.trim().is_empty() => Err(SeamsError::EnvError(format!(
                    "{} is set but empty",
                    key
                ))),
                other => Ok(other),
            }
        };

        let payments_api_url = value(keys::PAYMENTS_API_URL)?.unwrap_or(defaults.payments_api_url);
        if !(payments_api_url.starts_with("http://") || payments_api_url.starts_with("https://")) {
            return Err(SeamsError::ConfigError(format!(
                "{} must be an http(s) URL, got {:?}",
                keys::PAYMENTS_API_URL,
                payments_api_url
            )));
        }

        let mail_from = value(keys::MAIL_FROM)?.unwrap_or(defaults.mail_from);
        if !mail_from.contains('@') {
            return Err(SeamsError::ConfigError(format!(
                "{} must be an email address, got {:?}",
                keys::MAIL_FROM,
                mail_from
            )));
        }

        Ok(Self {
            config_path: value(keys::CONFIG_PATH)?
                .map(PathBuf::from)
                .unwrap_or(defaults.config_path),
            payments_api_url,
            revenue_ledger_path: value(keys::REVENUE_LEDGER_PATH)?
                .map(PathBuf::from)
                .unwrap_or(defaults.revenue_ledger_path),
            reports_dir: value(keys::REPORTS_DIR)?
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            outbox_dir: value(keys::OUTBOX_DIR)?
                .map(PathBuf::from)
                .unwrap_or(defaults.outbox_dir),
            mail_from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.config_path, PathBuf::from("config.json"));
    }

    #[test]
    fn test_custom_values() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("SEAMS_CONFIG_PATH", "/etc/seams/config.json"),
            ("PAYMENTS_API_URL", "http://localhost:8080"),
            ("REVENUE_LEDGER_PATH", "data/orders.json"),
            ("REPORTS_DIR", "out/reports"),
            ("OUTBOX_DIR", "out/mail"),
            ("MAIL_FROM", "reports@acme.test"),
        ]))
        .unwrap();

        assert_eq!(settings.config_path, PathBuf::from("/etc/seams/config.json"));
        assert_eq!(settings.payments_api_url, "http://localhost:8080");
        assert_eq!(settings.revenue_ledger_path, PathBuf::from("data/orders.json"));
        assert_eq!(settings.reports_dir, PathBuf::from("out/reports"));
        assert_eq!(settings.outbox_dir, PathBuf::from("out/mail"));
        assert_eq!(settings.mail_from, "reports@acme.test");
    }

    #[test]
    fn test_empty_value_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("REPORTS_DIR", "  ")]));

        match result {
            Err(SeamsError::EnvError(msg)) => assert!(msg.contains("REPORTS_DIR")),
            other => panic!("Expected EnvError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_http_payments_url_rejected() {
        let result = Settings::from_lookup(lookup_from(&[("PAYMENTS_API_URL", "ftp://payments")]));
        assert!(matches!(result, Err(SeamsError::ConfigError(_))));
    }

    #[test]
    fn test_mail_from_must_be_address() {
        let result = Settings::from_lookup(lookup_from(&[("MAIL_FROM", "nobody")]));
        assert!(matches!(result, Err(SeamsError::ConfigError(_))));
    }
}
