use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::Duration;
use wasm_bindgen::JsValue;

pub(crate) const DISMISS_DELAY_MS: u32 = 5_000;
pub(crate) const SUCCESS_ALERT_SELECTOR: &str = ".alert-success";
pub(crate) const LOG_LEVEL: log::Level = log::Level::Info;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Page-level overrides, supplied as an object or JSON text with camelCase keys.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Config {
    /// Time between the document becoming ready and success alerts being closed.
    pub dismiss_delay_ms: u32,
    /// Selector used to find the alerts to close.
    pub alert_selector: String,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dismiss_delay_ms: DISMISS_DELAY_MS,
            alert_selector: SUCCESS_ALERT_SELECTOR.to_string(),
            log_level: LOG_LEVEL,
        }
    }
}

impl Config {
    pub fn from_json(input: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(input)?;
        if config.alert_selector.trim().is_empty() {
            return Err(Error::Config("alertSelector must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Reads a configuration passed in from page script. Strings are parsed as JSON text, other
    /// values are serialised with `JSON.stringify` first. `undefined` and `null` give the defaults.
    pub fn from_js(options: &JsValue) -> Result<Config> {
        if options.is_undefined() || options.is_null() {
            return Ok(Config::default());
        }
        match options.as_string() {
            Some(json) => Config::from_json(&json),
            None => Config::from_json(&String::from(js_sys::JSON::stringify(options)?)),
        }
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.dismiss_delay_ms))
    }
}

/// Makes `config` the process-wide configuration.
///
/// Only succeeds once, and only before anything has read the configuration. Dismissal reads it one
/// timer turn after the document is ready.
pub(crate) fn install(config: Config) -> Result<()> {
    let level = config.log_level;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("configuration is already in effect".to_string()))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

pub(crate) fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_second_success_alerts() {
        let config = Config::default();
        assert_eq!(Duration::from_secs(5), config.dismiss_delay());
        assert_eq!(".alert-success", config.alert_selector);
        assert_eq!(log::Level::Info, config.log_level);
    }

    #[test]
    fn fills_missing_keys_with_defaults() {
        let config =
            Config::from_json(r#"{ "dismissDelayMs": 2500 }"#).expect("could not parse config");
        assert_eq!(Duration::from_millis(2500), config.dismiss_delay());
        assert_eq!(SUCCESS_ALERT_SELECTOR, config.alert_selector);
    }

    #[test]
    fn parses_log_level_names() {
        let config =
            Config::from_json(r#"{ "logLevel": "debug", "alertSelector": ".toast-success" }"#)
                .expect("could not parse config");
        assert_eq!(log::Level::Debug, config.log_level);
        assert_eq!(".toast-success", config.alert_selector);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = Config::from_json(r#"{ "dismissDelay": 2500 }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_blank_selector() {
        let result = Config::from_json(r#"{ "alertSelector": "  " }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    // The only test touching the process-wide configuration.
    #[test]
    fn installed_config_wins_and_cannot_be_replaced() {
        let config = Config::from_json(r#"{ "dismissDelayMs": 1000, "logLevel": "warn" }"#)
            .expect("could not parse config");
        install(config).expect("could not install config");

        assert_eq!(Duration::from_secs(1), current().dismiss_delay());
        assert_eq!(log::LevelFilter::Warn, log::max_level());
        assert!(matches!(install(Config::default()), Err(Error::Config(_))));
        assert_eq!(Duration::from_secs(1), current().dismiss_delay());
    }
}
