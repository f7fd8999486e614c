use crate::models::ListOrder;
use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings injected by the host page as `window.ENV`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EnvConfig {
    // Accept both `LOG_LEVEL` (README style) and `log_level`.
    #[serde(alias = "LOG_LEVEL")]
    pub log_level: String,

    #[serde(alias = "LIST_ORDER")]
    pub list_order: ListOrder,
}

impl EnvConfig {
    /// Reads `window.ENV`, falling back to defaults when it is missing or malformed.
    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Some(env) = window.get("ENV") else {
            return Self::default();
        };
        if env.is_undefined() || !env.is_object() {
            return Self::default();
        }

        let json = js_sys::JSON::stringify(&env)
            .ok()
            .and_then(|s| s.as_string());
        match json.map(|s| Self::from_json(&s)) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring window.ENV: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed `log_level`; unknown names mean `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(self.log_level.trim()).unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            list_order: ListOrder::default(),
        }
    }
}
