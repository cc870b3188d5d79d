use super::form_rules::RejectionPolicy;
use super::notification::{Timeline, AUTO_DISMISS_MS, FADE_MS};
use super::reveal::RevealOptions;
use crate::UiError;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub auto_dismiss_ms: u32,
    pub fade_ms: u32,
    pub rejection_policy: RejectionPolicy,
    /// Container that hosts notification banners as its first child.
    pub content_selector: String,
    pub reveal: RevealOptions,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
{
    "auto_dismiss_ms": 5000,
    "fade_ms": 300,
    "rejection_policy": "banner",
    "content_selector": ".content",
    "reveal": {
        "selector": ".card, .stat-card, .action-card",
        "threshold": 0.1,
        "root_margin": "0px 0px -100px 0px"
    }
}
"#;

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: AUTO_DISMISS_MS,
            fade_ms: FADE_MS,
            rejection_policy: RejectionPolicy::default(),
            content_selector: ".content".to_string(),
            reveal: RevealOptions::default(),
        }
    }
}

impl UiConfig {
    pub fn parse(json: &str) -> Result<Self, UiError> {
        let config: UiConfig = serde_json::from_str(json)?;
        if config.content_selector.trim().is_empty() {
            return Err(UiError::Config("content_selector is empty".into()));
        }
        Ok(config)
    }

    /// Resolves the page override, falling back to the embedded defaults.
    pub fn load(page_override: Option<&str>) -> Self {
        if let Some(json) = page_override {
            match Self::parse(json) {
                Ok(config) => {
                    log::info!("Loading ui config from #{}", CONFIG_ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e),
            }
        }

        log::info!("Using default embedded ui configuration");
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn timeline(&self) -> Timeline {
        Timeline {
            auto_dismiss_ms: self.auto_dismiss_ms,
            fade_ms: self.fade_ms,
        }
    }
}
