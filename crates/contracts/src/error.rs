use thiserror::Error;

/// Ошибки UI-контроллера.
///
/// Ни одна из них не фатальна для страницы: обработчики логируют их и продолжают работу.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("element not found: `{selector}`")]
    MissingElement { selector: String },

    #[error("no content panel `#{panel_id}` for tab `{tab}`")]
    MissingPanel { tab: String, panel_id: String },

    #[error("unknown tab `{0}`")]
    UnknownTab(String),

    #[error("tab element has an empty `data-tab` attribute")]
    EmptyTabKey,

    #[error("notification #{0} not found")]
    NotificationNotFound(u64),

    #[error("notification #{id} cannot go from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: &'static str,
        to: &'static str,
    },

    #[error("invalid ui config: {0}")]
    Config(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_target() {
        let err = UiError::MissingPanel {
            tab: "upload".into(),
            panel_id: "upload-tab".into(),
        };
        assert_eq!(err.to_string(), "no content panel `#upload-tab` for tab `upload`");
        assert_eq!(
            UiError::MissingElement { selector: ".content".into() }.to_string(),
            "element not found: `.content`"
        );
    }

    #[test]
    fn test_serde_error_becomes_config_error() {
        let err: UiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, UiError::Config(_)));
    }
}
