//! Tab state machine: a fixed set of tabs with exactly one active at a time.

use crate::UiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to a tab key to get the id of its content panel.
pub const PANEL_ID_SUFFIX: &str = "-tab";

/// Value of a tab's `data-tab` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabKey(String);

impl TabKey {
    pub fn new(key: impl Into<String>) -> Result<Self, UiError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(UiError::EmptyTabKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the content panel paired with this tab: `upload` -> `upload-tab`.
    pub fn panel_id(&self) -> String {
        format!("{}{}", self.0, PANEL_ID_SUFFIX)
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    pub previous: Option<TabKey>,
    pub current: TabKey,
}

impl TabChange {
    pub fn is_noop(&self) -> bool {
        self.previous.as_ref() == Some(&self.current)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    keys: Vec<TabKey>,
    active: Option<usize>,
}

impl TabSet {
    /// Builds the set in document order.
    ///
    /// Several controls may carry the same key (desktop and mobile navigation); the key
    /// is kept once, at its first position. `initially_active` is the key the markup
    /// already marks active; when it is absent or unknown the first tab becomes active.
    pub fn new(keys: Vec<TabKey>, initially_active: Option<&TabKey>) -> Self {
        let mut unique: Vec<TabKey> = Vec::with_capacity(keys.len());
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        let keys = unique;

        let active = if keys.is_empty() {
            None
        } else {
            let marked = initially_active.and_then(|k| keys.iter().position(|t| t == k));
            Some(marked.unwrap_or(0))
        };

        Self { keys, active }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[TabKey] {
        &self.keys
    }

    pub fn active(&self) -> Option<&TabKey> {
        self.active.map(|i| &self.keys[i])
    }

    pub fn is_active(&self, key: &TabKey) -> bool {
        self.active() == Some(key)
    }

    pub fn activate(&mut self, key: &TabKey) -> Result<TabChange, UiError> {
        let index = self
            .keys
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| UiError::UnknownTab(key.to_string()))?;

        let previous = self.active().cloned();
        self.active = Some(index);

        Ok(TabChange {
            previous,
            current: key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> TabKey {
        TabKey::new(s).unwrap()
    }

    fn set(keys: &[&str]) -> TabSet {
        TabSet::new(keys.iter().map(|k| key(k)).collect(), None)
    }

    fn active_count(tabs: &TabSet) -> usize {
        tabs.keys().iter().filter(|k| tabs.is_active(k)).count()
    }

    #[test]
    fn test_panel_id() {
        assert_eq!(key("upload").panel_id(), "upload-tab");
        assert_eq!(key("  text ").panel_id(), "text-tab");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(TabKey::new("   "), Err(UiError::EmptyTabKey));
    }

    #[test]
    fn test_first_tab_active_by_default() {
        let tabs = set(&["upload", "text"]);
        assert_eq!(tabs.active(), Some(&key("upload")));
    }

    #[test]
    fn test_markup_active_tab_is_kept() {
        let tabs = TabSet::new(vec![key("upload"), key("text")], Some(&key("text")));
        assert_eq!(tabs.active(), Some(&key("text")));

        let tabs = TabSet::new(vec![key("upload"), key("text")], Some(&key("gone")));
        assert_eq!(tabs.active(), Some(&key("upload")));
    }

    #[test]
    fn test_no_tabs_no_active() {
        let tabs = TabSet::new(vec![], None);
        assert!(tabs.is_empty());
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_repeated_key_kept_once() {
        let mut tabs = TabSet::new(vec![key("upload"), key("text"), key("upload")], None);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.keys(), &[key("upload"), key("text")]);
        assert_eq!(tabs.active(), Some(&key("upload")));

        tabs.activate(&key("text")).unwrap();
        assert_eq!(active_count(&tabs), 1);
        tabs.activate(&key("upload")).unwrap();
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn test_repeated_key_marked_active_later() {
        let tabs = TabSet::new(vec![key("upload"), key("text"), key("text")], Some(&key("text")));
        assert_eq!(tabs.active(), Some(&key("text")));
    }

    #[test]
    fn test_exactly_one_active_after_every_click() {
        let mut tabs = set(&["upload", "text", "history"]);
        assert_eq!(active_count(&tabs), 1);

        for click in ["text", "text", "history", "upload", "history", "text"] {
            tabs.activate(&key(click)).unwrap();
            assert_eq!(active_count(&tabs), 1);
            assert_eq!(tabs.active(), Some(&key(click)));
        }
    }

    #[test]
    fn test_activate_reports_change() {
        let mut tabs = set(&["upload", "text"]);
        let change = tabs.activate(&key("text")).unwrap();
        assert_eq!(change.previous, Some(key("upload")));
        assert_eq!(change.current, key("text"));
        assert!(!change.is_noop());

        assert!(tabs.activate(&key("text")).unwrap().is_noop());
    }

    #[test]
    fn test_unknown_tab_keeps_state() {
        let mut tabs = set(&["upload", "text"]);
        let err = tabs.activate(&key("missing")).unwrap_err();
        assert_eq!(err, UiError::UnknownTab("missing".into()));
        assert_eq!(tabs.active(), Some(&key("upload")));
    }
}
