//! Required-field rules applied on form submit, one per tab.

use super::tabs::TabKey;
use serde::{Deserialize, Serialize};

pub const UPLOAD_TAB: &str = "upload";
pub const TEXT_TAB: &str = "text";

pub const FILE_FIELD_ID: &str = "file";
pub const TEXT_FIELD_ID: &str = "text";

pub const MSG_NO_FILE: &str = "Please select a PDF file";
pub const MSG_NO_TEXT: &str = "Please enter some text";

/// What the guard read from a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// File input with the number of selected files.
    Files(u32),
    /// Text input or textarea value, untrimmed.
    Text(String),
    /// The field is not in the page.
    Missing,
}

/// Required-field rule attached to one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    FileSelected {
        field_id: &'static str,
        message: &'static str,
    },
    NonBlankText {
        field_id: &'static str,
        message: &'static str,
    },
}

impl FieldRule {
    pub fn field_id(&self) -> &'static str {
        match self {
            FieldRule::FileSelected { field_id, .. } | FieldRule::NonBlankText { field_id, .. } => {
                field_id
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FieldRule::FileSelected { message, .. } | FieldRule::NonBlankText { message, .. } => {
                message
            }
        }
    }

    /// Checks a value read from the page.
    ///
    /// A missing field passes: the guard only vetoes what it can actually see.
    pub fn check(&self, value: &FieldValue) -> Result<(), &'static str> {
        let ok = match (self, value) {
            (_, FieldValue::Missing) => true,
            (FieldRule::FileSelected { .. }, FieldValue::Files(count)) => *count > 0,
            (FieldRule::NonBlankText { .. }, FieldValue::Text(text)) => !is_blank(text),
            // Wrong element kind under the expected id: nothing to validate against.
            _ => true,
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

/// Blank as the browser sees it: `String.prototype.trim` also strips U+FEFF,
/// which `char::is_whitespace` does not.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Outcome of a submit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Reject { message: &'static str },
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

/// How a rejected submit is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    /// Error notification banner inside the content container.
    #[default]
    Banner,
    /// Blocking `window.alert` dialog.
    Dialog,
}

#[derive(Debug, Clone)]
pub struct FormGuard {
    rules: Vec<(TabKey, FieldRule)>,
}

impl Default for FormGuard {
    fn default() -> Self {
        let rules = [
            (
                UPLOAD_TAB,
                FieldRule::FileSelected {
                    field_id: FILE_FIELD_ID,
                    message: MSG_NO_FILE,
                },
            ),
            (
                TEXT_TAB,
                FieldRule::NonBlankText {
                    field_id: TEXT_FIELD_ID,
                    message: MSG_NO_TEXT,
                },
            ),
        ]
        .into_iter()
        .filter_map(|(tab, rule)| TabKey::new(tab).ok().map(|key| (key, rule)))
        .collect();

        Self { rules }
    }
}

impl FormGuard {
    pub fn rule_for(&self, tab: &TabKey) -> Option<&FieldRule> {
        self.rules.iter().find(|(key, _)| key == tab).map(|(_, rule)| rule)
    }

    /// Decides whether a submit may proceed.
    ///
    /// `read_field` is only called for the field the active tab's rule names.
    pub fn evaluate<F>(&self, active: Option<&TabKey>, read_field: F) -> Verdict
    where
        F: FnOnce(&FieldRule) -> FieldValue,
    {
        let Some(rule) = active.and_then(|tab| self.rule_for(tab)) else {
            return Verdict::Allow;
        };

        match rule.check(&read_field(rule)) {
            Ok(()) => Verdict::Allow,
            Err(message) => Verdict::Reject { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(s: &str) -> TabKey {
        TabKey::new(s).unwrap()
    }

    #[test]
    fn test_no_active_tab_allows() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(None, |_| panic!("field must not be read"));
        assert_eq!(verdict, Verdict::Allow);
    }

    #[test]
    fn test_tab_without_rule_allows() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(Some(&tab("history")), |_| FieldValue::Missing);
        assert!(verdict.is_allowed());
    }

    #[test]
    fn test_upload_without_file_rejected() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(Some(&tab("upload")), |rule| {
            assert_eq!(rule.field_id(), "file");
            FieldValue::Files(0)
        });
        assert_eq!(verdict, Verdict::Reject { message: MSG_NO_FILE });
    }

    #[test]
    fn test_upload_with_file_allowed() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(Some(&tab("upload")), |_| FieldValue::Files(1));
        assert!(verdict.is_allowed());
    }

    #[test]
    fn test_whitespace_text_rejected() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(Some(&tab("text")), |rule| {
            assert_eq!(rule.field_id(), "text");
            FieldValue::Text(" \n\t  ".into())
        });
        assert_eq!(verdict, Verdict::Reject { message: MSG_NO_TEXT });
    }

    #[test]
    fn test_byte_order_mark_is_blank() {
        let guard = FormGuard::default();
        for text in ["\u{FEFF}", " \u{FEFF}\n", "\u{FEFF}\u{00A0}"] {
            let verdict = guard.evaluate(Some(&tab("text")), |_| FieldValue::Text(text.into()));
            assert_eq!(verdict, Verdict::Reject { message: MSG_NO_TEXT }, "{:?}", text);
        }
        assert!(!is_blank("\u{FEFF}x"));
    }

    #[test]
    fn test_non_blank_text_allowed() {
        let guard = FormGuard::default();
        let verdict = guard.evaluate(Some(&tab("text")), |_| FieldValue::Text("  hello ".into()));
        assert!(verdict.is_allowed());
    }

    #[test]
    fn test_missing_field_allowed() {
        let guard = FormGuard::default();
        assert!(guard.evaluate(Some(&tab("upload")), |_| FieldValue::Missing).is_allowed());
        assert!(guard.evaluate(Some(&tab("text")), |_| FieldValue::Missing).is_allowed());
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: RejectionPolicy = serde_json::from_str("\"dialog\"").unwrap();
        assert_eq!(policy, RejectionPolicy::Dialog);
        assert_eq!(serde_json::to_string(&RejectionPolicy::Banner).unwrap(), "\"banner\"");
    }
}
