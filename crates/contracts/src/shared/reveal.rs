//! Fade-in of cards as they scroll into view.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REVEAL_SELECTOR: &str = ".card, .stat-card, .action-card";
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Inline style pairs applied to a watched card before it is seen.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style pairs applied the first time the card intersects the viewport.
pub const VISIBLE_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_REVEAL_SELECTOR.to_string(),
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealOptions {
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        }
    }
}

/// One-way visibility of a watched card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feeds one intersection observation. Returns `true` exactly once, on the
    /// transition to `Visible`; later observations never hide the card again.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);

        assert!(state.observe(true));
        assert_eq!(state, RevealState::Visible);

        assert!(!state.observe(false));
        assert!(!state.observe(true));
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn test_threshold_clamped() {
        let mut options = RevealOptions::default();
        assert_eq!(options.clamped_threshold(), 0.1);
        options.threshold = 3.0;
        assert_eq!(options.clamped_threshold(), 1.0);
        options.threshold = f64::NAN;
        assert_eq!(options.clamped_threshold(), 0.1);
    }

    #[test]
    fn test_partial_options_use_defaults() {
        let options: RevealOptions = serde_json::from_str(r#"{"threshold": 0.5}"#).unwrap();
        assert_eq!(options.threshold, 0.5);
        assert_eq!(options.selector, DEFAULT_REVEAL_SELECTOR);
        assert_eq!(options.root_margin, DEFAULT_ROOT_MARGIN);
    }
}
