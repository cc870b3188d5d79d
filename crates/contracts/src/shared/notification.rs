//! Notification banner lifecycle: `Shown -> Fading -> Removed`.

use crate::UiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const AUTO_DISMISS_MS: u32 = 5_000;
pub const FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    /// Class list of the banner element.
    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }

    /// Font Awesome icon shown before the message.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Info => "fas fa-info-circle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    /// Anything other than `error` is informational.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.trim().eq_ignore_ascii_case("error") {
            Severity::Error
        } else {
            Severity::Info
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Fading,
    Removed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Shown => "shown",
            Phase::Fading => "fading",
            Phase::Removed => "removed",
        }
    }

    /// Target opacity for the banner in this phase.
    pub fn opacity(&self) -> &'static str {
        match self {
            Phase::Shown => "1",
            Phase::Fading | Phase::Removed => "0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Timer durations for one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub auto_dismiss_ms: u32,
    pub fade_ms: u32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: AUTO_DISMISS_MS,
            fade_ms: FADE_MS,
        }
    }
}

impl Timeline {
    /// Latest moment, relative to creation, at which an undismissed banner is detached.
    pub fn removal_deadline_ms(&self) -> u32 {
        self.auto_dismiss_ms.saturating_add(self.fade_ms)
    }
}

/// Live banners, newest first. Removed banners are dropped from the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.items.insert(
            0,
            Notification {
                id,
                message: message.into(),
                severity,
                phase: Phase::Shown,
            },
        );
        id
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Phase of a banner; ids no longer in the queue report `Removed`.
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.get(id).map_or(Phase::Removed, |n| n.phase)
    }

    /// `Shown -> Fading`. Returns `false` when the banner is already fading or gone,
    /// so a late auto-expiry after a manual dismissal does nothing.
    pub fn begin_fade(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase == Phase::Shown => {
                n.phase = Phase::Fading;
                true
            }
            _ => false,
        }
    }

    /// `Fading -> Removed`. A banner that is still shown cannot be detached.
    pub fn remove(&mut self, id: NotificationId) -> Result<Notification, UiError> {
        let index = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or(UiError::NotificationNotFound(id.0))?;

        let phase = self.items[index].phase;
        if phase != Phase::Fading {
            return Err(UiError::InvalidTransition {
                id: id.0,
                from: phase.as_str(),
                to: Phase::Removed.as_str(),
            });
        }

        let mut removed = self.items.remove(index);
        removed.phase = Phase::Removed;
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Banners still attached to the page, most recent first.
    pub fn visible_newest_first(&self) -> &[Notification] {
        &self.items
    }

    pub fn ids(&self) -> Vec<NotificationId> {
        self.items.iter().map(|n| n.id).collect()
    }
}
