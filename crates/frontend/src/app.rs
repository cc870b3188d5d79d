use crate::layout::reveal::RevealWatcher;
use crate::layout::scroll::SmoothScroll;
use crate::layout::tabs::TabSwitcher;
use crate::shared::form_guard::{FormGuardBinding, Reporter};
use crate::shared::notifications::alerts::AlertDismissal;
use crate::shared::notifications::{NotificationCenter, NotificationHost};
use contracts::shared::tabs::TabSet;
use contracts::shared::ui_config::UiConfig;
use contracts::UiError;
use leptos::prelude::*;
use web_sys::Document;

/// Everything the script attached to the page.
struct Attached {
    tabs: Option<TabSwitcher>,
    notifications: Option<NotificationHost>,
    _forms: Option<FormGuardBinding>,
    _alerts: Option<AlertDismissal>,
    _scroll: Option<SmoothScroll>,
    _reveal: Option<RevealWatcher>,
}

impl Attached {
    /// Wires every part independently: a part that fails to attach is logged and
    /// skipped, the rest of the page keeps working.
    fn attach(document: &Document, config: &UiConfig) -> Self {
        let tabs = report("tabs", TabSwitcher::attach(document));
        let tab_state = tabs
            .as_ref()
            .map(TabSwitcher::state)
            .unwrap_or_else(|| RwSignal::new(TabSet::default()));

        let notifications = report(
            "notifications",
            NotificationHost::attach(document, &config.content_selector, config.timeline()),
        );
        let reporter = Reporter::new(
            config.rejection_policy,
            notifications.as_ref().map(NotificationHost::center),
        );

        Self {
            _forms: report("forms", FormGuardBinding::attach(document, tab_state, reporter)),
            _alerts: report("alerts", AlertDismissal::attach(document, config.fade_ms)),
            _scroll: report("scroll", SmoothScroll::attach(document)),
            _reveal: report("reveal", RevealWatcher::attach(document, &config.reveal)).flatten(),
            tabs,
            notifications,
        }
    }
}

/// Page-lifetime controller.
///
/// Dropping it unregisters the listeners, disconnects the reveal observer, removes the
/// notification host and then disposes the reactive state owned by `owner`.
pub struct UiController {
    attached: Attached,
    _owner: Owner,
}

impl UiController {
    pub fn start(document: &Document, config: &UiConfig) -> Self {
        let owner = Owner::new();
        let attached = owner.with(|| Attached::attach(document, config));
        Self {
            attached,
            _owner: owner,
        }
    }

    pub fn notifications(&self) -> Option<NotificationCenter> {
        self.attached
            .notifications
            .as_ref()
            .map(NotificationHost::center)
    }

    pub fn tabs(&self) -> Option<RwSignal<TabSet>> {
        self.attached.tabs.as_ref().map(TabSwitcher::state)
    }
}

fn report<T>(part: &str, result: Result<T, UiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("❌ {} not attached: {}", part, e);
            None
        }
    }
}
