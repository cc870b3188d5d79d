//! Tab switcher over server-rendered `.tab` / `.tab-content` markup.

use crate::shared::dom::{self, EventBinding};
use contracts::shared::tabs::{TabKey, TabSet};
use contracts::UiError;
use leptos::prelude::*;
use std::rc::Rc;
use web_sys::{Document, Element};

pub const TAB_SELECTOR: &str = ".tab";
pub const PANEL_SELECTOR: &str = ".tab-content";
pub const ACTIVE_CLASS: &str = "active";
pub const TAB_KEY_ATTR: &str = "data-tab";

/// A `.tab` element with a validated key.
///
/// The panel is not stored: it is looked up by `key.panel_id()` on every click, so a
/// panel rendered after start is still found.
#[derive(Clone)]
pub struct TabBinding {
    pub element: Element,
    pub key: TabKey,
}

impl TabBinding {
    pub fn from_element(element: Element) -> Result<Self, UiError> {
        let raw = element.get_attribute(TAB_KEY_ATTR).unwrap_or_default();
        let key = TabKey::new(raw)?;
        Ok(Self { element, key })
    }
}

struct TabDom {
    document: Document,
    tabs: Vec<TabBinding>,
    panels: Vec<Element>,
}

impl TabDom {
    /// Moves the `active` class to `key` and its panel, off everything else.
    fn show(&self, key: &TabKey) {
        for tab in &self.tabs {
            let _ = tab.element.class_list().remove_1(ACTIVE_CLASS);
        }
        for panel in &self.panels {
            let _ = panel.class_list().remove_1(ACTIVE_CLASS);
        }

        // every control carrying the key, e.g. desktop and mobile navigation
        for tab in self.tabs.iter().filter(|t| &t.key == key) {
            let _ = tab.element.class_list().add_1(ACTIVE_CLASS);
        }

        match self.document.get_element_by_id(&key.panel_id()) {
            Some(panel) => {
                let _ = panel.class_list().add_1(ACTIVE_CLASS);
            }
            None => log::warn!("{}", missing_panel(key)),
        }
    }
}

fn missing_panel(key: &TabKey) -> UiError {
    UiError::MissingPanel {
        tab: key.to_string(),
        panel_id: key.panel_id(),
    }
}

pub struct TabSwitcher {
    state: RwSignal<TabSet>,
    _listeners: Vec<EventBinding>,
}

impl TabSwitcher {
    pub fn attach(document: &Document) -> Result<Self, UiError> {
        let mut tabs = Vec::new();
        for element in dom::query_all(document, TAB_SELECTOR)? {
            match TabBinding::from_element(element) {
                Ok(binding) => tabs.push(binding),
                Err(e) => log::warn!("skipping tab: {}", e),
            }
        }
        let panels = dom::query_all(document, PANEL_SELECTOR)?;

        let marked = tabs
            .iter()
            .find(|t| t.element.class_list().contains(ACTIVE_CLASS))
            .map(|t| t.key.clone());
        let set = TabSet::new(tabs.iter().map(|t| t.key.clone()).collect(), marked.as_ref());
        if set.len() < tabs.len() {
            log::debug!("{} tab control(s) share a key with another control", tabs.len() - set.len());
        }

        for key in set.keys() {
            if document.get_element_by_id(&key.panel_id()).is_none() {
                log::warn!("{}", missing_panel(key));
            }
        }

        let view = Rc::new(TabDom {
            document: document.clone(),
            tabs: tabs.clone(),
            panels,
        });
        if let Some(active) = set.active() {
            view.show(active);
        }

        log::debug!("📑 tabs: {}, active: {:?}", set.len(), set.active().map(|k| k.as_str()));
        let state = RwSignal::new(set);

        let mut listeners = Vec::with_capacity(tabs.len());
        for tab in tabs {
            let view = Rc::clone(&view);
            let key = tab.key.clone();
            listeners.push(EventBinding::listen(&tab.element, "click", move |_| {
                match state.try_update(|s| s.activate(&key)) {
                    Some(Ok(change)) => {
                        log::debug!("tab {:?} -> {}", change.previous.map(|k| k.to_string()), change.current);
                        view.show(&key);
                    }
                    Some(Err(e)) => log::warn!("{}", e),
                    None => {}
                }
            })?);
        }

        Ok(Self {
            state,
            _listeners: listeners,
        })
    }

    /// Shared tab state, read by the form guard.
    pub fn state(&self) -> RwSignal<TabSet> {
        self.state
    }
}
