use crate::shared::dom::{self, EventBinding};
use crate::shared::notifications::NotificationCenter;
use contracts::shared::form_rules::{FieldRule, FieldValue, FormGuard, RejectionPolicy, Verdict};
use contracts::shared::notification::Severity;
use contracts::shared::tabs::TabSet;
use contracts::UiError;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

/// Where a rejected submit is reported.
#[derive(Clone, Copy)]
pub enum Reporter {
    Banner(NotificationCenter),
    Dialog,
}

impl Reporter {
    /// Banner policy needs a mounted notification host; without one the dialog is used.
    pub fn new(policy: RejectionPolicy, center: Option<NotificationCenter>) -> Self {
        match (policy, center) {
            (RejectionPolicy::Banner, Some(center)) => Reporter::Banner(center),
            (RejectionPolicy::Banner, None) => {
                log::warn!("no notification host, validation errors fall back to dialogs");
                Reporter::Dialog
            }
            (RejectionPolicy::Dialog, _) => Reporter::Dialog,
        }
    }

    pub fn report(&self, message: &str) {
        match self {
            Reporter::Banner(center) => {
                center.notify(message, Severity::Error);
            }
            Reporter::Dialog => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
        }
    }
}

/// Submit listeners on every form of the page.
pub struct FormGuardBinding {
    _listeners: Vec<EventBinding>,
}

impl FormGuardBinding {
    pub fn attach(
        document: &Document,
        tabs: RwSignal<TabSet>,
        reporter: Reporter,
    ) -> Result<Self, UiError> {
        let forms = dom::query_all(document, "form")?;
        let mut listeners = Vec::with_capacity(forms.len());

        for form in forms {
            let document = document.clone();
            let guard = FormGuard::default();
            listeners.push(EventBinding::listen(&form, "submit", move |event| {
                let active = tabs.try_with_untracked(|t| t.active().cloned()).flatten();
                let verdict = guard.evaluate(active.as_ref(), |rule| read_field(&document, rule));

                if let Verdict::Reject { message } = verdict {
                    log::info!("submit blocked on tab {:?}: {}", active.map(|t| t.to_string()), message);
                    event.prevent_default();
                    reporter.report(message);
                }
            })?);
        }

        log::debug!("form guard on {} form(s)", listeners.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn read_field(document: &Document, rule: &FieldRule) -> FieldValue {
    let Some(element) = document.get_element_by_id(rule.field_id()) else {
        return FieldValue::Missing;
    };

    match rule {
        FieldRule::FileSelected { .. } => element
            .dyn_ref::<HtmlInputElement>()
            .and_then(|input| input.files())
            .map(|files| FieldValue::Files(files.length()))
            .unwrap_or(FieldValue::Missing),
        FieldRule::NonBlankText { .. } => {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                FieldValue::Text(input.value())
            } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
                FieldValue::Text(area.value())
            } else {
                FieldValue::Missing
            }
        }
    }
}
