//! Close buttons on alerts rendered by the server with the page.

use crate::shared::dom::{self, EventBinding};
use contracts::UiError;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

pub const ALERT_SELECTOR: &str = ".alert";
pub const CLOSE_SELECTOR: &str = ".alert-close";

const DISMISSING_ATTR: &str = "data-dismissing";

pub struct AlertDismissal {
    _listeners: Vec<EventBinding>,
}

impl AlertDismissal {
    /// Wires every `.alert-close` already in the page. Banners created later carry
    /// their own handler.
    pub fn attach(document: &Document, fade_ms: u32) -> Result<Self, UiError> {
        let buttons = dom::query_all(document, CLOSE_SELECTOR)?;
        let mut listeners = Vec::with_capacity(buttons.len());

        for button in buttons {
            let Ok(Some(alert)) = button.closest(ALERT_SELECTOR) else {
                log::warn!("{} outside of {}", CLOSE_SELECTOR, ALERT_SELECTOR);
                continue;
            };
            listeners.push(EventBinding::listen(&button, "click", move |_| {
                fade_out_and_remove(&alert, fade_ms);
            })?);
        }

        log::debug!("server alerts wired: {}", listeners.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn fade_out_and_remove(alert: &Element, fade_ms: u32) {
    if alert.has_attribute(DISMISSING_ATTR) {
        return;
    }
    let _ = alert.set_attribute(DISMISSING_ATTR, "");

    if let Some(html) = alert.dyn_ref::<HtmlElement>() {
        let transition = format!("opacity {}ms ease", fade_ms);
        dom::set_styles(html, &[("transition", transition.as_str()), ("opacity", "0")]);
    }

    let alert = alert.clone();
    spawn_local(async move {
        TimeoutFuture::new(fade_ms).await;
        alert.remove();
    });
}
