//! Появление карточек при прокрутке.
//!
//! Карточки скрываются при старте и плавно проявляются при первом пересечении
//! с viewport. Обратного перехода нет.

use crate::shared::dom::{self, js_error};
use contracts::shared::reveal::{RevealOptions, RevealState, HIDDEN_STYLE, VISIBLE_STYLE};
use contracts::UiError;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const REVEALED_ATTR: &str = "data-revealed";

pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    /// Returns `None` when the page has no cards to watch.
    pub fn attach(document: &Document, options: &RevealOptions) -> Result<Option<Self>, UiError> {
        let cards: Vec<Element> = dom::query_all(document, &options.selector)?
            .into_iter()
            .filter(|card| reveal_state(card) == RevealState::Hidden)
            .collect();
        if cards.is_empty() {
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if reveal_state(&target).observe(entry.is_intersecting()) {
                        show(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_error)?;

        for card in &cards {
            if let Some(html) = card.dyn_ref::<HtmlElement>() {
                dom::set_styles(html, &HIDDEN_STYLE);
                observer.observe(card);
            }
        }

        log::debug!("reveal watching {} card(s)", cards.len());
        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_state(element: &Element) -> RevealState {
    if element.has_attribute(REVEALED_ATTR) {
        RevealState::Visible
    } else {
        RevealState::Hidden
    }
}

fn show(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        dom::set_styles(html, &VISIBLE_STYLE);
    }
    let _ = element.set_attribute(REVEALED_ATTR, "");
}
