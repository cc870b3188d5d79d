pub mod app;
pub mod layout;
pub mod shared;

use app::UiController;
use contracts::shared::notification::Severity;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

thread_local! {
    static CONTROLLER: RefCell<Option<UiController>> = const { RefCell::new(None) };
}

fn boot() {
    let document = match shared::dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("ui controller not started: {}", e);
            return;
        }
    };

    let config = shared::page_config::load(&document);
    let controller = UiController::start(&document, &config);
    CONTROLLER.with(|slot| {
        // a second start replaces (and tears down) the first controller
        slot.borrow_mut().replace(controller);
    });
    log::info!("✅ ui controller started");
}

/// Runs `f` once the DOM is parsed.
fn when_dom_ready(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    let closure = Closure::once_into_js(f);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    when_dom_ready(boot);

    if let Some(window) = web_sys::window() {
        let on_hide = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            teardown();
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
        on_hide.forget(); // lives as long as the page

        // restored from the back/forward cache after a teardown
        let on_show = Closure::wrap(Box::new(move |event: web_sys::PageTransitionEvent| {
            if event.persisted() {
                boot();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
        on_show.forget();
    }
}

/// Shows a notification banner from page scripts.
#[wasm_bindgen]
pub fn notify(message: &str, severity: &str) {
    let center = CONTROLLER.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|controller| controller.notifications())
    });
    match center {
        Some(Some(center)) => {
            let severity = severity.parse::<Severity>().unwrap_or_default();
            center.notify(message, severity);
        }
        Some(None) => log::warn!("{}, dropped: {}", undelivered_reason(true), message),
        None => log::warn!("{}, dropped: {}", undelivered_reason(false), message),
    }
}

/// Why a banner raised from page scripts was not shown.
fn undelivered_reason(controller_started: bool) -> &'static str {
    if controller_started {
        "no notification host (content container missing)"
    } else {
        "ui controller not started"
    }
}

/// Key of the currently active tab, if any.
#[wasm_bindgen(js_name = activeTab)]
pub fn active_tab() -> Option<String> {
    use leptos::prelude::*;

    CONTROLLER.with(|slot| {
        let tabs = slot.borrow().as_ref().and_then(UiController::tabs)?;
        tabs.try_with_untracked(|t| t.active().map(|k| k.to_string()))
            .flatten()
    })
}

/// Detaches everything the controller wired. Also runs on `pagehide`.
#[wasm_bindgen]
pub fn teardown() {
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if controller.is_some() {
        drop(controller);
        log::info!("ui controller torn down");
    }
}
