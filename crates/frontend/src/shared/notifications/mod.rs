//! Transient notification banners.
//!
//! The queue lives in a `RwSignal`; [`stack::NotificationStack`] renders it inside a host
//! element that is inserted as the first child of the content container. Each banner
//! owns two independent one-shot timers (auto-expiry, then fade-to-removal), scheduled
//! by [`Lifecycle`] on top of `gloo-timers`.
//!
//! Banners are children of the host, not of `.content` itself: the host is the first
//! child of `.content` and the newest banner is the first child of the host, so the
//! latest banner is still the topmost element of the container. Page CSS should target
//! `.content .alert` rather than `.content > .alert`.

pub mod alerts;
pub mod stack;

use crate::shared::dom::{self, js_error};
use contracts::shared::lifecycle::{Lifecycle, QueueCell, Timer};
use contracts::shared::notification::{
    Notification, NotificationId, NotificationQueue, Phase, Severity, Timeline,
};
use contracts::UiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

pub const HOST_CLASS: &str = "notifications";

/// Browser timer: `setTimeout` through `gloo-timers`.
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

/// Reactive queue storage.
#[derive(Clone, Copy)]
pub struct SignalQueue(RwSignal<NotificationQueue>);

impl QueueCell for SignalQueue {
    fn update<R>(&self, f: impl FnOnce(&mut NotificationQueue) -> R) -> Option<R> {
        // None once the owner is disposed: late timers after teardown do nothing
        self.0.try_update(f)
    }
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<NotificationQueue>,
    lifecycle: Lifecycle<SignalQueue, GlooTimer>,
}

impl NotificationCenter {
    pub fn new(timeline: Timeline) -> Self {
        let queue = RwSignal::new(NotificationQueue::new());
        Self {
            queue,
            lifecycle: Lifecycle::new(SignalQueue(queue), GlooTimer, timeline),
        }
    }

    pub fn timeline(&self) -> Timeline {
        self.lifecycle.timeline()
    }

    /// Shows a banner on top of the stack and schedules its auto-expiry.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<NotificationId> {
        let message = message.into();
        log::debug!("🔔 notify [{}]: {}", severity, message);
        self.lifecycle.notify(message, severity)
    }

    /// Starts the fade and detaches the banner once it has finished.
    ///
    /// Safe to call any number of times: only the first call on a shown banner acts.
    pub fn dismiss(&self, id: NotificationId) {
        self.lifecycle.dismiss(id);
    }

    /// Reactive phase of a banner.
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.queue
            .try_with(|q| q.phase(id))
            .unwrap_or(Phase::Removed)
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.queue
            .try_with_untracked(|q| q.get(id).cloned())
            .flatten()
    }

    pub fn ids(&self) -> Vec<NotificationId> {
        self.queue.try_with(|q| q.ids()).unwrap_or_default()
    }
}

/// Host element plus the center it renders.
pub struct NotificationHost {
    center: NotificationCenter,
    host: Element,
}

impl NotificationHost {
    /// Inserts the host as the first child of `content_selector` and mounts the stack.
    ///
    /// One host per page keeps a single reactive list; see the module docs for where
    /// banners end up in the tree.
    pub fn attach(
        document: &Document,
        content_selector: &str,
        timeline: Timeline,
    ) -> Result<Self, UiError> {
        let content =
            dom::query_one(document, content_selector).ok_or_else(|| UiError::MissingElement {
                selector: content_selector.to_string(),
            })?;

        let host = document.create_element("div").map_err(js_error)?;
        host.set_class_name(HOST_CLASS);
        content
            .insert_before(&host, content.first_child().as_ref())
            .map_err(js_error)?;

        let center = NotificationCenter::new(timeline);
        let mount_point: HtmlElement = host.clone().unchecked_into();
        leptos::mount::mount_to(mount_point, move || {
            view! { <stack::NotificationStack center=center /> }
        })
        .forget();

        log::debug!("notification host mounted in `{}`", content_selector);
        Ok(Self { center, host })
    }

    pub fn center(&self) -> NotificationCenter {
        self.center
    }
}

impl Drop for NotificationHost {
    fn drop(&mut self) {
        self.host.remove();
    }
}
