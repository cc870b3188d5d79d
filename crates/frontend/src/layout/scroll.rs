use crate::shared::dom::{self, EventBinding};
use contracts::shared::anchors::{anchor_target, IN_PAGE_ANCHOR_SELECTOR};
use contracts::UiError;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth scrolling for `<a href="#...">` links.
pub struct SmoothScroll {
    _listeners: Vec<EventBinding>,
}

impl SmoothScroll {
    pub fn attach(document: &Document) -> Result<Self, UiError> {
        let anchors = dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR)?;
        let mut listeners = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            let document = document.clone();
            let link = anchor.clone();
            listeners.push(EventBinding::listen(&anchor, "click", move |event| {
                event.prevent_default();
                if let Some(target) = resolve(&document, &link) {
                    scroll_to(&target);
                }
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn resolve(document: &Document, link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    let selector = anchor_target(&href)?;
    dom::query_one(document, selector)
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
