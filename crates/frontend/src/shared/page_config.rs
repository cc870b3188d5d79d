use contracts::shared::ui_config::{UiConfig, CONFIG_ELEMENT_ID};
use web_sys::Document;

/// Reads `<script type="application/json" id="ui-config">` if the page has one.
pub fn load(document: &Document) -> UiConfig {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    UiConfig::load(json.as_deref())
}
