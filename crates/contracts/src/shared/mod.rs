pub mod anchors;
pub mod form_rules;
pub mod lifecycle;
pub mod notification;
pub mod reveal;
pub mod tabs;
pub mod ui_config;
