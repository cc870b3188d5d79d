pub mod dom;
pub mod form_guard;
pub mod notifications;
pub mod page_config;
