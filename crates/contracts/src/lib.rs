//! Host-independent model of the page UI controller.
//!
//! Nothing in this crate touches the DOM: the frontend crate owns the bindings
//! and drives these types from browser events.

pub mod error;
pub mod shared;

pub use error::UiError;
