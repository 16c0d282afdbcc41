//! Core view types for the Veranda front-end.
//!
//! The [`View`] enum is the unified representation of renderable content:
//! DOM elements, text nodes, fragments, or nothing. Components build a
//! `View` tree through the [`ElementView`] fluent API, render it to an HTML
//! string on the server, and mount it to the real DOM on wasm32 targets.

pub mod view;

pub use view::{ElementView, EventType, IntoView, MountError, View, ViewEventHandler};

#[cfg(not(target_arch = "wasm32"))]
pub use view::DummyEvent;

pub use view::util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};
