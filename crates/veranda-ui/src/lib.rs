//! Component layer for the Veranda front-end.
//!
//! Builds on [`veranda_core`]'s view tree with:
//!
//! - the [`Component`] trait and [`Props`] system,
//! - [`Callback`] and [`IntoEventHandler`] for type-safe event handlers,
//! - the [`Button`] widget,
//! - [`notify`], the user-notification side channel.

pub mod button;
pub mod callback;
pub mod component;
pub mod notify;

pub use button::{Button, ButtonSize, ButtonType, ButtonVariant};
pub use callback::{Callback, IntoEventHandler};
pub use component::{Component, Props, serialize_props};
