//! Testing-Library-style queries and synthetic events for Veranda views.
//!
//! The toolkit operates on the rendered [`veranda_core::View`] tree itself,
//! not on a live DOM, so behavioral suites run under plain `cargo test`:
//!
//! ```
//! use veranda_testkit::Screen;
//! use veranda_ui::{Button, Component};
//!
//! let view = Button::new("Click me").render();
//! let screen = Screen::of(&view);
//! let button = screen.get_by_test_id("button").get();
//! assert_eq!(button.text_content(), "Click me");
//! ```

pub mod query;

#[cfg(not(target_arch = "wasm32"))]
mod alert;
#[cfg(not(target_arch = "wasm32"))]
mod event;

pub use query::{QueryResult, Screen, ViewRef};

#[cfg(not(target_arch = "wasm32"))]
pub use alert::AlertRecorder;
#[cfg(not(target_arch = "wasm32"))]
pub use event::fire_click;
