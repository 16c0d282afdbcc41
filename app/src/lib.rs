//! The Veranda landing page application.
//!
//! A single static page built from [`veranda_ui`] components. On wasm32 the
//! crate exposes a `start` entry point that mounts the page into the
//! document body; on native targets the same component tree renders to an
//! HTML string and is exercised by the behavioral suites in `tests/`.

pub mod pages;

pub use pages::Home;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use veranda_ui::Component;
	use wasm_bindgen::prelude::*;

	/// Renders the landing page into `document.body`.
	#[wasm_bindgen(start)]
	pub fn start() -> Result<(), JsValue> {
		#[cfg(feature = "panic-hook")]
		console_error_panic_hook::set_once();

		crate::Home
			.render()
			.mount_to_body()
			.map_err(|e| JsValue::from_str(&e.to_string()))
	}
}
