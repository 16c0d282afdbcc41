//! User-notification side channel.
//!
//! [`alert`] is the single fire-and-forget notification primitive the UI
//! uses. On wasm32 it goes straight to `window.alert`. On native targets it
//! dispatches to a process-global, replaceable sink so behavioral tests can
//! observe the call; the default sink logs through `tracing`.

/// Shows a blocking browser alert with the given message.
///
/// Failures (no window, alert rejected by the embedder) are logged to the
/// console and swallowed: the notification is fire-and-forget.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
	match web_sys::window() {
		Some(window) => {
			if window.alert_with_message(message).is_err() {
				web_sys::console::error_1(&"alert rejected by embedder".into());
			}
		}
		None => web_sys::console::error_1(&"alert: window object not available".into()),
	}
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{alert, reset_alert_sink, set_alert_sink};

#[cfg(not(target_arch = "wasm32"))]
mod native {
	use std::sync::RwLock;

	type AlertSink = Box<dyn Fn(&str) + Send + Sync + 'static>;

	static SINK: RwLock<Option<AlertSink>> = RwLock::new(None);

	/// Dispatches the message to the installed sink, or logs it when no
	/// sink is installed.
	pub fn alert(message: &str) {
		let guard = SINK.read().unwrap_or_else(|poisoned| poisoned.into_inner());
		match guard.as_ref() {
			Some(sink) => sink(message),
			None => tracing::info!(target: "veranda::notify", message, "alert"),
		}
	}

	/// Replaces the process-global alert sink.
	///
	/// Global state: tests that install a sink must not run concurrently
	/// with other tests touching it (`#[serial]`).
	pub fn set_alert_sink(sink: impl Fn(&str) + Send + Sync + 'static) {
		let mut guard = SINK
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		*guard = Some(Box::new(sink));
	}

	/// Restores the default logging sink.
	pub fn reset_alert_sink() {
		let mut guard = SINK
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		*guard = None;
	}
}
