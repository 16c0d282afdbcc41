//! Recorder for the notification side channel.

use std::sync::{Arc, Mutex};

use veranda_ui::notify;

/// Records every [`veranda_ui::notify::alert`] call while it is alive.
///
/// Installing the recorder replaces the process-global alert sink; dropping
/// it restores the default. Because the sink is global, tests using the
/// recorder must be `#[serial]`.
#[derive(Debug)]
pub struct AlertRecorder {
	messages: Arc<Mutex<Vec<String>>>,
}

impl AlertRecorder {
	/// Installs a recording sink and returns the recorder.
	pub fn install() -> Self {
		let messages = Arc::new(Mutex::new(Vec::new()));
		notify::set_alert_sink({
			let messages = Arc::clone(&messages);
			move |message| {
				messages
					.lock()
					.unwrap_or_else(|poisoned| poisoned.into_inner())
					.push(message.to_string());
			}
		});
		Self { messages }
	}

	/// Returns the messages recorded so far.
	pub fn messages(&self) -> Vec<String> {
		self.messages
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// Returns how many alerts were recorded.
	pub fn count(&self) -> usize {
		self.messages
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.len()
	}
}

impl Drop for AlertRecorder {
	fn drop(&mut self) {
		notify::reset_alert_sink();
	}
}
