//! DOM event types.

/// The DOM events the view tree knows how to bind.
///
/// A closed set keeps [`ElementView::on`](super::ElementView::on) statically
/// checked: handlers can only be registered for events the mount layer knows
/// how to wire to `addEventListener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Pointer click (the activation event for buttons and links).
	Click,
	/// Text input into a form control.
	Input,
	/// Committed change of a form control value.
	Change,
	/// Form submission.
	Submit,
	/// Key pressed down.
	KeyDown,
	/// Key released.
	KeyUp,
	/// Element gained focus.
	Focus,
	/// Element lost focus.
	Blur,
}

impl EventType {
	/// Returns the DOM event name (as passed to `addEventListener`).
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Input => "input",
			Self::Change => "change",
			Self::Submit => "submit",
			Self::KeyDown => "keydown",
			Self::KeyUp => "keyup",
			Self::Focus => "focus",
			Self::Blur => "blur",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(EventType::Click, "click")]
	#[case(EventType::Submit, "submit")]
	#[case(EventType::KeyDown, "keydown")]
	#[case(EventType::Blur, "blur")]
	fn test_as_str_is_the_dom_event_name(#[case] event: EventType, #[case] name: &str) {
		assert_eq!(event.as_str(), name);
	}
}
