//! Synthetic event dispatch.

use veranda_core::{DummyEvent, EventType};

use crate::query::ViewRef;

/// Simulates a single user click on the element.
///
/// Handlers registered for the click event run synchronously, exactly once
/// each. A disabled element receives nothing, mirroring browser semantics:
/// disabled form controls do not emit click events.
pub fn fire_click(target: &ViewRef<'_>) {
	if target.is_disabled() {
		return;
	}
	for (event_type, handler) in target.element().event_handlers() {
		if *event_type == EventType::Click {
			handler(DummyEvent::default());
		}
	}
}
