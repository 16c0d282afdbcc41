//! Cloneable callbacks for wiring component events.

use std::sync::Arc;

use veranda_core::ViewEventHandler;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = veranda_core::DummyEvent;

#[cfg(target_arch = "wasm32")]
type HandlerFn<Args, Ret> = dyn Fn(Args) -> Ret + 'static;

#[cfg(not(target_arch = "wasm32"))]
type HandlerFn<Args, Ret> = dyn Fn(Args) -> Ret + Send + Sync + 'static;

/// A cloneable event handler.
///
/// Wrapping the function in an `Arc` keeps the component holding it a plain
/// value: clones share the same handler, and nothing is ever registered with
/// a dispatcher. The argument type defaults to the event type of the
/// compilation target, so a button handler is written the same way whether
/// it compiles for the browser or for the native test suites.
///
/// # Example
///
/// ```
/// use veranda_ui::Callback;
///
/// let greet = Callback::new(|name: String| format!("Hello, {name}!"));
/// assert_eq!(greet.call("Veranda".to_string()), "Hello, Veranda!");
/// ```
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<HandlerFn<Args, Ret>>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	#[cfg(target_arch = "wasm32")]
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Wraps a function or closure.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Invokes the wrapped handler.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Callback(..)")
	}
}

/// Conversion into the handler type the view tree stores.
///
/// Implemented for closures matching the target's event signature, for
/// [`Callback`], and for [`ViewEventHandler`] itself.
pub trait IntoEventHandler {
	/// Converts self into a [`ViewEventHandler`].
	fn into_event_handler(self) -> ViewEventHandler;
}

#[cfg(target_arch = "wasm32")]
impl<F> IntoEventHandler for F
where
	F: Fn(web_sys::Event) + 'static,
{
	fn into_event_handler(self) -> ViewEventHandler {
		Arc::new(self)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<F> IntoEventHandler for F
where
	F: Fn(veranda_core::DummyEvent) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> ViewEventHandler {
		Arc::new(self)
	}
}

impl IntoEventHandler for Callback<EventArg, ()> {
	fn into_event_handler(self) -> ViewEventHandler {
		self.inner
	}
}

impl IntoEventHandler for ViewEventHandler {
	fn into_event_handler(self) -> ViewEventHandler {
		self
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use crate::{Button, Component};
	use std::sync::atomic::{AtomicUsize, Ordering};
	use veranda_core::{DummyEvent, View};

	fn counting_callback(hits: &Arc<AtomicUsize>) -> Callback {
		let hits = Arc::clone(hits);
		Callback::new(move |_: DummyEvent| {
			hits.fetch_add(1, Ordering::Relaxed);
		})
	}

	#[test]
	fn test_call_invokes_the_wrapped_handler() {
		let hits = Arc::new(AtomicUsize::new(0));
		let callback = counting_callback(&hits);

		callback.call(DummyEvent::default());
		callback.call(DummyEvent::default());

		assert_eq!(hits.load(Ordering::Relaxed), 2);
	}

	#[test]
	fn test_clones_share_the_same_handler() {
		let hits = Arc::new(AtomicUsize::new(0));
		let callback = counting_callback(&hits);
		let clone = callback.clone();

		callback.call(DummyEvent::default());
		clone.call(DummyEvent::default());

		assert_eq!(hits.load(Ordering::Relaxed), 2);
	}

	#[test]
	fn test_callback_drives_button_activation() {
		let hits = Arc::new(AtomicUsize::new(0));
		let view = Button::new("Go")
			.on_click_callback(counting_callback(&hits))
			.render();

		let View::Element(button) = &view else {
			panic!("button renders a single element");
		};
		for (_, handler) in button.event_handlers() {
			handler(DummyEvent::default());
		}

		assert_eq!(hits.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn test_into_event_handler_accepts_closures() {
		let hits = Arc::new(AtomicUsize::new(0));
		let handler: ViewEventHandler = {
			let hits = Arc::clone(&hits);
			move |_: DummyEvent| {
				hits.fetch_add(1, Ordering::Relaxed);
			}
		}
		.into_event_handler();

		handler(DummyEvent::default());
		assert_eq!(hits.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn test_into_event_handler_unwraps_callbacks() {
		let hits = Arc::new(AtomicUsize::new(0));
		let handler = counting_callback(&hits).into_event_handler();

		handler(DummyEvent::default());
		assert_eq!(hits.load(Ordering::Relaxed), 1);
	}
}
