//! DOM mounting for wasm32 targets.
//!
//! Converts a [`View`] tree into live DOM nodes and wires the stored event
//! handlers through `wasm-bindgen` closures. The closures are leaked with
//! `forget()`: the mounted page lives for the lifetime of the document, so
//! there is nothing to reclaim them for.

use super::{MountError, View};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

impl View {
	/// Mounts this view as a child of `document.body`.
	pub fn mount_to_body(&self) -> Result<(), MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		let body = document.body().ok_or(MountError::NoDocument)?;
		self.mount(&document, &body)
	}

	/// Mounts this view as a child of `parent`.
	pub fn mount(&self, document: &Document, parent: &Element) -> Result<(), MountError> {
		match self {
			View::Element(el) => {
				let node = document
					.create_element(el.tag_name())
					.map_err(|_| MountError::CreateElementFailed(el.tag_name().to_string()))?;

				for (name, value) in el.attrs() {
					let name_str: &str = name.as_ref();
					if super::BOOLEAN_ATTRS.contains(&name_str)
						&& !super::is_boolean_attr_truthy(value)
					{
						continue;
					}
					node.set_attribute(name, value)
						.map_err(|_| MountError::SetAttributeFailed(name.to_string()))?;
				}

				for (event_type, handler) in el.event_handlers() {
					let handler = std::sync::Arc::clone(handler);
					let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event| {
						handler(event);
					});
					node.add_event_listener_with_callback(
						event_type.as_str(),
						closure.as_ref().unchecked_ref(),
					)
					.map_err(|_| MountError::AddListenerFailed(event_type.as_str()))?;
					closure.forget();
				}

				for child in el.child_views() {
					child.mount(document, &node)?;
				}

				parent
					.append_child(&node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let node = document.create_text_node(text);
				parent
					.append_child(&node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			View::Fragment(children) => {
				for child in children {
					child.mount(document, parent)?;
				}
			}
			View::Empty => {}
		}
		Ok(())
	}
}
