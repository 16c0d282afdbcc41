//! The view tree: elements, text, fragments.
//!
//! ## Example
//!
//! ```
//! use veranda_core::view::{ElementView, IntoView};
//!
//! let view = ElementView::new("div")
//! 	.attr("class", "container")
//! 	.child("Hello, World!")
//! 	.into_view();
//!
//! assert_eq!(view.render_to_string(), "<div class=\"container\">Hello, World!</div>");
//! ```

pub mod event;
#[cfg(target_arch = "wasm32")]
mod mount;
pub mod util;

pub use event::EventType;
pub use util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};

use std::borrow::Cow;
use std::sync::Arc;

/// Type alias for event handler functions.
#[cfg(target_arch = "wasm32")]
pub type ViewEventHandler = Arc<dyn Fn(web_sys::Event) + 'static>;

/// Dummy event type for non-WASM environments.
///
/// Keeps handler signatures identical across targets: user code writes
/// `|_event| { ... }` whether it compiles for the browser or not.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct DummyEvent;

#[cfg(not(target_arch = "wasm32"))]
impl DummyEvent {
	/// No-op counterpart of `web_sys::Event::prevent_default`.
	pub fn prevent_default(&self) {}
}

/// Type alias for event handler functions (non-WASM placeholder).
#[cfg(not(target_arch = "wasm32"))]
pub type ViewEventHandler = Arc<dyn Fn(DummyEvent) + Send + Sync + 'static>;

/// Error type for mounting views to the DOM.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	#[error("window object not available")]
	NoWindow,
	#[error("document object not available")]
	NoDocument,
	#[error("failed to create element <{0}>")]
	CreateElementFailed(String),
	#[error("failed to set attribute {0:?}")]
	SetAttributeFailed(String),
	#[error("failed to append child node")]
	AppendChildFailed,
	#[error("failed to attach {0} listener")]
	AddListenerFailed(&'static str),
}

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
pub struct ElementView {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes, in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, ViewEventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// Boolean attributes in HTML are either present (true) or absent
	/// (false). When true, the attribute is added with its own name as the
	/// value (e.g., `disabled="disabled"`); when false, nothing is added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: ViewEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the named attribute, if present.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, ViewEventHandler)] {
		&self.event_handlers
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					// Boolean attributes with falsy values must be absent entirely
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape::encode_double_quoted_attribute(value.as_ref()));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape::encode_text(text.as_ref()));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self.clone()))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<A: IntoView, B: IntoView> IntoView for (A, B) {
	fn into_view(self) -> View {
		View::Fragment(vec![self.0.into_view(), self.1.into_view()])
	}
}

impl<A: IntoView, B: IntoView, C: IntoView> IntoView for (A, B, C) {
	fn into_view(self) -> View {
		View::Fragment(vec![
			self.0.into_view(),
			self.1.into_view(),
			self.2.into_view(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_element_view_creation() {
		let el = ElementView::new("div");
		assert_eq!(el.tag, "div");
		assert!(!el.is_void);
		assert!(el.attrs.is_empty());
		assert!(el.children.is_empty());
	}

	#[test]
	fn test_void_element_detection() {
		assert!(ElementView::new("br").is_void);
		assert!(ElementView::new("img").is_void);
		assert!(!ElementView::new("div").is_void);
		assert!(!ElementView::new("button").is_void);
	}

	#[test]
	fn test_render_simple_element() {
		let view = ElementView::new("div").into_view();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[test]
	fn test_render_element_with_attrs() {
		let view = ElementView::new("div")
			.attr("class", "container")
			.attr("id", "main")
			.into_view();
		let html = view.render_to_string();
		assert!(html.contains("class=\"container\""));
		assert!(html.contains("id=\"main\""));
	}

	#[test]
	fn test_render_void_element() {
		let view = ElementView::new("img").attr("src", "/next.svg").into_view();
		assert_eq!(view.render_to_string(), "<img src=\"/next.svg\" />");
	}

	#[test]
	fn test_render_element_with_children() {
		let view = ElementView::new("div")
			.child("Hello, ")
			.child(ElementView::new("strong").child("World"))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[test]
	fn test_render_text_with_escaping() {
		let view = View::text("<script>alert('xss')</script>");
		let html = view.render_to_string();
		assert!(!html.contains('<'));
		assert!(html.starts_with("&lt;script&gt;"));
	}

	#[test]
	fn test_render_fragment() {
		let view = View::fragment(["One", "Two", "Three"]);
		assert_eq!(view.render_to_string(), "OneTwoThree");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(View::empty().render_to_string(), "");
	}

	#[test]
	fn test_into_view_option() {
		assert_eq!(Some("Hello").into_view().render_to_string(), "Hello");
		assert_eq!(None::<String>.into_view().render_to_string(), "");
	}

	#[test]
	fn test_into_view_vec_and_tuple() {
		assert_eq!(vec!["A", "B", "C"].into_view().render_to_string(), "ABC");
		assert_eq!(
			("Hello, ", "World!").into_view().render_to_string(),
			"Hello, World!"
		);
	}

	#[test]
	fn test_bool_attr_true_rendered_with_own_name() {
		let view = ElementView::new("button")
			.bool_attr("disabled", true)
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<button disabled=\"disabled\"></button>"
		);
	}

	#[test]
	fn test_bool_attr_false_not_rendered() {
		let view = ElementView::new("button")
			.bool_attr("disabled", false)
			.into_view();
		assert_eq!(view.render_to_string(), "<button></button>");
	}

	#[test]
	fn test_boolean_attr_falsy_value_not_rendered() {
		let view = ElementView::new("button")
			.attr("disabled", "false")
			.into_view();
		assert_eq!(view.render_to_string(), "<button></button>");
	}

	#[test]
	fn test_attr_value_lookup() {
		let el = ElementView::new("button")
			.attr("type", "submit")
			.attr("data-testid", "button");
		assert_eq!(el.attr_value("type"), Some("submit"));
		assert_eq!(el.attr_value("data-testid"), Some("button"));
		assert_eq!(el.attr_value("class"), None);
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_event_handler_stored() {
		let el = ElementView::new("button").on(EventType::Click, Arc::new(|_: DummyEvent| {}));
		assert_eq!(el.event_handlers().len(), 1);
		assert_eq!(el.event_handlers()[0].0, EventType::Click);
	}
}
