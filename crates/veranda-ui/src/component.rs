//! Component and Props traits.

use std::collections::HashMap;

use veranda_core::View;

/// Trait for reusable UI components.
///
/// Components are pure functions from their fields to a [`View`] tree: no
/// internal state, no identity beyond the values they are built from.
///
/// # Example
///
/// ```
/// use veranda_core::{ElementView, IntoView, View};
/// use veranda_ui::Component;
///
/// struct Tagline {
/// 	text: String,
/// }
///
/// impl Component for Tagline {
/// 	fn render(&self) -> View {
/// 		ElementView::new("p")
/// 			.attr("class", "text-sm text-gray-500")
/// 			.child(self.text.clone())
/// 			.into_view()
/// 	}
///
/// 	fn name() -> &'static str {
/// 		"Tagline"
/// 	}
/// }
///
/// let tagline = Tagline { text: "Build pages from plain values.".into() };
/// assert_eq!(
/// 	tagline.render().render_to_string(),
/// 	"<p class=\"text-sm text-gray-500\">Build pages from plain values.</p>"
/// );
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging and hydration.
	fn name() -> &'static str
	where
		Self: Sized;
}

/// Trait for component properties.
///
/// Props are the input data for components. They can be constructed from
/// HTML attributes (the hydration path) or directly in code.
pub trait Props: Default {
	/// Constructs props from HTML attributes.
	///
	/// Missing keys fall back to the field defaults; unparseable values do
	/// too, since the serialized form is produced by [`serialize_props`]
	/// and an out-of-domain value means the markup was not ours.
	fn from_attrs(attrs: &HashMap<String, String>) -> Self;
}

/// Serializes props to HTML attributes for SSR.
pub fn serialize_props<P: serde::Serialize>(
	props: &P,
) -> Result<HashMap<String, String>, serde_json::Error> {
	let mut attrs = HashMap::new();
	if let serde_json::Value::Object(map) = serde_json::to_value(props)? {
		for (key, value) in map {
			if let Some(value) = attr_value(value) {
				attrs.insert(key, value);
			}
		}
	}
	Ok(attrs)
}

/// Attribute representation of a serialized field. `None` fields are
/// dropped rather than written out as `"null"`.
fn attr_value(value: serde_json::Value) -> Option<String> {
	match value {
		serde_json::Value::Null => None,
		serde_json::Value::String(s) => Some(s),
		other => Some(other.to_string()),
	}
}
