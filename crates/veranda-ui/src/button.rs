//! Button widget.
//!
//! A stateless, pure mapping from configuration to a single `<button>`
//! element. The class tokens emitted for each variant/size/disabled axis are
//! part of the external contract: tests assert the literal strings.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use veranda_core::{ElementView, EventType, IntoView, View};

use crate::callback::{Callback, IntoEventHandler};
use crate::component::{Component, Props};

/// Classes every button carries, before any axis-specific tokens.
const BASE_CLASSES: &str = "rounded font-medium transition-colors focus:outline-none";

/// Classes added on top of the variant/size tokens when disabled.
const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

/// Error returned when parsing an out-of-domain axis value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {axis} value: {value}")]
pub struct UnknownAxisValue {
	axis: &'static str,
	value: String,
}

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
	/// Primary action button.
	#[default]
	Primary,
	/// Secondary action button.
	Secondary,
	/// Destructive action button.
	Danger,
}

impl ButtonVariant {
	/// Returns the CSS classes for this variant.
	pub fn classes(self) -> &'static str {
		match self {
			Self::Primary => "bg-blue-600 text-white hover:bg-blue-700",
			Self::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300",
			Self::Danger => "bg-red-600 text-white hover:bg-red-700",
		}
	}

	/// Returns the serialized axis value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::Secondary => "secondary",
			Self::Danger => "danger",
		}
	}
}

impl FromStr for ButtonVariant {
	type Err = UnknownAxisValue;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"primary" => Ok(Self::Primary),
			"secondary" => Ok(Self::Secondary),
			"danger" => Ok(Self::Danger),
			other => Err(UnknownAxisValue {
				axis: "variant",
				value: other.to_string(),
			}),
		}
	}
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
	/// Small.
	Sm,
	/// Medium (default).
	#[default]
	Md,
	/// Large.
	Lg,
}

impl ButtonSize {
	/// Returns the CSS classes for this size.
	pub fn classes(self) -> &'static str {
		match self {
			Self::Sm => "px-3 py-1.5 text-sm",
			Self::Md => "px-4 py-2 text-base",
			Self::Lg => "px-6 py-3 text-lg",
		}
	}

	/// Returns the serialized axis value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
		}
	}
}

impl FromStr for ButtonSize {
	type Err = UnknownAxisValue;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sm" => Ok(Self::Sm),
			"md" => Ok(Self::Md),
			"lg" => Ok(Self::Lg),
			other => Err(UnknownAxisValue {
				axis: "size",
				value: other.to_string(),
			}),
		}
	}
}

/// The HTML `type` attribute of the button element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
	/// Plain button (default).
	#[default]
	Button,
	/// Form submission button.
	Submit,
	/// Form reset button.
	Reset,
}

impl ButtonType {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Submit => "submit",
			Self::Reset => "reset",
		}
	}
}

impl FromStr for ButtonType {
	type Err = UnknownAxisValue;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"button" => Ok(Self::Button),
			"submit" => Ok(Self::Submit),
			"reset" => Ok(Self::Reset),
			other => Err(UnknownAxisValue {
				axis: "type",
				value: other.to_string(),
			}),
		}
	}
}

/// A reusable button component.
///
/// # Example
///
/// ```
/// use veranda_ui::{Button, ButtonVariant, Component};
///
/// let html = Button::new("Click me")
/// 	.variant(ButtonVariant::Danger)
/// 	.render()
/// 	.render_to_string();
///
/// assert!(html.contains("bg-red-600"));
/// assert!(html.contains(">Click me</button>"));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Button {
	label: String,
	variant: ButtonVariant,
	size: ButtonSize,
	disabled: bool,
	#[serde(rename = "type")]
	button_type: ButtonType,
	class: Option<String>,
	#[serde(skip)]
	on_click: Option<Callback>,
}

impl Button {
	/// Creates a button with the given label and default configuration.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			..Self::default()
		}
	}

	/// Sets the visual variant.
	pub fn variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Sets the disabled state.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Sets the HTML `type` attribute.
	pub fn button_type(mut self, button_type: ButtonType) -> Self {
		self.button_type = button_type;
		self
	}

	/// Appends caller-supplied class tokens after the default ones.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets the click handler.
	#[cfg(target_arch = "wasm32")]
	pub fn on_click(mut self, handler: impl Fn(web_sys::Event) + 'static) -> Self {
		self.on_click = Some(Callback::new(handler));
		self
	}

	/// Sets the click handler.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn on_click(
		mut self,
		handler: impl Fn(veranda_core::DummyEvent) + Send + Sync + 'static,
	) -> Self {
		self.on_click = Some(Callback::new(handler));
		self
	}

	/// Sets the click handler from an existing [`Callback`].
	pub fn on_click_callback(mut self, callback: Callback) -> Self {
		self.on_click = Some(callback);
		self
	}

	/// Composes the full class attribute: base, variant, size, disabled
	/// override, then custom tokens, space-separated in that order.
	fn class_attribute(&self) -> String {
		let mut class = String::from(BASE_CLASSES);
		class.push(' ');
		class.push_str(self.variant.classes());
		class.push(' ');
		class.push_str(self.size.classes());
		if self.disabled {
			class.push(' ');
			class.push_str(DISABLED_CLASSES);
		}
		if let Some(extra) = &self.class {
			class.push(' ');
			class.push_str(extra);
		}
		class
	}
}

impl Component for Button {
	fn render(&self) -> View {
		let mut el = ElementView::new("button")
			.attr("data-testid", "button")
			.attr("type", self.button_type.as_str())
			.bool_attr("disabled", self.disabled)
			.attr("class", self.class_attribute())
			.child(self.label.clone());

		// A disabled button never gets a handler: the rendered state and the
		// interactivity cannot disagree.
		if !self.disabled {
			if let Some(callback) = &self.on_click {
				el = el.on(EventType::Click, callback.clone().into_event_handler());
			}
		}

		el.into_view()
	}

	fn name() -> &'static str {
		"Button"
	}
}

impl Props for Button {
	fn from_attrs(attrs: &HashMap<String, String>) -> Self {
		Self {
			label: attrs.get("label").cloned().unwrap_or_default(),
			variant: attrs
				.get("variant")
				.and_then(|v| v.parse().ok())
				.unwrap_or_default(),
			size: attrs
				.get("size")
				.and_then(|v| v.parse().ok())
				.unwrap_or_default(),
			disabled: attrs.get("disabled").map(|v| v == "true").unwrap_or(false),
			button_type: attrs
				.get("type")
				.and_then(|v| v.parse().ok())
				.unwrap_or_default(),
			class: attrs.get("class").cloned(),
			on_click: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::serialize_props;
	use rstest::rstest;

	#[rstest]
	#[case(ButtonVariant::Primary, "bg-blue-600")]
	#[case(ButtonVariant::Secondary, "bg-gray-200")]
	#[case(ButtonVariant::Danger, "bg-red-600")]
	fn test_variant_background_token(#[case] variant: ButtonVariant, #[case] token: &str) {
		assert!(variant.classes().contains(token));
	}

	#[rstest]
	#[case(ButtonSize::Sm, "px-3 py-1.5 text-sm")]
	#[case(ButtonSize::Md, "px-4 py-2 text-base")]
	#[case(ButtonSize::Lg, "px-6 py-3 text-lg")]
	fn test_size_tokens(#[case] size: ButtonSize, #[case] classes: &str) {
		assert_eq!(size.classes(), classes);
	}

	#[rstest]
	fn test_axis_round_trips() {
		assert_eq!("danger".parse::<ButtonVariant>().unwrap().as_str(), "danger");
		assert_eq!("lg".parse::<ButtonSize>().unwrap().as_str(), "lg");
		assert_eq!("submit".parse::<ButtonType>().unwrap().as_str(), "submit");
	}

	#[rstest]
	fn test_out_of_domain_axis_value_is_rejected() {
		let err = "ghost".parse::<ButtonVariant>().unwrap_err();
		assert_eq!(err.to_string(), "unknown variant value: ghost");
		assert!("xl".parse::<ButtonSize>().is_err());
		assert!("image".parse::<ButtonType>().is_err());
	}

	#[rstest]
	fn test_class_attribute_order() {
		let button = Button::new("Combined")
			.variant(ButtonVariant::Danger)
			.size(ButtonSize::Lg)
			.disabled(true)
			.class("custom-class");
		assert_eq!(
			button.class_attribute(),
			"rounded font-medium transition-colors focus:outline-none \
			 bg-red-600 text-white hover:bg-red-700 px-6 py-3 text-lg \
			 opacity-50 cursor-not-allowed custom-class"
		);
	}

	#[rstest]
	fn test_custom_class_is_appended_not_replacing() {
		let class = Button::new("x").class("custom-class").class_attribute();
		assert!(class.contains("bg-blue-600"));
		assert!(class.contains("px-4"));
		assert!(class.ends_with("custom-class"));
	}

	#[rstest]
	fn test_serialized_props_round_trip_through_attrs() {
		let button = Button::new("Click me")
			.variant(ButtonVariant::Secondary)
			.size(ButtonSize::Sm)
			.disabled(true)
			.button_type(ButtonType::Submit)
			.class("extra");

		let attrs = serialize_props(&button).unwrap();
		assert_eq!(attrs.get("variant"), Some(&"secondary".to_string()));
		assert_eq!(attrs.get("type"), Some(&"submit".to_string()));

		let restored = Button::from_attrs(&attrs);
		assert_eq!(restored.label, "Click me");
		assert_eq!(restored.variant, ButtonVariant::Secondary);
		assert_eq!(restored.size, ButtonSize::Sm);
		assert!(restored.disabled);
		assert_eq!(restored.button_type, ButtonType::Submit);
		assert_eq!(restored.class.as_deref(), Some("extra"));
	}

	#[rstest]
	fn test_hydration_attrs_with_garbage_fall_back_to_defaults() {
		let mut attrs = HashMap::new();
		attrs.insert("variant".to_string(), "ghost".to_string());
		attrs.insert("size".to_string(), "huge".to_string());

		let button = Button::from_attrs(&attrs);
		assert_eq!(button.variant, ButtonVariant::Primary);
		assert_eq!(button.size, ButtonSize::Md);
	}
}
