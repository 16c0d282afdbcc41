//! DOM-style queries over a rendered view tree.
//!
//! Query priority follows accessibility practice: prefer roles, then text,
//! then the `data-testid` fallback.

use veranda_core::{ElementView, View, is_boolean_attr_truthy};

/// A located element in a view tree.
#[derive(Debug, Clone, Copy)]
pub struct ViewRef<'a> {
	element: &'a ElementView,
}

impl<'a> ViewRef<'a> {
	/// Returns the tag name.
	pub fn tag(&self) -> &'a str {
		self.element.tag_name()
	}

	/// Returns the value of the named attribute, if present.
	pub fn attr(&self, name: &str) -> Option<&'a str> {
		self.element.attr_value(name)
	}

	/// Returns the class attribute split into individual tokens.
	pub fn classes(&self) -> Vec<&'a str> {
		self.attr("class")
			.map(|c| c.split_whitespace().collect())
			.unwrap_or_default()
	}

	/// Returns whether the class attribute contains every given token.
	pub fn has_classes(&self, tokens: &[&str]) -> bool {
		let classes = self.classes();
		tokens.iter().all(|t| classes.contains(t))
	}

	/// Returns the concatenated text content of this element's subtree.
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		collect_text(self.element, &mut text);
		text
	}

	/// Returns whether the element carries a truthy `disabled` attribute.
	pub fn is_disabled(&self) -> bool {
		self.attr("disabled")
			.map(is_boolean_attr_truthy)
			.unwrap_or(false)
	}

	pub(crate) fn element(&self) -> &'a ElementView {
		self.element
	}
}

/// Result of a query: zero or more matching elements.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
	matches: Vec<ViewRef<'a>>,
	query_description: String,
}

impl<'a> QueryResult<'a> {
	fn new(matches: Vec<ViewRef<'a>>, description: impl Into<String>) -> Self {
		Self {
			matches,
			query_description: description.into(),
		}
	}

	/// Returns the first matching element.
	///
	/// # Panics
	///
	/// Panics if nothing matched; use [`query`](Self::query) for the
	/// non-panicking variant.
	pub fn get(&self) -> ViewRef<'a> {
		*self
			.matches
			.first()
			.unwrap_or_else(|| panic!("no element found for query: {}", self.query_description))
	}

	/// Returns the first matching element, or `None`.
	pub fn query(&self) -> Option<ViewRef<'a>> {
		self.matches.first().copied()
	}

	/// Returns all matching elements.
	pub fn get_all(&self) -> Vec<ViewRef<'a>> {
		self.matches.clone()
	}

	/// Returns the number of matches.
	pub fn count(&self) -> usize {
		self.matches.len()
	}

	/// Returns whether anything matched.
	pub fn exists(&self) -> bool {
		!self.matches.is_empty()
	}
}

/// Query scope over a rendered view tree.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
	root: &'a View,
}

impl<'a> Screen<'a> {
	/// Creates a query scope over the given view.
	pub fn of(root: &'a View) -> Self {
		Self { root }
	}

	/// Returns the root element of the scope, when the root view is one.
	pub fn root_element(&self) -> Option<ViewRef<'a>> {
		match self.root {
			View::Element(el) => Some(ViewRef { element: el }),
			_ => None,
		}
	}

	/// Queries elements by their `data-testid` attribute.
	pub fn get_by_test_id(&self, test_id: &str) -> QueryResult<'a> {
		let matches = self.elements_matching(&|el| el.attr_value("data-testid") == Some(test_id));
		QueryResult::new(matches, format!("data-testid=\"{test_id}\""))
	}

	/// Queries elements by ARIA role, explicit or implicit from the tag.
	pub fn get_by_role(&self, role: &str) -> QueryResult<'a> {
		let matches = self.elements_matching(&|el| {
			el.attr_value("role") == Some(role) || implicit_role(el) == Some(role)
		});
		QueryResult::new(matches, format!("role=\"{role}\""))
	}

	/// Queries elements by text content (case-insensitive substring).
	///
	/// Returns the most specific elements: an ancestor is skipped when one
	/// of its element children already contains the text.
	pub fn get_by_text(&self, text: &str) -> QueryResult<'a> {
		let needle = text.to_lowercase();
		let mut matches = Vec::new();
		text_matches_in_view(self.root, &needle, &mut matches);
		QueryResult::new(matches, format!("text=\"{text}\""))
	}

	/// Queries elements by their `alt` attribute (case-insensitive substring).
	pub fn get_by_alt_text(&self, alt: &str) -> QueryResult<'a> {
		let needle = alt.to_lowercase();
		let matches = self.elements_matching(&|el| {
			el.attr_value("alt")
				.map(|v| v.to_lowercase().contains(&needle))
				.unwrap_or(false)
		});
		QueryResult::new(matches, format!("alt=\"{alt}\""))
	}

	fn elements_matching(&self, predicate: &dyn Fn(&ElementView) -> bool) -> Vec<ViewRef<'a>> {
		let mut matches = Vec::new();
		walk_elements(self.root, &mut |el| {
			if predicate(el) {
				matches.push(ViewRef { element: el });
			}
		});
		matches
	}
}

/// Returns the implicit ARIA role for an HTML tag, if it has one.
fn implicit_role(el: &ElementView) -> Option<&'static str> {
	match el.tag_name() {
		"button" => Some("button"),
		"main" => Some("main"),
		"nav" => Some("navigation"),
		"header" => Some("banner"),
		"footer" => Some("contentinfo"),
		"form" => Some("form"),
		"ul" | "ol" => Some("list"),
		"li" => Some("listitem"),
		"img" => Some("img"),
		"h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
		"a" if el.attr_value("href").is_some() => Some("link"),
		_ => None,
	}
}

fn walk_elements<'a>(view: &'a View, visit: &mut dyn FnMut(&'a ElementView)) {
	match view {
		View::Element(el) => {
			visit(el);
			for child in el.child_views() {
				walk_elements(child, visit);
			}
		}
		View::Fragment(children) => {
			for child in children {
				walk_elements(child, visit);
			}
		}
		View::Text(_) | View::Empty => {}
	}
}

fn collect_text(el: &ElementView, out: &mut String) {
	for child in el.child_views() {
		collect_text_in_view(child, out);
	}
}

fn collect_text_in_view(view: &View, out: &mut String) {
	match view {
		View::Element(el) => collect_text(el, out),
		View::Text(text) => out.push_str(text),
		View::Fragment(children) => {
			for child in children {
				collect_text_in_view(child, out);
			}
		}
		View::Empty => {}
	}
}

/// Element children of an element, looking through fragments.
fn element_children<'a>(el: &'a ElementView) -> Vec<&'a ElementView> {
	let mut out = Vec::new();
	for child in el.child_views() {
		elements_in_view(child, &mut out);
	}
	out
}

fn elements_in_view<'a>(view: &'a View, out: &mut Vec<&'a ElementView>) {
	match view {
		View::Element(el) => out.push(el),
		View::Fragment(children) => {
			for child in children {
				elements_in_view(child, out);
			}
		}
		View::Text(_) | View::Empty => {}
	}
}

fn text_matches_in_view<'a>(view: &'a View, needle: &str, matches: &mut Vec<ViewRef<'a>>) {
	match view {
		View::Element(el) => text_matches_in_element(el, needle, matches),
		View::Fragment(children) => {
			for child in children {
				text_matches_in_view(child, needle, matches);
			}
		}
		View::Text(_) | View::Empty => {}
	}
}

fn text_matches_in_element<'a>(
	el: &'a ElementView,
	needle: &str,
	matches: &mut Vec<ViewRef<'a>>,
) {
	let mut text = String::new();
	collect_text(el, &mut text);
	if !text.to_lowercase().contains(needle) {
		return;
	}

	let mut child_matched = false;
	for child in element_children(el) {
		let mut child_text = String::new();
		collect_text(child, &mut child_text);
		if child_text.to_lowercase().contains(needle) {
			child_matched = true;
			text_matches_in_element(child, needle, matches);
		}
	}
	if !child_matched {
		matches.push(ViewRef { element: el });
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use veranda_core::{ElementView, IntoView};

	fn sample_view() -> View {
		ElementView::new("main")
			.child(
				ElementView::new("h1")
					.attr("class", "title big")
					.child("Welcome"),
			)
			.child(
				ElementView::new("ol").child(
					ElementView::new("li")
						.child("Edit ")
						.child(ElementView::new("code").child("src/lib.rs")),
				),
			)
			.child(
				ElementView::new("button")
					.attr("data-testid", "button")
					.attr("type", "button")
					.child("Go"),
			)
			.into_view()
	}

	#[test]
	fn test_get_by_test_id() {
		let view = sample_view();
		let screen = Screen::of(&view);
		let button = screen.get_by_test_id("button").get();
		assert_eq!(button.tag(), "button");
		assert_eq!(button.attr("type"), Some("button"));
	}

	#[test]
	#[should_panic(expected = "no element found for query: data-testid=\"missing\"")]
	fn test_get_panics_with_query_description() {
		let view = sample_view();
		Screen::of(&view).get_by_test_id("missing").get();
	}

	#[test]
	fn test_get_by_role_implicit() {
		let view = sample_view();
		let screen = Screen::of(&view);
		assert!(screen.get_by_role("main").exists());
		assert!(screen.get_by_role("list").exists());
		assert_eq!(screen.get_by_role("listitem").count(), 1);
		assert_eq!(screen.get_by_role("heading").get().tag(), "h1");
	}

	#[test]
	fn test_get_by_role_explicit_attribute() {
		let view = ElementView::new("div").attr("role", "button").into_view();
		assert!(Screen::of(&view).get_by_role("button").exists());
	}

	#[test]
	fn test_get_by_text_returns_most_specific_element() {
		let view = sample_view();
		let screen = Screen::of(&view);
		// The <code> child holds the path, so the <li> ancestor is skipped
		assert_eq!(screen.get_by_text("src/lib.rs").get().tag(), "code");
		// "Edit " lives directly in the <li>
		assert_eq!(screen.get_by_text("Edit").get().tag(), "li");
	}

	#[test]
	fn test_text_content_concatenates_subtree() {
		let view = sample_view();
		let li = Screen::of(&view).get_by_role("listitem").get();
		assert_eq!(li.text_content(), "Edit src/lib.rs");
	}

	#[test]
	fn test_classes_and_has_classes() {
		let view = sample_view();
		let heading = Screen::of(&view).get_by_role("heading").get();
		assert_eq!(heading.classes(), vec!["title", "big"]);
		assert!(heading.has_classes(&["big", "title"]));
		assert!(!heading.has_classes(&["title", "small"]));
	}

	#[test]
	fn test_is_disabled() {
		let enabled = ElementView::new("button").into_view();
		let disabled = ElementView::new("button")
			.bool_attr("disabled", true)
			.into_view();
		assert!(!Screen::of(&enabled).get_by_role("button").get().is_disabled());
		assert!(Screen::of(&disabled).get_by_role("button").get().is_disabled());
	}
}
