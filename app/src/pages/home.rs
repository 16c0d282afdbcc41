//! The landing page.

use veranda_core::{ElementView, IntoView, View};
use veranda_ui::{Button, Callback, Component, notify};

/// Marker text identifying this page, asserted by the page tests.
pub const PAGE_MARKER: &str = "Veranda demo page";

/// The landing page: logo, getting-started instructions, and one button
/// that greets the user.
pub struct Home;

impl Component for Home {
	fn render(&self) -> View {
		ElementView::new("div")
			.attr(
				"class",
				"font-sans grid grid-rows-[20px_1fr_20px] items-center justify-items-center \
				 min-h-screen p-8 pb-20 gap-16 sm:p-20",
			)
			.child(
				ElementView::new("main")
					.attr(
						"class",
						"flex flex-col gap-[32px] row-start-2 items-center sm:items-start",
					)
					.child(
						ElementView::new("img")
							.attr("src", "/next.svg")
							.attr("alt", "Next.js logo")
							.attr("width", "180")
							.attr("height", "38")
							.attr("class", "dark:invert"),
					)
					.child(instructions())
					.child(
						ElementView::new("h1")
							.attr("class", "text-2xl font-semibold")
							.child(PAGE_MARKER),
					)
					.child(
						Button::new("Click me")
							.on_click_callback(Callback::new(|_| notify::alert("Hello")))
							.render(),
					),
			)
			.into_view()
	}

	fn name() -> &'static str {
		"Home"
	}
}

fn instructions() -> ElementView {
	ElementView::new("ol")
		.attr(
			"class",
			"font-mono list-inside list-decimal text-sm/6 text-center sm:text-left",
		)
		.child(
			ElementView::new("li")
				.attr("class", "mb-2 tracking-[-.01em]")
				.child("Get started by editing ")
				.child(
					ElementView::new("code")
						.attr(
							"class",
							"bg-black/[.05] dark:bg-white/[.06] font-mono font-semibold \
							 px-1 py-0.5 rounded",
						)
						.child("app/src/pages/home.rs"),
				),
		)
		.child(
			ElementView::new("li")
				.attr("class", "tracking-[-.01em]")
				.child("Save and see your changes instantly."),
		)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_home_renders_to_html() {
		let html = Home.render().render_to_string();
		assert!(html.starts_with("<div"));
		assert!(html.contains("<main"));
		assert!(html.contains("Click me"));
		assert!(html.contains(PAGE_MARKER));
	}

	#[test]
	fn test_home_component_name() {
		assert_eq!(Home::name(), "Home");
	}
}
