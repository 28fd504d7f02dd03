// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;
use leptos_meta::Title;

/// The "404 | This page could not be found." block. Renders the same markup every time and touches nothing outside
/// itself.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="items-center h-full justify-center flex text-white flex-grow m-20">
			<div class="flex items-center gap-6">
				<span class="text-3xl">"404"</span>
				<span class="h-12 w-px bg-gray-300 block" />
				<span>"This page could not be found."</span>
			</div>
		</div>
	}
}

/// Router fallback. Sets the document title and, when rendering on the server, the 404 response status before
/// mounting [`NotFound`].
#[component]
pub fn NotFoundPage() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<Title text="404: This page could not be found." />
		<NotFound />
	}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
	use super::*;
	use scraper::{ElementRef, Html, Selector};

	fn render_not_found() -> String {
		let owner = Owner::new();
		owner.with(|| view! { <NotFound /> }.to_html())
	}

	fn select<'a>(fragment: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
		let selector = Selector::parse(selector).unwrap();
		fragment.select(&selector).collect()
	}

	fn classes<'a>(element: &ElementRef<'a>) -> Vec<&'a str> {
		element.value().classes().collect()
	}

	#[test]
	fn shows_only_the_status_and_message() {
		let fragment = Html::parse_fragment(&render_not_found());
		let text: Vec<&str> = fragment
			.root_element()
			.text()
			.map(str::trim)
			.filter(|text| !text.is_empty())
			.collect();

		assert_eq!(text, vec!["404", "This page could not be found."]);
	}

	#[test]
	fn row_sits_inside_centered_container() {
		let fragment = Html::parse_fragment(&render_not_found());

		let containers = select(&fragment, "div.m-20");
		assert_eq!(containers.len(), 1);
		let container_classes = classes(&containers[0]);
		for class in ["items-center", "h-full", "justify-center", "flex", "text-white", "flex-grow"] {
			assert!(container_classes.contains(&class), "container is missing {}", class);
		}

		let rows = select(&fragment, "div.m-20 > div.gap-6");
		assert_eq!(rows.len(), 1);
		let row_classes = classes(&rows[0]);
		assert!(row_classes.contains(&"flex"));
		assert!(row_classes.contains(&"items-center"));
	}

	#[test]
	fn single_divider_between_labels() {
		let fragment = Html::parse_fragment(&render_not_found());
		let spans = select(&fragment, "div.m-20 > div.gap-6 > span");
		assert_eq!(spans.len(), 3);

		let span_text: Vec<String> = spans.iter().map(|span| span.text().collect()).collect();
		assert_eq!(span_text, vec!["404", "", "This page could not be found."]);

		assert!(classes(&spans[0]).contains(&"text-3xl"));
		let divider_classes = classes(&spans[1]);
		for class in ["h-12", "w-px", "bg-gray-300", "block"] {
			assert!(divider_classes.contains(&class), "divider is missing {}", class);
		}
		assert_eq!(spans[1].children().count(), 0);

		assert_eq!(select(&fragment, "span.w-px").len(), 1);
	}

	#[test]
	fn repeated_renders_are_identical() {
		let first = render_not_found();
		let second = render_not_found();
		assert_eq!(first, second);
	}
}
