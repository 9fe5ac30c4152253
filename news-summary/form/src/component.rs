use {
	crate::{client::HttpSummaryClient, config::FormConfig, state::FormState, submit::submit},
	dioxus::prelude::*,
};

/// Text area, submit button and result panel for one article at a time.
///
/// Reads its [`FormConfig`] from context and falls back to the default
/// relative `/summarize` endpoint.
#[component]
pub fn NewsSummary() -> Element {
	let mut state = use_signal(FormState::default);
	let client = use_hook(|| HttpSummaryClient::new(try_consume_context::<FormConfig>().unwrap_or_default()));

	rsx! {
		SummaryFormView {
			state: state(),
			on_input: move |text: String| state.write().set_article_text(text),
			on_submit: move |()| {
					let client = client.clone();
					spawn(async move {
							submit(&state, &client).await;
					});
			},
		}
	}
}

#[component]
fn SummaryFormView(state: FormState, on_input: EventHandler<String>, on_submit: EventHandler<()>) -> Element {
	let article_text = state.article_text().to_owned();
	let summary = state.summary().to_owned();
	let error = state.error().to_owned();
	let label = state.submit_label();

	rsx! {
		div { class: "max-w-3xl mx-auto p-4",
			h2 { class: "text-2xl font-semibold mb-4", "Ollama News Summary" }
			textarea {
				class: "w-full border rounded-md p-3 focus:outline-none focus:ring-2 focus:ring-blue-500 min-h-[160px]",
				placeholder: "Paste news article text here...",
				value: "{article_text}",
				oninput: move |evt| on_input.call(evt.value()),
			}
			div { class: "mt-3 flex items-center gap-3",
				button {
					class: "px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
					disabled: state.is_loading(),
					onclick: move |_| on_submit.call(()),
					"{label}"
				}
				if state.shows_error() {
					span { class: "text-red-600 text-sm", "{error}" }
				}
			}
			if state.shows_summary() {
				div { class: "mt-6 bg-white dark:bg-gray-900 border rounded-lg shadow-sm p-4",
					h3 { class: "font-medium mb-2", "Summary" }
					p { class: "text-gray-800 dark:text-gray-100 whitespace-pre-wrap", "{summary}" }
				}
			}
		}
	}
}
