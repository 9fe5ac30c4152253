use dioxus::{
	prelude::*,
	web::{Config, launch::launch_cfg},
};
use summary_form::{FormConfig, NewsSummary};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

#[component]
fn App() -> Element {
	use_context_provider(FormConfig::default);
	rsx! {
		NewsSummary {}
	}
}
