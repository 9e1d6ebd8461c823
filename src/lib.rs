#![doc(html_root_url = "https://docs.rs/todo-dom/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod element;
pub mod storage;
pub mod tasks;

use wasm_bindgen::UnwrapThrowExt;

/// The current window's document.
///
/// # Panics
///
/// Iff there is no window or it has no document, which throws into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript).
#[must_use]
pub fn document() -> web_sys::Document {
	web_sys::window()
		.expect_throw("todo-dom: No window.")
		.document()
		.expect_throw("todo-dom: No document.")
}

/// Installs `tracing-wasm` and mounts the to-do list once the page is ready.
#[cfg(feature = "start")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
	tracing_wasm::set_as_global_default();
	let document = document();
	let ready = document.clone();
	app::when_ready(&ready, move || app::launch(&document));
}
