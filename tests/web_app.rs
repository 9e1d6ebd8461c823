use std::{cell::Cell, rc::Rc};
use todo_dom::{
	app::{config_for, launch, when_ready},
	config::Locale,
	storage::{LocalStorage, Storage},
	tasks::{TaskId, TaskRecord},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlInputElement;

wasm_bindgen_test_configure!(run_in_browser);

static mut LOG_INITIALIZED: bool = false;

fn init_log() {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}
}

fn local_storage() -> web_sys::Storage {
	web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn set_lang(lang: Option<&str>) {
	let html = todo_dom::document().document_element().unwrap();
	match lang {
		Some(lang) => html.set_attribute("lang", lang).unwrap(),
		None => html.remove_attribute("lang").unwrap(),
	}
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
	init_log();
	let key = "todo-dom-test-round-trip";
	local_storage().remove_item(key).unwrap();

	let storage = LocalStorage::from_window().unwrap();
	assert!(storage.load(key).unwrap().is_none());

	let tasks = [TaskRecord { id: TaskId(1), text: "Сделать домашку".to_owned(), completed: true }];
	storage.save(key, &tasks).unwrap();
	assert_eq!(storage.load(key).unwrap().unwrap(), tasks);
	assert_eq!(local_storage().get_item(key).unwrap().as_deref(), Some(r#"[{"id":1,"text":"Сделать домашку","completed":true}]"#));

	local_storage().set_item(key, "not json").unwrap();
	assert!(storage.load(key).is_err());

	local_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn config_follows_html_lang() {
	init_log();
	let document = todo_dom::document();

	set_lang(Some("en-US"));
	assert_eq!(config_for(&document).locale, Locale::En);
	set_lang(Some("ru"));
	assert_eq!(config_for(&document).locale, Locale::Ru);
	set_lang(None);
	assert_eq!(config_for(&document).locale, Locale::Ru);
}

#[wasm_bindgen_test]
fn when_ready_runs_once_the_document_is_loaded() {
	init_log();
	let ran = Rc::new(Cell::new(false));
	when_ready(&todo_dom::document(), {
		let ran = ran.clone();
		move || ran.set(true)
	});
	assert!(ran.get());
}

#[wasm_bindgen_test]
fn launch_mounts_one_list_backed_by_local_storage() {
	init_log();
	let document = todo_dom::document();
	local_storage().remove_item("tasks").unwrap();
	set_lang(Some("en"));

	launch(&document);

	let lists = document.query_selector_all("body > .todo-list").unwrap();
	assert_eq!(lists.length(), 1);
	let input: HtmlInputElement = document.query_selector("#new-todo").unwrap().unwrap().dyn_into().unwrap();
	assert_eq!(input.placeholder(), "Task");
	assert_eq!(document.query_selector_all("#todos > li").unwrap().length(), 3);

	input.set_value("persisted");
	input.dispatch_event(&web_sys::Event::new("input").unwrap()).unwrap();
	document.get_element_by_id("add-btn").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap().click();
	let stored = LocalStorage::from_window().unwrap().load("tasks").unwrap().unwrap();
	assert_eq!(stored.len(), 4);
	assert_eq!(stored[3].text, "persisted");

	// `launch` mounts for the page's lifetime.
	document.query_selector(".todo-list").unwrap().unwrap().remove();
	local_storage().remove_item("tasks").unwrap();
	set_lang(None);
}
