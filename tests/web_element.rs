use std::{cell::RefCell, rc::Rc};
use todo_dom::element::{create_element, Child, Children, Listener};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

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

#[wasm_bindgen_test]
fn attributes_are_set_verbatim() {
	init_log();
	let element = create_element("div", &[("class", "a b"), ("data-x", "<&>"), ("style", "")], Children::Empty, []);
	let node = element.node();
	assert_eq!(node.tag_name(), "DIV");
	assert_eq!(node.get_attribute("class").as_deref(), Some("a b"));
	assert_eq!(node.get_attribute("data-x").as_deref(), Some("<&>"));
	assert_eq!(node.get_attribute("style").as_deref(), Some(""));
	assert_eq!(node.child_nodes().length(), 0);
}

#[wasm_bindgen_test]
fn invalid_attribute_is_skipped() {
	init_log();
	let element = create_element("div", &[("1 invalid", "x"), ("id", "valid")], Children::Empty, []);
	assert_eq!(element.node().get_attribute_names().length(), 1);
	assert_eq!(element.node().id(), "valid");
}

#[wasm_bindgen_test]
fn single_text() {
	init_log();
	let element = create_element("label", &[], "Hello todo-dom!", []);
	assert_eq!(element.node().child_nodes().length(), 1);
	assert_eq!(element.node().text_content().as_deref(), Some("Hello todo-dom!"));
}

#[wasm_bindgen_test]
fn sequence_keeps_order() {
	init_log();
	let inner = create_element("b", &[], "bold", []);
	let element = create_element("p", &[], Children::Sequence(vec![Child::from("before "), Child::Node(inner), Child::from(String::from(" after"))]), []);
	let child_nodes = element.node().child_nodes();
	assert_eq!(child_nodes.length(), 3);
	assert_eq!(child_nodes.item(0).unwrap().node_type(), web_sys::Node::TEXT_NODE);
	assert_eq!(child_nodes.item(1).unwrap().node_name(), "B");
	assert_eq!(element.node().inner_html(), "before <b>bold</b> after");
}

#[wasm_bindgen_test]
fn single_node() {
	init_log();
	let element = create_element("ul", &[], create_element("li", &[], "only", []), []);
	assert_eq!(element.node().inner_html(), "<li>only</li>");
}

#[wasm_bindgen_test]
fn absent_children() {
	init_log();
	let element = create_element("span", &[], None::<&str>, []);
	assert!(element.node().first_child().is_none());
}

#[wasm_bindgen_test]
fn listeners_fire_per_registration() {
	init_log();
	let clicks = Rc::new(RefCell::new(Vec::new()));
	let listener = |tag: &'static str| {
		let clicks = clicks.clone();
		Listener::new(move |event: web_sys::Event| {
			assert_eq!(event.type_(), "click");
			clicks.borrow_mut().push(tag);
		})
	};

	let element = create_element("button", &[], "+", [("click", listener("first")), ("click", listener("second")), ("focus", listener("never"))]);
	let button: &HtmlElement = element.node().dyn_ref().unwrap();
	button.click();
	button.click();

	assert_eq!(*clicks.borrow(), ["first", "second", "first", "second"]);
}

#[wasm_bindgen_test]
fn nested_listeners_move_into_the_parent() {
	init_log();
	let clicks = Rc::new(RefCell::new(0));
	let button = {
		let clicks = clicks.clone();
		create_element("button", &[], "+", [("click", Listener::new(move |_| *clicks.borrow_mut() += 1))])
	};
	let button_node: HtmlElement = button.node().clone().dyn_into().unwrap();
	let parent = create_element("div", &[], button, []);

	button_node.click();
	assert_eq!(*clicks.borrow(), 1);
	drop(parent);
}
