use super::{ADD_BUTTON_ID, NEW_TODO_ID};
use crate::{
	component::{Callback, Component, Instance, Link},
	element::{create_element, Child, Children, Element},
};
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsCast;

#[derive(Debug, Clone)]
pub struct AddTaskProps {
	pub placeholder: String,
	pub add_label: String,
	pub on_add_task: Callback<String>,
}

/// Text input plus add button.
///
/// `input_value` shadows the input's value. It's written from `input` events and cleared after a submission,
/// but never rendered back into the field.
#[derive(Debug)]
pub struct AddTask {
	props: AddTaskProps,
	input_value: String,
}
impl AddTask {
	#[must_use]
	pub fn new(props: AddTaskProps) -> Self {
		Self {
			props,
			input_value: String::new(),
		}
	}

	/// Copies the event target's current value into the shadow state. Doesn't re-render.
	pub fn on_input_change(instance: &Instance<Self>, event: &web_sys::Event) {
		match event.target().and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok()) {
			Some(input) => instance.borrow_mut().input_value = input.value(),
			None => warn!("`input` event without an `<input>` target."),
		}
	}

	/// Submits the shadowed value as-is, unless it's blank after trimming.
	///
	/// On success, the visible field is cleared directly instead of through a re-render.
	#[instrument]
	pub fn on_add_task(instance: &Instance<Self>) {
		let (text, on_add_task) = {
			let add_task = instance.borrow();
			if add_task.input_value.trim().is_empty() {
				return trace!("Ignored blank submission.");
			}
			(add_task.input_value.clone(), add_task.props.on_add_task.clone())
		};

		on_add_task.emit(text);

		if let Some(input) = crate::document()
			.get_element_by_id(NEW_TODO_ID)
			.and_then(|input| input.dyn_into::<web_sys::HtmlInputElement>().ok())
		{
			input.set_value("");
		}
		instance.borrow_mut().input_value.clear();
	}
}
impl Component for AddTask {
	fn render(&self, link: &Link<Self>) -> Element {
		let input = create_element(
			"input",
			&[("id", NEW_TODO_ID), ("type", "text"), ("placeholder", self.props.placeholder.as_str())],
			Children::Empty,
			[("input", link.listener(|add_task, event| AddTask::on_input_change(add_task, &event)))],
		);
		let button = create_element("button", &[("id", ADD_BUTTON_ID)], self.props.add_label.as_str(), [("click", link.listener(|add_task, _| AddTask::on_add_task(add_task)))]);
		create_element("div", &[("class", "add-todo")], Children::Sequence(vec![Child::Node(input), Child::Node(button)]), [])
	}
}
