use crate::{
	component::{Callback, Component, Instance, Link},
	element::{create_element, Child, Children, Element},
	tasks::TaskId,
};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;

#[derive(Debug, Clone)]
pub struct TaskProps {
	pub id: TaskId,
	pub text: String,
	pub completed: bool,
	pub delete_label: String,
	pub on_toggle: Callback<TaskId>,
	pub on_delete: Callback<TaskId>,
}

/// One list item: checkbox, label and a delete button that has to be clicked twice.
#[derive(Debug)]
pub struct Task {
	props: TaskProps,
	delete_confirmation: bool,
}
impl Task {
	#[must_use]
	pub fn new(props: TaskProps) -> Self {
		Self {
			props,
			delete_confirmation: false,
		}
	}

	/// Delegates to the parent, which re-renders (and so replaces) this task.
	#[instrument]
	pub fn on_toggle(instance: &Instance<Self>) {
		let (id, on_toggle) = {
			let task = instance.borrow();
			(task.props.id, task.props.on_toggle.clone())
		};
		on_toggle.emit(id);
	}

	/// The first call only arms the confirmation and re-renders, the second one asks the parent to delete.
	#[instrument]
	pub fn on_delete(instance: &Instance<Self>) {
		let confirmed = {
			let mut task = instance.borrow_mut();
			if task.delete_confirmation {
				Some((task.props.id, task.props.on_delete.clone()))
			} else {
				task.delete_confirmation = true;
				None
			}
		};
		match confirmed {
			Some((id, on_delete)) => on_delete.emit(id),
			None => {
				trace!(id = ?instance.borrow().props.id, "Awaiting delete confirmation.");
				instance.update()
			}
		}
	}
}
impl Component for Task {
	fn render(&self, link: &Link<Self>) -> Element {
		let checkbox = create_element("input", &[("type", "checkbox")], Children::Empty, [("change", link.listener(|task, _| Task::on_toggle(task)))]);
		checkbox.node().unchecked_ref::<web_sys::HtmlInputElement>().set_checked(self.props.completed);

		let label_style = if self.props.completed { "color: gray;" } else { "" };
		let label = create_element("label", &[("style", label_style)], self.props.text.as_str(), []);

		let button_style = if self.delete_confirmation { "background-color: red;" } else { "" };
		let button = create_element("button", &[("style", button_style)], self.props.delete_label.as_str(), [("click", link.listener(|task, _| Task::on_delete(task)))]);

		create_element("li", &[], Children::Sequence(vec![Child::Node(checkbox), Child::Node(label), Child::Node(button)]), [])
	}
}
