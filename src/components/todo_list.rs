use super::{AddTask, AddTaskProps, Task, TaskProps, TODOS_ID};
use crate::{
	component::{Component, Instance, Link},
	config::Config,
	element::{create_element, Child, Children, Element},
	storage::Storage,
	tasks::{TaskId, TaskList, TaskRecord},
};
use core::fmt;
use std::rc::Rc;
use tracing::{debug, error, instrument};

/// The root component. Owns the canonical task list and writes it through to [`Storage`] after every change.
pub struct TodoList {
	config: Rc<Config>,
	storage: Rc<dyn Storage>,
	tasks: TaskList,
}
impl fmt::Debug for TodoList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TodoList")
			.field("storage_key", &self.config.storage_key)
			.field("tasks.len()", &self.tasks.len())
			.finish()
	}
}
impl TodoList {
	/// Loads the stored task list, or seeds [`Config::default_tasks`] if there is none.
	///
	/// A stored value that can't be read or decoded is logged and also replaced by the seed.
	/// It stays in storage until the first change overwrites it.
	#[must_use]
	#[instrument(skip(config, storage), fields(storage_key = %config.storage_key))]
	pub fn new(config: Rc<Config>, storage: Rc<dyn Storage>) -> Self {
		let tasks = match storage.load(&config.storage_key) {
			Ok(Some(records)) => {
				debug!(count = records.len(), "Loaded tasks.");
				records
			}
			Ok(None) => {
				debug!("Nothing stored yet. Seeding default tasks.");
				config.seed()
			}
			Err(error) => {
				error!("Falling back to default tasks: {}", error);
				config.seed()
			}
		};
		Self {
			config,
			storage,
			tasks: tasks.into(),
		}
	}

	#[must_use]
	pub fn tasks(&self) -> &[TaskRecord] {
		self.tasks.as_slice()
	}

	/// A failed write is logged. The in-memory list stays authoritative until the next successful one.
	fn persist(&self) {
		if let Err(error) = self.storage.save(&self.config.storage_key, self.tasks.as_slice()) {
			error!("Failed to persist tasks: {}", error);
		}
	}

	#[instrument(skip(text))]
	pub fn on_add_task(instance: &Instance<Self>, text: String) {
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		let now_ms = js_sys::Date::now() as u64;
		{
			let mut todo_list = instance.borrow_mut();
			if cfg!(feature = "dangerous-logging") {
				debug!(text = %text, "Adding task.");
			}
			let id = todo_list.tasks.add(text, now_ms);
			debug!(?id, "Added task.");
			todo_list.persist();
		}
		instance.update();
	}

	/// Unknown ids are ignored without persisting or re-rendering.
	#[instrument]
	pub fn on_toggle_task(instance: &Instance<Self>, id: TaskId) {
		{
			let mut todo_list = instance.borrow_mut();
			if !todo_list.tasks.toggle(id) {
				return debug!("No such task.");
			}
			todo_list.persist();
		}
		instance.update();
	}

	#[instrument]
	pub fn on_delete_task(instance: &Instance<Self>, id: TaskId) {
		{
			let mut todo_list = instance.borrow_mut();
			let removed = todo_list.tasks.delete(id);
			debug!(removed, "Deleted task(s).");
			todo_list.persist();
		}
		instance.update();
	}
}
impl Component for TodoList {
	/// Child components are rebuilt from scratch, so text typed into the [`AddTask`] input but not submitted is lost.
	fn render(&self, link: &Link<Self>) -> Element {
		let add_task = Instance::new(AddTask::new(AddTaskProps {
			placeholder: self.config.input_placeholder.clone(),
			add_label: self.config.add_label.clone(),
			on_add_task: link.callback(TodoList::on_add_task),
		}));

		let on_toggle = link.callback(TodoList::on_toggle_task);
		let on_delete = link.callback(TodoList::on_delete_task);
		let tasks = self
			.tasks
			.as_slice()
			.iter()
			.map(|task| {
				let task = Instance::new(Task::new(TaskProps {
					id: task.id,
					text: task.text.clone(),
					completed: task.completed,
					delete_label: self.config.delete_label.clone(),
					on_toggle: on_toggle.clone(),
					on_delete: on_delete.clone(),
				}));
				Child::Node(task.get_dom_node())
			})
			.collect::<Vec<_>>();

		create_element(
			"div",
			&[("class", "todo-list")],
			Children::Sequence(vec![
				Child::Node(create_element("h1", &[], self.config.title.as_str(), [])),
				Child::Node(add_task.get_dom_node()),
				Child::Node(create_element("ul", &[("id", TODOS_ID)], Children::Sequence(tasks), [])),
			]),
			[],
		)
	}
}
