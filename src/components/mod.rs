//! The to-do list application.

mod add_task;
mod task;
mod todo_list;

pub use add_task::{AddTask, AddTaskProps};
pub use task::{Task, TaskProps};
pub use todo_list::TodoList;

/// `id` of the new task's text input.
pub const NEW_TODO_ID: &str = "new-todo";
/// `id` of the button that adds the new task.
pub const ADD_BUTTON_ID: &str = "add-btn";
/// `id` of the task list container.
pub const TODOS_ID: &str = "todos";
