//! Task records and the ordered list that owns them.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Identity of a [`TaskRecord`], stored as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);
impl TaskId {
	/// The largest id a ***JavaScript*** number holds exactly (2<sup>53</sup> − 1).
	pub const MAX: Self = Self((1 << 53) - 1);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
	pub id: TaskId,
	pub text: String,
	pub completed: bool,
}

/// The canonical, ordered task sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList(Vec<TaskRecord>);
impl From<Vec<TaskRecord>> for TaskList {
	fn from(records: Vec<TaskRecord>) -> Self {
		Self(records)
	}
}
impl TaskList {
	#[must_use]
	pub fn as_slice(&self) -> &[TaskRecord] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Time-based and above every id already present, as long as that stays within [`TaskId::MAX`].
	///
	/// Past that, the smallest unused id is handed out instead.
	fn next_id(&self, now_ms: u64) -> TaskId {
		let candidate = match self.0.iter().map(|task| task.id.0).max() {
			None => now_ms,
			Some(max) => max.checked_add(1).map_or(u64::MAX, |floor| floor.max(now_ms)),
		};
		if candidate <= TaskId::MAX.0 {
			return TaskId(candidate);
		}

		warn!(candidate, "Task ids exhausted. Reusing a free one.");
		let used = self.0.iter().map(|task| task.id.0).collect::<HashSet<_>>();
		TaskId((1..).find(|id| !used.contains(id)).unwrap_or_default())
	}

	/// Appends a new, incomplete task and returns its id.
	///
	/// `text` is stored as given, without trimming.
	pub fn add(&mut self, text: impl Into<String>, now_ms: u64) -> TaskId {
		let id = self.next_id(now_ms);
		self.0.push(TaskRecord {
			id,
			text: text.into(),
			completed: false,
		});
		trace!(?id, "Appended task.");
		id
	}

	/// Flips the completion flag of the first record with `id`.
	///
	/// Returns `false` (and changes nothing) iff there is no such record.
	pub fn toggle(&mut self, id: TaskId) -> bool {
		match self.0.iter_mut().find(|task| task.id == id) {
			Some(task) => {
				task.completed = !task.completed;
				true
			}
			None => false,
		}
	}

	/// Removes every record with `id`, keeping the order of the rest.
	///
	/// Returns the number of removed records.
	pub fn delete(&mut self, id: TaskId) -> usize {
		let before = self.0.len();
		self.0.retain(|task| task.id != id);
		before - self.0.len()
	}
}
