//! The key-value persistence boundary.
//!
//! Task lists are stored as JSON arrays of `{"id": number, "text": string, "completed": boolean}`, one per key.

use crate::tasks::TaskRecord;
use core::{cell::RefCell, fmt};
use hashbrown::HashMap;
use thiserror::Error;
use tracing::{instrument, trace};
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("storage is unavailable: {0}")]
	Unavailable(String),
	#[error("failed to read {key:?}: {message}")]
	Read { key: String, message: String },
	#[error("failed to write {key:?}: {message}")]
	Write { key: String, message: String },
	#[error("failed to decode stored tasks: {0}")]
	Decode(#[source] serde_json::Error),
	#[error("failed to encode tasks: {0}")]
	Encode(#[source] serde_json::Error),
}

/// Somewhere to keep task lists between page loads.
pub trait Storage {
	/// `Ok(None)` iff nothing is stored under `key`.
	///
	/// # Errors
	///
	/// Iff the backend can't be read or the stored value isn't a task list.
	fn load(&self, key: &str) -> Result<Option<Vec<TaskRecord>>, StorageError>;

	/// Overwrites whatever is stored under `key`.
	///
	/// # Errors
	///
	/// Iff the backend rejects the write, for example because its quota is exhausted.
	fn save(&self, key: &str, tasks: &[TaskRecord]) -> Result<(), StorageError>;
}

fn decode(json: &str) -> Result<Vec<TaskRecord>, StorageError> {
	serde_json::from_str(json).map_err(StorageError::Decode)
}

fn encode(tasks: &[TaskRecord]) -> Result<String, StorageError> {
	serde_json::to_string(tasks).map_err(StorageError::Encode)
}

fn describe(error: &JsValue) -> String {
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

/// [***localStorage***](https://developer.mozilla.org/en-US/docs/Web/API/Window/localStorage) of the current window.
///
/// Last writer wins. There is no coordination between tabs.
pub struct LocalStorage(web_sys::Storage);
impl LocalStorage {
	/// # Errors
	///
	/// Iff there is no window or its `localStorage` is disabled.
	pub fn from_window() -> Result<Self, StorageError> {
		let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
		match window.local_storage() {
			Ok(Some(storage)) => Ok(Self(storage)),
			Ok(None) => Err(StorageError::Unavailable("`localStorage` is null".to_owned())),
			Err(error) => Err(StorageError::Unavailable(describe(&error))),
		}
	}
}
impl fmt::Debug for LocalStorage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("LocalStorage").finish()
	}
}
impl Storage for LocalStorage {
	#[instrument]
	fn load(&self, key: &str) -> Result<Option<Vec<TaskRecord>>, StorageError> {
		let json = self.0.get_item(key).map_err(|error| StorageError::Read {
			key: key.to_owned(),
			message: describe(&error),
		})?;
		json.as_deref().map(decode).transpose()
	}

	#[instrument(skip(tasks), fields(tasks.len = tasks.len()))]
	fn save(&self, key: &str, tasks: &[TaskRecord]) -> Result<(), StorageError> {
		let json = encode(tasks)?;
		self.0.set_item(key, &json).map_err(|error| StorageError::Write {
			key: key.to_owned(),
			message: describe(&error),
		})?;
		trace!(bytes = json.len(), "Saved tasks.");
		Ok(())
	}
}

/// In-memory [`Storage`] that still goes through the JSON representation.
#[derive(Debug, Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);
impl MemoryStorage {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// The serialised value under `key`, if any.
	#[must_use]
	pub fn raw(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	/// Stores `json` under `key` verbatim, without validating it.
	pub fn insert_raw(&self, key: impl Into<String>, json: impl Into<String>) {
		self.0.borrow_mut().insert(key.into(), json.into());
	}
}
impl Storage for MemoryStorage {
	fn load(&self, key: &str) -> Result<Option<Vec<TaskRecord>>, StorageError> {
		self.0.borrow().get(key).map(|json| decode(json)).transpose()
	}

	fn save(&self, key: &str, tasks: &[TaskRecord]) -> Result<(), StorageError> {
		let json = encode(tasks)?;
		self.0.borrow_mut().insert(key.to_owned(), json);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::{MemoryStorage, Storage, StorageError};
	use crate::tasks::{TaskId, TaskRecord};

	#[test]
	fn missing_key_loads_as_none() {
		assert!(MemoryStorage::new().load("tasks").unwrap().is_none());
	}

	#[test]
	fn save_overwrites_and_round_trips() {
		let storage = MemoryStorage::new();
		let first = [TaskRecord { id: TaskId(1), text: "a".to_owned(), completed: false }];
		let second = [TaskRecord { id: TaskId(2), text: "b".to_owned(), completed: true }];
		storage.save("tasks", &first).unwrap();
		storage.save("tasks", &second).unwrap();
		assert_eq!(storage.load("tasks").unwrap().unwrap(), second);
		assert_eq!(storage.raw("tasks").unwrap(), r#"[{"id":2,"text":"b","completed":true}]"#);
	}

	#[test]
	fn keys_are_independent() {
		let storage = MemoryStorage::new();
		storage.save("a", &[]).unwrap();
		assert!(storage.load("b").unwrap().is_none());
		assert!(storage.load("a").unwrap().unwrap().is_empty());
	}

	#[test]
	fn malformed_value_is_a_decode_error() {
		let storage = MemoryStorage::new();
		storage.insert_raw("tasks", "{not json");
		assert!(matches!(storage.load("tasks"), Err(StorageError::Decode(_))));
		storage.insert_raw("tasks", r#"[{"id":"1","text":"a","completed":false}]"#);
		assert!(matches!(storage.load("tasks"), Err(StorageError::Decode(_))));
	}
}
