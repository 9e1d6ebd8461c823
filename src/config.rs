//! Texts and the storage key of the to-do list.

use crate::tasks::{TaskId, TaskRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
	Ru,
	En,
}
impl Default for Locale {
	fn default() -> Self {
		Self::Ru
	}
}
impl Locale {
	/// Matches the primary subtag of a BCP 47 language tag like `"en-GB"`.
	///
	/// Unknown or empty tags fall back to [`Locale::default`].
	#[must_use]
	pub fn from_tag(tag: &str) -> Self {
		let primary = tag.split(|c| c == '-' || c == '_').next().unwrap_or("").trim();
		if primary.eq_ignore_ascii_case("en") {
			Self::En
		} else if primary.eq_ignore_ascii_case("ru") {
			Self::Ru
		} else {
			Self::default()
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Storage slot of the task list.
	pub storage_key: String,
	pub locale: Locale,
	pub title: String,
	pub input_placeholder: String,
	pub add_label: String,
	pub delete_label: String,
	/// Texts of the tasks shown when nothing is stored yet.
	pub default_tasks: Vec<String>,
}
impl Default for Config {
	fn default() -> Self {
		Self::for_locale(Locale::default())
	}
}
impl Config {
	pub const DEFAULT_STORAGE_KEY: &'static str = "tasks";

	#[must_use]
	pub fn for_locale(locale: Locale) -> Self {
		let (input_placeholder, default_tasks) = match locale {
			Locale::Ru => ("Задание", &["Сделать домашку", "Сделать практику", "Пойти домой"]),
			Locale::En => ("Task", &["Do the homework", "Do the practice", "Go home"]),
		};
		Self {
			storage_key: Self::DEFAULT_STORAGE_KEY.to_owned(),
			locale,
			title: "TODO List".to_owned(),
			input_placeholder: input_placeholder.to_owned(),
			add_label: "+".to_owned(),
			delete_label: "🗑️".to_owned(),
			default_tasks: default_tasks.iter().map(|&text| text.to_owned()).collect(),
		}
	}

	/// The default tasks, numbered from 1 and all incomplete.
	#[must_use]
	pub fn seed(&self) -> Vec<TaskRecord> {
		(1..)
			.zip(&self.default_tasks)
			.map(|(id, text)| TaskRecord {
				id: TaskId(id),
				text: text.clone(),
				completed: false,
			})
			.collect()
	}
}
