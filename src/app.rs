//! Mounting and page start-up.

use crate::{
	component::{Component, Instance},
	components::TodoList,
	config::{Config, Locale},
	storage::{LocalStorage, MemoryStorage, Storage},
};
use core::{fmt, mem};
use std::rc::Rc;
use tracing::{error, info, instrument, warn};
use wasm_bindgen::{closure::Closure, JsCast};

/// A root component attached to a parent node.
///
/// Dropping this removes the root's current node from the document again.
/// The root and its listeners are freed once no other [`Instance`] refers to it.
pub struct Mounted<C: Component>(Instance<C>);
impl<C: Component> fmt::Debug for Mounted<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Mounted").field(&self.0).finish()
	}
}
impl<C: Component> Mounted<C> {
	/// The root's current node, which changes with every update.
	#[must_use]
	pub fn node(&self) -> Option<web_sys::Element> {
		self.0.dom_node()
	}

	/// Keeps the root mounted for the rest of the page's lifetime.
	pub fn forget(self) {
		mem::forget(self)
	}
}
impl<C: Component> Drop for Mounted<C> {
	fn drop(&mut self) {
		if let Some(node) = self.0.dom_node() {
			node.remove();
		}
	}
}

/// Appends `root`'s DOM node to `parent`.
#[instrument(skip(parent))]
pub fn mount<C: Component>(parent: &web_sys::Node, root: &Instance<C>) -> Mounted<C> {
	let element = root.get_dom_node();
	if let Err(error) = parent.append_child(element.node().as_ref()) {
		error!("Failed to mount root component: {:?}", error);
	}
	Mounted(root.clone())
}

/// Runs `f` now if `document` has finished parsing, or otherwise once on ***DOMContentLoaded***.
pub fn when_ready(document: &web_sys::Document, f: impl 'static + FnOnce()) {
	if document.ready_state() != "loading" {
		return f();
	}
	let listener = Closure::once_into_js(f);
	if let Err(error) = document.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref()) {
		error!("Failed to wait for DOMContentLoaded: {:?}", error);
	}
}

/// Picks the configuration matching `<html lang="…">`.
#[must_use]
pub fn config_for(document: &web_sys::Document) -> Config {
	let lang = document.document_element().and_then(|html| html.get_attribute("lang")).unwrap_or_default();
	Config::for_locale(Locale::from_tag(&lang))
}

/// Mounts a [`TodoList`] backed by `localStorage` into `<body>`, permanently.
///
/// If `localStorage` is unavailable, tasks only live until the page is closed.
#[instrument]
pub fn launch(document: &web_sys::Document) {
	let config = Rc::new(config_for(document));
	let storage: Rc<dyn Storage> = match LocalStorage::from_window() {
		Ok(storage) => Rc::new(storage),
		Err(error) => {
			warn!("Tasks won't persist: {}", error);
			Rc::new(MemoryStorage::new())
		}
	};

	let body = match document.body() {
		Some(body) => body,
		None => return error!("No <body> to mount into."),
	};

	info!(locale = ?config.locale, "Mounting to-do list.");
	let root = Instance::new(TodoList::new(config, storage));
	mount(body.as_ref(), &root).forget();
}
