//! The element builder.
//!
//! [`create_element`] produces one fresh [***Element***](https://developer.mozilla.org/en-US/docs/Web/API/element) per call.
//! Nothing is ever diffed: components rebuild their whole subtree and swap it in.

use core::{any::Any, fmt};
use tracing::{error, instrument, trace_span};
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};

/// Handle to a freshly built [`web_sys::Element`].
///
/// Besides the DOM node itself, this owns everything that has to stay alive while that node is rendered:
/// The [`Closure`]s backing its event listeners and any component instances nested inside it.
/// Appending a child [`Element`] moves those resources into the parent.
///
/// Dropping an [`Element`] frees its listeners, after which they throw into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript) if still triggered.
/// A listener that is running while its [`Element`] is dropped finishes normally.
pub struct Element {
	node: web_sys::Element,
	retained: Vec<Box<dyn Any>>,
}
impl Element {
	pub(crate) fn retaining(node: web_sys::Element, keepalive: impl Any) -> Self {
		Self {
			node,
			retained: vec![Box::new(keepalive)],
		}
	}

	#[must_use]
	pub fn node(&self) -> &web_sys::Element {
		&self.node
	}

	/// Appends `child` after any existing child nodes.
	pub fn append(&mut self, child: Child) {
		let document = owner_document(&self.node);
		match child {
			Child::Text(text) => {
				let text = document.create_text_node(&text);
				if let Err(error) = self.node.append_child(text.as_ref()) {
					error!("Failed to append text: {:?}", error);
				}
			}
			Child::Node(mut element) => {
				if let Err(error) = self.node.append_child(element.node.as_ref()) {
					return error!("Failed to append <{}>: {:?}", element.node.tag_name(), error);
				}
				self.retained.append(&mut element.retained);
			}
		}
	}
}
impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("node", &self.node)
			.field("retained.len()", &self.retained.len())
			.finish()
	}
}

/// A native event listener.
pub struct Listener(Closure<dyn FnMut(web_sys::Event)>);
impl Listener {
	pub fn new(handler: impl 'static + FnMut(web_sys::Event)) -> Self {
		Self(Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>))
	}
}
impl fmt::Debug for Listener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Listener").finish()
	}
}

/// One entry of a [`Children::Sequence`].
#[derive(Debug)]
pub enum Child {
	Text(String),
	Node(Element),
}
impl From<&str> for Child {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}
impl From<String> for Child {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}
impl From<Element> for Child {
	fn from(element: Element) -> Self {
		Self::Node(element)
	}
}

/// The content of a new element, appended in order.
#[derive(Debug)]
pub enum Children {
	Empty,
	Text(String),
	Node(Element),
	Sequence(Vec<Child>),
}
impl Default for Children {
	fn default() -> Self {
		Self::Empty
	}
}
impl From<&str> for Children {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}
impl From<String> for Children {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}
impl From<Element> for Children {
	fn from(element: Element) -> Self {
		Self::Node(element)
	}
}
impl From<Vec<Child>> for Children {
	fn from(children: Vec<Child>) -> Self {
		Self::Sequence(children)
	}
}
impl<T: Into<Children>> From<Option<T>> for Children {
	fn from(children: Option<T>) -> Self {
		children.map_or(Self::Empty, Into::into)
	}
}

/// Builds a new element named `tag`.
///
/// Attributes are set verbatim and listeners are added without deduplication.
/// Individual attributes or listeners the DOM rejects are logged and skipped, so this never fails for them.
///
/// # Panics
///
/// Iff `tag` is not a valid element name, in which case an error is thrown into [***JavaScript***](https://developer.mozilla.org/en-US/docs/Web/JavaScript).
#[instrument(skip(children, callbacks))]
pub fn create_element<'a>(tag: &str, attributes: &[(&str, &str)], children: impl Into<Children>, callbacks: impl IntoIterator<Item = (&'a str, Listener)>) -> Element {
	let document = crate::document();
	let node = document.create_element(tag).expect_throw("todo-dom: Invalid element name.");
	let mut element = Element { node, retained: Vec::new() };

	for &(name, value) in attributes {
		if let Err(error) = element.node.set_attribute(name, value) {
			error!("Could not set attribute {:?}={:?}: {:?}", name, value, error);
		}
	}

	match children.into() {
		Children::Empty => (),
		Children::Text(text) => element.append(Child::Text(text)),
		Children::Node(child) => element.append(Child::Node(child)),
		Children::Sequence(children) => {
			let span = trace_span!("Appending children", "children.len()" = children.len());
			let _enter = span.enter();
			for child in children {
				element.append(child);
			}
		}
	}

	for (event, Listener(closure)) in callbacks {
		if let Err(error) = element.node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
			error!("Failed to add event listener {:?}: {:?}", event, error);
			continue;
		}
		element.retained.push(Box::new(closure));
	}

	element
}

fn owner_document(node: &web_sys::Element) -> web_sys::Document {
	node.owner_document().unwrap_or_else(crate::document)
}
