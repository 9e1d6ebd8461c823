//! The component base: props and state live in the implementing type, [`Instance`] adds the owned DOM node.

use crate::element::{Element, Listener};
use core::{
	any::type_name,
	cell::{Ref, RefCell, RefMut},
	fmt,
};
use std::rc::{Rc, Weak};
use tracing::{error, instrument, trace};
use wasm_bindgen::UnwrapThrowExt;

/// A type that can render its current props and state into a fresh DOM subtree.
pub trait Component: 'static + Sized {
	/// Builds a brand-new subtree. This is never diffed against a previous result.
	///
	/// `link` refers back to the instance being rendered, for use in event listeners.
	fn render(&self, link: &Link<Self>) -> Element;
}

struct Slot<C> {
	component: RefCell<C>,
	dom_node: RefCell<Option<Element>>,
}

/// A shared handle to a mounted (or mountable) component.
pub struct Instance<C>(Rc<Slot<C>>);
impl<C> Clone for Instance<C> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}
impl<C> fmt::Debug for Instance<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Instance").field(&type_name::<C>()).finish()
	}
}
impl<C: Component> Instance<C> {
	#[must_use]
	pub fn new(component: C) -> Self {
		Self(Rc::new(Slot {
			component: RefCell::new(component),
			dom_node: RefCell::new(None),
		}))
	}

	#[must_use]
	pub fn link(&self) -> Link<C> {
		Link(Rc::downgrade(&self.0))
	}

	/// # Panics
	///
	/// Iff the component is currently borrowed mutably.
	#[must_use]
	pub fn borrow(&self) -> Ref<'_, C> {
		self.0.component.borrow()
	}

	/// Note that mutations don't show up in the DOM before the next [`Instance::update`].
	///
	/// # Panics
	///
	/// Iff the component is currently borrowed, which includes during [`Component::render`].
	#[must_use]
	pub fn borrow_mut(&self) -> RefMut<'_, C> {
		self.0.component.borrow_mut()
	}

	fn render(&self) -> Element {
		self.0.component.borrow().render(&self.link())
	}

	/// Renders the component, adopts the result as its owned node and returns a handle to that same node.
	///
	/// The returned [`Element`] keeps this instance alive, so the component lives exactly as long as
	/// whatever subtree the handle is appended to.
	///
	/// Calling this again renders again and replaces the owned node reference without touching the document.
	#[instrument]
	pub fn get_dom_node(&self) -> Element {
		let rendered = self.render();
		let node = rendered.node().clone();
		*self.0.dom_node.borrow_mut() = Some(rendered);
		Element::retaining(node, self.0.clone())
	}

	/// Renders the component and replaces its owned node in the document in place.
	///
	/// The previous subtree is dropped afterwards, which detaches its listeners.
	///
	/// # Panics
	///
	/// Iff [`Instance::get_dom_node`] was never called on this instance.
	/// Additionally, with debug assertions, iff the owned node is not connected to a document.
	#[instrument]
	pub fn update(&self) {
		let rendered = self.render();
		let mut dom_node = self.0.dom_node.borrow_mut();
		let previous = if cfg!(debug_assertions) {
			dom_node.as_ref().unwrap_or_else(|| panic!("todo-dom: `Instance::update` called before `Instance::get_dom_node` on {}.", type_name::<C>()))
		} else {
			dom_node.as_ref().expect_throw("todo-dom: `Instance::update` called before `Instance::get_dom_node`.")
		};
		debug_assert!(previous.node().is_connected(), "todo-dom: `Instance::update` called on a detached {}.", type_name::<C>());
		if let Err(error) = previous.node().replace_with_with_node_1(rendered.node()) {
			error!("Failed to replace <{}>: {:?}", previous.node().tag_name(), error);
			return;
		}
		*dom_node = Some(rendered);
	}

	/// Whether the component currently owns a rendered node.
	#[must_use]
	pub fn is_rendered(&self) -> bool {
		self.0.dom_node.borrow().is_some()
	}

	/// The node currently owned, which is the one in the document after any [`Instance::update`].
	#[must_use]
	pub fn dom_node(&self) -> Option<web_sys::Element> {
		self.0.dom_node.borrow().as_ref().map(|element| element.node().clone())
	}
}

/// A weak reference to an [`Instance`], as handed to [`Component::render`].
///
/// Listeners and callbacks built from it don't keep the instance alive.
pub struct Link<C>(Weak<Slot<C>>);
impl<C> Clone for Link<C> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}
impl<C> fmt::Debug for Link<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Link").field(&type_name::<C>()).finish()
	}
}
impl<C: Component> Link<C> {
	#[must_use]
	pub fn upgrade(&self) -> Option<Instance<C>> {
		self.0.upgrade().map(Instance)
	}

	/// Creates an event listener that forwards to `handler` while the instance is alive.
	pub fn listener(&self, handler: impl 'static + Fn(&Instance<C>, web_sys::Event)) -> Listener {
		let link = self.clone();
		Listener::new(move |event| match link.upgrade() {
			Some(instance) => handler(&instance, event),
			None => trace!("Dropped {:?} event for discarded {}.", event.type_(), type_name::<C>()),
		})
	}

	/// Creates a [`Callback`] that forwards to `handler` while the instance is alive.
	pub fn callback<T: 'static>(&self, handler: impl 'static + Fn(&Instance<C>, T)) -> Callback<T> {
		let link = self.clone();
		Callback::new(move |value| match link.upgrade() {
			Some(instance) => handler(&instance, value),
			None => trace!("Dropped callback for discarded {}.", type_name::<C>()),
		})
	}
}

/// A parent-supplied function, passed down through props.
pub struct Callback<T>(Rc<dyn Fn(T)>);
impl<T> Callback<T> {
	pub fn new(f: impl 'static + Fn(T)) -> Self {
		Self(Rc::new(f))
	}

	pub fn emit(&self, value: T) {
		(self.0)(value)
	}
}
impl<T> Clone for Callback<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}
impl<T> fmt::Debug for Callback<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Callback").field(&type_name::<T>()).finish()
	}
}
