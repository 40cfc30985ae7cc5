//! DOM-like element handles.
//!
//! The binder does not talk to a real browser DOM; it owns a small tree of
//! [`Element`] handles that a host renders however it likes. A handle is a
//! shared reference to one node: cloning a handle clones the reference,
//! not the node, so a binder and a test (or a hydration layer) can observe
//! each other's writes.

use std::cell::RefCell;
use std::rc::Rc;

/// A shared handle to one view element.
///
/// Single-threaded by construction (`Rc<RefCell<_>>`): the binder owns its
/// view exclusively and updates run on one UI thread, so no locking
/// discipline applies.
#[derive(Debug, Clone, Default)]
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

#[derive(Debug, Default)]
struct ElementData {
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element carrying one class.
    pub fn with_class(class: impl Into<String>) -> Self {
        let element = Self::new();
        element.add_class(class);
        element
    }

    /// Add a class if not already present.
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut data = self.inner.borrow_mut();
        if !data.classes.contains(&class) {
            data.classes.push(class);
        }
    }

    /// Remove a class. Removing an absent class is a no-op.
    pub fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.retain(|c| c != class);
    }

    /// Check whether a class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Snapshot of the class list, in insertion order.
    pub fn class_list(&self) -> Vec<String> {
        self.inner.borrow().classes.clone()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let mut data = self.inner.borrow_mut();
        if let Some(entry) = data.attributes.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            data.attributes.push((name, value));
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Set the text content.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = text.into();
    }

    /// Get the text content.
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Append a child element.
    pub fn append_child(&self, child: Element) {
        self.inner.borrow_mut().children.push(child);
    }

    /// Snapshot of direct children, in tree order.
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// All descendants carrying a class, in tree order. Excludes self.
    pub fn descendants_with_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.inner.borrow().children.iter() {
            if child.has_class(class) {
                found.push(child.clone());
            }
            found.extend(child.descendants_with_class(class));
        }
        found
    }

    /// First descendant carrying a class, in tree order.
    pub fn first_with_class(&self, class: &str) -> Option<Element> {
        self.descendants_with_class(class).into_iter().next()
    }

    /// Whether two handles point at the same node.
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
