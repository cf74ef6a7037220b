//! Backed element - the server-side stand-in for one browser custom element.
//!
//! Every catalog component wraps exactly one [`Element`]. The element owns the
//! property bag, the slotted children and the listener registry; components
//! are thin typed views over it.
//!
//! Elements are cheap-clone handles (`Rc<RefCell<_>>`). All access is
//! synchronous and single-threaded: the host framework drives the element
//! from its one UI-update context, so no locking discipline exists at this
//! layer.
//!
//! # Example
//!
//! ```
//! use coral_flow::element::Element;
//!
//! let el = Element::new("coral-badge");
//! assert_eq!(el.get_string("variant", "neutral"), "neutral");
//! el.set_string("variant", "danger");
//! assert_eq!(el.get_string("variant", "neutral"), "danger");
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::event::ListenerSlot;

// =============================================================================
// Node Id Allocation
// =============================================================================

thread_local! {
    /// Counter for unique node ids, shared by every element on this thread.
    static NEXT_NODE_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_node_id() -> u64 {
    NEXT_NODE_ID.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

// =============================================================================
// Property Values
// =============================================================================

/// A value stored in an element's property bag.
///
/// Serializes untagged, so the wire format is plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Int(i64),
    Double(f64),
}

// =============================================================================
// Element Internals
// =============================================================================

/// The default slot. Children attached here carry no `slot` property.
pub const DEFAULT_SLOT: &str = "";

pub(crate) struct ElementInner {
    pub(crate) node_id: u64,
    pub(crate) tag: &'static str,
    pub(crate) properties: HashMap<&'static str, PropertyValue>,
    /// (slot name, child), in attachment order across all slots.
    pub(crate) children: Vec<(&'static str, Element)>,
    pub(crate) parent: Option<Weak<RefCell<ElementInner>>>,
    pub(crate) listeners: HashMap<&'static str, Vec<ListenerSlot>>,
    pub(crate) next_listener_id: u64,
}

// =============================================================================
// Element
// =============================================================================

/// Handle to one backed element.
///
/// Clones alias the same element; equality of handles is node-id identity.
#[derive(Clone)]
pub struct Element {
    pub(crate) inner: Rc<RefCell<ElementInner>>,
}

impl Element {
    /// Create a detached element for the given custom-element tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementInner {
                node_id: next_node_id(),
                tag,
                properties: HashMap::new(),
                children: Vec::new(),
                parent: None,
                listeners: HashMap::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// The fixed custom-element tag, e.g. `"coral-button"`.
    pub fn tag(&self) -> &'static str {
        self.inner.borrow().tag
    }

    /// Unique id of the backing node. Event origin filtering compares these.
    pub fn node_id(&self) -> u64 {
        self.inner.borrow().node_id
    }

    // =========================================================================
    // Property Bag
    // =========================================================================

    /// Read a string property, or `default` if never set.
    ///
    /// A stored value of a different type reads as `default` — the visual
    /// component owns validation, this layer only degrades.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.inner.borrow().properties.get(name) {
            Some(PropertyValue::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Read a boolean property, or `default` if never set.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.inner.borrow().properties.get(name) {
            Some(PropertyValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Read an integer property, or `default` if never set.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.inner.borrow().properties.get(name) {
            Some(PropertyValue::Int(i)) => *i,
            _ => default,
        }
    }

    /// Read a double property, or `default` if never set.
    ///
    /// Integer-stored values read back widened, since JSON does not keep the
    /// distinction for whole numbers.
    pub fn get_double(&self, name: &str, default: f64) -> f64 {
        match self.inner.borrow().properties.get(name) {
            Some(PropertyValue::Double(d)) => *d,
            Some(PropertyValue::Int(i)) => *i as f64,
            _ => default,
        }
    }

    /// Store a string property, overwriting any previous value.
    pub fn set_string(&self, name: &'static str, value: impl Into<String>) {
        self.inner
            .borrow_mut()
            .properties
            .insert(name, PropertyValue::String(value.into()));
    }

    /// Store a boolean property.
    pub fn set_bool(&self, name: &'static str, value: bool) {
        self.inner
            .borrow_mut()
            .properties
            .insert(name, PropertyValue::Bool(value));
    }

    /// Store an integer property.
    pub fn set_int(&self, name: &'static str, value: i64) {
        self.inner
            .borrow_mut()
            .properties
            .insert(name, PropertyValue::Int(value));
    }

    /// Store a double property. No rounding, no range checks.
    pub fn set_double(&self, name: &'static str, value: f64) {
        self.inner
            .borrow_mut()
            .properties
            .insert(name, PropertyValue::Double(value));
    }

    /// Remove a property so reads fall back to their declared default.
    pub fn remove_property(&self, name: &str) {
        self.inner.borrow_mut().properties.remove(name);
    }

    /// Whether the property was explicitly set.
    pub fn has_property(&self, name: &str) -> bool {
        self.inner.borrow().properties.contains_key(name)
    }

    /// The wire-format JSON object of explicitly set properties.
    ///
    /// Keys are sorted for deterministic output.
    pub fn properties_json(&self) -> Value {
        let inner = self.inner.borrow();
        let mut names: Vec<&&'static str> = inner.properties.keys().collect();
        names.sort();
        let mut map = Map::with_capacity(names.len());
        for name in names {
            let json = serde_json::to_value(&inner.properties[*name])
                .unwrap_or(Value::Null);
            map.insert((*name).to_string(), json);
        }
        Value::Object(map)
    }

    // =========================================================================
    // Slots
    // =========================================================================

    /// Append `child` to the named slot, preserving attachment order.
    ///
    /// A child may sit in exactly one slot at a time: attaching it elsewhere
    /// detaches it from its previous parent first (DOM `appendChild` move
    /// semantics). The child's `slot` property is stamped with the slot name,
    /// or removed for the default slot.
    pub fn append_to_slot(&self, slot: &'static str, child: &Element) {
        // No self-attachment.
        if Rc::ptr_eq(&self.inner, &child.inner) {
            return;
        }

        child.detach();

        if slot == DEFAULT_SLOT {
            child.remove_property("slot");
        } else {
            child.set_string("slot", slot);
        }

        child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().children.push((slot, child.clone()));
    }

    /// Children currently attached to the named slot, in attachment order.
    pub fn slot_children(&self, slot: &str) -> Vec<Element> {
        self.inner
            .borrow()
            .children
            .iter()
            .filter(|(s, _)| *s == slot)
            .map(|(_, child)| child.clone())
            .collect()
    }

    /// Total child count across all slots.
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The element this one is slotted into, if any.
    pub fn parent(&self) -> Option<Element> {
        let weak = self.inner.borrow().parent.clone()?;
        weak.upgrade().map(|inner| Element { inner })
    }

    /// Detach from the current parent slot, if attached.
    pub fn detach(&self) {
        let parent = {
            let mut inner = self.inner.borrow_mut();
            inner.parent.take()
        };
        let Some(parent) = parent.and_then(|weak| weak.upgrade()) else {
            return;
        };
        let node_id = self.node_id();
        parent
            .borrow_mut()
            .children
            .retain(|(_, child)| child.node_id() != node_id);
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &inner.tag)
            .field("node_id", &inner.node_id)
            .field("properties", &inner.properties)
            .field("children", &inner.children.len())
            .finish()
    }
}

// =============================================================================
// BackedComponent
// =============================================================================

/// The seam every catalog component implements.
///
/// Anything backed by an element can be slotted into a container and
/// inspected generically by the host.
pub trait BackedComponent {
    /// The backing element.
    fn element(&self) -> &Element;

    /// The backing custom-element tag.
    fn tag(&self) -> &'static str {
        self.element().tag()
    }

    /// The backing node id.
    fn node_id(&self) -> u64 {
        self.element().node_id()
    }
}

impl BackedComponent for Element {
    fn element(&self) -> &Element {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_before_set() {
        let el = Element::new("coral-input");
        assert_eq!(el.get_string("value", ""), "");
        assert_eq!(el.get_bool("disabled", false), false);
        assert_eq!(el.get_int("max", 5), 5);
        assert_eq!(el.get_double("step", 1.0), 1.0);
        assert!(!el.has_property("value"));
    }

    #[test]
    fn test_set_get_round_trip() {
        let el = Element::new("coral-input");
        el.set_string("value", "hello");
        el.set_bool("disabled", true);
        el.set_int("maxlength", 120);
        el.set_double("step", 0.25);

        assert_eq!(el.get_string("value", ""), "hello");
        assert_eq!(el.get_bool("disabled", false), true);
        assert_eq!(el.get_int("maxlength", 0), 120);
        assert_eq!(el.get_double("step", 1.0), 0.25);
    }

    #[test]
    fn test_overwrite_and_remove() {
        let el = Element::new("coral-tag");
        el.set_string("variant", "primary");
        el.set_string("variant", "danger");
        assert_eq!(el.get_string("variant", "neutral"), "danger");

        el.remove_property("variant");
        assert_eq!(el.get_string("variant", "neutral"), "neutral");
    }

    #[test]
    fn test_type_mismatch_reads_default() {
        let el = Element::new("coral-range");
        el.set_string("value", "not a number");
        assert_eq!(el.get_double("value", 0.0), 0.0);
        assert_eq!(el.get_int("value", 0), 0);
        assert_eq!(el.get_bool("value", false), false);
    }

    #[test]
    fn test_int_reads_as_double() {
        let el = Element::new("coral-range");
        el.set_int("value", 50);
        assert_eq!(el.get_double("value", 0.0), 50.0);
    }

    #[test]
    fn test_properties_json() {
        let el = Element::new("coral-progress-bar");
        el.set_double("value", 75.0);
        el.set_bool("indeterminate", false);
        el.set_string("label", "Upload");

        assert_eq!(
            el.properties_json(),
            json!({
                "indeterminate": false,
                "label": "Upload",
                "value": 75.0,
            })
        );
    }

    #[test]
    fn test_slot_attachment_order() {
        let card = Element::new("coral-card");
        let a = Element::new("coral-badge");
        let b = Element::new("coral-badge");

        card.append_to_slot("header", &a);
        card.append_to_slot("header", &b);

        let header = card.slot_children("header");
        assert_eq!(header.len(), 2);
        assert_eq!(header[0].node_id(), a.node_id());
        assert_eq!(header[1].node_id(), b.node_id());
        assert_eq!(a.get_string("slot", ""), "header");
    }

    #[test]
    fn test_child_moves_between_slots() {
        let card = Element::new("coral-card");
        let badge = Element::new("coral-badge");

        card.append_to_slot("header", &badge);
        card.append_to_slot("footer", &badge);

        assert_eq!(card.slot_children("header").len(), 0);
        assert_eq!(card.slot_children("footer").len(), 1);
        assert_eq!(card.child_count(), 1);
        assert_eq!(badge.get_string("slot", ""), "footer");
    }

    #[test]
    fn test_child_moves_between_parents() {
        let first = Element::new("coral-card");
        let second = Element::new("coral-card");
        let badge = Element::new("coral-badge");

        first.append_to_slot(DEFAULT_SLOT, &badge);
        second.append_to_slot(DEFAULT_SLOT, &badge);

        assert_eq!(first.child_count(), 0);
        assert_eq!(second.child_count(), 1);
        assert_eq!(second.node_id(), badge.parent().unwrap().node_id());
    }

    #[test]
    fn test_default_slot_clears_slot_property() {
        let card = Element::new("coral-card");
        let badge = Element::new("coral-badge");

        card.append_to_slot("header", &badge);
        card.append_to_slot(DEFAULT_SLOT, &badge);
        assert!(!badge.has_property("slot"));
    }

    #[test]
    fn test_node_ids_unique() {
        let a = Element::new("coral-icon");
        let b = Element::new("coral-icon");
        assert_ne!(a.node_id(), b.node_id());
    }
}
