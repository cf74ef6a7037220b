//! Event model - dispatch from the host into registered listeners.
//!
//! The browser side fires DOM events; the host framework routes each one to
//! the server-side element it targets. This module holds the raw event type,
//! the per-element listener registry and the payload-extraction helpers the
//! typed event structs read through.
//!
//! Delivery rules:
//! - listeners fire in registration order within one event type;
//! - a listener registered with `same_node_only` is skipped when the event
//!   bubbled up from a nested element (origin id != element id);
//! - payload fields are read lazily at getter-call time, never at
//!   registration time.
//!
//! # Example
//!
//! ```
//! use coral_flow::element::Element;
//! use coral_flow::event::DomEvent;
//!
//! let el = Element::new("coral-input");
//! let registration = el.add_listener("coral-change", false, |event| {
//!     assert_eq!(event.event_type(), "coral-change");
//! });
//! assert_eq!(el.dispatch(&DomEvent::on(&el, "coral-change")), 1);
//! registration.remove();
//! assert_eq!(el.dispatch(&DomEvent::on(&el, "coral-change")), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::Value;
use tracing::warn;

use crate::element::{Element, ElementInner};

// =============================================================================
// DomEvent
// =============================================================================

/// One external event as delivered by the host.
#[derive(Debug, Clone)]
pub struct DomEvent {
    event_type: String,
    origin: u64,
    payload: Value,
}

impl DomEvent {
    /// An event originating from an arbitrary node id.
    ///
    /// Use this to model bubbled events from nested structural elements.
    pub fn new(event_type: impl Into<String>, origin: u64) -> Self {
        Self {
            event_type: event_type.into(),
            origin,
            payload: Value::Null,
        }
    }

    /// An event originating from `element` itself.
    pub fn on(element: &Element, event_type: impl Into<String>) -> Self {
        Self::new(event_type, element.node_id())
    }

    /// Attach a raw JSON payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// The external event name, e.g. `"coral-change"`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Node id of the element the event originated on.
    pub fn origin(&self) -> u64 {
        self.origin
    }

    /// The raw payload. `Value::Null` when the event carries none.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

// =============================================================================
// Listener Registry
// =============================================================================

pub(crate) struct ListenerSlot {
    pub(crate) id: u64,
    pub(crate) same_node_only: bool,
    pub(crate) handler: Rc<dyn Fn(&DomEvent)>,
}

/// Opaque registration token.
///
/// Its sole contract: [`Registration::remove`] unregisters exactly the one
/// listener it was returned for. Dropping the token without calling `remove`
/// leaves the listener registered for the element's lifetime.
pub struct Registration {
    inner: Weak<RefCell<ElementInner>>,
    event_type: &'static str,
    id: u64,
}

impl Registration {
    /// Unregister the listener. No-op if the element is already gone.
    pub fn remove(self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if let Some(slots) = inner.listeners.get_mut(self.event_type) {
            slots.retain(|slot| slot.id != self.id);
        }
    }
}

impl Element {
    /// Register a handler for an external event type.
    ///
    /// Multiple registrations for the same type are independent entries and
    /// all fire, in registration order. With `same_node_only`, events whose
    /// origin is not this element are not delivered (same-node identity
    /// check, not a type check).
    pub fn add_listener<F>(
        &self,
        event_type: &'static str,
        same_node_only: bool,
        handler: F,
    ) -> Registration
    where
        F: Fn(&DomEvent) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.entry(event_type).or_default().push(ListenerSlot {
                id,
                same_node_only,
                handler: Rc::new(handler),
            });
            id
        };

        Registration {
            inner: Rc::downgrade(&self.inner),
            event_type,
            id,
        }
    }

    /// Number of listeners currently registered for an event type.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(event_type)
            .map_or(0, Vec::len)
    }

    /// Deliver an event to matching listeners. Returns the delivery count.
    ///
    /// Handlers run outside the registry borrow, so a handler may register
    /// or remove listeners on this element; such changes take effect for the
    /// next dispatch.
    pub fn dispatch(&self, event: &DomEvent) -> usize {
        let node_id = self.node_id();
        let matching: Vec<Rc<dyn Fn(&DomEvent)>> = {
            let inner = self.inner.borrow();
            match inner.listeners.get(event.event_type()) {
                Some(slots) => slots
                    .iter()
                    .filter(|slot| !slot.same_node_only || event.origin() == node_id)
                    .map(|slot| Rc::clone(&slot.handler))
                    .collect(),
                None => Vec::new(),
            }
        };

        for handler in &matching {
            handler(event);
        }
        matching.len()
    }
}

// =============================================================================
// Payload Extraction
// =============================================================================

/// Read `/detail/<key>` as f64. Absent → 0.0; wrong type → 0.0 with a warning.
pub fn detail_f64(event: &DomEvent, key: &str) -> f64 {
    match event.payload().pointer(&format!("/detail/{key}")) {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(other) => {
            warn!(
                event_type = event.event_type(),
                key,
                value = %other,
                "non-numeric payload field, defaulting to 0"
            );
            0.0
        }
    }
}

/// Read `/detail/<key>` as i64. Absent → 0; wrong type → 0 with a warning.
pub fn detail_i64(event: &DomEvent, key: &str) -> i64 {
    match event.payload().pointer(&format!("/detail/{key}")) {
        None | Some(Value::Null) => 0,
        Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| {
            warn!(
                event_type = event.event_type(),
                key,
                "non-integer payload number, defaulting to 0"
            );
            0
        }),
        Some(other) => {
            warn!(
                event_type = event.event_type(),
                key,
                value = %other,
                "non-numeric payload field, defaulting to 0"
            );
            0
        }
    }
}

/// Read `/detail/<key>` as a string. Absent → ""; wrong type → "" with a warning.
pub fn detail_string(event: &DomEvent, key: &str) -> String {
    match event.payload().pointer(&format!("/detail/{key}")) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            warn!(
                event_type = event.event_type(),
                key,
                value = %other,
                "non-string payload field, defaulting to empty"
            );
            String::new()
        }
    }
}

/// Read `/detail/<key>` as bool. Absent → false; wrong type → false with a warning.
pub fn detail_bool(event: &DomEvent, key: &str) -> bool {
    match event.payload().pointer(&format!("/detail/{key}")) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            warn!(
                event_type = event.event_type(),
                key,
                value = %other,
                "non-boolean payload field, defaulting to false"
            );
            false
        }
    }
}

/// Read `/detail/<key>` as a list of strings. Absent or wrong type → empty.
///
/// Non-string entries inside the list are skipped with a warning.
pub fn detail_string_list(event: &DomEvent, key: &str) -> Vec<String> {
    match event.payload().pointer(&format!("/detail/{key}")) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s.clone()),
                other => {
                    warn!(
                        event_type = event.event_type(),
                        key,
                        value = %other,
                        "non-string list entry, skipping"
                    );
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!(
                event_type = event.event_type(),
                key,
                value = %other,
                "non-list payload field, defaulting to empty"
            );
            Vec::new()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_registration_increments_count_by_one() {
        let el = Element::new("coral-input");
        assert_eq!(el.listener_count("coral-change"), 0);
        let _a = el.add_listener("coral-change", false, |_| {});
        assert_eq!(el.listener_count("coral-change"), 1);
        let _b = el.add_listener("coral-change", false, |_| {});
        assert_eq!(el.listener_count("coral-change"), 2);
    }

    #[test]
    fn test_all_handlers_fire_in_registration_order() {
        let el = Element::new("coral-input");
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            el.add_listener("coral-change", false, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        let delivered = el.dispatch(&DomEvent::on(&el, "coral-change"));
        assert_eq!(delivered, 3);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_remove_unregisters_exactly_one() {
        let el = Element::new("coral-input");
        let hits = Rc::new(Cell::new(0));

        let hits_a = Rc::clone(&hits);
        let a = el.add_listener("coral-change", false, move |_| {
            hits_a.set(hits_a.get() + 1);
        });
        let hits_b = Rc::clone(&hits);
        let _b = el.add_listener("coral-change", false, move |_| {
            hits_b.set(hits_b.get() + 10);
        });

        a.remove();
        assert_eq!(el.listener_count("coral-change"), 1);

        el.dispatch(&DomEvent::on(&el, "coral-change"));
        assert_eq!(hits.get(), 10);
    }

    #[test]
    fn test_remove_after_element_dropped_is_noop() {
        let el = Element::new("coral-input");
        let registration = el.add_listener("coral-change", false, |_| {});
        drop(el);
        registration.remove();
    }

    #[test]
    fn test_same_node_filter() {
        let el = Element::new("coral-dialog");
        let hits = Rc::new(Cell::new(0));
        let hits_in = Rc::clone(&hits);
        el.add_listener("coral-show", true, move |_| {
            hits_in.set(hits_in.get() + 1);
        });

        // Bubbled from a nested element sharing the event name: not delivered.
        let nested = Element::new("coral-details");
        assert_eq!(el.dispatch(&DomEvent::new("coral-show", nested.node_id())), 0);

        // Own origin: delivered.
        assert_eq!(el.dispatch(&DomEvent::on(&el, "coral-show")), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_event_types_are_independent() {
        let el = Element::new("coral-input");
        let _change = el.add_listener("coral-change", false, |_| {});
        assert_eq!(el.dispatch(&DomEvent::on(&el, "coral-input")), 0);
    }

    #[test]
    fn test_detail_f64_fallbacks() {
        let el = Element::new("coral-range");
        let ok = DomEvent::on(&el, "coral-change").with_payload(json!({
            "detail": { "value": 42.5 }
        }));
        assert_eq!(detail_f64(&ok, "value"), 42.5);

        let wrong = DomEvent::on(&el, "coral-change").with_payload(json!({
            "detail": { "value": "75" }
        }));
        assert_eq!(detail_f64(&wrong, "value"), 0.0);

        let absent = DomEvent::on(&el, "coral-change");
        assert_eq!(detail_f64(&absent, "value"), 0.0);
    }

    #[test]
    fn test_detail_string_and_bool_fallbacks() {
        let el = Element::new("coral-rating");
        let event = DomEvent::on(&el, "coral-hover").with_payload(json!({
            "detail": { "phase": "move", "value": 3 }
        }));
        assert_eq!(detail_string(&event, "phase"), "move");
        assert_eq!(detail_string(&event, "value"), "");
        assert_eq!(detail_i64(&event, "value"), 3);
        assert_eq!(detail_bool(&event, "phase"), false);
    }

    #[test]
    fn test_detail_string_list() {
        let el = Element::new("coral-tree");
        let event = DomEvent::on(&el, "coral-selection-change").with_payload(json!({
            "detail": { "selection": ["a", "b", 3, "c"] }
        }));
        assert_eq!(detail_string_list(&event, "selection"), vec!["a", "b", "c"]);

        let scalar = DomEvent::on(&el, "coral-selection-change").with_payload(json!({
            "detail": { "selection": "a" }
        }));
        assert!(detail_string_list(&scalar, "selection").is_empty());
    }
}
