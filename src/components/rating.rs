//! Rating - a star (or custom symbol) score picker.

use crate::event::{DomEvent, detail_f64, detail_string};
use crate::types::HoverPhase;

use super::{component, payload_event, plain_event};

/// Payload of `coral-hover`: where the pointer is over the symbols.
#[derive(Debug, Clone)]
pub struct HoverEvent {
    raw: DomEvent,
}

impl HoverEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// Which part of the hover interaction this event marks.
    pub fn phase(&self) -> HoverPhase {
        HoverPhase::from_token(&detail_string(&self.raw, "phase")).unwrap_or_default()
    }

    /// The value the rating would commit to if clicked now.
    pub fn value(&self) -> f64 {
        detail_f64(&self.raw, "value")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-rating>` - a score picker, five symbols by default.
    Rating,
    "coral-rating"
);

impl Rating {
    /// Create a rating with its value pre-populated.
    pub fn with_value(value: f64) -> Self {
        let rating = Self::new();
        rating.element.set_double("value", value);
        rating
    }

    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
        self
    }

    pub fn max(&self) -> i64 {
        self.element.get_int("max", 5)
    }

    pub fn set_max(&mut self, max: i64) -> &mut Self {
        self.element.set_int("max", max);
        self
    }

    /// Granularity of selectable values, `1.0` by default.
    pub fn precision(&self) -> f64 {
        self.element.get_double("precision", 1.0)
    }

    pub fn set_precision(&mut self, precision: f64) -> &mut Self {
        self.element.set_double("precision", precision);
        self
    }

    pub fn readonly(&self) -> bool {
        self.element.get_bool("readonly", false)
    }

    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.element.set_bool("readonly", readonly);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    plain_event!(
        /// Fired when the committed value changes.
        "coral-change",
        same_node: false,
        add_change_listener / on_change
    );
    payload_event!(
        /// Fired as the pointer moves over the symbols.
        "coral-hover" => HoverEvent,
        same_node: false,
        add_hover_listener / on_hover
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_rating_defaults() {
        let rating = Rating::new();
        assert_eq!(rating.value(), 0.0);
        assert_eq!(rating.max(), 5);
        assert_eq!(rating.precision(), 1.0);
        assert!(!rating.readonly());
        assert!(!rating.disabled());
    }

    #[test]
    fn test_hover_event_extraction() {
        let rating = Rating::new();
        let seen = Rc::new(RefCell::new((HoverPhase::Start, 0.0)));
        let seen_in = Rc::clone(&seen);
        rating.add_hover_listener(move |event| {
            *seen_in.borrow_mut() = (event.phase(), event.value());
        });

        let event = DomEvent::on(rating.element(), "coral-hover")
            .with_payload(json!({ "detail": { "phase": "move", "value": 3.5 } }));
        rating.element().dispatch(&event);
        assert_eq!(*seen.borrow(), (HoverPhase::Move, 3.5));
    }

    #[test]
    fn test_hover_event_defaults_on_empty_payload() {
        let rating = Rating::new();
        let seen = Rc::new(RefCell::new((HoverPhase::Move, 1.0)));
        let seen_in = Rc::clone(&seen);
        rating.add_hover_listener(move |event| {
            *seen_in.borrow_mut() = (event.phase(), event.value());
        });

        rating
            .element()
            .dispatch(&DomEvent::on(rating.element(), "coral-hover"));
        assert_eq!(*seen.borrow(), (HoverPhase::Start, 0.0));
    }
}
