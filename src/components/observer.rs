//! Observers and inclusion - mutation/resize watchers and remote includes.

use crate::event::{DomEvent, detail_i64};

use super::{component, payload_event, plain_event, slot_method};

// =============================================================================
// MutationObserver
// =============================================================================

/// Payload of `coral-mutation`: a summary of the observed changes.
#[derive(Debug, Clone)]
pub struct MutationEvent {
    raw: DomEvent,
}

impl MutationEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// Number of mutation records in the batch, `0` when absent.
    pub fn record_count(&self) -> i64 {
        detail_i64(&self.raw, "records")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-mutation-observer>` - watches slotted content for DOM changes.
    MutationObserver,
    "coral-mutation-observer"
);

impl MutationObserver {
    /// Attribute name to watch, `"*"` for all.
    pub fn attr(&self) -> String {
        self.element.get_string("attr", "")
    }

    pub fn set_attr(&mut self, attr: impl Into<String>) -> &mut Self {
        self.element.set_string("attr", attr.into());
        self
    }

    pub fn attr_old_value(&self) -> bool {
        self.element.get_bool("attr-old-value", false)
    }

    pub fn set_attr_old_value(&mut self, old_value: bool) -> &mut Self {
        self.element.set_bool("attr-old-value", old_value);
        self
    }

    pub fn char_data(&self) -> bool {
        self.element.get_bool("char-data", false)
    }

    pub fn set_char_data(&mut self, char_data: bool) -> &mut Self {
        self.element.set_bool("char-data", char_data);
        self
    }

    pub fn char_data_old_value(&self) -> bool {
        self.element.get_bool("char-data-old-value", false)
    }

    pub fn set_char_data_old_value(&mut self, old_value: bool) -> &mut Self {
        self.element.set_bool("char-data-old-value", old_value);
        self
    }

    pub fn child_list(&self) -> bool {
        self.element.get_bool("child-list", false)
    }

    pub fn set_child_list(&mut self, child_list: bool) -> &mut Self {
        self.element.set_bool("child-list", child_list);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    slot_method!(
        /// Append the content to observe.
        "",
        add
    );

    payload_event!(
        /// Fired when observed mutations are flushed.
        "coral-mutation" => MutationEvent,
        same_node: false,
        add_mutation_listener / on_mutation
    );
}

// =============================================================================
// ResizeObserver
// =============================================================================

component!(
    /// `<coral-resize-observer>` - watches slotted content for size changes.
    ResizeObserver,
    "coral-resize-observer"
);

impl ResizeObserver {
    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    slot_method!("", add);

    plain_event!(
        /// Fired when an observed element is resized.
        "coral-resize",
        same_node: false,
        add_resize_listener / on_resize
    );
}

// =============================================================================
// Include
// =============================================================================

/// Payload of `coral-error`: why the include failed.
#[derive(Debug, Clone)]
pub struct LoadErrorEvent {
    raw: DomEvent,
}

impl LoadErrorEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// HTTP status of the failed fetch, `0` when absent.
    pub fn status(&self) -> i64 {
        detail_i64(&self.raw, "status")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-include>` - fetches and embeds a remote HTML fragment.
    Include,
    "coral-include"
);

impl Include {
    /// Create an include with its source URL pre-populated.
    pub fn with_src(src: impl Into<String>) -> Self {
        let include = Self::new();
        include.element.set_string("src", src.into());
        include
    }

    pub fn src(&self) -> String {
        self.element.get_string("src", "")
    }

    pub fn set_src(&mut self, src: impl Into<String>) -> &mut Self {
        self.element.set_string("src", src.into());
        self
    }

    /// Fetch mode: `"cors"` (default), `"no-cors"` or `"same-origin"`.
    pub fn mode(&self) -> String {
        self.element.get_string("mode", "cors")
    }

    pub fn set_mode(&mut self, mode: impl Into<String>) -> &mut Self {
        self.element.set_string("mode", mode.into());
        self
    }

    /// Executes scripts in the included fragment. Off unless the source is
    /// trusted.
    pub fn allow_scripts(&self) -> bool {
        self.element.get_bool("allow-scripts", false)
    }

    pub fn set_allow_scripts(&mut self, allow: bool) -> &mut Self {
        self.element.set_bool("allow-scripts", allow);
        self
    }

    plain_event!(
        "coral-load",
        same_node: false,
        add_load_listener / on_load
    );
    payload_event!(
        /// Fired when the fragment fails to load.
        "coral-error" => LoadErrorEvent,
        same_node: false,
        add_error_listener / on_error
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
    fn test_mutation_record_count() {
        let observer = MutationObserver::new();
        let count = Rc::new(RefCell::new(0_i64));
        let count_in = Rc::clone(&count);
        observer.add_mutation_listener(move |event| {
            *count_in.borrow_mut() = event.record_count();
        });

        let event = DomEvent::on(observer.element(), "coral-mutation")
            .with_payload(json!({ "detail": { "records": 4 } }));
        observer.element().dispatch(&event);
        assert_eq!(*count.borrow(), 4);
    }

    #[test]
    fn test_include_error_status_defaults_to_zero() {
        let include = Include::with_src("/fragment.html");
        let status = Rc::new(RefCell::new(-1_i64));
        let status_in = Rc::clone(&status);
        include.add_error_listener(move |event| {
            *status_in.borrow_mut() = event.status();
        });

        include
            .element()
            .dispatch(&DomEvent::on(include.element(), "coral-error"));
        assert_eq!(*status.borrow(), 0);
    }

    #[test]
    fn test_include_mode_default() {
        let include = Include::new();
        assert_eq!(include.mode(), "cors");
        assert!(!include.allow_scripts());
    }
}
