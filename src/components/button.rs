//! Button family - buttons, icon buttons, copy buttons and button groups.

use crate::event::{DomEvent, detail_string};
use crate::types::{Size, Variant};

use super::{component, payload_event, plain_event, slot_method};

// =============================================================================
// Button
// =============================================================================

component!(
    /// `<coral-button>` - a clickable button.
    ///
    /// # Example
    ///
    /// ```
    /// use coral_flow::components::Button;
    /// use coral_flow::types::{Size, Variant};
    ///
    /// let mut save = Button::with_label("Save");
    /// save.set_variant(Variant::Primary).set_size(Size::Large);
    /// assert_eq!(save.label(), "Save");
    /// ```
    Button,
    "coral-button"
);

impl Button {
    /// Create a button with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let button = Self::new();
        button.element.set_string("label", label.into());
        button
    }

    /// The visible label text.
    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Theme variant, `Neutral` by default.
    pub fn variant(&self) -> Variant {
        Variant::from_token(&self.element.get_string("variant", "")).unwrap_or_default()
    }

    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.element.set_string("variant", variant.token());
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    /// Whether the button shows its loading spinner.
    pub fn loading(&self) -> bool {
        self.element.get_bool("loading", false)
    }

    pub fn set_loading(&mut self, loading: bool) -> &mut Self {
        self.element.set_bool("loading", loading);
        self
    }

    pub fn outline(&self) -> bool {
        self.element.get_bool("outline", false)
    }

    pub fn set_outline(&mut self, outline: bool) -> &mut Self {
        self.element.set_bool("outline", outline);
        self
    }

    pub fn pill(&self) -> bool {
        self.element.get_bool("pill", false)
    }

    pub fn set_pill(&mut self, pill: bool) -> &mut Self {
        self.element.set_bool("pill", pill);
        self
    }

    pub fn circle(&self) -> bool {
        self.element.get_bool("circle", false)
    }

    pub fn set_circle(&mut self, circle: bool) -> &mut Self {
        self.element.set_bool("circle", circle);
        self
    }

    /// Renders the button as a link when set.
    pub fn href(&self) -> String {
        self.element.get_string("href", "")
    }

    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.element.set_string("href", href.into());
        self
    }

    pub fn target(&self) -> String {
        self.element.get_string("target", "")
    }

    pub fn set_target(&mut self, target: impl Into<String>) -> &mut Self {
        self.element.set_string("target", target.into());
        self
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    slot_method!(
        /// Append children to the prefix slot (before the label).
        "prefix",
        add_to_prefix
    );
    slot_method!(
        /// Append children to the suffix slot (after the label).
        "suffix",
        add_to_suffix
    );

    plain_event!(
        /// Native activation click on the button itself.
        "click",
        same_node: true,
        add_click_listener / on_click
    );
    plain_event!("coral-focus", same_node: false, add_focus_listener / on_focus);
    plain_event!("coral-blur", same_node: false, add_blur_listener / on_blur);
}

// =============================================================================
// IconButton
// =============================================================================

component!(
    /// `<coral-icon-button>` - a button rendered as a bare icon.
    IconButton,
    "coral-icon-button"
);

impl IconButton {
    /// Create an icon button showing the named icon.
    pub fn with_name(name: impl Into<String>) -> Self {
        let button = Self::new();
        button.element.set_string("name", name.into());
        button
    }

    /// Icon name from the active icon library.
    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    /// Accessible label; icon buttons have no visible text.
    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    pub fn href(&self) -> String {
        self.element.get_string("href", "")
    }

    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.element.set_string("href", href.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    plain_event!("click", same_node: true, add_click_listener / on_click);
    plain_event!("coral-focus", same_node: false, add_focus_listener / on_focus);
    plain_event!("coral-blur", same_node: false, add_blur_listener / on_blur);
}

// =============================================================================
// CopyButton
// =============================================================================

/// Payload of `coral-copy`: the text that was written to the clipboard.
#[derive(Debug, Clone)]
pub struct CopyEvent {
    raw: DomEvent,
}

impl CopyEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// The copied text. Empty when the payload carries none.
    pub fn value(&self) -> String {
        detail_string(&self.raw, "value")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-copy-button>` - copies its value to the clipboard on click.
    CopyButton,
    "coral-copy-button"
);

impl CopyButton {
    /// Create a copy button with its value pre-populated.
    pub fn with_value(value: impl Into<String>) -> Self {
        let button = Self::new();
        button.element.set_string("value", value.into());
        button
    }

    /// The text copied to the clipboard.
    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn copy_label(&self) -> String {
        self.element.get_string("copy-label", "")
    }

    pub fn set_copy_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("copy-label", label.into());
        self
    }

    pub fn success_label(&self) -> String {
        self.element.get_string("success-label", "")
    }

    pub fn set_success_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("success-label", label.into());
        self
    }

    pub fn error_label(&self) -> String {
        self.element.get_string("error-label", "")
    }

    pub fn set_error_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("error-label", label.into());
        self
    }

    /// Milliseconds the success/error feedback stays visible.
    pub fn feedback_duration(&self) -> i64 {
        self.element.get_int("feedback-duration", 1000)
    }

    pub fn set_feedback_duration(&mut self, millis: i64) -> &mut Self {
        self.element.set_int("feedback-duration", millis);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    payload_event!(
        /// Fired after the value was copied successfully.
        "coral-copy" => CopyEvent,
        same_node: false,
        add_copy_listener / on_copy
    );
    plain_event!(
        /// Fired when the clipboard write failed.
        "coral-error",
        same_node: false,
        add_error_listener / on_error
    );
}

// =============================================================================
// ButtonGroup
// =============================================================================

component!(
    /// `<coral-button-group>` - visually groups adjacent buttons.
    ButtonGroup,
    "coral-button-group"
);

impl ButtonGroup {
    /// Accessible label for the group.
    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    slot_method!(
        /// Append buttons to the group.
        "",
        add
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_button_defaults() {
        let button = Button::new();
        assert_eq!(button.label(), "");
        assert_eq!(button.variant(), Variant::Neutral);
        assert_eq!(button.size(), Size::Medium);
        assert!(!button.disabled());
        assert!(!button.loading());
    }

    #[test]
    fn test_button_fluent_chain_round_trips() {
        let mut button = Button::with_label("Delete");
        button
            .set_variant(Variant::Danger)
            .set_size(Size::Small)
            .set_outline(true)
            .set_disabled(true);

        assert_eq!(button.label(), "Delete");
        assert_eq!(button.variant(), Variant::Danger);
        assert_eq!(button.size(), Size::Small);
        assert!(button.outline());
        assert!(button.disabled());
        assert!(!button.pill());
    }

    #[test]
    fn test_button_click_is_same_node_filtered() {
        let button = Button::new();
        let clicks = Rc::new(RefCell::new(0));
        let clicks_in = Rc::clone(&clicks);
        button.add_click_listener(move || *clicks_in.borrow_mut() += 1);

        // A click bubbling out of a nested icon must not be delivered.
        let nested = IconButton::new();
        button
            .element()
            .dispatch(&DomEvent::new("click", nested.node_id()));
        assert_eq!(*clicks.borrow(), 0);

        button
            .element()
            .dispatch(&DomEvent::on(button.element(), "click"));
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn test_copy_button_event_value() {
        let button = CopyButton::with_value("secret");
        let copied = Rc::new(RefCell::new(String::new()));
        let copied_in = Rc::clone(&copied);
        button.add_copy_listener(move |event| {
            *copied_in.borrow_mut() = event.value();
        });

        let event = DomEvent::on(button.element(), "coral-copy")
            .with_payload(json!({ "detail": { "value": "secret" } }));
        assert_eq!(button.element().dispatch(&event), 1);
        assert_eq!(*copied.borrow(), "secret");
    }

    #[test]
    fn test_button_group_collects_children() {
        let mut group = ButtonGroup::new();
        let left = Button::with_label("Left");
        let right = Button::with_label("Right");
        group.add(&[&left, &right]);

        assert_eq!(group.element().child_count(), 2);
        assert_eq!(group.element().slot_children("")[0].node_id(), left.node_id());
    }
}
