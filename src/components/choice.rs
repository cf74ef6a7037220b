//! Boolean and mutually-exclusive choices - checkboxes, switches and radios.

use crate::types::Size;

use super::{component, plain_event, slot_method};

/// Generate the form-control event set shared by every choice component.
macro_rules! form_events {
    () => {
        plain_event!(
            /// Fired when the checked state is committed.
            "coral-change",
            same_node: false,
            add_change_listener / on_change
        );
        plain_event!(
            "coral-input",
            same_node: false,
            add_input_listener / on_input
        );
        plain_event!(
            "coral-focus",
            same_node: false,
            add_focus_listener / on_focus
        );
        plain_event!(
            "coral-blur",
            same_node: false,
            add_blur_listener / on_blur
        );
    };
}

/// Generate the accessor set shared by [`Checkbox`] and [`Switch`].
macro_rules! toggle_accessors {
    () => {
        pub fn checked(&self) -> bool {
            self.element.get_bool("checked", false)
        }

        pub fn set_checked(&mut self, checked: bool) -> &mut Self {
            self.element.set_bool("checked", checked);
            self
        }

        pub fn disabled(&self) -> bool {
            self.element.get_bool("disabled", false)
        }

        pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
            self.element.set_bool("disabled", disabled);
            self
        }

        pub fn required(&self) -> bool {
            self.element.get_bool("required", false)
        }

        pub fn set_required(&mut self, required: bool) -> &mut Self {
            self.element.set_bool("required", required);
            self
        }

        pub fn value(&self) -> String {
            self.element.get_string("value", "")
        }

        pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
            self.element.set_string("value", value.into());
            self
        }

        pub fn name(&self) -> String {
            self.element.get_string("name", "")
        }

        pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
            self.element.set_string("name", name.into());
            self
        }

        pub fn size(&self) -> Size {
            Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
        }

        pub fn set_size(&mut self, size: Size) -> &mut Self {
            self.element.set_string("size", size.token());
            self
        }

        pub fn label(&self) -> String {
            self.element.get_string("label", "")
        }

        pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
            self.element.set_string("label", label.into());
            self
        }

        pub fn help_text(&self) -> String {
            self.element.get_string("help-text", "")
        }

        pub fn set_help_text(&mut self, help_text: impl Into<String>) -> &mut Self {
            self.element.set_string("help-text", help_text.into());
            self
        }
    };
}

// =============================================================================
// Checkbox
// =============================================================================

component!(
    /// `<coral-checkbox>` - a three-state checkbox.
    Checkbox,
    "coral-checkbox"
);

impl Checkbox {
    /// Create a checkbox with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let checkbox = Self::new();
        checkbox.element.set_string("label", label.into());
        checkbox
    }

    toggle_accessors!();

    /// The visually-indeterminate state, independent of `checked`.
    pub fn indeterminate(&self) -> bool {
        self.element.get_bool("indeterminate", false)
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) -> &mut Self {
        self.element.set_bool("indeterminate", indeterminate);
        self
    }

    form_events!();
}

// =============================================================================
// Switch
// =============================================================================

component!(
    /// `<coral-switch>` - an on/off toggle.
    Switch,
    "coral-switch"
);

impl Switch {
    pub fn with_label(label: impl Into<String>) -> Self {
        let switch = Self::new();
        switch.element.set_string("label", label.into());
        switch
    }

    toggle_accessors!();

    form_events!();
}

// =============================================================================
// Radio
// =============================================================================

component!(
    /// `<coral-radio>` - one option inside a [`RadioGroup`].
    Radio,
    "coral-radio"
);

impl Radio {
    /// Create a radio with its value pre-populated.
    pub fn with_value(value: impl Into<String>) -> Self {
        let radio = Self::new();
        radio.element.set_string("value", value.into());
        radio
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }
}

// =============================================================================
// RadioButton
// =============================================================================

component!(
    /// `<coral-radio-button>` - a button-styled radio option.
    RadioButton,
    "coral-radio-button"
);

impl RadioButton {
    pub fn with_value(value: impl Into<String>) -> Self {
        let radio = Self::new();
        radio.element.set_string("value", value.into());
        radio
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn pill(&self) -> bool {
        self.element.get_bool("pill", false)
    }

    pub fn set_pill(&mut self, pill: bool) -> &mut Self {
        self.element.set_bool("pill", pill);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }
}

// =============================================================================
// RadioGroup
// =============================================================================

component!(
    /// `<coral-radio-group>` - groups radios and holds the selected value.
    RadioGroup,
    "coral-radio-group"
);

impl RadioGroup {
    pub fn with_label(label: impl Into<String>) -> Self {
        let group = Self::new();
        group.element.set_string("label", label.into());
        group
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// The value of the currently checked radio.
    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn required(&self) -> bool {
        self.element.get_bool("required", false)
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.element.set_bool("required", required);
        self
    }

    pub fn help_text(&self) -> String {
        self.element.get_string("help-text", "")
    }

    pub fn set_help_text(&mut self, help_text: impl Into<String>) -> &mut Self {
        self.element.set_string("help-text", help_text.into());
        self
    }

    slot_method!(
        /// Append radios to the group.
        "",
        add
    );
    slot_method!("label", add_to_label);

    plain_event!(
        "coral-change",
        same_node: false,
        add_change_listener / on_change
    );
    plain_event!(
        "coral-input",
        same_node: false,
        add_input_listener / on_input
    );
    plain_event!(
        "coral-invalid",
        same_node: false,
        add_invalid_listener / on_invalid
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_checkbox_indeterminate_is_independent() {
        let mut checkbox = Checkbox::with_label("All");
        checkbox.set_indeterminate(true);
        assert!(checkbox.indeterminate());
        assert!(!checkbox.checked());
    }

    #[test]
    fn test_radio_group_holds_children_in_order() {
        let first = Radio::with_value("a");
        let second = Radio::with_value("b");
        let mut group = RadioGroup::with_label("Letters");
        group.add(&[&first, &second]);

        let children = group.element().slot_children("");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].node_id(), first.node_id());
        assert_eq!(children[1].node_id(), second.node_id());
    }

    #[test]
    fn test_switch_chaining() {
        let mut switch = Switch::new();
        switch.set_checked(true).set_name("dark-mode").set_size(Size::Small);
        assert!(switch.checked());
        assert_eq!(switch.name(), "dark-mode");
    }
}
