//! Select - a dropdown form control and its options.

use crate::types::{Placement, Size};

use super::{component, plain_event, slot_method};

// =============================================================================
// Select
// =============================================================================

component!(
    /// `<coral-select>` - a single- or multi-value option picker.
    Select,
    "coral-select"
);

impl Select {
    /// Create a select with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let select = Self::new();
        select.element.set_string("label", label.into());
        select
    }

    /// The selected value. For multi-selects this is space-delimited.
    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn multiple(&self) -> bool {
        self.element.get_bool("multiple", false)
    }

    pub fn set_multiple(&mut self, multiple: bool) -> &mut Self {
        self.element.set_bool("multiple", multiple);
        self
    }

    pub fn clearable(&self) -> bool {
        self.element.get_bool("clearable", false)
    }

    pub fn set_clearable(&mut self, clearable: bool) -> &mut Self {
        self.element.set_bool("clearable", clearable);
        self
    }

    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
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

    pub fn placeholder(&self) -> String {
        self.element.get_string("placeholder", "")
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.element.set_string("placeholder", placeholder.into());
        self
    }

    /// Tags shown before a multi-select collapses into `+n`.
    pub fn max_options_visible(&self) -> i64 {
        self.element.get_int("max-options-visible", 3)
    }

    pub fn set_max_options_visible(&mut self, max: i64) -> &mut Self {
        self.element.set_int("max-options-visible", max);
        self
    }

    /// Listbox placement, `Bottom` by default.
    pub fn placement(&self) -> Placement {
        Placement::from_token(
            &self.element.get_string("placement", Placement::Bottom.token()),
        )
        .unwrap_or(Placement::Bottom)
    }

    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.element.set_string("placement", placement.token());
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

    pub fn required(&self) -> bool {
        self.element.get_bool("required", false)
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.element.set_bool("required", required);
        self
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    pub fn hoist(&self) -> bool {
        self.element.get_bool("hoist", false)
    }

    pub fn set_hoist(&mut self, hoist: bool) -> &mut Self {
        self.element.set_bool("hoist", hoist);
        self
    }

    slot_method!(
        /// Append options to the listbox.
        "",
        add
    );
    slot_method!("prefix", add_to_prefix);

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
        "coral-focus",
        same_node: false,
        add_focus_listener / on_focus
    );
    plain_event!(
        "coral-blur",
        same_node: false,
        add_blur_listener / on_blur
    );
    plain_event!(
        "coral-clear",
        same_node: false,
        add_clear_listener / on_clear
    );
    plain_event!(
        "coral-show",
        same_node: true,
        add_show_listener / on_show
    );
    plain_event!(
        "coral-after-show",
        same_node: true,
        add_after_show_listener / on_after_show
    );
    plain_event!(
        "coral-hide",
        same_node: true,
        add_hide_listener / on_hide
    );
    plain_event!(
        "coral-after-hide",
        same_node: true,
        add_after_hide_listener / on_after_hide
    );
    plain_event!(
        "coral-invalid",
        same_node: false,
        add_invalid_listener / on_invalid
    );
}

// =============================================================================
// SelectOption
// =============================================================================

component!(
    /// `<coral-option>` - a selectable entry inside a [`Select`].
    SelectOption,
    "coral-option"
);

impl SelectOption {
    /// Create an option with value and label pre-populated.
    pub fn with_value_and_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        let option = Self::new();
        option.element.set_string("value", value.into());
        option.element.set_string("label", label.into());
        option
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

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_select_defaults() {
        let select = Select::new();
        assert_eq!(select.placement(), Placement::Bottom);
        assert_eq!(select.max_options_visible(), 3);
        assert!(!select.multiple());
    }

    #[test]
    fn test_select_collects_options() {
        let small = SelectOption::with_value_and_label("s", "Small");
        let large = SelectOption::with_value_and_label("l", "Large");
        let mut select = Select::with_label("Shirt size");
        select.add(&[&small, &large]).set_value("s");

        assert_eq!(select.element().child_count(), 2);
        assert_eq!(select.value(), "s");
        assert_eq!(small.label(), "Small");
    }
}
