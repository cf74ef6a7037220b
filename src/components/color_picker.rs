//! Color picker - a swatch-and-slider color form control.

use crate::types::Size;

use super::{component, plain_event};

component!(
    /// `<coral-color-picker>` - a color form control, dropdown by default.
    ColorPicker,
    "coral-color-picker"
);

impl ColorPicker {
    /// Create a picker with its value pre-populated.
    pub fn with_value(value: impl Into<String>) -> Self {
        let picker = Self::new();
        picker.element.set_string("value", value.into());
        picker
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    /// Value format: `"hex"` (default), `"rgb"`, `"hsl"` or `"hsv"`.
    pub fn format(&self) -> String {
        self.element.get_string("format", "hex")
    }

    pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.element.set_string("format", format.into());
        self
    }

    /// Renders the picker inline instead of inside a dropdown.
    pub fn inline(&self) -> bool {
        self.element.get_bool("inline", false)
    }

    pub fn set_inline(&mut self, inline: bool) -> &mut Self {
        self.element.set_bool("inline", inline);
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn no_format_toggle(&self) -> bool {
        self.element.get_bool("no-format-toggle", false)
    }

    pub fn set_no_format_toggle(&mut self, no_toggle: bool) -> &mut Self {
        self.element.set_bool("no-format-toggle", no_toggle);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn hoist(&self) -> bool {
        self.element.get_bool("hoist", false)
    }

    pub fn set_hoist(&mut self, hoist: bool) -> &mut Self {
        self.element.set_bool("hoist", hoist);
        self
    }

    /// Enables the alpha slider.
    pub fn opacity(&self) -> bool {
        self.element.get_bool("opacity", false)
    }

    pub fn set_opacity(&mut self, opacity: bool) -> &mut Self {
        self.element.set_bool("opacity", opacity);
        self
    }

    pub fn uppercase(&self) -> bool {
        self.element.get_bool("uppercase", false)
    }

    pub fn set_uppercase(&mut self, uppercase: bool) -> &mut Self {
        self.element.set_bool("uppercase", uppercase);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Semicolon-delimited preset swatches.
    pub fn swatches(&self) -> String {
        self.element.get_string("swatches", "")
    }

    pub fn set_swatches(&mut self, swatches: impl Into<String>) -> &mut Self {
        self.element.set_string("swatches", swatches.into());
        self
    }

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
        "coral-invalid",
        same_node: false,
        add_invalid_listener / on_invalid
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_picker_defaults() {
        let picker = ColorPicker::new();
        assert_eq!(picker.format(), "hex");
        assert!(!picker.inline());
        assert!(!picker.opacity());
    }

    #[test]
    fn test_color_picker_value_round_trip() {
        let mut picker = ColorPicker::with_value("#336699");
        assert_eq!(picker.value(), "#336699");
        picker.set_format("rgb").set_opacity(true);
        assert_eq!(picker.format(), "rgb");
    }
}
