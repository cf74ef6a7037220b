//! Range - a slider form control.

use super::{component, plain_event};

component!(
    /// `<coral-range>` - a slider for picking a number within a range.
    Range,
    "coral-range"
);

impl Range {
    /// Create a range with its value pre-populated.
    pub fn with_value(value: f64) -> Self {
        let range = Self::new();
        range.element.set_double("value", value);
        range
    }

    pub fn min(&self) -> f64 {
        self.element.get_double("min", 0.0)
    }

    pub fn set_min(&mut self, min: f64) -> &mut Self {
        self.element.set_double("min", min);
        self
    }

    pub fn max(&self) -> f64 {
        self.element.get_double("max", 100.0)
    }

    pub fn set_max(&mut self, max: f64) -> &mut Self {
        self.element.set_double("max", max);
        self
    }

    pub fn step(&self) -> f64 {
        self.element.get_double("step", 1.0)
    }

    pub fn set_step(&mut self, step: f64) -> &mut Self {
        self.element.set_double("step", step);
        self
    }

    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
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

    pub fn help_text(&self) -> String {
        self.element.get_string("help-text", "")
    }

    pub fn set_help_text(&mut self, help_text: impl Into<String>) -> &mut Self {
        self.element.set_string("help-text", help_text.into());
        self
    }

    /// Tooltip position: `"top"` (default), `"bottom"` or `"none"`.
    pub fn tooltip(&self) -> String {
        self.element.get_string("tooltip", "top")
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.element.set_string("tooltip", tooltip.into());
        self
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
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
    fn test_range_defaults() {
        let range = Range::new();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 100.0);
        assert_eq!(range.step(), 1.0);
        assert_eq!(range.value(), 0.0);
        assert_eq!(range.tooltip(), "top");
    }

    #[test]
    fn test_range_value_passes_through_unclamped() {
        // The browser clamps; the binding does not second-guess it.
        let mut range = Range::with_value(250.0);
        assert_eq!(range.value(), 250.0);
        range.set_value(-10.0);
        assert_eq!(range.value(), -10.0);
    }
}
