//! Text entry - single-line inputs and textareas.

use crate::types::Size;

use super::{component, plain_event};

// =============================================================================
// Input
// =============================================================================

component!(
    /// `<coral-input>` - a single-line text field.
    ///
    /// # Example
    ///
    /// ```
    /// use coral_flow::components::Input;
    ///
    /// let mut input = Input::with_value_and_label("jane", "Username");
    /// input.set_required(true).set_clearable(true);
    /// assert_eq!(input.value(), "jane");
    /// ```
    Input,
    "coral-input"
);

impl Input {
    /// Create an input with its value pre-populated.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.element.set_string("value", value.into());
        input
    }

    /// Create an input with value and label pre-populated.
    pub fn with_value_and_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        let input = Self::with_value(value);
        input.element.set_string("label", label.into());
        input
    }

    /// Input type, `"text"` by default. Any valid HTML input type token.
    pub fn input_type(&self) -> String {
        self.element.get_string("type", "text")
    }

    pub fn set_input_type(&mut self, input_type: impl Into<String>) -> &mut Self {
        self.element.set_string("type", input_type.into());
        self
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
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

    /// Shows a clear button when the input has content.
    pub fn clearable(&self) -> bool {
        self.element.get_bool("clearable", false)
    }

    pub fn set_clearable(&mut self, clearable: bool) -> &mut Self {
        self.element.set_bool("clearable", clearable);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn readonly(&self) -> bool {
        self.element.get_bool("readonly", false)
    }

    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.element.set_bool("readonly", readonly);
        self
    }

    pub fn required(&self) -> bool {
        self.element.get_bool("required", false)
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.element.set_bool("required", required);
        self
    }

    /// Regular expression the value is validated against.
    pub fn pattern(&self) -> String {
        self.element.get_string("pattern", "")
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.element.set_string("pattern", pattern.into());
        self
    }

    pub fn minlength(&self) -> i64 {
        self.element.get_int("minlength", 0)
    }

    pub fn set_minlength(&mut self, minlength: i64) -> &mut Self {
        self.element.set_int("minlength", minlength);
        self
    }

    pub fn maxlength(&self) -> i64 {
        self.element.get_int("maxlength", 0)
    }

    pub fn set_maxlength(&mut self, maxlength: i64) -> &mut Self {
        self.element.set_int("maxlength", maxlength);
        self
    }

    pub fn min(&self) -> f64 {
        self.element.get_double("min", 0.0)
    }

    pub fn set_min(&mut self, min: f64) -> &mut Self {
        self.element.set_double("min", min);
        self
    }

    pub fn max(&self) -> f64 {
        self.element.get_double("max", 0.0)
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

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
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

    plain_event!(
        /// Fired when the value is committed.
        "coral-change",
        same_node: false,
        add_change_listener / on_change
    );
    plain_event!(
        /// Fired on every keystroke that alters the value.
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
        /// Fired when the clear button empties the value.
        "coral-clear",
        same_node: false,
        add_clear_listener / on_clear
    );
    plain_event!(
        "coral-invalid",
        same_node: false,
        add_invalid_listener / on_invalid
    );
}

// =============================================================================
// Textarea
// =============================================================================

component!(
    /// `<coral-textarea>` - a multi-line text field.
    Textarea,
    "coral-textarea"
);

impl Textarea {
    pub fn with_value(value: impl Into<String>) -> Self {
        let textarea = Self::new();
        textarea.element.set_string("value", value.into());
        textarea
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
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

    pub fn rows(&self) -> i64 {
        self.element.get_int("rows", 4)
    }

    pub fn set_rows(&mut self, rows: i64) -> &mut Self {
        self.element.set_int("rows", rows);
        self
    }

    /// Resize behavior: `"none"`, `"vertical"` (default) or `"auto"`.
    pub fn resize(&self) -> String {
        self.element.get_string("resize", "vertical")
    }

    pub fn set_resize(&mut self, resize: impl Into<String>) -> &mut Self {
        self.element.set_string("resize", resize.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn readonly(&self) -> bool {
        self.element.get_bool("readonly", false)
    }

    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        self.element.set_bool("readonly", readonly);
        self
    }

    pub fn required(&self) -> bool {
        self.element.get_bool("required", false)
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.element.set_bool("required", required);
        self
    }

    pub fn maxlength(&self) -> i64 {
        self.element.get_int("maxlength", 0)
    }

    pub fn set_maxlength(&mut self, maxlength: i64) -> &mut Self {
        self.element.set_int("maxlength", maxlength);
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
