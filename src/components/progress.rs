//! Progress indicators - bars and rings.

use super::component;

component!(
    /// `<coral-progress-bar>` - a horizontal progress indicator.
    ///
    /// # Example
    ///
    /// ```
    /// use coral_flow::components::ProgressBar;
    ///
    /// let bar = ProgressBar::with_value(75.0);
    /// assert_eq!(bar.value(), 75.0);
    /// ```
    ProgressBar,
    "coral-progress-bar"
);

impl ProgressBar {
    /// Create a bar with its percentage pre-populated.
    pub fn with_value(value: f64) -> Self {
        let bar = Self::new();
        bar.element.set_double("value", value);
        bar
    }

    /// Completion percentage, 0 to 100.
    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
        self
    }

    /// Animates without a known completion percentage.
    pub fn indeterminate(&self) -> bool {
        self.element.get_bool("indeterminate", false)
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) -> &mut Self {
        self.element.set_bool("indeterminate", indeterminate);
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

component!(
    /// `<coral-progress-ring>` - a circular progress indicator.
    ProgressRing,
    "coral-progress-ring"
);

impl ProgressRing {
    pub fn with_value(value: f64) -> Self {
        let ring = Self::new();
        ring.element.set_double("value", value);
        ring
    }

    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
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

    #[test]
    fn test_progress_bar_value_is_exact() {
        let bar = ProgressBar::with_value(75.0);
        assert_eq!(bar.value(), 75.0);
    }

    #[test]
    fn test_progress_ring_default_value() {
        let ring = ProgressRing::new();
        assert_eq!(ring.value(), 0.0);
    }
}
