//! Layout helpers - split panels, dividers and collapsible details.

use crate::types::Orientation;

use super::{component, plain_event, slot_method};

// =============================================================================
// SplitPanel
// =============================================================================

component!(
    /// `<coral-split-panel>` - two resizable panes around a draggable divider.
    ///
    /// The divider position is a percentage of the primary pane, 0 to 100.
    /// Values are passed through as-is; the browser clamps.
    SplitPanel,
    "coral-split-panel"
);

impl SplitPanel {
    /// Create a panel with the divider position pre-populated.
    pub fn with_position(position: f64) -> Self {
        let panel = Self::new();
        panel.element.set_double("position", position);
        panel
    }

    pub fn position(&self) -> f64 {
        self.element.get_double("position", 50.0)
    }

    pub fn set_position(&mut self, position: f64) -> &mut Self {
        self.element.set_double("position", position);
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_token(&self.element.get_string("orientation", "")).unwrap_or_default()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.element.set_string("orientation", orientation.token());
        self
    }

    /// Which pane keeps its size on resize: `"start"`, `"end"` or neither.
    pub fn primary(&self) -> String {
        self.element.get_string("primary", "")
    }

    pub fn set_primary(&mut self, primary: impl Into<String>) -> &mut Self {
        self.element.set_string("primary", primary.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    /// Space-delimited snap points, e.g. `"100px 50%"`.
    pub fn snap(&self) -> String {
        self.element.get_string("snap", "")
    }

    pub fn set_snap(&mut self, snap: impl Into<String>) -> &mut Self {
        self.element.set_string("snap", snap.into());
        self
    }

    slot_method!(
        /// Append children to the start pane.
        "start",
        add_to_start
    );
    slot_method!(
        /// Append children to the end pane.
        "end",
        add_to_end
    );
    slot_method!("divider", add_to_divider);

    plain_event!(
        /// Fired as the divider is dragged.
        "coral-reposition",
        same_node: false,
        add_reposition_listener / on_reposition
    );
}

// =============================================================================
// Divider
// =============================================================================

component!(
    /// `<coral-divider>` - a thin separator line.
    Divider,
    "coral-divider"
);

impl Divider {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_token(&self.element.get_string("orientation", "")).unwrap_or_default()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.element.set_string("orientation", orientation.token());
        self
    }
}

// =============================================================================
// Details
// =============================================================================

component!(
    /// `<coral-details>` - a collapsible content section.
    Details,
    "coral-details"
);

impl Details {
    /// Create a details section with its summary pre-populated.
    pub fn with_summary(summary: impl Into<String>) -> Self {
        let details = Self::new();
        details.element.set_string("summary", summary.into());
        details
    }

    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    pub fn summary(&self) -> String {
        self.element.get_string("summary", "")
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) -> &mut Self {
        self.element.set_string("summary", summary.into());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    slot_method!("summary", add_to_summary);
    slot_method!("expand-icon", add_to_expand_icon);
    slot_method!("collapse-icon", add_to_collapse_icon);
    slot_method!("", add);

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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_split_panel_position_unclamped() {
        let panel = SplitPanel::with_position(130.0);
        assert_eq!(panel.position(), 130.0);
        assert_eq!(SplitPanel::new().position(), 50.0);
    }

    #[test]
    fn test_split_panel_panes() {
        let nav = Divider::new();
        let content = Divider::new();
        let mut panel = SplitPanel::new();
        panel.add_to_start(&[&nav]).add_to_end(&[&content]);

        assert_eq!(panel.element().slot_children("start").len(), 1);
        assert_eq!(panel.element().slot_children("end").len(), 1);
        assert_eq!(panel.element().slot_children("divider").len(), 0);
    }

    #[test]
    fn test_details_summary() {
        let details = Details::with_summary("Shipping");
        assert_eq!(details.summary(), "Shipping");
        assert!(!details.open());
    }
}
