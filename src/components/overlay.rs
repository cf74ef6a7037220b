//! Overlay family - dialogs, drawers, popups, tooltips and dropdowns.
//!
//! All overlay lifecycle events (`coral-show`, `coral-after-show`,
//! `coral-hide`, `coral-after-hide`) are registered with same-node filtering:
//! nested overlays re-fire the same event names, and a listener must only see
//! events originating on its own element.

use crate::event::{DomEvent, detail_string};
use crate::types::{ArrowPlacement, AutoSize, Placement, Strategy, Sync, TabPlacement};

use super::{component, payload_event, plain_event, slot_method};

// =============================================================================
// Shared Events
// =============================================================================

/// Payload of `coral-request-close`: what triggered the close attempt.
#[derive(Debug, Clone)]
pub struct RequestCloseEvent {
    raw: DomEvent,
}

impl RequestCloseEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// The close source: `"close-button"`, `"keyboard"` or `"overlay"`.
    /// Empty when the payload carries none.
    pub fn source(&self) -> String {
        detail_string(&self.raw, "source")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

/// Generate the four same-node-filtered overlay lifecycle registrations.
macro_rules! lifecycle_events {
    () => {
        plain_event!(
            /// Fired when the overlay starts to open. Same-node filtered.
            "coral-show",
            same_node: true,
            add_show_listener / on_show
        );
        plain_event!(
            /// Fired once the open animation finished. Same-node filtered.
            "coral-after-show",
            same_node: true,
            add_after_show_listener / on_after_show
        );
        plain_event!(
            /// Fired when the overlay starts to close. Same-node filtered.
            "coral-hide",
            same_node: true,
            add_hide_listener / on_hide
        );
        plain_event!(
            /// Fired once the close animation finished. Same-node filtered.
            "coral-after-hide",
            same_node: true,
            add_after_hide_listener / on_after_hide
        );
    };
}

// =============================================================================
// Dialog
// =============================================================================

component!(
    /// `<coral-dialog>` - a modal dialog.
    ///
    /// Slots: `label`, `header-actions`, `footer` and the default body slot.
    Dialog,
    "coral-dialog"
);

impl Dialog {
    /// Create a dialog with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let dialog = Self::new();
        dialog.element.set_string("label", label.into());
        dialog
    }

    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Hides the header, including the close button.
    pub fn no_header(&self) -> bool {
        self.element.get_bool("no-header", false)
    }

    pub fn set_no_header(&mut self, no_header: bool) -> &mut Self {
        self.element.set_bool("no-header", no_header);
        self
    }

    slot_method!("label", add_to_label);
    slot_method!("header-actions", add_to_header_actions);
    slot_method!("footer", add_to_footer);
    slot_method!(
        /// Append children to the dialog body.
        "",
        add
    );

    lifecycle_events!();

    payload_event!(
        /// Fired when the user attempts to close the dialog.
        "coral-request-close" => RequestCloseEvent,
        same_node: true,
        add_request_close_listener / on_request_close
    );
    plain_event!(
        "coral-initial-focus",
        same_node: true,
        add_initial_focus_listener / on_initial_focus
    );
}

// =============================================================================
// Drawer
// =============================================================================

component!(
    /// `<coral-drawer>` - a panel sliding in from a viewport edge.
    Drawer,
    "coral-drawer"
);

impl Drawer {
    pub fn with_label(label: impl Into<String>) -> Self {
        let drawer = Self::new();
        drawer.element.set_string("label", label.into());
        drawer
    }

    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Edge the drawer slides in from. `End` by default.
    pub fn placement(&self) -> TabPlacement {
        TabPlacement::from_token(
            &self.element.get_string("placement", TabPlacement::End.token()),
        )
        .unwrap_or(TabPlacement::End)
    }

    pub fn set_placement(&mut self, placement: TabPlacement) -> &mut Self {
        self.element.set_string("placement", placement.token());
        self
    }

    /// Confines the drawer to its parent instead of the viewport.
    pub fn contained(&self) -> bool {
        self.element.get_bool("contained", false)
    }

    pub fn set_contained(&mut self, contained: bool) -> &mut Self {
        self.element.set_bool("contained", contained);
        self
    }

    pub fn no_header(&self) -> bool {
        self.element.get_bool("no-header", false)
    }

    pub fn set_no_header(&mut self, no_header: bool) -> &mut Self {
        self.element.set_bool("no-header", no_header);
        self
    }

    slot_method!("label", add_to_label);
    slot_method!("header-actions", add_to_header_actions);
    slot_method!("footer", add_to_footer);
    slot_method!("", add);

    lifecycle_events!();

    payload_event!(
        "coral-request-close" => RequestCloseEvent,
        same_node: true,
        add_request_close_listener / on_request_close
    );
}

// =============================================================================
// Popup
// =============================================================================

component!(
    /// `<coral-popup>` - the low-level anchored-positioning primitive.
    ///
    /// Slots: `anchor` and the default popup slot.
    ///
    /// # Example
    ///
    /// ```
    /// use coral_flow::components::Popup;
    /// use coral_flow::element::BackedComponent;
    /// use coral_flow::types::AutoSize;
    ///
    /// let mut popup = Popup::new();
    /// popup.set_auto_size(Some(AutoSize::Both));
    /// assert_eq!(popup.element().get_string("auto-size", ""), "both");
    ///
    /// popup.set_auto_size(None);
    /// assert_eq!(popup.element().get_string("auto-size", ""), "");
    /// ```
    Popup,
    "coral-popup"
);

impl Popup {
    pub fn active(&self) -> bool {
        self.element.get_bool("active", false)
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.element.set_bool("active", active);
        self
    }

    /// Preferred placement relative to the anchor. `Top` by default.
    pub fn placement(&self) -> Placement {
        Placement::from_token(&self.element.get_string("placement", "")).unwrap_or_default()
    }

    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.element.set_string("placement", placement.token());
        self
    }

    pub fn strategy(&self) -> Strategy {
        Strategy::from_token(&self.element.get_string("strategy", "")).unwrap_or_default()
    }

    pub fn set_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.element.set_string("strategy", strategy.token());
        self
    }

    /// Offset along the placement axis, in pixels.
    pub fn distance(&self) -> i64 {
        self.element.get_int("distance", 0)
    }

    pub fn set_distance(&mut self, distance: i64) -> &mut Self {
        self.element.set_int("distance", distance);
        self
    }

    /// Offset across the placement axis, in pixels.
    pub fn skidding(&self) -> i64 {
        self.element.get_int("skidding", 0)
    }

    pub fn set_skidding(&mut self, skidding: i64) -> &mut Self {
        self.element.set_int("skidding", skidding);
        self
    }

    pub fn arrow(&self) -> bool {
        self.element.get_bool("arrow", false)
    }

    pub fn set_arrow(&mut self, arrow: bool) -> &mut Self {
        self.element.set_bool("arrow", arrow);
        self
    }

    pub fn arrow_placement(&self) -> ArrowPlacement {
        ArrowPlacement::from_token(&self.element.get_string("arrow-placement", ""))
            .unwrap_or_default()
    }

    pub fn set_arrow_placement(&mut self, placement: ArrowPlacement) -> &mut Self {
        self.element.set_string("arrow-placement", placement.token());
        self
    }

    pub fn flip(&self) -> bool {
        self.element.get_bool("flip", false)
    }

    pub fn set_flip(&mut self, flip: bool) -> &mut Self {
        self.element.set_bool("flip", flip);
        self
    }

    pub fn shift(&self) -> bool {
        self.element.get_bool("shift", false)
    }

    pub fn set_shift(&mut self, shift: bool) -> &mut Self {
        self.element.set_bool("shift", shift);
        self
    }

    /// Axes the popup may shrink on to stay in the viewport.
    ///
    /// Reads the enum default when unset or normalized to the empty token.
    pub fn auto_size(&self) -> AutoSize {
        AutoSize::from_token(&self.element.get_string("auto-size", "")).unwrap_or_default()
    }

    /// `None` normalizes to the empty token, disabling auto-sizing.
    pub fn set_auto_size(&mut self, auto_size: Option<AutoSize>) -> &mut Self {
        self.element
            .set_string("auto-size", auto_size.map_or("", |v| v.token()));
        self
    }

    /// Anchor dimensions the popup mirrors.
    pub fn sync(&self) -> Sync {
        Sync::from_token(&self.element.get_string("sync", "")).unwrap_or_default()
    }

    /// `None` normalizes to the empty token, disabling dimension syncing.
    pub fn set_sync(&mut self, sync: Option<Sync>) -> &mut Self {
        self.element.set_string("sync", sync.map_or("", |v| v.token()));
        self
    }

    /// Padding kept between the popup and the viewport edge when auto-sizing.
    pub fn auto_size_padding(&self) -> i64 {
        self.element.get_int("auto-size-padding", 0)
    }

    pub fn set_auto_size_padding(&mut self, padding: i64) -> &mut Self {
        self.element.set_int("auto-size-padding", padding);
        self
    }

    slot_method!(
        /// Append children to the anchor slot.
        "anchor",
        add_to_anchor
    );
    slot_method!("", add);

    plain_event!(
        /// Fired whenever the popup is repositioned.
        "coral-reposition",
        same_node: false,
        add_reposition_listener / on_reposition
    );
}

// =============================================================================
// Tooltip
// =============================================================================

component!(
    /// `<coral-tooltip>` - contextual text anchored to its default-slot child.
    Tooltip,
    "coral-tooltip"
);

impl Tooltip {
    /// Create a tooltip with its content pre-populated.
    pub fn with_content(content: impl Into<String>) -> Self {
        let tooltip = Self::new();
        tooltip.element.set_string("content", content.into());
        tooltip
    }

    pub fn content(&self) -> String {
        self.element.get_string("content", "")
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.element.set_string("content", content.into());
        self
    }

    pub fn placement(&self) -> Placement {
        Placement::from_token(&self.element.get_string("placement", "")).unwrap_or_default()
    }

    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.element.set_string("placement", placement.token());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    pub fn distance(&self) -> i64 {
        self.element.get_int("distance", 8)
    }

    pub fn set_distance(&mut self, distance: i64) -> &mut Self {
        self.element.set_int("distance", distance);
        self
    }

    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    /// Space-separated activation triggers, `"hover focus"` by default.
    pub fn trigger(&self) -> String {
        self.element.get_string("trigger", "hover focus")
    }

    pub fn set_trigger(&mut self, trigger: impl Into<String>) -> &mut Self {
        self.element.set_string("trigger", trigger.into());
        self
    }

    pub fn hoist(&self) -> bool {
        self.element.get_bool("hoist", false)
    }

    pub fn set_hoist(&mut self, hoist: bool) -> &mut Self {
        self.element.set_bool("hoist", hoist);
        self
    }

    slot_method!("", add);

    lifecycle_events!();
}

// =============================================================================
// Dropdown
// =============================================================================

component!(
    /// `<coral-dropdown>` - a panel toggled by its trigger-slot child.
    ///
    /// Slots: `trigger` and the default panel slot.
    Dropdown,
    "coral-dropdown"
);

impl Dropdown {
    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    /// Preferred panel placement. `BottomStart` by default.
    pub fn placement(&self) -> Placement {
        Placement::from_token(
            &self
                .element
                .get_string("placement", Placement::BottomStart.token()),
        )
        .unwrap_or(Placement::BottomStart)
    }

    pub fn set_placement(&mut self, placement: Placement) -> &mut Self {
        self.element.set_string("placement", placement.token());
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    /// Keeps the panel open after an item selection.
    pub fn stay_open_on_select(&self) -> bool {
        self.element.get_bool("stay-open-on-select", false)
    }

    pub fn set_stay_open_on_select(&mut self, stay_open: bool) -> &mut Self {
        self.element.set_bool("stay-open-on-select", stay_open);
        self
    }

    pub fn distance(&self) -> i64 {
        self.element.get_int("distance", 0)
    }

    pub fn set_distance(&mut self, distance: i64) -> &mut Self {
        self.element.set_int("distance", distance);
        self
    }

    pub fn skidding(&self) -> i64 {
        self.element.get_int("skidding", 0)
    }

    pub fn set_skidding(&mut self, skidding: i64) -> &mut Self {
        self.element.set_int("skidding", skidding);
        self
    }

    pub fn hoist(&self) -> bool {
        self.element.get_bool("hoist", false)
    }

    pub fn set_hoist(&mut self, hoist: bool) -> &mut Self {
        self.element.set_bool("hoist", hoist);
        self
    }

    pub fn sync(&self) -> Sync {
        Sync::from_token(&self.element.get_string("sync", "")).unwrap_or_default()
    }

    pub fn set_sync(&mut self, sync: Option<Sync>) -> &mut Self {
        self.element.set_string("sync", sync.map_or("", |v| v.token()));
        self
    }

    slot_method!(
        /// Append children to the trigger slot.
        "trigger",
        add_to_trigger
    );
    slot_method!("", add);

    lifecycle_events!();
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
    fn test_popup_auto_size_tokens() {
        let mut popup = Popup::new();
        popup.set_auto_size(Some(AutoSize::Both));
        assert_eq!(popup.element().get_string("auto-size", ""), "both");
        assert_eq!(popup.auto_size(), AutoSize::Both);

        popup.set_auto_size(None);
        assert_eq!(popup.element().get_string("auto-size", ""), "");
        // Unset reads back as the enum default.
        assert_eq!(popup.auto_size(), AutoSize::Horizontal);
    }

    #[test]
    fn test_popup_placement_token_exact() {
        let mut popup = Popup::new();
        popup.set_placement(Placement::TopStart);
        assert_eq!(popup.element().get_string("placement", ""), "top-start");
    }

    #[test]
    fn test_dialog_show_ignores_bubbled_events() {
        let dialog = Dialog::with_label("Confirm");
        let shows = Rc::new(RefCell::new(0));
        let shows_in = Rc::clone(&shows);
        dialog.add_show_listener(move || *shows_in.borrow_mut() += 1);

        // A nested tooltip fires the same event name; it must not deliver.
        let nested = Tooltip::with_content("hint");
        dialog
            .element()
            .dispatch(&DomEvent::new("coral-show", nested.node_id()));
        assert_eq!(*shows.borrow(), 0);

        dialog
            .element()
            .dispatch(&DomEvent::on(dialog.element(), "coral-show"));
        assert_eq!(*shows.borrow(), 1);
    }

    #[test]
    fn test_dialog_request_close_source() {
        let dialog = Dialog::new();
        let source = Rc::new(RefCell::new(String::new()));
        let source_in = Rc::clone(&source);
        dialog.add_request_close_listener(move |event| {
            *source_in.borrow_mut() = event.source();
        });

        let event = DomEvent::on(dialog.element(), "coral-request-close")
            .with_payload(json!({ "detail": { "source": "keyboard" } }));
        dialog.element().dispatch(&event);
        assert_eq!(*source.borrow(), "keyboard");
    }

    #[test]
    fn test_drawer_placement_default_is_end() {
        let drawer = Drawer::new();
        assert_eq!(drawer.placement(), TabPlacement::End);
    }

    #[test]
    fn test_dropdown_defaults() {
        let dropdown = Dropdown::new();
        assert_eq!(dropdown.placement(), Placement::BottomStart);
        assert!(!dropdown.open());
        assert!(!dropdown.stay_open_on_select());
    }
}
