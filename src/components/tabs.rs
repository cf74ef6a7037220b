//! Tabs - tab groups, individual tabs and their panels.

use crate::event::{DomEvent, detail_string};
use crate::types::TabPlacement;

use super::{component, payload_event, plain_event, slot_method};

// =============================================================================
// Events
// =============================================================================

/// Payload of `coral-tab-show`: the activated panel name.
#[derive(Debug, Clone)]
pub struct TabShowEvent {
    raw: DomEvent,
}

impl TabShowEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    pub fn name(&self) -> String {
        detail_string(&self.raw, "name")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

/// Payload of `coral-tab-hide`: the deactivated panel name.
#[derive(Debug, Clone)]
pub struct TabHideEvent {
    raw: DomEvent,
}

impl TabHideEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    pub fn name(&self) -> String {
        detail_string(&self.raw, "name")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

// =============================================================================
// TabGroup
// =============================================================================

component!(
    /// `<coral-tab-group>` - coordinates tabs and their panels.
    ///
    /// Tabs go into the `nav` slot, panels into the default slot.
    TabGroup,
    "coral-tab-group"
);

impl TabGroup {
    /// Tab strip position. `Top` by default.
    pub fn placement(&self) -> TabPlacement {
        TabPlacement::from_token(&self.element.get_string("placement", "")).unwrap_or_default()
    }

    pub fn set_placement(&mut self, placement: TabPlacement) -> &mut Self {
        self.element.set_string("placement", placement.token());
        self
    }

    /// Keyboard activation: `"auto"` (default) or `"manual"`.
    pub fn activation(&self) -> String {
        self.element.get_string("activation", "auto")
    }

    pub fn set_activation(&mut self, activation: impl Into<String>) -> &mut Self {
        self.element.set_string("activation", activation.into());
        self
    }

    pub fn no_scroll_controls(&self) -> bool {
        self.element.get_bool("no-scroll-controls", false)
    }

    pub fn set_no_scroll_controls(&mut self, no_controls: bool) -> &mut Self {
        self.element.set_bool("no-scroll-controls", no_controls);
        self
    }

    slot_method!(
        /// Append tabs to the strip.
        "nav",
        add_to_nav
    );
    slot_method!(
        /// Append panels.
        "",
        add
    );

    payload_event!(
        "coral-tab-show" => TabShowEvent,
        same_node: false,
        add_tab_show_listener / on_tab_show
    );
    payload_event!(
        "coral-tab-hide" => TabHideEvent,
        same_node: false,
        add_tab_hide_listener / on_tab_hide
    );
}

// =============================================================================
// Tab
// =============================================================================

component!(
    /// `<coral-tab>` - a single tab in the strip.
    Tab,
    "coral-tab"
);

impl Tab {
    /// Create a tab bound to the panel with the given name.
    pub fn with_panel(panel: impl Into<String>) -> Self {
        let tab = Self::new();
        tab.element.set_string("panel", panel.into());
        tab
    }

    /// Name of the panel this tab controls.
    pub fn panel(&self) -> String {
        self.element.get_string("panel", "")
    }

    pub fn set_panel(&mut self, panel: impl Into<String>) -> &mut Self {
        self.element.set_string("panel", panel.into());
        self
    }

    pub fn active(&self) -> bool {
        self.element.get_bool("active", false)
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.element.set_bool("active", active);
        self
    }

    pub fn closable(&self) -> bool {
        self.element.get_bool("closable", false)
    }

    pub fn set_closable(&mut self, closable: bool) -> &mut Self {
        self.element.set_bool("closable", closable);
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

    plain_event!(
        /// Fired when the tab's close button is activated.
        "coral-close",
        same_node: true,
        add_close_listener / on_close
    );
}

// =============================================================================
// TabPanel
// =============================================================================

component!(
    /// `<coral-tab-panel>` - the content shown for an active tab.
    TabPanel,
    "coral-tab-panel"
);

impl TabPanel {
    /// Create a panel with its name pre-populated.
    pub fn with_name(name: impl Into<String>) -> Self {
        let panel = Self::new();
        panel.element.set_string("name", name.into());
        panel
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    pub fn active(&self) -> bool {
        self.element.get_bool("active", false)
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.element.set_bool("active", active);
        self
    }

    slot_method!("", add);
}
