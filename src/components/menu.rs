//! Menus - item lists, checkable items and section labels.

use crate::event::{DomEvent, detail_string};

use super::{component, payload_event, slot_method};

// =============================================================================
// Menu
// =============================================================================

/// Payload of `coral-select`: which item was chosen.
#[derive(Debug, Clone)]
pub struct SelectEvent {
    raw: DomEvent,
}

impl SelectEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// The `value` of the selected item, empty when it carries none.
    pub fn value(&self) -> String {
        detail_string(&self.raw, "value")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-menu>` - a list of selectable items.
    Menu,
    "coral-menu"
);

impl Menu {
    slot_method!(
        /// Append items, labels and dividers to the menu.
        "",
        add
    );

    payload_event!(
        /// Fired when an item is selected.
        "coral-select" => SelectEvent,
        same_node: false,
        add_select_listener / on_select
    );
}

// =============================================================================
// MenuItem
// =============================================================================

component!(
    /// `<coral-menu-item>` - a single menu entry.
    MenuItem,
    "coral-menu-item"
);

impl MenuItem {
    /// Create an item with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let item = Self::new();
        item.element.set_string("label", label.into());
        item
    }

    /// Create an item with value and label pre-populated.
    pub fn with_value_and_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        let item = Self::with_label(label);
        item.element.set_string("value", value.into());
        item
    }

    /// Item type: `"normal"` (default) or `"checkbox"`.
    pub fn item_type(&self) -> String {
        self.element.get_string("type", "normal")
    }

    pub fn set_item_type(&mut self, item_type: impl Into<String>) -> &mut Self {
        self.element.set_string("type", item_type.into());
        self
    }

    /// Only meaningful for checkbox-type items.
    pub fn checked(&self) -> bool {
        self.element.get_bool("checked", false)
    }

    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        self.element.set_bool("checked", checked);
        self
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn loading(&self) -> bool {
        self.element.get_bool("loading", false)
    }

    pub fn set_loading(&mut self, loading: bool) -> &mut Self {
        self.element.set_bool("loading", loading);
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

    slot_method!("prefix", add_to_prefix);
    slot_method!("suffix", add_to_suffix);
    slot_method!(
        /// Append a nested menu, rendered as a submenu.
        "submenu",
        add_to_submenu
    );
}

// =============================================================================
// MenuLabel
// =============================================================================

component!(
    /// `<coral-menu-label>` - a non-interactive section heading.
    MenuLabel,
    "coral-menu-label"
);

impl MenuLabel {
    pub fn with_label(label: impl Into<String>) -> Self {
        let menu_label = Self::new();
        menu_label.element.set_string("label", label.into());
        menu_label
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
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_menu_select_event_value() {
        let cut = MenuItem::with_value_and_label("cut", "Cut");
        let paste = MenuItem::with_value_and_label("paste", "Paste");
        let mut menu = Menu::new();
        menu.add(&[&cut, &paste]);

        let selected = Rc::new(RefCell::new(String::new()));
        let selected_in = Rc::clone(&selected);
        menu.add_select_listener(move |event| {
            *selected_in.borrow_mut() = event.value();
        });

        let event = DomEvent::on(menu.element(), "coral-select")
            .with_payload(json!({ "detail": { "value": "paste" } }));
        menu.element().dispatch(&event);
        assert_eq!(*selected.borrow(), "paste");
    }

    #[test]
    fn test_menu_item_submenu_slot() {
        let nested = Menu::new();
        let mut item = MenuItem::with_label("More");
        item.add_to_submenu(&[&nested]);
        assert_eq!(item.element().slot_children("submenu").len(), 1);
    }
}
