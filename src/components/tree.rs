//! Trees - hierarchical, selectable item lists.

use crate::event::{DomEvent, detail_string_list};

use super::{component, payload_event, plain_event, slot_method};

/// Payload of `coral-selection-change`: the values of all selected items.
#[derive(Debug, Clone)]
pub struct SelectionChangeEvent {
    raw: DomEvent,
}

impl SelectionChangeEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// Selected item values, in selection order. Empty when the payload
    /// carries none.
    pub fn selection(&self) -> Vec<String> {
        detail_string_list(&self.raw, "selection")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

// =============================================================================
// Tree
// =============================================================================

component!(
    /// `<coral-tree>` - the root of a hierarchy of [`TreeItem`]s.
    Tree,
    "coral-tree"
);

impl Tree {
    /// Selection mode: `"single"` (default), `"multiple"` or `"leaf"`.
    pub fn selection(&self) -> String {
        self.element.get_string("selection", "single")
    }

    pub fn set_selection(&mut self, selection: impl Into<String>) -> &mut Self {
        self.element.set_string("selection", selection.into());
        self
    }

    slot_method!(
        /// Append top-level items.
        "",
        add
    );

    payload_event!(
        /// Fired whenever the set of selected items changes.
        "coral-selection-change" => SelectionChangeEvent,
        same_node: false,
        add_selection_change_listener / on_selection_change
    );
}

// =============================================================================
// TreeItem
// =============================================================================

component!(
    /// `<coral-tree-item>` - one node in a [`Tree`], possibly nested.
    TreeItem,
    "coral-tree-item"
);

impl TreeItem {
    /// Create an item with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let item = Self::new();
        item.element.set_string("label", label.into());
        item
    }

    pub fn expanded(&self) -> bool {
        self.element.get_bool("expanded", false)
    }

    pub fn set_expanded(&mut self, expanded: bool) -> &mut Self {
        self.element.set_bool("expanded", expanded);
        self
    }

    pub fn selected(&self) -> bool {
        self.element.get_bool("selected", false)
    }

    pub fn set_selected(&mut self, selected: bool) -> &mut Self {
        self.element.set_bool("selected", selected);
        self
    }

    pub fn disabled(&self) -> bool {
        self.element.get_bool("disabled", false)
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.element.set_bool("disabled", disabled);
        self
    }

    /// Marks children as loaded on demand; expansion fires `coral-lazy-load`.
    pub fn lazy(&self) -> bool {
        self.element.get_bool("lazy", false)
    }

    pub fn set_lazy(&mut self, lazy: bool) -> &mut Self {
        self.element.set_bool("lazy", lazy);
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    slot_method!(
        /// Append child items, nested beneath this one.
        "",
        add
    );

    plain_event!(
        "coral-expand",
        same_node: true,
        add_expand_listener / on_expand
    );
    plain_event!(
        "coral-after-expand",
        same_node: true,
        add_after_expand_listener / on_after_expand
    );
    plain_event!(
        "coral-collapse",
        same_node: true,
        add_collapse_listener / on_collapse
    );
    plain_event!(
        "coral-after-collapse",
        same_node: true,
        add_after_collapse_listener / on_after_collapse
    );
    plain_event!(
        /// Fired when a lazy item is expanded for the first time.
        "coral-lazy-load",
        same_node: true,
        add_lazy_load_listener / on_lazy_load
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_tree_nesting() {
        let leaf = TreeItem::with_label("leaf.rs");
        let mut dir = TreeItem::with_label("src");
        dir.add(&[&leaf]);
        let mut tree = Tree::new();
        tree.add(&[&dir]);

        assert_eq!(tree.element().child_count(), 1);
        assert_eq!(dir.element().child_count(), 1);
        assert_eq!(dir.element().slot_children("")[0].node_id(), leaf.node_id());
    }

    #[test]
    fn test_selection_change_extracts_list() {
        let tree = Tree::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = Rc::clone(&seen);
        tree.add_selection_change_listener(move |event| {
            *seen_in.borrow_mut() = event.selection();
        });

        let event = DomEvent::on(tree.element(), "coral-selection-change")
            .with_payload(json!({ "detail": { "selection": ["a", "c"] } }));
        tree.element().dispatch(&event);
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_expand_is_same_node_filtered() {
        let parent = TreeItem::with_label("parent");
        let child = TreeItem::with_label("child");
        let expands = Rc::new(RefCell::new(0));
        let expands_in = Rc::clone(&expands);
        parent.add_expand_listener(move || *expands_in.borrow_mut() += 1);

        parent
            .element()
            .dispatch(&DomEvent::new("coral-expand", child.node_id()));
        assert_eq!(*expands.borrow(), 0);

        parent
            .element()
            .dispatch(&DomEvent::on(parent.element(), "coral-expand"));
        assert_eq!(*expands.borrow(), 1);
    }
}
