//! End-to-end catalog tests: component construction, fluent configuration,
//! slot composition and event delivery through the public API.

use coral_flow::components::{
    Alert, Badge, Button, Card, Dialog, Icon, Input, Menu, MenuItem, Popup, ProgressBar, Rating,
    Select, SelectOption, SplitPanel, Tab, TabGroup, TabPanel, Tooltip, Tree, TreeItem,
};
use coral_flow::element::BackedComponent;
use coral_flow::event::DomEvent;
use coral_flow::types::{AutoSize, Placement, Size, Variant};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn every_component_starts_with_no_properties() {
    assert_eq!(Button::new().element().properties_json(), json!({}));
    assert_eq!(Dialog::new().element().properties_json(), json!({}));
    assert_eq!(Rating::new().element().properties_json(), json!({}));
}

#[test]
fn defaults_are_supplied_without_being_stored() {
    let rating = Rating::new();
    assert_eq!(rating.value(), 0.0);
    assert_eq!(rating.max(), 5);
    assert!(!rating.readonly());
    assert!(!rating.disabled());
    // Reading a default must not materialize the property.
    assert!(!rating.element().has_property("max"));
}

#[test]
fn progress_bar_value_survives_exactly() {
    let bar = ProgressBar::with_value(75.0);
    assert_eq!(bar.value(), 75.0);
}

#[test]
fn fluent_configuration_chains() {
    let mut button = Button::with_label("Submit");
    button
        .set_variant(Variant::Primary)
        .set_size(Size::Large)
        .set_pill(true)
        .set_name("submit")
        .set_value("go");

    assert_eq!(button.label(), "Submit");
    assert_eq!(button.variant(), Variant::Primary);
    assert_eq!(button.element().get_string("size", ""), "large");
    assert_eq!(
        button.element().properties_json(),
        json!({
            "label": "Submit",
            "name": "submit",
            "pill": true,
            "size": "large",
            "value": "go",
            "variant": "primary",
        })
    );
}

#[test]
fn popup_auto_size_normalizes_none_to_empty() {
    let mut popup = Popup::new();
    popup.set_auto_size(Some(AutoSize::Both));
    assert_eq!(popup.element().get_string("auto-size", ""), "both");

    popup.set_auto_size(None);
    assert_eq!(popup.element().get_string("auto-size", ""), "");
}

#[test]
fn placement_tokens_are_hyphenated() {
    let mut tooltip = Tooltip::with_content("hint");
    tooltip.set_placement(Placement::BottomEnd);
    assert_eq!(tooltip.element().get_string("placement", ""), "bottom-end");
    assert_eq!(tooltip.placement(), Placement::BottomEnd);
}

#[test]
fn empty_slot_call_is_a_no_op() {
    let mut card = Card::new();
    card.add_to_header(&[]);
    assert_eq!(card.element().child_count(), 0);
}

#[test]
fn slots_preserve_attachment_order() {
    let first = MenuItem::with_label("Cut");
    let second = MenuItem::with_label("Copy");
    let third = MenuItem::with_label("Paste");
    let mut menu = Menu::new();
    menu.add(&[&first, &second]).add(&[&third]);

    let children = menu.element().slot_children("");
    let ids: Vec<u64> = children.iter().map(|child| child.node_id()).collect();
    assert_eq!(ids, vec![first.node_id(), second.node_id(), third.node_id()]);
}

#[test]
fn reattaching_moves_a_child_between_slots() {
    let icon = Icon::with_name("gear");
    let mut card = Card::new();
    card.add_to_header(&[&icon]);
    card.add_to_footer(&[&icon]);

    assert_eq!(card.element().slot_children("header").len(), 0);
    assert_eq!(card.element().slot_children("footer").len(), 1);
    assert_eq!(card.element().child_count(), 1);
}

#[test]
fn reattaching_moves_a_child_between_parents() {
    let badge = Badge::with_label("New");
    let mut first = Card::new();
    let mut second = Card::new();
    first.add(&[&badge]);
    second.add(&[&badge]);

    assert_eq!(first.element().child_count(), 0);
    assert_eq!(second.element().child_count(), 1);
}

#[test]
fn listeners_fire_in_registration_order_and_remove_exactly_once() {
    let input = Input::with_value("x");
    let log: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));

    let log_a = Rc::clone(&log);
    let first = input.add_change_listener(move || log_a.borrow_mut().push("a"));
    let log_b = Rc::clone(&log);
    input.add_change_listener(move || log_b.borrow_mut().push("b"));
    assert_eq!(input.element().listener_count("coral-change"), 2);

    input
        .element()
        .dispatch(&DomEvent::on(input.element(), "coral-change"));
    first.remove();
    input
        .element()
        .dispatch(&DomEvent::on(input.element(), "coral-change"));

    assert_eq!(*log.borrow(), vec!["a", "b", "b"]);
    assert_eq!(input.element().listener_count("coral-change"), 1);
}

#[test]
fn overlay_events_only_deliver_for_their_own_node() {
    let dialog = Dialog::with_label("Settings");
    let alert = Alert::new();
    let hides = Rc::new(RefCell::new(0));
    let hides_in = Rc::clone(&hides);
    dialog.add_hide_listener(move || *hides_in.borrow_mut() += 1);

    // Same event name from a different node: filtered out.
    dialog
        .element()
        .dispatch(&DomEvent::new("coral-hide", alert.node_id()));
    // From the dialog itself: delivered.
    dialog
        .element()
        .dispatch(&DomEvent::on(dialog.element(), "coral-hide"));
    assert_eq!(*hides.borrow(), 1);
}

#[test]
fn typed_payloads_extract_lazily_with_defaults() {
    let tree = Tree::new();
    let selections = Rc::new(RefCell::new(Vec::new()));
    let selections_in = Rc::clone(&selections);
    tree.add_selection_change_listener(move |event| {
        selections_in.borrow_mut().push(event.selection());
    });

    // Payload present.
    tree.element().dispatch(
        &DomEvent::on(tree.element(), "coral-selection-change")
            .with_payload(json!({ "detail": { "selection": ["docs"] } })),
    );
    // Payload absent: extraction falls back to empty.
    tree.element()
        .dispatch(&DomEvent::on(tree.element(), "coral-selection-change"));

    assert_eq!(
        *selections.borrow(),
        vec![vec!["docs".to_string()], Vec::new()]
    );
}

#[test]
fn split_panel_position_is_not_clamped() {
    let panel = SplitPanel::with_position(140.0);
    assert_eq!(panel.position(), 140.0);
}

#[test]
fn tab_group_composes_nav_and_panels() {
    let general = Tab::with_panel("general");
    let general_panel = TabPanel::with_name("general");
    let mut group = TabGroup::new();
    group.add_to_nav(&[&general]).add(&[&general_panel]);

    assert_eq!(group.element().slot_children("nav").len(), 1);
    assert_eq!(group.element().slot_children("").len(), 1);
    // Named-slot children carry the slot property; default-slot ones do not.
    assert!(general.element().has_property("slot"));
    assert!(!general_panel.element().has_property("slot"));
}

#[test]
fn select_round_trips_options_and_value() {
    let s = SelectOption::with_value_and_label("s", "Small");
    let m = SelectOption::with_value_and_label("m", "Medium");
    let mut select = Select::with_label("Size");
    select.add(&[&s, &m]).set_value("m").set_clearable(true);

    assert_eq!(select.value(), "m");
    assert_eq!(select.element().child_count(), 2);
    assert!(select.clearable());
}

#[test]
fn deep_trees_compose() {
    let leaf = TreeItem::with_label("mod.rs");
    let mut dir = TreeItem::with_label("components");
    dir.add(&[&leaf]);
    let mut src = TreeItem::with_label("src");
    src.add(&[&dir]);
    let mut tree = Tree::new();
    tree.add(&[&src]);

    assert_eq!(tree.element().child_count(), 1);
    assert_eq!(leaf.element().parent().unwrap().node_id(), dir.node_id());
    assert_eq!(src.element().parent().unwrap().node_id(), tree.node_id());
}

#[test]
fn registrations_survive_handler_side_effects() {
    // A handler dispatching follow-up reads on the same element must not
    // deadlock listener bookkeeping.
    let button = Button::with_label("Go");
    let element = button.element().clone();
    let observed = Rc::new(RefCell::new(String::new()));
    let observed_in = Rc::clone(&observed);
    button.add_click_listener(move || {
        *observed_in.borrow_mut() = element.get_string("label", "");
    });

    button
        .element()
        .dispatch(&DomEvent::on(button.element(), "click"));
    assert_eq!(*observed.borrow(), "Go");
}
