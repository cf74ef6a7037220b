//! # coral-flow
//!
//! Server-side bindings for the Coral web component kit.
//!
//! Every Coral element gets a typed Rust counterpart backed by a shared
//! [`Element`](element::Element) node: property accessors with kit defaults,
//! fluent setters, named-slot helpers and typed event registration.
//!
//! ## Architecture
//!
//! Components are thin wrappers over an element tree. Property writes land in
//! the element's property map, slot helpers re-parent child elements, and
//! listener registration hands back a removable [`Registration`](event::Registration):
//! ```text
//! Component → Element (properties, slots, listeners) → DomEvent dispatch
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shared enums with exact token round-trips (Placement, Size, ...)
//! - [`element`] - The element node: properties, slots, tree structure
//! - [`event`] - DomEvent, listener registration, payload extraction
//! - [`components`] - The component catalog, one module per family
//!
//! ## Example
//!
//! ```
//! use coral_flow::components::{Button, Card};
//! use coral_flow::types::Variant;
//!
//! let mut save = Button::with_label("Save");
//! save.set_variant(Variant::Primary);
//! let registration = save.add_click_listener(|| println!("saved"));
//!
//! let mut card = Card::new();
//! card.add(&[&save]);
//!
//! registration.remove();
//! ```

pub mod components;
pub mod element;
pub mod event;
pub mod types;

// Re-export commonly used items
pub use element::{BackedComponent, Element, PropertyValue, DEFAULT_SLOT};
pub use event::{DomEvent, Registration};
pub use types::*;
