//! The component catalog.
//!
//! One thin server-side class per Coral custom element. Every component wraps
//! exactly one [`Element`](crate::element::Element) and follows the same
//! mechanical pattern:
//!
//! - `new()` creates a detached element with the fixed tag;
//! - convenience constructors pre-populate the most common properties;
//! - typed accessors read defaulted properties and fluent setters return
//!   `&mut Self` for chaining;
//! - `add_to_<slot>` helpers append children to named slots (an empty slice
//!   is a documented no-op);
//! - `add_<event>_listener` / `on_<event>` pairs register handlers and
//!   return a removable [`Registration`](crate::event::Registration).
//!
//! Components grouped by family, one file per family.

pub mod alert;
pub mod animation;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod carousel;
pub mod choice;
pub mod color_picker;
pub mod display;
pub mod format;
pub mod input;
pub mod layout;
pub mod media;
pub mod menu;
pub mod observer;
pub mod overlay;
pub mod progress;
pub mod range;
pub mod rating;
pub mod select;
pub mod tabs;
pub mod tree;

pub use alert::Alert;
pub use animation::Animation;
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use button::{Button, ButtonGroup, CopyButton, IconButton};
pub use card::Card;
pub use carousel::{Carousel, CarouselItem};
pub use choice::{Checkbox, Radio, RadioButton, RadioGroup, Switch};
pub use color_picker::ColorPicker;
pub use display::{Badge, Skeleton, Spinner, Tag, VisuallyHidden};
pub use format::{FormatBytes, FormatDate, FormatNumber, RelativeTime};
pub use input::{Input, Textarea};
pub use layout::{Details, Divider, SplitPanel};
pub use media::{AnimatedImage, Avatar, Icon, ImageComparer, QrCode};
pub use menu::{Menu, MenuItem, MenuLabel};
pub use observer::{Include, MutationObserver, ResizeObserver};
pub use overlay::{Dialog, Drawer, Dropdown, Popup, Tooltip};
pub use progress::{ProgressBar, ProgressRing};
pub use range::Range;
pub use rating::Rating;
pub use select::{Select, SelectOption};
pub use tabs::{Tab, TabGroup, TabPanel};
pub use tree::{Tree, TreeItem};

// =============================================================================
// Catalog Macros
// =============================================================================

/// Declare one catalog component: the struct, `new()`, `Default` and the
/// [`BackedComponent`](crate::element::BackedComponent) impl.
///
/// Everything past this — accessors, slots, events — is written per
/// component.
macro_rules! component {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            element: crate::element::Element,
        }

        impl $name {
            /// Create a detached component backed by a fresh element.
            pub fn new() -> Self {
                Self {
                    element: crate::element::Element::new($tag),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl crate::element::BackedComponent for $name {
            fn element(&self) -> &crate::element::Element {
                &self.element
            }
        }
    };
}
pub(crate) use component;

/// Generate an `add_<event>_listener` / `on_<event>` pair for an event that
/// carries no payload.
macro_rules! plain_event {
    ($(#[$meta:meta])* $event:literal, same_node: $same_node:literal, $add:ident / $alias:ident) => {
        $(#[$meta])*
        pub fn $add<F>(&self, listener: F) -> crate::event::Registration
        where
            F: Fn() + 'static,
        {
            self.element
                .add_listener($event, $same_node, move |_| listener())
        }

        /// Alias for the matching `add_*_listener` method.
        pub fn $alias<F>(&self, listener: F) -> crate::event::Registration
        where
            F: Fn() + 'static,
        {
            self.$add(listener)
        }
    };
}
pub(crate) use plain_event;

/// Generate an `add_<event>_listener` / `on_<event>` pair for an event with
/// a typed payload struct.
macro_rules! payload_event {
    ($(#[$meta:meta])* $event:literal => $event_ty:ty, same_node: $same_node:literal, $add:ident / $alias:ident) => {
        $(#[$meta])*
        pub fn $add<F>(&self, listener: F) -> crate::event::Registration
        where
            F: Fn(&$event_ty) + 'static,
        {
            self.element.add_listener($event, $same_node, move |raw| {
                listener(&<$event_ty>::from_raw(raw))
            })
        }

        /// Alias for the matching `add_*_listener` method.
        pub fn $alias<F>(&self, listener: F) -> crate::event::Registration
        where
            F: Fn(&$event_ty) + 'static,
        {
            self.$add(listener)
        }
    };
}
pub(crate) use payload_event;

/// Generate an `add_to_<slot>` helper (or `add` for the default slot).
macro_rules! slot_method {
    ($(#[$meta:meta])* $slot:literal, $method:ident) => {
        $(#[$meta])*
        pub fn $method(
            &mut self,
            children: &[&dyn crate::element::BackedComponent],
        ) -> &mut Self {
            for child in children {
                self.element.append_to_slot($slot, child.element());
            }
            self
        }
    };
}
pub(crate) use slot_method;
