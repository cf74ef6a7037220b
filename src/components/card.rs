//! `<coral-card>` - a content container with header, footer and image slots.

use super::{component, slot_method};

component!(
    /// `<coral-card>` - groups related content and actions.
    ///
    /// Slots: `header`, `footer`, `image` and the default body slot.
    ///
    /// # Example
    ///
    /// ```
    /// use coral_flow::components::{Badge, Card};
    /// use coral_flow::element::BackedComponent;
    ///
    /// let mut card = Card::new();
    /// let badge = Badge::with_label("New");
    /// card.add_to_header(&[&badge]);
    /// assert_eq!(card.element().slot_children("header").len(), 1);
    ///
    /// // Probing with no children is a no-op that still chains.
    /// card.add_to_footer(&[]);
    /// assert_eq!(card.element().child_count(), 1);
    /// ```
    Card,
    "coral-card"
);

impl Card {
    slot_method!(
        /// Append children to the card header.
        "header",
        add_to_header
    );
    slot_method!(
        /// Append children to the card footer.
        "footer",
        add_to_footer
    );
    slot_method!(
        /// Append children to the image area above the body.
        "image",
        add_to_image
    );
    slot_method!(
        /// Append children to the card body.
        "",
        add
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Badge, Button};
    use crate::element::BackedComponent;

    #[test]
    fn test_empty_add_to_header_is_noop() {
        let mut card = Card::new();
        card.add_to_header(&[]);
        assert_eq!(card.element().child_count(), 0);
    }

    #[test]
    fn test_slots_preserve_attachment_order() {
        let mut card = Card::new();
        let title = Badge::with_label("Title");
        let action = Button::with_label("Edit");
        let body = Badge::with_label("Body");

        card.add_to_header(&[&title, &action]).add(&[&body]);

        let header = card.element().slot_children("header");
        assert_eq!(header.len(), 2);
        assert_eq!(header[0].node_id(), title.node_id());
        assert_eq!(header[1].node_id(), action.node_id());
        assert_eq!(card.element().slot_children("").len(), 1);
    }
}
