//! Small display elements - badges, tags, skeletons, spinners.

use crate::types::{Size, SkeletonEffect, Variant};

use super::{component, plain_event, slot_method};

// =============================================================================
// Badge
// =============================================================================

component!(
    /// `<coral-badge>` - a small status indicator.
    Badge,
    "coral-badge"
);

impl Badge {
    /// Create a badge with its label pre-populated.
    pub fn with_label(label: impl Into<String>) -> Self {
        let badge = Self::new();
        badge.element.set_string("label", label.into());
        badge
    }

    pub fn variant(&self) -> Variant {
        Variant::from_token(&self.element.get_string("variant", "")).unwrap_or_default()
    }

    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.element.set_string("variant", variant.token());
        self
    }

    pub fn pill(&self) -> bool {
        self.element.get_bool("pill", false)
    }

    pub fn set_pill(&mut self, pill: bool) -> &mut Self {
        self.element.set_bool("pill", pill);
        self
    }

    /// Draws attention with a pulsing animation.
    pub fn pulse(&self) -> bool {
        self.element.get_bool("pulse", false)
    }

    pub fn set_pulse(&mut self, pulse: bool) -> &mut Self {
        self.element.set_bool("pulse", pulse);
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

// =============================================================================
// Tag
// =============================================================================

component!(
    /// `<coral-tag>` - a labeled chip, optionally removable.
    Tag,
    "coral-tag"
);

impl Tag {
    pub fn with_label(label: impl Into<String>) -> Self {
        let tag = Self::new();
        tag.element.set_string("label", label.into());
        tag
    }

    pub fn variant(&self) -> Variant {
        Variant::from_token(&self.element.get_string("variant", "")).unwrap_or_default()
    }

    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.element.set_string("variant", variant.token());
        self
    }

    pub fn size(&self) -> Size {
        Size::from_token(&self.element.get_string("size", "")).unwrap_or_default()
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.element.set_string("size", size.token());
        self
    }

    pub fn pill(&self) -> bool {
        self.element.get_bool("pill", false)
    }

    pub fn set_pill(&mut self, pill: bool) -> &mut Self {
        self.element.set_bool("pill", pill);
        self
    }

    /// Shows a remove button that fires `coral-remove`.
    pub fn removable(&self) -> bool {
        self.element.get_bool("removable", false)
    }

    pub fn set_removable(&mut self, removable: bool) -> &mut Self {
        self.element.set_bool("removable", removable);
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
        /// Fired when the remove button is activated.
        "coral-remove",
        same_node: false,
        add_remove_listener / on_remove
    );
}

// =============================================================================
// Skeleton
// =============================================================================

component!(
    /// `<coral-skeleton>` - a loading placeholder shape.
    Skeleton,
    "coral-skeleton"
);

impl Skeleton {
    pub fn effect(&self) -> SkeletonEffect {
        SkeletonEffect::from_token(&self.element.get_string("effect", "")).unwrap_or_default()
    }

    pub fn set_effect(&mut self, effect: SkeletonEffect) -> &mut Self {
        self.element.set_string("effect", effect.token());
        self
    }
}

// =============================================================================
// Spinner
// =============================================================================

component!(
    /// `<coral-spinner>` - an indeterminate loading indicator.
    Spinner,
    "coral-spinner"
);

// =============================================================================
// VisuallyHidden
// =============================================================================

component!(
    /// `<coral-visually-hidden>` - content for assistive tech only.
    VisuallyHidden,
    "coral-visually-hidden"
);

impl VisuallyHidden {
    slot_method!("", add);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_defaults() {
        let badge = Badge::with_label("New");
        assert_eq!(badge.variant(), Variant::Neutral);
        assert!(!badge.pulse());
    }

    #[test]
    fn test_tag_removable() {
        let mut tag = Tag::with_label("rust");
        tag.set_removable(true).set_variant(Variant::Primary);
        assert!(tag.removable());
        assert_eq!(tag.variant(), Variant::Primary);
    }

    #[test]
    fn test_skeleton_effect_default_is_none() {
        let skeleton = Skeleton::new();
        assert_eq!(skeleton.effect(), SkeletonEffect::None);
    }
}
