//! Media - icons, avatars, animated images, comparers and QR codes.

use crate::types::AvatarShape;

use super::{component, plain_event, slot_method};

// =============================================================================
// Icon
// =============================================================================

component!(
    /// `<coral-icon>` - a symbol from an icon library.
    Icon,
    "coral-icon"
);

impl Icon {
    /// Create an icon by library name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let icon = Self::new();
        icon.element.set_string("name", name.into());
        icon
    }

    pub fn name(&self) -> String {
        self.element.get_string("name", "")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    /// External SVG source; takes precedence over `name`.
    pub fn src(&self) -> String {
        self.element.get_string("src", "")
    }

    pub fn set_src(&mut self, src: impl Into<String>) -> &mut Self {
        self.element.set_string("src", src.into());
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    pub fn library(&self) -> String {
        self.element.get_string("library", "default")
    }

    pub fn set_library(&mut self, library: impl Into<String>) -> &mut Self {
        self.element.set_string("library", library.into());
        self
    }

    plain_event!(
        "coral-load",
        same_node: false,
        add_load_listener / on_load
    );
    plain_event!(
        "coral-error",
        same_node: false,
        add_error_listener / on_error
    );
}

// =============================================================================
// Avatar
// =============================================================================

component!(
    /// `<coral-avatar>` - a user or entity image with fallbacks.
    Avatar,
    "coral-avatar"
);

impl Avatar {
    /// Create an avatar with its image source pre-populated.
    pub fn with_image(image: impl Into<String>) -> Self {
        let avatar = Self::new();
        avatar.element.set_string("image", image.into());
        avatar
    }

    pub fn image(&self) -> String {
        self.element.get_string("image", "")
    }

    pub fn set_image(&mut self, image: impl Into<String>) -> &mut Self {
        self.element.set_string("image", image.into());
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Shown when no image is set or it fails to load.
    pub fn initials(&self) -> String {
        self.element.get_string("initials", "")
    }

    pub fn set_initials(&mut self, initials: impl Into<String>) -> &mut Self {
        self.element.set_string("initials", initials.into());
        self
    }

    /// Image loading hint: `"eager"` (default) or `"lazy"`.
    pub fn loading(&self) -> String {
        self.element.get_string("loading", "eager")
    }

    pub fn set_loading(&mut self, loading: impl Into<String>) -> &mut Self {
        self.element.set_string("loading", loading.into());
        self
    }

    pub fn shape(&self) -> AvatarShape {
        AvatarShape::from_token(&self.element.get_string("shape", "")).unwrap_or_default()
    }

    pub fn set_shape(&mut self, shape: AvatarShape) -> &mut Self {
        self.element.set_string("shape", shape.token());
        self
    }

    plain_event!(
        /// Fired when the image fails to load.
        "coral-error",
        same_node: false,
        add_error_listener / on_error
    );
}

// =============================================================================
// AnimatedImage
// =============================================================================

component!(
    /// `<coral-animated-image>` - a GIF/WEBP with play/pause control.
    AnimatedImage,
    "coral-animated-image"
);

impl AnimatedImage {
    pub fn with_src(src: impl Into<String>) -> Self {
        let image = Self::new();
        image.element.set_string("src", src.into());
        image
    }

    pub fn src(&self) -> String {
        self.element.get_string("src", "")
    }

    pub fn set_src(&mut self, src: impl Into<String>) -> &mut Self {
        self.element.set_string("src", src.into());
        self
    }

    pub fn alt(&self) -> String {
        self.element.get_string("alt", "")
    }

    pub fn set_alt(&mut self, alt: impl Into<String>) -> &mut Self {
        self.element.set_string("alt", alt.into());
        self
    }

    pub fn play(&self) -> bool {
        self.element.get_bool("play", false)
    }

    pub fn set_play(&mut self, play: bool) -> &mut Self {
        self.element.set_bool("play", play);
        self
    }

    plain_event!(
        "coral-load",
        same_node: false,
        add_load_listener / on_load
    );
    plain_event!(
        "coral-error",
        same_node: false,
        add_error_listener / on_error
    );
}

// =============================================================================
// ImageComparer
// =============================================================================

component!(
    /// `<coral-image-comparer>` - before/after images behind a draggable
    /// divider.
    ImageComparer,
    "coral-image-comparer"
);

impl ImageComparer {
    /// Divider position as a percentage, 0 to 100.
    pub fn position(&self) -> f64 {
        self.element.get_double("position", 50.0)
    }

    pub fn set_position(&mut self, position: f64) -> &mut Self {
        self.element.set_double("position", position);
        self
    }

    slot_method!("before", add_to_before);
    slot_method!("after", add_to_after);
    slot_method!("handle", add_to_handle);

    plain_event!(
        /// Fired as the divider is dragged.
        "coral-change",
        same_node: false,
        add_change_listener / on_change
    );
}

// =============================================================================
// QrCode
// =============================================================================

component!(
    /// `<coral-qr-code>` - renders its value as a QR code.
    QrCode,
    "coral-qr-code"
);

impl QrCode {
    /// Create a QR code with its value pre-populated.
    pub fn with_value(value: impl Into<String>) -> Self {
        let qr = Self::new();
        qr.element.set_string("value", value.into());
        qr
    }

    pub fn value(&self) -> String {
        self.element.get_string("value", "")
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.element.set_string("value", value.into());
        self
    }

    pub fn label(&self) -> String {
        self.element.get_string("label", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.element.set_string("label", label.into());
        self
    }

    /// Rendered size in pixels, 128 by default.
    pub fn size(&self) -> i64 {
        self.element.get_int("size", 128)
    }

    pub fn set_size(&mut self, size: i64) -> &mut Self {
        self.element.set_int("size", size);
        self
    }

    pub fn fill(&self) -> String {
        self.element.get_string("fill", "black")
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) -> &mut Self {
        self.element.set_string("fill", fill.into());
        self
    }

    pub fn background(&self) -> String {
        self.element.get_string("background", "white")
    }

    pub fn set_background(&mut self, background: impl Into<String>) -> &mut Self {
        self.element.set_string("background", background.into());
        self
    }

    pub fn radius(&self) -> f64 {
        self.element.get_double("radius", 0.0)
    }

    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.element.set_double("radius", radius);
        self
    }

    /// Error correction level: `"L"`, `"M"`, `"Q"` or `"H"` (default).
    pub fn error_correction(&self) -> String {
        self.element.get_string("error-correction", "H")
    }

    pub fn set_error_correction(&mut self, level: impl Into<String>) -> &mut Self {
        self.element.set_string("error-correction", level.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_icon_defaults() {
        let icon = Icon::with_name("gear");
        assert_eq!(icon.name(), "gear");
        assert_eq!(icon.library(), "default");
    }

    #[test]
    fn test_avatar_shape_default_is_circle() {
        let avatar = Avatar::new();
        assert_eq!(avatar.shape(), AvatarShape::Circle);
        assert_eq!(avatar.loading(), "eager");
    }

    #[test]
    fn test_image_comparer_slots() {
        let before = Icon::with_name("old");
        let after = Icon::with_name("new");
        let mut comparer = ImageComparer::new();
        comparer.add_to_before(&[&before]).add_to_after(&[&after]);

        assert_eq!(comparer.element().slot_children("before").len(), 1);
        assert_eq!(comparer.element().slot_children("after").len(), 1);
        assert_eq!(comparer.position(), 50.0);
    }

    #[test]
    fn test_qr_code_defaults() {
        let qr = QrCode::with_value("https://example.com");
        assert_eq!(qr.size(), 128);
        assert_eq!(qr.error_correction(), "H");
        assert_eq!(qr.fill(), "black");
    }
}
