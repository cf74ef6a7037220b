//! Carousel - a scrollable slide container.

use crate::event::{DomEvent, detail_i64};
use crate::types::Orientation;

use super::{component, payload_event, slot_method};

/// Payload of `coral-slide-change`: the newly active slide.
#[derive(Debug, Clone)]
pub struct SlideChangeEvent {
    raw: DomEvent,
}

impl SlideChangeEvent {
    pub(crate) fn from_raw(raw: &DomEvent) -> Self {
        Self { raw: raw.clone() }
    }

    /// Zero-based index of the active slide, `0` when absent.
    pub fn index(&self) -> i64 {
        detail_i64(&self.raw, "index")
    }

    pub fn raw(&self) -> &DomEvent {
        &self.raw
    }
}

component!(
    /// `<coral-carousel>` - scrolls [`CarouselItem`]s one page at a time.
    Carousel,
    "coral-carousel"
);

impl Carousel {
    /// Wraps from the last slide back to the first.
    ///
    /// Backed by the `loop` property; the accessors avoid the keyword.
    pub fn looping(&self) -> bool {
        self.element.get_bool("loop", false)
    }

    pub fn set_looping(&mut self, looping: bool) -> &mut Self {
        self.element.set_bool("loop", looping);
        self
    }

    pub fn navigation(&self) -> bool {
        self.element.get_bool("navigation", false)
    }

    pub fn set_navigation(&mut self, navigation: bool) -> &mut Self {
        self.element.set_bool("navigation", navigation);
        self
    }

    pub fn pagination(&self) -> bool {
        self.element.get_bool("pagination", false)
    }

    pub fn set_pagination(&mut self, pagination: bool) -> &mut Self {
        self.element.set_bool("pagination", pagination);
        self
    }

    pub fn autoplay(&self) -> bool {
        self.element.get_bool("autoplay", false)
    }

    pub fn set_autoplay(&mut self, autoplay: bool) -> &mut Self {
        self.element.set_bool("autoplay", autoplay);
        self
    }

    /// Milliseconds between autoplay advances.
    pub fn autoplay_interval(&self) -> i64 {
        self.element.get_int("autoplay-interval", 3000)
    }

    pub fn set_autoplay_interval(&mut self, interval: i64) -> &mut Self {
        self.element.set_int("autoplay-interval", interval);
        self
    }

    pub fn slides_per_page(&self) -> i64 {
        self.element.get_int("slides-per-page", 1)
    }

    pub fn set_slides_per_page(&mut self, slides: i64) -> &mut Self {
        self.element.set_int("slides-per-page", slides);
        self
    }

    pub fn slides_per_move(&self) -> i64 {
        self.element.get_int("slides-per-move", 1)
    }

    pub fn set_slides_per_move(&mut self, slides: i64) -> &mut Self {
        self.element.set_int("slides-per-move", slides);
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_token(&self.element.get_string("orientation", "")).unwrap_or_default()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.element.set_string("orientation", orientation.token());
        self
    }

    pub fn mouse_dragging(&self) -> bool {
        self.element.get_bool("mouse-dragging", false)
    }

    pub fn set_mouse_dragging(&mut self, dragging: bool) -> &mut Self {
        self.element.set_bool("mouse-dragging", dragging);
        self
    }

    slot_method!(
        /// Append slides.
        "",
        add
    );

    payload_event!(
        /// Fired when the active slide changes.
        "coral-slide-change" => SlideChangeEvent,
        same_node: false,
        add_slide_change_listener / on_slide_change
    );
}

component!(
    /// `<coral-carousel-item>` - a single slide.
    CarouselItem,
    "coral-carousel-item"
);

impl CarouselItem {
    slot_method!("", add);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_carousel_defaults() {
        let carousel = Carousel::new();
        assert!(!carousel.looping());
        assert_eq!(carousel.autoplay_interval(), 3000);
        assert_eq!(carousel.slides_per_page(), 1);
        assert_eq!(carousel.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn test_slide_change_index() {
        let carousel = Carousel::new();
        let index = Rc::new(RefCell::new(-1_i64));
        let index_in = Rc::clone(&index);
        carousel.add_slide_change_listener(move |event| {
            *index_in.borrow_mut() = event.index();
        });

        let event = DomEvent::on(carousel.element(), "coral-slide-change")
            .with_payload(json!({ "detail": { "index": 2 } }));
        carousel.element().dispatch(&event);
        assert_eq!(*index.borrow(), 2);
    }
}
