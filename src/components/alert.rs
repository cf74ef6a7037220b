//! Alerts - inline notifications with an optional auto-hide duration.

use crate::types::Variant;

use super::{component, plain_event, slot_method};

component!(
    /// `<coral-alert>` - a notification banner.
    ///
    /// A duration of `f64::INFINITY` (the default) keeps the alert open until
    /// it is dismissed.
    Alert,
    "coral-alert"
);

impl Alert {
    pub fn open(&self) -> bool {
        self.element.get_bool("open", false)
    }

    pub fn set_open(&mut self, open: bool) -> &mut Self {
        self.element.set_bool("open", open);
        self
    }

    /// Shows a close button when set.
    pub fn closable(&self) -> bool {
        self.element.get_bool("closable", false)
    }

    pub fn set_closable(&mut self, closable: bool) -> &mut Self {
        self.element.set_bool("closable", closable);
        self
    }

    pub fn variant(&self) -> Variant {
        Variant::from_token(&self.element.get_string("variant", "")).unwrap_or_default()
    }

    pub fn set_variant(&mut self, variant: Variant) -> &mut Self {
        self.element.set_string("variant", variant.token());
        self
    }

    /// Milliseconds before the alert auto-hides.
    pub fn duration(&self) -> f64 {
        self.element.get_double("duration", f64::INFINITY)
    }

    pub fn set_duration(&mut self, duration: f64) -> &mut Self {
        self.element.set_double("duration", duration);
        self
    }

    slot_method!(
        /// Append children to the icon slot.
        "icon",
        add_to_icon
    );
    slot_method!("", add);

    plain_event!(
        "coral-show",
        same_node: true,
        add_show_listener / on_show
    );
    plain_event!(
        "coral-after-show",
        same_node: true,
        add_after_show_listener / on_after_show
    );
    plain_event!(
        "coral-hide",
        same_node: true,
        add_hide_listener / on_hide
    );
    plain_event!(
        "coral-after-hide",
        same_node: true,
        add_after_hide_listener / on_after_hide
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::BackedComponent;

    #[test]
    fn test_alert_defaults() {
        let alert = Alert::new();
        assert!(!alert.open());
        assert!(!alert.closable());
        assert_eq!(alert.variant(), Variant::Neutral);
        assert!(alert.duration().is_infinite());
    }

    #[test]
    fn test_alert_chained_configuration() {
        let mut alert = Alert::new();
        alert
            .set_variant(Variant::Danger)
            .set_closable(true)
            .set_duration(4000.0)
            .set_open(true);
        assert_eq!(alert.element().get_string("variant", ""), "danger");
        assert_eq!(alert.duration(), 4000.0);
    }
}
