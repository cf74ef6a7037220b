//! Animation - declarative keyframe animation of a slotted child.

use super::{component, plain_event, slot_method};

component!(
    /// `<coral-animation>` - animates its default-slot child with a named
    /// keyframe animation.
    Animation,
    "coral-animation"
);

impl Animation {
    /// Create an animation by keyframe name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let animation = Self::new();
        animation.element.set_string("name", name.into());
        animation
    }

    /// Keyframe animation name, `"none"` by default.
    pub fn name(&self) -> String {
        self.element.get_string("name", "none")
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.element.set_string("name", name.into());
        self
    }

    pub fn play(&self) -> bool {
        self.element.get_bool("play", false)
    }

    pub fn set_play(&mut self, play: bool) -> &mut Self {
        self.element.set_bool("play", play);
        self
    }

    /// Milliseconds before the animation starts.
    pub fn delay(&self) -> i64 {
        self.element.get_int("delay", 0)
    }

    pub fn set_delay(&mut self, delay: i64) -> &mut Self {
        self.element.set_int("delay", delay);
        self
    }

    /// Milliseconds one iteration takes.
    pub fn duration(&self) -> i64 {
        self.element.get_int("duration", 1000)
    }

    pub fn set_duration(&mut self, duration: i64) -> &mut Self {
        self.element.set_int("duration", duration);
        self
    }

    pub fn easing(&self) -> String {
        self.element.get_string("easing", "linear")
    }

    pub fn set_easing(&mut self, easing: impl Into<String>) -> &mut Self {
        self.element.set_string("easing", easing.into());
        self
    }

    pub fn direction(&self) -> String {
        self.element.get_string("direction", "normal")
    }

    pub fn set_direction(&mut self, direction: impl Into<String>) -> &mut Self {
        self.element.set_string("direction", direction.into());
        self
    }

    /// Iteration count; `f64::INFINITY` (the default) repeats forever.
    pub fn iterations(&self) -> f64 {
        self.element.get_double("iterations", f64::INFINITY)
    }

    pub fn set_iterations(&mut self, iterations: f64) -> &mut Self {
        self.element.set_double("iterations", iterations);
        self
    }

    pub fn iteration_start(&self) -> f64 {
        self.element.get_double("iteration-start", 0.0)
    }

    pub fn set_iteration_start(&mut self, start: f64) -> &mut Self {
        self.element.set_double("iteration-start", start);
        self
    }

    pub fn end_delay(&self) -> i64 {
        self.element.get_int("end-delay", 0)
    }

    pub fn set_end_delay(&mut self, end_delay: i64) -> &mut Self {
        self.element.set_int("end-delay", end_delay);
        self
    }

    pub fn fill(&self) -> String {
        self.element.get_string("fill", "auto")
    }

    pub fn set_fill(&mut self, fill: impl Into<String>) -> &mut Self {
        self.element.set_string("fill", fill.into());
        self
    }

    pub fn playback_rate(&self) -> f64 {
        self.element.get_double("playback-rate", 1.0)
    }

    pub fn set_playback_rate(&mut self, rate: f64) -> &mut Self {
        self.element.set_double("playback-rate", rate);
        self
    }

    slot_method!(
        /// Append the element to animate.
        "",
        add
    );

    plain_event!(
        "coral-start",
        same_node: true,
        add_start_listener / on_start
    );
    plain_event!(
        "coral-finish",
        same_node: true,
        add_finish_listener / on_finish
    );
    plain_event!(
        "coral-cancel",
        same_node: true,
        add_cancel_listener / on_cancel
    );
}
