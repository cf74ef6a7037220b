//! Formatters - locale-aware byte, date, number and relative-time output.

use crate::types::{ByteUnit, NumberStyle, UnitDisplay};

use super::component;

// =============================================================================
// FormatBytes
// =============================================================================

component!(
    /// `<coral-format-bytes>` - renders a byte count in a human unit.
    FormatBytes,
    "coral-format-bytes"
);

impl FormatBytes {
    pub fn with_value(value: f64) -> Self {
        let format = Self::new();
        format.element.set_double("value", value);
        format
    }

    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
        self
    }

    pub fn unit(&self) -> ByteUnit {
        ByteUnit::from_token(&self.element.get_string("unit", "")).unwrap_or_default()
    }

    pub fn set_unit(&mut self, unit: ByteUnit) -> &mut Self {
        self.element.set_string("unit", unit.token());
        self
    }

    pub fn display(&self) -> UnitDisplay {
        UnitDisplay::from_token(&self.element.get_string("display", "")).unwrap_or_default()
    }

    pub fn set_display(&mut self, display: UnitDisplay) -> &mut Self {
        self.element.set_string("display", display.token());
        self
    }
}

// =============================================================================
// FormatDate
// =============================================================================

component!(
    /// `<coral-format-date>` - renders an ISO date in locale form.
    ///
    /// The part accessors (`month`, `day`, ...) take `Intl.DateTimeFormat`
    /// option tokens such as `"numeric"`, `"2-digit"` or `"long"`.
    FormatDate,
    "coral-format-date"
);

impl FormatDate {
    /// Create a formatter with its ISO 8601 date pre-populated.
    pub fn with_date(date: impl Into<String>) -> Self {
        let format = Self::new();
        format.element.set_string("date", date.into());
        format
    }

    pub fn date(&self) -> String {
        self.element.get_string("date", "")
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.element.set_string("date", date.into());
        self
    }

    pub fn month(&self) -> String {
        self.element.get_string("month", "")
    }

    pub fn set_month(&mut self, month: impl Into<String>) -> &mut Self {
        self.element.set_string("month", month.into());
        self
    }

    pub fn day(&self) -> String {
        self.element.get_string("day", "")
    }

    pub fn set_day(&mut self, day: impl Into<String>) -> &mut Self {
        self.element.set_string("day", day.into());
        self
    }

    pub fn year(&self) -> String {
        self.element.get_string("year", "")
    }

    pub fn set_year(&mut self, year: impl Into<String>) -> &mut Self {
        self.element.set_string("year", year.into());
        self
    }

    pub fn hour(&self) -> String {
        self.element.get_string("hour", "")
    }

    pub fn set_hour(&mut self, hour: impl Into<String>) -> &mut Self {
        self.element.set_string("hour", hour.into());
        self
    }

    pub fn minute(&self) -> String {
        self.element.get_string("minute", "")
    }

    pub fn set_minute(&mut self, minute: impl Into<String>) -> &mut Self {
        self.element.set_string("minute", minute.into());
        self
    }

    pub fn time_zone(&self) -> String {
        self.element.get_string("time-zone", "")
    }

    pub fn set_time_zone(&mut self, time_zone: impl Into<String>) -> &mut Self {
        self.element.set_string("time-zone", time_zone.into());
        self
    }

    /// Hour cycle: `"auto"` (default), `"12"` or `"24"`.
    pub fn hour_format(&self) -> String {
        self.element.get_string("hour-format", "auto")
    }

    pub fn set_hour_format(&mut self, hour_format: impl Into<String>) -> &mut Self {
        self.element.set_string("hour-format", hour_format.into());
        self
    }
}

// =============================================================================
// FormatNumber
// =============================================================================

component!(
    /// `<coral-format-number>` - renders a number in locale form.
    FormatNumber,
    "coral-format-number"
);

impl FormatNumber {
    pub fn with_value(value: f64) -> Self {
        let format = Self::new();
        format.element.set_double("value", value);
        format
    }

    pub fn value(&self) -> f64 {
        self.element.get_double("value", 0.0)
    }

    pub fn set_value(&mut self, value: f64) -> &mut Self {
        self.element.set_double("value", value);
        self
    }

    pub fn style(&self) -> NumberStyle {
        NumberStyle::from_token(&self.element.get_string("style", "")).unwrap_or_default()
    }

    pub fn set_style(&mut self, style: NumberStyle) -> &mut Self {
        self.element.set_string("style", style.token());
        self
    }

    /// ISO 4217 currency code, only used with the currency style.
    pub fn currency(&self) -> String {
        self.element.get_string("currency", "USD")
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.element.set_string("currency", currency.into());
        self
    }

    pub fn no_grouping(&self) -> bool {
        self.element.get_bool("no-grouping", false)
    }

    pub fn set_no_grouping(&mut self, no_grouping: bool) -> &mut Self {
        self.element.set_bool("no-grouping", no_grouping);
        self
    }

    pub fn minimum_fraction_digits(&self) -> i64 {
        self.element.get_int("minimum-fraction-digits", 0)
    }

    pub fn set_minimum_fraction_digits(&mut self, digits: i64) -> &mut Self {
        self.element.set_int("minimum-fraction-digits", digits);
        self
    }

    pub fn maximum_fraction_digits(&self) -> i64 {
        self.element.get_int("maximum-fraction-digits", 3)
    }

    pub fn set_maximum_fraction_digits(&mut self, digits: i64) -> &mut Self {
        self.element.set_int("maximum-fraction-digits", digits);
        self
    }
}

// =============================================================================
// RelativeTime
// =============================================================================

component!(
    /// `<coral-relative-time>` - renders a date as "2 days ago".
    RelativeTime,
    "coral-relative-time"
);

impl RelativeTime {
    pub fn with_date(date: impl Into<String>) -> Self {
        let relative = Self::new();
        relative.element.set_string("date", date.into());
        relative
    }

    pub fn date(&self) -> String {
        self.element.get_string("date", "")
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> &mut Self {
        self.element.set_string("date", date.into());
        self
    }

    pub fn format(&self) -> UnitDisplay {
        UnitDisplay::from_token(&self.element.get_string("format", "")).unwrap_or_default()
    }

    pub fn set_format(&mut self, format: UnitDisplay) -> &mut Self {
        self.element.set_string("format", format.token());
        self
    }

    /// `"auto"` (default) allows "yesterday"; `"always"` forces "1 day ago".
    pub fn numeric(&self) -> String {
        self.element.get_string("numeric", "auto")
    }

    pub fn set_numeric(&mut self, numeric: impl Into<String>) -> &mut Self {
        self.element.set_string("numeric", numeric.into());
        self
    }

    /// Keeps the rendered text updated as time passes.
    pub fn sync(&self) -> bool {
        self.element.get_bool("sync", false)
    }

    pub fn set_sync(&mut self, sync: bool) -> &mut Self {
        self.element.set_bool("sync", sync);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_defaults() {
        let format = FormatBytes::with_value(1048576.0);
        assert_eq!(format.value(), 1048576.0);
        assert_eq!(format.unit(), ByteUnit::Byte);
        assert_eq!(format.display(), UnitDisplay::Long);
    }

    #[test]
    fn test_format_number_fraction_digit_defaults() {
        let format = FormatNumber::new();
        assert_eq!(format.minimum_fraction_digits(), 0);
        assert_eq!(format.maximum_fraction_digits(), 3);
        assert_eq!(format.currency(), "USD");
    }

    #[test]
    fn test_relative_time_round_trip() {
        let mut relative = RelativeTime::with_date("2026-08-30T12:00:00Z");
        relative.set_format(UnitDisplay::Short).set_sync(true);
        assert_eq!(relative.date(), "2026-08-30T12:00:00Z");
        assert_eq!(relative.format(), UnitDisplay::Short);
        assert!(relative.sync());
    }
}
