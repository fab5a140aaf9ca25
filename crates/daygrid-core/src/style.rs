//! Day-view style configuration.
//!
//! An immutable snapshot of the visual parameters a layout pass depends
//! on. Hosts build one directly (or deserialize it from TOML) and hand it
//! to the engine, which validates it before any pass runs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Visual configuration for the day view.
///
/// All lengths are in the host's pixel space. A style is validated at the
/// input boundary; the layout algorithm itself never re-checks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayViewStyle {
    /// Vertical padding above the 00:00 line.
    #[serde(default = "default_vertical_inset")]
    pub vertical_inset: f64,
    /// Vertical size of one hour.
    #[serde(default = "default_units_per_hour")]
    pub units_per_hour: f64,
    /// Horizontal padding before the first column.
    #[serde(default = "default_leading_inset")]
    pub leading_inset: f64,
    /// Gutter between side-by-side events, applied by the host via
    /// [`padded_frame`](crate::LayoutAttributes::padded_frame).
    #[serde(default = "default_event_gap")]
    pub event_gap: f64,
    /// Snap interval for y-to-time resolution, in minutes.
    #[serde(default = "default_split_minute_interval")]
    pub split_minute_interval: u32,
    /// Drawable width of the day lane, excluding the leading inset.
    #[serde(default = "default_total_width")]
    pub total_width: f64,
}

// Default functions
fn default_vertical_inset() -> f64 {
    10.0
}
fn default_units_per_hour() -> f64 {
    48.0
}
fn default_leading_inset() -> f64 {
    56.0
}
fn default_event_gap() -> f64 {
    2.0
}
fn default_split_minute_interval() -> u32 {
    15
}
fn default_total_width() -> f64 {
    320.0
}

impl Default for DayViewStyle {
    fn default() -> Self {
        Self {
            vertical_inset: default_vertical_inset(),
            units_per_hour: default_units_per_hour(),
            leading_inset: default_leading_inset(),
            event_gap: default_event_gap(),
            split_minute_interval: default_split_minute_interval(),
            total_width: default_total_width(),
        }
    }
}

impl DayViewStyle {
    /// Validate the style before a layout pass.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.units_per_hour > 0.0 && self.units_per_hour.is_finite()) {
            return Err(ConfigError::invalid(
                "units_per_hour",
                "must be a positive, finite number",
            ));
        }
        if !(self.total_width > 0.0 && self.total_width.is_finite()) {
            return Err(ConfigError::invalid(
                "total_width",
                "must be a positive, finite number",
            ));
        }
        if !(self.vertical_inset >= 0.0 && self.vertical_inset.is_finite()) {
            return Err(ConfigError::invalid(
                "vertical_inset",
                "must be a non-negative, finite number",
            ));
        }
        if !(self.leading_inset >= 0.0 && self.leading_inset.is_finite()) {
            return Err(ConfigError::invalid(
                "leading_inset",
                "must be a non-negative, finite number",
            ));
        }
        if !(self.event_gap >= 0.0 && self.event_gap.is_finite()) {
            return Err(ConfigError::invalid(
                "event_gap",
                "must be a non-negative, finite number",
            ));
        }
        if self.split_minute_interval == 0 || self.split_minute_interval > 60 {
            return Err(ConfigError::invalid(
                "split_minute_interval",
                "must be between 1 and 60 minutes",
            ));
        }
        Ok(())
    }
}
