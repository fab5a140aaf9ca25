//! Time to vertical-coordinate mapping.
//!
//! Converts between absolute timestamps and y positions on the day axis.
//! Timestamps outside the reference day keep their signed day offset, so
//! an event crossing midnight measures correctly instead of being clamped
//! to the day edge.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

use crate::style::DayViewStyle;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Bidirectional mapper between timestamps and vertical positions,
/// parameterized by a style and a reference day.
///
/// The mapping is lossy below minute granularity: seconds are discarded
/// on the way in and never reconstructed on the way out.
#[derive(Debug, Clone, Copy)]
pub struct TimeMapper<'a> {
    style: &'a DayViewStyle,
    reference_day: NaiveDate,
}

impl<'a> TimeMapper<'a> {
    pub fn new(style: &'a DayViewStyle, reference_day: NaiveDate) -> Self {
        Self {
            style,
            reference_day,
        }
    }

    /// Vertical position of a timestamp.
    pub fn date_to_y(&self, t: DateTime<Utc>) -> f64 {
        let day_offset = (t.date_naive() - self.reference_day).num_days() as f64;
        let hour_fraction = t.hour() as f64 + t.minute() as f64 / 60.0;
        self.style.vertical_inset
            + hour_fraction * self.style.units_per_hour
            + day_offset * 24.0 * self.style.units_per_hour
    }

    /// Timestamp at a vertical position, at minute precision.
    ///
    /// Positions above the day origin or below its end roll the day
    /// offset instead of clamping, so the inverse stays total: the
    /// derived minute is always within `00:00..24:00` of some day.
    pub fn y_to_date(&self, y: f64) -> DateTime<Utc> {
        let hours = (y - self.style.vertical_inset) / self.style.units_per_hour;
        let total_minutes = (hours * 60.0).round() as i64;
        self.at_minute_offset(total_minutes)
    }

    /// [`y_to_date`](Self::y_to_date) snapped down to the nearest
    /// multiple of `interval` minutes within its day.
    pub fn y_to_date_snapped(&self, y: f64, interval: u32) -> DateTime<Utc> {
        let interval = i64::from(interval.max(1));
        let hours = (y - self.style.vertical_inset) / self.style.units_per_hour;
        let total_minutes = (hours * 60.0).round() as i64;
        let minute_of_day = total_minutes.rem_euclid(MINUTES_PER_DAY);
        let snapped = minute_of_day - minute_of_day % interval;
        self.at_minute_offset(total_minutes - minute_of_day + snapped)
    }

    fn at_minute_offset(&self, minutes_from_day_origin: i64) -> DateTime<Utc> {
        let day_offset = minutes_from_day_origin.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = minutes_from_day_origin.rem_euclid(MINUTES_PER_DAY);
        let day = self.reference_day + Duration::days(day_offset);
        day.and_hms_opt((minute_of_day / 60) as u32, (minute_of_day % 60) as u32, 0)
            .expect("minute of day is always within 00:00..24:00")
            .and_utc()
    }
}
