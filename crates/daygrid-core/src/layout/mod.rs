//! Day layout engine.
//!
//! This module orchestrates a layout pass over one day's events:
//! - Ingestion filter: malformed intervals, all-day events, and events
//!   outside the reference day are dropped
//! - Sort into the canonical order, assign columns greedily, compute
//!   per-event column intersections
//! - Map intervals to vertical spans and derive the horizontal share
//!
//! Every pass runs to completion synchronously in function-local buffers;
//! nothing persists between reloads except the retained output.

mod attributes;
mod columns;
mod coordinate;
mod intersections;

pub use attributes::{Frame, LayoutAttributes};
pub use coordinate::TimeMapper;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::error::ConfigError;
use crate::event::EventDescriptor;
use crate::style::DayViewStyle;

use columns::{assign_columns, column_indices, sort_for_layout};
use intersections::compute_intersections;

/// Compute one day's layout.
///
/// Filters `events` down to those participating in `reference_day`, then
/// runs a full pass. The output is ordered column-major: all of column 0
/// first, then column 1, and so on -- the order hosts want for
/// front-to-back rendering.
///
/// # Errors
/// Returns a [`ConfigError`] if the style fails validation; the pass
/// itself cannot fail.
pub fn layout_day(
    events: &[EventDescriptor],
    reference_day: NaiveDate,
    style: &DayViewStyle,
) -> Result<Vec<LayoutAttributes>, ConfigError> {
    style.validate()?;
    Ok(layout_validated(events, reference_day, style))
}

fn day_origin(reference_day: NaiveDate) -> DateTime<Utc> {
    reference_day
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time of day")
        .and_utc()
}

fn layout_validated(
    events: &[EventDescriptor],
    reference_day: NaiveDate,
    style: &DayViewStyle,
) -> Vec<LayoutAttributes> {
    let day_start = day_origin(reference_day);
    let day_end = day_start + Duration::days(1);

    let mut kept: Vec<EventDescriptor> = events
        .iter()
        .filter(|e| e.has_valid_interval())
        .filter(|e| !e.all_day)
        .filter(|e| e.overlaps_range(day_start, day_end))
        .cloned()
        .collect();
    debug!(
        day = %reference_day,
        supplied = events.len(),
        kept = kept.len(),
        "layout pass started"
    );

    sort_for_layout(&mut kept);
    let columns = assign_columns(&kept);
    let column_of = column_indices(&columns, kept.len());
    let intersections = compute_intersections(&kept, &column_of);
    debug!(columns = columns.len(), "columns assigned");

    let mapper = TimeMapper::new(style, reference_day);
    let mut attributes = Vec::with_capacity(kept.len());
    for members in &columns {
        for &index in members {
            let event = &kept[index];
            let concurrency = intersections[index].len() as f64;
            let y = mapper.date_to_y(event.start_time);
            let height = mapper.date_to_y(event.end_time) - y;
            let frame = Frame {
                x: style.leading_inset
                    + column_of[index] as f64 / concurrency * style.total_width,
                y,
                width: style.total_width / concurrency,
                height,
            };
            attributes.push(LayoutAttributes {
                event: event.clone(),
                frame,
                column: column_of[index],
                intersections: intersections[index].clone(),
            });
        }
    }
    attributes
}

/// Stateful layout engine retaining the last pass.
///
/// [`reload`](Self::reload) swaps in a new event snapshot;
/// [`set_style`](Self::set_style) revalidates and recomputes over the
/// retained snapshot. Either trigger runs a full pass before returning.
#[derive(Debug, Clone)]
pub struct DayLayoutEngine {
    style: DayViewStyle,
    events: Vec<EventDescriptor>,
    reference_day: Option<NaiveDate>,
    attributes: Vec<LayoutAttributes>,
}

impl DayLayoutEngine {
    /// Create an engine with a validated style.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the style is invalid.
    pub fn new(style: DayViewStyle) -> Result<Self, ConfigError> {
        style.validate()?;
        Ok(Self {
            style,
            events: Vec::new(),
            reference_day: None,
            attributes: Vec::new(),
        })
    }

    pub fn style(&self) -> &DayViewStyle {
        &self.style
    }

    /// Replace the style and recompute the retained snapshot.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] and leaves the engine untouched if the
    /// new style is invalid.
    pub fn set_style(&mut self, style: DayViewStyle) -> Result<(), ConfigError> {
        style.validate()?;
        self.style = style;
        self.recompute();
        Ok(())
    }

    /// Load a new event snapshot for a reference day and run a pass.
    ///
    /// The slice is cloned at the boundary, so later host mutation of its
    /// collection cannot affect the pass.
    pub fn reload(
        &mut self,
        events: &[EventDescriptor],
        reference_day: NaiveDate,
    ) -> &[LayoutAttributes] {
        self.events = events.to_vec();
        self.reference_day = Some(reference_day);
        self.recompute();
        &self.attributes
    }

    /// Output of the most recent pass.
    pub fn attributes(&self) -> &[LayoutAttributes] {
        &self.attributes
    }

    /// Vertical position of a timestamp relative to `reference_day`.
    pub fn date_to_y(&self, t: DateTime<Utc>, reference_day: NaiveDate) -> f64 {
        TimeMapper::new(&self.style, reference_day).date_to_y(t)
    }

    /// Timestamp at a vertical position, at minute precision.
    pub fn y_to_date(&self, y: f64, reference_day: NaiveDate) -> DateTime<Utc> {
        TimeMapper::new(&self.style, reference_day).y_to_date(y)
    }

    /// [`y_to_date`](Self::y_to_date) snapped down to the style's split
    /// interval, for tap-to-time resolution on a minute grid.
    pub fn y_to_date_snapped(&self, y: f64, reference_day: NaiveDate) -> DateTime<Utc> {
        TimeMapper::new(&self.style, reference_day)
            .y_to_date_snapped(y, self.style.split_minute_interval)
    }

    fn recompute(&mut self) {
        let Some(day) = self.reference_day else {
            self.attributes.clear();
            return;
        };
        self.attributes = layout_validated(&self.events, day, &self.style);
    }
}
