//! Property tests for the coordinate mapper and the layout invariants.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use daygrid_core::{layout_day, DayViewStyle, EventDescriptor, TimeMapper};
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

proptest! {
    /// Round-trip at minute precision, across day offsets.
    #[test]
    fn mapper_roundtrip(
        offset in -1i64..=1,
        hour in 0u32..24,
        minute in 0u32..60,
        units_per_hour in 1.0f64..200.0,
        vertical_inset in 0.0f64..100.0,
    ) {
        let style = DayViewStyle {
            units_per_hour,
            vertical_inset,
            ..DayViewStyle::default()
        };
        let mapper = TimeMapper::new(&style, day());

        let t = (day() + Duration::days(offset))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc();
        prop_assert_eq!(mapper.y_to_date(mapper.date_to_y(t)), t);
    }

    /// Seconds are discarded: a timestamp maps to the same y as its
    /// minute-truncated counterpart.
    #[test]
    fn mapper_ignores_seconds(hour in 0u32..24, minute in 0u32..60, second in 0u32..60) {
        let style = DayViewStyle::default();
        let mapper = TimeMapper::new(&style, day());

        let with_seconds = Utc.with_ymd_and_hms(2026, 3, 10, hour, minute, second).unwrap();
        let truncated = Utc.with_ymd_and_hms(2026, 3, 10, hour, minute, 0).unwrap();
        prop_assert_eq!(mapper.date_to_y(with_seconds), mapper.date_to_y(truncated));
    }

    /// Every valid event is placed exactly once, same-column events never
    /// overlap, and each event's width is the lane width divided by its
    /// concurrency.
    #[test]
    fn layout_invariants(
        specs in prop::collection::vec((0i64..1440, 1i64..480), 0..40),
    ) {
        let origin = day().and_hms_opt(0, 0, 0).unwrap().and_utc();
        let events: Vec<EventDescriptor> = specs
            .iter()
            .enumerate()
            .map(|(i, &(start, duration))| {
                EventDescriptor::new(
                    format!("e{i}"),
                    format!("Event {i}"),
                    origin + Duration::minutes(start),
                    origin + Duration::minutes(start + duration),
                )
            })
            .collect();

        let style = DayViewStyle::default();
        let attrs = layout_day(&events, day(), &style).unwrap();

        // Coverage: every event appears exactly once.
        prop_assert_eq!(attrs.len(), events.len());
        let mut ids: Vec<_> = attrs.iter().map(|a| a.event.id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), events.len());

        for a in &attrs {
            // Own column is always part of the intersection set.
            prop_assert!(a.intersections.contains(&a.column));

            // Width partition: width * concurrency spans the lane.
            let reconstructed = a.frame.width * a.concurrency() as f64;
            prop_assert!((reconstructed - style.total_width).abs() < 1e-9);

            // x stays inside the lane.
            prop_assert!(a.frame.x >= style.leading_inset);
            prop_assert!(
                a.frame.x + a.frame.width <= style.leading_inset + style.total_width + 1e-9
            );
        }

        // No two events sharing a column overlap.
        for a in &attrs {
            for b in &attrs {
                if a.event.id != b.event.id && a.column == b.column {
                    prop_assert!(!a.event.overlaps(&b.event));
                }
            }
        }

        // Intersection symmetry across the whole pass.
        for a in &attrs {
            for b in &attrs {
                if a.event.id != b.event.id && a.event.overlaps(&b.event) {
                    prop_assert!(a.intersections.contains(&b.column));
                    prop_assert!(b.intersections.contains(&a.column));
                }
            }
        }
    }
}
