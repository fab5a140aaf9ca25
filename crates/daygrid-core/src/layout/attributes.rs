//! Layout output records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::EventDescriptor;

/// An axis-aligned rectangle in the day view's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computed placement for one event in one layout pass.
///
/// Attributes are rebuilt wholesale on every pass; no identity is carried
/// across reloads. The descriptor is a snapshot taken at reload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutAttributes {
    pub event: EventDescriptor,
    pub frame: Frame,
    /// Index of the column the event was assigned to.
    pub column: usize,
    /// Every column holding at least one event overlapping this one,
    /// the event's own column included.
    pub intersections: BTreeSet<usize>,
}

impl LayoutAttributes {
    /// Number of columns sharing the lane width with this event.
    pub fn concurrency(&self) -> usize {
        self.intersections.len()
    }

    /// The frame shrunk by `gap` pixels on the trailing edge, for hosts
    /// that draw a gutter between side-by-side events. The width
    /// invariant (`width * concurrency == total_width`) holds on
    /// [`frame`](Self::frame), not on the padded variant.
    pub fn padded_frame(&self, gap: f64) -> Frame {
        Frame {
            width: (self.frame.width - gap).max(0.0),
            ..self.frame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    #[test]
    fn test_padded_frame_never_negative() {
        let attrs = LayoutAttributes {
            event: EventDescriptor::new(
                "a",
                "A",
                Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap(),
            ),
            frame: Frame {
                x: 0.0,
                y: 0.0,
                width: 1.5,
                height: 48.0,
            },
            column: 0,
            intersections: BTreeSet::from([0]),
        };
        assert_eq!(attrs.padded_frame(2.0).width, 0.0);
        assert_eq!(attrs.padded_frame(0.5).width, 1.0);
        assert_eq!(attrs.padded_frame(0.5).height, 48.0);
    }
}
