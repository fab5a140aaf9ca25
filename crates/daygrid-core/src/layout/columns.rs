//! Deterministic ordering and greedy column assignment.

use crate::event::EventDescriptor;

/// Sort events into the canonical layout order: interval start ascending,
/// then interval end ascending, then id.
///
/// Column assignment is order-sensitive, so this ordering is the single
/// source of determinism for the whole pass. The id key settles events
/// with identical intervals; without it the result would depend on the
/// host's input order.
pub(crate) fn sort_for_layout(events: &mut [EventDescriptor]) {
    events.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.end_time.cmp(&b.end_time))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Partition sorted events into columns of pairwise-disjoint intervals.
///
/// Greedy first-fit: each event lands in the lowest-indexed column where
/// it conflicts with nothing already placed, or opens a new column at the
/// end. O(n*k) for k columns, no backtracking; the column count is not
/// guaranteed minimal.
///
/// Returns the columns as lists of indices into `sorted`.
pub(crate) fn assign_columns(sorted: &[EventDescriptor]) -> Vec<Vec<usize>> {
    let mut columns: Vec<Vec<usize>> = Vec::new();

    for (index, event) in sorted.iter().enumerate() {
        let slot = columns
            .iter()
            .position(|members| members.iter().all(|&m| !sorted[m].overlaps(event)));
        match slot {
            Some(col) => columns[col].push(index),
            None => columns.push(vec![index]),
        }
    }

    columns
}

/// Column index per event, inverted from the column buckets.
pub(crate) fn column_indices(columns: &[Vec<usize>], len: usize) -> Vec<usize> {
    let mut column_of = vec![0usize; len];
    for (col, members) in columns.iter().enumerate() {
        for &m in members {
            column_of[m] = col;
        }
    }
    column_of
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, h, m, 0).unwrap()
    }

    fn ev(id: &str, start: (u32, u32), end: (u32, u32)) -> EventDescriptor {
        EventDescriptor::new(id, id, at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn test_sort_order_keys() {
        let mut events = vec![
            ev("c", (9, 0), (10, 0)),
            ev("a", (9, 0), (9, 30)),
            ev("b", (8, 0), (12, 0)),
            ev("d", (9, 0), (10, 0)),
        ];
        sort_for_layout(&mut events);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        // start, then end, then id
        assert_eq!(ids, ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_first_fit_reuses_lowest_column() {
        // 09:00-10:00 and 09:30-10:30 conflict; 11:00-12:00 reuses column 0.
        let mut events = vec![
            ev("e1", (9, 0), (10, 0)),
            ev("e2", (9, 30), (10, 30)),
            ev("e3", (11, 0), (12, 0)),
        ];
        sort_for_layout(&mut events);
        let columns = assign_columns(&events);
        assert_eq!(columns, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_touching_intervals_share_a_column() {
        let mut events = vec![ev("a", (9, 0), (10, 0)), ev("b", (10, 0), (11, 0))];
        sort_for_layout(&mut events);
        let columns = assign_columns(&events);
        assert_eq!(columns.len(), 1);
    }

    #[test]
    fn test_conflict_checked_against_every_member() {
        // "d" clears the first member of column 0 but hits the second,
        // and conflicts in column 1 too, so it must open a third column.
        let mut events = vec![
            ev("a", (9, 0), (10, 0)),
            ev("b", (9, 0), (12, 0)),
            ev("c", (10, 0), (10, 30)),
            ev("d", (10, 15), (11, 0)),
        ];
        sort_for_layout(&mut events);
        let columns = assign_columns(&events);
        assert_eq!(columns.len(), 3);
        let column_of = column_indices(&columns, events.len());
        let d = events.iter().position(|e| e.id == "d").unwrap();
        assert_eq!(column_of[d], 2);
    }

    #[test]
    fn test_column_indices_invert_buckets() {
        let columns = vec![vec![0, 2], vec![1]];
        assert_eq!(column_indices(&columns, 3), vec![0, 1, 0]);
    }
}
