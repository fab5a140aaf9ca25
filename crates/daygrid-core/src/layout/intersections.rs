//! Concurrency tracking across columns.

use std::collections::BTreeSet;

use crate::event::EventDescriptor;

/// For every event, the set of columns holding at least one event whose
/// interval overlaps it, the event's own column included.
///
/// The set size is the event's concurrency width: how many columns share
/// the lane width with it. Built once per pass as a finalized adjacency;
/// nothing mutates the sets afterwards. The pairwise scan is O(n^2),
/// which is fine at daily event counts.
pub(crate) fn compute_intersections(
    sorted: &[EventDescriptor],
    column_of: &[usize],
) -> Vec<BTreeSet<usize>> {
    let mut intersections: Vec<BTreeSet<usize>> = column_of
        .iter()
        .map(|&col| BTreeSet::from([col]))
        .collect();

    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            if sorted[i].overlaps(&sorted[j]) {
                intersections[i].insert(column_of[j]);
                intersections[j].insert(column_of[i]);
            }
        }
    }

    intersections
}
