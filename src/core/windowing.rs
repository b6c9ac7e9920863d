use crate::core::{SpatialEvent, TimeWindow};

/// Returns events whose timestamp falls inside an inclusive time window.
pub fn events_in_time_window(
    events: &[SpatialEvent],
    window: TimeWindow,
) -> impl Iterator<Item = &SpatialEvent> + '_ {
    events
        .iter()
        .filter(move |event| window.contains(event.timestamp_seconds))
}

/// Returns `(time, value)` samples of a per-second series inside a window.
///
/// Samples past the end of the series are skipped rather than padded.
pub fn series_in_time_window(
    series: &[f64],
    window: TimeWindow,
) -> impl Iterator<Item = (usize, f64)> + '_ {
    series
        .iter()
        .copied()
        .enumerate()
        .skip(window.start)
        .take(window.span() + 1)
}
