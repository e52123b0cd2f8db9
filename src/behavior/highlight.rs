//! Current-customer detection.

use crate::page::QueueRow;

/// Indices of rows whose time slot matches the current time.
///
/// Labels are trimmed and compared by exact string equality against
/// `now_hhmm` (which must come from [`crate::clock::format_hhmm`]).
/// Every match is returned - two customers booked into the same slot are
/// both current. A label like `9:05` never matches: the server renders
/// zero-padded slots and anything else is not a slot.
pub fn current_rows(rows: &[QueueRow], now_hhmm: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.time_label.trim() == now_hhmm)
        .map(|(idx, _)| idx)
        .collect()
}
