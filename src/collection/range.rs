use std::ops::Range;

/// Resolve a possibly negative offset against `len`.
/// Negative offsets count back from the tail; the result is clamped to `0..=len`.
pub(crate) fn resolve_offset(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        (offset as usize).min(len)
    }
}

/// `begin`/`end` window as used by `slice`. An inverted window is empty.
pub(crate) fn resolve_window(begin: Option<isize>, end: Option<isize>, len: usize) -> Range<usize> {
    let start = begin.map_or(0, |b| resolve_offset(b, len));
    let stop = end.map_or(len, |e| resolve_offset(e, len));
    start..stop.max(start)
}

/// Range removed by `splice(index, remove_count)`.
pub(crate) fn resolve_splice(index: isize, remove_count: usize, len: usize) -> Range<usize> {
    let start = resolve_offset(index, len);
    start..start + remove_count.min(len - start)
}
