//! Top-down merge sort.

use smallvec::SmallVec;

/// Halves up to this many elements are buffered on the stack.
const INLINE_HALF: usize = 16;

type Half<T> = SmallVec<[T; INLINE_HALF]>;

/// Sort `v` ascending with a stable top-down merge sort.
///
/// Splits at `len / 2`, sorts both halves recursively and merges them
/// back through temporary copies of each half. Equal elements keep their
/// relative order.
pub fn merge_sort<T: PartialOrd + Clone>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    merge_sort(&mut v[..mid]);
    merge_sort(&mut v[mid..]);
    merge(v, mid);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]`.
fn merge<T: PartialOrd + Clone>(v: &mut [T], mid: usize) {
    let left: Half<T> = v[..mid].iter().cloned().collect();
    let right: Half<T> = v[mid..].iter().cloned().collect();
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    for slot in v.iter_mut() {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            (None, _) => true,
            (_, None) => false,
        };
        let next = if take_right { right.next() } else { left.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}
