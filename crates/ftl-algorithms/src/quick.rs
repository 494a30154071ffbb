//! Quick sort with a Hoare-style partition.

/// Sort `v` ascending with quick sort.
///
/// The last element is the pivot. Not stable. Recursion depth is
/// proportional to `len` on adversarial input such as an already-sorted
/// slice with many distinct values.
pub fn quick_sort<T: PartialOrd>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    let middle = partition(v);
    let (low, high) = v.split_at_mut(middle);
    quick_sort(low);
    quick_sort(high);
}

/// Partition `v` around its last element and return the split point.
///
/// Afterwards no element of `v[..m]` is greater than the pivot and no
/// element of `v[m..]` is less than it. Requires `v.len() >= 2`; the
/// result is always in `1..v.len()`, so both sides are non-empty.
fn partition<T: PartialOrd>(v: &mut [T]) -> usize {
    let mut pivot = v.len() - 1;
    let mut left = 0;
    let mut right = v.len() - 1;
    loop {
        while v[left] < v[pivot] {
            left += 1;
        }
        while v[right] > v[pivot] {
            right -= 1;
        }
        if left >= right {
            return left;
        }
        v.swap(left, right);
        // the pivot value moves with the swap
        if pivot == left {
            pivot = right;
        } else if pivot == right {
            pivot = left;
        }
        left += 1;
        right -= 1;
    }
}
