//! Bubble sort.

/// Sort `v` ascending by repeated adjacent swaps.
///
/// Each pass bubbles the largest unsorted element to the end of the
/// unsorted prefix, which then shrinks by one. Stops early after a pass
/// with no swaps, so already-sorted input costs a single pass. Stable.
pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    let mut unsorted = v.len();
    let mut swapped = true;
    while swapped && unsorted > 1 {
        swapped = false;
        for i in 1..unsorted {
            if v[i - 1] > v[i] {
                v.swap(i - 1, i);
                swapped = true;
            }
        }
        unsorted -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reversed_input() {
        let mut v: Vec<i32> = (0..20).rev().collect();
        bubble_sort(&mut v);
        assert_eq!(v, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn short_slices_untouched() {
        let mut empty: [u8; 0] = [];
        bubble_sort(&mut empty);
        let mut one = [42];
        bubble_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        #[derive(Debug, PartialEq)]
        struct Keyed(u8, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
        let mut v = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        bubble_sort(&mut v);
        assert_eq!(v, [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_std_sort(mut v in prop::collection::vec(any::<i16>(), 0..64)) {
                let mut expected = v.clone();
                expected.sort();
                bubble_sort(&mut v);
                prop_assert_eq!(v, expected);
            }
        }
    }
}
