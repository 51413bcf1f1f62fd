//! Stable merge sort.
//!
//! The default comparator mixes numeric and string comparison pairwise, so it
//! is not transitive across a mixed column, and host comparators carry no
//! guarantees at all. `slice::sort_by` may panic on such comparators; this
//! sort only ever asks "is right strictly less than left" and always
//! terminates with a permutation of its input.

use std::cmp::Ordering;

/// Sort `items` in place, keeping equal elements in their original order.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &items[start..mid],
                &items[mid..end],
                &mut buffer[start..end],
                &mut compare,
            );
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
