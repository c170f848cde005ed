//! Stable merge sort for comparators that are not a total order.
//!
//! Cell comparison picks its tier per pair, so on a column mixing numbers
//! and free text it is not transitive (`"9" < "10" < "1a" < "9"`).
//! `slice::sort_by` may panic on such input. This sort never does: it
//! always returns a permutation of its input, ordered wherever the
//! comparator is consistent, and keeps equal items in input order.

use std::cmp::Ordering;

/// Length of the runs sorted by insertion before merging starts.
const RUN: usize = 16;

/// Sorts `items` in place with `compare`.
pub(crate) fn stable_sort<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for start in (0..len).step_by(RUN) {
        let end = (start + RUN).min(len);
        insertion_sort(&mut items[start..end], &mut compare);
    }

    let mut merged = Vec::with_capacity(len);
    let mut width = RUN;
    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&items[start..mid], &items[mid..end], &mut merged, &mut compare);
            start = end;
        }
        items.copy_from_slice(&merged);
        width *= 2;
    }
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Ties take from the left run.
        if compare(&left[i], &right[j]) == Ordering::Greater {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
