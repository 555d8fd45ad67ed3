//! In-place sorting over the cursor protocol.
//!
//! A pattern-defeating quicksort: insertion sort below a small cutoff,
//! median-of-3 pivots (ninther on large partitions), a dedicated pass
//! that skips over runs equal to the previous pivot (all-equal inputs
//! sort in linear time), and a heapsort fallback once too many
//! partitions come out lopsided. The interface asks for bounded random
//! access plus element swaps; positions are handled as signed offsets
//! from `first`.

use core::cmp::Ordering;

use crate::num::{self, Distance};
use crate::seq::{Bounded, MutableSequence, RandomAccess};

/// Partitions at or below this length go to insertion sort.
const INSERTION_CUTOFF: Distance = 24;

/// Partitions above this length pick the pivot by ninther.
const NINTHER_CUTOFF: Distance = 128;

/// Sorts the sequence in place by the natural order of its values.
///
/// ```
/// let mut data = [5, 1, 4, 2, 3];
///
/// lazy_seq::sort(&mut &mut data[..]);
/// assert!(data == [1, 2, 3, 4, 5]);
/// ```
pub fn sort<S>(seq: &mut S)
where
    S: RandomAccess + Bounded + MutableSequence,
    S::Cursor: Ord,
    S::Value: Ord,
{
    sort_by(seq, Ord::cmp);
}

/// Sorts the sequence in place under a caller-supplied comparator.
///
/// The comparator must induce a weak ordering; for floating-point
/// elements pass something like `f64::total_cmp` explicitly.
pub fn sort_by<S, C>(seq: &mut S, mut cmp: C)
where
    S: RandomAccess + Bounded + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let origin = seq.first();
    let end = seq.last();
    let len = seq.distance(&origin, &end);

    if len < 2 {
        return;
    }

    let budget = log2(len);

    quicksort(seq, &origin, 0, len, &mut cmp, budget, true);
}

fn log2(mut n: Distance) -> u32 {
    let mut bits = 0;

    while n > 1 {
        n /= 2;
        bits += 1;
    }

    bits
}

fn cursor_at<S>(seq: &mut S, origin: &S::Cursor, index: Distance) -> S::Cursor
where
    S: RandomAccess,
    S::Cursor: Ord,
{
    let mut cur = origin.clone();
    seq.inc_by(&mut cur, index);

    cur
}

fn is_less<S, C>(seq: &mut S, origin: &S::Cursor, i: Distance, j: Distance, cmp: &mut C) -> bool
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let a = cursor_at(seq, origin, i);
    let b = cursor_at(seq, origin, j);

    let order = {
        let x = seq.read_at(&a);
        let y = seq.read_at(&b);

        cmp(x, y)
    };

    order == Ordering::Less
}

fn swap<S>(seq: &mut S, origin: &S::Cursor, i: Distance, j: Distance)
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
{
    let a = cursor_at(seq, origin, i);
    let b = cursor_at(seq, origin, j);

    seq.swap_at(&a, &b);
}

fn insertion_sort<S, C>(seq: &mut S, origin: &S::Cursor, lo: Distance, hi: Distance, cmp: &mut C)
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut i = num::add(lo, 1);

    while i < hi {
        let mut j = i;

        while j > lo && is_less(seq, origin, j, num::sub(j, 1), cmp) {
            swap(seq, origin, j, num::sub(j, 1));
            j = num::sub(j, 1);
        }

        i = num::add(i, 1);
    }
}

fn heapsort<S, C>(seq: &mut S, origin: &S::Cursor, lo: Distance, hi: Distance, cmp: &mut C)
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let len = num::sub(hi, lo);

    let mut start = len / 2;

    while start > 0 {
        start -= 1;
        sift_down(seq, origin, lo, start, len, cmp);
    }

    let mut end = len;

    while end > 1 {
        end -= 1;
        swap(seq, origin, lo, num::add(lo, end));
        sift_down(seq, origin, lo, 0, end, cmp);
    }
}

fn sift_down<S, C>(
    seq: &mut S,
    origin: &S::Cursor,
    lo: Distance,
    mut root: Distance,
    len: Distance,
    cmp: &mut C,
) where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    loop {
        let mut child = num::add(num::mul(root, 2), 1);

        if child >= len {
            break;
        }

        if num::add(child, 1) < len
            && is_less(seq, origin, num::add(lo, child), num::add(lo, child + 1), cmp)
        {
            child += 1;
        }

        if !is_less(seq, origin, num::add(lo, root), num::add(lo, child), cmp) {
            break;
        }

        swap(seq, origin, num::add(lo, root), num::add(lo, child));
        root = child;
    }
}

// Orders the values under the three offsets so the median lands in the
// middle slot.
fn sort3<S, C>(
    seq: &mut S,
    origin: &S::Cursor,
    a: Distance,
    b: Distance,
    c: Distance,
    cmp: &mut C,
) where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    if is_less(seq, origin, b, a, cmp) {
        swap(seq, origin, a, b);
    }

    if is_less(seq, origin, c, b, cmp) {
        swap(seq, origin, b, c);
    }

    if is_less(seq, origin, b, a, cmp) {
        swap(seq, origin, a, b);
    }
}

// Moves a pivot to `lo`: median of three for modest partitions, median
// of three medians (ninther) for large ones.
fn choose_pivot<S, C>(seq: &mut S, origin: &S::Cursor, lo: Distance, hi: Distance, cmp: &mut C)
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let len = num::sub(hi, lo);
    let mid = num::add(lo, len / 2);
    let last = num::sub(hi, 1);

    if len > NINTHER_CUTOFF {
        let eighth = len / 8;

        sort3(seq, origin, lo, num::add(lo, eighth), num::add(lo, 2 * eighth), cmp);
        sort3(seq, origin, num::sub(mid, eighth), mid, num::add(mid, eighth), cmp);
        sort3(seq, origin, num::sub(last, 2 * eighth), num::sub(last, eighth), last, cmp);
    }

    sort3(seq, origin, lo, mid, last, cmp);
    swap(seq, origin, lo, mid);
}

// Lomuto partition around the pivot at `lo`; returns the pivot's final
// offset.
fn partition<S, C>(
    seq: &mut S,
    origin: &S::Cursor,
    lo: Distance,
    hi: Distance,
    cmp: &mut C,
) -> Distance
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut store = num::add(lo, 1);
    let mut i = num::add(lo, 1);

    while i < hi {
        if is_less(seq, origin, i, lo, cmp) {
            if i != store {
                swap(seq, origin, i, store);
            }

            store = num::add(store, 1);
        }

        i = num::add(i, 1);
    }

    let pivot = num::sub(store, 1);
    swap(seq, origin, lo, pivot);

    pivot
}

// Skips the front run of elements equivalent to the element just
// before `lo` (the previous pivot); returns the first offset past the
// run. Everything in `[lo, hi)` is known to be not-less than that
// pivot, so equivalence is one comparison per element.
fn partition_equal<S, C>(
    seq: &mut S,
    origin: &S::Cursor,
    lo: Distance,
    hi: Distance,
    cmp: &mut C,
) -> Distance
where
    S: RandomAccess + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let pivot = num::sub(lo, 1);
    let mut store = lo;
    let mut i = lo;

    while i < hi {
        if !is_less(seq, origin, pivot, i, cmp) {
            if i != store {
                swap(seq, origin, i, store);
            }

            store = num::add(store, 1);
        }

        i = num::add(i, 1);
    }

    store
}

fn quicksort<S, C>(
    seq: &mut S,
    origin: &S::Cursor,
    mut lo: Distance,
    mut hi: Distance,
    cmp: &mut C,
    mut budget: u32,
    mut leftmost: bool,
) where
    S: RandomAccess + Bounded + MutableSequence,
    S::Cursor: Ord,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    loop {
        let len = num::sub(hi, lo);

        if len <= INSERTION_CUTOFF {
            insertion_sort(seq, origin, lo, hi, cmp);

            return;
        }

        if budget == 0 {
            // too many lopsided partitions: the input is adversarial
            // for quicksort, finish with guaranteed n log n
            heapsort(seq, origin, lo, hi, cmp);

            return;
        }

        choose_pivot(seq, origin, lo, hi, cmp);

        if !leftmost && !is_less(seq, origin, num::sub(lo, 1), lo, cmp) {
            // the previous pivot equals this one: everything equal to
            // it is already in place once skipped, which is what makes
            // equal-run inputs linear
            lo = partition_equal(seq, origin, lo, hi, cmp);

            continue;
        }

        let pivot = partition(seq, origin, lo, hi, cmp);

        let left = num::sub(pivot, lo);
        let right = num::sub(hi, num::add(pivot, 1));

        if left < len / 8 || right < len / 8 {
            budget -= 1;
        }

        // recurse into the smaller side, iterate on the larger
        if left <= right {
            quicksort(seq, origin, lo, pivot, cmp, budget, leftmost);
            lo = num::add(pivot, 1);
            leftmost = false;
        } else {
            quicksort(seq, origin, num::add(pivot, 1), hi, cmp, budget, false);
            hi = pivot;
        }
    }
}

#[test]
fn test_sort_small() {
    let mut data = [5, 1, 4, 2, 3];

    sort(&mut &mut data[..]);
    assert!(data == [1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_with_duplicates() {
    let mut data = [3, 1, 3, 1, 3, 2, 2, 1];

    sort(&mut &mut data[..]);
    assert!(data == [1, 1, 1, 2, 2, 3, 3, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_sort_large_mixed() {
    let mut data: Vec<i64> = (0..500).map(|i| (i * 7919) % 251).collect();

    sort(&mut data);

    for window in data.windows(2) {
        assert!(window[0] <= window[1]);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_sort_all_equal() {
    let mut data = vec![42u32; 10_000];

    sort(&mut data);
    assert!(data.iter().all(|&x| x == 42));
}

#[cfg(feature = "std")]
#[test]
fn test_sort_descending_input() {
    let mut data: Vec<i32> = (0..300).rev().collect();

    sort(&mut data);

    for (i, x) in data.iter().enumerate() {
        assert!(*x == i as i32);
    }
}

#[test]
fn test_sort_by_comparator() {
    let mut data = [1.5f64, -0.5, 3.25, 0.0];

    sort_by(&mut &mut data[..], |a, b| a.total_cmp(b));
    assert!(data == [-0.5, 0.0, 1.5, 3.25]);
}

#[test]
fn test_sort_is_idempotent() {
    let mut data = [2, 1, 3];

    sort(&mut &mut data[..]);
    sort(&mut &mut data[..]);
    assert!(data == [1, 2, 3]);
}
