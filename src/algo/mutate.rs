use crate::num::{self, Distance};
use crate::seq::{Bidirectional, Bounded, MutableSequence, Sequence};

/// Overwrites every element with clones of `value`.
///
/// With contiguous storage this is `slice::fill`, a `memset` for byte
/// elements.
pub fn fill<S>(seq: &mut S, value: S::Value)
where
    S: MutableSequence,
    S::Value: Clone,
{
    if let Some(storage) = seq.as_contiguous_mut() {
        storage.fill(value);

        return;
    }

    let mut cur = seq.first();

    while !seq.is_last(&cur) {
        seq.write_at(&cur, value.clone());
        seq.inc(&mut cur);
    }
}

/// Applies a mutating closure to every stored element in place.
pub fn update_each<S, F>(seq: &mut S, mut f: F)
where
    S: MutableSequence,
    F: FnMut(&mut S::Value),
{
    let mut cur = seq.first();

    while !seq.is_last(&cur) {
        f(seq.value_at_mut(&cur));
        seq.inc(&mut cur);
    }
}

/// Reverses the sequence in place: two cursors swap inward until they
/// meet.
pub fn inplace_reverse<S>(seq: &mut S)
where
    S: Bidirectional + Bounded + MutableSequence,
{
    let mut front = seq.first();
    let mut back = seq.last();

    loop {
        if front == back {
            break;
        }

        seq.dec(&mut back);

        if front == back {
            break;
        }

        seq.swap_at(&front, &back);
        seq.inc(&mut front);
    }
}

/// Copies elements of `src` over the elements of `dst` in lock step,
/// stopping at the shorter side; returns how many were written.
///
/// When both sides are contiguous the copy is one `clone_from_slice`
/// (a `memcpy` for `Copy` elements).
pub fn output_to<S, D>(src: &mut S, dst: &mut D) -> Distance
where
    S: Sequence,
    D: MutableSequence<Value = S::Value>,
    S::Value: Clone,
{
    if let Some(from) = src.as_contiguous() {
        if let Some(to) = dst.as_contiguous_mut() {
            let n = from.len().min(to.len());
            to[..n].clone_from_slice(&from[..n]);

            return num::dist(n);
        }
    }

    let mut cs = src.first();
    let mut cd = dst.first();
    let mut written = 0;

    while !src.is_last(&cs) && !dst.is_last(&cd) {
        let value = src.move_at(&cs);
        dst.write_at(&cd, value);

        src.inc(&mut cs);
        dst.inc(&mut cd);
        written = num::add(written, 1);
    }

    written
}

/// Appends every element of `src` to a growable collection.
pub fn extend_into<S, C>(src: &mut S, collection: &mut C)
where
    S: Sequence,
    S::Value: Clone,
    C: Extend<S::Value>,
{
    let mut cur = src.first();

    while !src.is_last(&cur) {
        collection.extend(core::iter::once(src.move_at(&cur)));
        src.inc(&mut cur);
    }
}

#[test]
fn test_fill_overwrites() {
    let mut data = [1, 2, 3];

    fill(&mut &mut data[..], 9);
    assert!(data == [9, 9, 9]);
}

#[test]
fn test_update_each() {
    let mut data = [1, 2, 3];

    update_each(&mut &mut data[..], |x| *x *= 10);
    assert!(data == [10, 20, 30]);
}

#[test]
fn test_inplace_reverse() {
    let mut even = [1, 2, 3, 4];
    inplace_reverse(&mut &mut even[..]);
    assert!(even == [4, 3, 2, 1]);

    let mut odd = [1, 2, 3];
    inplace_reverse(&mut &mut odd[..]);
    assert!(odd == [3, 2, 1]);

    let mut empty: [i32; 0] = [];
    inplace_reverse(&mut &mut empty[..]);
}

#[test]
fn test_output_to_truncates() {
    let src = [1, 2, 3, 4];
    let mut dst = [0, 0];

    let written = output_to(&mut &src[..], &mut &mut dst[..]);
    assert!(written == 2);
    assert!(dst == [1, 2]);
}

#[cfg(feature = "std")]
#[test]
fn test_extend_into() {
    let src = [1, 2, 3];
    let mut out = vec![0];

    extend_into(&mut &src[..], &mut out);
    assert!(out == vec![0, 1, 2, 3]);
}
