//! Lock-step drivers over two sequences.
//!
//! These iterate a pair of sequences together without building a
//! [`zip`](crate::Pipe::zip) adaptor (and so without materializing
//! pair elements), stopping as soon as either side ends.

use crate::seq::Sequence;

/// Advances both sequences together while `f` keeps returning `true`;
/// returns the cursor pair where traversal stopped.
pub fn zip_for_each_while<A, B, F>(a: &mut A, b: &mut B, mut f: F) -> (A::Cursor, B::Cursor)
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Value, &B::Value) -> bool,
{
    let mut ca = a.first();
    let mut cb = b.first();

    while !a.is_last(&ca) && !b.is_last(&cb) {
        let keep_going = f(a.read_at(&ca), b.read_at(&cb));

        if !keep_going {
            break;
        }

        a.inc(&mut ca);
        b.inc(&mut cb);
    }

    (ca, cb)
}

/// Applies `f` to every aligned pair of elements.
pub fn zip_for_each<A, B, F>(a: &mut A, b: &mut B, mut f: F) -> (A::Cursor, B::Cursor)
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Value, &B::Value),
{
    zip_for_each_while(a, b, |x, y| {
        f(x, y);

        true
    })
}

/// The cursor pair of the first aligned pair matching the predicate;
/// at least one side is past the end on a miss.
pub fn zip_find_if<A, B, P>(a: &mut A, b: &mut B, mut pred: P) -> (A::Cursor, B::Cursor)
where
    A: Sequence,
    B: Sequence,
    P: FnMut(&A::Value, &B::Value) -> bool,
{
    zip_for_each_while(a, b, |x, y| !pred(x, y))
}

/// Left fold over aligned pairs, stopping at the shorter side.
pub fn zip_fold<A, B, T, F>(a: &mut A, b: &mut B, init: T, mut f: F) -> T
where
    A: Sequence,
    B: Sequence,
    F: FnMut(T, &A::Value, &B::Value) -> T,
{
    let mut acc = Some(init);

    zip_for_each_while(a, b, |x, y| {
        acc = Some(f(acc.take().unwrap(), x, y));

        true
    });

    acc.unwrap()
}

#[test]
fn test_zip_fold_dot_product() {
    let mut a = &[1, 2, 3][..];
    let mut b = &[4, 5, 6, 7][..];

    let dot = zip_fold(&mut a, &mut b, 0, |acc, x, y| acc + x * y);
    assert!(dot == 4 + 10 + 18);
}

#[test]
fn test_zip_find_if() {
    use crate::Sequence;

    let mut a = &[1, 2, 3][..];
    let mut b = &[1, 5, 3][..];

    let (ca, cb) = zip_find_if(&mut a, &mut b, |x, y| x != y);
    assert!(*a.read_at(&ca) == 2);
    assert!(*b.read_at(&cb) == 5);
}
