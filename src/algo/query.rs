use crate::num::{self, Distance};
use crate::seq::{Bidirectional, Bounded, Sequence};

/// Drives `seq` from the front while `f` returns `true`; returns the
/// cursor of the first rejected element, or the past-the-end cursor.
///
/// The bulk driver every short-circuiting algorithm here is built on;
/// see [`Sequence::for_each_while`] for the overriding story.
pub fn for_each_while<S, F>(seq: &mut S, f: F) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Value) -> bool,
{
    seq.for_each_while(f)
}

/// Applies `f` to every element.
pub fn for_each<S, F>(seq: &mut S, mut f: F) -> S::Cursor
where
    S: Sequence,
    F: FnMut(&S::Value),
{
    seq.for_each_while(|value| {
        f(value);

        true
    })
}

/// The cursor of the first element matching the predicate, or the
/// past-the-end cursor.
pub fn find_if<S, P>(seq: &mut S, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    seq.for_each_while(|value| !pred(value))
}

/// The cursor of the first element rejected by the predicate.
pub fn find_if_not<S, P>(seq: &mut S, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    seq.for_each_while(|value| pred(value))
}

/// The cursor of the first element equal to `value`.
///
/// Always the scalar element-by-element walk — there is no byte-wise
/// shortcut here, whatever the source.
pub fn find<S>(seq: &mut S, value: &S::Value) -> S::Cursor
where
    S: Sequence,
    S::Value: PartialEq,
{
    find_if(seq, |elem| elem == value)
}

/// Does every element satisfy the predicate?
pub fn all<S, P>(seq: &mut S, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    let stop = find_if_not(seq, pred);

    seq.is_last(&stop)
}

/// Does any element satisfy the predicate?
pub fn any<S, P>(seq: &mut S, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    let hit = find_if(seq, pred);

    !seq.is_last(&hit)
}

/// Does no element satisfy the predicate?
pub fn none<S, P>(seq: &mut S, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    !any(seq, pred)
}

/// Is `value` among the elements?
pub fn contains<S>(seq: &mut S, value: &S::Value) -> bool
where
    S: Sequence,
    S::Value: PartialEq,
{
    let hit = find(seq, value);

    !seq.is_last(&hit)
}

/// The number of elements, by traversal.
pub fn count<S: Sequence>(seq: &mut S) -> Distance {
    count_if(seq, |_| true)
}

/// The number of elements matching the predicate.
pub fn count_if<S, P>(seq: &mut S, mut pred: P) -> Distance
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    let mut total = 0;

    seq.for_each_while(|value| {
        if pred(value) {
            total = num::add(total, 1);
        }

        true
    });

    total
}

/// The number of elements equal to `value`.
pub fn count_eq<S>(seq: &mut S, value: &S::Value) -> Distance
where
    S: Sequence,
    S::Value: PartialEq,
{
    count_if(seq, |elem| elem == value)
}

/// The first element, owned; `None` on an empty sequence.
pub fn front<S>(seq: &mut S) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Clone,
{
    let cur = seq.first();

    if seq.is_last(&cur) {
        return None;
    }

    Some(seq.move_at(&cur))
}

/// The last element, owned; `None` on an empty sequence.
pub fn back<S>(seq: &mut S) -> Option<S::Value>
where
    S: Bidirectional + Bounded,
    S::Value: Clone,
{
    let first = seq.first();

    if seq.is_last(&first) {
        return None;
    }

    let mut cur = seq.last();
    seq.dec(&mut cur);

    Some(seq.move_at(&cur))
}

#[test]
fn test_find_returns_a_cursor() {
    use crate::Sequence;

    let mut s = &[4, 5, 6][..];

    let cur = find(&mut s, &5);
    assert!(*s.read_at(&cur) == 5);

    let missing = find(&mut s, &9);
    assert!(s.is_last(&missing));
}

#[test]
fn test_quantifiers() {
    let mut s = &[2, 4, 6][..];

    assert!(all(&mut s, |x| x % 2 == 0));
    assert!(any(&mut s, |x| *x > 5));
    assert!(none(&mut s, |x| *x > 6));
}

#[test]
fn test_counts() {
    let mut s = &[1, 2, 2, 3][..];

    assert!(count(&mut s) == 4);
    assert!(count_if(&mut s, |x| *x > 1) == 3);
    assert!(count_eq(&mut s, &2) == 2);
}

#[test]
fn test_front_and_back() {
    let mut s = &[1, 2, 3][..];
    assert!(front(&mut s) == Some(1));
    assert!(back(&mut s) == Some(3));

    let mut e = &[][..] as &[i32];
    assert!(front(&mut e) == None);
    assert!(back(&mut e) == None);
}
