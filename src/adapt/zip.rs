use core::cmp::Ordering;

use crate::num::Distance;
use crate::seq::{
    cached, Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// Parallel lock-step traversal of two sequences. See
/// [`Pipe::zip`](crate::Pipe::zip).
///
/// Ends when either base ends; the element is the pair of base values,
/// materialized in the cursor. For more than two sequences, nest:
/// `a.zip(b).zip(c)` yields `((a, b), c)`.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Like [`Zip`] but the pair is passed through a projection instead of
/// being yielded. See [`Pipe::zip_map`](crate::Pipe::zip_map).
#[derive(Clone, Debug)]
pub struct ZipMap<A, B, F> {
    a: A,
    b: B,
    f: F,
}

/// Cursor of [`Zip`] and [`ZipMap`]: both base cursors plus the
/// materialized element.
#[derive(Clone, Debug)]
pub struct ZipCursor<CA, CB, T> {
    a: CA,
    b: CB,
    slot: Option<T>,
}

impl<CA: PartialEq, CB: PartialEq, T> PartialEq for ZipCursor<CA, CB, T> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl<CA: Eq, CB: Eq, T> Eq for ZipCursor<CA, CB, T> {}

impl<CA: PartialOrd, CB: PartialOrd, T> PartialOrd for ZipCursor<CA, CB, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // lock-step: the components always agree on the order
        self.a.partial_cmp(&other.a)
    }
}

impl<CA: Ord, CB: Ord, T> Ord for ZipCursor<CA, CB, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a)
    }
}

pub(crate) fn new<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip { a, b }
}

pub(crate) fn new_map<A, B, F, R>(a: A, b: B, f: F) -> ZipMap<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Value, &B::Value) -> R,
{
    ZipMap { a, b, f }
}

macro_rules! zip_protocol {
    () => {
        fn first(&mut self) -> Self::Cursor {
            let a = self.a.first();
            let b = self.b.first();
            let slot = self.fill(&a, &b);

            ZipCursor { a, b, slot }
        }

        fn is_last(&mut self, cur: &Self::Cursor) -> bool {
            self.a.is_last(&cur.a) || self.b.is_last(&cur.b)
        }

        fn inc(&mut self, cur: &mut Self::Cursor) {
            self.a.inc(&mut cur.a);
            self.b.inc(&mut cur.b);
            cur.slot = self.fill(&cur.a, &cur.b);
        }

        fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
            cached(&cur.slot)
        }

        fn size_hint(&self) -> Option<usize> {
            match (self.a.size_hint(), self.b.size_hint()) {
                (Some(x), Some(y)) => Some(x.min(y)),
                (Some(x), None) if B::IS_INFINITE => Some(x),
                (None, Some(y)) if A::IS_INFINITE => Some(y),
                _ => None,
            }
        }
    };
}

impl<A, B> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Value: Clone,
    B::Value: Clone,
{
    fn fill(&mut self, a: &A::Cursor, b: &B::Cursor) -> Option<(A::Value, B::Value)> {
        if self.a.is_last(a) || self.b.is_last(b) {
            return None;
        }

        Some((self.a.read_at(a).clone(), self.b.read_at(b).clone()))
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Value: Clone,
    B::Value: Clone,
{
    type Value = (A::Value, B::Value);
    type Cursor = ZipCursor<A::Cursor, B::Cursor, (A::Value, B::Value)>;

    const IS_INFINITE: bool = A::IS_INFINITE && B::IS_INFINITE;

    zip_protocol!();
}

impl<A, B, F, R> ZipMap<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Value, &B::Value) -> R,
{
    fn fill(&mut self, a: &A::Cursor, b: &B::Cursor) -> Option<R> {
        if self.a.is_last(a) || self.b.is_last(b) {
            return None;
        }

        let ea = self.a.read_at(a);
        let eb = self.b.read_at(b);

        Some((self.f)(ea, eb))
    }
}

impl<A, B, F, R> Sequence for ZipMap<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Value, &B::Value) -> R,
    R: Clone,
{
    type Value = R;
    type Cursor = ZipCursor<A::Cursor, B::Cursor, R>;

    const IS_INFINITE: bool = A::IS_INFINITE && B::IS_INFINITE;

    zip_protocol!();
}

impl<A, B> Multipass for Zip<A, B>
where
    A: Multipass,
    B: Multipass,
    A::Value: Clone,
    B::Value: Clone,
{
}

impl<A, B> Bidirectional for Zip<A, B>
where
    A: Bidirectional,
    B: Bidirectional,
    A::Value: Clone,
    B::Value: Clone,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.a.dec(&mut cur.a);
        self.b.dec(&mut cur.b);
        cur.slot = self.fill(&cur.a, &cur.b);
    }
}

impl<A, B> RandomAccess for Zip<A, B>
where
    A: RandomAccess,
    B: RandomAccess,
    A::Value: Clone,
    B::Value: Clone,
    A::Cursor: Ord,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.a.inc_by(&mut cur.a, offset);
        self.b.inc_by(&mut cur.b, offset);
        cur.slot = self.fill(&cur.a, &cur.b);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.a.distance(&from.a, &to.a)
    }
}

impl<A, B> Bounded for Zip<A, B>
where
    A: RandomAccess + ExactSize,
    B: RandomAccess + ExactSize,
    A::Value: Clone,
    B::Value: Clone,
    A::Cursor: Ord,
    B::Cursor: Ord,
{
    fn last(&mut self) -> Self::Cursor {
        let n = self.a.size().min(self.b.size());

        let mut a = self.a.first();
        let mut b = self.b.first();
        self.a.inc_by(&mut a, n);
        self.b.inc_by(&mut b, n);

        ZipCursor { a, b, slot: None }
    }
}

impl<A, B> ExactSize for Zip<A, B>
where
    A: ExactSize,
    B: ExactSize,
    A::Value: Clone,
    B::Value: Clone,
{
    fn size(&self) -> Distance {
        self.a.size().min(self.b.size())
    }
}

impl<A, B, F, R> Multipass for ZipMap<A, B, F>
where
    A: Multipass,
    B: Multipass,
    F: FnMut(&A::Value, &B::Value) -> R,
    R: Clone,
{
}

impl<A, B, F, R> Bidirectional for ZipMap<A, B, F>
where
    A: Bidirectional,
    B: Bidirectional,
    F: FnMut(&A::Value, &B::Value) -> R,
    R: Clone,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.a.dec(&mut cur.a);
        self.b.dec(&mut cur.b);
        cur.slot = self.fill(&cur.a, &cur.b);
    }
}

impl<A, B, F, R> ExactSize for ZipMap<A, B, F>
where
    A: ExactSize,
    B: ExactSize,
    F: FnMut(&A::Value, &B::Value) -> R,
    R: Clone,
{
    fn size(&self) -> Distance {
        self.a.size().min(self.b.size())
    }
}

#[cfg(feature = "std")]
#[test]
fn test_zip_truncates_to_the_shorter() {
    use crate::Pipe;

    let v: Vec<(i32, char)> = (&[1, 2, 3][..]).zip(&['a', 'b'][..]).to();

    assert!(v == vec![(1, 'a'), (2, 'b')]);
}

#[cfg(feature = "std")]
#[test]
fn test_zip_map_projects_pairs() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 3][..]).zip_map(&[10, 20, 30][..], |a, b| a + b).to();

    assert!(v == vec![11, 22, 33]);
}
