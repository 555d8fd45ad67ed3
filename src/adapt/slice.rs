use crate::fault::runtime_check;
use crate::num::Distance;
use crate::seq::{
    Bidirectional, Bounded, Multipass, MutableSequence, RandomAccess, Sequence,
};

/// The half-open sub-sequence between two saved cursors. See
/// [`Pipe::slice`](crate::Pipe::slice).
///
/// Bounded by construction, whatever the base is. The base travels by
/// value; to slice without consuming, slice a `&mut` or shared view of
/// the source — the sub-sequence adaptors (`chunk`, `split`, `slide`)
/// hand out exactly such slices over cheaply cloned view bases.
#[derive(Clone)]
pub struct Slice<B: Sequence> {
    base: B,
    from: B::Cursor,
    to: B::Cursor,
}

/// The open-ended sub-sequence from a saved cursor. See
/// [`Pipe::slice_from`](crate::Pipe::slice_from).
#[derive(Clone)]
pub struct SliceFrom<B: Sequence> {
    base: B,
    from: B::Cursor,
}

pub(crate) fn new<B: Multipass>(base: B, from: B::Cursor, to: B::Cursor) -> Slice<B> {
    Slice { base, from, to }
}

pub(crate) fn new_from<B: Multipass>(base: B, from: B::Cursor) -> SliceFrom<B> {
    SliceFrom { base, from }
}

impl<B: Multipass> Sequence for Slice<B> {
    type Value = B::Value;
    type Cursor = B::Cursor;

    fn first(&mut self) -> Self::Cursor {
        self.from.clone()
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        *cur == self.to || self.base.is_last(cur)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(*cur != self.to, "inc past the end of slice");

        self.base.inc(cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(cur)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(cur)
    }
}

impl<B: Multipass> Multipass for Slice<B> {}

impl<B: Bidirectional> Bidirectional for Slice<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(*cur != self.from, "dec before the start of slice");

        self.base.dec(cur);
    }
}

impl<B: RandomAccess> RandomAccess for Slice<B>
where
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset);

        runtime_check!(
            *cur >= self.from && *cur <= self.to,
            "jump outside of slice"
        );
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(from, to)
    }
}

impl<B: Multipass> Bounded for Slice<B> {
    fn last(&mut self) -> Self::Cursor {
        self.to.clone()
    }
}

impl<B: MutableSequence> MutableSequence for Slice<B>
where
    B: Multipass,
{
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        self.base.value_at_mut(cur)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(a, b);
    }
}

impl<B: Multipass> Sequence for SliceFrom<B> {
    type Value = B::Value;
    type Cursor = B::Cursor;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        self.from.clone()
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(cur)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(cur)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(cur)
    }
}

impl<B: Multipass> Multipass for SliceFrom<B> {}

impl<B: Bidirectional> Bidirectional for SliceFrom<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(*cur != self.from, "dec before the start of slice_from");

        self.base.dec(cur);
    }
}

impl<B: RandomAccess> RandomAccess for SliceFrom<B>
where
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset);

        runtime_check!(*cur >= self.from, "jump outside of slice_from");
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(from, to)
    }
}

impl<B: Multipass + Bounded> Bounded for SliceFrom<B> {
    fn last(&mut self) -> Self::Cursor {
        self.base.last()
    }
}

impl<B: MutableSequence + Multipass> MutableSequence for SliceFrom<B> {
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        self.base.value_at_mut(cur)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(a, b);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_slice_bounds() {
    use crate::Pipe;

    let s = &[0, 1, 2, 3, 4][..];

    let v: Vec<i32> = s.slice(1, 4).map(|x| *x).to();
    assert!(v == vec![1, 2, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_slice_from() {
    use crate::Pipe;

    let s = &[0, 1, 2, 3][..];

    let v: Vec<i32> = s.slice_from(2).map(|x| *x).to();
    assert!(v == vec![2, 3]);
}
