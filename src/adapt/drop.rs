use crate::num::{self, Distance};
use crate::seq::{
    advance, Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

/// Everything after the first `n` elements. See
/// [`Pipe::drop`](crate::Pipe::drop).
///
/// The skip happens on the first `first()` call and the resulting
/// cursor is memoized in the adaptor, so later passes start in O(1).
#[derive(Clone)]
pub struct DropN<B: Sequence> {
    base: B,
    count: Distance,
    memo: Option<B::Cursor>,
}

/// Everything from the first element a predicate rejects. See
/// [`Pipe::drop_while`](crate::Pipe::drop_while).
///
/// Like [`DropN`], the first surviving cursor is computed once and
/// memoized.
#[derive(Clone)]
pub struct DropWhile<B: Sequence, P> {
    base: B,
    pred: P,
    memo: Option<B::Cursor>,
}

pub(crate) fn new<B: Sequence>(base: B, count: Distance) -> DropN<B> {
    crate::fault::runtime_check!(count >= 0, "drop with a negative count");

    DropN {
        base,
        count,
        memo: None,
    }
}

pub(crate) fn new_while<B, P>(base: B, pred: P) -> DropWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Value) -> bool,
{
    DropWhile {
        base,
        pred,
        memo: None,
    }
}

impl<B: Sequence> Sequence for DropN<B> {
    type Value = B::Value;
    type Cursor = B::Cursor;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        if self.memo.is_none() {
            let mut cur = self.base.first();
            advance(&mut self.base, &mut cur, self.count);

            self.memo = Some(cur);
        }

        self.memo.clone().unwrap()
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

    fn for_each_while<G>(&mut self, mut g: G) -> Self::Cursor
    where
        G: FnMut(&B::Value) -> bool,
    {
        let mut cur = self.first();

        while !self.base.is_last(&cur) {
            if !g(self.base.read_at(&cur)) {
                break;
            }

            self.base.inc(&mut cur);
        }

        cur
    }

    fn size_hint(&self) -> Option<usize> {
        self.base
            .size_hint()
            .map(|n| n.saturating_sub(self.count as usize))
    }
}

impl<B: Multipass> Multipass for DropN<B> {}

impl<B: Bidirectional> Bidirectional for DropN<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.base.dec(cur);
    }
}

impl<B: RandomAccess> RandomAccess for DropN<B>
where
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(from, to)
    }
}

impl<B: Bounded> Bounded for DropN<B> {
    fn last(&mut self) -> Self::Cursor {
        self.base.last()
    }
}

impl<B: ExactSize> ExactSize for DropN<B> {
    fn size(&self) -> Distance {
        num::sub(self.base.size(), self.count).max(0)
    }
}

impl<B: MutableSequence> MutableSequence for DropN<B> {
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        self.base.value_at_mut(cur)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(a, b);
    }
}

impl<B, P> Sequence for DropWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Value) -> bool,
{
    type Value = B::Value;
    type Cursor = B::Cursor;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        if self.memo.is_none() {
            let pred = &mut self.pred;
            let cur = self.base.for_each_while(|value| pred(value));

            self.memo = Some(cur);
        }

        self.memo.clone().unwrap()
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

    fn for_each_while<G>(&mut self, mut g: G) -> Self::Cursor
    where
        G: FnMut(&B::Value) -> bool,
    {
        let mut cur = self.first();

        while !self.base.is_last(&cur) {
            if !g(self.base.read_at(&cur)) {
                break;
            }

            self.base.inc(&mut cur);
        }

        cur
    }
}

impl<B, P> Multipass for DropWhile<B, P>
where
    B: Multipass,
    P: FnMut(&B::Value) -> bool,
{
}

impl<B, P> Bounded for DropWhile<B, P>
where
    B: Bounded,
    P: FnMut(&B::Value) -> bool,
{
    fn last(&mut self) -> Self::Cursor {
        self.base.last()
    }
}

#[test]
fn test_drop_skips_eagerly_once() {
    use crate::Sequence;

    let mut rest = new(&[1, 2, 3, 4][..], 2);

    let a = rest.first();
    let b = rest.first();
    assert!(a == b);
    assert!(*rest.read_at(&a) == 3);
}

#[test]
fn test_drop_size() {
    use crate::ExactSize;

    assert!(new(&[1, 2, 3][..], 2).size() == 1);
    assert!(new(&[1, 2, 3][..], 7).size() == 0);
}

#[cfg(feature = "std")]
#[test]
fn test_drop_while_stops_at_first_rejection() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 9, 1, 2][..])
        .drop_while(|x| *x < 5)
        .map(|x| *x)
        .to();

    assert!(v == vec![9, 1, 2]);
}
