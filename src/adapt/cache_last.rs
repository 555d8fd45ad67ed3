use crate::num::Distance;
use crate::seq::{Bidirectional, Bounded, Multipass, RandomAccess, Sequence};

/// Memoizes the end cursor of a finite multipass base. See
/// [`Pipe::cache_last`](crate::Pipe::cache_last).
///
/// The first `last()` call walks the base to its end and stores the
/// resulting cursor; later calls are O(1). This turns "finite but not
/// bounded" (say, a `take_while` prefix) into a bounded sequence usable
/// with `reverse` and friends. Walking an infinite base here is a
/// programming error.
#[derive(Clone)]
pub struct CacheLast<B: Sequence> {
    base: B,
    memo: Option<B::Cursor>,
}

pub(crate) fn new<B: Multipass>(base: B) -> CacheLast<B> {
    CacheLast { base, memo: None }
}

impl<B: Multipass> Sequence for CacheLast<B> {
    type Value = B::Value;
    type Cursor = B::Cursor;

    fn first(&mut self) -> Self::Cursor {
        self.base.first()
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

    fn for_each_while<G>(&mut self, g: G) -> Self::Cursor
    where
        G: FnMut(&B::Value) -> bool,
    {
        self.base.for_each_while(g)
    }

    fn size_hint(&self) -> Option<usize> {
        self.base.size_hint()
    }
}

impl<B: Multipass> Multipass for CacheLast<B> {}

impl<B: Bidirectional> Bidirectional for CacheLast<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.base.dec(cur);
    }
}

impl<B: RandomAccess> RandomAccess for CacheLast<B>
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

impl<B: Multipass> Bounded for CacheLast<B> {
    fn last(&mut self) -> Self::Cursor {
        if self.memo.is_none() {
            let end = self.base.for_each_while(|_| true);

            self.memo = Some(end);
        }

        self.memo.clone().unwrap()
    }
}

#[test]
fn test_cache_last_bounds_a_prefix() {
    use crate::{Bounded, Pipe, Sequence};

    let mut bounded = (&[1, 2, 9, 3][..]).take_while(|x| *x < 5).cache_last();

    let end = bounded.last();
    let again = bounded.last();
    assert!(end == again);

    let mut cur = bounded.first();
    bounded.inc(&mut cur);
    bounded.inc(&mut cur);
    assert!(cur == end);
}
