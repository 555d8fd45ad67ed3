use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, RandomAccess, Sequence,
};

/// At most the first `n` elements of the base. See
/// [`Pipe::take`](crate::Pipe::take).
///
/// The cursor pairs the base cursor with the number of elements still
/// allowed; the end is reached when either that count hits zero or the
/// base ends. This is what makes `take` work on infinite sources.
#[derive(Clone, Debug)]
pub struct Take<B> {
    base: B,
    count: Distance,
}

/// Cursor of [`Take`]: a base cursor plus the remaining allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TakeCursor<C> {
    base: C,
    remaining: Distance,
}

pub(crate) fn new<B: Sequence>(base: B, count: Distance) -> Take<B> {
    runtime_check!(count >= 0, "take with a negative count");

    Take { base, count }
}

impl<B: Sequence> Sequence for Take<B> {
    type Value = B::Value;
    type Cursor = TakeCursor<B::Cursor>;

    fn first(&mut self) -> Self::Cursor {
        TakeCursor {
            base: self.base.first(),
            remaining: self.count,
        }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.remaining == 0 || self.base.is_last(&cur.base)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(cur.remaining > 0, "inc past the end of take");

        self.base.inc(&mut cur.base);
        cur.remaining = num::sub(cur.remaining, 1);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        runtime_check!(cur.remaining > 0, "read_at past the end of take");

        self.base.read_at(&cur.base)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(&cur.base)
    }

    fn for_each_while<G>(&mut self, mut g: G) -> Self::Cursor
    where
        G: FnMut(&B::Value) -> bool,
    {
        let mut remaining = self.count;

        let base = self.base.for_each_while(|value| {
            if remaining == 0 {
                false
            } else if g(value) {
                remaining = num::sub(remaining, 1);
                true
            } else {
                false
            }
        });

        TakeCursor { base, remaining }
    }

    fn size_hint(&self) -> Option<usize> {
        let allowed = self.count as usize;

        match self.base.size_hint() {
            Some(n) => Some(n.min(allowed)),
            None if B::IS_INFINITE => Some(allowed),
            None => None,
        }
    }
}

impl<B: Multipass> Multipass for Take<B> {}

impl<B: Bidirectional> Bidirectional for Take<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(cur.remaining < self.count, "dec before the start of take");

        self.base.dec(&mut cur.base);
        cur.remaining = num::add(cur.remaining, 1);
    }
}

impl<B: RandomAccess> RandomAccess for Take<B>
where
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let remaining = num::sub(cur.remaining, offset);

        runtime_check!(
            remaining >= 0 && remaining <= self.count,
            "jump outside of take"
        );

        self.base.inc_by(&mut cur.base, offset);
        cur.remaining = remaining;
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        num::sub(from.remaining, to.remaining)
    }
}

impl<B> Bounded for Take<B>
where
    B: RandomAccess + ExactSize,
    B::Cursor: Ord,
{
    fn last(&mut self) -> Self::Cursor {
        let taken = self.count.min(self.base.size());
        let mut base = self.base.first();
        self.base.inc_by(&mut base, taken);

        TakeCursor {
            base,
            remaining: num::sub(self.count, taken),
        }
    }
}

impl<B: ExactSize> ExactSize for Take<B> {
    fn size(&self) -> Distance {
        self.count.min(self.base.size())
    }
}

impl<B: MutableSequence> MutableSequence for Take<B> {
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        runtime_check!(cur.remaining > 0, "write past the end of take");

        self.base.value_at_mut(&cur.base)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        runtime_check!(
            a.remaining > 0 && b.remaining > 0,
            "swap past the end of take"
        );

        self.base.swap_at(&a.base, &b.base);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_take_truncates() {
    use crate::{iota, Pipe};

    let v: Vec<Distance> = iota().take(3).map(|x| *x).to();

    assert!(v == vec![0, 1, 2]);
}

#[cfg(feature = "std")]
#[test]
fn test_take_more_than_available() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2][..]).take(10).map(|x| *x).to();

    assert!(v == vec![1, 2]);
}
