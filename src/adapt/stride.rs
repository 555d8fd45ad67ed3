use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    advance, Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

/// Every `step`-th element of the base. See
/// [`Pipe::stride`](crate::Pipe::stride).
///
/// When the final hop runs off the end of the base, the cursor records
/// how many base steps were missing so that a following `dec` lands on
/// the correct element.
#[derive(Clone, Debug)]
pub struct Stride<B> {
    base: B,
    step: Distance,
}

/// Cursor of [`Stride`]: a base cursor plus the shortfall of the hop
/// that reached the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrideCursor<C> {
    base: C,
    missing: Distance,
}

pub(crate) fn new<B: Sequence>(base: B, step: Distance) -> Stride<B> {
    runtime_check!(step > 0, "stride with a nonpositive step");

    Stride { base, step }
}

impl<B: Sequence> Sequence for Stride<B> {
    type Value = B::Value;
    type Cursor = StrideCursor<B::Cursor>;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        StrideCursor {
            base: self.base.first(),
            missing: 0,
        }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.base)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(
            !self.base.is_last(&cur.base),
            "inc past the end of stride"
        );

        let taken = advance(&mut self.base, &mut cur.base, self.step);
        cur.missing = num::sub(self.step, taken);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(&cur.base)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(&cur.base)
    }

    fn size_hint(&self) -> Option<usize> {
        self.base
            .size_hint()
            .map(|n| (n + self.step as usize - 1) / self.step as usize)
    }
}

impl<B: Multipass> Multipass for Stride<B> {}

impl<B: Bidirectional> Bidirectional for Stride<B> {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        let back = num::sub(self.step, cur.missing);

        for _ in 0..back {
            self.base.dec(&mut cur.base);
        }

        cur.missing = 0;
    }
}

impl<B> RandomAccess for Stride<B>
where
    B: RandomAccess + ExactSize,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let n = self.base.size();
        let first = self.base.first();

        // the logical index of a cursor is its base offset divided by
        // the step, rounding the end position up
        let at = self.base.distance(&first, &cur.base);
        let logical = num::div_ceil(at, self.step);
        let target = num::add(logical, offset);
        let windows = num::div_ceil(n, self.step);

        runtime_check!(
            target >= 0 && target <= windows,
            "jump outside of stride"
        );

        let base_target = num::mul(target, self.step).min(n);

        cur.base = self.base.first();
        self.base.inc_by(&mut cur.base, base_target);
        cur.missing = num::sub(num::mul(target, self.step), base_target);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let first = self.base.first();

        let from = num::div_ceil(self.base.distance(&first, &from.base), self.step);
        let to = num::div_ceil(self.base.distance(&first, &to.base), self.step);

        num::sub(to, from)
    }
}

impl<B> Bounded for Stride<B>
where
    B: Bounded + ExactSize,
{
    fn last(&mut self) -> Self::Cursor {
        let n = self.base.size();
        let tail = num::rem(n, self.step);

        StrideCursor {
            base: self.base.last(),
            missing: if tail == 0 { 0 } else { num::sub(self.step, tail) },
        }
    }
}

impl<B: ExactSize> ExactSize for Stride<B> {
    fn size(&self) -> Distance {
        num::div_ceil(self.base.size(), self.step)
    }
}

impl<B: MutableSequence> MutableSequence for Stride<B> {
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        self.base.value_at_mut(&cur.base)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(&a.base, &b.base);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_stride_skips() {
    use crate::Pipe;

    let v: Vec<i32> = (&[0, 1, 2, 3, 4, 5, 6][..]).stride(3).map(|x| *x).to();

    assert!(v == vec![0, 3, 6]);
}

#[test]
fn test_stride_dec_lands_on_elements() {
    use crate::Sequence;
    use crate::seq::Bidirectional;

    let mut s = new(&[0, 1, 2, 3, 4][..], 2);

    // walk to the end: 0, 2, 4, end (missing 1)
    let mut cur = s.first();
    s.inc(&mut cur);
    s.inc(&mut cur);
    s.inc(&mut cur);
    assert!(s.is_last(&cur));

    s.dec(&mut cur);
    assert!(*s.read_at(&cur) == 4);

    s.dec(&mut cur);
    assert!(*s.read_at(&cur) == 2);
}

#[test]
fn test_stride_size() {
    use crate::ExactSize;

    assert!(new(&[1, 2, 3, 4, 5][..], 2).size() == 3);
    assert!(new(&[1, 2, 3, 4][..], 2).size() == 2);
}
