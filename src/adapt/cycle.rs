use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// Endless repetition of a finite base. See
/// [`Pipe::cycle`](crate::Pipe::cycle).
///
/// The cursor carries a revolution counter next to the base cursor, so
/// cursors from different revolutions stay distinct and ordered.
#[derive(Clone, Debug)]
pub struct Cycle<B> {
    base: B,
}

/// `k` passes over a finite base. See
/// [`Pipe::cycle_times`](crate::Pipe::cycle_times).
#[derive(Clone, Debug)]
pub struct CycleN<B> {
    base: B,
    times: Distance,
}

/// Cursor of [`Cycle`] and [`CycleN`]: revolution first, so the derived
/// ordering is the traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleCursor<C> {
    revolution: Distance,
    base: C,
}

pub(crate) fn new<B>(base: B) -> Cycle<B>
where
    B: Multipass + Bounded,
{
    Cycle { base }
}

pub(crate) fn new_times<B>(base: B, times: Distance) -> CycleN<B>
where
    B: Multipass + Bounded,
{
    runtime_check!(times >= 0, "cycle_times with a negative count");

    CycleN { base, times }
}

// Both shapes share the whole protocol except the end condition:
// `limit` is `None` for the endless form.
fn cycle_first<B: Sequence>(base: &mut B, limit: Option<Distance>) -> CycleCursor<B::Cursor> {
    let cur = base.first();

    let revolution = if base.is_last(&cur) {
        // an empty base means an empty cycle, whatever the limit
        limit.unwrap_or(0)
    } else {
        0
    };

    CycleCursor {
        revolution,
        base: cur,
    }
}

fn cycle_inc<B: Sequence>(base: &mut B, cur: &mut CycleCursor<B::Cursor>) {
    base.inc(&mut cur.base);

    if base.is_last(&cur.base) {
        cur.revolution = num::add(cur.revolution, 1);
        cur.base = base.first();
    }
}

fn cycle_dec<B>(base: &mut B, cur: &mut CycleCursor<B::Cursor>)
where
    B: Bidirectional + Bounded,
{
    if cur.base == base.first() {
        runtime_check!(cur.revolution > 0, "dec before the start of cycle");

        cur.revolution = num::sub(cur.revolution, 1);
        cur.base = base.last();
    }

    base.dec(&mut cur.base);
}

impl<B> Sequence for Cycle<B>
where
    B: Multipass + Bounded,
{
    type Value = B::Value;
    type Cursor = CycleCursor<B::Cursor>;

    const IS_INFINITE: bool = true;

    fn first(&mut self) -> Self::Cursor {
        cycle_first(&mut self.base, None)
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        // only an empty base ever ends the endless form
        self.base.is_last(&cur.base)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        cycle_inc(&mut self.base, cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(&cur.base)
    }
}

impl<B> Multipass for Cycle<B> where B: Multipass + Bounded {}

impl<B> Bidirectional for Cycle<B>
where
    B: Bidirectional + Bounded,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        cycle_dec(&mut self.base, cur);
    }
}

impl<B> RandomAccess for Cycle<B>
where
    B: RandomAccess + Bounded + ExactSize,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let n = self.base.size();
        let first = self.base.first();
        let in_rev = self.base.distance(&first, &cur.base);

        let position = num::add(num::mul(cur.revolution, n), in_rev);
        let target = num::add(position, offset);

        runtime_check!(target >= 0, "jump before the start of cycle");

        cur.revolution = num::div(target, n);
        cur.base = self.base.first();
        self.base.inc_by(&mut cur.base, num::rem(target, n));
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let n = self.base.size();
        let first = self.base.first();

        let from = num::add(
            num::mul(from.revolution, n),
            self.base.distance(&first, &from.base),
        );
        let to = num::add(
            num::mul(to.revolution, n),
            self.base.distance(&first, &to.base),
        );

        num::sub(to, from)
    }
}

impl<B> Sequence for CycleN<B>
where
    B: Multipass + Bounded,
{
    type Value = B::Value;
    type Cursor = CycleCursor<B::Cursor>;

    fn first(&mut self) -> Self::Cursor {
        cycle_first(&mut self.base, Some(self.times))
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.revolution >= self.times || self.base.is_last(&cur.base)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        cycle_inc(&mut self.base, cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(&cur.base)
    }
}

impl<B> Multipass for CycleN<B> where B: Multipass + Bounded {}

impl<B> Bidirectional for CycleN<B>
where
    B: Bidirectional + Bounded,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        cycle_dec(&mut self.base, cur);
    }
}

impl<B> Bounded for CycleN<B>
where
    B: Multipass + Bounded,
{
    fn last(&mut self) -> Self::Cursor {
        CycleCursor {
            revolution: self.times,
            base: self.base.first(),
        }
    }
}

impl<B> ExactSize for CycleN<B>
where
    B: Multipass + Bounded + ExactSize,
{
    fn size(&self) -> Distance {
        num::mul(self.times, self.base.size())
    }
}

#[cfg(feature = "std")]
#[test]
fn test_cycle_goes_around() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2][..]).cycle().take(5).map(|x| *x).to();

    assert!(v == vec![1, 2, 1, 2, 1]);
}

#[cfg(feature = "std")]
#[test]
fn test_cycle_times_is_sized() {
    use crate::{ExactSize, Pipe};

    let c = (&[1, 2, 3][..]).cycle_times(2);

    assert!(c.size() == 6);

    let v: Vec<i32> = c.map(|x| *x).to();
    assert!(v == vec![1, 2, 3, 1, 2, 3]);
}
