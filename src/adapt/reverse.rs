use core::cmp::Ordering;

use crate::fault::fault;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, RandomAccess, Sequence,
};

/// The base, traversed back to front. See
/// [`Pipe::reverse`](crate::Pipe::reverse).
///
/// Requires a bidirectional, bounded base. Unlike the iterator-pair
/// world there is no off-by-one dance: the cursor either sits *at* a
/// base element or is the explicit `End` tag, so `read_at` forwards
/// directly.
#[derive(Clone, Debug)]
pub struct Reverse<B> {
    base: B,
}

/// Cursor of [`Reverse`]: a base position, or past-the-(reversed)-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevCursor<C> {
    At(C),
    End,
}

impl<C: Ord> PartialOrd for RevCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for RevCursor<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // base order flips; End is the greatest position
            (RevCursor::At(a), RevCursor::At(b)) => b.cmp(a),
            (RevCursor::At(_), RevCursor::End) => Ordering::Less,
            (RevCursor::End, RevCursor::At(_)) => Ordering::Greater,
            (RevCursor::End, RevCursor::End) => Ordering::Equal,
        }
    }
}

pub(crate) fn new<B>(base: B) -> Reverse<B>
where
    B: Bidirectional + Bounded,
{
    Reverse { base }
}

impl<B> Reverse<B>
where
    B: Bidirectional + Bounded,
{
    /// Consumes the adaptor, yielding the base back.
    ///
    /// `reverse().reverse()` in a pipeline costs two wrappers; this is
    /// the zero-cost undo.
    pub fn into_inner(self) -> B {
        self.base
    }
}

impl<B> Sequence for Reverse<B>
where
    B: Bidirectional + Bounded,
{
    type Value = B::Value;
    type Cursor = RevCursor<B::Cursor>;

    fn first(&mut self) -> Self::Cursor {
        let mut cur = self.base.last();

        if cur == self.base.first() {
            return RevCursor::End;
        }

        self.base.dec(&mut cur);

        RevCursor::At(cur)
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        matches!(cur, RevCursor::End)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        match cur {
            RevCursor::At(base) => {
                if *base == self.base.first() {
                    *cur = RevCursor::End;
                } else {
                    self.base.dec(base);
                }
            }
            RevCursor::End => fault("inc past the end of reverse"),
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        match cur {
            RevCursor::At(base) => self.base.read_at(base),
            RevCursor::End => fault("read_at past the end of reverse"),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        self.base.size_hint()
    }
}

impl<B> Multipass for Reverse<B> where B: Bidirectional + Bounded {}

impl<B> Bidirectional for Reverse<B>
where
    B: Bidirectional + Bounded,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        match cur {
            RevCursor::At(base) => self.base.inc(base),
            RevCursor::End => {
                // precondition: the base is nonempty
                *cur = RevCursor::At(self.base.first());
            }
        }
    }
}

impl<B> RandomAccess for Reverse<B>
where
    B: RandomAccess + Bounded + ExactSize,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let size = self.base.size();
        let position = self.position(cur);
        let target = num::add(position, offset);

        crate::fault::runtime_check!(
            target >= 0 && target <= size,
            "jump outside of reverse"
        );

        *cur = self.cursor_at(target, size);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let from = self.position(from);
        let to = self.position(to);

        num::sub(to, from)
    }
}

impl<B> Reverse<B>
where
    B: RandomAccess + Bounded + ExactSize,
    B::Cursor: Ord,
{
    fn position(&mut self, cur: &RevCursor<B::Cursor>) -> Distance {
        let size = self.base.size();

        match cur {
            RevCursor::At(base) => {
                let first = self.base.first();
                let from_front = self.base.distance(&first, base);

                num::sub(num::sub(size, 1), from_front)
            }
            RevCursor::End => size,
        }
    }

    fn cursor_at(&mut self, position: Distance, size: Distance) -> RevCursor<B::Cursor> {
        if position == size {
            return RevCursor::End;
        }

        let mut base = self.base.first();
        self.base
            .inc_by(&mut base, num::sub(num::sub(size, 1), position));

        RevCursor::At(base)
    }
}

impl<B> Bounded for Reverse<B>
where
    B: Bidirectional + Bounded,
{
    fn last(&mut self) -> Self::Cursor {
        RevCursor::End
    }
}

impl<B> ExactSize for Reverse<B>
where
    B: Bidirectional + Bounded + ExactSize,
{
    fn size(&self) -> Distance {
        self.base.size()
    }
}

impl<B> MutableSequence for Reverse<B>
where
    B: Bidirectional + Bounded + MutableSequence,
{
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut B::Value {
        match cur {
            RevCursor::At(base) => self.base.value_at_mut(base),
            RevCursor::End => fault("write past the end of reverse"),
        }
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        match (a, b) {
            (RevCursor::At(a), RevCursor::At(b)) => self.base.swap_at(a, b),
            _ => fault("swap past the end of reverse"),
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_reverse_reads_back_to_front() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 3][..]).reverse().map(|x| *x).to();

    assert!(v == vec![3, 2, 1]);
}

#[cfg(feature = "std")]
#[test]
fn test_reverse_of_reverse_is_identity() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 3][..]).reverse().reverse().map(|x| *x).to();

    assert!(v == vec![1, 2, 3]);
}

#[test]
fn test_reverse_of_empty() {
    use crate::Sequence;

    let mut r = new(&[][..] as &[i32]);

    let cur = r.first();
    assert!(r.is_last(&cur));
}
