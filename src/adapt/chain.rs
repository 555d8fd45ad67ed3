use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, RandomAccess, Sequence,
};

/// One sequence, then another. See [`Pipe::chain`](crate::Pipe::chain).
///
/// Both bases must share a value type. The cursor is a tagged union of
/// the base cursors; stepping off the end of the first base lands on
/// `first()` of the second, and the past-the-end position of the whole
/// chain is the second base's. Longer chains nest:
/// `a.chain(b).chain(c)`.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    a: A,
    b: B,
}

/// Cursor of [`Chain`]: which base, and where in it.
///
/// The derived ordering is the traversal order: every first-base
/// position precedes every second-base position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChainCursor<CA, CB> {
    First(CA),
    Second(CB),
}

pub(crate) fn new<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
{
    Chain { a, b }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
{
    type Value = A::Value;
    type Cursor = ChainCursor<A::Cursor, B::Cursor>;

    const IS_INFINITE: bool = A::IS_INFINITE || B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        let ca = self.a.first();

        if self.a.is_last(&ca) {
            ChainCursor::Second(self.b.first())
        } else {
            ChainCursor::First(ca)
        }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        match cur {
            ChainCursor::First(_) => false,
            ChainCursor::Second(cb) => self.b.is_last(cb),
        }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        match cur {
            ChainCursor::First(ca) => {
                self.a.inc(ca);

                if self.a.is_last(ca) {
                    *cur = ChainCursor::Second(self.b.first());
                }
            }
            ChainCursor::Second(cb) => self.b.inc(cb),
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
        match cur {
            ChainCursor::First(ca) => self.a.read_at(ca),
            ChainCursor::Second(cb) => self.b.read_at(cb),
        }
    }

    fn for_each_while<G>(&mut self, mut g: G) -> Self::Cursor
    where
        G: FnMut(&Self::Value) -> bool,
    {
        let ca = self.a.for_each_while(|value| g(value));

        if !self.a.is_last(&ca) {
            return ChainCursor::First(ca);
        }

        ChainCursor::Second(self.b.for_each_while(g))
    }

    fn size_hint(&self) -> Option<usize> {
        match (self.a.size_hint(), self.b.size_hint()) {
            (Some(x), Some(y)) => Some(x + y),
            _ => None,
        }
    }
}

impl<A, B> Multipass for Chain<A, B>
where
    A: Multipass,
    B: Multipass<Value = A::Value>,
{
}

impl<A, B> Bidirectional for Chain<A, B>
where
    A: Bidirectional + Bounded,
    B: Bidirectional<Value = A::Value>,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        match cur {
            ChainCursor::First(ca) => self.a.dec(ca),
            ChainCursor::Second(cb) => {
                if *cb == self.b.first() {
                    // precondition: the first base is nonempty
                    let mut ca = self.a.last();
                    self.a.dec(&mut ca);

                    *cur = ChainCursor::First(ca);
                } else {
                    self.b.dec(cb);
                }
            }
        }
    }
}

impl<A, B> RandomAccess for Chain<A, B>
where
    A: RandomAccess + Bounded + ExactSize,
    B: RandomAccess<Value = A::Value> + ExactSize,
    A::Cursor: Ord,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let split = self.a.size();
        let total = num::add(split, self.b.size());

        let position = match cur {
            ChainCursor::First(ca) => {
                let first = self.a.first();
                self.a.distance(&first, ca)
            }
            ChainCursor::Second(cb) => {
                let first = self.b.first();
                num::add(split, self.b.distance(&first, cb))
            }
        };

        let target = num::add(position, offset);

        runtime_check!(target >= 0 && target <= total, "jump outside of chain");

        *cur = if target < split {
            let mut ca = self.a.first();
            self.a.inc_by(&mut ca, target);

            ChainCursor::First(ca)
        } else {
            let mut cb = self.b.first();
            self.b.inc_by(&mut cb, num::sub(target, split));

            ChainCursor::Second(cb)
        };
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let split = self.a.size();

        let position = |this: &mut Self, cur: &Self::Cursor| match cur {
            ChainCursor::First(ca) => {
                let first = this.a.first();
                this.a.distance(&first, ca)
            }
            ChainCursor::Second(cb) => {
                let first = this.b.first();
                num::add(split, this.b.distance(&first, cb))
            }
        };

        let from = position(self, from);
        let to = position(self, to);

        num::sub(to, from)
    }
}

impl<A, B> Bounded for Chain<A, B>
where
    A: Sequence,
    B: Bounded<Value = A::Value>,
{
    fn last(&mut self) -> Self::Cursor {
        ChainCursor::Second(self.b.last())
    }
}

impl<A, B> ExactSize for Chain<A, B>
where
    A: ExactSize,
    B: ExactSize<Value = A::Value>,
{
    fn size(&self) -> Distance {
        num::add(self.a.size(), self.b.size())
    }
}

impl<A, B> MutableSequence for Chain<A, B>
where
    A: MutableSequence,
    B: MutableSequence<Value = A::Value>,
{
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut Self::Value {
        match cur {
            ChainCursor::First(ca) => self.a.value_at_mut(ca),
            ChainCursor::Second(cb) => self.b.value_at_mut(cb),
        }
    }

    fn swap_at(&mut self, x: &Self::Cursor, y: &Self::Cursor) {
        match (x, y) {
            (ChainCursor::First(i), ChainCursor::First(j)) => self.a.swap_at(i, j),
            (ChainCursor::Second(i), ChainCursor::Second(j)) => self.b.swap_at(i, j),
            (ChainCursor::First(i), ChainCursor::Second(j))
            | (ChainCursor::Second(j), ChainCursor::First(i)) => {
                core::mem::swap(self.a.value_at_mut(i), self.b.value_at_mut(j));
            }
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_chain_concatenates() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2][..]).chain(&[3][..]).map(|x| *x).to();

    assert!(v == vec![1, 2, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_chain_skips_an_empty_head() {
    use crate::Pipe;

    let head: &[i32] = &[];

    let v: Vec<i32> = head.chain(&[7, 8][..]).map(|x| *x).to();
    assert!(v == vec![7, 8]);
}

#[test]
fn test_chain_random_access() {
    use crate::Sequence;
    use crate::seq::RandomAccess;

    let mut c = new(&[1, 2][..], &[3, 4, 5][..]);

    let mut cur = c.first();
    c.inc_by(&mut cur, 3);
    assert!(*c.read_at(&cur) == 4);

    c.inc_by(&mut cur, -3);
    assert!(*c.read_at(&cur) == 1);
}
