//! Protocol implementations for core datatypes.
//!
//! The following sequences come built in:
//!
//! * `&[T]` — a read-only contiguous view; the cursor is a signed index;
//! * `&mut [T]` — the same view with write access
//!   ([`MutableSequence`](crate::MutableSequence));
//! * `[T; N]` and `&[T; N]` — arrays, owning and borrowed;
//! * `&mut S` for any sequence `S` — the non-owning passthrough that
//!   lets a pipeline borrow a source instead of consuming it.
//!
//! All bounds checks fault through the [`fault`](crate::fault) hook;
//! there are no silent out-of-range reads.
//!
//! ```
//! use lazy_seq::Pipe;
//!
//! let primes = [2, 3, 5, 7, 11];
//!
//! let sum: i32 = (&primes[..]).map(|x| x * x).sum();
//! assert!(sum == 4 + 9 + 25 + 49 + 121);
//! ```

mod slice;

use crate::num::Distance;
use crate::seq::{
    Bidirectional, Bounded, Contiguous, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

/// The non-owning passthrough: a `&mut S` is a sequence exactly like
/// `S`, at every tier `S` claims.
impl<S: Sequence> Sequence for &mut S {
    type Value = S::Value;
    type Cursor = S::Cursor;

    const IS_INFINITE: bool = S::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        (**self).first()
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        (**self).is_last(cur)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        (**self).inc(cur)
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
        (**self).read_at(cur)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
        (**self).read_at_unchecked(cur)
    }

    fn move_at(&mut self, cur: &Self::Cursor) -> Self::Value
    where
        Self::Value: Clone,
    {
        (**self).move_at(cur)
    }

    fn for_each_while<F>(&mut self, f: F) -> Self::Cursor
    where
        F: FnMut(&Self::Value) -> bool,
    {
        (**self).for_each_while(f)
    }

    fn as_contiguous(&self) -> Option<&[Self::Value]> {
        (**self).as_contiguous()
    }

    fn size_hint(&self) -> Option<usize> {
        (**self).size_hint()
    }
}

impl<S: Multipass> Multipass for &mut S {}

impl<S: Bidirectional> Bidirectional for &mut S {
    fn dec(&mut self, cur: &mut Self::Cursor) {
        (**self).dec(cur)
    }
}

impl<S: RandomAccess> RandomAccess for &mut S
where
    S::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        (**self).inc_by(cur, offset)
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        (**self).distance(from, to)
    }
}

impl<S: Contiguous> Contiguous for &mut S
where
    S::Cursor: Ord,
{
    fn as_slice(&self) -> &[Self::Value] {
        (**self).as_slice()
    }
}

impl<S: Bounded> Bounded for &mut S {
    fn last(&mut self) -> Self::Cursor {
        (**self).last()
    }
}

impl<S: ExactSize> ExactSize for &mut S {
    fn size(&self) -> Distance {
        (**self).size()
    }
}

impl<S: MutableSequence> MutableSequence for &mut S {
    fn value_at_mut(&mut self, cur: &Self::Cursor) -> &mut Self::Value {
        (**self).value_at_mut(cur)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        (**self).swap_at(a, b)
    }

    fn write_at(&mut self, cur: &Self::Cursor, value: Self::Value) {
        (**self).write_at(cur, value)
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [Self::Value]> {
        (**self).as_contiguous_mut()
    }
}

#[test]
fn test_passthrough() {
    use crate::{ExactSize, Pipe};

    let mut data = [1, 2, 3, 4];
    let mut view = &mut data[..];

    let total: i32 = (&mut view).map(|x| x + 1).sum();
    assert!(total == 14);

    // the source is still usable afterwards
    assert!(view.size() == 4);
}
