use core::marker::PhantomData;

use crate::fault::{fault, runtime_check};
use crate::num::Distance;
use crate::seq::{
    Bidirectional, Bounded, Contiguous, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

/// The sequence with no elements. See [`empty`].
#[derive(Clone, Copy, Debug)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

/// A zero-length contiguous sequence of `T`.
///
/// Reading from it is a precondition violation; its one cursor is both
/// the first and the past-the-end position.
///
/// ```
/// use lazy_seq::{empty, Pipe};
///
/// assert!(empty::<i32>().count() == 0);
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Value = T;
    type Cursor = ();

    fn first(&mut self) -> () {}

    fn is_last(&mut self, _cur: &()) -> bool {
        true
    }

    fn inc(&mut self, _cur: &mut ()) {
        fault("inc past the end of empty");
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a T {
        fault("read_at on empty");
    }

    fn as_contiguous(&self) -> Option<&[T]> {
        Some(&[])
    }

    fn size_hint(&self) -> Option<usize> {
        Some(0)
    }
}

impl<T> Multipass for Empty<T> {}

impl<T> Bidirectional for Empty<T> {
    fn dec(&mut self, _cur: &mut ()) {
        fault("dec before the start of empty");
    }
}

impl<T> RandomAccess for Empty<T> {
    fn inc_by(&mut self, _cur: &mut (), offset: Distance) {
        runtime_check!(offset == 0, "jump outside of empty");
    }

    fn distance(&mut self, _from: &(), _to: &()) -> Distance {
        0
    }
}

impl<T> Contiguous for Empty<T> {
    fn as_slice(&self) -> &[T] {
        &[]
    }
}

impl<T> Bounded for Empty<T> {
    fn last(&mut self) -> () {}
}

impl<T> ExactSize for Empty<T> {
    fn size(&self) -> Distance {
        0
    }
}

impl<T> MutableSequence for Empty<T> {
    fn value_at_mut(&mut self, _cur: &()) -> &mut T {
        fault("write on empty");
    }

    fn swap_at(&mut self, _a: &(), _b: &()) {
        fault("swap on empty");
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut [])
    }
}

#[test]
fn test_empty_is_empty() {
    let mut e = empty::<u8>();

    let cur = e.first();
    assert!(e.is_last(&cur));
    assert!(e.size() == 0);
    assert!(e.as_slice().is_empty());
}
