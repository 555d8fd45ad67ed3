use crate::fault::{debug_check, runtime_check};
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, Contiguous, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

// The slice-family implementations share these helpers; the cursor of
// every one of them is a signed index into the storage.

#[inline]
#[track_caller]
fn checked_index(len: usize, cur: Distance) -> usize {
    runtime_check!(
        cur >= 0 && (cur as usize) < len,
        "slice cursor out of bounds"
    );

    cur as usize
}

#[inline]
#[track_caller]
fn check_inc(len: usize, cur: &mut Distance) {
    runtime_check!(
        *cur >= 0 && (*cur as usize) < len,
        "inc past the end of a slice"
    );

    *cur = num::add(*cur, 1);
}

#[inline]
#[track_caller]
fn check_dec(len: usize, cur: &mut Distance) {
    runtime_check!(
        *cur > 0 && *cur <= num::dist(len),
        "dec before the start of a slice"
    );

    *cur = num::sub(*cur, 1);
}

#[inline]
#[track_caller]
fn check_jump(len: usize, cur: &mut Distance, offset: Distance) {
    let target = num::add(*cur, offset);

    runtime_check!(
        target >= 0 && target <= num::dist(len),
        "jump outside of a slice"
    );

    *cur = target;
}

macro_rules! slice_sequence {
    () => {
        type Value = T;
        type Cursor = Distance;

        fn first(&mut self) -> Distance {
            0
        }

        fn is_last(&mut self, cur: &Distance) -> bool {
            *cur >= num::dist(self.len())
        }

        fn inc(&mut self, cur: &mut Distance) {
            check_inc(self.len(), cur);
        }

        fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a T {
            &self[checked_index(self.len(), *cur)]
        }

        fn read_at_unchecked<'a>(&'a self, cur: &'a Distance) -> &'a T {
            // precondition only in release; debug builds still assert
            debug_check!(
                *cur >= 0 && (*cur as usize) < self.len(),
                "slice cursor out of bounds"
            );

            &self[*cur as usize]
        }

        fn as_contiguous(&self) -> Option<&[T]> {
            Some(self)
        }

        fn size_hint(&self) -> Option<usize> {
            Some(self.len())
        }
    };
}

macro_rules! slice_extensions {
    ( $seq:ty ) => {
        impl<T> Multipass for $seq {}

        impl<T> Bidirectional for $seq {
            fn dec(&mut self, cur: &mut Distance) {
                check_dec(self.len(), cur);
            }
        }

        impl<T> RandomAccess for $seq {
            fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
                check_jump(self.len(), cur, offset);
            }

            fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
                num::sub(*to, *from)
            }
        }

        impl<T> Contiguous for $seq {
            fn as_slice(&self) -> &[T] {
                self
            }
        }

        impl<T> Bounded for $seq {
            fn last(&mut self) -> Distance {
                num::dist(self.len())
            }
        }

        impl<T> ExactSize for $seq {
            fn size(&self) -> Distance {
                num::dist(self.len())
            }
        }
    };
}

impl<T> Sequence for &[T] {
    slice_sequence!();
}

slice_extensions!(&[T]);

impl<T> Sequence for &mut [T] {
    slice_sequence!();
}

slice_extensions!(&mut [T]);

impl<T> MutableSequence for &mut [T] {
    fn value_at_mut(&mut self, cur: &Distance) -> &mut T {
        let i = checked_index(self.len(), *cur);

        &mut self[i]
    }

    fn swap_at(&mut self, a: &Distance, b: &Distance) {
        let i = checked_index(self.len(), *a);
        let j = checked_index(self.len(), *b);

        self.swap(i, j);
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

macro_rules! array_extensions {
    ( $seq:ty ) => {
        impl<T, const N: usize> Multipass for $seq {}

        impl<T, const N: usize> Bidirectional for $seq {
            fn dec(&mut self, cur: &mut Distance) {
                check_dec(N, cur);
            }
        }

        impl<T, const N: usize> RandomAccess for $seq {
            fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
                check_jump(N, cur, offset);
            }

            fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
                num::sub(*to, *from)
            }
        }

        impl<T, const N: usize> Contiguous for $seq {
            fn as_slice(&self) -> &[T] {
                &self[..]
            }
        }

        impl<T, const N: usize> Bounded for $seq {
            fn last(&mut self) -> Distance {
                num::dist(N)
            }
        }

        impl<T, const N: usize> ExactSize for $seq {
            fn size(&self) -> Distance {
                num::dist(N)
            }
        }
    };
}

macro_rules! array_sequence {
    () => {
        type Value = T;
        type Cursor = Distance;

        fn first(&mut self) -> Distance {
            0
        }

        fn is_last(&mut self, cur: &Distance) -> bool {
            *cur >= num::dist(N)
        }

        fn inc(&mut self, cur: &mut Distance) {
            check_inc(N, cur);
        }

        fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a T {
            &self[checked_index(N, *cur)]
        }

        fn read_at_unchecked<'a>(&'a self, cur: &'a Distance) -> &'a T {
            debug_check!(
                *cur >= 0 && (*cur as usize) < N,
                "array cursor out of bounds"
            );

            &self[*cur as usize]
        }

        fn as_contiguous(&self) -> Option<&[T]> {
            Some(&self[..])
        }

        fn size_hint(&self) -> Option<usize> {
            Some(N)
        }
    };
}

impl<T, const N: usize> Sequence for [T; N] {
    array_sequence!();
}

array_extensions!([T; N]);

impl<T, const N: usize> MutableSequence for [T; N] {
    fn value_at_mut(&mut self, cur: &Distance) -> &mut T {
        let i = checked_index(N, *cur);

        &mut self[i]
    }

    fn swap_at(&mut self, a: &Distance, b: &Distance) {
        let i = checked_index(N, *a);
        let j = checked_index(N, *b);

        self.swap(i, j);
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut self[..])
    }
}

impl<T, const N: usize> Sequence for &[T; N] {
    array_sequence!();
}

array_extensions!(&[T; N]);

#[test]
fn test_slice_protocol() {
    use crate::Sequence;

    let mut s = &[10, 20, 30][..];

    let mut cur = Sequence::first(&mut s);
    assert!(!s.is_last(&cur));
    assert!(*s.read_at(&cur) == 10);

    s.inc(&mut cur);
    s.inc(&mut cur);
    assert!(*s.read_at(&cur) == 30);

    s.inc(&mut cur);
    assert!(s.is_last(&cur));
}

#[test]
fn test_slice_random_access() {
    use crate::{Bounded, RandomAccess, Sequence};

    let mut s = &[1, 2, 3, 4, 5][..];

    let mut cur = Sequence::first(&mut s);
    s.inc_by(&mut cur, 4);
    assert!(*s.read_at(&cur) == 5);

    s.inc_by(&mut cur, -4);
    assert!(*s.read_at(&cur) == 1);

    let first = Sequence::first(&mut s);
    let last = Bounded::last(&mut s);
    assert!(s.distance(&first, &last) == 5);
    assert!(s.distance(&last, &first) == -5);
}

#[test]
#[should_panic]
#[cfg(not(feature = "terminate"))]
fn test_slice_read_is_checked() {
    use crate::{Bounded, Sequence};

    let mut s = &[1, 2, 3][..];

    let end = Bounded::last(&mut s);
    let _ = s.read_at(&end);
}

#[test]
fn test_mut_slice_writes() {
    use crate::{MutableSequence, Sequence};

    let mut data = [1, 2, 3];
    let mut s = &mut data[..];

    let mut cur = s.first();
    s.write_at(&cur, 7);
    s.inc(&mut cur);

    let other = s.first();
    s.swap_at(&cur, &other);

    assert!(data == [2, 7, 3]);
}
