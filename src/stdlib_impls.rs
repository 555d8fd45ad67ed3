//! Protocol implementations for the stdlib containers.
//!
//! __Requires the `collections` feature.__
//!
//! * `Vec<T>`, `Box<[T]>` — owning contiguous sequences with write
//!   access;
//! * `&Vec<T>` — a cheap shared view (handy as the base of the
//!   sub-sequence adaptors, which clone their base per slice);
//! * `VecDeque<T>` — random-access and writable but *not* contiguous:
//!   the resident example that the tier lattice has a level between
//!   "indexable" and "one memory block".
//!
//! ```
//! use lazy_seq::Pipe;
//!
//! let words = vec!["lazy", "sequence", "pipeline"];
//!
//! let lengths: Vec<usize> = (&words).map(|w| w.len()).to();
//! assert!(lengths == vec![4, 8, 8]);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, Contiguous, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

#[inline]
#[track_caller]
fn checked_index(len: usize, cur: Distance) -> usize {
    runtime_check!(
        cur >= 0 && (cur as usize) < len,
        "container cursor out of bounds"
    );

    cur as usize
}

// Shared by every container here: an index cursor over `self.len()`
// elements, with `Index<usize>` supplying the reads. The trailing
// `contiguous` marker adds the `as_contiguous` override, which the
// deque must not have.
macro_rules! container_sequence {
    ( @as_contiguous contiguous ) => {
        fn as_contiguous(&self) -> Option<&[T]> {
            Some(&self[..])
        }
    };

    ( $( $seq:ty = [ $($generics:tt)* ] $(: $contig:ident)? ),* $(,)? ) => { $(
        impl< $($generics)* > Sequence for $seq {
            type Value = T;
            type Cursor = Distance;

            fn first(&mut self) -> Distance {
                0
            }

            fn is_last(&mut self, cur: &Distance) -> bool {
                *cur >= num::dist(self.len())
            }

            fn inc(&mut self, cur: &mut Distance) {
                runtime_check!(
                    *cur >= 0 && (*cur as usize) < self.len(),
                    "inc past the end of a container"
                );

                *cur = num::add(*cur, 1);
            }

            fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a T {
                &self[checked_index(self.len(), *cur)]
            }

            fn read_at_unchecked<'a>(&'a self, cur: &'a Distance) -> &'a T {
                &self[*cur as usize]
            }

            fn size_hint(&self) -> Option<usize> {
                Some(self.len())
            }

            $( container_sequence!(@as_contiguous $contig); )?
        }

        impl< $($generics)* > Multipass for $seq {}

        impl< $($generics)* > Bidirectional for $seq {
            fn dec(&mut self, cur: &mut Distance) {
                runtime_check!(
                    *cur > 0 && *cur <= num::dist(self.len()),
                    "dec before the start of a container"
                );

                *cur = num::sub(*cur, 1);
            }
        }

        impl< $($generics)* > RandomAccess for $seq {
            fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
                let target = num::add(*cur, offset);

                runtime_check!(
                    target >= 0 && target <= num::dist(self.len()),
                    "jump outside of a container"
                );

                *cur = target;
            }

            fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
                num::sub(*to, *from)
            }
        }

        impl< $($generics)* > Bounded for $seq {
            fn last(&mut self) -> Distance {
                num::dist(self.len())
            }
        }

        impl< $($generics)* > ExactSize for $seq {
            fn size(&self) -> Distance {
                num::dist(self.len())
            }
        }
    )* };
}

container_sequence! {
    Vec<T> = [T]: contiguous,
    &Vec<T> = [T]: contiguous,
    Box<[T]> = [T]: contiguous,
    VecDeque<T> = [T],
    &VecDeque<T> = [T],
}

macro_rules! contiguous_container {
    ( $( $seq:ty = [ $($generics:tt)* ] ),* $(,)? ) => { $(
        impl< $($generics)* > Contiguous for $seq {
            fn as_slice(&self) -> &[T] {
                &self[..]
            }
        }
    )* };
}

contiguous_container! {
    Vec<T> = [T],
    &Vec<T> = [T],
    Box<[T]> = [T],
}

impl<T> MutableSequence for Vec<T> {
    fn value_at_mut(&mut self, cur: &Distance) -> &mut T {
        let i = checked_index(self.len(), *cur);

        &mut self[i]
    }

    fn swap_at(&mut self, a: &Distance, b: &Distance) {
        let i = checked_index(self.len(), *a);
        let j = checked_index(self.len(), *b);

        self.as_mut_slice().swap(i, j);
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut self[..])
    }
}

impl<T> MutableSequence for Box<[T]> {
    fn value_at_mut(&mut self, cur: &Distance) -> &mut T {
        let i = checked_index(self.len(), *cur);

        &mut self[i]
    }

    fn swap_at(&mut self, a: &Distance, b: &Distance) {
        let i = checked_index(self.len(), *a);
        let j = checked_index(self.len(), *b);

        (**self).swap(i, j);
    }

    fn as_contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut self[..])
    }
}

impl<T> MutableSequence for VecDeque<T> {
    fn value_at_mut(&mut self, cur: &Distance) -> &mut T {
        let i = checked_index(self.len(), *cur);

        &mut self[i]
    }

    fn swap_at(&mut self, a: &Distance, b: &Distance) {
        let i = checked_index(self.len(), *a);
        let j = checked_index(self.len(), *b);

        self.swap(i, j);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_vec_is_contiguous() {
    use crate::Sequence;

    let v = vec![1, 2, 3];

    assert!(v.as_contiguous() == Some(&[1, 2, 3][..]));
}

#[cfg(feature = "std")]
#[test]
fn test_deque_is_not_contiguous() {
    use crate::Sequence;

    let mut d: VecDeque<i32> = VecDeque::new();
    d.push_back(2);
    d.push_front(1);

    assert!(d.as_contiguous().is_none());
    assert!(*d.read_at(&0) == 1);
}

#[cfg(feature = "std")]
#[test]
fn test_vec_pipeline() {
    use crate::Pipe;

    let v = vec![1, 2, 3, 4, 5];

    let odds: Vec<i32> = (&v).filter(|x| *x % 2 == 1).map(|x| *x).to();
    assert!(odds == vec![1, 3, 5]);
}
