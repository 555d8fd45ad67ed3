use core::cmp::Ordering;

use crate::fault::runtime_check;
use crate::seq::{cached, Multipass, Sequence};

/// Which base supplied the current element of a set operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
    Both,
}

/// Cursor of the set-operation adaptors: both base cursors, the side
/// the element came from, and the element itself.
#[derive(Clone)]
pub struct SetCursor<CA, CB, T> {
    a: CA,
    b: CB,
    side: Side,
    slot: Option<T>,
}

impl<CA: PartialEq, CB: PartialEq, T> PartialEq for SetCursor<CA, CB, T> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.side == other.side
    }
}

/// The default comparator of the `set_*` constructors.
pub(crate) fn ordering<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

macro_rules! set_adaptor {
    (
        $(#[$doc:meta])*
        $name:ident, $ctor:ident, $fill:ident
    ) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name<A, B, C> {
            a: A,
            b: B,
            cmp: C,
        }

        pub(crate) fn $ctor<A, B, C>(a: A, b: B, cmp: C) -> $name<A, B, C>
        where
            A: Sequence,
            B: Sequence<Value = A::Value>,
            A::Value: Clone,
            C: FnMut(&A::Value, &A::Value) -> Ordering,
        {
            $name { a, b, cmp }
        }

        impl<A, B, C> Sequence for $name<A, B, C>
        where
            A: Sequence,
            B: Sequence<Value = A::Value>,
            A::Value: Clone,
            C: FnMut(&A::Value, &A::Value) -> Ordering,
        {
            type Value = A::Value;
            type Cursor = SetCursor<A::Cursor, B::Cursor, A::Value>;

            fn first(&mut self) -> Self::Cursor {
                let mut cur = SetCursor {
                    a: self.a.first(),
                    b: self.b.first(),
                    side: Side::Both,
                    slot: None,
                };

                self.$fill(&mut cur);

                cur
            }

            fn is_last(&mut self, cur: &Self::Cursor) -> bool {
                cur.slot.is_none()
            }

            fn inc(&mut self, cur: &mut Self::Cursor) {
                runtime_check!(
                    cur.slot.is_some(),
                    concat!("inc past the end of ", stringify!($ctor))
                );

                match cur.side {
                    Side::A => self.a.inc(&mut cur.a),
                    Side::B => self.b.inc(&mut cur.b),
                    Side::Both => {
                        self.a.inc(&mut cur.a);
                        self.b.inc(&mut cur.b);
                    }
                }

                self.$fill(cur);
            }

            fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a A::Value {
                cached(&cur.slot)
            }
        }

        impl<A, B, C> Multipass for $name<A, B, C>
        where
            A: Multipass,
            B: Multipass<Value = A::Value>,
            A::Value: Clone,
            C: FnMut(&A::Value, &A::Value) -> Ordering,
        {
        }
    };
}

set_adaptor! {
    /// Merged elements of two sequences sorted by the same comparator,
    /// equal pairs collapsed to the first sequence's copy. See
    /// [`Pipe::set_union`](crate::Pipe::set_union).
    SetUnion, set_union, fill_union
}

set_adaptor! {
    /// The elements present in both sorted sequences. See
    /// [`Pipe::set_intersection`](crate::Pipe::set_intersection).
    SetIntersection, set_intersection, fill_intersection
}

set_adaptor! {
    /// The elements of the first sorted sequence absent from the
    /// second. See
    /// [`Pipe::set_difference`](crate::Pipe::set_difference).
    SetDifference, set_difference, fill_difference
}

set_adaptor! {
    /// The elements in exactly one of two sorted sequences. See
    /// [`Pipe::set_symmetric_difference`](crate::Pipe::set_symmetric_difference).
    SetSymmetricDifference, set_symmetric_difference, fill_symmetric_difference
}

impl<A, B, C> SetUnion<A, B, C>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
    A::Value: Clone,
    C: FnMut(&A::Value, &A::Value) -> Ordering,
{
    fn fill_union(&mut self, cur: &mut SetCursor<A::Cursor, B::Cursor, A::Value>) {
        let a_done = self.a.is_last(&cur.a);
        let b_done = self.b.is_last(&cur.b);

        (cur.side, cur.slot) = match (a_done, b_done) {
            (true, true) => (Side::Both, None),
            (false, true) => (Side::A, Some(self.a.read_at(&cur.a).clone())),
            (true, false) => (Side::B, Some(self.b.read_at(&cur.b).clone())),
            (false, false) => {
                let order = {
                    let ea = self.a.read_at(&cur.a);
                    let eb = self.b.read_at(&cur.b);

                    (self.cmp)(ea, eb)
                };

                match order {
                    Ordering::Less => (Side::A, Some(self.a.read_at(&cur.a).clone())),
                    Ordering::Greater => (Side::B, Some(self.b.read_at(&cur.b).clone())),
                    Ordering::Equal => (Side::Both, Some(self.a.read_at(&cur.a).clone())),
                }
            }
        };
    }
}

impl<A, B, C> SetIntersection<A, B, C>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
    A::Value: Clone,
    C: FnMut(&A::Value, &A::Value) -> Ordering,
{
    fn fill_intersection(&mut self, cur: &mut SetCursor<A::Cursor, B::Cursor, A::Value>) {
        loop {
            if self.a.is_last(&cur.a) || self.b.is_last(&cur.b) {
                cur.side = Side::Both;
                cur.slot = None;

                return;
            }

            let order = {
                let ea = self.a.read_at(&cur.a);
                let eb = self.b.read_at(&cur.b);

                (self.cmp)(ea, eb)
            };

            match order {
                Ordering::Less => self.a.inc(&mut cur.a),
                Ordering::Greater => self.b.inc(&mut cur.b),
                Ordering::Equal => {
                    cur.side = Side::Both;
                    cur.slot = Some(self.a.read_at(&cur.a).clone());

                    return;
                }
            }
        }
    }
}

impl<A, B, C> SetDifference<A, B, C>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
    A::Value: Clone,
    C: FnMut(&A::Value, &A::Value) -> Ordering,
{
    fn fill_difference(&mut self, cur: &mut SetCursor<A::Cursor, B::Cursor, A::Value>) {
        loop {
            if self.a.is_last(&cur.a) {
                cur.side = Side::Both;
                cur.slot = None;

                return;
            }

            if self.b.is_last(&cur.b) {
                cur.side = Side::A;
                cur.slot = Some(self.a.read_at(&cur.a).clone());

                return;
            }

            let order = {
                let ea = self.a.read_at(&cur.a);
                let eb = self.b.read_at(&cur.b);

                (self.cmp)(ea, eb)
            };

            match order {
                Ordering::Less => {
                    cur.side = Side::A;
                    cur.slot = Some(self.a.read_at(&cur.a).clone());

                    return;
                }
                Ordering::Greater => self.b.inc(&mut cur.b),
                Ordering::Equal => {
                    self.a.inc(&mut cur.a);
                    self.b.inc(&mut cur.b);
                }
            }
        }
    }
}

impl<A, B, C> SetSymmetricDifference<A, B, C>
where
    A: Sequence,
    B: Sequence<Value = A::Value>,
    A::Value: Clone,
    C: FnMut(&A::Value, &A::Value) -> Ordering,
{
    fn fill_symmetric_difference(
        &mut self,
        cur: &mut SetCursor<A::Cursor, B::Cursor, A::Value>,
    ) {
        loop {
            let a_done = self.a.is_last(&cur.a);
            let b_done = self.b.is_last(&cur.b);

            match (a_done, b_done) {
                (true, true) => {
                    cur.side = Side::Both;
                    cur.slot = None;

                    return;
                }
                (false, true) => {
                    cur.side = Side::A;
                    cur.slot = Some(self.a.read_at(&cur.a).clone());

                    return;
                }
                (true, false) => {
                    cur.side = Side::B;
                    cur.slot = Some(self.b.read_at(&cur.b).clone());

                    return;
                }
                (false, false) => {
                    let order = {
                        let ea = self.a.read_at(&cur.a);
                        let eb = self.b.read_at(&cur.b);

                        (self.cmp)(ea, eb)
                    };

                    match order {
                        Ordering::Less => {
                            cur.side = Side::A;
                            cur.slot = Some(self.a.read_at(&cur.a).clone());

                            return;
                        }
                        Ordering::Greater => {
                            cur.side = Side::B;
                            cur.slot = Some(self.b.read_at(&cur.b).clone());

                            return;
                        }
                        Ordering::Equal => {
                            self.a.inc(&mut cur.a);
                            self.b.inc(&mut cur.b);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_set_union_merges() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 3, 5][..]).set_union(&[2, 3, 6][..]).to();

    assert!(v == vec![1, 2, 3, 5, 6]);
}

#[cfg(feature = "std")]
#[test]
fn test_set_intersection() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 4, 6][..]).set_intersection(&[2, 3, 6][..]).to();

    assert!(v == vec![2, 6]);
}

#[cfg(feature = "std")]
#[test]
fn test_set_difference() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 3, 4][..]).set_difference(&[2, 4][..]).to();

    assert!(v == vec![1, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_set_symmetric_difference() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 5][..]).set_symmetric_difference(&[2, 3][..]).to();

    assert!(v == vec![1, 3, 5]);
}
