use core::cmp::Ordering;

use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    cached, Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// Every pair of elements from two sequences, in row-major order. See
/// [`Pipe::cartesian_product`](crate::Pipe::cartesian_product).
///
/// `inc` is a little-endian odometer: the second axis spins, and
/// wrapping it carries into the first. Both bases must be multipass —
/// the second is restarted once per element of the first, the first is
/// re-read once per element of the second.
#[derive(Clone, Debug)]
pub struct CartesianProduct<A, B> {
    a: A,
    b: B,
}

/// Like [`CartesianProduct`] but passes each pair through a
/// projection. See
/// [`Pipe::cartesian_map`](crate::Pipe::cartesian_map).
#[derive(Clone, Debug)]
pub struct CartesianMap<A, B, F> {
    a: A,
    b: B,
    f: F,
}

/// `N` nested copies of one sequence, odometer order. See
/// [`Pipe::cartesian_power`](crate::Pipe::cartesian_power).
#[derive(Clone, Debug)]
pub struct CartesianPower<B, const N: usize> {
    base: B,
}

/// Cursor of the binary cartesian adaptors.
///
/// `ended` marks the past-the-end cursor of a product whose second
/// axis is empty: such a product has no positions at all, and the
/// first axis (which may be infinite) must not be walked to find out.
#[derive(Clone, Debug)]
pub struct CartesianCursor<CA, CB, T> {
    a: CA,
    b: CB,
    ended: bool,
    slot: Option<T>,
}

/// Cursor of [`CartesianPower`].
#[derive(Clone, Debug)]
pub struct PowerCursor<C, T, const N: usize> {
    axes: [C; N],
    slot: Option<T>,
}

impl<CA: PartialEq, CB: PartialEq, T> PartialEq for CartesianCursor<CA, CB, T> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl<CA: Eq, CB: Eq, T> Eq for CartesianCursor<CA, CB, T> {}

impl<CA: Ord, CB: Ord, T> PartialOrd for CartesianCursor<CA, CB, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<CA: Ord, CB: Ord, T> Ord for CartesianCursor<CA, CB, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a).then_with(|| self.b.cmp(&other.b))
    }
}

impl<C: PartialEq, T, const N: usize> PartialEq for PowerCursor<C, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.axes == other.axes
    }
}

impl<C: Eq, T, const N: usize> Eq for PowerCursor<C, T, N> {}

impl<C: Ord, T, const N: usize> PartialOrd for PowerCursor<C, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord, T, const N: usize> Ord for PowerCursor<C, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.axes.cmp(&other.axes)
    }
}

pub(crate) fn new<A, B>(a: A, b: B) -> CartesianProduct<A, B>
where
    A: Multipass,
    B: Multipass,
{
    CartesianProduct { a, b }
}

pub(crate) fn new_map<A, B, F, R>(a: A, b: B, f: F) -> CartesianMap<A, B, F>
where
    A: Multipass,
    B: Multipass,
    F: FnMut(&A::Value, &B::Value) -> R,
{
    CartesianMap { a, b, f }
}

pub(crate) fn new_power<B, const N: usize>(base: B) -> CartesianPower<B, N>
where
    B: Multipass,
{
    runtime_check!(N > 0, "cartesian_power of zero sequences");

    CartesianPower { base }
}

macro_rules! cartesian_protocol {
    () => {
        fn first(&mut self) -> Self::Cursor {
            let a = self.a.first();
            let b = self.b.first();

            if self.b.is_last(&b) {
                // an empty second axis empties the whole product; the
                // first axis may be infinite, so mark the cursor ended
                // instead of walking `a` anywhere
                return CartesianCursor {
                    a,
                    b,
                    ended: true,
                    slot: None,
                };
            }

            let slot = self.fill(&a, &b);

            CartesianCursor {
                a,
                b,
                ended: false,
                slot,
            }
        }

        fn is_last(&mut self, cur: &Self::Cursor) -> bool {
            cur.ended || self.a.is_last(&cur.a)
        }

        fn inc(&mut self, cur: &mut Self::Cursor) {
            self.b.inc(&mut cur.b);

            if self.b.is_last(&cur.b) {
                cur.b = self.b.first();
                self.a.inc(&mut cur.a);
            }

            cur.slot = self.fill(&cur.a, &cur.b);
        }

        fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
            cached(&cur.slot)
        }

        fn size_hint(&self) -> Option<usize> {
            match (self.a.size_hint(), self.b.size_hint()) {
                (Some(x), Some(y)) => Some(x * y),
                _ => None,
            }
        }
    };
}

macro_rules! cartesian_extensions {
    ( $name:ident [ $($extra:tt)* ] [ $($args:tt)* ] [ $($bounds:tt)* ] ) => {
        impl<A, B, $($extra)*> Multipass for $name<A, B $(, $args)*>
        where
            A: Multipass,
            B: Multipass,
            $($bounds)*
        {
        }

        impl<A, B, $($extra)*> Bidirectional for $name<A, B $(, $args)*>
        where
            A: Bidirectional,
            B: Bidirectional + Bounded,
            $($bounds)*
        {
            fn dec(&mut self, cur: &mut Self::Cursor) {
                if cur.b == self.b.first() {
                    // precondition: not the first pair
                    cur.b = self.b.last();
                    self.a.dec(&mut cur.a);
                }

                self.b.dec(&mut cur.b);
                cur.slot = self.fill(&cur.a, &cur.b);
            }
        }

        impl<A, B, $($extra)*> RandomAccess for $name<A, B $(, $args)*>
        where
            A: RandomAccess + ExactSize,
            B: RandomAccess + Bounded + ExactSize,
            A::Cursor: Ord,
            B::Cursor: Ord,
            $($bounds)*
        {
            fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
                let inner = self.b.size();

                if inner == 0 {
                    // the product is empty: only the zero jump is legal
                    runtime_check!(offset == 0, "jump outside of cartesian_product");

                    return;
                }

                let first_a = self.a.first();
                let first_b = self.b.first();

                let position = num::add(
                    num::mul(self.a.distance(&first_a, &cur.a), inner),
                    self.b.distance(&first_b, &cur.b),
                );
                let target = num::add(position, offset);
                let total = num::mul(self.a.size(), inner);

                runtime_check!(
                    target >= 0 && target <= total,
                    "jump outside of cartesian_product"
                );

                cur.a = first_a;
                cur.b = first_b;
                self.a.inc_by(&mut cur.a, num::div(target, inner));
                self.b.inc_by(&mut cur.b, num::rem(target, inner));
                cur.slot = self.fill(&cur.a, &cur.b);
            }

            fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
                let inner = self.b.size();
                let first_a = self.a.first();
                let first_b = self.b.first();

                let from = num::add(
                    num::mul(self.a.distance(&first_a, &from.a), inner),
                    self.b.distance(&first_b, &from.b),
                );
                let to = num::add(
                    num::mul(self.a.distance(&first_a, &to.a), inner),
                    self.b.distance(&first_b, &to.b),
                );

                num::sub(to, from)
            }
        }

        impl<A, B, $($extra)*> Bounded for $name<A, B $(, $args)*>
        where
            A: Multipass + Bounded,
            B: Multipass,
            $($bounds)*
        {
            fn last(&mut self) -> Self::Cursor {
                let b = self.b.first();

                if self.b.is_last(&b) {
                    // agrees with `first()` on an empty product
                    return CartesianCursor {
                        a: self.a.first(),
                        b,
                        ended: true,
                        slot: None,
                    };
                }

                CartesianCursor {
                    a: self.a.last(),
                    b,
                    ended: false,
                    slot: None,
                }
            }
        }

        impl<A, B, $($extra)*> ExactSize for $name<A, B $(, $args)*>
        where
            A: Multipass + ExactSize,
            B: Multipass + ExactSize,
            $($bounds)*
        {
            fn size(&self) -> Distance {
                num::mul(self.a.size(), self.b.size())
            }
        }
    };
}

impl<A, B> CartesianProduct<A, B>
where
    A: Multipass,
    B: Multipass,
    A::Value: Clone,
    B::Value: Clone,
{
    fn fill(&mut self, a: &A::Cursor, b: &B::Cursor) -> Option<(A::Value, B::Value)> {
        if self.a.is_last(a) || self.b.is_last(b) {
            return None;
        }

        Some((self.a.read_at(a).clone(), self.b.read_at(b).clone()))
    }
}

impl<A, B> Sequence for CartesianProduct<A, B>
where
    A: Multipass,
    B: Multipass,
    A::Value: Clone,
    B::Value: Clone,
{
    type Value = (A::Value, B::Value);
    type Cursor = CartesianCursor<A::Cursor, B::Cursor, (A::Value, B::Value)>;

    const IS_INFINITE: bool = A::IS_INFINITE || B::IS_INFINITE;

    cartesian_protocol!();
}

impl<A, B, F, R> CartesianMap<A, B, F>
where
    A: Multipass,
    B: Multipass,
    F: FnMut(&A::Value, &B::Value) -> R,
{
    fn fill(&mut self, a: &A::Cursor, b: &B::Cursor) -> Option<R> {
        if self.a.is_last(a) || self.b.is_last(b) {
            return None;
        }

        let ea = self.a.read_at(a);
        let eb = self.b.read_at(b);

        Some((self.f)(ea, eb))
    }
}

impl<A, B, F, R> Sequence for CartesianMap<A, B, F>
where
    A: Multipass,
    B: Multipass,
    F: FnMut(&A::Value, &B::Value) -> R,
    R: Clone,
{
    type Value = R;
    type Cursor = CartesianCursor<A::Cursor, B::Cursor, R>;

    const IS_INFINITE: bool = A::IS_INFINITE || B::IS_INFINITE;

    cartesian_protocol!();
}

cartesian_extensions!(CartesianProduct [] [] [ A::Value: Clone, B::Value: Clone, ]);
cartesian_extensions!(CartesianMap [F, R] [F] [ F: FnMut(&A::Value, &B::Value) -> R, R: Clone, ]);

impl<B, const N: usize> CartesianPower<B, N>
where
    B: Multipass,
    B::Value: Clone,
{
    fn fill(&mut self, axes: &[B::Cursor; N]) -> Option<[B::Value; N]> {
        if self.base.is_last(&axes[0]) {
            return None;
        }

        Some(core::array::from_fn(|i| {
            self.base.read_at(&axes[i]).clone()
        }))
    }
}

impl<B, const N: usize> Sequence for CartesianPower<B, N>
where
    B: Multipass,
    B::Value: Clone,
{
    type Value = [B::Value; N];
    type Cursor = PowerCursor<B::Cursor, [B::Value; N], N>;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        let axes: [B::Cursor; N] = core::array::from_fn(|_| self.base.first());
        let slot = self.fill(&axes);

        PowerCursor { axes, slot }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.axes[0])
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        // little-endian odometer: spin the last axis, carry leftward
        let mut i = N - 1;

        loop {
            self.base.inc(&mut cur.axes[i]);

            if !self.base.is_last(&cur.axes[i]) {
                break;
            }

            if i == 0 {
                // the odometer wrapped: axis 0 stays at its end
                break;
            }

            cur.axes[i] = self.base.first();
            i -= 1;
        }

        cur.slot = self.fill(&cur.axes);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a [B::Value; N] {
        cached(&cur.slot)
    }
}

impl<B, const N: usize> Multipass for CartesianPower<B, N>
where
    B: Multipass,
    B::Value: Clone,
{
}

impl<B, const N: usize> Bidirectional for CartesianPower<B, N>
where
    B: Bidirectional + Bounded,
    B::Value: Clone,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        // reverse odometer: wrap trailing first-position axes to their
        // last element, then step the next axis back
        let mut i = N - 1;

        loop {
            if cur.axes[i] != self.base.first() {
                self.base.dec(&mut cur.axes[i]);
                break;
            }

            // precondition: not the first tuple, so some axis can move
            cur.axes[i] = self.base.last();
            self.base.dec(&mut cur.axes[i]);

            debug_assert!(i > 0);
            i -= 1;
        }

        cur.slot = self.fill(&cur.axes);
    }
}

impl<B, const N: usize> RandomAccess for CartesianPower<B, N>
where
    B: RandomAccess + Bounded + ExactSize,
    B::Value: Clone,
    B::Cursor: Ord,
{
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let n = self.base.size();
        let first = self.base.first();

        let mut position: Distance = 0;

        for i in 0..N {
            position = num::add(
                num::mul(position, n),
                self.base.distance(&first, &cur.axes[i]),
            );
        }

        let target = num::add(position, offset);
        let total = self.size();

        runtime_check!(
            target >= 0 && target <= total,
            "jump outside of cartesian_power"
        );

        if target == total {
            *cur = self.last();

            return;
        }

        let mut rest = target;

        for i in (0..N).rev() {
            cur.axes[i] = self.base.first();
            self.base.inc_by(&mut cur.axes[i], num::rem(rest, n));
            rest = num::div(rest, n);
        }

        cur.slot = self.fill(&cur.axes);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let n = self.base.size();
        let first = self.base.first();

        let mut df: Distance = 0;
        let mut dt: Distance = 0;

        for i in 0..N {
            df = num::add(num::mul(df, n), self.base.distance(&first, &from.axes[i]));
            dt = num::add(num::mul(dt, n), self.base.distance(&first, &to.axes[i]));
        }

        num::sub(dt, df)
    }
}

impl<B, const N: usize> Bounded for CartesianPower<B, N>
where
    B: Multipass + Bounded,
    B::Value: Clone,
{
    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();
        let first = self.base.first();

        let axes: [B::Cursor; N] =
            core::array::from_fn(|i| if i == 0 { end.clone() } else { first.clone() });

        PowerCursor { axes, slot: None }
    }
}

impl<B, const N: usize> ExactSize for CartesianPower<B, N>
where
    B: Multipass + ExactSize,
    B::Value: Clone,
{
    fn size(&self) -> Distance {
        let n = self.base.size();
        let mut total: Distance = 1;

        for _ in 0..N {
            total = num::mul(total, n);
        }

        total
    }
}

#[cfg(feature = "std")]
#[test]
fn test_cartesian_product_row_major() {
    use crate::Pipe;

    let pairs: Vec<(i32, char)> = (&[0, 1][..]).cartesian_product(&['a', 'b', 'c'][..]).to();

    assert!(
        pairs
            == vec![
                (0, 'a'),
                (0, 'b'),
                (0, 'c'),
                (1, 'a'),
                (1, 'b'),
                (1, 'c'),
            ]
    );
}

#[test]
fn test_cartesian_product_size() {
    use crate::{ExactSize, Pipe};

    let p = (&[1, 2, 3][..]).cartesian_product(&[4, 5][..]);

    assert!(p.size() == 6);
}

#[cfg(feature = "std")]
#[test]
fn test_cartesian_map_multiplies() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2][..]).cartesian_map(&[10, 100][..], |a, b| a * b).to();

    assert!(v == vec![10, 100, 20, 200]);
}

#[cfg(feature = "std")]
#[test]
fn test_cartesian_power_tuples() {
    use crate::Pipe;

    let v: Vec<[u8; 2]> = (&[0u8, 1][..]).cartesian_power::<2>().to();

    assert!(v == vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
}

#[test]
fn test_cartesian_product_with_empty_axis() {
    use crate::Pipe;

    let empty: &[char] = &[];

    assert!((&[1, 2][..]).cartesian_product(empty).count() == 0);
}

#[test]
fn test_cartesian_product_infinite_by_empty_terminates() {
    use crate::{empty, iota, Pipe, Sequence};

    // an empty second axis must end the product without ever walking
    // the (here infinite) first axis
    let mut product = iota().cartesian_product(empty::<i32>());

    let cur = product.first();
    assert!(product.is_last(&cur));
    assert!(iota().cartesian_product(empty::<i32>()).count() == 0);
}

#[test]
fn test_cartesian_product_empty_axis_bounds_agree() {
    use crate::{Bounded, Sequence};

    let empty: &[char] = &[];
    let mut product = new(&[1, 2][..], empty);

    let first = product.first();
    let last = product.last();
    assert!(first == last);
}
