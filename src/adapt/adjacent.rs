use core::cmp::Ordering;

use crate::num::{self, Distance};
use crate::seq::{
    cached, Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// Sliding window of a compile-time width. See
/// [`Pipe::adjacent`](crate::Pipe::adjacent) and
/// [`Pipe::pairwise`](crate::Pipe::pairwise).
///
/// The cursor is an `N`-array of base cursors one step apart; the
/// element is the array of the `N` values under them. The sequence is
/// shorter than its base by `N - 1`.
#[derive(Clone, Debug)]
pub struct Adjacent<B, const N: usize> {
    base: B,
}

/// Like [`Adjacent`] but passes the window through a projection. See
/// [`Pipe::adjacent_map`](crate::Pipe::adjacent_map).
#[derive(Clone, Debug)]
pub struct AdjacentMap<B, F, const N: usize> {
    base: B,
    f: F,
}

/// Cursor of [`Adjacent`] and [`AdjacentMap`]: the window's base
/// cursors plus the materialized element.
#[derive(Clone, Debug)]
pub struct AdjacentCursor<C, T, const N: usize> {
    window: [C; N],
    slot: Option<T>,
}

/// Pairwise windows: [`Adjacent`] of width two.
pub type Pairwise<B> = Adjacent<B, 2>;

impl<C: PartialEq, T, const N: usize> PartialEq for AdjacentCursor<C, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.window == other.window
    }
}

impl<C: Eq, T, const N: usize> Eq for AdjacentCursor<C, T, N> {}

impl<C: Ord, T, const N: usize> PartialOrd for AdjacentCursor<C, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord, T, const N: usize> Ord for AdjacentCursor<C, T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.window.cmp(&other.window)
    }
}

pub(crate) fn new<B: Multipass, const N: usize>(base: B) -> Adjacent<B, N> {
    crate::fault::runtime_check!(N > 0, "adjacent window of width zero");

    Adjacent { base }
}

pub(crate) fn new_map<B, F, R, const N: usize>(base: B, f: F) -> AdjacentMap<B, F, N>
where
    B: Multipass,
    F: FnMut([&B::Value; N]) -> R,
{
    crate::fault::runtime_check!(N > 0, "adjacent window of width zero");

    AdjacentMap { base, f }
}

// Builds the initial window: cursor `i` sits `i` steps in, clamped to
// the end for bases shorter than the window.
fn open_window<B: Sequence, const N: usize>(base: &mut B) -> [B::Cursor; N] {
    let mut window: [B::Cursor; N] = core::array::from_fn(|_| base.first());

    for i in 1..N {
        window[i] = window[i - 1].clone();

        if !base.is_last(&window[i]) {
            base.inc(&mut window[i]);
        }
    }

    window
}

macro_rules! adjacent_protocol {
    () => {
        fn first(&mut self) -> Self::Cursor {
            let window = open_window(&mut self.base);
            let slot = self.fill(&window);

            AdjacentCursor { window, slot }
        }

        fn is_last(&mut self, cur: &Self::Cursor) -> bool {
            self.base.is_last(&cur.window[N - 1])
        }

        fn inc(&mut self, cur: &mut Self::Cursor) {
            for c in cur.window.iter_mut() {
                self.base.inc(c);
            }

            cur.slot = self.fill(&cur.window);
        }

        fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Self::Value {
            cached(&cur.slot)
        }

        fn size_hint(&self) -> Option<usize> {
            self.base.size_hint().map(|n| n.saturating_sub(N - 1))
        }
    };
}

impl<B, const N: usize> Adjacent<B, N>
where
    B: Multipass,
    B::Value: Clone,
{
    fn fill(&mut self, window: &[B::Cursor; N]) -> Option<[B::Value; N]> {
        if self.base.is_last(&window[N - 1]) {
            return None;
        }

        Some(core::array::from_fn(|i| {
            self.base.read_at(&window[i]).clone()
        }))
    }
}

impl<B, const N: usize> Sequence for Adjacent<B, N>
where
    B: Multipass,
    B::Value: Clone,
{
    type Value = [B::Value; N];
    type Cursor = AdjacentCursor<B::Cursor, [B::Value; N], N>;

    adjacent_protocol!();
}

impl<B, F, R, const N: usize> AdjacentMap<B, F, N>
where
    B: Multipass,
    F: FnMut([&B::Value; N]) -> R,
{
    fn fill(&mut self, window: &[B::Cursor; N]) -> Option<R> {
        if self.base.is_last(&window[N - 1]) {
            return None;
        }

        let base = &self.base;
        let elems: [&B::Value; N] = core::array::from_fn(|i| base.read_at(&window[i]));

        Some((self.f)(elems))
    }
}

impl<B, F, R, const N: usize> Sequence for AdjacentMap<B, F, N>
where
    B: Multipass,
    F: FnMut([&B::Value; N]) -> R,
    R: Clone,
{
    type Value = R;
    type Cursor = AdjacentCursor<B::Cursor, R, N>;

    adjacent_protocol!();
}

macro_rules! adjacent_extensions {
    ( $name:ident [ $($extra:tt)* ] [ $($args:tt)* ] [ $($bounds:tt)* ] ) => {
        impl<B, $($extra)* const N: usize> Multipass for $name<B, $($args)* N>
        where
            B: Multipass,
            $($bounds)*
        {
        }

        impl<B, $($extra)* const N: usize> Bidirectional for $name<B, $($args)* N>
        where
            B: Bidirectional,
            $($bounds)*
        {
            fn dec(&mut self, cur: &mut Self::Cursor) {
                for c in cur.window.iter_mut() {
                    self.base.dec(c);
                }

                cur.slot = self.fill(&cur.window);
            }
        }

        impl<B, $($extra)* const N: usize> RandomAccess for $name<B, $($args)* N>
        where
            B: RandomAccess,
            B::Cursor: Ord,
            $($bounds)*
        {
            fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
                for c in cur.window.iter_mut() {
                    self.base.inc_by(c, offset);
                }

                cur.slot = self.fill(&cur.window);
            }

            fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
                self.base.distance(&from.window[0], &to.window[0])
            }
        }

        impl<B, $($extra)* const N: usize> ExactSize for $name<B, $($args)* N>
        where
            B: Multipass + ExactSize,
            $($bounds)*
        {
            fn size(&self) -> Distance {
                num::sub(self.base.size(), num::dist(N - 1)).max(0)
            }
        }

        impl<B, $($extra)* const N: usize> Bounded for $name<B, $($args)* N>
        where
            B: RandomAccess + Bounded + ExactSize,
            B::Cursor: Ord,
            $($bounds)*
        {
            fn last(&mut self) -> Self::Cursor {
                let n = self.base.size();
                let width = num::dist(N);

                let window = if n < width {
                    open_window(&mut self.base)
                } else {
                    let start = num::add(num::sub(n, width), 1);
                    let mut lead = self.base.first();
                    self.base.inc_by(&mut lead, start);

                    let mut window: [B::Cursor; N] = core::array::from_fn(|_| lead.clone());

                    for i in 1..N {
                        window[i] = window[i - 1].clone();
                        self.base.inc(&mut window[i]);
                    }

                    window
                };

                AdjacentCursor { window, slot: None }
            }
        }
    };
}

adjacent_extensions!(Adjacent [] [] [ B::Value: Clone, ]);
adjacent_extensions!(AdjacentMap [F, R,] [F,] [ F: FnMut([&B::Value; N]) -> R, R: Clone, ]);

#[cfg(feature = "std")]
#[test]
fn test_pairwise_windows() {
    use crate::Pipe;

    let v: Vec<[i32; 2]> = (&[1, 2, 3, 4][..]).pairwise().to();

    assert!(v == vec![[1, 2], [2, 3], [3, 4]]);
}

#[cfg(feature = "std")]
#[test]
fn test_adjacent_on_short_input_is_empty() {
    use crate::Pipe;

    let v: Vec<[i32; 3]> = (&[1, 2][..]).adjacent::<3>().to();

    assert!(v.is_empty());
}

#[cfg(feature = "std")]
#[test]
fn test_adjacent_map_differences() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 4, 9, 16][..])
        .adjacent_map::<2, _, _>(|[a, b]| b - a)
        .to();

    assert!(v == vec![3, 5, 7]);
}
