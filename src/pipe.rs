//! The method surface.
//!
//! [`Pipe`] is implemented for every sequence and turns the adaptor
//! constructors and algorithms into methods, so pipelines read left to
//! right:
//!
//! ```
//! use lazy_seq::{iota_from, Pipe};
//!
//! let total: i64 = iota_from(1)
//!     .take(10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| (x * 10) as i64)
//!     .sum();
//!
//! assert!(total == 20 + 40 + 60 + 80 + 100);
//! ```
//!
//! Adaptor methods consume `self` and move it into the new stage; to
//! keep ownership, pipe a `&mut` borrow instead — `(&mut seq).map(…)`
//! works because `&mut S` is itself a sequence. Algorithms that return
//! cursors borrow `self` mutably, so the cursor can be used with the
//! same sequence afterwards.
//!
//! You __do not need__ to implement `Pipe` for anything; implement
//! [`Sequence`] and the blanket impl does the rest.

use core::cmp::Ordering;
use core::fmt;

use crate::adapt::{
    adjacent, cache_last, cartesian, chain, checked, chunk, chunk_by, cursors, dedup, drop,
    filter, flatten, map, mask, read_only, reverse, scan, set_ops, slice, slide, split, stride,
    take, take_while, zip,
};
use crate::adapt::{
    Adjacent, AdjacentFilter, AdjacentMap, BoundsChecked, CacheLast, CartesianMap,
    CartesianPower, CartesianProduct, Chain, Chunk, ChunkBy, Cursors, Dedup, DropN, DropWhile,
    Filter, Flatten, FlattenWith, Map, Mask, Pairwise, PreScan, ReadOnly, Reverse, Scan,
    ScanFirst, SetDifference, SetIntersection, SetSymmetricDifference, SetUnion, Slice,
    SliceFrom, Slide, Split, SplitOne, SplitWhen, Stride, Take, TakeWhile, Unchecked, Zip,
    ZipMap,
};
use crate::algo;
use crate::algo::{Bounds, FromSequence};
use crate::num::{Distance, Numeric};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, MutableSequence, Sequence,
};

/// Every adaptor and algorithm of the crate, as methods.
///
/// Implemented for all sequences by a blanket impl; none of the
/// methods is meant to be overridden.
pub trait Pipe: Sequence + Sized {
    // ---- adaptors ------------------------------------------------

    /// Projects every element through `f`. See [`Map`].
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(&Self::Value) -> R,
        R: Clone,
    {
        map::new(self, f)
    }

    /// Keeps the elements `pred` accepts. See [`Filter`].
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        filter::new(self, pred)
    }

    /// At most the first `count` elements. See [`Take`].
    fn take(self, count: Distance) -> Take<Self> {
        take::new(self, count)
    }

    /// Everything after the first `count` elements. See [`DropN`].
    fn drop(self, count: Distance) -> DropN<Self> {
        drop::new(self, count)
    }

    /// Everything from the first element `pred` rejects. See
    /// [`DropWhile`].
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        drop::new_while(self, pred)
    }

    /// The longest prefix `pred` accepts. See [`TakeWhile`].
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        take_while::new(self, pred)
    }

    /// Back-to-front traversal. See [`Reverse`].
    fn reverse(self) -> Reverse<Self>
    where
        Self: Bidirectional + Bounded,
    {
        reverse::new(self)
    }

    /// This sequence, then `other`. See [`Chain`].
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Sequence<Value = Self::Value>,
    {
        chain::new(self, other)
    }

    /// Lock-step pairs with `other`. See [`Zip`].
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Sequence,
        Self::Value: Clone,
        B::Value: Clone,
    {
        zip::new(self, other)
    }

    /// Lock-step projection over `other`. See [`ZipMap`].
    fn zip_map<B, R, F>(self, other: B, f: F) -> ZipMap<Self, B, F>
    where
        B: Sequence,
        F: FnMut(&Self::Value, &B::Value) -> R,
        R: Clone,
    {
        zip::new_map(self, other, f)
    }

    /// Every pair of elements, row-major. See [`CartesianProduct`].
    fn cartesian_product<B>(self, other: B) -> CartesianProduct<Self, B>
    where
        Self: Multipass,
        B: Multipass,
        Self::Value: Clone,
        B::Value: Clone,
    {
        cartesian::new(self, other)
    }

    /// Every pair, projected. See [`CartesianMap`].
    fn cartesian_map<B, R, F>(self, other: B, f: F) -> CartesianMap<Self, B, F>
    where
        Self: Multipass,
        B: Multipass,
        F: FnMut(&Self::Value, &B::Value) -> R,
        R: Clone,
    {
        cartesian::new_map(self, other, f)
    }

    /// Every `N`-tuple of own elements, odometer order. See
    /// [`CartesianPower`].
    fn cartesian_power<const N: usize>(self) -> CartesianPower<Self, N>
    where
        Self: Multipass,
        Self::Value: Clone,
    {
        cartesian::new_power(self)
    }

    /// Non-overlapping runs of `width` elements. See [`Chunk`].
    fn chunk(self, width: Distance) -> Chunk<Self>
    where
        Self: Multipass + Clone,
    {
        chunk::new(self, width)
    }

    /// Maximal runs whose adjacent pairs pass `pred`. See [`ChunkBy`].
    fn chunk_by<P>(self, pred: P) -> ChunkBy<Self, P>
    where
        Self: Multipass + Clone,
        P: FnMut(&Self::Value, &Self::Value) -> bool,
    {
        chunk_by::new(self, pred)
    }

    /// Overlapping windows of a runtime width. See [`Slide`].
    fn slide(self, width: Distance) -> Slide<Self>
    where
        Self: Multipass + Clone,
    {
        slide::new(self, width)
    }

    /// Windows of two, as arrays. See [`Adjacent`].
    fn pairwise(self) -> Pairwise<Self>
    where
        Self: Multipass,
        Self::Value: Clone,
    {
        adjacent::new(self)
    }

    /// Windows of a compile-time width, as arrays. See [`Adjacent`].
    fn adjacent<const N: usize>(self) -> Adjacent<Self, N>
    where
        Self: Multipass,
        Self::Value: Clone,
    {
        adjacent::new(self)
    }

    /// Projected compile-time windows. See [`AdjacentMap`].
    fn adjacent_map<const N: usize, R, F>(self, f: F) -> AdjacentMap<Self, F, N>
    where
        Self: Multipass,
        F: FnMut([&Self::Value; N]) -> R,
        R: Clone,
    {
        adjacent::new_map(self, f)
    }

    /// Keeps elements whose pair with the previous kept neighbor
    /// passes `pred`. See [`AdjacentFilter`].
    fn adjacent_filter<P>(self, pred: P) -> AdjacentFilter<Self, P>
    where
        Self: Multipass,
        P: FnMut(&Self::Value, &Self::Value) -> bool,
    {
        dedup::new(self, pred)
    }

    /// Collapses runs of equal elements. See [`Dedup`].
    fn dedup(self) -> Dedup<Self>
    where
        Self: Multipass,
        Self::Value: PartialEq,
    {
        dedup::new_dedup(self)
    }

    /// Every `step`-th element. See [`Stride`].
    fn stride(self, step: Distance) -> Stride<Self> {
        stride::new(self, step)
    }

    /// Endless repetition of a finite base. See
    /// [`Cycle`](crate::adapt::Cycle).
    fn cycle(self) -> crate::adapt::Cycle<Self>
    where
        Self: Multipass + Bounded,
    {
        crate::adapt::cycle::new(self)
    }

    /// `times` passes over a finite base. See
    /// [`CycleN`](crate::adapt::CycleN).
    fn cycle_times(self, times: Distance) -> crate::adapt::CycleN<Self>
    where
        Self: Multipass + Bounded,
    {
        crate::adapt::cycle::new_times(self, times)
    }

    /// Inclusive prefix fold. See [`Scan`].
    fn scan<A, F>(self, init: A, f: F) -> Scan<Self, F, A>
    where
        F: FnMut(&A, &Self::Value) -> A,
        A: Clone,
    {
        scan::new(self, init, f)
    }

    /// Exclusive prefix fold: the seed comes first. See [`PreScan`].
    fn prescan<A, F>(self, init: A, f: F) -> PreScan<Self, F, A>
    where
        F: FnMut(&A, &Self::Value) -> A,
        A: Clone,
    {
        scan::new_pre(self, init, f)
    }

    /// Prefix fold seeded with the first element. See [`ScanFirst`].
    fn scan_first<F>(self, f: F) -> ScanFirst<Self, F>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Self::Value,
    {
        scan::new_first(self, f)
    }

    /// Concatenates inner sequences. See [`Flatten`].
    fn flatten(self) -> Flatten<Self>
    where
        Self::Value: Sequence + Clone,
    {
        flatten::new(self)
    }

    /// Concatenates inner sequences with a separator pattern between
    /// them. See [`FlattenWith`].
    fn flatten_with<P>(self, pattern: P) -> FlattenWith<Self, P>
    where
        Self::Value: Sequence + Clone,
        P: Multipass + Sequence<Value = <Self::Value as Sequence>::Value>,
    {
        flatten::new_with(self, pattern)
    }

    /// Pieces between occurrences of a pattern. See [`Split`].
    fn split<N>(self, pattern: N) -> Split<Self, N>
    where
        Self: Multipass + Clone,
        N: Multipass,
        Self::Value: PartialEq<N::Value>,
    {
        split::new(self, pattern)
    }

    /// Pieces between occurrences of one delimiter value. See
    /// [`SplitOne`].
    fn split_one(self, delimiter: Self::Value) -> SplitOne<Self>
    where
        Self: Multipass + Clone,
        Self::Value: PartialEq,
    {
        split::new_one(self, delimiter)
    }

    /// Pieces between elements matching `pred`. See [`SplitWhen`].
    fn split_when<P>(self, pred: P) -> SplitWhen<Self, P>
    where
        Self: Multipass + Clone,
        P: FnMut(&Self::Value) -> bool,
    {
        split::new_when(self, pred)
    }

    /// Keeps elements whose aligned mask bit is set. See [`Mask`].
    fn mask<M>(self, mask: M) -> Mask<Self, M>
    where
        M: Sequence<Value = bool>,
    {
        mask::new(self, mask)
    }

    /// Re-emits the base's cursors as elements. See [`Cursors`].
    fn cursors(self) -> Cursors<Self>
    where
        Self: Multipass,
    {
        cursors::new(self)
    }

    /// Memoizes the end cursor of a finite base. See [`CacheLast`].
    fn cache_last(self) -> CacheLast<Self>
    where
        Self: Multipass,
    {
        cache_last::new(self)
    }

    /// Routes reads through the unchecked variant. See [`Unchecked`].
    fn unchecked(self) -> Unchecked<Self> {
        checked::new_unchecked(self)
    }

    /// Routes both read entry points through the checked variant. See
    /// [`BoundsChecked`].
    fn bounds_checked(self) -> BoundsChecked<Self> {
        checked::new_checked(self)
    }

    /// Hides write access. See [`ReadOnly`].
    fn read_only(self) -> ReadOnly<Self> {
        read_only::new(self)
    }

    /// Sorted-merge union with `other` (both ordered by `Ord`). See
    /// [`SetUnion`].
    fn set_union<B>(self, other: B) -> SetUnion<Self, B, Comparator<Self::Value>>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Ord + Clone,
    {
        set_ops::set_union(self, other, set_ops::ordering::<Self::Value>)
    }

    /// [`set_union`](Pipe::set_union) under a caller-supplied
    /// comparator.
    fn set_union_by<B, C>(self, other: B, cmp: C) -> SetUnion<Self, B, C>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        set_ops::set_union(self, other, cmp)
    }

    /// Elements present in both sorted sequences. See
    /// [`SetIntersection`].
    fn set_intersection<B>(self, other: B) -> SetIntersection<Self, B, Comparator<Self::Value>>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Ord + Clone,
    {
        set_ops::set_intersection(self, other, set_ops::ordering::<Self::Value>)
    }

    /// [`set_intersection`](Pipe::set_intersection) under a
    /// caller-supplied comparator.
    fn set_intersection_by<B, C>(self, other: B, cmp: C) -> SetIntersection<Self, B, C>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        set_ops::set_intersection(self, other, cmp)
    }

    /// Elements of this sorted sequence absent from `other`. See
    /// [`SetDifference`].
    fn set_difference<B>(self, other: B) -> SetDifference<Self, B, Comparator<Self::Value>>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Ord + Clone,
    {
        set_ops::set_difference(self, other, set_ops::ordering::<Self::Value>)
    }

    /// [`set_difference`](Pipe::set_difference) under a
    /// caller-supplied comparator.
    fn set_difference_by<B, C>(self, other: B, cmp: C) -> SetDifference<Self, B, C>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        set_ops::set_difference(self, other, cmp)
    }

    /// Elements in exactly one of two sorted sequences. See
    /// [`SetSymmetricDifference`].
    fn set_symmetric_difference<B>(
        self,
        other: B,
    ) -> SetSymmetricDifference<Self, B, Comparator<Self::Value>>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Ord + Clone,
    {
        set_ops::set_symmetric_difference(self, other, set_ops::ordering::<Self::Value>)
    }

    /// [`set_symmetric_difference`](Pipe::set_symmetric_difference)
    /// under a caller-supplied comparator.
    fn set_symmetric_difference_by<B, C>(
        self,
        other: B,
        cmp: C,
    ) -> SetSymmetricDifference<Self, B, C>
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        set_ops::set_symmetric_difference(self, other, cmp)
    }

    /// The half-open sub-sequence between two saved cursors. See
    /// [`Slice`].
    fn slice(self, from: Self::Cursor, to: Self::Cursor) -> Slice<Self>
    where
        Self: Multipass,
    {
        slice::new(self, from, to)
    }

    /// The open-ended sub-sequence from a saved cursor. See
    /// [`SliceFrom`].
    fn slice_from(self, from: Self::Cursor) -> SliceFrom<Self>
    where
        Self: Multipass,
    {
        slice::new_from(self, from)
    }

    // ---- algorithms ----------------------------------------------

    /// See [`for_each_while`](algo::for_each_while).
    fn for_each_while_mut<F>(&mut self, f: F) -> Self::Cursor
    where
        F: FnMut(&Self::Value) -> bool,
    {
        algo::for_each_while(self, f)
    }

    /// See [`for_each`](algo::for_each).
    fn for_each<F>(mut self, f: F)
    where
        F: FnMut(&Self::Value),
    {
        algo::for_each(&mut self, f);
    }

    /// See [`find`](algo::find).
    fn find(&mut self, value: &Self::Value) -> Self::Cursor
    where
        Self::Value: PartialEq,
    {
        algo::find(self, value)
    }

    /// See [`find_if`](algo::find_if).
    fn find_if<P>(&mut self, pred: P) -> Self::Cursor
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::find_if(self, pred)
    }

    /// See [`find_if_not`](algo::find_if_not).
    fn find_if_not<P>(&mut self, pred: P) -> Self::Cursor
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::find_if_not(self, pred)
    }

    /// See [`all`](algo::all).
    fn all<P>(mut self, pred: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::all(&mut self, pred)
    }

    /// See [`any`](algo::any).
    fn any<P>(mut self, pred: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::any(&mut self, pred)
    }

    /// See [`none`](algo::none).
    fn none<P>(mut self, pred: P) -> bool
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::none(&mut self, pred)
    }

    /// See [`contains`](algo::contains).
    fn contains(mut self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        algo::contains(&mut self, value)
    }

    /// See [`count`](algo::count).
    fn count(mut self) -> Distance {
        algo::count(&mut self)
    }

    /// See [`count_if`](algo::count_if).
    fn count_if<P>(mut self, pred: P) -> Distance
    where
        P: FnMut(&Self::Value) -> bool,
    {
        algo::count_if(&mut self, pred)
    }

    /// See [`count_eq`](algo::count_eq).
    fn count_eq(mut self, value: &Self::Value) -> Distance
    where
        Self::Value: PartialEq,
    {
        algo::count_eq(&mut self, value)
    }

    /// See [`front`](algo::front).
    fn front(&mut self) -> Option<Self::Value>
    where
        Self::Value: Clone,
    {
        algo::front(self)
    }

    /// See [`back`](algo::back).
    fn back(&mut self) -> Option<Self::Value>
    where
        Self: Bidirectional + Bounded,
        Self::Value: Clone,
    {
        algo::back(self)
    }

    /// See [`fold`](algo::fold).
    fn fold<B, F>(mut self, init: B, f: F) -> B
    where
        F: FnMut(B, &Self::Value) -> B,
    {
        algo::fold(&mut self, init, f)
    }

    /// See [`fold_first`](algo::fold_first).
    fn fold_first<F>(mut self, f: F) -> Option<Self::Value>
    where
        Self::Value: Clone,
        F: FnMut(Self::Value, &Self::Value) -> Self::Value,
    {
        algo::fold_first(&mut self, f)
    }

    /// See [`sum`](algo::sum).
    fn sum<N>(mut self) -> N
    where
        Self: Sequence<Value = N>,
        N: Numeric,
    {
        algo::sum(&mut self)
    }

    /// See [`product`](algo::product).
    fn product<N>(mut self) -> N
    where
        Self: Sequence<Value = N>,
        N: Numeric,
    {
        algo::product(&mut self)
    }

    /// See [`min`](algo::min).
    fn min(mut self) -> Option<Self::Value>
    where
        Self::Value: Ord + Clone,
    {
        algo::min(&mut self)
    }

    /// See [`max`](algo::max).
    fn max(mut self) -> Option<Self::Value>
    where
        Self::Value: Ord + Clone,
    {
        algo::max(&mut self)
    }

    /// See [`minmax`](algo::minmax).
    fn minmax(mut self) -> Option<(Self::Value, Self::Value)>
    where
        Self::Value: Ord + Clone,
    {
        algo::minmax(&mut self)
    }

    /// See [`min_by`](algo::min_by).
    fn min_by<C>(mut self, cmp: C) -> Option<Self::Value>
    where
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        algo::min_by(&mut self, cmp)
    }

    /// See [`max_by`](algo::max_by).
    fn max_by<C>(mut self, cmp: C) -> Option<Self::Value>
    where
        Self::Value: Clone,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        algo::max_by(&mut self, cmp)
    }

    /// See [`find_min`](algo::find_min).
    fn find_min(&mut self) -> Self::Cursor
    where
        Self: Multipass,
        Self::Value: Ord,
    {
        algo::find_min(self)
    }

    /// See [`find_max`](algo::find_max).
    fn find_max(&mut self) -> Self::Cursor
    where
        Self: Multipass,
        Self::Value: Ord,
    {
        algo::find_max(self)
    }

    /// See [`find_minmax`](algo::find_minmax).
    fn find_minmax(&mut self) -> (Self::Cursor, Self::Cursor)
    where
        Self: Multipass,
        Self::Value: Ord,
    {
        algo::find_minmax(self)
    }

    /// See [`compare`](algo::compare).
    fn compare<B>(mut self, mut other: B) -> Ordering
    where
        B: Sequence<Value = Self::Value>,
        Self::Value: Ord,
    {
        algo::compare(&mut self, &mut other)
    }

    /// See [`equal`](algo::equal).
    fn equal<B>(mut self, mut other: B) -> bool
    where
        B: Sequence,
        Self::Value: PartialEq<B::Value>,
    {
        algo::equal(&mut self, &mut other)
    }

    /// See [`equal_by`](algo::equal_by).
    fn equal_by<B, P>(mut self, mut other: B, pred: P) -> bool
    where
        B: Sequence,
        P: FnMut(&Self::Value, &B::Value) -> bool,
    {
        algo::equal_by(&mut self, &mut other, pred)
    }

    /// See [`starts_with`](algo::starts_with).
    fn starts_with<P>(mut self, mut prefix: P) -> bool
    where
        P: Sequence,
        Self::Value: PartialEq<P::Value>,
    {
        algo::starts_with(&mut self, &mut prefix)
    }

    /// See [`ends_with`](algo::ends_with).
    fn ends_with<P>(mut self, mut suffix: P) -> bool
    where
        Self: Bidirectional + Bounded,
        P: Bidirectional + Bounded,
        Self::Value: PartialEq<P::Value>,
    {
        algo::ends_with(&mut self, &mut suffix)
    }

    /// See [`ends_with_sized`](algo::ends_with_sized).
    fn ends_with_sized<P>(mut self, mut suffix: P) -> bool
    where
        Self: ExactSize,
        P: Sequence + ExactSize,
        Self::Value: PartialEq<P::Value>,
    {
        algo::ends_with_sized(&mut self, &mut suffix)
    }

    /// See [`search`](algo::search).
    fn search<N>(&mut self, needle: &mut N) -> Bounds<Self::Cursor>
    where
        Self: Multipass,
        N: Multipass,
        Self::Value: PartialEq<N::Value>,
    {
        algo::search(self, needle)
    }

    /// See [`fill`](algo::fill).
    fn fill(&mut self, value: Self::Value)
    where
        Self: MutableSequence,
        Self::Value: Clone,
    {
        algo::fill(self, value)
    }

    /// See [`update_each`](algo::update_each).
    fn update_each<F>(&mut self, f: F)
    where
        Self: MutableSequence,
        F: FnMut(&mut Self::Value),
    {
        algo::update_each(self, f)
    }

    /// See [`inplace_reverse`](algo::inplace_reverse).
    fn inplace_reverse(&mut self)
    where
        Self: Bidirectional + Bounded + MutableSequence,
    {
        algo::inplace_reverse(self)
    }

    /// See [`output_to`](algo::output_to).
    fn output_to<D>(mut self, dst: &mut D) -> Distance
    where
        D: MutableSequence<Value = Self::Value>,
        Self::Value: Clone,
    {
        algo::output_to(&mut self, dst)
    }

    /// See [`extend_into`](algo::extend_into).
    fn extend_into<C>(mut self, collection: &mut C)
    where
        Self::Value: Clone,
        C: Extend<Self::Value>,
    {
        algo::extend_into(&mut self, collection)
    }

    /// See [`sort`](algo::sort).
    fn sort(&mut self)
    where
        Self: crate::seq::RandomAccess + Bounded + MutableSequence,
        Self::Cursor: Ord,
        Self::Value: Ord,
    {
        algo::sort(self)
    }

    /// See [`sort_by`](algo::sort_by).
    fn sort_by<C>(&mut self, cmp: C)
    where
        Self: crate::seq::RandomAccess + Bounded + MutableSequence,
        Self::Cursor: Ord,
        C: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        algo::sort_by(self, cmp)
    }

    /// See [`to`](algo::to).
    fn to<C>(self) -> C
    where
        C: FromSequence<Self>,
    {
        algo::to(self)
    }

    /// See [`write_to`](algo::write_to).
    fn write_to<W>(mut self, out: &mut W) -> fmt::Result
    where
        Self::Value: fmt::Display,
        W: fmt::Write,
    {
        algo::write_to(&mut self, out)
    }

    // ---- plumbing ------------------------------------------------

    /// Generic piping: `s.pipe(f)` is `f(s)`.
    ///
    /// Lets free functions slot into a method chain.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// The iterator bridge: yields owned values, so pipelines feed
    /// `for` loops and iterator consumers.
    fn values(self) -> Values<Self>
    where
        Self::Value: Clone,
    {
        Values {
            seq: self,
            cur: None,
        }
    }
}

impl<S: Sequence + Sized> Pipe for S {}

/// The comparator type of the default `set_*` constructors.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// An [`Iterator`] over a sequence's owned values. See
/// [`Pipe::values`].
#[derive(Clone)]
pub struct Values<S: Sequence> {
    seq: S,
    cur: Option<S::Cursor>,
}

impl<S> Iterator for Values<S>
where
    S: Sequence,
    S::Value: Clone,
{
    type Item = S::Value;

    fn next(&mut self) -> Option<S::Value> {
        if self.cur.is_none() {
            self.cur = Some(self.seq.first());
        }

        let cur = self.cur.as_mut().unwrap();

        if self.seq.is_last(cur) {
            return None;
        }

        let value = self.seq.move_at(cur);
        self.seq.inc(cur);

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.seq.size_hint() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_values_feeds_for_loops() {
    use crate::iota_range;

    let mut seen = Vec::new();

    for x in iota_range(0, 4).values() {
        seen.push(x);
    }

    assert!(seen == vec![0, 1, 2, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_pipe_method() {
    let doubled: Vec<i32> = (&[1, 2][..]).pipe(|s| s.map(|x| x * 2).to());

    assert!(doubled == vec![2, 4]);
}
