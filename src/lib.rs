//! # Lazy sequence pipelines
//!
//! Let's begin with a few words on naming.
//!
//! What is commonly called an &#8220;iterator&#8221; bundles two things
//! into one object: a position and the right to advance it. The
//! building block of this crate is different: a [`Sequence`] hands out
//! plain *cursors* — freestanding position values — and is itself the
//! only thing that can move them, read through them, or measure the
//! distance between them.
//!
//! On top of that protocol the crate builds a library of lazy,
//! composable adaptors: from any traversable source you construct a
//! pipeline such as `source.filter(…).map(…).take(…).fold(…)`, where
//! each stage is a thin owning view and all work happens on demand,
//! driven by the final consumer.
//!
//! ## Usage examples
//!
//! Slices, arrays and (with the `collections` feature) the standard
//! containers are sequences out of the box:
//!
//! ```
//! use lazy_seq::Pipe;
//!
//! let sum: i64 = lazy_seq::iota_from(1)
//!     .take(10)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| (x * 10) as i64)
//!     .sum();
//!
//! assert!(sum == 300);
//! ```
//!
//! Cursors make position-based work natural where iterators get
//! awkward:
//!
//! ```
//! use lazy_seq::{Pipe, Sequence};
//!
//! let mut scores = &[10, 40, 20, 40][..];
//!
//! // the cursor of the maximum, not just its value
//! let best = scores.find_max();
//! assert!(*scores.read_at(&best) == 40);
//!
//! // cursors are plain values: keep several, compare them, reuse them
//! let first = scores.find(&40);
//! assert!(first < best); // `max` ties keep the last occurrence
//! ```
//!
//! Pipelines can borrow instead of consuming — `&mut S` is a sequence
//! whenever `S` is:
//!
//! ```
//! use lazy_seq::Pipe;
//!
//! let mut data = vec![3, 1, 2];
//!
//! let doubled: Vec<i32> = (&mut data).map(|x| x * 2).to();
//! assert!(doubled == vec![6, 2, 4]);
//!
//! data.sort(); // still ours
//! assert!(data == vec![1, 2, 3]);
//! ```
//!
//! ## The protocol
//!
//! Six operations make a sequence (see [`Sequence`]): `first`,
//! `is_last`, `inc`, `read_at`, plus derived `move_at` and the bulk
//! driver `for_each_while`. Optional tiers strengthen it:
//! [`Multipass`], [`Bidirectional`], [`RandomAccess`], [`Contiguous`],
//! orthogonally [`Bounded`], [`ExactSize`] and [`MutableSequence`].
//! Every adaptor forwards the strongest tier its base supports — the
//! decision tables live with each adaptor type in [`adapt`].
//!
//! ## Failure policy
//!
//! Precondition violations (reading past the end, cursor arithmetic
//! overflow, division by zero) route through one hook,
//! [`fault::fault`], which panics by default or aborts under the
//! `terminate` feature. See [`fault`] and [`num`] for the
//! configuration story. They are never silently ignored, and the
//! library never catches them.
//!
//! ## Cargo features
//!
//! Currently there are the following features:
//!
//! * `std`: Links to std; enables the stream sources and hash-map
//!   materialization. Implies `alloc`.
//! * `alloc`: Enables the allocating parts without std.
//! * `collections`: Protocol implementations and materialization for
//!   the standard containers. Implies `alloc`.
//! * `hashbrown`: Materialization into `hashbrown` maps and sets for
//!   `no_std` builds.
//! * `terminate`: Fatal errors print a diagnostic and abort instead of
//!   panicking.
//! * `overflow_error` / `overflow_wrap`: Force the checked-arithmetic
//!   policy; the default checks in debug builds and wraps in release.
//! * `distance_i64`: Fixes [`Distance`] to `i64` instead of the
//!   platform signed word.
//!
//! `std` and `collections` are enabled by default.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fault;
pub mod num;

mod seq;

pub mod adapt;
pub mod algo;
mod core_impls;
mod pipe;
pub mod source;

#[cfg(feature = "collections")]
mod stdlib_impls;

pub use num::Distance;
pub use seq::{
    Bidirectional, Bounded, Contiguous, ExactSize, Multipass, MutableSequence, RandomAccess,
    Sequence,
};

pub use pipe::{Comparator, Pipe, Values};

pub use source::{
    empty, from_iter, generate, iota, iota_from, iota_range, repeat, repeat_n, single, unfold,
};

#[cfg(feature = "std")]
pub use source::{byte_stream, tokens};

pub use algo::{
    all, any, back, compare, compare_by, contains, count, count_eq, count_if, ends_with,
    ends_with_sized, equal, equal_by, extend_into, fill, find, find_if, find_if_not, find_max,
    find_max_by, find_min, find_min_by, find_minmax, fold, fold_first, for_each, for_each_while,
    front, inplace_reverse, max, max_by, min, min_by, minmax, minmax_by, none, output_to,
    product, search, sort, sort_by, starts_with, sum, to, update_each, write_to, zip_find_if,
    zip_fold, zip_for_each, zip_for_each_while, Bounds, FromSequence,
};
