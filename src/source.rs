//! Primitive sequence sources.
//!
//! Sources are the leaves of a pipeline: they own (or view) whatever
//! backing state traversal needs and expose it through the
//! [cursor protocol](crate::seq). Containers and slices are sources
//! too — their implementations live in
//! [`core_impls`](crate::core_impls) and
//! [`stdlib_impls`](crate::stdlib_impls) — while this module holds the
//! synthesized ones:
//!
//! * [`iota`] / [`iota_from`] / [`iota_range`] — integer runs whose
//!   cursors are the integers themselves;
//! * [`single`] and [`empty`] — the one- and zero-element sequences;
//! * [`repeat`] / [`repeat_n`] — one value forever, or `n` times;
//! * [`unfold`] — the orbit of a state under a step function;
//! * [`generate`] — a pull-driven generator backed by a closure;
//! * [`from_iter`] — any [`Iterator`] lifted into the protocol;
//! * [`tokens`] and [`byte_stream`] (std) — values or bytes read from
//!   an input stream until it refuses.

mod empty;
mod from_iter;
mod generate;
mod iota;
mod repeat;
mod single;
mod unfold;

#[cfg(feature = "std")]
mod stream;

pub use empty::{empty, Empty};
pub use from_iter::{from_iter, FromIter};
pub use generate::{generate, Generate};
pub use iota::{iota, iota_from, iota_range, Iota, IotaRange};
pub use repeat::{repeat, repeat_n, Repeat, RepeatN};
pub use single::{single, Single, SingleCursor};
pub use unfold::{unfold, Unfold};

#[cfg(feature = "std")]
pub use stream::{byte_stream, tokens, ByteStream, Tokens};
