//! Algorithms: the consumers that drive a pipeline to completion.
//!
//! Everything here is a free function over `&mut impl Sequence` (the
//! [`Pipe`](crate::Pipe) methods forward to these), written against
//! the cursor protocol and specialized from a handful of drivers:
//! [`for_each_while`] for the short-circuiting family, [`fold`] for
//! the accumulating one, and the lock-step `zip_*` drivers for
//! two-sequence walks.
//!
//! All of them are synchronous and single-threaded; cancellation is a
//! predicate returning `false`. Pairing a non-short-circuiting
//! algorithm with an infinite source is a programming error the
//! library cannot detect.

pub(crate) mod compare;
pub(crate) mod fold;
pub(crate) mod minmax;
pub(crate) mod mutate;
pub(crate) mod query;
pub(crate) mod sort;
pub(crate) mod to;
pub(crate) mod write;
pub(crate) mod zip_drive;

pub use compare::{
    compare, compare_by, ends_with, ends_with_sized, equal, equal_by, search, starts_with,
    Bounds,
};
pub use fold::{fold, fold_first, product, sum};
pub use minmax::{
    find_max, find_max_by, find_min, find_min_by, find_minmax, max, max_by, min, min_by, minmax,
    minmax_by,
};
pub use mutate::{extend_into, fill, inplace_reverse, output_to, update_each};
pub use query::{
    all, any, back, contains, count, count_eq, count_if, find, find_if, find_if_not, for_each,
    for_each_while, front, none,
};
pub use sort::{sort, sort_by};
pub use to::{to, FromSequence};
pub use write::write_to;
pub use zip_drive::{zip_find_if, zip_fold, zip_for_each, zip_for_each_while};
