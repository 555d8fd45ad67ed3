//! The adaptor algebra.
//!
//! An adaptor owns one or more base sequences (moved in at pipeline
//! construction) and re-exports the [cursor protocol](crate::seq),
//! usually at a weaker tier. Each module documents its type's decision
//! table as the set of conditional trait impls next to it: which tiers
//! it forwards, what it memoizes, and what its element is.
//!
//! Adaptors are constructed through the [`Pipe`](crate::Pipe) methods;
//! the types are public so pipelines can be named and stored.
//!
//! Three house rules hold everywhere:
//!
//! * composite cursors are plain value types (pairs, arrays, tagged
//!   unions) carrying exactly the state needed to resume traversal —
//!   plus, for projecting adaptors, the materialized element of the
//!   current position;
//! * memoized state (filter's first survivor, drop's skip, cache_last's
//!   end) lives in the adaptor, never in the cursor, so cursor copies
//!   never duplicate a memo;
//! * cursor equality and ordering compare positions only.

pub(crate) mod adjacent;
pub(crate) mod cache_last;
pub(crate) mod cartesian;
pub(crate) mod chain;
pub(crate) mod checked;
pub(crate) mod chunk;
pub(crate) mod chunk_by;
pub(crate) mod cursors;
pub(crate) mod cycle;
pub(crate) mod dedup;
pub(crate) mod drop;
pub(crate) mod filter;
pub(crate) mod flatten;
pub(crate) mod map;
pub(crate) mod mask;
pub(crate) mod read_only;
pub(crate) mod reverse;
pub(crate) mod scan;
pub(crate) mod set_ops;
pub(crate) mod slice;
pub(crate) mod slide;
pub(crate) mod split;
pub(crate) mod stride;
pub(crate) mod take;
pub(crate) mod take_while;
pub(crate) mod zip;

pub use adjacent::{Adjacent, AdjacentCursor, AdjacentMap, Pairwise};
pub use cache_last::CacheLast;
pub use cartesian::{
    CartesianCursor, CartesianMap, CartesianPower, CartesianProduct, PowerCursor,
};
pub use chain::{Chain, ChainCursor};
pub use checked::{BoundsChecked, Unchecked};
pub use chunk::{Chunk, ChunkCursor};
pub use chunk_by::{ChunkBy, ChunkByCursor};
pub use cursors::Cursors;
pub use cycle::{Cycle, CycleCursor, CycleN};
pub use dedup::{AdjacentFilter, Dedup};
pub use drop::{DropN, DropWhile};
pub use filter::Filter;
pub use flatten::{Flatten, FlattenWith};
pub use map::{Map, MapCursor};
pub use mask::{Mask, MaskCursor};
pub use read_only::ReadOnly;
pub use reverse::{RevCursor, Reverse};
pub use scan::{PreScan, PreScanCursor, Scan, ScanFirst};
pub use set_ops::{
    SetCursor, SetDifference, SetIntersection, SetSymmetricDifference, SetUnion,
};
pub use slice::{Slice, SliceFrom};
pub use slide::{Slide, SlideCursor};
pub use split::{Split, SplitCursor, SplitOne, SplitWhen};
pub use stride::{Stride, StrideCursor};
pub use take::{Take, TakeCursor};
pub use take_while::TakeWhile;
pub use zip::{Zip, ZipCursor, ZipMap};
