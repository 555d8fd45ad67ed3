use crate::adapt::slice::{self, Slice};
use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    advance, cached, Bidirectional, Bounded, ExactSize, Multipass, Sequence,
};

/// Non-overlapping runs of `n` elements (the final run may be short).
/// See [`Pipe::chunk`](crate::Pipe::chunk).
///
/// Elements are [`Slice`]s over a clone of the base, so the base must
/// be a cheaply cloneable multipass view (`&[T]`, `&Vec<T>`, `iota()`…).
/// Each chunk is independent and restartable. The cursor remembers how
/// many base steps the final hop fell short, which is what lets `dec`
/// find the last chunk boundary again.
#[derive(Clone, Debug)]
pub struct Chunk<B: Sequence> {
    base: B,
    width: Distance,
}

/// Cursor of [`Chunk`]: the chunk's start, the shortfall at the end,
/// and the chunk itself.
#[derive(Clone)]
pub struct ChunkCursor<B: Sequence> {
    from: B::Cursor,
    missing: Distance,
    slot: Option<Slice<B>>,
}

impl<B: Sequence> PartialEq for ChunkCursor<B> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

pub(crate) fn new<B>(base: B, width: Distance) -> Chunk<B>
where
    B: Multipass + Clone,
{
    runtime_check!(width > 0, "chunk with a nonpositive width");

    Chunk { base, width }
}

impl<B> Chunk<B>
where
    B: Multipass + Clone,
{
    fn fill(&mut self, from: &B::Cursor) -> Option<Slice<B>> {
        if self.base.is_last(from) {
            return None;
        }

        let mut to = from.clone();
        advance(&mut self.base, &mut to, self.width);

        Some(slice::new(self.base.clone(), from.clone(), to))
    }
}

impl<B> Sequence for Chunk<B>
where
    B: Multipass + Clone,
{
    type Value = Slice<B>;
    type Cursor = ChunkCursor<B>;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();
        let slot = self.fill(&from);

        ChunkCursor {
            from,
            missing: 0,
            slot,
        }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.from)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        let taken = advance(&mut self.base, &mut cur.from, self.width);

        runtime_check!(taken > 0, "inc past the end of chunk");

        cur.missing = num::sub(self.width, taken);
        cur.slot = self.fill(&cur.from);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Slice<B> {
        cached(&cur.slot)
    }

    fn size_hint(&self) -> Option<usize> {
        let width = self.width as usize;

        self.base.size_hint().map(|n| (n + width - 1) / width)
    }
}

impl<B> Multipass for Chunk<B> where B: Multipass + Clone {}

impl<B> Bidirectional for Chunk<B>
where
    B: Bidirectional + Clone,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        // from the end, step back only what the last chunk really held
        let back = num::sub(self.width, cur.missing);

        for _ in 0..back {
            self.base.dec(&mut cur.from);
        }

        cur.missing = 0;
        cur.slot = self.fill(&cur.from);
    }
}

impl<B> Bounded for Chunk<B>
where
    B: Multipass + Clone + Bounded + ExactSize,
{
    fn last(&mut self) -> Self::Cursor {
        let n = self.base.size();
        let tail = num::rem(n, self.width);

        ChunkCursor {
            from: self.base.last(),
            missing: if tail == 0 { 0 } else { num::sub(self.width, tail) },
            slot: None,
        }
    }
}

impl<B> ExactSize for Chunk<B>
where
    B: Multipass + Clone + ExactSize,
{
    fn size(&self) -> Distance {
        num::div_ceil(self.base.size(), self.width)
    }
}

#[cfg(feature = "std")]
#[test]
fn test_chunk_splits_into_runs() {
    use crate::Pipe;

    let s = &[1, 2, 3, 4, 5][..];

    let chunks: Vec<Vec<i32>> = s.chunk(2).map(|c| c.clone().map(|x| *x).to()).to();
    assert!(chunks == vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[cfg(feature = "std")]
#[test]
fn test_chunk_flatten_restores_the_base() {
    use crate::Pipe;

    let s = &[1, 2, 3, 4, 5, 6, 7][..];

    let v: Vec<i32> = s.chunk(3).flatten().map(|x| *x).to();
    assert!(v == vec![1, 2, 3, 4, 5, 6, 7]);
}

#[cfg(feature = "std")]
#[test]
fn test_chunk_dec_lands_on_boundaries() {
    use crate::{Bounded, Sequence};
    use crate::seq::Bidirectional;

    let mut c = new(&[1, 2, 3, 4, 5][..], 2);

    let mut cur = c.last();
    c.dec(&mut cur);

    let last_chunk: Vec<i32> = {
        use crate::Pipe;
        c.read_at(&cur).clone().map(|x| *x).to()
    };

    assert!(last_chunk == vec![5]);
}
