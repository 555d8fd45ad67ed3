use crate::adapt::slice::{self, Slice};
use crate::fault::runtime_check;
use crate::seq::{cached, Bidirectional, Bounded, Multipass, Sequence};

/// Maximal runs of elements whose adjacent pairs pass a predicate. See
/// [`Pipe::chunk_by`](crate::Pipe::chunk_by).
///
/// A new chunk starts wherever `pred(previous, current)` is false.
/// Elements are [`Slice`]s over a clone of the base.
#[derive(Clone)]
pub struct ChunkBy<B: Sequence, P> {
    base: B,
    pred: P,
}

/// Cursor of [`ChunkBy`]: the run's bounds and the run itself.
#[derive(Clone)]
pub struct ChunkByCursor<B: Sequence> {
    from: B::Cursor,
    to: B::Cursor,
    slot: Option<Slice<B>>,
}

impl<B: Sequence> PartialEq for ChunkByCursor<B> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

pub(crate) fn new<B, P>(base: B, pred: P) -> ChunkBy<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    ChunkBy { base, pred }
}

impl<B, P> ChunkBy<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    /// One past the last element of the run starting at `from`.
    fn run_end(&mut self, from: &B::Cursor) -> B::Cursor {
        let mut at = from.clone();

        if self.base.is_last(&at) {
            return at;
        }

        loop {
            let mut next = at.clone();
            self.base.inc(&mut next);

            if self.base.is_last(&next) {
                return next;
            }

            let connected = {
                let a = self.base.read_at(&at);
                let b = self.base.read_at(&next);

                (self.pred)(a, b)
            };

            if !connected {
                return next;
            }

            at = next;
        }
    }

    fn fill(&mut self, from: &B::Cursor, to: &B::Cursor) -> Option<Slice<B>> {
        if self.base.is_last(from) {
            return None;
        }

        Some(slice::new(self.base.clone(), from.clone(), to.clone()))
    }
}

impl<B, P> Sequence for ChunkBy<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    type Value = Slice<B>;
    type Cursor = ChunkByCursor<B>;

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();
        let to = self.run_end(&from);
        let slot = self.fill(&from, &to);

        ChunkByCursor { from, to, slot }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.from)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(
            !self.base.is_last(&cur.from),
            "inc past the end of chunk_by"
        );

        cur.from = cur.to.clone();
        cur.to = self.run_end(&cur.from);
        cur.slot = self.fill(&cur.from, &cur.to);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Slice<B> {
        cached(&cur.slot)
    }
}

impl<B, P> Multipass for ChunkBy<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
}

impl<B, P> Bidirectional for ChunkBy<B, P>
where
    B: Bidirectional + Clone,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        let start = self.base.first();

        runtime_check!(cur.from != start, "dec before the start of chunk_by");

        cur.to = cur.from.clone();

        let mut at = cur.from.clone();
        self.base.dec(&mut at);

        // walk left while the pair behind `at` is still connected
        while at != start {
            let mut before = at.clone();
            self.base.dec(&mut before);

            let connected = {
                let a = self.base.read_at(&before);
                let b = self.base.read_at(&at);

                (self.pred)(a, b)
            };

            if !connected {
                break;
            }

            at = before;
        }

        cur.from = at;
        cur.slot = self.fill(&cur.from, &cur.to);
    }
}

impl<B, P> Bounded for ChunkBy<B, P>
where
    B: Multipass + Clone + Bounded,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();

        ChunkByCursor {
            from: end.clone(),
            to: end,
            slot: None,
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_chunk_by_groups_runs() {
    use crate::Pipe;

    let s = &[1, 1, 2, 3, 3, 3, 1][..];

    let groups: Vec<Vec<i32>> = Pipe::to(Pipe::map(Pipe::chunk_by(s, |a, b| a == b), |g| {
        Pipe::to(Pipe::map(g.clone(), |x| *x))
    }));

    assert!(groups == vec![vec![1, 1], vec![2], vec![3, 3, 3], vec![1]]);
}

#[cfg(feature = "std")]
#[test]
fn test_chunk_by_walks_backward() {
    use crate::{Bounded, Sequence};
    use crate::seq::Bidirectional;

    let mut groups = new(&[1, 1, 2, 2][..], |a: &i32, b: &i32| a == b);

    let mut cur = groups.last();
    groups.dec(&mut cur);

    let g: Vec<i32> = {
        use crate::Pipe;
        groups.read_at(&cur).clone().map(|x| *x).to()
    };
    assert!(g == vec![2, 2]);

    groups.dec(&mut cur);

    let g: Vec<i32> = {
        use crate::Pipe;
        groups.read_at(&cur).clone().map(|x| *x).to()
    };
    assert!(g == vec![1, 1]);
}
