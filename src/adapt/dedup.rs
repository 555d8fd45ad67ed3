use crate::seq::{Bidirectional, Bounded, Multipass, Sequence};

/// Keeps the first element, then only the elements whose pair with the
/// previous *kept* neighbor passes the predicate. See
/// [`Pipe::adjacent_filter`](crate::Pipe::adjacent_filter).
///
/// With `!=` as the predicate this is [`dedup`](crate::Pipe::dedup):
/// runs of equal elements collapse to their first member.
#[derive(Clone)]
pub struct AdjacentFilter<B, P> {
    base: B,
    pred: P,
}

/// [`AdjacentFilter`] with inequality as the predicate.
pub type Dedup<B> =
    AdjacentFilter<B, fn(&<B as Sequence>::Value, &<B as Sequence>::Value) -> bool>;

pub(crate) fn new<B, P>(base: B, pred: P) -> AdjacentFilter<B, P>
where
    B: Multipass,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    AdjacentFilter { base, pred }
}

pub(crate) fn new_dedup<B>(base: B) -> Dedup<B>
where
    B: Multipass,
    B::Value: PartialEq,
{
    fn differs<T: PartialEq>(a: &T, b: &T) -> bool {
        a != b
    }

    AdjacentFilter {
        base,
        pred: differs::<B::Value>,
    }
}

impl<B, P> Sequence for AdjacentFilter<B, P>
where
    B: Multipass,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    type Value = B::Value;
    type Cursor = B::Cursor;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        self.base.first()
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(cur)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        let mut prev = cur.clone();
        self.base.inc(cur);

        loop {
            if self.base.is_last(cur) {
                break;
            }

            let keep = {
                let a = self.base.read_at(&prev);
                let b = self.base.read_at(cur);

                (self.pred)(a, b)
            };

            if keep {
                break;
            }

            prev = cur.clone();
            self.base.inc(cur);
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(cur)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(cur)
    }
}

impl<B, P> Multipass for AdjacentFilter<B, P>
where
    B: Multipass,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
}

impl<B, P> Bidirectional for AdjacentFilter<B, P>
where
    B: Bidirectional,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    fn dec(&mut self, cur: &mut Self::Cursor) {
        let start = self.base.first();

        loop {
            self.base.dec(cur);

            if *cur == start {
                // the first element is always kept
                break;
            }

            let mut before = cur.clone();
            self.base.dec(&mut before);

            let kept = {
                let a = self.base.read_at(&before);
                let b = self.base.read_at(cur);

                (self.pred)(a, b)
            };

            if kept {
                break;
            }
        }
    }
}

impl<B, P> Bounded for AdjacentFilter<B, P>
where
    B: Multipass + Bounded,
    P: FnMut(&B::Value, &B::Value) -> bool,
{
    fn last(&mut self) -> Self::Cursor {
        self.base.last()
    }
}

#[cfg(feature = "std")]
#[test]
fn test_dedup_collapses_runs() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 1, 2, 2, 2, 3, 1][..]).dedup().map(|x| *x).to();

    assert!(v == vec![1, 2, 3, 1]);
}

#[cfg(feature = "std")]
#[test]
fn test_dedup_is_idempotent() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 1, 2, 2][..]).dedup().dedup().map(|x| *x).to();

    assert!(v == vec![1, 2]);
}

#[cfg(feature = "std")]
#[test]
fn test_adjacent_filter_keeps_rising_edges() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 3, 2, 5, 4][..])
        .adjacent_filter(|a, b| b > a)
        .map(|x| *x)
        .to();

    assert!(v == vec![1, 3, 5]);
}
