use crate::seq::{Multipass, Sequence};

/// The longest prefix a predicate accepts. See
/// [`Pipe::take_while`](crate::Pipe::take_while).
///
/// `is_last` consults the predicate on the current element, so the end
/// of the sequence is discovered lazily and no end cursor or size can
/// be offered. Never infinite, whatever the base claims.
#[derive(Clone)]
pub struct TakeWhile<B, P> {
    base: B,
    pred: P,
}

pub(crate) fn new<B, P>(base: B, pred: P) -> TakeWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Value) -> bool,
{
    TakeWhile { base, pred }
}

impl<B, P> Sequence for TakeWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Value) -> bool,
{
    type Value = B::Value;
    type Cursor = B::Cursor;

    fn first(&mut self) -> Self::Cursor {
        self.base.first()
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        if self.base.is_last(cur) {
            return true;
        }

        !(self.pred)(self.base.read_at(cur))
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(cur)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(cur)
    }

    fn for_each_while<G>(&mut self, mut g: G) -> Self::Cursor
    where
        G: FnMut(&B::Value) -> bool,
    {
        let pred = &mut self.pred;

        self.base
            .for_each_while(|value| if pred(value) { g(value) } else { false })
    }
}

impl<B, P> Multipass for TakeWhile<B, P>
where
    B: Multipass,
    P: FnMut(&B::Value) -> bool,
{
}

#[cfg(feature = "std")]
#[test]
fn test_take_while_cuts_at_first_rejection() {
    use crate::Pipe;

    let v: Vec<i32> = (&[1, 2, 9, 1][..]).take_while(|x| *x < 5).map(|x| *x).to();

    assert!(v == vec![1, 2]);
}

#[test]
fn test_take_while_tames_infinite_sources() {
    use crate::{iota, Pipe};

    let count = iota().take_while(|x| *x < 100).count();

    assert!(count == 100);
}
