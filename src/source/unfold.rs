use crate::seq::Sequence;

/// The infinite orbit of a state under a step function. See [`unfold`].
#[derive(Clone, Debug)]
pub struct Unfold<S, F> {
    state: S,
    step: F,
}

/// The sequence `seed, f(seed), f(f(seed)), …`.
///
/// Single-pass and infinite; the element is a shared reference to the
/// current state, which lives inside the source and is advanced by
/// `inc`.
///
/// ```
/// use lazy_seq::{unfold, Pipe};
///
/// let powers: Vec<u64> = unfold(1u64, |x| x * 2).take(5).to();
/// assert!(powers == vec![1, 2, 4, 8, 16]);
/// ```
pub fn unfold<S, F>(seed: S, step: F) -> Unfold<S, F>
where
    F: FnMut(&S) -> S,
{
    Unfold { state: seed, step }
}

impl<S, F> Sequence for Unfold<S, F>
where
    F: FnMut(&S) -> S,
{
    type Value = S;
    type Cursor = ();

    const IS_INFINITE: bool = true;

    fn first(&mut self) -> () {}

    fn is_last(&mut self, _cur: &()) -> bool {
        false
    }

    fn inc(&mut self, _cur: &mut ()) {
        self.state = (self.step)(&self.state);
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a S {
        &self.state
    }
}

#[test]
fn test_unfold_starts_at_the_seed() {
    let mut fib = unfold((0u32, 1u32), |&(a, b)| (b, a + b));

    let cur = fib.first();
    assert!(*fib.read_at(&cur) == (0, 1));

    fib.inc(&mut ());
    fib.inc(&mut ());
    assert!(*fib.read_at(&cur) == (1, 2));
}
