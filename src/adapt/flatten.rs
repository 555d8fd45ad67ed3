use crate::fault::fault;
use crate::seq::Sequence;

/// Concatenates the inner sequences of a sequence of sequences. See
/// [`Pipe::flatten`](crate::Pipe::flatten).
///
/// The current inner sequence is moved out of the outer element and
/// owned by the adaptor, which is why flatten is single-pass: two
/// cursors would need two copies of that state. Empty inners are
/// skipped transparently.
pub struct Flatten<B: Sequence>
where
    B::Value: Sequence,
{
    base: B,
    outer: Option<B::Cursor>,
    inner: Option<B::Value>,
    inner_cur: Option<<B::Value as Sequence>::Cursor>,
}

/// Like [`Flatten`] but yields a separator sequence between inners.
/// See [`Pipe::flatten_with`](crate::Pipe::flatten_with).
///
/// The separator pattern must be multipass (it is replayed for every
/// gap) and share the inner sequences' value type. Empty inners are
/// *not* skipped: each still gets its separators, so
/// `split(p).flatten_with(p)` restores the original.
pub struct FlattenWith<B: Sequence, P: Sequence>
where
    B::Value: Sequence,
{
    base: B,
    pattern: P,
    outer: Option<B::Cursor>,
    inner: Option<B::Value>,
    phase: Phase<<B::Value as Sequence>::Cursor, P::Cursor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase<IC, PC> {
    Inner(IC),
    Pattern(PC),
    Done,
}

pub(crate) fn new<B>(base: B) -> Flatten<B>
where
    B: Sequence,
    B::Value: Sequence + Clone,
{
    Flatten {
        base,
        outer: None,
        inner: None,
        inner_cur: None,
    }
}

pub(crate) fn new_with<B, P>(base: B, pattern: P) -> FlattenWith<B, P>
where
    B: Sequence,
    B::Value: Sequence + Clone,
    P: crate::seq::Multipass + Sequence<Value = <B::Value as Sequence>::Value>,
{
    FlattenWith {
        base,
        pattern,
        outer: None,
        inner: None,
        phase: Phase::Done,
    }
}

impl<B> Flatten<B>
where
    B: Sequence,
    B::Value: Sequence + Clone,
{
    // Loads inner sequences starting at `self.outer` until one has an
    // element (or the outer ends).
    fn settle(&mut self) {
        loop {
            let outer = match &self.outer {
                Some(cur) => cur.clone(),
                None => return,
            };

            if self.base.is_last(&outer) {
                self.inner = None;
                self.inner_cur = None;

                return;
            }

            let mut inner = self.base.move_at(&outer);
            let inner_cur = inner.first();

            if !inner.is_last(&inner_cur) {
                self.inner = Some(inner);
                self.inner_cur = Some(inner_cur);

                return;
            }

            let mut next = outer;
            self.base.inc(&mut next);
            self.outer = Some(next);
        }
    }
}

impl<B> Sequence for Flatten<B>
where
    B: Sequence,
    B::Value: Sequence + Clone,
{
    type Value = <B::Value as Sequence>::Value;
    type Cursor = ();

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> () {
        self.outer = Some(self.base.first());
        self.settle();
    }

    fn is_last(&mut self, _cur: &()) -> bool {
        if self.outer.is_none() {
            self.first();
        }

        self.inner.is_none()
    }

    fn inc(&mut self, _cur: &mut ()) {
        let (inner, inner_cur) = match (&mut self.inner, &mut self.inner_cur) {
            (Some(inner), Some(cur)) => (inner, cur),
            _ => fault("inc past the end of flatten"),
        };

        inner.inc(inner_cur);

        if inner.is_last(inner_cur) {
            let mut outer = self.outer.clone().unwrap();
            self.base.inc(&mut outer);
            self.outer = Some(outer);

            self.settle();
        }
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a Self::Value {
        match (&self.inner, &self.inner_cur) {
            (Some(inner), Some(cur)) => inner.read_at(cur),
            _ => fault("read_at past the end of flatten"),
        }
    }
}

impl<B, P> FlattenWith<B, P>
where
    B: Sequence,
    B::Value: Sequence + Clone,
    P: crate::seq::Multipass + Sequence<Value = <B::Value as Sequence>::Value>,
{
    // Loads the inner sequence under `self.outer` and advances past it.
    fn load_inner(&mut self) {
        let outer = self.outer.clone().unwrap();

        if self.base.is_last(&outer) {
            self.inner = None;
            self.phase = Phase::Done;

            return;
        }

        let mut inner = self.base.move_at(&outer);
        let inner_cur = inner.first();

        let mut next = outer;
        self.base.inc(&mut next);
        self.outer = Some(next);

        self.inner = Some(inner);
        self.phase = Phase::Inner(inner_cur);
    }

    // Moves to the next readable element: out of exhausted inners into
    // the separator, and out of exhausted separators into the next
    // inner.
    fn settle(&mut self) {
        loop {
            match &self.phase {
                Phase::Inner(cur) => {
                    let cur = cur.clone();
                    let inner = self.inner.as_mut().unwrap();

                    if !inner.is_last(&cur) {
                        return;
                    }

                    let outer = self.outer.clone().unwrap();

                    if self.base.is_last(&outer) {
                        self.phase = Phase::Done;

                        return;
                    }

                    self.phase = Phase::Pattern(self.pattern.first());
                }
                Phase::Pattern(cur) => {
                    let cur = cur.clone();

                    if !self.pattern.is_last(&cur) {
                        return;
                    }

                    self.load_inner();
                }
                Phase::Done => return,
            }
        }
    }
}

impl<B, P> Sequence for FlattenWith<B, P>
where
    B: Sequence,
    B::Value: Sequence + Clone,
    P: crate::seq::Multipass + Sequence<Value = <B::Value as Sequence>::Value>,
{
    type Value = <B::Value as Sequence>::Value;
    type Cursor = ();

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> () {
        self.outer = Some(self.base.first());
        self.load_inner();
        self.settle();
    }

    fn is_last(&mut self, _cur: &()) -> bool {
        if self.outer.is_none() {
            self.first();
        }

        matches!(self.phase, Phase::Done)
    }

    fn inc(&mut self, _cur: &mut ()) {
        match &mut self.phase {
            Phase::Inner(cur) => {
                let mut cur = cur.clone();
                self.inner.as_mut().unwrap().inc(&mut cur);
                self.phase = Phase::Inner(cur);
            }
            Phase::Pattern(cur) => {
                let mut cur = cur.clone();
                self.pattern.inc(&mut cur);
                self.phase = Phase::Pattern(cur);
            }
            Phase::Done => fault("inc past the end of flatten_with"),
        }

        self.settle();
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a Self::Value {
        match &self.phase {
            Phase::Inner(cur) => match &self.inner {
                Some(inner) => inner.read_at(cur),
                None => fault("read_at past the end of flatten_with"),
            },
            Phase::Pattern(cur) => self.pattern.read_at(cur),
            Phase::Done => fault("read_at past the end of flatten_with"),
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_flatten_concatenates() {
    use crate::Pipe;

    let s = &[1, 2, 3, 4, 5, 6][..];

    let v: Vec<i32> = s.chunk(2).flatten().map(|x| *x).to();
    assert!(v == vec![1, 2, 3, 4, 5, 6]);
}

#[cfg(feature = "std")]
#[test]
fn test_flatten_skips_empty_inners() {
    use crate::{from_iter, Pipe};

    let inners = vec![vec![1], vec![], vec![2, 3]];

    let v: Vec<i32> = from_iter(inners.into_iter())
        .map(|inner: &Vec<i32>| inner.clone())
        .flatten()
        .map(|x| *x)
        .to();

    assert!(v == vec![1, 2, 3]);
}

#[cfg(feature = "std")]
#[test]
fn test_flatten_with_restores_split() {
    use crate::Pipe;

    let text = &b"a,,b"[..];

    let v: Vec<u8> = text.split_one(b',').flatten_with(crate::single(b',')).to();
    assert!(v == text.to_vec());
}
