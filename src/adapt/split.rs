use crate::adapt::slice::{self, Slice};
use crate::fault::runtime_check;
use crate::seq::{cached, Bounded, Multipass, Sequence};
use crate::source::Single;

/// Pieces of the base between occurrences of a delimiter pattern. See
/// [`Pipe::split`](crate::Pipe::split),
/// [`Pipe::split_one`](crate::Pipe::split_one) and
/// [`Pipe::split_when`](crate::Pipe::split_when).
///
/// Yields [`Slice`]s over a clone of the base, delimiters excluded. A
/// delimiter at the very end produces a final empty piece, so joining
/// the pieces back with the delimiter restores the base. The pattern
/// must be nonempty.
#[derive(Clone)]
pub struct Split<B: Sequence, N> {
    base: B,
    needle: N,
}

/// [`Split`] with a single-element pattern.
pub type SplitOne<B> = Split<B, Single<<B as Sequence>::Value>>;

/// Pieces of the base between elements matching a predicate. See
/// [`Pipe::split_when`](crate::Pipe::split_when).
#[derive(Clone)]
pub struct SplitWhen<B: Sequence, P> {
    base: B,
    pred: P,
}

/// Cursor of the split adaptors: the piece's bounds, where traversal
/// resumes after the delimiter, and the piece itself.
#[derive(Clone)]
pub struct SplitCursor<B: Sequence> {
    from: B::Cursor,
    to: B::Cursor,
    resume: B::Cursor,
    done: bool,
    slot: Option<Slice<B>>,
}

impl<B: Sequence> PartialEq for SplitCursor<B> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.done == other.done
    }
}

pub(crate) fn new<B, N>(base: B, mut needle: N) -> Split<B, N>
where
    B: Multipass + Clone,
    N: Multipass,
    B::Value: PartialEq<N::Value>,
{
    let start = needle.first();
    runtime_check!(!needle.is_last(&start), "split with an empty pattern");

    Split { base, needle }
}

pub(crate) fn new_one<B>(base: B, delimiter: B::Value) -> SplitOne<B>
where
    B: Multipass + Clone,
    B::Value: PartialEq,
{
    Split {
        base,
        needle: crate::source::single(delimiter),
    }
}

pub(crate) fn new_when<B, P>(base: B, pred: P) -> SplitWhen<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value) -> bool,
{
    SplitWhen { base, pred }
}

impl<B, N> Split<B, N>
where
    B: Multipass + Clone,
    N: Multipass,
    B::Value: PartialEq<N::Value>,
{
    /// The next pattern occurrence at or after `from`: `(start, end)`
    /// half-open, or `(end, end)` of the base on a miss.
    fn find(&mut self, from: &B::Cursor) -> (B::Cursor, B::Cursor) {
        let mut start = from.clone();

        loop {
            let mut h = start.clone();
            let mut n = self.needle.first();

            loop {
                if self.needle.is_last(&n) {
                    return (start, h);
                }

                if self.base.is_last(&h) {
                    break;
                }

                let matches = {
                    let hay = self.base.read_at(&h);
                    let pat = self.needle.read_at(&n);

                    hay == pat
                };

                if !matches {
                    break;
                }

                self.base.inc(&mut h);
                self.needle.inc(&mut n);
            }

            if self.base.is_last(&start) {
                let end = start.clone();

                return (start, end);
            }

            self.base.inc(&mut start);
        }
    }

    fn piece(&mut self, from: &B::Cursor) -> SplitCursor<B> {
        let (to, resume) = self.find(from);
        let slot = Some(slice::new(self.base.clone(), from.clone(), to.clone()));

        SplitCursor {
            from: from.clone(),
            to,
            resume,
            done: false,
            slot,
        }
    }
}

impl<B, N> Sequence for Split<B, N>
where
    B: Multipass + Clone,
    N: Multipass,
    B::Value: PartialEq<N::Value>,
{
    type Value = Slice<B>;
    type Cursor = SplitCursor<B>;

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();

        self.piece(&from)
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.done
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(!cur.done, "inc past the end of split");

        if cur.to == cur.resume {
            // no delimiter in the last piece: that was the end
            cur.done = true;
            cur.slot = None;
        } else {
            *cur = self.piece(&cur.resume.clone());
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Slice<B> {
        cached(&cur.slot)
    }
}

impl<B, N> Multipass for Split<B, N>
where
    B: Multipass + Clone,
    N: Multipass,
    B::Value: PartialEq<N::Value>,
{
}

impl<B, N> Bounded for Split<B, N>
where
    B: Multipass + Clone + Bounded,
    N: Multipass,
    B::Value: PartialEq<N::Value>,
{
    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();

        SplitCursor {
            from: end.clone(),
            to: end.clone(),
            resume: end,
            done: true,
            slot: None,
        }
    }
}

impl<B, P> SplitWhen<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value) -> bool,
{
    fn piece(&mut self, from: &B::Cursor) -> SplitCursor<B> {
        let mut to = from.clone();

        loop {
            if self.base.is_last(&to) {
                break;
            }

            if (self.pred)(self.base.read_at(&to)) {
                break;
            }

            self.base.inc(&mut to);
        }

        let mut resume = to.clone();

        if !self.base.is_last(&resume) {
            self.base.inc(&mut resume);
        }

        let slot = Some(slice::new(self.base.clone(), from.clone(), to.clone()));

        SplitCursor {
            from: from.clone(),
            to,
            resume,
            done: false,
            slot,
        }
    }
}

impl<B, P> Sequence for SplitWhen<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value) -> bool,
{
    type Value = Slice<B>;
    type Cursor = SplitCursor<B>;

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();

        self.piece(&from)
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.done
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(!cur.done, "inc past the end of split_when");

        if cur.to == cur.resume {
            cur.done = true;
            cur.slot = None;
        } else {
            *cur = self.piece(&cur.resume.clone());
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Slice<B> {
        cached(&cur.slot)
    }
}

impl<B, P> Multipass for SplitWhen<B, P>
where
    B: Multipass + Clone,
    P: FnMut(&B::Value) -> bool,
{
}

impl<B, P> Bounded for SplitWhen<B, P>
where
    B: Multipass + Clone + Bounded,
    P: FnMut(&B::Value) -> bool,
{
    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();

        SplitCursor {
            from: end.clone(),
            to: end.clone(),
            resume: end,
            done: true,
            slot: None,
        }
    }
}

#[cfg(test)]
fn pieces_of<S>(mut seq: S) -> Vec<Vec<u8>>
where
    S: Sequence,
    S::Value: Sequence<Value = u8> + Clone,
{
    use crate::Pipe;

    let mut out = Vec::new();
    let mut cur = seq.first();

    while !seq.is_last(&cur) {
        let piece = seq.read_at(&cur).clone();
        out.push(piece.map(|b| *b).to());
        seq.inc(&mut cur);
    }

    out
}

#[cfg(feature = "std")]
#[test]
fn test_split_one_words() {
    let text = &b"the quick brown fox"[..];

    let words = pieces_of(new_one(text, b' '));
    assert!(words == vec![b"the".to_vec(), b"quick".to_vec(), b"brown".to_vec(), b"fox".to_vec()]);
}

#[cfg(feature = "std")]
#[test]
fn test_split_keeps_empty_pieces() {
    let text = &b"a,,b,"[..];

    let parts = pieces_of(new_one(text, b','));
    assert!(parts == vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec(), b"".to_vec()]);
}

#[cfg(feature = "std")]
#[test]
fn test_split_by_pattern() {
    let text = &b"x--y--z"[..];

    let parts = pieces_of(new(text, &b"--"[..]));
    assert!(parts == vec![b"x".to_vec(), b"y".to_vec(), b"z".to_vec()]);
}

#[cfg(feature = "std")]
#[test]
fn test_split_when_predicate() {
    let digits = &[1u8, 2, 0, 3, 0, 4][..];

    let parts = pieces_of(new_when(digits, |x: &u8| *x == 0));
    assert!(parts == vec![vec![1, 2], vec![3], vec![4]]);
}
