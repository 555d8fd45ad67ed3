use crate::seq::{Multipass, Sequence};

/// Keeps the base elements whose aligned mask element is `true`. See
/// [`Pipe::mask`](crate::Pipe::mask).
///
/// Base and mask advance in lock step; the sequence ends when either
/// runs out.
#[derive(Clone, Debug)]
pub struct Mask<B, M> {
    base: B,
    mask: M,
}

/// Cursor of [`Mask`]: both lanes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskCursor<CB, CM> {
    base: CB,
    mask: CM,
}

pub(crate) fn new<B, M>(base: B, mask: M) -> Mask<B, M>
where
    B: Sequence,
    M: Sequence<Value = bool>,
{
    Mask { base, mask }
}

impl<B, M> Mask<B, M>
where
    B: Sequence,
    M: Sequence<Value = bool>,
{
    // Skips forward to the next position whose mask bit is set.
    fn align(&mut self, cur: &mut MaskCursor<B::Cursor, M::Cursor>) {
        loop {
            if self.base.is_last(&cur.base) || self.mask.is_last(&cur.mask) {
                break;
            }

            if *self.mask.read_at(&cur.mask) {
                break;
            }

            self.base.inc(&mut cur.base);
            self.mask.inc(&mut cur.mask);
        }
    }
}

impl<B, M> Sequence for Mask<B, M>
where
    B: Sequence,
    M: Sequence<Value = bool>,
{
    type Value = B::Value;
    type Cursor = MaskCursor<B::Cursor, M::Cursor>;

    const IS_INFINITE: bool = B::IS_INFINITE && M::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        let mut cur = MaskCursor {
            base: self.base.first(),
            mask: self.mask.first(),
        };

        self.align(&mut cur);

        cur
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.base) || self.mask.is_last(&cur.mask)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.base);
        self.mask.inc(&mut cur.mask);
        self.align(cur);
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at(&cur.base)
    }

    fn read_at_unchecked<'a>(&'a self, cur: &'a Self::Cursor) -> &'a B::Value {
        self.base.read_at_unchecked(&cur.base)
    }
}

impl<B, M> Multipass for Mask<B, M>
where
    B: Multipass,
    M: Multipass<Value = bool>,
{
}

#[cfg(feature = "std")]
#[test]
fn test_mask_keeps_true_positions() {
    use crate::Pipe;

    let data = &[1, 2, 3, 4, 5][..];
    let keep = &[true, false, true, false, true][..];

    let v: Vec<i32> = data.mask(keep.map(|b| *b)).map(|x| *x).to();
    assert!(v == vec![1, 3, 5]);
}

#[cfg(feature = "std")]
#[test]
fn test_mask_stops_at_the_shorter_lane() {
    use crate::Pipe;

    let data = &[1, 2, 3, 4][..];
    let keep = &[true, true][..];

    let v: Vec<i32> = data.mask(keep.map(|b| *b)).map(|x| *x).to();
    assert!(v == vec![1, 2]);
}
