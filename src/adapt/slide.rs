use crate::adapt::slice::{self, Slice};
use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{advance, cached, ExactSize, Multipass, Sequence};

/// Overlapping windows of a runtime width. See
/// [`Pipe::slide`](crate::Pipe::slide).
///
/// Each element is a [`Slice`] of `width` consecutive base elements;
/// successive windows overlap in all but one position. For a
/// compile-time width (and array elements instead of slices) see
/// [`adjacent`](crate::Pipe::adjacent).
#[derive(Clone, Debug)]
pub struct Slide<B: Sequence> {
    base: B,
    width: Distance,
}

/// Cursor of [`Slide`]: both window bounds and the window itself.
#[derive(Clone)]
pub struct SlideCursor<B: Sequence> {
    from: B::Cursor,
    to: B::Cursor,
    slot: Option<Slice<B>>,
}

impl<B: Sequence> PartialEq for SlideCursor<B> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

pub(crate) fn new<B>(base: B, width: Distance) -> Slide<B>
where
    B: Multipass + Clone,
{
    runtime_check!(width > 0, "slide with a nonpositive width");

    Slide { base, width }
}

impl<B> Slide<B>
where
    B: Multipass + Clone,
{
    fn window(&mut self, from: &B::Cursor, to: &B::Cursor) -> Option<Slice<B>> {
        Some(slice::new(self.base.clone(), from.clone(), to.clone()))
    }
}

impl<B> Sequence for Slide<B>
where
    B: Multipass + Clone,
{
    type Value = Slice<B>;
    type Cursor = SlideCursor<B>;

    const IS_INFINITE: bool = B::IS_INFINITE;

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();
        let mut to = from.clone();
        let taken = advance(&mut self.base, &mut to, self.width);

        if taken < self.width {
            // shorter than one window: empty
            return SlideCursor {
                from,
                to,
                slot: None,
            };
        }

        let slot = self.window(&from, &to);

        SlideCursor { from, to, slot }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.slot.is_none()
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        runtime_check!(cur.slot.is_some(), "inc past the end of slide");

        self.base.inc(&mut cur.from);

        if self.base.is_last(&cur.to) {
            // that was the last full window
            cur.slot = None;
        } else {
            self.base.inc(&mut cur.to);
            cur.slot = self.window(&cur.from, &cur.to);
        }
    }

    fn read_at<'a>(&'a self, cur: &'a Self::Cursor) -> &'a Slice<B> {
        cached(&cur.slot)
    }

    fn size_hint(&self) -> Option<usize> {
        let width = self.width as usize;

        self.base
            .size_hint()
            .map(|n| (n + 1).saturating_sub(width))
    }
}

impl<B> Multipass for Slide<B> where B: Multipass + Clone {}

impl<B> ExactSize for Slide<B>
where
    B: Multipass + Clone + ExactSize,
{
    fn size(&self) -> Distance {
        num::sub(num::add(self.base.size(), 1), self.width).max(0)
    }
}

#[cfg(feature = "std")]
#[test]
fn test_slide_overlapping_windows() {
    use crate::Pipe;

    let s = &[1, 2, 3, 4][..];

    let windows: Vec<Vec<i32>> = s.slide(3).map(|w| w.clone().map(|x| *x).to()).to();
    assert!(windows == vec![vec![1, 2, 3], vec![2, 3, 4]]);
}

#[test]
fn test_slide_wider_than_base_is_empty() {
    use crate::Pipe;

    let s = &[1, 2][..];

    assert!(s.slide(3).count() == 0);
}

#[test]
fn test_slide_size() {
    use crate::ExactSize;

    assert!(new(&[1, 2, 3, 4, 5][..], 2).size() == 4);
    assert!(new(&[1][..], 2).size() == 0);
}
