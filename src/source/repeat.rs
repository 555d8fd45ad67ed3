use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// Endless repetition of one value. See [`repeat`].
#[derive(Clone, Copy, Debug)]
pub struct Repeat<T> {
    value: T,
}

/// `n`-fold repetition of one value. See [`repeat_n`].
#[derive(Clone, Copy, Debug)]
pub struct RepeatN<T> {
    value: T,
    count: Distance,
}

/// The value, forever. Infinite and random-access; every element is
/// the same shared reference into the source.
///
/// ```
/// use lazy_seq::{repeat, Pipe};
///
/// assert!(repeat(42).take(5).sum::<i32>() == 210);
/// ```
pub fn repeat<T>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// The value, `n` times. Bounded, sized and random-access.
///
/// ```
/// use lazy_seq::{repeat_n, Pipe};
///
/// assert!(repeat_n(42, 5).fold(0, |acc, x| acc + x) == 210);
/// ```
pub fn repeat_n<T>(value: T, n: Distance) -> RepeatN<T> {
    runtime_check!(n >= 0, "repeat_n with a negative count");

    RepeatN { value, count: n }
}

impl<T> Sequence for Repeat<T> {
    type Value = T;
    type Cursor = Distance;

    const IS_INFINITE: bool = true;

    fn first(&mut self) -> Distance {
        0
    }

    fn is_last(&mut self, _cur: &Distance) -> bool {
        false
    }

    fn inc(&mut self, cur: &mut Distance) {
        *cur = num::add(*cur, 1);
    }

    fn read_at<'a>(&'a self, _cur: &'a Distance) -> &'a T {
        &self.value
    }
}

impl<T> Multipass for Repeat<T> {}

impl<T> Bidirectional for Repeat<T> {
    fn dec(&mut self, cur: &mut Distance) {
        runtime_check!(*cur > 0, "dec before the start of repeat");

        *cur = num::sub(*cur, 1);
    }
}

impl<T> RandomAccess for Repeat<T> {
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let target = num::add(*cur, offset);

        runtime_check!(target >= 0, "jump before the start of repeat");

        *cur = target;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        num::sub(*to, *from)
    }
}

impl<T> Sequence for RepeatN<T> {
    type Value = T;
    type Cursor = Distance;

    fn first(&mut self) -> Distance {
        0
    }

    fn is_last(&mut self, cur: &Distance) -> bool {
        *cur >= self.count
    }

    fn inc(&mut self, cur: &mut Distance) {
        runtime_check!(*cur < self.count, "inc past the end of repeat_n");

        *cur = num::add(*cur, 1);
    }

    fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a T {
        runtime_check!(
            *cur >= 0 && *cur < self.count,
            "repeat_n cursor out of bounds"
        );

        &self.value
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.count as usize)
    }
}

impl<T> Multipass for RepeatN<T> {}

impl<T> Bidirectional for RepeatN<T> {
    fn dec(&mut self, cur: &mut Distance) {
        runtime_check!(*cur > 0, "dec before the start of repeat_n");

        *cur = num::sub(*cur, 1);
    }
}

impl<T> RandomAccess for RepeatN<T> {
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let target = num::add(*cur, offset);

        runtime_check!(
            target >= 0 && target <= self.count,
            "jump outside of repeat_n"
        );

        *cur = target;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        num::sub(*to, *from)
    }
}

impl<T> Bounded for RepeatN<T> {
    fn last(&mut self) -> Distance {
        self.count
    }
}

impl<T> ExactSize for RepeatN<T> {
    fn size(&self) -> Distance {
        self.count
    }
}

#[test]
fn test_repeat_lends_the_same_reference() {
    let mut r = repeat("x");

    let a = r.first();
    let mut b = r.first();
    r.inc(&mut b);

    assert!(core::ptr::eq(r.read_at(&a), r.read_at(&b)));
}

#[test]
fn test_repeat_n_is_sized() {
    assert!(repeat_n('q', 3).size() == 3);
    assert!(repeat_n('q', 0).size() == 0);
}
