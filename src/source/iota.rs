use crate::fault::runtime_check;
use crate::num::{self, Distance};
use crate::seq::{
    Bidirectional, Bounded, ExactSize, Multipass, RandomAccess, Sequence,
};

/// An unbounded ascending run of integers. See [`iota`] and
/// [`iota_from`].
///
/// The cursors *are* the integers, so this source stores nothing but
/// its starting point.
#[derive(Clone, Copy, Debug)]
pub struct Iota {
    start: Distance,
}

/// A bounded half-open run of integers. See [`iota_range`].
#[derive(Clone, Copy, Debug)]
pub struct IotaRange {
    lo: Distance,
    hi: Distance,
}

/// All integers from `0` upward. Infinite and random-access.
///
/// ```
/// use lazy_seq::{iota, Pipe};
///
/// let head: Vec<i64> = iota().take(4).map(|x| *x as i64).to();
/// assert!(head == vec![0, 1, 2, 3]);
/// ```
pub fn iota() -> Iota {
    Iota { start: 0 }
}

/// All integers from `start` upward. Infinite and random-access.
pub fn iota_from(start: Distance) -> Iota {
    Iota { start }
}

/// The integers in `lo..hi`. Bounded, sized and random-access.
///
/// ```
/// use lazy_seq::{iota_range, Pipe};
///
/// assert!(iota_range(1, 5).sum::<lazy_seq::Distance>() == 10);
/// ```
pub fn iota_range(lo: Distance, hi: Distance) -> IotaRange {
    runtime_check!(lo <= hi, "iota_range bounds out of order");

    IotaRange { lo, hi }
}

impl Sequence for Iota {
    type Value = Distance;
    type Cursor = Distance;

    const IS_INFINITE: bool = true;

    fn first(&mut self) -> Distance {
        self.start
    }

    fn is_last(&mut self, _cur: &Distance) -> bool {
        false
    }

    fn inc(&mut self, cur: &mut Distance) {
        *cur = num::add(*cur, 1);
    }

    fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a Distance {
        cur
    }
}

impl Multipass for Iota {}

impl Bidirectional for Iota {
    fn dec(&mut self, cur: &mut Distance) {
        runtime_check!(*cur > self.start, "dec before the start of iota");

        *cur = num::sub(*cur, 1);
    }
}

impl RandomAccess for Iota {
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let target = num::add(*cur, offset);

        runtime_check!(target >= self.start, "jump before the start of iota");

        *cur = target;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        num::sub(*to, *from)
    }
}

impl Sequence for IotaRange {
    type Value = Distance;
    type Cursor = Distance;

    fn first(&mut self) -> Distance {
        self.lo
    }

    fn is_last(&mut self, cur: &Distance) -> bool {
        *cur >= self.hi
    }

    fn inc(&mut self, cur: &mut Distance) {
        runtime_check!(*cur < self.hi, "inc past the end of iota_range");

        *cur = num::add(*cur, 1);
    }

    fn read_at<'a>(&'a self, cur: &'a Distance) -> &'a Distance {
        runtime_check!(
            *cur >= self.lo && *cur < self.hi,
            "iota_range cursor out of bounds"
        );

        cur
    }

    fn size_hint(&self) -> Option<usize> {
        Some(num::sub(self.hi, self.lo) as usize)
    }
}

impl Multipass for IotaRange {}

impl Bidirectional for IotaRange {
    fn dec(&mut self, cur: &mut Distance) {
        runtime_check!(*cur > self.lo, "dec before the start of iota_range");

        *cur = num::sub(*cur, 1);
    }
}

impl RandomAccess for IotaRange {
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let target = num::add(*cur, offset);

        runtime_check!(
            target >= self.lo && target <= self.hi,
            "jump outside of iota_range"
        );

        *cur = target;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        num::sub(*to, *from)
    }
}

impl Bounded for IotaRange {
    fn last(&mut self) -> Distance {
        self.hi
    }
}

impl ExactSize for IotaRange {
    fn size(&self) -> Distance {
        num::sub(self.hi, self.lo)
    }
}

#[test]
fn test_iota_cursors_are_integers() {
    let mut ints = iota_from(5);

    let mut cur = ints.first();
    ints.inc(&mut cur);
    ints.inc(&mut cur);

    assert!(*ints.read_at(&cur) == 7);
}

#[test]
fn test_iota_range_size() {
    let r = iota_range(-2, 3);

    assert!(r.size() == 5);
}
