use core::cmp::Ordering;

use crate::seq::{Multipass, Sequence};

/// The least element; ties keep the first occurrence. `None` when
/// empty.
///
/// `Ord` keeps floating-point values out of the unqualified forms;
/// sort or compare floats through the `_by` variants with an explicit
/// comparator such as `f64::total_cmp`.
pub fn min<S>(seq: &mut S) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Ord + Clone,
{
    min_by(seq, Ord::cmp)
}

/// The greatest element; ties keep the last occurrence. `None` when
/// empty.
pub fn max<S>(seq: &mut S) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Ord + Clone,
{
    max_by(seq, Ord::cmp)
}

/// Least and greatest in one pass, with the same tie-breaks as
/// [`min`] and [`max`].
pub fn minmax<S>(seq: &mut S) -> Option<(S::Value, S::Value)>
where
    S: Sequence,
    S::Value: Ord + Clone,
{
    minmax_by(seq, Ord::cmp)
}

/// [`min`] under a caller-supplied comparator.
pub fn min_by<S, C>(seq: &mut S, mut cmp: C) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Clone,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut best: Option<S::Value> = None;

    seq.for_each_while(|value| {
        let better = match &best {
            None => true,
            Some(sofar) => cmp(value, sofar) == Ordering::Less,
        };

        if better {
            best = Some(value.clone());
        }

        true
    });

    best
}

/// [`max`] under a caller-supplied comparator.
pub fn max_by<S, C>(seq: &mut S, mut cmp: C) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Clone,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut best: Option<S::Value> = None;

    seq.for_each_while(|value| {
        // "not less" rather than "greater": equal elements replace the
        // champion, so the last of a tie wins
        let better = match &best {
            None => true,
            Some(sofar) => cmp(value, sofar) != Ordering::Less,
        };

        if better {
            best = Some(value.clone());
        }

        true
    });

    best
}

/// [`minmax`] under a caller-supplied comparator.
pub fn minmax_by<S, C>(seq: &mut S, mut cmp: C) -> Option<(S::Value, S::Value)>
where
    S: Sequence,
    S::Value: Clone,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut pair: Option<(S::Value, S::Value)> = None;

    seq.for_each_while(|value| {
        match &mut pair {
            None => pair = Some((value.clone(), value.clone())),
            Some((least, greatest)) => {
                if cmp(value, least) == Ordering::Less {
                    *least = value.clone();
                }

                if cmp(value, greatest) != Ordering::Less {
                    *greatest = value.clone();
                }
            }
        }

        true
    });

    pair
}

/// The cursor of the least element (first of a tie); the past-the-end
/// cursor when empty.
pub fn find_min<S>(seq: &mut S) -> S::Cursor
where
    S: Multipass,
    S::Value: Ord,
{
    find_min_by(seq, Ord::cmp)
}

/// The cursor of the greatest element (last of a tie); the past-the-end
/// cursor when empty.
pub fn find_max<S>(seq: &mut S) -> S::Cursor
where
    S: Multipass,
    S::Value: Ord,
{
    find_max_by(seq, Ord::cmp)
}

/// Both extremal cursors in one pass.
pub fn find_minmax<S>(seq: &mut S) -> (S::Cursor, S::Cursor)
where
    S: Multipass,
    S::Value: Ord,
{
    (find_min(seq), find_max(seq))
}

/// [`find_min`] under a caller-supplied comparator.
pub fn find_min_by<S, C>(seq: &mut S, mut cmp: C) -> S::Cursor
where
    S: Multipass,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut cur = seq.first();
    let mut best = cur.clone();

    while !seq.is_last(&cur) {
        let better = {
            let value = seq.read_at(&cur);
            let champion = seq.read_at(&best);

            cmp(value, champion) == Ordering::Less
        };

        if better {
            best = cur.clone();
        }

        seq.inc(&mut cur);
    }

    best
}

/// [`find_max`] under a caller-supplied comparator.
pub fn find_max_by<S, C>(seq: &mut S, mut cmp: C) -> S::Cursor
where
    S: Multipass,
    C: FnMut(&S::Value, &S::Value) -> Ordering,
{
    let mut cur = seq.first();
    let mut best = cur.clone();

    while !seq.is_last(&cur) {
        let better = {
            let value = seq.read_at(&cur);
            let champion = seq.read_at(&best);

            cmp(value, champion) != Ordering::Less
        };

        if better {
            best = cur.clone();
        }

        seq.inc(&mut cur);
    }

    best
}

#[test]
fn test_min_keeps_first_max_keeps_last() {
    use crate::Sequence;

    // equal keys, distinguishable payloads
    let mut s = &[(1, 'a'), (0, 'b'), (0, 'c'), (2, 'd')][..];

    let least = min_by(&mut s, |x, y| x.0.cmp(&y.0));
    assert!(least == Some((0, 'b')));

    let greatest = max_by(&mut s, |x, y| x.0.cmp(&y.0));
    assert!(greatest == Some((2, 'd')));

    let cur = find_min_by(&mut s, |x, y| x.0.cmp(&y.0));
    assert!(s.read_at(&cur).1 == 'b');
}

#[test]
fn test_minmax_on_empty() {
    let mut e = &[][..] as &[i32];

    assert!(minmax(&mut e) == None);
}

#[test]
fn test_minmax_pair() {
    let mut s = &[3, 1, 4, 1, 5][..];

    assert!(minmax(&mut s) == Some((1, 5)));
}
