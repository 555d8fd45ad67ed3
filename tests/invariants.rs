// Property tests for the universal cursor invariants, in the spirit of
// checking every source and a few representative adaptor stacks
// against the same fixture.

use proptest::prelude::*;

use lazy_seq::{
    Bidirectional, Bounded, Contiguous, Distance, ExactSize, Multipass, Pipe, RandomAccess,
    Sequence,
};

// Invariant: `is_last(first())` exactly on empty sequences, and
// walking `inc` from `first` visits `size` elements.
fn check_walk_length<S>(mut seq: S)
where
    S: Sequence + ExactSize,
{
    let size = seq.size();

    let mut cur = seq.first();
    let mut steps: Distance = 0;

    assert!(seq.is_last(&cur) == (size == 0));

    while !seq.is_last(&cur) {
        seq.inc(&mut cur);
        steps += 1;
    }

    assert!(steps == size);
}

// Invariant: distance agrees with size, jumps are invertible, and
// distance is antisymmetric.
fn check_random_access<S>(mut seq: S, offset: Distance)
where
    S: RandomAccess + Bounded + ExactSize,
    S::Cursor: Ord,
{
    let first = seq.first();
    let last = seq.last();

    assert!(seq.distance(&first, &last) == seq.size());
    assert!(seq.distance(&last, &first) == -seq.size());

    let k = offset.rem_euclid(seq.size() + 1);

    let mut cur = seq.first();
    seq.inc_by(&mut cur, k);
    seq.inc_by(&mut cur, -k);

    assert!(cur == first);
}

// Invariant: `dec` undoes `inc` everywhere it is allowed.
fn check_bidirectional<S>(mut seq: S)
where
    S: Bidirectional,
{
    let mut cur = seq.first();

    while !seq.is_last(&cur) {
        let before = cur.clone();

        seq.inc(&mut cur);

        let mut back = cur.clone();
        seq.dec(&mut back);
        assert!(back == before);

        if !seq.is_last(&cur) {
            let mut forth = back;
            seq.inc(&mut forth);
            assert!(forth == cur);
        }
    }
}

// Invariant: advancing a cursor copy does not disturb the original.
fn check_multipass<S>(mut seq: S)
where
    S: Multipass,
    S::Value: Clone + PartialEq,
{
    let cur = seq.first();

    if seq.is_last(&cur) {
        return;
    }

    let witness = seq.move_at(&cur);

    let mut copy = cur.clone();
    seq.inc(&mut copy);

    assert!(*seq.read_at(&cur) == witness);
}

// Invariant: the first element lives at the start of the contiguous
// block, and successive reads walk it in order.
fn check_contiguous<S>(mut seq: S)
where
    S: Contiguous + ExactSize,
    S::Cursor: Ord,
    S::Value: PartialEq,
{
    let storage_len = seq.as_slice().len();
    assert!(storage_len == seq.size() as usize);

    let mut cur = seq.first();
    let mut index = 0;

    while !seq.is_last(&cur) {
        assert!(core::ptr::eq(seq.read_at(&cur), &seq.as_slice()[index]));

        seq.inc(&mut cur);
        index += 1;
    }
}

proptest! {
    #[test]
    fn proptest_slice_walk(data in prop::collection::vec(any::<i32>(), 0..64)) {
        check_walk_length(&data[..]);
        check_bidirectional(&data[..]);
        check_multipass(&data[..]);
        check_contiguous(&data[..]);
    }

    #[test]
    fn proptest_slice_random_access(
        data in prop::collection::vec(any::<i32>(), 0..64),
        offset in any::<Distance>(),
    ) {
        check_random_access(&data[..], offset);
    }

    #[test]
    fn proptest_map_preserves_the_walk(data in prop::collection::vec(any::<i16>(), 0..64)) {
        let doubled = (&data[..]).map(|x| *x as i32 * 2);

        check_walk_length(doubled.clone());
        check_bidirectional(doubled.clone());
        check_multipass(doubled);
    }

    #[test]
    fn proptest_take_drop_sizes(
        data in prop::collection::vec(any::<u8>(), 0..64),
        n in 0..80 as Distance,
    ) {
        let len = data.len() as Distance;

        prop_assert!((&data[..]).take(n).size() == n.min(len));
        prop_assert!((&data[..]).drop(n).size() == (len - n).max(0));

        check_walk_length((&data[..]).take(n));
        check_walk_length((&data[..]).drop(n));
    }

    #[test]
    fn proptest_filter_agrees_with_std(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let ours: Vec<i32> = (&data[..]).filter(|x| x % 3 == 0).map(|x| *x).to();
        let std: Vec<i32> = data.iter().copied().filter(|x| x % 3 == 0).collect();

        prop_assert!(ours == std);
        check_bidirectional((&data[..]).filter(|x| x % 3 == 0));
    }

    #[test]
    fn proptest_reverse_agrees_with_std(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let ours: Vec<i32> = (&data[..]).reverse().map(|x| *x).to();
        let std: Vec<i32> = data.iter().copied().rev().collect();

        prop_assert!(ours == std);
        check_walk_length((&data[..]).reverse());
        check_bidirectional((&data[..]).reverse());
    }

    #[test]
    fn proptest_chain_walks_both(
        left in prop::collection::vec(any::<i32>(), 0..32),
        right in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let chained = (&left[..]).chain(&right[..]);

        check_walk_length(chained.clone());
        check_bidirectional(chained.clone());
        check_multipass(chained.clone());

        let ours: Vec<i32> = chained.map(|x| *x).to();
        let std: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
        prop_assert!(ours == std);
    }

    #[test]
    fn proptest_stride_covers_every_step(
        data in prop::collection::vec(any::<i32>(), 0..64),
        step in 1..8 as Distance,
    ) {
        let ours: Vec<i32> = (&data[..]).stride(step).map(|x| *x).to();
        let std: Vec<i32> = data.iter().step_by(step as usize).copied().collect();

        prop_assert!(ours == std);
        check_walk_length((&data[..]).stride(step));
        check_bidirectional((&data[..]).stride(step));
    }

    #[test]
    fn proptest_zip_against_std(
        left in prop::collection::vec(any::<i8>(), 0..32),
        right in prop::collection::vec(any::<i8>(), 0..32),
    ) {
        let ours: Vec<(i8, i8)> = (&left[..]).zip(&right[..]).to();
        let std: Vec<(i8, i8)> = left.iter().copied().zip(right.iter().copied()).collect();

        prop_assert!(ours == std);
        check_walk_length((&left[..]).zip(&right[..]));
    }

    #[test]
    fn proptest_sort_agrees_with_std(data in prop::collection::vec(any::<i32>(), 0..256)) {
        let mut ours = data.clone();
        lazy_seq::sort(&mut ours);

        let mut std = data;
        std.sort_unstable();

        prop_assert!(ours == std);
    }

    #[test]
    fn proptest_values_roundtrip(data in prop::collection::vec(any::<u16>(), 0..64)) {
        let through: Vec<u16> = (&data[..]).map(|x| *x).values().collect();

        prop_assert!(through == data);
    }
}
