// Adaptor identities: round trips that must hold observationally.

use lazy_seq::{iota_range, Distance, Pipe};

fn collect<S>(seq: S) -> Vec<S::Value>
where
    S: lazy_seq::Sequence,
    S::Value: Clone,
{
    lazy_seq::to(seq)
}

#[test]
fn test_reverse_of_reverse_is_identity() {
    let base = &[1, 2, 3, 4, 5][..];

    assert!(collect(base.reverse().reverse()) == collect(base));
}

#[test]
fn test_take_chain_drop_is_identity() {
    let base = &[1, 2, 3, 4, 5, 6, 7][..];

    for n in 0..=7 {
        let recombined: Vec<i32> = base.take(n).chain(base.drop(n)).map(|x| *x).to();

        assert!(recombined == base.to_vec());
    }
}

#[test]
fn test_map_identity_is_identity() {
    let base = &["a", "b", "c"][..];

    assert!(collect(base.map(|x| *x)) == base.to_vec());
}

#[test]
fn test_zip_then_project_is_a_prefix() {
    let long = &[1, 2, 3, 4][..];
    let short = &['x', 'y'][..];

    let firsts: Vec<i32> = long.zip(short).map(|pair| pair.0).to();

    assert!(firsts == vec![1, 2]);
}

#[test]
fn test_cartesian_size_is_the_product() {
    use lazy_seq::ExactSize;

    let p = iota_range(0, 4).cartesian_product(iota_range(0, 5));

    assert!(p.size() == 20);
    assert!(p.count() == 20);
}

#[test]
fn test_split_then_flatten_with_is_identity() {
    let text = &b"alpha beta  gamma"[..];

    let rejoined: Vec<u8> = text
        .split_one(b' ')
        .flatten_with(lazy_seq::single(b' '))
        .to();

    assert!(rejoined == text.to_vec());
}

#[test]
fn test_chunk_then_flatten_is_identity() {
    let base = &[1, 2, 3, 4, 5, 6, 7][..];

    for width in 1..=8 {
        let rejoined: Vec<i32> = base.chunk(width).flatten().to();

        assert!(rejoined == base.to_vec());
    }
}

#[test]
fn test_dedup_is_idempotent() {
    let base = &[1, 1, 2, 3, 3, 3, 1][..];

    let once: Vec<i32> = collect(base.dedup());
    let twice: Vec<i32> = collect(base.dedup().dedup());

    assert!(once == twice);
    assert!(once == vec![1, 2, 3, 1]);
}

#[test]
fn test_sorting_twice_changes_nothing() {
    let mut data: Vec<i64> = (0..200).map(|i| (i * 31) % 17).collect();

    lazy_seq::sort(&mut data);
    let once = data.clone();

    lazy_seq::sort(&mut data);
    assert!(data == once);

    // no adjacent pair out of order
    let misordered = (&data).pairwise().any(|[a, b]| a > b);
    assert!(!misordered);
}

#[test]
fn test_stride_then_interleave_covers_everything() {
    let base = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][..];

    let strided: Vec<i32> = collect(base.stride(2));
    let offset: Vec<i32> = collect(base.drop(1).stride(2));

    let mut merged: Vec<i32> = strided
        .iter()
        .copied()
        .chain(offset.iter().copied())
        .collect();
    merged.sort();

    assert!(merged == base.to_vec());
}

#[test]
fn test_mask_complements_partition() {
    let base = &[5, 8, 13, 21, 34][..];
    let odd_mask: Vec<bool> = (&base[..]).map(|x| x % 2 == 1).to();

    let odds: Vec<i32> = collect(base.mask(&odd_mask));
    let evens: Vec<i32> = collect(base.mask((&odd_mask).map(|b| !b)));

    assert!(odds.len() + evens.len() == base.len());
    assert!(odds == vec![5, 13, 21]);
    assert!(evens == vec![8, 34]);
}

#[test]
fn test_cycle_times_equals_repeated_chain() {
    let base = &[1, 2, 3][..];

    let cycled: Vec<i32> = collect(base.cycle_times(3));
    let chained: Vec<i32> = collect(base.chain(base).chain(base));

    assert!(cycled == chained);
}

#[test]
fn test_cursors_index_back_into_the_source() {
    use lazy_seq::Sequence;

    let mut base = &[10, 20, 30][..];

    let positions: Vec<Distance> = collect(base.cursors());

    for (i, cur) in positions.iter().enumerate() {
        assert!(*base.read_at(cur) == base[i]);
    }
}
