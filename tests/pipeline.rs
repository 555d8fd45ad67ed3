// End-to-end pipelines, one per headline feature.

use lazy_seq::{iota_from, repeat, repeat_n, single, Distance, Pipe};

#[test]
fn test_filtered_mapped_prefix_sum() {
    let total: Distance = iota_from(1)
        .take(4)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 10)
        .sum();

    assert!(total == 60);

    let longer: Distance = iota_from(1)
        .take(10)
        .filter(|x| x % 2 == 0)
        .map(|x| x * 10)
        .sum();

    assert!(longer == 300);
}

#[test]
fn test_cartesian_product_to_vec() {
    let pairs: Vec<(i32, char)> = (&[0, 1][..]).cartesian_product(&['a', 'b', 'c'][..]).to();

    assert!(
        pairs
            == vec![
                (0, 'a'),
                (0, 'b'),
                (0, 'c'),
                (1, 'a'),
                (1, 'b'),
                (1, 'c'),
            ]
    );
}

#[test]
fn test_split_words_to_strings() {
    let text = &b"the quick brown fox"[..];

    let words: Vec<String> = text
        .split_one(b' ')
        .map(|word| {
            let bytes: Vec<u8> = word.clone().map(|b| *b).to();

            String::from_utf8(bytes).unwrap()
        })
        .to();

    assert!(words == vec!["the", "quick", "brown", "fox"]);
}

#[test]
fn test_zip_truncates_to_the_shorter() {
    let zipped: Vec<(i32, &str)> = (&[1, 2, 3][..]).zip(&["a", "b"][..]).to();

    assert!(zipped == vec![(1, "a"), (2, "b")]);
}

#[test]
fn test_sort_in_place() {
    let mut data = [5, 1, 4, 2, 3];

    lazy_seq::sort(&mut &mut data[..]);
    assert!(data == [1, 2, 3, 4, 5]);
}

#[test]
fn test_equal_on_byte_sources() {
    assert!(lazy_seq::equal(&mut &b"hello"[..], &mut &b"hello"[..]));
    assert!(!lazy_seq::equal(&mut &b"hello"[..], &mut &b"world"[..]));
}

#[test]
fn test_repeat_folds() {
    let total = repeat_n(42, 5).fold(0, |acc, x| acc + x);
    assert!(total == 210);

    let taken: i32 = repeat(42).take(5).sum();
    assert!(taken == 210);
}

#[test]
fn test_scan_and_prescan() {
    let inclusive: Vec<i32> = (&[1, 2, 3, 4][..]).scan(0, |acc, x| acc + x).to();
    assert!(inclusive == vec![1, 3, 6, 10]);

    let exclusive: Vec<i32> = (&[1, 2, 3, 4][..]).prescan(0, |acc, x| acc + x).to();
    assert!(exclusive == vec![0, 1, 3, 6, 10]);
}

#[test]
fn test_pipelines_compose_deeply() {
    // a tall stack of adaptors still behaves like the obvious loop
    let v: Vec<Distance> = iota_from(0)
        .take(30)
        .filter(|x| x % 3 != 0)
        .map(|x| x * 2)
        .drop(2)
        .take(6)
        .to();

    assert!(v == vec![8, 10, 14, 16, 20, 22]);
}

#[test]
fn test_single_chain_repeat() {
    let v: Vec<i32> = single(1).chain(repeat_n(2, 3)).chain(single(3)).to();

    assert!(v == vec![1, 2, 2, 2, 3]);
}

#[test]
fn test_values_bridge_into_iterators() {
    let evens: Vec<Distance> = iota_from(0)
        .take(10)
        .filter(|x| x % 2 == 0)
        .values()
        .collect();

    assert!(evens == vec![0, 2, 4, 6, 8]);
}
