#![no_std]

use lazy_seq::{iota_range, repeat_n, single, Pipe, Sequence};

#[test]
fn test1() {
    let total: i32 = repeat_n(3, 4).fold(0, |acc, x| acc + x);

    assert!(total == 12);
}

#[test]
fn test2() {
    let mut data = [5, 1, 4, 2, 3];

    lazy_seq::sort(&mut &mut data[..]);
    assert!(data == [1, 2, 3, 4, 5]);
}

#[test]
fn test3() {
    let firsts = iota_range(0, 10).filter(|x| x % 2 == 0).take(3);

    let total: lazy_seq::Distance = firsts.sum();
    assert!(total == 0 + 2 + 4);
}

#[test]
fn test4() {
    let mut one = single('x');

    let cur = one.first();
    assert!(*one.read_at(&cur) == 'x');

    let missing = lazy_seq::find(&mut one, &'y');
    assert!(one.is_last(&missing));
}

#[test]
fn test5() {
    let left = &[1, 2][..];
    let right = &[3][..];

    let mut chained = left.chain(right).map(|x| x * 10);
    let mut expected = &[10, 20, 30][..];

    assert!(lazy_seq::equal(&mut chained, &mut expected));
}
