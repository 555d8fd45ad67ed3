use crate::num::Numeric;
use crate::seq::Sequence;

/// Left fold over the whole sequence.
pub fn fold<S, B, F>(seq: &mut S, init: B, mut f: F) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Value) -> B,
{
    let mut acc = Some(init);

    seq.for_each_while(|value| {
        acc = Some(f(acc.take().unwrap(), value));

        true
    });

    acc.unwrap()
}

/// Left fold seeded with the first element; `None` on an empty
/// sequence.
pub fn fold_first<S, F>(seq: &mut S, mut f: F) -> Option<S::Value>
where
    S: Sequence,
    S::Value: Clone,
    F: FnMut(S::Value, &S::Value) -> S::Value,
{
    let mut acc: Option<S::Value> = None;

    seq.for_each_while(|value| {
        acc = Some(match acc.take() {
            None => value.clone(),
            Some(sofar) => f(sofar, value),
        });

        true
    });

    acc
}

/// The sum of all elements, starting from the numeric zero.
pub fn sum<S, N>(seq: &mut S) -> N
where
    S: Sequence<Value = N>,
    N: Numeric,
{
    fold(seq, N::ZERO, |acc, value| acc.add(*value))
}

/// The product of all elements, starting from the numeric one.
pub fn product<S, N>(seq: &mut S) -> N
where
    S: Sequence<Value = N>,
    N: Numeric,
{
    fold(seq, N::ONE, |acc, value| acc.mul(*value))
}

#[cfg(feature = "std")]
#[test]
fn test_fold_concatenates() {
    let mut s = &["a", "b", "c"][..];

    let joined = fold(&mut s, String::new(), |acc, part| acc + part);
    assert!(joined == "abc");
}

#[test]
fn test_fold_first() {
    let mut s = &[3, 1, 7][..];
    assert!(fold_first(&mut s, |a, b| a.max(*b)) == Some(7));

    let mut e = &[][..] as &[i32];
    assert!(fold_first(&mut e, |a, _| a) == None);
}

#[test]
fn test_sum_and_product() {
    let mut s = &[1, 2, 3, 4][..];

    assert!(sum::<_, i32>(&mut s) == 10);
    assert!(product::<_, i32>(&mut s) == 24);
}
