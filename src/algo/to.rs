//! Container materialization.
//!
//! __Requires the `collections` feature__ (except for the trait
//! itself). `to()` drains a sequence into any container implementing
//! [`FromSequence`]; implementations use
//! [`size_hint`](crate::Sequence::size_hint) to reserve in one go.

use crate::seq::Sequence;

/// Containers constructible from a whole sequence.
///
/// The sequence analog of [`FromIterator`]: implement this for a
/// container, and [`Pipe::to`](crate::Pipe::to) materializes into it.
pub trait FromSequence<S: Sequence>: Sized {
    fn from_seq(seq: S) -> Self;
}

/// Materializes `seq` into `C`. Method form:
/// [`Pipe::to`](crate::Pipe::to).
pub fn to<S, C>(seq: S) -> C
where
    S: Sequence,
    C: FromSequence<S>,
{
    C::from_seq(seq)
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::FromSequence;
    use crate::seq::Sequence;

    fn drain<S, F>(mut seq: S, mut sink: F)
    where
        S: Sequence,
        S::Value: Clone,
        F: FnMut(S::Value),
    {
        let mut cur = seq.first();

        while !seq.is_last(&cur) {
            sink(seq.move_at(&cur));
            seq.inc(&mut cur);
        }
    }

    impl<S> FromSequence<S> for Vec<S::Value>
    where
        S: Sequence,
        S::Value: Clone,
    {
        fn from_seq(seq: S) -> Self {
            let mut out = Vec::new();

            if let Some(n) = seq.size_hint() {
                out.reserve(n);
            }

            drain(seq, |value| out.push(value));

            out
        }
    }

    impl<S> FromSequence<S> for VecDeque<S::Value>
    where
        S: Sequence,
        S::Value: Clone,
    {
        fn from_seq(seq: S) -> Self {
            let mut out = VecDeque::new();

            if let Some(n) = seq.size_hint() {
                out.reserve(n);
            }

            drain(seq, |value| out.push_back(value));

            out
        }
    }

    impl<S> FromSequence<S> for Box<[S::Value]>
    where
        S: Sequence,
        S::Value: Clone,
    {
        fn from_seq(seq: S) -> Self {
            Vec::from_seq(seq).into_boxed_slice()
        }
    }

    impl<S> FromSequence<S> for String
    where
        S: Sequence<Value = char>,
    {
        fn from_seq(seq: S) -> Self {
            let mut out = String::new();

            if let Some(n) = seq.size_hint() {
                out.reserve(n);
            }

            drain(seq, |c| out.push(c));

            out
        }
    }

    impl<S, K> FromSequence<S> for BTreeSet<K>
    where
        S: Sequence<Value = K>,
        K: Ord + Clone,
    {
        fn from_seq(seq: S) -> Self {
            let mut out = BTreeSet::new();

            drain(seq, |value| {
                out.insert(value);
            });

            out
        }
    }

    impl<S, K, V> FromSequence<S> for BTreeMap<K, V>
    where
        S: Sequence<Value = (K, V)>,
        K: Ord + Clone,
        V: Clone,
    {
        fn from_seq(seq: S) -> Self {
            let mut out = BTreeMap::new();

            drain(seq, |(key, value)| {
                out.insert(key, value);
            });

            out
        }
    }

}

#[cfg(feature = "std")]
mod std_impls {
    use std::collections::{HashMap, HashSet};
    use std::hash::Hash;

    use super::FromSequence;
    use crate::seq::Sequence;

    impl<S, K> FromSequence<S> for HashSet<K>
    where
        S: Sequence<Value = K>,
        K: Eq + Hash + Clone,
    {
        fn from_seq(mut seq: S) -> Self {
            let mut out = HashSet::with_capacity(seq.size_hint().unwrap_or(0));

            let mut cur = seq.first();

            while !seq.is_last(&cur) {
                out.insert(seq.move_at(&cur));
                seq.inc(&mut cur);
            }

            out
        }
    }

    impl<S, K, V> FromSequence<S> for HashMap<K, V>
    where
        S: Sequence<Value = (K, V)>,
        K: Eq + Hash + Clone,
        V: Clone,
    {
        fn from_seq(mut seq: S) -> Self {
            let mut out = HashMap::with_capacity(seq.size_hint().unwrap_or(0));

            let mut cur = seq.first();

            while !seq.is_last(&cur) {
                let (key, value) = seq.move_at(&cur);
                out.insert(key, value);
                seq.inc(&mut cur);
            }

            out
        }
    }
}

#[cfg(feature = "hashbrown")]
mod hashbrown_impls {
    use core::hash::Hash;

    use hashbrown::{HashMap, HashSet};

    use super::FromSequence;
    use crate::seq::Sequence;

    impl<S, K> FromSequence<S> for HashSet<K>
    where
        S: Sequence<Value = K>,
        K: Eq + Hash + Clone,
    {
        fn from_seq(mut seq: S) -> Self {
            let mut out = HashSet::with_capacity(seq.size_hint().unwrap_or(0));

            let mut cur = seq.first();

            while !seq.is_last(&cur) {
                out.insert(seq.move_at(&cur));
                seq.inc(&mut cur);
            }

            out
        }
    }

    impl<S, K, V> FromSequence<S> for HashMap<K, V>
    where
        S: Sequence<Value = (K, V)>,
        K: Eq + Hash + Clone,
        V: Clone,
    {
        fn from_seq(mut seq: S) -> Self {
            let mut out = HashMap::with_capacity(seq.size_hint().unwrap_or(0));

            let mut cur = seq.first();

            while !seq.is_last(&cur) {
                let (key, value) = seq.move_at(&cur);
                out.insert(key, value);
                seq.inc(&mut cur);
            }

            out
        }
    }
}

#[test]
#[cfg(feature = "collections")]
fn test_to_various_containers() {
    use crate::Pipe;
    use alloc::collections::{BTreeSet, VecDeque};

    let s = &[3, 1, 2, 3][..];

    let v: Vec<i32> = s.map(|x| *x).to();
    assert!(v == vec![3, 1, 2, 3]);

    let d: VecDeque<i32> = s.map(|x| *x).to();
    assert!(d == VecDeque::from(vec![3, 1, 2, 3]));

    let set: BTreeSet<i32> = s.map(|x| *x).to();
    assert!(set.len() == 3);
}

#[test]
#[cfg(feature = "collections")]
fn test_to_string() {
    use crate::Pipe;

    let word: String = (&['a', 'b', 'c'][..]).map(|c| *c).to();

    assert!(word == "abc");
}

#[test]
#[cfg(feature = "std")]
fn test_to_hash_map() {
    use crate::Pipe;
    use std::collections::HashMap;

    let pairs = [("one", 1), ("two", 2)];

    let map: HashMap<&str, i32> = (&pairs[..]).map(|p| *p).to();
    assert!(map["one"] == 1);
    assert!(map["two"] == 2);
}
