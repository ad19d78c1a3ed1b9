//! Sequence, combinatorics and number helpers

use itertools::{Itertools, MinMaxResult};
use num_integer::Integer;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::RangeInclusive;

pub use num_integer::{gcd, lcm};

/// All unordered pairs, in index order
pub fn pairs<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    items.into_iter().tuple_combinations()
}

/// All unordered trios, in index order
pub fn trios<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item, I::Item)>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    items.into_iter().tuple_combinations()
}

/// `(current, previous)` for every element after the first
pub fn with_previous<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    items
        .into_iter()
        .tuple_windows()
        .map(|(previous, current)| (current, previous))
}

/// `(current, next)` for every element before the last
pub fn with_next<I>(items: I) -> impl Iterator<Item = (I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
{
    items.into_iter().tuple_windows()
}

/// The smallest and largest key over the items, as an inclusive range
pub fn range_by_key<I, K, F>(items: I, key: F) -> Option<RangeInclusive<K>>
where
    I: IntoIterator,
    K: PartialOrd + Clone,
    F: FnMut(I::Item) -> K,
{
    match items.into_iter().map(key).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(only) => Some(only.clone()..=only),
        MinMaxResult::MinMax(low, high) => Some(low..=high),
    }
}

pub fn count_occurrences<I>(items: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    items.into_iter().counts()
}

/// Trial division up to the square root; never overflows, even at `T::max_value()`
pub fn is_prime<T>(n: T) -> bool
where
    T: Integer + Copy,
{
    let two = T::one() + T::one();
    if n < two {
        return false;
    }
    let mut divisor = two;
    while divisor <= n / divisor {
        if n.is_multiple_of(&divisor) {
            return false;
        }
        divisor = divisor + T::one();
    }
    true
}

/// Wrap `value` into the half-open range `start..end`
///
/// # Panics
///
/// If the range is empty.
///
/// # Example
///
/// ```
/// use aoc_solutions::utils::seq::wrap_into;
///
/// assert_eq!(wrap_into(13, 0..5), 3);
/// assert_eq!(wrap_into(-1, 0..5), 4);
/// assert_eq!(wrap_into(0, 1..4), 3);
/// ```
pub fn wrap_into<T>(value: T, range: std::ops::Range<T>) -> T
where
    T: Integer + Copy,
{
    assert!(range.start < range.end, "cannot wrap into an empty range");
    let span = range.end - range.start;
    (value - range.start).mod_floor(&span) + range.start
}

/// Three-way comparison, usable with `sort_by` and `max_by`
pub fn three_way<T: Ord + ?Sized>(lhs: &T, rhs: &T) -> Ordering {
    lhs.cmp(rhs)
}

/// Left-to-right function application
pub trait Pipe: Sized {
    fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Copy `value`, apply `update` to the copy and return it
pub fn updated<T>(mut value: T, update: impl FnOnce(&mut T)) -> T {
    update(&mut value);
    value
}
