//! Filters, Approximate Membership Queries (AMQs).

pub mod bloomfilter;

use crate::error::Result;

/// A filter is a set-like data structure, that keeps track of elements it has seen without
/// the need to store them. Looking up values has a certain false positive rate, but a false
/// negative rate of 0%.
///
/// This kind of lookup is also referred to as Approximate Membership Queries (AMQs).
///
/// Elements can only be added, never removed.
pub trait Filter<T>
where
    T: ?Sized,
{
    /// Insert new element into the filter.
    ///
    /// If the element was likely already part of the filter, `false` is returned, otherwise
    /// `true`. You may get the same result by calling `query`, but calling insert is more
    /// efficient then calling `query` first and then using `insert` on demand.
    fn insert(&mut self, obj: &T) -> bool;

    /// Add all elements from `other` into `self`.
    ///
    /// The result is the same as adding all elements added to `other` to `self` in the first
    /// place. Fails if the two filters were not set up identically.
    fn union(&mut self, other: &Self) -> Result<()>
    where
        Self: Sized;

    /// Check if filters is empty, i.e. contains no elements.
    fn is_empty(&self) -> bool;

    /// Return guessed number of elements in the filter.
    fn len(&self) -> usize;

    /// Guess if the given element was added to the filter.
    fn query(&self, obj: &T) -> bool;
}
