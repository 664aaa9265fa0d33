//! BloomFilter implementation.
use std::fmt;

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::filters::Filter;
use crate::hash_utils::{HashFamily, HashScheme};
use crate::params::{optimal_bit_count, optimal_hash_count};

/// A BloomFilter is a set-like data structure, that keeps track of elements it has seen without
/// the need to store them. Looking up values has a certain false positive rate, but a false
/// negative rate of 0%.
///
/// # Examples
/// ```
/// use bloomset::filters::bloomfilter::BloomFilter;
///
/// // set up filter
/// let false_positive_rate = 0.01;  // = 1%
/// let expected_elements = 1000;
/// let mut filter = BloomFilter::new(expected_elements, false_positive_rate).unwrap();
///
/// // add some data
/// filter.add("item1");
/// filter.add(b"item2");
///
/// // later
/// assert!(filter.contains("item1"));
/// assert!(filter.contains("item2"));
/// assert!(!filter.contains("item4"));
/// ```
///
/// # Applications
/// - when a lot of data should be added to the set and a moderate false positive rate is
///   acceptable, was used for spell checking
/// - as a pre-filter for more expensive lookups, e.g. in combination with a real set, map or
///   database, so the final false positive rate is 0%
///
/// # How It Works
/// The filter is represented by a bit vector of size `m`. Also given are `k` hash functions
/// `h_i(x), for i in 0..k`, every one mapping an input byte string `x` to an integer `>= 0`
/// and `< m`. Initially, all bits are set to `False`.
///
/// During insertion of value `x`, the `k` bits addressed by `h_i(x), for i in 0..k` are set to
/// `True`.
///
/// During lookup, it is checked if all these bits are set. If so, the value might be in the
/// filter. If only a single bit is not set, it is clear that the value was never added to the
/// filter.
///
/// The hash functions are derived from 32 bit FNV-1a, see [`HashScheme`]. The default,
/// [`HashScheme::Seeded`], is simple but produces correlated positions. Use
/// [`with_properties_and_scheme`](Self::with_properties_and_scheme) with
/// [`HashScheme::DoubleHashing`] to get closer to the configured false positive rate.
///
/// The filter never grows. Adding more than the expected number of elements works, but the
/// false positive rate rises above the configured one.
///
/// # Concurrency
/// There is no internal synchronization. The filter is `Send` and `Sync`, so it can be shared
/// behind a `RwLock` which allows concurrent lookups and exclusive insertions.
///
/// # See Also
/// - `std::collections::HashSet`: has a false positive rate of 0%, but also needs to store all
///   elements
///
/// # References
/// - ["Space/Time Trade-offs in Hash Coding with Allowable Errors", Burton H. Bloom, 1970](http://dmod.eu/deca/ft_gateway.cfm.pdf)
/// - [Wikipedia: Bloom filter](https://en.wikipedia.org/wiki/Bloom_filter)
#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bs: FixedBitSet,
    family: HashFamily,
}

impl BloomFilter {
    /// Create new, empty BloomFilter with given properties.
    ///
    /// - `expected_items` number of unique elements the BloomFilter is expected to hold, must
    ///   be `> 0`
    /// - `false_positive_rate` false positive rate when querying the BloomFilter after adding
    ///   `expected_items` unique elements, must be `> 0` and `< 1`
    ///
    /// Fails with [`Error::InvalidParameter`] if the parameters are not in range.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        Self::with_properties_and_scheme(
            expected_items,
            false_positive_rate,
            HashScheme::default(),
        )
    }

    /// Same as `new` but with specific [`HashScheme`].
    pub fn with_properties_and_scheme(
        expected_items: usize,
        false_positive_rate: f64,
        scheme: HashScheme,
    ) -> Result<Self> {
        let m = optimal_bit_count(expected_items, false_positive_rate)?;
        let k = optimal_hash_count(m, expected_items);
        debug!(
            expected_items,
            false_positive_rate,
            m,
            k,
            ?scheme,
            "sized bloom filter"
        );

        Self::with_params_and_scheme(m, k, scheme)
    }

    /// Create new, empty BloomFilter with internal parameters.
    ///
    /// - `m` is the number of bits used to store state, must be `> 0`
    /// - `k` is the number of hash functions, must be `> 0`
    pub fn with_params(m: usize, k: usize) -> Result<Self> {
        Self::with_params_and_scheme(m, k, HashScheme::default())
    }

    /// Same as `with_params` but with specific [`HashScheme`].
    pub fn with_params_and_scheme(m: usize, k: usize, scheme: HashScheme) -> Result<Self> {
        if m == 0 {
            return Err(Error::invalid_parameter("m", "must be greater than 0"));
        }
        if k == 0 {
            return Err(Error::invalid_parameter("k", "must be greater than 0"));
        }

        Ok(Self {
            bs: FixedBitSet::with_capacity(m),
            family: HashFamily::new(m, k, scheme),
        })
    }

    /// Get `k` (number of hash functions).
    pub fn k(&self) -> usize {
        self.family.k()
    }

    /// Get `m` (number of stored bits).
    pub fn m(&self) -> usize {
        self.bs.len()
    }

    /// Get the scheme used to derive the hash functions.
    pub fn scheme(&self) -> HashScheme {
        self.family.scheme()
    }

    /// Add new element to the BloomFilter.
    ///
    /// If the same element is added multiple times or if an element results in the same hash
    /// signature, this method does not have any effect.
    pub fn add<T>(&mut self, item: &T)
    where
        T: AsRef<[u8]> + ?Sized,
    {
        for pos in self.family.iter_for(item.as_ref()) {
            self.bs.insert(pos);
        }
    }

    /// Guess if the given element was added to the BloomFilter.
    pub fn contains<T>(&self, item: &T) -> bool
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.family.iter_for(item.as_ref()).all(|pos| self.bs[pos])
    }

    /// Check whether the BloomFilter is empty.
    pub fn is_empty(&self) -> bool {
        self.bs.ones().next().is_none()
    }

    /// Number of bits that are set.
    pub fn count_ones(&self) -> usize {
        self.bs.count_ones(..)
    }

    /// Add the entire content of another bloomfilter to this BloomFilter.
    ///
    /// The result is the same as adding all elements added to `other` to `self` in the first
    /// place.
    ///
    /// Fails with [`Error::IncompatibleFilters`] if `k`, `m` or the hash scheme of the two
    /// BloomFilters are not identical. `self` is unchanged in that case.
    pub fn union(&mut self, other: &Self) -> Result<()> {
        if self.k() != other.k() {
            return Err(Error::incompatible(format!(
                "k must be equal (left={}, right={})",
                self.k(),
                other.k()
            )));
        }
        if self.m() != other.m() {
            return Err(Error::incompatible(format!(
                "m must be equal (left={}, right={})",
                self.m(),
                other.m()
            )));
        }
        if self.scheme() != other.scheme() {
            return Err(Error::incompatible(format!(
                "hash scheme must be equal (left={:?}, right={:?})",
                self.scheme(),
                other.scheme()
            )));
        }

        self.bs.union_with(&other.bs);
        trace!(ones = self.count_ones(), "merged bloom filters");
        Ok(())
    }

    /// Guess the number of unique elements added to the BloomFilter.
    pub fn guess_n(&self) -> usize {
        let m = self.m() as f64;
        let k = self.k() as f64;
        let x = self.count_ones() as f64;

        (-m / k * (1. - x / m).ln()) as usize
    }

    /// False positive rate implied by the current fill ratio of the bit vector.
    ///
    /// Unlike the rate passed at construction, this reflects the elements actually added.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let fill = self.count_ones() as f64 / self.m() as f64;
        fill.powf(self.k() as f64)
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BloomFilter {{ m: {}, k: {} }}", self.m(), self.k())
    }
}

impl<T> Extend<T> for BloomFilter
where
    T: AsRef<[u8]>,
{
    fn extend<S: IntoIterator<Item = T>>(&mut self, iter: S) {
        for elem in iter {
            self.add(&elem);
        }
    }
}

impl<T> Filter<T> for BloomFilter
where
    T: AsRef<[u8]> + ?Sized,
{
    fn insert(&mut self, obj: &T) -> bool {
        let mut new = false;
        for pos in self.family.iter_for(obj.as_ref()) {
            new |= !self.bs.put(pos);
        }
        new
    }

    fn union(&mut self, other: &Self) -> Result<()> {
        Self::union(self, other)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        self.guess_n()
    }

    fn query(&self, obj: &T) -> bool {
        self.contains(obj)
    }
}
