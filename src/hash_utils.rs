//! Hash-related utils.
//!
//! All hashing in this crate is done on raw bytes using 32 bit FNV-1a. From that single base
//! hash, a family of `k` hash functions `h_i(x), for i in 0..k` is derived according to a
//! [`HashScheme`].

/// FNV-1a 32 bit offset basis.
const FNV_OFFSET: u32 = 0x811c_9dc5;

/// FNV-1a 32 bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// Compute 32 bit FNV-1a hash of `data`.
///
/// ```
/// use bloomset::hash_utils::fnv1a32;
///
/// assert_eq!(fnv1a32(b""), 0x811c9dc5);
/// assert_eq!(fnv1a32(b"a"), 0xe40c292c);
/// ```
pub fn fnv1a32(data: &[u8]) -> u32 {
    fnv1a32_with_basis(data, FNV_OFFSET)
}

fn fnv1a32_with_basis(data: &[u8], basis: u32) -> u32 {
    data.iter().fold(basis, |h, b| {
        (h ^ u32::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Murmur3 finalizer, spreads the entropy of all input bits over the whole word.
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Method used to derive `k` hash functions from the single base hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashScheme {
    /// `h_i(x) = fnv1a32(x) + i` (wrapping at `2^32`).
    ///
    /// Cheap, but the functions are far from independent: for most inputs the `k` positions
    /// are adjacent bits, which drives the false positive rate well above the configured
    /// target.
    #[default]
    Seeded,

    /// `h_i(x) = h1(x) + i * h2(x)`, with `h1` being FNV-1a and `h2` a second, odd,
    /// FNV-1a-derived hash.
    ///
    /// Gets very close to the theoretical false positive rate.
    DoubleHashing,
}

/// Shape of a hash family: `k` functions mapping into `0..m`.
///
/// This is plain data. The functions themselves are evaluated lazily via
/// [`iter_for`](Self::iter_for).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashFamily {
    m: usize,
    k: usize,
    scheme: HashScheme,
}

impl HashFamily {
    /// Create new `HashFamily` with the following parameters:
    ///
    /// - `m`: the exclusive upper bound for `h_i(x)`, must be `> 0`
    /// - `k`: number of hash functions
    /// - `scheme`: how `h_i` is derived from the base hash
    pub(crate) fn new(m: usize, k: usize, scheme: HashScheme) -> Self {
        debug_assert!(m > 0);
        Self { m, k, scheme }
    }

    /// Exclusive upper bound of produced positions.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of hash functions.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Scheme used to derive the functions.
    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Iterate over `h_i(data), for i in 0..k`.
    ///
    /// The base hash is computed once, so the iterator is cheap to drive.
    pub fn iter_for(&self, data: &[u8]) -> HashIter {
        let h1 = fnv1a32(data);
        let h2 = match self.scheme {
            HashScheme::Seeded => 1,
            HashScheme::DoubleHashing => {
                fmix32(fnv1a32_with_basis(data, FNV_OFFSET.rotate_left(16))) | 1
            }
        };
        HashIter {
            m: self.m as u64,
            k: self.k,
            i: 0,
            h1,
            h2,
            scheme: self.scheme,
        }
    }
}

/// `Iterator` that yields `h_i(x) mod m` for a given value.
///
/// Created by [`HashFamily::iter_for`].
#[derive(Clone, Copy, Debug)]
pub struct HashIter {
    m: u64,
    k: usize,
    i: usize,
    h1: u32,
    h2: u32,
    scheme: HashScheme,
}

impl Iterator for HashIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.i < self.k {
            let x = match self.scheme {
                HashScheme::Seeded => u64::from(self.h1.wrapping_add(self.i as u32)),
                HashScheme::DoubleHashing => u64::from(self.h1)
                    .wrapping_add((self.i as u64).wrapping_mul(u64::from(self.h2))),
            };

            self.i += 1;

            Some((x % self.m) as usize)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.k - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HashIter {}
