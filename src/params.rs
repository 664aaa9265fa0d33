//! Sizing math for Bloom filters.
//!
//! Given the number of unique elements `n` that a filter is expected to hold and the false
//! positive rate `p` that is acceptable once those `n` elements were added, the optimal number
//! of bits and hash functions are:
//!
//! - `m = ceil(-n * ln(p) / ln(2)^2)`
//! - `k = floor(m / n * ln(2))`, but at least 1
//!
//! After inserting `n` elements the false positive rate is approximately
//! `(1 - e^(-k * n / m))^k`.
//!
//! # References
//! - ["Less Hashing, Same Performance: Building a Better Bloom Filter", Adam Kirsch and Michael
//!   Mitzenmacher, 2006](https://www.eecs.harvard.edu/~michaelm/postscripts/rsa2008.pdf)
//! - [Wikipedia: Bloom filter, optimal number of hash functions](https://en.wikipedia.org/wiki/Bloom_filter#Optimal_number_of_hash_functions)
use std::f64::consts::LN_2;

use crate::error::{Error, Result};

const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Number of bits `m` required to hold `n` unique elements with false positive rate `p`.
///
/// Fails with [`Error::InvalidParameter`] if `n` is 0, if `p` is not in `(0, 1)` or if the
/// resulting bit count does not fit into `usize`.
///
/// ```
/// use bloomset::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert!(optimal_bit_count(0, 0.01).is_err());
/// ```
pub fn optimal_bit_count(n: usize, p: f64) -> Result<usize> {
    if n == 0 {
        return Err(Error::invalid_parameter(
            "expected_items",
            "must be greater than 0",
        ));
    }
    // also rejects NaN
    if !((p > 0.) && (p < 1.)) {
        return Err(Error::invalid_parameter(
            "false_positive_rate",
            format!("{} must be greater than 0 and smaller than 1", p),
        ));
    }

    let m = (-((n as f64) * p.ln()) / LN2_SQUARED).ceil();
    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(Error::invalid_parameter(
            "false_positive_rate",
            format!("{} requires more bits than addressable for {} elements", p, n),
        ));
    }

    Ok(m as usize)
}

/// Number of hash functions `k` that minimizes the false positive rate of a filter with `m`
/// bits holding `n` elements.
///
/// The result is never smaller than 1, even when `m` is small compared to `n`. An `n` of 0 is
/// treated as 1.
pub fn optimal_hash_count(m: usize, n: usize) -> usize {
    let n = n.max(1);
    let k = ((m as f64) / (n as f64) * LN_2).floor() as usize;
    k.max(1)
}

/// Expected false positive rate of a filter with `m` bits and `k` hash functions after `n`
/// unique elements were added.
pub fn expected_false_positive_rate(m: usize, k: usize, n: usize) -> f64 {
    if m == 0 {
        return 1.;
    }
    let k = k as f64;
    (1. - (-k * (n as f64) / (m as f64)).exp()).powf(k)
}

#[cfg(test)]
mod tests {
    use super::{expected_false_positive_rate, optimal_bit_count, optimal_hash_count};
    use crate::error::Error;

    #[test]
    fn bit_count() {
        assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
        assert_eq!(optimal_bit_count(1000, 0.1).unwrap(), 4793);
        assert_eq!(optimal_bit_count(1, 0.5).unwrap(), 2);
    }

    #[test]
    fn bit_count_rejects_n0() {
        assert!(matches!(
            optimal_bit_count(0, 0.01),
            Err(Error::InvalidParameter {
                name: "expected_items",
                ..
            })
        ));
    }

    #[test]
    fn bit_count_rejects_p_out_of_range() {
        for p in [0., 1., -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                optimal_bit_count(1000, p),
                Err(Error::InvalidParameter {
                    name: "false_positive_rate",
                    ..
                })
            ));
        }
    }

    #[test]
    fn bit_count_rejects_unaddressable() {
        assert!(matches!(
            optimal_bit_count(usize::MAX, f64::MIN_POSITIVE),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn hash_count() {
        assert_eq!(optimal_hash_count(9586, 1000), 6);
        assert_eq!(optimal_hash_count(4793, 1000), 3);
    }

    #[test]
    fn hash_count_never_zero() {
        assert_eq!(optimal_hash_count(1064, 1000), 1);
        assert_eq!(optimal_hash_count(1, 1_000_000), 1);
        assert_eq!(optimal_hash_count(0, 0), 1);
    }

    #[test]
    fn expected_rate() {
        let p = expected_false_positive_rate(9586, 6, 1000);
        assert!(p > 0.009 && p < 0.011, "p = {}", p);

        assert_eq!(expected_false_positive_rate(9586, 6, 0), 0.);
        assert_eq!(expected_false_positive_rate(0, 6, 1000), 1.);
    }
}
