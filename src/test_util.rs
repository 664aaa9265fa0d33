use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub(crate) fn assert_send<T>(_: &T)
where
    T: Send,
{
}

pub(crate) fn assert_sync<T>(_: &T)
where
    T: Sync,
{
}

/// `n` pseudo-random, reproducible 8 byte items, each prefixed with `tag`.
///
/// Items generated with different tags never collide.
pub(crate) fn random_items(seed: u64, tag: u8, n: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut item = Vec::with_capacity(9);
            item.push(tag);
            item.extend_from_slice(&rng.random::<u64>().to_le_bytes());
            item
        })
        .collect()
}
