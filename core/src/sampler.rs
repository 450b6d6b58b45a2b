use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Picks `k` distinct elements of `items` uniformly at random, without replacement.
///
/// Distinctness is by position, so duplicated values in `items` may both be picked. The relative order of the
/// result is random, not the order of `items`.
pub fn sample<T, R>(items: &[T], k: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if k > items.len() {
        return Err(GameError::InvalidSampleSize {
            requested: k,
            available: items.len(),
        });
    }

    Ok(rand::seq::index::sample(rng, items.len(), k)
        .into_iter()
        .map(|i| items[i].clone())
        .collect())
}
