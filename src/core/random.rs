//! Uniform random selection over caller-supplied collections.
//!
//! The generator is injected explicitly; callers wanting the process-wide
//! source pass `rand::thread_rng()`, tests pass a seeded `StdRng`.
use std::collections::HashMap;

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

/// Returns a uniformly random element of `items`, or `None` when empty.
pub fn random_item<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Returns a uniformly random key of `map`, or `None` when empty.
pub fn random_key<'a, K, V, R: Rng + ?Sized>(
    rng: &mut R,
    map: &'a HashMap<K, V>,
) -> Option<&'a K> {
    map.keys().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn item_is_member_of_slice() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = [10, 20, 30, 40];
        for _ in 0..100 {
            let picked = *random_item(&mut rng, &items).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn empty_slice_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: [u8; 0] = [];
        assert!(random_item(&mut rng, &items).is_none());
    }

    #[test]
    fn key_is_member_of_map() {
        let mut rng = StdRng::seed_from_u64(2);
        let map: HashMap<&str, u32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        for _ in 0..50 {
            let key = *random_key(&mut rng, &map).unwrap();
            assert!(map.contains_key(key));
        }
    }

    #[test]
    fn empty_map_yields_none() {
        let mut rng = StdRng::seed_from_u64(2);
        let map: HashMap<u8, u8> = HashMap::new();
        assert!(random_key(&mut rng, &map).is_none());
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [0usize, 1, 2];
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[*random_item(&mut rng, &items).unwrap()] += 1;
        }
        for &count in &counts {
            assert!(
                (800..1200).contains(&count),
                "skewed selection counts: {counts:?}"
            );
        }
    }
}
