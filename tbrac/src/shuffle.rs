//! Seeded shuffling shared by bracket draws, random seeding and mystery doubles.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// The single source of randomness in the crate.
///
/// Every operation that shuffles takes a `&mut Shuffler`, so a draw made from
/// [`Shuffler::seeded`] is fully reproducible.
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    /// Create a shuffler seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic shuffler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Use `seed` when present, OS entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Return a uniformly shuffled copy of `items` (Fisher-Yates)
    ///
    /// # Arguments
    ///
    /// * `items` - Items to shuffle; the input is left untouched
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - A permutation of `items`
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_order() {
        let ids: Vec<i64> = (1..=16).collect();
        let first = Shuffler::seeded(42).shuffled(&ids);
        let second = Shuffler::seeded(42).shuffled(&ids);
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let ids: Vec<i64> = (1..=32).collect();
        let mut shuffled = Shuffler::seeded(7).shuffled(&ids);
        shuffled.sort_unstable();
        assert_eq!(shuffled, ids);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let ids: Vec<i64> = (1..=32).collect();
        let a = Shuffler::seeded(1).shuffled(&ids);
        let b = Shuffler::seeded(2).shuffled(&ids);
        // 32! orderings; a collision here means the seed is being ignored
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_input() {
        let mut shuffler = Shuffler::seeded(0);
        let empty: Vec<i64> = Vec::new();
        assert!(shuffler.shuffled(&empty).is_empty());
    }

    #[test]
    fn test_optional_seed() {
        let ids: Vec<i64> = (1..=8).collect();
        let a = Shuffler::from_optional_seed(Some(9)).shuffled(&ids);
        let b = Shuffler::seeded(9).shuffled(&ids);
        assert_eq!(a, b);
        assert_eq!(Shuffler::from_optional_seed(None).shuffled(&ids).len(), 8);
    }
}
