#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use grid::*;
pub use sampler::*;
pub use session::*;
pub use source::*;
pub use types::*;

mod board;
mod error;
mod grid;
mod sampler;
mod session;
mod source;
mod types;

/// Shape of one game: how many categories, how many clues in each, and how large a pool of categories to sample
/// from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub category_pool: u16,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: Coord = 5;
    pub const DEFAULT_CLUES_PER_CATEGORY: Coord = 5;
    /// Most the trivia service hands out in a single listing.
    pub const DEFAULT_CATEGORY_POOL: u16 = 100;

    pub const fn new_unchecked(categories: Coord, clues_per_category: Coord, category_pool: u16) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, category_pool: u16) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = category_pool.max(categories.into());
        Self::new_unchecked(categories, clues_per_category, category_pool)
    }

    pub const fn size(&self) -> Coord2 {
        (self.categories, self.clues_per_category)
    }

    pub const fn total_clues(&self) -> CellCount {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_CATEGORY_POOL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_five_by_five_over_a_hundred() {
        let config = GameConfig::default();
        assert_eq!(config.size(), (5, 5));
        assert_eq!(config.category_pool, 100);
        assert_eq!(config.total_clues(), 25);
    }

    #[test]
    fn new_clamps_counts_to_usable_values() {
        let config = GameConfig::new(0, 0, 0);
        assert_eq!(config.size(), (1, 1));
        assert_eq!(config.category_pool, 1);

        let config = GameConfig::new(6, 4, 3);
        assert_eq!(config.category_pool, 6);
    }
}
