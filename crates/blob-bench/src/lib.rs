//! Benchmark profiles for the blob simulation.
//!
//! - [`reference_profile`]: 100x100 board (10K cells), a seeded colony
//!   with scattered food.
//! - [`stress_profile`]: 316x316 board (~100K cells), same recipe.
//! - [`food_board`]: the board both are built on.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blob_board::Board;
use blob_core::{BlobConfig, ConfigError, DEFAULT_FOOD};
use blob_engine::BlobManager;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `width × height` board with `foods` food cells at seeded positions.
///
/// The first food cell is touched so the colony knows it from the start.
pub fn food_board(width: u32, height: u32, foods: usize, seed: u64) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new(width, height);
    for i in 0..foods {
        let x = rng.random_range(0..board.width()) as i32;
        let y = rng.random_range(0..board.height()) as i32;
        board.set_food(x, y, DEFAULT_FOOD);
        if i == 0 {
            board.update_intensity(x, y, 100.0);
        }
    }
    board
}

/// 100x100 colony with 20 food cells.
pub fn reference_profile(seed: u64) -> Result<BlobManager, ConfigError> {
    BlobManager::new(food_board(100, 100, 20, seed), BlobConfig::default(), seed)
}

/// 316x316 colony with 200 food cells.
pub fn stress_profile(seed: u64) -> Result<BlobManager, ConfigError> {
    BlobManager::new(food_board(316, 316, 200, seed), BlobConfig::default(), seed)
}
