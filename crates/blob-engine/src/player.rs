//! Experimenter operations on a running colony.

use blob_board::BoardRegion;
use blob_core::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::manager::BlobManager;

/// Attempts per requested food cell before [`Player::scatter_food`] gives up.
const SCATTER_ATTEMPTS_PER_FOOD: usize = 64;

/// The experimenter: places and removes food, cleans half the board.
///
/// Its only state is which half [`clean_board`](Self::clean_board) clears
/// next; cleaning alternates, starting with the top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    clean_top: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self { clean_top: true }
    }
}

impl Player {
    /// A player that cleans the top half first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next clean targets the top half.
    pub fn clean_top(&self) -> bool {
        self.clean_top
    }

    /// The half the next [`clean_board`](Self::clean_board) clears.
    pub fn next_clean_region(&self) -> BoardRegion {
        if self.clean_top {
            BoardRegion::TopHalf
        } else {
            BoardRegion::BottomHalf
        }
    }

    /// Put `amount` food on every untouched, in-bounds cell of the
    /// `size × size` square whose top-left corner is `(x, y)`.
    ///
    /// Cells already holding food keep it. Returns whether any cell
    /// received food.
    pub fn place_food(
        &self,
        manager: &mut BlobManager,
        x: i32,
        y: i32,
        size: u32,
        amount: f64,
    ) -> bool {
        let board = manager.board_mut();
        let mut placed = false;
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                let (cx, cy) = (x + dx, y + dy);
                if board.inside(cx, cy) && !board.is_touched(cx, cy) {
                    placed |= board.set_food(cx, cy, amount);
                }
            }
        }
        if !placed {
            tracing::debug!(x, y, size, "no food placed: area covered by blob");
        }
        placed
    }

    /// Clear food on `(x, y)` and forget it. Returns whether food was there.
    pub fn remove_food(&self, manager: &mut BlobManager, x: i32, y: i32) -> bool {
        let removed = manager.board_mut().remove_food(x, y);
        manager.knowledge_mut().forget_food(Cell::new(x, y));
        removed
    }

    /// Place `count` food cells of `amount` on random untouched, food-free
    /// cells of `region`. Returns how many were placed, which is less than
    /// `count` only when free cells ran out.
    pub fn scatter_food(
        &self,
        manager: &mut BlobManager,
        count: usize,
        region: BoardRegion,
        amount: f64,
    ) -> usize {
        let width = manager.board().width();
        let rows = region.rows(manager.board().height());
        if rows.is_empty() {
            tracing::warn!(?region, "cannot scatter food: region is empty");
            return 0;
        }
        let mut placed = 0;
        let mut attempts = 0;
        let budget = count.saturating_mul(SCATTER_ATTEMPTS_PER_FOOD);
        while placed < count && attempts < budget {
            attempts += 1;
            let x = manager.rng.random_range(0..width) as i32;
            let y = manager.rng.random_range(rows.clone()) as i32;
            if !manager.board().has_food(x, y) && self.place_food(manager, x, y, 1, amount) {
                placed += 1;
            }
        }
        if placed < count {
            tracing::warn!(placed, requested = count, attempts, "gave up scattering food");
        }
        placed
    }

    /// Reset every cell of the next half on both the board and the colony,
    /// then switch halves. Returns the half that was cleaned.
    pub fn clean_board(&mut self, manager: &mut BlobManager) -> BoardRegion {
        let region = self.next_clean_region();
        manager.reset_region(region);
        self.clean_top = !self.clean_top;
        region
    }

    /// Coverage of the `(top, bottom)` halves, percent.
    pub fn blob_cover(&self, manager: &BlobManager) -> (f64, f64) {
        let board = manager.board();
        (
            board.coverage(BoardRegion::TopHalf),
            board.coverage(BoardRegion::BottomHalf),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_board::Board;
    use blob_core::{BlobConfig, DEFAULT_FOOD};

    fn manager(w: u32, h: u32) -> BlobManager {
        BlobManager::new(Board::new(w, h), BlobConfig::default(), 3).unwrap()
    }

    #[test]
    fn place_food_skips_touched_and_off_board_cells() {
        let mut m = manager(5, 5);
        m.board_mut().update_intensity(4, 4, 10.0);
        let player = Player::new();
        assert!(player.place_food(&mut m, 3, 3, 3, DEFAULT_FOOD));
        assert_eq!(m.board().food(3, 3), Some(DEFAULT_FOOD));
        assert_eq!(m.board().food(4, 3), Some(DEFAULT_FOOD));
        assert_eq!(m.board().food(4, 4), Some(0.0));
        assert!(!player.place_food(&mut m, 4, 4, 1, DEFAULT_FOOD));
    }

    #[test]
    fn remove_food_forgets_it() {
        let mut board = Board::new(4, 4);
        board.set_food(1, 1, 10.0);
        board.update_intensity(1, 1, 1.0);
        let mut m = BlobManager::new(board, BlobConfig::default(), 0).unwrap();
        assert!(m.knowledge().knows_food(Cell::new(1, 1)));
        assert!(Player::new().remove_food(&mut m, 1, 1));
        assert!(!m.board().has_food(1, 1));
        assert!(!m.knowledge().knows_food(Cell::new(1, 1)));
    }

    #[test]
    fn scatter_respects_region() {
        let mut m = manager(10, 10);
        let placed = Player::new().scatter_food(&mut m, 5, BoardRegion::BottomHalf, 20.0);
        assert_eq!(placed, 5);
        let foods: Vec<Cell> = m
            .board()
            .cells()
            .filter(|(_, s)| s.food > 0.0)
            .map(|(c, _)| c)
            .collect();
        assert_eq!(foods.len(), 5);
        assert!(foods.iter().all(|c| c.y >= 5));
    }

    #[test]
    fn scatter_gives_up_when_full() {
        let mut m = manager(2, 2);
        let placed = Player::new().scatter_food(&mut m, 10, BoardRegion::Whole, 1.0);
        assert_eq!(placed, 4);
    }

    #[test]
    fn clean_board_alternates_halves() {
        let mut m = manager(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                m.board_mut().update_intensity(x, y, 100.0);
            }
        }
        let mut player = Player::new();
        assert_eq!(player.blob_cover(&m), (100.0, 100.0));
        assert_eq!(player.clean_board(&mut m), BoardRegion::TopHalf);
        assert_eq!(player.blob_cover(&m), (0.0, 100.0));
        assert!(!player.clean_top());
        assert_eq!(player.clean_board(&mut m), BoardRegion::BottomHalf);
        assert_eq!(player.blob_cover(&m), (0.0, 0.0));
        assert!(player.clean_top());
    }

    #[test]
    fn player_state_is_json() {
        let mut player = Player::new();
        player.clean_top = false;
        let text = serde_json::to_string(&player).unwrap();
        assert_eq!(text, r#"{"clean_top":false}"#);
        let back: Player = serde_json::from_str("{}").unwrap();
        assert!(back.clean_top());
    }
}
