//! The random-walk scouter every other agent builds on.

use blob_board::Board;
use blob_core::{BlobConfig, Cell};
use rand::Rng;

use crate::context::{Agent, AgentContext};

/// Walks one random step per tick and deposits a fixed amount of trail.
///
/// Richer agents embed one of these for their position and drop amount.
#[derive(Clone, Debug, PartialEq)]
pub struct DumbScouter {
    position: Cell,
    drop: f64,
}

impl DumbScouter {
    /// A scouter at `at` depositing `drop` per update.
    pub fn new(at: Cell, drop: f64) -> Self {
        Self { position: at, drop }
    }

    /// A scouter at `at` depositing the configured `drop_by_eat`.
    pub fn from_config(at: Cell, config: &BlobConfig) -> Self {
        Self::new(at, config.scouters.drop_by_eat)
    }

    /// Trail deposited per update.
    pub fn drop_amount(&self) -> f64 {
        self.drop
    }

    /// Change the trail deposited per update.
    pub fn set_drop_amount(&mut self, drop: f64) {
        self.drop = drop;
    }

    /// Teleport to `at`.
    pub fn set_position(&mut self, at: Cell) {
        self.position = at;
    }

    /// Deposit `drop` on the current cell.
    pub fn deposit(&self, board: &mut Board) {
        board.update_intensity(self.position.x, self.position.y, self.drop);
    }
}

impl Agent for DumbScouter {
    fn position(&self) -> Cell {
        self.position
    }

    fn step(&mut self, ctx: &mut AgentContext<'_>) {
        let dx = ctx.rng.random_range(-1..=1);
        let dy = ctx.rng.random_range(-1..=1);
        let next = self.position.offset(dx, dy);
        if ctx.board.inside(next.x, next.y) {
            self.position = next;
        }
    }

    fn update(&mut self, ctx: &mut AgentContext<'_>) {
        self.deposit(ctx.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SimRng;
    use blob_core::Knowledge;
    use rand::SeedableRng;

    #[test]
    fn walk_stays_on_board_and_moves_at_most_one_cell() {
        let mut board = Board::new(3, 3);
        let mut knowledge = Knowledge::default();
        let mut rng = SimRng::seed_from_u64(11);
        let mut ctx = AgentContext::new(&mut board, &mut knowledge, &mut rng);
        let mut scout = DumbScouter::new(Cell::ORIGIN, 1.0);
        for _ in 0..200 {
            let before = scout.position();
            scout.step(&mut ctx);
            let after = scout.position();
            assert!(ctx.board.inside(after.x, after.y));
            assert!((after.x - before.x).abs() <= 1 && (after.y - before.y).abs() <= 1);
        }
    }

    #[test]
    fn update_deposits_drop() {
        let mut board = Board::new(4, 4);
        let mut knowledge = Knowledge::default();
        let mut rng = SimRng::seed_from_u64(0);
        let mut ctx = AgentContext::new(&mut board, &mut knowledge, &mut rng);
        let mut scout = DumbScouter::new(Cell::new(2, 1), 7.5);
        scout.update(&mut ctx);
        scout.update(&mut ctx);
        assert_eq!(board.intensity(2, 1), Some(15.0));
        assert!(board.is_touched(2, 1));
    }
}
