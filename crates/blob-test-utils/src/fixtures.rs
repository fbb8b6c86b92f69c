//! Reusable fixtures.
//!
//! - [`TestBoardBuilder`]: a board with food and trail placed up front.
//! - [`AgentHarness`]: board, knowledge and rng for driving one agent.
//! - [`lean_config`]: defaults with trail deposits switched off.

use blob_agents::{Agent, AgentContext, SimRng};
use blob_board::Board;
use blob_core::{BlobConfig, Cell, Knowledge};
use rand::SeedableRng;

/// A deterministic rng.
pub fn seeded_rng(seed: u64) -> SimRng {
    SimRng::seed_from_u64(seed)
}

/// Default configuration with `drop_by_eat = 0`, so agents leave no trail
/// and reserves drain by exactly `harvesting.eat` per update.
pub fn lean_config() -> BlobConfig {
    let mut config = BlobConfig::default();
    config.scouters.drop_by_eat = 0.0;
    config
}

/// Builder for boards with preset food and trail.
pub struct TestBoardBuilder {
    width: u32,
    height: u32,
    food: Vec<(Cell, f64)>,
    trail: Vec<(Cell, f64)>,
}

impl TestBoardBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            food: Vec::new(),
            trail: Vec::new(),
        }
    }

    pub fn food(mut self, x: i32, y: i32, amount: f64) -> Self {
        self.food.push((Cell::new(x, y), amount));
        self
    }

    pub fn trail(mut self, x: i32, y: i32, intensity: f64) -> Self {
        self.trail.push((Cell::new(x, y), intensity));
        self
    }

    /// Lay `intensity` on every cell of row `y`.
    pub fn trail_row(mut self, y: i32, intensity: f64) -> Self {
        for x in 0..self.width as i32 {
            self.trail.push((Cell::new(x, y), intensity));
        }
        self
    }

    /// Lay `intensity` on every cell.
    pub fn trail_everywhere(mut self, intensity: f64) -> Self {
        for y in 0..self.height as i32 {
            self = self.trail_row(y, intensity);
        }
        self
    }

    pub fn build(self) -> Board {
        let mut board = Board::new(self.width, self.height);
        for (cell, intensity) in self.trail {
            board.update_intensity(cell.x, cell.y, intensity);
        }
        for (cell, amount) in self.food {
            board.set_food(cell.x, cell.y, amount);
        }
        board
    }
}

/// Owns the state an [`AgentContext`] borrows.
pub struct AgentHarness {
    pub board: Board,
    pub knowledge: Knowledge,
    pub rng: SimRng,
}

impl AgentHarness {
    pub fn new(board: Board, config: BlobConfig, seed: u64) -> Self {
        Self {
            board,
            knowledge: Knowledge::new(config),
            rng: seeded_rng(seed),
        }
    }

    /// Register every food cell of the board as known.
    pub fn know_board_food(mut self) -> Self {
        let cells: Vec<Cell> = self
            .board
            .cells()
            .filter(|(_, state)| state.food > 0.0)
            .map(|(cell, _)| cell)
            .collect();
        for cell in cells {
            self.knowledge.discover_food(cell);
        }
        self
    }

    pub fn ctx(&mut self) -> AgentContext<'_> {
        AgentContext::new(&mut self.board, &mut self.knowledge, &mut self.rng)
    }

    /// One manager-style turn: `step`, then `update`.
    pub fn tick(&mut self, agent: &mut impl Agent) {
        let mut ctx = self.ctx();
        agent.step(&mut ctx);
        agent.update(&mut ctx);
    }
}
