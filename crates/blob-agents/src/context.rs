//! The [`Agent`] capability and the context lent to agents on every call.

use blob_board::Board;
use blob_core::{Cell, Knowledge};
use rand_chacha::ChaCha8Rng;

/// The single random source of a simulation.
pub type SimRng = ChaCha8Rng;

/// Shared state an agent may read and mutate during one call.
///
/// Built by the manager for each agent in turn; only one agent holds it at
/// a time, so later agents of a tick see what earlier ones deposited.
pub struct AgentContext<'a> {
    /// The board.
    pub board: &'a mut Board,
    /// Colony configuration and known food.
    pub knowledge: &'a mut Knowledge,
    /// The simulation's random source.
    pub rng: &'a mut SimRng,
}

impl<'a> AgentContext<'a> {
    /// Bundle the shared state.
    pub fn new(board: &'a mut Board, knowledge: &'a mut Knowledge, rng: &'a mut SimRng) -> Self {
        Self {
            board,
            knowledge,
            rng,
        }
    }
}

/// Behaviour shared by every agent kind.
pub trait Agent {
    /// Current cell.
    fn position(&self) -> Cell;

    /// Move at most one cell. Staying in place means the agent is stuck.
    fn step(&mut self, ctx: &mut AgentContext<'_>);

    /// Act on the current cell (deposit trail, eat, harvest).
    fn update(&mut self, ctx: &mut AgentContext<'_>);
}
