//! Per-tick reports and colony statistics.
//!
//! [`TickReport`] summarises what a single [`BlobManager::step`] did;
//! [`BlobStats`] is a snapshot of the colony for display and logging.
//!
//! [`BlobManager::step`]: crate::BlobManager::step

use blob_agents::AntState;
use blob_core::{AgentId, Cell, TickId};

/// Population changes made by one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that just completed.
    pub tick: TickId,
    /// Agents that could not move.
    pub died: usize,
    /// Dead agents replaced by fresh spawns.
    pub replaced: usize,
    /// Agents added to reach a higher target.
    pub spawned: usize,
    /// Agents removed to reach a lower target.
    pub removed: usize,
    /// Food cells first stepped on this tick.
    pub discovered: usize,
}

/// Colony state summary.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobStats {
    /// Ticks completed.
    pub tick: TickId,
    /// Live agents.
    pub agents: usize,
    /// Population the control pass aims for.
    pub target_population: usize,
    /// Known food cells.
    pub known_food: usize,
    /// Touched share of the board, percent.
    pub coverage: f64,
    /// Total trail as a share of the maximum, percent.
    pub total_intensity: f64,
}

/// Read-only view of one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    /// Identity, stable for the agent's lifetime.
    pub id: AgentId,
    /// Current cell.
    pub position: Cell,
    /// Scouting or starving.
    pub state: AntState,
    /// Food held.
    pub stored: f64,
}
