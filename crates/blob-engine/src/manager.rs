//! The colony manager: owns the board, the knowledge, the agents and the
//! random source, and runs the tick.

use blob_agents::{Agent, AgentContext, FsmAnt, SimRng};
use blob_board::{Board, BoardRegion};
use blob_core::{AgentId, BlobConfig, Cell, ConfigError, Knowledge, TickId};
use rand::{Rng, SeedableRng};

use crate::population;
use crate::stats::{AgentView, BlobStats, TickReport};

/// Runs the colony.
///
/// A tick ([`step`](Self::step)) is, in order:
///
/// 1. every agent steps; an agent that stayed put is dead and skips its
///    update, others register newly found food and update;
/// 2. the target population is recomputed and the colony grown or shrunk
///    (random removals) towards it;
/// 3. each dead agent still present is removed and replaced;
/// 4. the board decays.
///
/// All randomness flows from one seeded rng, so equal inputs replay
/// identically.
pub struct BlobManager {
    board: Board,
    knowledge: Knowledge,
    agents: Vec<(AgentId, FsmAnt)>,
    pub(crate) rng: SimRng,
    seed: u64,
    next_id: u64,
    tick: TickId,
    last_report: TickReport,
}

impl BlobManager {
    /// A manager over `board`, knowing every cell that is both touched and
    /// holding food, populated up to its target.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn new(board: Board, config: BlobConfig, seed: u64) -> Result<Self, ConfigError> {
        let food: Vec<Cell> = board
            .cells()
            .filter(|(_, state)| state.touched && state.food > 0.0)
            .map(|(cell, _)| cell)
            .collect();
        Self::with_knowledge(board, Knowledge::with_food(config, food), seed)
    }

    /// A manager over `board` with explicit knowledge, populated up to its
    /// target.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `knowledge.config`.
    pub fn with_knowledge(
        board: Board,
        mut knowledge: Knowledge,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        knowledge.config.validate()?;
        let target = population::target_population(&board, &knowledge);
        knowledge.set_target_population(target);
        let mut manager = Self {
            board,
            knowledge,
            agents: Vec::new(),
            rng: SimRng::seed_from_u64(seed),
            seed,
            next_id: 0,
            tick: TickId(0),
            last_report: TickReport::default(),
        };
        while manager.add_agent().is_some() {}
        tracing::debug!(
            agents = manager.agents.len(),
            known_food = manager.knowledge.food_count(),
            "colony created"
        );
        Ok(manager)
    }

    // ── Tick ───────────────────────────────────────────────────────

    /// Run one tick.
    pub fn step(&mut self) -> TickReport {
        let mut report = TickReport {
            tick: TickId(self.tick.0 + 1),
            ..TickReport::default()
        };

        let mut dead = Vec::new();
        {
            let Self {
                board,
                knowledge,
                agents,
                rng,
                ..
            } = self;
            for (id, ant) in agents.iter_mut() {
                let mut ctx = AgentContext::new(board, knowledge, rng);
                let before = ant.position();
                ant.step(&mut ctx);
                let at = ant.position();
                if at == before {
                    tracing::trace!(agent = %id, x = at.x, y = at.y, "agent stuck");
                    dead.push(*id);
                    continue;
                }
                if ctx.board.has_food(at.x, at.y) && ctx.knowledge.discover_food(at) {
                    tracing::debug!(agent = %id, x = at.x, y = at.y, "food discovered");
                    report.discovered += 1;
                }
                ant.update(&mut ctx);
            }
        }
        report.died = dead.len();

        self.retarget();
        let target = self.knowledge.target_population();
        let current = self.agents.len();
        if target > current {
            for _ in current..target {
                if self.add_agent().is_some() {
                    report.spawned += 1;
                }
            }
        } else {
            for _ in target..current {
                if self.kill_random_agent().is_some() {
                    report.removed += 1;
                }
            }
        }

        for id in dead {
            if let Some(index) = self.agents.iter().position(|(a, _)| *a == id) {
                self.agents.remove(index);
                tracing::trace!(agent = %id, "dead agent removed");
                if self.add_agent().is_some() {
                    report.replaced += 1;
                }
            }
        }

        let config = &self.knowledge.config;
        self.board
            .decay_pass(config.global_decrease, config.remaining_blob_on_food);

        self.tick = report.tick;
        self.last_report = report.clone();
        report
    }

    fn retarget(&mut self) {
        let target = population::target_population(&self.board, &self.knowledge);
        if target != self.knowledge.target_population() {
            tracing::debug!(
                from = self.knowledge.target_population(),
                to = target,
                "population retargeted"
            );
        }
        self.knowledge.set_target_population(target);
    }

    // ── Population intents ─────────────────────────────────────────

    /// Spawn one agent if the colony is below its target.
    pub fn add_agent(&mut self) -> Option<AgentId> {
        if self.agents.len() >= self.knowledge.target_population() {
            return None;
        }
        let at = population::spawn_site(&self.board, &self.knowledge, &mut self.rng);
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push((id, FsmAnt::new(at, &self.knowledge.config)));
        tracing::debug!(agent = %id, x = at.x, y = at.y, "agent spawned");
        Some(id)
    }

    /// Remove one agent chosen uniformly at random.
    pub fn kill_random_agent(&mut self) -> Option<AgentId> {
        if self.agents.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.agents.len());
        let (id, _) = self.agents.remove(index);
        tracing::trace!(agent = %id, "agent removed");
        Some(id)
    }

    /// Raise `scouters.min` by one and spawn up to the new target.
    pub fn raise_population_floor(&mut self) {
        self.knowledge.config.scouters.min += 1;
        self.retarget();
        while self.add_agent().is_some() {}
    }

    /// Lower `scouters.min` by one (not below zero). Agents beyond the new
    /// target are shed on the next tick.
    pub fn lower_population_floor(&mut self) {
        let floor = &mut self.knowledge.config.scouters.min;
        *floor = floor.saturating_sub(1);
        self.retarget();
    }

    /// Remove every agent standing on `(x, y)` and forget food there.
    ///
    /// Forgetting food lowers the target by one, never below the floor.
    pub fn reset(&mut self, x: i32, y: i32) {
        let cell = Cell::new(x, y);
        self.agents.retain(|(_, ant)| ant.position() != cell);
        if self.knowledge.forget_food(cell) {
            let floor = self.knowledge.config.scouters.min;
            let target = self.knowledge.target_population().saturating_sub(1);
            self.knowledge.set_target_population(target.max(floor));
        }
    }

    /// [`reset`](Self::reset) every cell of `region`, clearing the board
    /// there as well.
    pub fn reset_region(&mut self, region: BoardRegion) {
        let width = self.board.width() as i32;
        for y in region.rows(self.board.height()) {
            for x in 0..width {
                self.board.reset_cell(x, y as i32);
                self.reset(x, y as i32);
            }
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board, for experimenter edits between ticks.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Configuration and known food.
    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Configuration and known food, for parameter changes between ticks.
    pub fn knowledge_mut(&mut self) -> &mut Knowledge {
        &mut self.knowledge
    }

    /// Number of live agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Live agents in update order.
    pub fn agents(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.iter().map(|(id, ant)| AgentView {
            id: *id,
            position: ant.position(),
            state: ant.state(),
            stored: ant.stored(),
        })
    }

    /// Colony summary.
    pub fn stats(&self) -> BlobStats {
        BlobStats {
            tick: self.tick,
            agents: self.agents.len(),
            target_population: self.knowledge.target_population(),
            known_food: self.knowledge.food_count(),
            coverage: self.board.coverage(BoardRegion::Whole),
            total_intensity: self.board.total_intensity(),
        }
    }

    /// Ticks completed.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// What the last tick did.
    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }

    /// Seed the random source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(board: Board) -> BlobManager {
        BlobManager::new(board, BlobConfig::default(), 7).unwrap()
    }

    #[test]
    fn new_populates_to_floor() {
        let m = manager(Board::new(20, 20));
        assert_eq!(m.agent_count(), 2);
        assert_eq!(m.knowledge().target_population(), 2);
        assert!(m.agents().all(|a| a.position == Cell::ORIGIN));
    }

    #[test]
    fn new_learns_only_touched_food() {
        let mut board = Board::new(10, 10);
        board.set_food(1, 1, 5.0);
        board.set_food(2, 2, 5.0);
        board.update_intensity(2, 2, 1.0);
        let m = manager(board);
        assert_eq!(m.knowledge().food_count(), 1);
        assert!(m.knowledge().knows_food(Cell::new(2, 2)));
        assert!(m.agents().all(|a| a.position == Cell::new(2, 2)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = BlobConfig::default();
        config.harvesting.min = 500.0;
        assert!(BlobManager::new(Board::new(3, 3), config, 0).is_err());
    }

    #[test]
    fn ticks_advance_and_population_holds_floor() {
        let mut m = manager(Board::new(15, 15));
        for n in 1..=20 {
            let report = m.step();
            assert_eq!(report.tick, TickId(n));
            assert!(m.agent_count() >= 2);
        }
        assert_eq!(m.current_tick(), TickId(20));
        assert_eq!(m.stats().tick, TickId(20));
    }

    #[test]
    fn reset_removes_agents_and_food() {
        let mut board = Board::new(10, 10);
        board.set_food(4, 4, 50.0);
        board.update_intensity(4, 4, 10.0);
        let mut m = manager(board);
        assert_eq!(m.agent_count(), 2);
        m.reset(4, 4);
        assert_eq!(m.agent_count(), 0);
        assert!(!m.knowledge().knows_food(Cell::new(4, 4)));
        assert_eq!(m.knowledge().target_population(), 2);
    }

    #[test]
    fn floor_intents_move_the_population() {
        let mut m = manager(Board::new(10, 10));
        m.raise_population_floor();
        assert_eq!(m.knowledge().config.scouters.min, 3);
        assert_eq!(m.agent_count(), 3);
        m.lower_population_floor();
        m.lower_population_floor();
        assert_eq!(m.knowledge().target_population(), 1);
        m.step();
        assert_eq!(m.agent_count(), 1);
    }

    #[test]
    fn kill_random_agent_shrinks_by_one() {
        let mut m = manager(Board::new(10, 10));
        let before = m.agent_count();
        assert!(m.kill_random_agent().is_some());
        assert_eq!(m.agent_count(), before - 1);
        while m.kill_random_agent().is_some() {}
        assert_eq!(m.kill_random_agent(), None);
    }
}
