//! The colony's agent: scouts while fed, gathers while starving.

use blob_core::{BlobConfig, Cell, MAX_INTENSITY};

use crate::advanced::AdvancedScouter;
use crate::context::{Agent, AgentContext};
use crate::dumb::DumbScouter;
use crate::gatherer::Gatherer;

/// Behavioural state of an [`FsmAnt`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AntState {
    /// Exploring; reserves drain every update.
    #[default]
    Scouting,
    /// Heading to known food; reserves are frozen until refilled.
    Starving,
}

/// Two-state agent carrying a food reserve.
///
/// Each update it deposits trail proportional to how weak the trail under
/// it already is, burns that same ratio of reserve while scouting, and
/// harvests any food underfoot. An empty reserve switches it to
/// [`AntState::Starving`]; refilling to `harvesting.min` switches it back.
#[derive(Clone, Debug, PartialEq)]
pub struct FsmAnt {
    base: DumbScouter,
    stored: f64,
    state: AntState,
    gatherer: Gatherer,
    scout: AdvancedScouter,
}

impl FsmAnt {
    /// A scouting ant at `at` holding `harvesting.min` food.
    pub fn new(at: Cell, config: &BlobConfig) -> Self {
        Self {
            base: DumbScouter::from_config(at, config),
            stored: config.harvesting.min,
            state: AntState::Scouting,
            gatherer: Gatherer::new(at, config),
            scout: AdvancedScouter::new(at, config),
        }
    }

    /// Current state.
    pub fn state(&self) -> AntState {
        self.state
    }

    /// Food held.
    pub fn stored(&self) -> f64 {
        self.stored
    }

    /// Overwrite the reserve. Takes effect on the next update.
    pub fn set_stored(&mut self, stored: f64) {
        self.stored = stored.max(0.0);
    }

    /// Trail deposited on the last update.
    pub fn drop_amount(&self) -> f64 {
        self.base.drop_amount()
    }

    /// The scouting behaviour.
    pub fn scout(&self) -> &AdvancedScouter {
        &self.scout
    }

    /// The gathering behaviour.
    pub fn gatherer(&self) -> &Gatherer {
        &self.gatherer
    }

    fn sync(&mut self, at: Cell) {
        self.base.set_position(at);
        self.scout.set_position(at);
        self.gatherer.set_position(at);
    }
}

impl Agent for FsmAnt {
    fn position(&self) -> Cell {
        self.base.position()
    }

    fn step(&mut self, ctx: &mut AgentContext<'_>) {
        let at = match self.state {
            AntState::Scouting => {
                self.scout.step(ctx);
                self.scout.position()
            }
            AntState::Starving => {
                self.gatherer.step(ctx);
                self.gatherer.position()
            }
        };
        self.sync(at);
    }

    fn update(&mut self, ctx: &mut AgentContext<'_>) {
        let at = self.base.position();
        let harvesting = ctx.knowledge.config.harvesting.clone();
        let drop_by_eat = ctx.knowledge.config.scouters.drop_by_eat;

        let intensity = ctx.board.intensity(at.x, at.y).unwrap_or_default();
        let eat_ratio = harvesting.eat * (MAX_INTENSITY - intensity) / MAX_INTENSITY;
        self.base.set_drop_amount(drop_by_eat * eat_ratio);
        self.base.deposit(ctx.board);

        if self.state == AntState::Scouting {
            self.stored = (self.stored - eat_ratio).max(0.0);
        }

        if ctx.board.has_food(at.x, at.y) {
            let room = (harvesting.max - self.stored).max(0.0);
            let wanted = if ctx.knowledge.food_count() == 1 {
                harvesting.min.min(room)
            } else {
                harvesting.collect.min(room)
            };
            let harvest = ctx.board.eat_food(at.x, at.y, wanted);
            self.stored += harvest.consumed;
            if harvest.depleted {
                ctx.knowledge.forget_food(at);
            }
        }

        let before = self.state;
        if self.stored == 0.0 && self.state == AntState::Scouting {
            self.state = AntState::Starving;
        }
        if self.stored >= harvesting.min && self.state == AntState::Starving {
            self.state = AntState::Scouting;
        }
        if self.state != before {
            match self.state {
                AntState::Starving => self.gatherer.reset_at(at),
                AntState::Scouting => self.scout.reset_at(at),
            }
        }
    }
}
