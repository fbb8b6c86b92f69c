//! Colony-wide shared state: configuration and the known-food registry.

use indexmap::IndexSet;

use crate::config::BlobConfig;
use crate::id::Cell;

/// What the whole colony knows.
///
/// Owned by the manager and lent to agents for the duration of a call.
/// The food registry holds each cell at most once; insertion order is kept
/// so that random draws by index are reproducible for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct Knowledge {
    /// Tunable parameters. May be changed between ticks.
    pub config: BlobConfig,
    food: IndexSet<Cell>,
    target_population: usize,
}

impl Knowledge {
    /// Knowledge with no known food and a target population equal to the
    /// configured floor.
    pub fn new(config: BlobConfig) -> Self {
        let target_population = config.scouters.min;
        Self {
            config,
            food: IndexSet::new(),
            target_population,
        }
    }

    /// Knowledge seeded with a list of food cells. Duplicates are dropped.
    pub fn with_food(config: BlobConfig, food: impl IntoIterator<Item = Cell>) -> Self {
        let mut k = Self::new(config);
        k.food.extend(food);
        k
    }

    /// Known food cells in discovery order.
    pub fn known_food(&self) -> &IndexSet<Cell> {
        &self.food
    }

    /// Number of known food cells.
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// The `index`-th known food cell.
    pub fn food_at(&self, index: usize) -> Option<Cell> {
        self.food.get_index(index).copied()
    }

    /// Whether `cell` is a known food cell.
    pub fn knows_food(&self, cell: Cell) -> bool {
        self.food.contains(&cell)
    }

    /// Register a discovered food cell. Returns `false` if it was already known.
    pub fn discover_food(&mut self, cell: Cell) -> bool {
        self.food.insert(cell)
    }

    /// Forget a food cell (depleted or removed). Returns `false` if unknown.
    pub fn forget_food(&mut self, cell: Cell) -> bool {
        self.food.shift_remove(&cell)
    }

    /// The population the last control pass asked for.
    pub fn target_population(&self) -> usize {
        self.target_population
    }

    /// Overwrite the target population.
    pub fn set_target_population(&mut self, target: usize) {
        self.target_population = target;
    }
}

impl Default for Knowledge {
    fn default() -> Self {
        Self::new(BlobConfig::default())
    }
}
