//! Scouter alternating between local and global exploration.

use blob_board::{Board, Window};
use blob_core::{BlobConfig, Cell};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::context::{Agent, AgentContext, SimRng};
use crate::route::Route;
use crate::sensing::{local_minimum_goal, SensingScouter};

/// Goal-selection policy of an [`AdvancedScouter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExploreMode {
    /// Weakest single cell in sight.
    #[default]
    Local,
    /// Centre of the emptiest neighbourhood in sight.
    Global,
}

/// A [`SensingScouter`] that sometimes aims at the emptiest region in its
/// sightline instead of the weakest cell.
///
/// Each goal choice may flip the mode for the next one: local switches to
/// global with probability `1 - global_explore_probability` (never while
/// standing on food if `search_locally_on_food`), global switches back to
/// local with probability `global_explore_probability`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvancedScouter {
    scout: SensingScouter,
    mode: ExploreMode,
    global_probability: f64,
    search_locally_on_food: bool,
}

impl AdvancedScouter {
    /// A local-mode scouter at `at`.
    pub fn new(at: Cell, config: &BlobConfig) -> Self {
        Self {
            scout: SensingScouter::new(at, config),
            mode: ExploreMode::Local,
            global_probability: config.scouting.global_explore_probability,
            search_locally_on_food: config.scouting.search_locally_on_food,
        }
    }

    /// Current policy.
    pub fn mode(&self) -> ExploreMode {
        self.mode
    }

    /// Current goal and path.
    pub fn route(&self) -> &Route {
        self.scout.route()
    }

    /// Teleport to `at`, forgetting goal and path. The mode is kept.
    pub fn reset_at(&mut self, at: Cell) {
        self.scout.reset_at(at);
    }

    pub(crate) fn set_position(&mut self, at: Cell) {
        self.scout.set_position(at);
    }
}

impl Agent for AdvancedScouter {
    fn position(&self) -> Cell {
        self.scout.position()
    }

    fn step(&mut self, ctx: &mut AgentContext<'_>) {
        let at = self.scout.position();
        if self.search_locally_on_food
            && self.mode == ExploreMode::Global
            && ctx.board.has_food(at.x, at.y)
        {
            self.scout.route_mut().clear();
            self.mode = ExploreMode::Local;
        }

        let mode = &mut self.mode;
        let probability = self.global_probability;
        let stay_on_food = self.search_locally_on_food;
        self.scout.pursue(ctx, |ctx, at, sightline| match *mode {
            ExploreMode::Local => {
                let held = stay_on_food && ctx.board.has_food(at.x, at.y);
                if !held && probability < ctx.rng.random::<f64>() {
                    *mode = ExploreMode::Global;
                }
                local_minimum_goal(ctx.board, at, sightline, ctx.rng)
            }
            ExploreMode::Global => {
                if probability >= ctx.rng.random::<f64>() {
                    *mode = ExploreMode::Local;
                }
                global_minimum_goal(ctx.board, at, sightline, ctx.rng)
            }
        });
    }

    fn update(&mut self, ctx: &mut AgentContext<'_>) {
        self.scout.update(ctx);
    }
}

const TIE_EPSILON: f64 = 1e-9;

/// Prefix sums of intensity over a window.
struct SummedArea {
    origin: Window,
    stride: usize,
    table: Vec<f64>,
}

impl SummedArea {
    fn new(board: &Board, origin: Window) -> Self {
        let stride = origin.width() + 1;
        let mut table = vec![0.0; stride * (origin.height() + 1)];
        for row in 0..origin.height() {
            let mut run = 0.0;
            for col in 0..origin.width() {
                let cell = origin.to_global(col, row);
                run += board.intensity(cell.x, cell.y).unwrap_or_default();
                table[(row + 1) * stride + col + 1] = table[row * stride + col + 1] + run;
            }
        }
        Self {
            origin,
            stride,
            table,
        }
    }

    /// Sum over `inner`, which must lie inside the origin window.
    fn sum(&self, inner: Window) -> f64 {
        let x0 = (inner.x0 - self.origin.x0) as usize;
        let y0 = (inner.y0 - self.origin.y0) as usize;
        let x1 = (inner.x1 - self.origin.x0) as usize;
        let y1 = (inner.y1 - self.origin.y0) as usize;
        let at = |x: usize, y: usize| self.table[y * self.stride + x];
        at(x1, y1) - at(x1, y0) - at(x0, y1) + at(x0, y0)
    }
}

/// A uniformly chosen cell of the sightline window around `at` whose own
/// neighbourhood (same radius, clipped to the window) has the lowest mean
/// intensity.
pub fn global_minimum_goal(
    board: &Board,
    at: Cell,
    sightline: i32,
    rng: &mut SimRng,
) -> Option<Cell> {
    let outer = Window::around(board, at, sightline);
    if outer.is_empty() {
        return None;
    }
    let sums = SummedArea::new(board, outer);
    let mut best = f64::INFINITY;
    let mut minima = Vec::new();
    for cell in outer.cells() {
        let inner = Window::around(board, cell, sightline).intersect(outer);
        let mean = sums.sum(inner) / inner.area().max(1) as f64;
        if mean < best - TIE_EPSILON {
            best = mean;
            minima.clear();
            minima.push(cell);
        } else if (mean - best).abs() <= TIE_EPSILON {
            minima.push(cell);
        }
    }
    minima.choose(rng).copied()
}
