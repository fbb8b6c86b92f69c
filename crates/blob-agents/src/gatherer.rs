//! Food-seeking agent that follows existing trail to known food.

use blob_board::{Board, Window};
use blob_core::{BlobConfig, Cell, Knowledge};
use rand::Rng;

use crate::context::{Agent, AgentContext, SimRng};
use crate::cost::gathering_costs;
use crate::dumb::DumbScouter;
use crate::pathfinding::plan_in_window;
use crate::route::Route;

/// Walks towards a known food cell along the cheapest path, where strong
/// trail is cheap and virgin ground is free.
///
/// A goal outside the sightline is projected back onto trail inside it
/// (see [`project_goal`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Gatherer {
    base: DumbScouter,
    sightline: i32,
    diagonal: bool,
    light_compute: bool,
    route: Route,
}

impl Gatherer {
    /// A gatherer at `at` using the `gathering` section of `config`.
    pub fn new(at: Cell, config: &BlobConfig) -> Self {
        Self {
            base: DumbScouter::from_config(at, config),
            sightline: config.gathering.sightline,
            diagonal: config.gathering.diagonal_moves,
            light_compute: config.gathering.light_compute,
            route: Route::default(),
        }
    }

    /// Current goal and path.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Teleport to `at`, forgetting goal and path.
    pub fn reset_at(&mut self, at: Cell) {
        self.base.set_position(at);
        self.route.clear();
    }

    pub(crate) fn set_position(&mut self, at: Cell) {
        self.base.set_position(at);
    }
}

impl Agent for Gatherer {
    fn position(&self) -> Cell {
        self.base.position()
    }

    fn step(&mut self, ctx: &mut AgentContext<'_>) {
        let at = self.base.position();
        let sightline = self.sightline;
        let diagonal = self.diagonal;
        let mut position = at;
        self.route.advance(
            ctx,
            &mut position,
            self.light_compute,
            |ctx, goal| ctx.knowledge.knows_food(goal),
            |ctx| choose_food_goal(ctx.knowledge, at, ctx.rng),
            move |ctx, goal| {
                let window = Window::around(ctx.board, at, sightline);
                let Some(local) = project_goal(ctx.board, window, at, goal) else {
                    return Vec::new();
                };
                let grid = gathering_costs(ctx.board, window);
                plan_in_window(&grid, window, at, local, diagonal)
            },
        );
        self.base.set_position(position);
    }

    fn update(&mut self, ctx: &mut AgentContext<'_>) {
        self.base.deposit(ctx.board);
    }
}

/// A known food cell other than `at`, uniformly at random.
pub fn choose_food_goal(knowledge: &Knowledge, at: Cell, rng: &mut SimRng) -> Option<Cell> {
    let count = knowledge.food_count();
    match count {
        0 => None,
        1 => knowledge.food_at(0).filter(|&food| food != at),
        _ => loop {
            // Known food is unique, so at most one index is rejected.
            let food = knowledge.food_at(rng.random_range(0..count))?;
            if food != at {
                return Some(food);
            }
        },
    }
}

/// Local sub-goal inside `window` standing in for `goal`.
///
/// A goal inside the window is returned as is. Otherwise the segment from
/// `goal` (t = 0) to `at` (t = 1) is cut at the smallest `t` where it meets
/// a window edge, then walked towards `at` in steps of `1 / (w + h)` until
/// a touched cell is found or `t` passes 1.
pub fn project_goal(board: &Board, window: Window, at: Cell, goal: Cell) -> Option<Cell> {
    if window.contains(goal) {
        return Some(goal);
    }
    if window.is_empty() {
        return None;
    }
    let dx = f64::from(at.x - goal.x);
    let dy = f64::from(at.y - goal.y);
    let t_x = (dx != 0.0).then(|| {
        let edge = if dx > 0.0 { window.x0 } else { window.x1 - 1 };
        f64::from(edge - goal.x) / dx
    });
    let t_y = (dy != 0.0).then(|| {
        let edge = if dy >= 0.0 { window.y0 } else { window.y1 - 1 };
        f64::from(edge - goal.y) / dy
    });
    let on_segment = |t: &f64| (0.0..=1.0).contains(t);
    let mut t = match (t_x.filter(on_segment), t_y.filter(on_segment)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    let along = |t: f64| {
        let x = (f64::from(goal.x) + t * dx) as i32;
        let y = (f64::from(goal.y) + t * dy) as i32;
        Cell::new(x.clamp(window.x0, window.x1 - 1), y.clamp(window.y0, window.y1 - 1))
    };
    let increment = 1.0 / (board.width() + board.height()) as f64;
    let mut cell = along(t);
    while !board.is_touched(cell.x, cell.y) && t <= 1.0 {
        t += increment;
        cell = along(t);
    }
    Some(cell)
}
