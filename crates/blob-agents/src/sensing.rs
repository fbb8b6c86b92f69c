//! Trail-sensing scouter: seeks the weakest trail within its sightline.

use blob_board::{Board, Window};
use blob_core::{BlobConfig, Cell};
use rand::seq::IndexedRandom;

use crate::context::{Agent, AgentContext, SimRng};
use crate::cost::scouting_costs;
use crate::dumb::DumbScouter;
use crate::pathfinding::plan_in_window;
use crate::route::Route;

/// Heads for the least-intense cell around it along the cheapest path,
/// where fresh trail is expensive to cross.
#[derive(Clone, Debug, PartialEq)]
pub struct SensingScouter {
    base: DumbScouter,
    sightline: i32,
    diagonal: bool,
    light_compute: bool,
    route: Route,
}

impl SensingScouter {
    /// A scouter at `at` using the `scouting` section of `config`.
    pub fn new(at: Cell, config: &BlobConfig) -> Self {
        Self {
            base: DumbScouter::from_config(at, config),
            sightline: config.scouting.sightline,
            diagonal: config.scouting.diagonal_moves,
            light_compute: config.scouting.light_compute,
            route: Route::default(),
        }
    }

    /// Sightline radius (`<= 0` is the whole board).
    pub fn sightline(&self) -> i32 {
        self.sightline
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

    pub(crate) fn route_mut(&mut self) -> &mut Route {
        &mut self.route
    }

    pub(crate) fn set_position(&mut self, at: Cell) {
        self.base.set_position(at);
    }

    /// Follow the route, choosing fresh goals with `choose(ctx, at, sightline)`.
    pub(crate) fn pursue<C>(&mut self, ctx: &mut AgentContext<'_>, choose: C)
    where
        C: FnOnce(&mut AgentContext<'_>, Cell, i32) -> Option<Cell>,
    {
        let at = self.base.position();
        let sightline = self.sightline;
        let diagonal = self.diagonal;
        let mut position = at;
        self.route.advance(
            ctx,
            &mut position,
            self.light_compute,
            |_, _| true,
            |ctx| choose(ctx, at, sightline),
            move |ctx, goal| {
                let window = Window::around(ctx.board, at, sightline);
                let grid = scouting_costs(ctx.board, window);
                plan_in_window(&grid, window, at, goal, diagonal)
            },
        );
        self.base.set_position(position);
    }
}

impl Agent for SensingScouter {
    fn position(&self) -> Cell {
        self.base.position()
    }

    fn step(&mut self, ctx: &mut AgentContext<'_>) {
        self.pursue(ctx, |ctx, at, sightline| {
            local_minimum_goal(ctx.board, at, sightline, ctx.rng)
        });
    }

    fn update(&mut self, ctx: &mut AgentContext<'_>) {
        self.base.deposit(ctx.board);
    }
}

/// A uniformly chosen cell of minimal intensity in the sightline window
/// around `at`, excluding `at` itself.
pub fn local_minimum_goal(board: &Board, at: Cell, sightline: i32, rng: &mut SimRng) -> Option<Cell> {
    let mut best = f64::INFINITY;
    let mut minima = Vec::new();
    for cell in Window::around(board, at, sightline).cells() {
        if cell == at {
            continue;
        }
        let value = board.intensity(cell.x, cell.y).unwrap_or_default();
        if value < best {
            best = value;
            minima.clear();
            minima.push(cell);
        } else if value == best {
            minima.push(cell);
        }
    }
    minima.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_core::Knowledge;
    use rand::SeedableRng;

    #[test]
    fn goal_is_the_unique_minimum() {
        let mut board = Board::new(3, 3);
        for cell in Window::whole(&board).cells() {
            board.update_intensity(cell.x, cell.y, 100.0);
        }
        board.update_intensity(2, 0, -60.0);
        let mut rng = SimRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(
                local_minimum_goal(&board, Cell::new(1, 1), 1, &mut rng),
                Some(Cell::new(2, 0))
            );
        }
    }

    #[test]
    fn own_cell_is_never_a_goal() {
        let mut board = Board::new(3, 3);
        for cell in Window::whole(&board).cells() {
            board.update_intensity(cell.x, cell.y, 50.0);
        }
        board.update_intensity(1, 1, -50.0);
        let mut rng = SimRng::seed_from_u64(5);
        for _ in 0..50 {
            let goal = local_minimum_goal(&board, Cell::new(1, 1), 1, &mut rng);
            assert_ne!(goal, Some(Cell::new(1, 1)));
            assert!(goal.is_some());
        }
    }

    #[test]
    fn single_cell_board_has_no_goal() {
        let board = Board::new(1, 1);
        let mut rng = SimRng::seed_from_u64(0);
        assert_eq!(local_minimum_goal(&board, Cell::ORIGIN, 3, &mut rng), None);
    }

    #[test]
    fn moves_towards_weak_trail_one_cell_per_step() {
        let mut board = Board::new(7, 1);
        for x in 0..7 {
            board.update_intensity(x, 0, 200.0);
        }
        board.update_intensity(6, 0, -200.0);
        let mut knowledge = Knowledge::default();
        knowledge.config.scouting.sightline = 10;
        let mut rng = SimRng::seed_from_u64(9);
        let mut scout = SensingScouter::new(Cell::new(0, 0), &knowledge.config);
        let mut ctx = AgentContext::new(&mut board, &mut knowledge, &mut rng);
        for x in 1..=6 {
            scout.step(&mut ctx);
            assert_eq!(scout.position(), Cell::new(x, 0));
        }
        assert_eq!(scout.route().goal(), None);
    }
}
