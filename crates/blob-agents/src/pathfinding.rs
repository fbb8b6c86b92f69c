//! Weighted shortest paths over a [`CostGrid`].
//!
//! Dijkstra with a lexicographic `(cost, hops)` key: among equal-cost
//! routes the one with fewer steps wins, which keeps agents from wandering
//! across free ground. Entering a cell costs its grid cost, scaled by √2
//! for diagonal moves. A zero cost is free, never an obstacle.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use blob_board::Window;
use blob_core::Cell;
use smallvec::SmallVec;

use crate::cost::CostGrid;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

#[derive(Clone, Copy, PartialEq)]
struct Frontier {
    cost: f64,
    hops: u32,
    node: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; node index breaks ties deterministically.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn better(a: (f64, u32), b: (f64, u32)) -> bool {
    match a.0.total_cmp(&b.0) {
        Ordering::Less => true,
        Ordering::Equal => a.1 < b.1,
        Ordering::Greater => false,
    }
}

fn neighbours(
    grid: &CostGrid,
    col: usize,
    row: usize,
    diagonal: bool,
) -> SmallVec<[(usize, usize, f64); 8]> {
    let mut out = SmallVec::new();
    let moves = ORTHOGONAL
        .iter()
        .map(|&d| (d, 1.0))
        .chain(
            DIAGONAL
                .iter()
                .filter(|_| diagonal)
                .map(|&d| (d, std::f64::consts::SQRT_2)),
        );
    for ((dc, dr), scale) in moves {
        let (Some(c), Some(r)) = (col.checked_add_signed(dc), row.checked_add_signed(dr)) else {
            continue;
        };
        if let Some(cost) = grid.cost(c, r) {
            out.push((c, r, cost * scale));
        }
    }
    out
}

/// Cheapest path from `start` to `goal`, both grid-local `(col, row)`.
///
/// The path starts with `start` and ends with `goal`; it is empty when
/// either endpoint lies outside the grid.
pub fn find_path(
    grid: &CostGrid,
    start: (usize, usize),
    goal: (usize, usize),
    diagonal: bool,
) -> Vec<(usize, usize)> {
    let width = grid.width();
    if grid.cost(start.0, start.1).is_none() || grid.cost(goal.0, goal.1).is_none() {
        return Vec::new();
    }
    let index = |col: usize, row: usize| row * width + col;
    let nodes = width * grid.height();
    let mut dist = vec![(f64::INFINITY, u32::MAX); nodes];
    let mut prev: Vec<Option<usize>> = vec![None; nodes];
    let mut heap = BinaryHeap::new();

    let source = index(start.0, start.1);
    let target = index(goal.0, goal.1);
    dist[source] = (0.0, 0);
    heap.push(Frontier {
        cost: 0.0,
        hops: 0,
        node: source,
    });

    while let Some(Frontier { cost, hops, node }) = heap.pop() {
        if node == target {
            break;
        }
        if better(dist[node], (cost, hops)) {
            continue;
        }
        let (col, row) = (node % width, node / width);
        for (c, r, step) in neighbours(grid, col, row, diagonal) {
            let next = index(c, r);
            let candidate = (cost + step, hops + 1);
            if better(candidate, dist[next]) {
                dist[next] = candidate;
                prev[next] = Some(node);
                heap.push(Frontier {
                    cost: candidate.0,
                    hops: candidate.1,
                    node: next,
                });
            }
        }
    }

    if dist[target].0.is_infinite() {
        return Vec::new();
    }
    let mut path = vec![(goal.0, goal.1)];
    let mut cursor = target;
    while let Some(p) = prev[cursor] {
        path.push((p % width, p / width));
        cursor = p;
    }
    path.reverse();
    path
}

/// Plan from `from` to `to` over `grid` laid on `window`, in absolute
/// cells, excluding `from`. Empty when either end lies outside the window
/// or `from == to`.
pub fn plan_in_window(
    grid: &CostGrid,
    window: Window,
    from: Cell,
    to: Cell,
    diagonal: bool,
) -> Vec<Cell> {
    let (Some(start), Some(goal)) = (window.to_local(from), window.to_local(to)) else {
        return Vec::new();
    };
    find_path(grid, start, goal, diagonal)
        .into_iter()
        .skip(1)
        .map(|(col, row)| window.to_global(col, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_adjacent(a: (usize, usize), b: (usize, usize), diagonal: bool) -> bool {
        let dc = a.0.abs_diff(b.0);
        let dr = a.1.abs_diff(b.1);
        if diagonal {
            dc <= 1 && dr <= 1 && dc + dr > 0
        } else {
            dc + dr == 1
        }
    }

    #[test]
    fn trivial_path_is_start_only() {
        let grid = CostGrid::uniform(3, 3, 1.0);
        assert_eq!(find_path(&grid, (1, 1), (1, 1), true), vec![(1, 1)]);
    }

    #[test]
    fn free_ground_prefers_fewest_steps() {
        let grid = CostGrid::uniform(5, 5, 0.0);
        let path = find_path(&grid, (0, 0), (4, 4), true);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(4, 4)));
    }

    #[test]
    fn orthogonal_only_without_diagonals() {
        let grid = CostGrid::uniform(4, 4, 1.0);
        let path = find_path(&grid, (0, 0), (3, 3), false);
        assert_eq!(path.len(), 7);
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1], false));
        }
    }

    #[test]
    fn detours_around_expensive_cells() {
        let mut grid = CostGrid::uniform(3, 3, 1.0);
        grid.set_cost(1, 0, 100.0);
        grid.set_cost(1, 1, 100.0);
        let path = find_path(&grid, (0, 0), (2, 0), false);
        assert!(!path.contains(&(1, 0)));
        assert!(!path.contains(&(1, 1)));
        assert_eq!(path.last(), Some(&(2, 0)));
    }

    #[test]
    fn out_of_grid_endpoints_yield_nothing() {
        let grid = CostGrid::uniform(2, 2, 1.0);
        assert!(find_path(&grid, (0, 0), (5, 5), true).is_empty());
        assert!(find_path(&grid, (9, 0), (1, 1), true).is_empty());
    }

    #[test]
    fn window_plan_is_absolute_and_skips_origin() {
        let window = Window {
            x0: 10,
            y0: 20,
            x1: 13,
            y1: 23,
        };
        let grid = CostGrid::uniform(3, 3, 1.0);
        let plan = plan_in_window(&grid, window, Cell::new(10, 20), Cell::new(12, 22), true);
        assert_eq!(plan, vec![Cell::new(11, 21), Cell::new(12, 22)]);
        assert!(plan_in_window(&grid, window, Cell::new(10, 20), Cell::new(0, 0), true).is_empty());
    }

    proptest! {
        #[test]
        fn paths_are_connected(
            costs in proptest::collection::vec(0.0f64..300.0, 36),
            sc in 0usize..6, sr in 0usize..6, gc in 0usize..6, gr in 0usize..6,
            diagonal in any::<bool>(),
        ) {
            let grid = CostGrid::from_fn(6, 6, |c, r| costs[r * 6 + c]);
            let path = find_path(&grid, (sc, sr), (gc, gr), diagonal);
            prop_assert_eq!(path.first(), Some(&(sc, sr)));
            prop_assert_eq!(path.last(), Some(&(gc, gr)));
            for pair in path.windows(2) {
                prop_assert!(is_adjacent(pair[0], pair[1], diagonal));
            }
        }
    }
}
