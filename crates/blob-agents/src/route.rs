//! Goal and planned-path bookkeeping shared by goal-seeking agents.

use std::collections::VecDeque;

use blob_core::Cell;

use crate::context::AgentContext;

/// A goal cell and the remaining steps towards it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    goal: Option<Cell>,
    path: VecDeque<Cell>,
}

impl Route {
    /// Current goal, if any.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Remaining planned steps, next step first.
    pub fn path(&self) -> impl Iterator<Item = Cell> + '_ {
        self.path.iter().copied()
    }

    /// Number of remaining planned steps.
    pub fn remaining(&self) -> usize {
        self.path.len()
    }

    /// Drop both goal and path.
    pub fn clear(&mut self) {
        self.goal = None;
        self.path.clear();
    }

    /// Advance one step along the route, moving `position`.
    ///
    /// 1. A missing goal, or one `still_valid` rejects, is replaced by
    ///    `choose` (path dropped). No candidate: stay put.
    /// 2. The path is recomputed with `plan` when empty, or on every call
    ///    unless `light_compute`. An empty plan abandons the goal.
    /// 3. The next step is taken; reaching the goal clears the route.
    pub fn advance<V, C, P>(
        &mut self,
        ctx: &mut AgentContext<'_>,
        position: &mut Cell,
        light_compute: bool,
        still_valid: V,
        choose: C,
        plan: P,
    ) where
        V: FnOnce(&AgentContext<'_>, Cell) -> bool,
        C: FnOnce(&mut AgentContext<'_>) -> Option<Cell>,
        P: FnOnce(&AgentContext<'_>, Cell) -> Vec<Cell>,
    {
        let goal = match self.goal.filter(|&goal| still_valid(&*ctx, goal)) {
            Some(goal) => goal,
            None => {
                self.path.clear();
                self.goal = choose(&mut *ctx);
                match self.goal {
                    Some(goal) => goal,
                    None => return,
                }
            }
        };

        if self.path.is_empty() || !light_compute {
            self.path = plan(&*ctx, goal).into();
            if self.path.is_empty() {
                self.goal = None;
                return;
            }
        }

        if let Some(next) = self.path.pop_front() {
            *position = next;
        }
        if *position == goal {
            self.clear();
        }
    }
}
