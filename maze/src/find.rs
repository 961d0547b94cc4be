use std::collections::{BTreeSet, HashSet};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::frontier::{Frontier, FrontierPolicy, SearchNode};
use crate::grid::{Action, Maze, Point};

#[derive(Debug, PartialEq, Clone, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Actions leading from the start to the goal
    pub actions: Vec<Action>,
    /// Cells visited by those actions, the start is not included
    pub cells: Vec<Point>,
    /// Every cell that was expanded before the goal was reached, in row
    /// major order
    pub explored: BTreeSet<Point>,
    pub explored_count: usize,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Exploring,
    NoSolution,
    Solved(SearchResult),
}

impl SearchState {
    pub fn is_done(&self) -> bool {
        !matches!(self, SearchState::Exploring)
    }
}

/// Uninformed search from the start of a maze to its goal.
///
/// The order in which cells are expanded is decided entirely by the frontier
/// policy: a stack explores depth-first and finds some path, a queue explores
/// breadth-first and finds a shortest one.
#[derive(Debug)]
pub struct PathSearch<'a> {
    maze: &'a Maze,
    frontier: Frontier,
    explored: HashSet<Point>,
    explored_count: usize,
    state: SearchState,
}

impl<'a> PathSearch<'a> {
    pub fn new(maze: &'a Maze, policy: FrontierPolicy) -> Self {
        let mut frontier = Frontier::new(policy);
        frontier.add(SearchNode::root(maze.start()));

        Self {
            maze,
            frontier,
            explored: HashSet::new(),
            explored_count: 0,
            state: SearchState::Exploring,
        }
    }

    /// Run the search until it either reaches the goal or runs out of cells
    pub fn finish(mut self) -> Result<SearchResult, Error> {
        loop {
            match self.step()? {
                SearchState::Exploring => {}
                SearchState::NoSolution => return Err(Error::NoSolution),
                SearchState::Solved(result) => return Ok(result),
            }
        }
    }

    /// Expand a single node. Once the search is done the final state is
    /// returned again without doing any more work.
    pub fn step(&mut self) -> Result<SearchState, Error> {
        if self.state.is_done() {
            return Ok(self.state.clone());
        }

        if self.frontier.is_empty() {
            debug!(
                "frontier exhausted after exploring {} states",
                self.explored_count
            );
            self.state = SearchState::NoSolution;
            return Ok(self.state.clone());
        }

        let node = self.frontier.remove()?;
        self.explored_count += 1;

        if node.state == self.maze.goal() {
            let (actions, cells) = node.backtrack();
            debug!(
                "found goal {} in {} steps, explored {} states",
                node.state,
                actions.len(),
                self.explored_count
            );

            self.state = SearchState::Solved(SearchResult {
                actions,
                cells,
                explored: self.explored.iter().copied().collect(),
                explored_count: self.explored_count,
            });
            return Ok(self.state.clone());
        }

        self.explored.insert(node.state);
        trace!("expanding {}", node.state);

        for (action, state) in self.maze.neighbors(node.state) {
            if !self.frontier.contains_state(state) && !self.explored.contains(&state) {
                self.frontier.add(SearchNode::child(state, node.clone(), action));
            }
        }

        Ok(self.state.clone())
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn explored_count(&self) -> usize {
        self.explored_count
    }

    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    pub fn policy(&self) -> FrontierPolicy {
        self.frontier.policy()
    }
}

impl Maze {
    /// Find a path from the start to the goal using the given frontier policy
    pub fn solve(&self, policy: FrontierPolicy) -> Result<SearchResult, Error> {
        PathSearch::new(self, policy).finish()
    }
}
