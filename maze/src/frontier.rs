use std::{collections::VecDeque, fmt::Display, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::{Action, Point};

/// A cell reached during the search, linked back to the node it was
/// discovered from.
///
/// Parents are reference counted: a node that never ends up on the winning
/// path is freed as soon as the frontier lets go of it and no child points
/// at it.
#[derive(Debug)]
pub struct SearchNode {
    pub state: Point,
    pub parent: Option<Rc<SearchNode>>,
    pub action: Option<Action>,
}

impl SearchNode {
    pub fn root(state: Point) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
        })
    }

    pub fn child(state: Point, parent: Rc<SearchNode>, action: Action) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(parent),
            action: Some(action),
        })
    }

    /// Walks the parent links back to the root and returns the actions and
    /// cells in start to goal order. The root itself is not included.
    pub fn backtrack(&self) -> (Vec<Action>, Vec<Point>) {
        let mut actions = Vec::new();
        let mut cells = Vec::new();

        let mut node = self;
        while let (Some(parent), Some(action)) = (node.parent.as_deref(), node.action) {
            actions.push(action);
            cells.push(node.state);
            node = parent;
        }

        actions.reverse();
        cells.reverse();

        (actions, cells)
    }
}

impl Drop for SearchNode {
    // unlink the chain one node at a time, a deep path would otherwise drop
    // recursively
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => break,
            };
        }
    }
}

/// Which node [`Frontier::remove`] hands out next
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierPolicy {
    /// Last in, first out. Gives a depth-first search.
    #[default]
    Stack,
    /// First in, first out. Gives a breadth-first search.
    Queue,
}

impl Display for FrontierPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FrontierPolicy::Stack => "stack",
                FrontierPolicy::Queue => "queue",
            }
        )
    }
}

impl FromStr for FrontierPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" | "dfs" => Ok(FrontierPolicy::Stack),
            "queue" | "bfs" => Ok(FrontierPolicy::Queue),
            _ => Err(anyhow::anyhow!("Invalid frontier policy: {}", s)),
        }
    }
}

/// Nodes that have been discovered but not expanded yet.
///
/// Both policies share the same buffer and only differ in which end
/// [`Frontier::remove`] takes from. The frontier does not reject duplicate
/// states, that is up to the caller.
#[derive(Debug)]
pub struct Frontier {
    policy: FrontierPolicy,
    nodes: VecDeque<Rc<SearchNode>>,
}

impl Frontier {
    pub fn new(policy: FrontierPolicy) -> Self {
        Self {
            policy,
            nodes: VecDeque::new(),
        }
    }

    pub fn stack() -> Self {
        Self::new(FrontierPolicy::Stack)
    }

    pub fn queue() -> Self {
        Self::new(FrontierPolicy::Queue)
    }

    pub fn policy(&self) -> FrontierPolicy {
        self.policy
    }

    pub fn add(&mut self, node: Rc<SearchNode>) {
        self.nodes.push_back(node);
    }

    pub fn contains_state(&self, state: Point) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn remove(&mut self) -> Result<Rc<SearchNode>, Error> {
        match self.policy {
            FrontierPolicy::Stack => self.nodes.pop_back(),
            FrontierPolicy::Queue => self.nodes.pop_front(),
        }
        .ok_or(Error::EmptyFrontier)
    }
}
