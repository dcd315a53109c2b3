//! Minimax over the complete game tree, without recursion.
//!
//! Every reachable position is materialized as a node in an arena. An
//! explicit stack visits each node twice: the first visit expands its
//! children and pushes them on top of it, the second visit (once all of its
//! subtree has been resolved) picks the best child for the player to move.
//!
//! The end of the game is detected solely by the player to move having no
//! legal moves. There is no pruning, no memoization and no cycle detection,
//! so this only terminates on games whose tree is finite.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::debug;

struct SearchNode<S: GameState> {
    state: S,
    // The move to get from the parent to here.
    // Only None at the root.
    m: Option<S::Move>,
    // Arena indices of the children. None until the first visit.
    children: Option<Vec<usize>>,
    // From the perspective of the player to move at the root.
    // Only meaningful once the node is resolved.
    value: Evaluation,
    best_child: Option<usize>,
}

impl<S: GameState> SearchNode<S> {
    fn new(state: S, m: Option<S::Move>) -> Self {
        SearchNode { state, m, children: None, value: DRAW, best_child: None }
    }
}

// Compute the value of an expanded node whose children are all resolved.
fn resolve<S: GameState>(
    nodes: &[SearchNode<S>], index: usize, root_player: Player,
) -> (Evaluation, Option<usize>) {
    let node = &nodes[index];
    let mover = node.state.current_player();
    let children = node.children.as_deref().unwrap_or(&[]);
    if children.is_empty() {
        // Leaf: nothing left to play, so the player to move has lost.
        return (loss_for(mover, root_player), None);
    }

    let maximizing = mover == root_player;
    let mut best = if maximizing { BELOW_LOSS } else { ABOVE_WIN };
    let mut best_child = None;
    for &child in children {
        let value = nodes[child].value;
        // Strict comparisons keep the first extremal child.
        if (maximizing && value > best) || (!maximizing && value < best) {
            best = value;
            best_child = Some(child);
        }
    }
    (best, best_child)
}

/// Options to use for the iterative minimax engine.
#[derive(Clone, Copy, Debug)]
pub struct IterativeOptions {
    node_capacity: usize,
}

impl IterativeOptions {
    pub fn new() -> Self {
        IterativeOptions { node_capacity: 1024 }
    }

    /// How many tree nodes to allocate room for up front.
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }
}

impl Default for IterativeOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub struct IterativeMinimax {
    opts: IterativeOptions,
    prev_value: Evaluation,
    // Size of the tree built for the last move.
    nodes_created: usize,
}

impl IterativeMinimax {
    pub fn new(opts: IterativeOptions) -> IterativeMinimax {
        IterativeMinimax { opts, prev_value: DRAW, nodes_created: 0 }
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Number of positions in the game tree of the last search.
    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    fn search<S: GameState>(&mut self, root: &S) -> Result<S::Move, SearchError> {
        self.nodes_created = 0;
        self.prev_value = DRAW;
        let root_player = root.current_player();
        let mut nodes = Vec::with_capacity(self.opts.node_capacity);
        nodes.push(SearchNode::new(root.clone(), None));
        let mut stack = vec![0];

        while let Some(&index) = stack.last() {
            if nodes[index].children.is_none() {
                // First visit: expand, and leave this node under its children.
                let moves = nodes[index].state.possible_moves();
                let mut children = Vec::with_capacity(moves.len());
                for m in moves {
                    let child = nodes[index].state.make_move(&m)?;
                    children.push(nodes.len());
                    stack.push(nodes.len());
                    nodes.push(SearchNode::new(child, Some(m)));
                }
                nodes[index].children = Some(children);
            } else {
                // Second visit: the whole subtree has been resolved.
                let (value, best_child) = resolve(&nodes, index, root_player);
                let node = &mut nodes[index];
                node.value = value;
                node.best_child = best_child;
                stack.pop();
            }
        }

        self.nodes_created = nodes.len();
        self.prev_value = nodes[0].value;
        debug!("iterative minimax built {} nodes, root value {}", nodes.len(), self.prev_value);
        nodes[0]
            .best_child
            .and_then(|child| nodes[child].m.clone())
            .ok_or(SearchError::NoAvailableMoves)
    }
}

impl Default for IterativeMinimax {
    fn default() -> Self {
        Self::new(IterativeOptions::default())
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>, SearchError> {
        self.search(game.current_state())
    }
}
