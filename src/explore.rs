use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::TransitionGraph;
use crate::{Board, Config};

/// Everything one breadth-first sweep discovers about the configurations
/// reachable from a starting configuration.
///
/// The predecessor map holds, for every reached configuration except the
/// start, the configuration it was first discovered from. First discovery in
/// FIFO order makes each predecessor chain a minimal-move path, and the map
/// as a whole a tree rooted at the start.
pub struct Exploration {
    start: Config,
    visited: FxHashSet<Config>,
    prev: FxHashMap<Config, Config>,
    graph: TransitionGraph,
}

/// Breadth-first search over all configurations reachable from `start`.
///
/// The state space is finite and every jump removes a peg, so the sweep
/// always terminates once the queue drains.
pub fn explore(board: &Board, start: Config) -> Exploration {
    let mut visited = FxHashSet::default();
    let mut prev = FxHashMap::default();
    let mut graph = TransitionGraph::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(state) = queue.pop_front() {
        for jump in board.legal_jumps(state) {
            let next = state.apply_jump(jump);
            if visited.insert(next) {
                prev.insert(next, state);
                graph.add_edge(state, next, jump);
                queue.push_back(next);
            }
        }
    }

    log::debug!(
        "explored {} configurations from {:?}, recorded {} transitions",
        visited.len(),
        start,
        graph.nr_edges()
    );

    Exploration {
        start,
        visited,
        prev,
        graph,
    }
}

impl Exploration {
    pub fn start(&self) -> Config {
        self.start
    }

    /// Number of distinct configurations reached, the start included.
    pub fn nr_reached(&self) -> usize {
        self.visited.len()
    }

    pub fn is_reached(&self, config: Config) -> bool {
        self.visited.contains(&config)
    }

    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// BFS-discovery parent of `config`; `None` for the start and for
    /// configurations never reached.
    pub fn predecessor(&self, config: Config) -> Option<Config> {
        self.prev.get(&config).copied()
    }

    /// Single-peg configurations reached from the start, ordered by the hole
    /// index of the surviving peg.
    pub fn reached_single_peg(&self, board: &Board) -> Vec<Config> {
        (0..board.nr_holes())
            .filter_map(|hole| Config::single_peg(board, hole))
            .filter(|&config| self.is_reached(config))
            .collect()
    }

    /// Walk predecessor links from `target` back to the start and return the
    /// configurations in forward order, start and target inclusive.
    ///
    /// `None` when `target` was never reached.
    pub fn path_to(&self, target: Config) -> Option<Vec<Config>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(&predecessor) = self.prev.get(&current) {
            path.push(predecessor);
            current = predecessor;
        }

        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn side_3_exploration() -> (Board, Config, Exploration) {
        let board = Board::new(3).unwrap();
        let start = Config::from_ascii(
            &board,
            "  .
              # #
             # # #",
        );
        let exploration = explore(&board, start);
        (board, start, exploration)
    }

    #[test]
    fn test_side_3_reaches_exactly_the_hand_computed_configurations() {
        let (board, start, exploration) = side_3_exploration();

        let expected = [
            "  .
              # #
             # # #",
            "  #
              # .
             # # .",
            "  #
              . #
             . # #",
            "  #
              # .
             . . #",
            "  #
              . #
             # . .",
            "  .
              . .
             # . #",
        ];
        let expected: FxHashSet<Config> = expected
            .iter()
            .map(|s| Config::from_ascii(&board, s))
            .collect();

        assert_eq!(exploration.nr_reached(), 6);
        assert_eq!(exploration.visited, expected);
        assert!(!exploration.prev.contains_key(&start));
    }

    #[test]
    fn test_side_3_apex_has_no_single_peg_solution() {
        let (board, _, exploration) = side_3_exploration();
        assert!(exploration.reached_single_peg(&board).is_empty());
    }

    #[test]
    fn test_side_3_shortest_path_to_the_two_peg_terminal() {
        let (board, start, exploration) = side_3_exploration();

        let terminal = Config::from_ascii(
            &board,
            "  .
              . .
             # . #",
        );
        assert!(board.legal_jumps(terminal).is_empty());

        let expected: Vec<Config> = [
            "  .
              # #
             # # #",
            "  #
              # .
             # # .",
            "  #
              # .
             . . #",
            "  .
              . .
             # . #",
        ]
        .iter()
        .map(|s| Config::from_ascii(&board, s))
        .collect();

        let path = exploration.path_to(terminal).unwrap();
        assert_eq!(path[0], start);
        assert_eq!(path, expected);
    }

    #[test]
    fn test_transition_graph_is_a_tree_over_the_reached_configurations() {
        let (_, _, exploration) = side_3_exploration();
        assert_eq!(exploration.graph().nr_edges(), exploration.nr_reached() - 1);
    }

    #[test]
    fn test_first_discovered_children_keep_jump_order() {
        let (board, start, exploration) = side_3_exploration();

        let children: Vec<Config> = exploration
            .graph()
            .successors(start)
            .iter()
            .map(|&(to, _)| to)
            .collect();

        // dst 0 tries down-left (from hole 5) before down-right (from hole 3)
        let expected: Vec<Config> = [
            "  #
              # .
             # # .",
            "  #
              . #
             . # #",
        ]
        .iter()
        .map(|s| Config::from_ascii(&board, s))
        .collect();

        assert_eq!(children, expected);
        assert_eq!(exploration.predecessor(children[0]), Some(start));
        assert_eq!(exploration.predecessor(start), None);
    }

    #[test]
    fn test_path_to_an_unreached_configuration_is_none() {
        let (board, _, exploration) = side_3_exploration();

        let unreached = Config::single_peg(&board, 0).unwrap();
        assert_eq!(exploration.path_to(unreached), None);
    }

    #[test]
    fn test_predecessor_chains_are_acyclic_and_bfs_minimal() {
        let board = Board::new(4).unwrap();
        let start = Config::with_missing(&board, 0).unwrap();
        let exploration = explore(&board, start);

        for &config in &exploration.visited {
            let path = exploration.path_to(config).unwrap();
            // every jump removes exactly one peg
            assert_eq!(path.len() as u32, start.count() - config.count() + 1);
        }
    }

    #[test]
    fn test_exploration_is_deterministic() {
        let board = Board::new(4).unwrap();
        let start = Config::with_missing(&board, 2).unwrap();

        let first = explore(&board, start);
        let second = explore(&board, start);

        assert_eq!(first.visited, second.visited);
        assert_eq!(first.prev, second.prev);
    }

    #[test]
    fn test_side_5_apex_reaches_a_single_peg_end() {
        let board = Board::new(5).unwrap();
        let start = Config::with_missing(&board, 0).unwrap();
        let exploration = explore(&board, start);

        let ends = exploration.reached_single_peg(&board);
        assert!(!ends.is_empty());

        let path = exploration.path_to(ends[0]).unwrap();
        assert_eq!(path.len(), 14);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), ends[0]);

        for pair in path.windows(2) {
            let followed = board
                .legal_jumps(pair[0])
                .into_iter()
                .any(|jump| pair[0].apply_jump(jump) == pair[1]);
            assert!(
                followed,
                "consecutive configurations must differ by one legal jump"
            );
        }
    }
}
