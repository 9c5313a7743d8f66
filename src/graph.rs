use std::fmt::Write;

use rustc_hash::FxHashMap;

use crate::{Board, Config, Jump};

/// Directed graph over the configurations discovered by the explorer, each
/// edge labeled with the jump that produced it.
///
/// The graph is a byproduct of the search kept for visualization; path
/// reconstruction goes through the predecessor map instead.
#[derive(Debug, Default)]
pub struct TransitionGraph {
    edges: FxHashMap<Config, Vec<(Config, Jump)>>,
    nr_edges: usize,
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, from: Config, to: Config, jump: Jump) {
        self.edges.entry(from).or_default().push((to, jump));
        self.nr_edges += 1;
    }

    /// Outgoing edges of `from` in insertion order.
    pub fn successors(&self, from: Config) -> &[(Config, Jump)] {
        self.edges.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn nr_edges(&self) -> usize {
        self.nr_edges
    }

    /// Render the graph in Graphviz DOT format, nodes labeled with their peg
    /// pattern and edges with the jump. Output order is fixed so that equal
    /// graphs render to equal text.
    pub fn to_dot(&self, board: &Board) -> String {
        let mut from_nodes: Vec<Config> = self.edges.keys().copied().collect();
        from_nodes.sort_by_key(|config| config.0);

        let mut out = String::from("digraph transitions {\n");
        for from in from_nodes {
            for &(to, jump) in &self.edges[&from] {
                let _ = writeln!(
                    out,
                    "    \"{}\" -> \"{}\" [label=\"{}\"];",
                    from.ascii(board),
                    to.ascii(board),
                    jump
                );
            }
        }
        out.push_str("}\n");
        out
    }
}
