use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use tracing::debug;

use crate::topo::{Node, TopoMap};

/// Directed graph of legal uphill steps over a [`TopoMap`].
///
/// An edge `a -> b` exists when `b` is orthogonally adjacent to `a` and
/// exactly one unit higher.
#[derive(Debug, Clone)]
pub struct TrailGraph {
    graph: DiGraph<Node, ()>,
    trailheads: Vec<NodeIndex>,
}

impl TrailGraph {
    pub fn new(map: &TopoMap) -> Self {
        let mut graph = DiGraph::<Node, ()>::new();
        let mut indices = HashMap::new();

        // First pass: add all passable cells
        for node in map.nodes() {
            let idx = graph.add_node(node);
            indices.insert((node.x, node.y), idx);
        }

        // Second pass: add uphill edges
        let deltas = [(0, 1), (1, 0), (0, -1), (-1, 0)]; // Down, Right, Up, Left

        for (&(x, y), &current) in &indices {
            let current_node = graph[current];

            for (dx, dy) in deltas {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };

                let Some(&neighbor) = indices.get(&(nx, ny)) else {
                    continue;
                };

                if graph[neighbor].height == current_node.height + 1 {
                    graph.add_edge(current, neighbor, ());
                }
            }
        }

        let trailheads: Vec<_> = graph
            .node_indices()
            .filter(|&idx| graph[idx].is_trailhead())
            .collect();

        debug!(
            "Created graph with {} nodes, {} edges and {} trailheads",
            graph.node_count(),
            graph.edge_count(),
            trailheads.len()
        );

        Self { graph, trailheads }
    }

    pub fn graph(&self) -> &DiGraph<Node, ()> {
        &self.graph
    }

    pub fn trailheads(&self) -> &[NodeIndex] {
        &self.trailheads
    }

    /// Number of distinct peaks reachable from `trailhead`.
    pub fn score(&self, trailhead: NodeIndex) -> usize {
        let mut bfs = Bfs::new(&self.graph, trailhead);
        let mut peaks = 0;

        while let Some(node) = bfs.next(&self.graph) {
            if self.graph[node].is_peak() {
                peaks += 1;
            }
        }

        peaks
    }

    /// Number of distinct trails from `trailhead` to any peak.
    ///
    /// Depth-first with an explicit stack. Each frame owns the set of nodes
    /// on its own path, so backtracking never has to undo shared state.
    pub fn rating(&self, trailhead: NodeIndex) -> usize {
        let mut stack = vec![(trailhead, HashSet::from([trailhead]))];
        let mut trails = 0;

        while let Some((current, path)) = stack.pop() {
            if self.graph[current].is_peak() {
                trails += 1;
                continue;
            }

            for next in self.graph.neighbors(current) {
                if path.contains(&next) {
                    continue;
                }

                let mut branch = path.clone();
                branch.insert(next);
                stack.push((next, branch));
            }
        }

        trails
    }

    pub fn total_score(&self) -> usize {
        self.trailheads.iter().map(|&head| self.score(head)).sum()
    }

    pub fn total_rating(&self) -> usize {
        self.trailheads.iter().map(|&head| self.rating(head)).sum()
    }
}
