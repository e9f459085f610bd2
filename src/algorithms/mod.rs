//! Stateless graph algorithms.
//!
//! Every function takes the graph it works on as an argument and keeps no
//! state of its own. Traversals write their results into the search state of
//! that graph, so they need exclusive access to it.

pub mod shortest_path;
pub mod traversal;

pub use self::shortest_path::{ShortestPaths, dijkstra, path_weight, relax, shortest_path};
pub use self::traversal::{breadth_first_search, is_strongly_connected, reachable_from, reverse};

#[cfg(test)]
pub(crate) mod tests {
    use rand::Rng;

    use crate::graph::{DirectedEdge, EdgeWeightedDigraph};

    /// The four-town network: 0->1, 0->2, 1->3, 2->3.
    pub(crate) fn sample_graph() -> EdgeWeightedDigraph {
        let mut graph = EdgeWeightedDigraph::new(4);
        graph.add_edge(DirectedEdge::new(0, 1, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(0, 2, 1.0)).unwrap();
        graph.add_edge(DirectedEdge::new(1, 3, 3.0)).unwrap();
        graph.add_edge(DirectedEdge::new(2, 3, 2.0)).unwrap();
        graph
    }

    /// A graph with integer weights in `0..10`, parallel edges and self-loops
    /// included.
    pub(crate) fn random_graph(
        rng: &mut impl Rng,
        max_vertices: usize,
        max_edges: usize,
    ) -> EdgeWeightedDigraph {
        let vertex_count = rng.gen_range(1..=max_vertices);
        let mut graph = EdgeWeightedDigraph::new(vertex_count);
        for _ in 0..rng.gen_range(0..=max_edges) {
            let from = rng.gen_range(0..vertex_count);
            let to = rng.gen_range(0..vertex_count);
            let weight = rng.gen_range(0..10) as f64;
            graph.add_edge(DirectedEdge::new(from, to, weight)).unwrap();
        }
        graph
    }

    /// `reach[u][v]` tells whether `v` can be reached from `u`.
    pub(crate) fn closure(graph: &EdgeWeightedDigraph) -> Vec<Vec<bool>> {
        let n = graph.vertex_count();
        let mut reach = vec![vec![false; n]; n];
        for (vertex, row) in reach.iter_mut().enumerate() {
            row[vertex] = true;
        }
        for edge in graph.edges() {
            reach[edge.from()][edge.to()] = true;
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if reach[i][k] && reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
        reach
    }
}
