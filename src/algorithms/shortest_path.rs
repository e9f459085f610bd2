//! Dijkstra's algorithm and path extraction.

use log::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, VertexId};
use crate::indexed_queue::IndexMinPQ;

/// The result of a single-source Dijkstra run.
///
/// Paths are stored the way they are reconstructed: starting with the edge
/// into the target and walking back toward the source.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    dist: Vec<f64>,
    paths: Vec<Option<Vec<DirectedEdge>>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered, reachable or not.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Shortest distance from the source, `None` when unreachable.
    pub fn distance_to(&self, target: VertexId) -> Option<f64> {
        self.dist.get(target).copied().filter(|d| d.is_finite())
    }

    pub fn has_path_to(&self, target: VertexId) -> bool {
        self.distance_to(target).is_some()
    }

    /// The path into `target` in reconstruction order (target end first).
    pub fn path_to(&self, target: VertexId) -> Option<&[DirectedEdge]> {
        self.paths.get(target)?.as_deref()
    }

    /// The path into `target` ordered from the source to `target`.
    pub fn route_to(&self, target: VertexId) -> Option<Vec<DirectedEdge>> {
        self.path_to(target)
            .map(|path| path.iter().rev().copied().collect())
    }

    /// `(vertex, path)` pairs for every vertex, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<&[DirectedEdge]>)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(vertex, path)| (vertex, path.as_deref()))
    }
}

/// Total weight of a sequence of edges.
pub fn path_weight(path: &[DirectedEdge]) -> f64 {
    path.iter().fold(0.0, |total, edge| total + edge.weight())
}

/// Relaxes `edge`: if going through it improves the distance of its head,
/// records the new distance and parent edge and updates `pq` accordingly.
pub fn relax(
    graph: &mut EdgeWeightedDigraph,
    edge: DirectedEdge,
    pq: &mut IndexMinPQ<f64>,
) -> Result<()> {
    let (from, to) = (edge.from(), edge.to());
    let candidate = graph.dist(from)? + edge.weight();

    if graph.dist(to)? > candidate {
        graph.set_dist(to, candidate)?;
        graph.set_edge_to(edge)?;
        trace!("relaxed {edge}, dist[{to}] = {candidate}");

        if pq.contains(to) {
            pq.decrease_key(to, candidate)?;
        } else {
            pq.insert(to, candidate)?;
        }
    }
    Ok(())
}

/// Computes shortest paths from `source` to every vertex of `graph`.
///
/// Edge weights must be nonnegative; this is not checked here.
pub fn dijkstra(graph: &mut EdgeWeightedDigraph, source: VertexId) -> Result<ShortestPaths> {
    graph.reset();
    graph.set_dist(source, 0.0)?;

    let mut pq = IndexMinPQ::new(graph.vertex_count());
    pq.insert(source, 0.0)?;

    while !pq.is_empty() {
        let vertex = pq.del_min()?;
        for index in 0..graph.adjacent(vertex)?.len() {
            let edge = graph.adjacent(vertex)?[index];
            relax(graph, edge, &mut pq)?;
        }
    }

    let vertex_count = graph.vertex_count();
    let mut dist = Vec::with_capacity(vertex_count);
    let mut paths = Vec::with_capacity(vertex_count);
    for vertex in 0..vertex_count {
        let distance = graph.dist(vertex)?;
        dist.push(distance);
        if distance.is_finite() {
            let mut path = Vec::new();
            let mut next = graph.edge_to(vertex)?;
            while let Some(edge) = next {
                path.push(edge);
                next = graph.edge_to(edge.from())?;
            }
            paths.push(Some(path));
        } else {
            paths.push(None);
        }
    }

    debug!(
        "dijkstra from {source}: {} of {vertex_count} vertices reachable",
        paths.iter().filter(|path| path.is_some()).count()
    );
    Ok(ShortestPaths { source, dist, paths })
}

/// The edges of a shortest path from `start` to `end`, in travel order.
///
/// Fails with [`GraphError::NoPathExists`] when `end` cannot be reached.
/// A trip from a vertex to itself is the empty path.
pub fn shortest_path(
    graph: &mut EdgeWeightedDigraph,
    start: VertexId,
    end: VertexId,
) -> Result<Vec<DirectedEdge>> {
    graph.check_vertex(end)?;
    dijkstra(graph, start)?
        .route_to(end)
        .ok_or(GraphError::NoPathExists { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::tests::{random_graph, sample_graph};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn connected_sample() -> EdgeWeightedDigraph {
        let mut graph = sample_graph();
        graph.add_edge(DirectedEdge::new(3, 0, 3.0)).unwrap();
        graph
    }

    /// Cheapest simple path weight from `start` to `end`, by enumeration.
    fn brute_force(graph: &EdgeWeightedDigraph, start: VertexId, end: VertexId) -> Option<f64> {
        fn walk(
            graph: &EdgeWeightedDigraph,
            vertex: VertexId,
            end: VertexId,
            so_far: f64,
            on_path: &mut Vec<bool>,
            best: &mut Option<f64>,
        ) {
            if vertex == end {
                if best.is_none_or(|b| so_far < b) {
                    *best = Some(so_far);
                }
                return;
            }
            on_path[vertex] = true;
            for edge in graph.adjacent(vertex).unwrap() {
                if !on_path[edge.to()] {
                    walk(graph, edge.to(), end, so_far + edge.weight(), on_path, best);
                }
            }
            on_path[vertex] = false;
        }

        let mut best = None;
        let mut on_path = vec![false; graph.vertex_count()];
        walk(graph, start, end, 0.0, &mut on_path, &mut best);
        best
    }

    #[test]
    fn shortest_path_prefers_lighter_edges() {
        let mut graph = connected_sample();
        let path = shortest_path(&mut graph, 0, 3).unwrap();
        assert_eq!(
            path,
            vec![DirectedEdge::new(0, 2, 1.0), DirectedEdge::new(2, 3, 2.0)]
        );
        assert_eq!(path_weight(&path), 3.0);
    }

    #[test]
    fn shortest_path_wraps_around_back_edge() {
        let mut graph = connected_sample();
        let path = shortest_path(&mut graph, 3, 2).unwrap();
        assert_eq!(
            path,
            vec![DirectedEdge::new(3, 0, 3.0), DirectedEdge::new(0, 2, 1.0)]
        );
    }

    #[test]
    fn unreachable_target_is_an_error() {
        let mut graph = sample_graph();
        assert_eq!(
            shortest_path(&mut graph, 3, 0),
            Err(GraphError::NoPathExists { start: 3, end: 0 })
        );
    }

    #[test]
    fn out_of_range_endpoints() {
        let mut graph = sample_graph();
        assert_eq!(
            shortest_path(&mut graph, 0, 9),
            Err(GraphError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(
            shortest_path(&mut graph, 9, 0),
            Err(GraphError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn trip_to_self_is_empty() {
        let mut graph = connected_sample();
        assert_eq!(shortest_path(&mut graph, 2, 2).unwrap(), vec![]);
    }

    #[test]
    fn dijkstra_maps_every_vertex() {
        let mut graph = sample_graph();
        let paths = dijkstra(&mut graph, 1).unwrap();

        assert_eq!(paths.source(), 1);
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.path_to(1), Some(&[][..]));
        assert_eq!(paths.path_to(3), Some(&[DirectedEdge::new(1, 3, 3.0)][..]));
        assert_eq!(paths.path_to(0), None);
        assert_eq!(paths.path_to(2), None);
        assert_eq!(paths.distance_to(3), Some(3.0));
        assert!(!paths.has_path_to(0));
        assert_eq!(paths.iter().filter(|(_, p)| p.is_some()).count(), 2);
    }

    #[test]
    fn paths_are_stored_target_first() {
        let mut graph = connected_sample();
        let paths = dijkstra(&mut graph, 0).unwrap();
        assert_eq!(
            paths.path_to(3),
            Some(&[DirectedEdge::new(2, 3, 2.0), DirectedEdge::new(0, 2, 1.0)][..])
        );
    }

    #[test]
    fn relax_inserts_then_decreases() {
        let mut graph = sample_graph();
        graph.reset();
        graph.set_dist(0, 0.0).unwrap();
        let mut pq = IndexMinPQ::new(4);

        relax(&mut graph, DirectedEdge::new(0, 2, 1.0), &mut pq).unwrap();
        assert!(pq.contains(2));
        assert_eq!(pq.key_of(2), Some(1.0));

        relax(&mut graph, DirectedEdge::new(0, 2, 0.5), &mut pq).unwrap();
        assert_eq!(graph.dist(2).unwrap(), 0.5);
        assert_eq!(pq.key_of(2), Some(0.5));
        assert_eq!(graph.edge_to(2).unwrap(), Some(DirectedEdge::new(0, 2, 0.5)));

        // Not an improvement.
        relax(&mut graph, DirectedEdge::new(0, 2, 0.5), &mut pq).unwrap();
        assert_eq!(pq.len(), 1);
    }

    #[test]
    fn dijkstra_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..40 {
            let mut graph = random_graph(&mut rng, 6, 14);
            for source in 0..graph.vertex_count() {
                let paths = dijkstra(&mut graph, source).unwrap();
                for target in 0..graph.vertex_count() {
                    let expected = brute_force(&graph, source, target);
                    assert_eq!(paths.distance_to(target), expected);

                    if let Some(route) = paths.route_to(target) {
                        assert_eq!(Some(path_weight(&route)), expected);
                        let mut at = source;
                        for edge in &route {
                            assert_eq!(edge.from(), at);
                            at = edge.to();
                        }
                        assert_eq!(at, target);
                    }
                }
            }
        }
    }
}
