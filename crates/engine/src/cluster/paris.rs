//! Paris hierarchical clustering.
//!
//! Agglomerative clustering driven by the node-pair sampling distance
//! `d(a, b) = p(a) p(b) / p(a, b)`, where `p(a, b)` is the share of edge
//! weight between clusters `a` and `b` and `p(a)` the share of edge weight
//! incident to `a`. Merges are found with a nearest-neighbour chain; the
//! distance is reducible, so the chain yields the same tree as a greedy
//! search. Connected components are finished one by one and then joined at
//! infinite distance.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use ppinet_core::{PpiError, PpiResult};

use super::dendrogram::{Dendrogram, Merge};
use super::{HierarchicalClustering, WeightedAdjacency};

/// Paris clustering.
#[derive(Debug, Clone, Copy)]
pub struct Paris {
    /// Sort merges by distance after clustering.
    pub reorder: bool,
}

impl Default for Paris {
    fn default() -> Self {
        Self { reorder: true }
    }
}

impl HierarchicalClustering for Paris {
    fn name(&self) -> &str {
        "Paris"
    }

    fn fit(&self, adjacency: &WeightedAdjacency) -> PpiResult<Dendrogram> {
        let n = adjacency.node_count();
        if n == 0 {
            return Err(PpiError::invalid_input("cannot cluster an empty graph"));
        }
        let total = adjacency.total_weight();
        if total <= 0.0 {
            return Err(PpiError::invalid_input("graph has no edge weight"));
        }

        let mut graph = AggregateGraph::new(adjacency, total);
        let mut merges = Vec::with_capacity(n - 1);
        let mut components: Vec<(usize, usize)> = Vec::new();

        while let Some(&start) = graph.sizes.keys().next() {
            let mut chain = vec![start];
            while let Some(node) = chain.pop() {
                match graph.nearest_neighbor(node) {
                    Some((nearest, similarity)) => match chain.pop() {
                        Some(previous) if previous == nearest => {
                            let size = graph.sizes[&node] + graph.sizes[&nearest];
                            merges.push(Merge {
                                left: node,
                                right: nearest,
                                distance: 1.0 / similarity,
                                size,
                            });
                            graph.merge(node, nearest);
                        }
                        Some(previous) => {
                            chain.push(previous);
                            chain.push(node);
                            chain.push(nearest);
                        }
                        None => {
                            chain.push(node);
                            chain.push(nearest);
                        }
                    },
                    None => {
                        let size = graph.sizes.remove(&node).unwrap_or(0);
                        components.push((node, size));
                    }
                }
            }
        }

        if let Some((mut node, mut size)) = components.pop() {
            for (next, next_size) in components.iter().copied() {
                size += next_size;
                merges.push(Merge {
                    left: node,
                    right: next,
                    distance: f64::INFINITY,
                    size,
                });
                node = graph.next_cluster;
                graph.next_cluster += 1;
            }
            tracing::debug!(components = components.len() + 1, "Joined connected components");
        }

        let dendrogram = Dendrogram::new(n, merges)?;
        Ok(if self.reorder {
            dendrogram.reorder()
        } else {
            dendrogram
        })
    }
}

/// Working state: clusters, their normalised weights and inter-cluster weights.
struct AggregateGraph {
    neighbors: Vec<FxHashMap<usize, f64>>,
    weights: Vec<f64>,
    /// Live clusters and their sizes; ascending ID is also creation order.
    sizes: BTreeMap<usize, usize>,
    next_cluster: usize,
}

impl AggregateGraph {
    fn new(adjacency: &WeightedAdjacency, total: f64) -> Self {
        let n = adjacency.node_count();
        let capacity = 2 * n - 1;
        let mut neighbors = Vec::with_capacity(capacity);
        let mut weights = Vec::with_capacity(capacity);
        for i in 0..n {
            let row = adjacency.row(i);
            weights.push(row.values().sum::<f64>() / total);
            neighbors.push(
                row.iter()
                    .filter(|(&j, _)| j != i)
                    .map(|(&j, &w)| (j, w / total))
                    .collect(),
            );
        }
        Self {
            neighbors,
            weights,
            sizes: (0..n).map(|i| (i, 1)).collect(),
            next_cluster: n,
        }
    }

    fn similarity(&self, a: usize, b: usize, p_ab: f64) -> f64 {
        p_ab / self.weights[a] / self.weights[b]
    }

    /// Most similar neighbour, ties broken by the smaller cluster ID.
    fn nearest_neighbor(&self, node: usize) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (&other, &p) in &self.neighbors[node] {
            let sim = self.similarity(node, other, p);
            best = match best {
                Some((b, s)) if sim < s || (sim == s && b < other) => Some((b, s)),
                _ => Some((other, sim)),
            };
        }
        best
    }

    fn merge(&mut self, a: usize, b: usize) {
        let new = self.next_cluster;
        self.next_cluster += 1;

        let mut merged: FxHashMap<usize, f64> = FxHashMap::default();
        for old in [a, b] {
            let links = std::mem::take(&mut self.neighbors[old]);
            for (other, w) in links {
                if other == a || other == b {
                    continue;
                }
                *merged.entry(other).or_insert(0.0) += w;
                let back = &mut self.neighbors[other];
                back.remove(&old);
                *back.entry(new).or_insert(0.0) += w;
            }
        }

        self.neighbors.push(merged);
        self.weights.push(self.weights[a] + self.weights[b]);
        let size = self.sizes.remove(&a).unwrap_or(0) + self.sizes.remove(&b).unwrap_or(0);
        self.sizes.insert(new, size);
    }
}
