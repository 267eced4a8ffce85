//! Seed-based BFS expansion with degree truncation.

use rustc_hash::{FxHashMap, FxHashSet};

use ppinet_core::NodeId;

use super::types::{ExpandOptions, ExpansionResult, GraphAlgorithm, NodeDegree};
use super::Network;

/// Grow a node set outward from `seeds`, then cut it down to the node budget.
///
/// Each hop adds every neighbour of the current set. Hops stop early once
/// the set is larger than `max_nodes`. If the set is still over budget, it
/// is rebuilt from the seeds plus the non-seed nodes with the highest degree
/// in the induced subgraph (ties by ascending node ID). Seeds are always
/// kept, even when they alone exceed the budget.
///
/// The returned edges are the (score-filtered) input edges with both
/// endpoints in the final set, in input order.
pub fn expand_from_seeds(
    network: &Network,
    seeds: &[NodeId],
    opts: &ExpandOptions,
) -> ExpansionResult {
    let filtered;
    let net = match opts.min_score {
        Some(min) => {
            filtered = network.filter_by_score(min);
            &filtered
        }
        None => network,
    };

    let seed_set: FxHashSet<NodeId> = seeds.iter().copied().collect();
    let mut depths: FxHashMap<NodeId, usize> = seed_set.iter().map(|&s| (s, 0)).collect();
    let mut frontier: Vec<NodeId> = seed_set.iter().copied().collect();
    frontier.sort_unstable();
    let mut hops_completed = 0;

    for hop in 1..=opts.max_hops {
        if depths.len() > opts.max_nodes || frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for &node in &frontier {
            for &neighbor in net.neighbors(node) {
                if !depths.contains_key(&neighbor) {
                    depths.insert(neighbor, hop);
                    next.push(neighbor);
                }
            }
        }
        hops_completed = hop;
        frontier = next;
    }

    let mut expanded: FxHashSet<NodeId> = depths.keys().copied().collect();
    let truncated = expanded.len() > opts.max_nodes;
    if truncated {
        let before = expanded.len();
        expanded = truncate_by_degree(net, &expanded, &seed_set, opts.max_nodes);
        depths.retain(|n, _| expanded.contains(n));
        tracing::info!(
            before,
            after = expanded.len(),
            budget = opts.max_nodes,
            "Truncated expanded set by degree"
        );
    }

    let edges = net.induced_edges(&expanded);
    let mut nodes: Vec<NodeId> = expanded.into_iter().collect();
    nodes.sort_unstable();

    tracing::debug!(
        seeds = seed_set.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        hops_completed,
        "Expanded network from seeds"
    );

    ExpansionResult {
        nodes,
        depths,
        edges,
        hops_completed,
        truncated,
    }
}

fn truncate_by_degree(
    net: &Network,
    expanded: &FxHashSet<NodeId>,
    seeds: &FxHashSet<NodeId>,
    budget: usize,
) -> FxHashSet<NodeId> {
    // Degree over distinct unordered pairs; parallel and reversed rows count once.
    let mut pairs: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
    let mut degree: FxHashMap<NodeId, usize> = FxHashMap::default();
    for e in net.induced_edges(expanded) {
        if e.source == e.target || !pairs.insert((e.source.min(e.target), e.source.max(e.target))) {
            continue;
        }
        *degree.entry(e.source).or_insert(0) += 1;
        *degree.entry(e.target).or_insert(0) += 1;
    }

    let mut candidates: Vec<NodeDegree> = expanded
        .iter()
        .filter(|n| !seeds.contains(n))
        .map(|&node_id| NodeDegree {
            node_id,
            degree: degree.get(&node_id).copied().unwrap_or(0),
        })
        .collect();
    candidates.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.node_id.cmp(&b.node_id)));

    let room = budget.saturating_sub(seeds.len());
    let mut kept = seeds.clone();
    kept.extend(candidates.into_iter().take(room).map(|c| c.node_id));
    kept
}

/// [`expand_from_seeds`] packaged as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Default)]
pub struct SeedExpansion {
    /// Seed node IDs.
    pub seeds: Vec<NodeId>,
    /// Hop limit, node budget and score threshold.
    pub options: ExpandOptions,
}

impl GraphAlgorithm for SeedExpansion {
    type Output = ExpansionResult;

    fn execute(&self, network: &Network) -> Self::Output {
        expand_from_seeds(network, &self.seeds, &self.options)
    }
}
