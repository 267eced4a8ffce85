//! Linkage rows and their conversion to a nested merge tree.

use serde::{Deserialize, Serialize};

use ppinet_core::{PpiError, PpiResult};

/// One agglomeration step. Leaves are `0..n`; merge `i` creates `n + i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// First merged cluster.
    pub left: usize,
    /// Second merged cluster.
    pub right: usize,
    /// Merge distance (may be infinite between components).
    pub distance: f64,
    /// Leaves under the new cluster.
    pub size: usize,
}

/// A full binary merge tree over `n` leaves stored as `n - 1` linkage rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    n_leaves: usize,
    merges: Vec<Merge>,
}

impl Dendrogram {
    /// Wrap linkage rows, checking that there is one merge per internal node.
    pub fn new(n_leaves: usize, merges: Vec<Merge>) -> PpiResult<Self> {
        if n_leaves == 0 {
            return Err(PpiError::invalid_input("dendrogram needs at least one leaf"));
        }
        if merges.len() != n_leaves - 1 {
            return Err(PpiError::invalid_input(format!(
                "dendrogram over {} leaves needs {} merges, got {}",
                n_leaves,
                n_leaves - 1,
                merges.len()
            )));
        }
        Ok(Self { n_leaves, merges })
    }

    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    /// Linkage rows in order.
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Sort merges by increasing distance (ties by merge order) and relabel
    /// the clusters they create.
    ///
    /// The sort key of each merge is raised to the key of its children, so a
    /// cluster is always formed before any merge that uses it.
    pub fn reorder(self) -> Self {
        let n = self.n_leaves;
        let m = self.merges.len();

        let mut key = vec![f64::NEG_INFINITY; n + m];
        for (i, row) in self.merges.iter().enumerate() {
            key[n + i] = row.distance.max(key[row.left]).max(key[row.right]);
        }

        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by(|&a, &b| key[n + a].total_cmp(&key[n + b]).then(a.cmp(&b)));

        let mut relabel: Vec<usize> = (0..n + m).collect();
        for (t, &i) in order.iter().enumerate() {
            relabel[n + i] = n + t;
        }
        let merges = order
            .iter()
            .map(|&i| {
                let row = self.merges[i];
                Merge {
                    left: relabel[row.left],
                    right: relabel[row.right],
                    ..row
                }
            })
            .collect();
        Self { n_leaves: n, merges }
    }

    /// Build the nested tree, naming leaves from `names` (indexed by leaf ID).
    pub fn to_hierarchy(&self, names: &[String]) -> PpiResult<HierarchyNode> {
        let n = self.n_leaves;
        if names.len() != n {
            return Err(PpiError::invalid_input(format!(
                "{} leaf names for {} leaves",
                names.len(),
                n
            )));
        }

        let mut slots: Vec<Option<HierarchyNode>> = names
            .iter()
            .enumerate()
            .map(|(id, name)| Some(HierarchyNode::leaf(id, name.clone())))
            .collect();
        slots.resize_with(n + self.merges.len(), || None);

        for (i, row) in self.merges.iter().enumerate() {
            let id = n + i;
            let mut take = |child: usize| {
                slots
                    .get_mut(child)
                    .filter(|_| child < id)
                    .and_then(Option::take)
                    .ok_or_else(|| {
                        PpiError::invalid_input(format!(
                            "linkage row {} uses cluster {} before it is formed",
                            i, child
                        ))
                    })
            };
            let left = take(row.left)?;
            let right = take(row.right)?;
            slots[id] = Some(HierarchyNode::cluster(id, row.distance, row.size, left, right));
        }

        slots
            .pop()
            .flatten()
            .ok_or_else(|| PpiError::invalid_input("dendrogram has no root"))
    }
}

/// Node kind tag written as `"leaf"` or `"cluster"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An input node.
    Leaf,
    /// A merge.
    Cluster,
}

/// A leaf of the merge tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    /// Leaf ID (`0..n`).
    pub id: usize,
    /// Original node name.
    pub name: String,
    /// Always [`NodeKind::Leaf`].
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Always 1.
    pub count: usize,
}

/// An internal node of the merge tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterNode {
    /// Cluster ID (`n + merge index`).
    pub id: usize,
    /// Always [`NodeKind::Cluster`].
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Merge distance; `None` (JSON `null`) when infinite.
    pub distance: Option<f64>,
    /// Leaves under this cluster.
    pub count: usize,
    /// Left and right subtrees.
    pub children: Box<[HierarchyNode; 2]>,
}

/// A node of the serialised merge tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyNode {
    /// See [`LeafNode`].
    Leaf(LeafNode),
    /// See [`ClusterNode`].
    Cluster(ClusterNode),
}

impl HierarchyNode {
    fn leaf(id: usize, name: String) -> Self {
        HierarchyNode::Leaf(LeafNode {
            id,
            name,
            kind: NodeKind::Leaf,
            count: 1,
        })
    }

    fn cluster(id: usize, distance: f64, count: usize, left: Self, right: Self) -> Self {
        HierarchyNode::Cluster(ClusterNode {
            id,
            kind: NodeKind::Cluster,
            distance: distance.is_finite().then_some(distance),
            count,
            children: Box::new([left, right]),
        })
    }

    /// Node ID.
    pub fn id(&self) -> usize {
        match self {
            HierarchyNode::Leaf(l) => l.id,
            HierarchyNode::Cluster(c) => c.id,
        }
    }

    /// Leaves under this node.
    pub fn count(&self) -> usize {
        match self {
            HierarchyNode::Leaf(l) => l.count,
            HierarchyNode::Cluster(c) => c.count,
        }
    }

    /// Leaf names in left-to-right order.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                HierarchyNode::Leaf(l) => out.push(l.name.as_str()),
                HierarchyNode::Cluster(c) => {
                    stack.push(&c.children[1]);
                    stack.push(&c.children[0]);
                }
            }
        }
        out
    }
}
