use super::types::{CloneGraph, EdgeKind};
use serde::Serialize;

/// Summary counts over a frozen graph, one pass over nodes and edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Distinct `(ipa_id, name)` nodes.
    pub nodes: usize,
    /// Distinct `(original, spawn, kind)` edges.
    pub edges: usize,
    /// Plain inlining edges.
    pub inlined: usize,
    /// Scalar-replacement clone edges.
    pub isra: usize,
    /// Constant-propagation clone edges.
    pub constprop: usize,
    /// Function-splitting clone edges.
    pub part: usize,
    /// Inlining edges reclassified as duplications by the rewrite pass.
    pub duplicate_opt_clones: usize,
    /// Nodes flagged by a removal record.
    pub removed_nodes: usize,
    /// Nodes with at least one non-inlining incoming edge.
    pub opt_clone_nodes: usize,
    /// Multi-node strongly connected components.
    pub components: usize,
    /// Size of the largest component, 0 when the graph is acyclic.
    pub largest_component: usize,
}

impl CloneGraph {
    /// Computes summary statistics for the dump.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            inlined: 0,
            isra: 0,
            constprop: 0,
            part: 0,
            duplicate_opt_clones: 0,
            removed_nodes: self.nodes.iter().filter(|n| n.removed).count(),
            opt_clone_nodes: (0..self.nodes.len())
                .filter(|&n| self.is_opt_clone(n))
                .count(),
            components: self.components.len(),
            largest_component: self.components.iter().map(Vec::len).max().unwrap_or(0),
        };
        for edge in &self.edges {
            match edge.kind {
                EdgeKind::Inlined => stats.inlined += 1,
                EdgeKind::Isra => stats.isra += 1,
                EdgeKind::ConstProp => stats.constprop += 1,
                EdgeKind::Part => stats.part += 1,
                EdgeKind::DuplicateOptClone => stats.duplicate_opt_clones += 1,
            }
        }
        stats
    }
}
