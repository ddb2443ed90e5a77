//! The two queries served by a frozen graph: spawn resolution and the
//! all-instances-removed heuristic.

use super::types::{CloneGraph, NodeIdx};
use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

impl CloneGraph {
    /// Resolves what the source-level symbol `name` becomes in the binary.
    ///
    /// Returns `None` if the name is unknown to the dump. Otherwise the map
    /// holds every surviving spawn name reachable from the instances of
    /// `name`, with `true` for names where at least one contributing
    /// instance is an IPA optimization clone. Instances that are both
    /// removed and opt clones are traversed but not recorded.
    #[must_use]
    pub fn resolve_spawns(&self, name: &str) -> Option<BTreeMap<CompactString, bool>> {
        let roots = self.by_name.get(name)?;

        let mut worklist: Vec<NodeIdx> = Vec::new();
        let mut visited: FxHashSet<NodeIdx> = FxHashSet::default();
        for &root in roots {
            self.enqueue(root, &mut worklist, &mut visited);
        }

        let mut spawns: BTreeMap<CompactString, bool> = BTreeMap::new();
        while let Some(node) = worklist.pop() {
            for &e in &self.nodes[node].out_edges {
                // Strongly connected components get batched as a whole on
                // entry; skipping SCC edges here is sufficient to avoid
                // re-entering the cycle.
                if self.edges[e].is_scc_edge {
                    continue;
                }
                self.enqueue(self.edges[e].spawn, &mut worklist, &mut visited);
            }

            // Follow paths across removed IPA optimization clones, but
            // don't record them.
            if self.nodes[node].removed && self.is_opt_clone(node) {
                continue;
            }

            let entry = spawns
                .entry(self.nodes[node].id.name.clone())
                .or_insert(false);
            *entry |= self.is_opt_clone(node);
        }
        Some(spawns)
    }

    /// Enqueues `node`, batching in its whole strongly connected component
    /// where it has one.
    ///
    /// Loops that circle back without ever leaving the component must not
    /// keep the forward walk spinning. The members worth visiting are the
    /// boundary ones (not removed, or with an edge leaving the component)
    /// plus everything that reaches a boundary member within the component,
    /// found by tracing intra-component edges backwards. In a strongly
    /// connected component every member reaches every other, so the
    /// traceback always yields some reverse path from the entry node.
    fn enqueue(
        &self,
        node: NodeIdx,
        worklist: &mut Vec<NodeIdx>,
        visited: &mut FxHashSet<NodeIdx>,
    ) {
        let Some(component) = self.nodes[node].component else {
            if visited.insert(node) {
                worklist.push(node);
            }
            return;
        };

        if visited.insert(node) {
            worklist.push(node);
        }
        let mut scc_worklist: Vec<NodeIdx> = Vec::new();
        for &v in &self.components[component] {
            if v == node {
                continue;
            }
            let boundary = !self.nodes[v].removed
                || self.nodes[v]
                    .out_edges
                    .iter()
                    .any(|&e| !self.edges[e].is_scc_edge);
            if boundary && visited.insert(v) {
                scc_worklist.push(v);
                worklist.push(v);
            }
        }
        while let Some(v) = scc_worklist.pop() {
            for &e in &self.nodes[v].in_edges {
                if !self.edges[e].is_scc_edge {
                    continue;
                }
                let original = self.edges[e].original;
                if visited.insert(original) {
                    scc_worklist.push(original);
                    worklist.push(original);
                }
            }
        }
    }

    /// True iff `name` is known and every one of its compiled instances was
    /// removed.
    ///
    /// A heuristic for externalizability decisions: if there is at least
    /// some entry for the name and all have been removed, chances are the
    /// function was never emitted to the object.
    #[must_use]
    pub fn all_removed(&self, name: &str) -> bool {
        match self.by_name.get(name) {
            Some(instances) => instances.iter().all(|&n| self.nodes[n].removed),
            None => false,
        }
    }
}
