//! Reclassification of disguised optimizer duplications.
//!
//! IPA opt clones can emerge out of thin air: the compiler duplicates an
//! existing clone under a fresh `ipa_id` and records the operation as mere
//! inlining. The duplicate carries the very same name as its source. This
//! pass rewrites such edges to `DuplicateOptClone` so the duplicate is
//! recognized as an optimization artifact rather than an inlining product.

use super::types::{CloneGraph, EdgeKind, NodeIdx};
use smallvec::SmallVec;

impl CloneGraph {
    /// Worklist fixpoint: starting from every node that already is an opt
    /// clone, turn its same-name `Inlined` out-edges into
    /// `DuplicateOptClone`, propagating to spawns that thereby become opt
    /// clones themselves. Each edge kind changes at most once, so the pass
    /// is idempotent once it reaches the fixpoint.
    pub(crate) fn rewrite_duplicate_clones(&mut self) {
        let mut worklist: Vec<NodeIdx> = (0..self.nodes.len())
            .filter(|&n| self.is_opt_clone(n))
            .collect();

        while let Some(node) = worklist.pop() {
            let out: SmallVec<[usize; 4]> = self.nodes[node].out_edges.clone();
            for &e in &out {
                let spawn = self.edges[e].spawn;
                if self.edges[e].kind != EdgeKind::Inlined
                    || self.nodes[node].id.name != self.nodes[spawn].id.name
                {
                    continue;
                }
                let spawn_was_opt_clone = self.is_opt_clone(spawn);
                self.edges[e].kind = EdgeKind::DuplicateOptClone;
                if !spawn_was_opt_clone {
                    worklist.push(spawn);
                }
            }
        }
    }
}
