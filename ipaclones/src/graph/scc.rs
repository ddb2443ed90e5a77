//! Strongly-connected-component decomposition.
//!
//! Tarjan's algorithm, c.f. "Depth-First Search and Linear Graph
//! Algorithms", R. Tarjan, <https://doi.org/10.1137/0201010>, in the
//! iterative formulation: an explicit walk stack of
//! `(node, out-edge cursor)` frames instead of recursion, so deep call
//! chains in real-world dumps cannot overflow the thread stack.

use super::types::{CloneGraph, NodeIdx};

impl CloneGraph {
    /// Partitions the nodes into strongly connected components and marks
    /// intra-component edges.
    ///
    /// A singleton without a cycle is recorded as "no component" rather
    /// than a trivial one-element set. Multi-node components get their
    /// internal edges flagged `is_scc_edge` the moment the component root
    /// closes, while all members are still on the component stack.
    pub(crate) fn find_strongly_connected_components(&mut self) {
        let n = self.nodes.len();
        let mut numbered = vec![false; n];
        let mut dfs_num = vec![0_u32; n];
        let mut lowlink = vec![0_u32; n];
        let mut on_stack = vec![false; n];
        let mut next_dfs = 0_u32;
        let mut scc_stack: Vec<NodeIdx> = Vec::new();
        let mut walk_stack: Vec<(NodeIdx, usize)> = Vec::new();

        for root in 0..n {
            if numbered[root] {
                continue;
            }
            numbered[root] = true;
            dfs_num[root] = next_dfs;
            lowlink[root] = next_dfs;
            next_dfs += 1;
            scc_stack.push(root);
            on_stack[root] = true;

            let mut v = root;
            let mut cursor = 0_usize;
            loop {
                if let Some(&e) = self.nodes[v].out_edges.get(cursor) {
                    cursor += 1;
                    let w = self.edges[e].spawn;
                    if !numbered[w] {
                        // Not numbered yet, descend.
                        numbered[w] = true;
                        dfs_num[w] = next_dfs;
                        lowlink[w] = next_dfs;
                        next_dfs += 1;
                        scc_stack.push(w);
                        on_stack[w] = true;
                        walk_stack.push((v, cursor));
                        v = w;
                        cursor = 0;
                    } else if dfs_num[w] < dfs_num[v] && on_stack[w] {
                        // Frond or cross-link into the spine under walk.
                        lowlink[v] = lowlink[v].min(dfs_num[w]);
                    }
                } else {
                    // v's edges exhausted.
                    if lowlink[v] == dfs_num[v] {
                        self.close_component(v, &dfs_num, &mut scc_stack, &mut on_stack);
                    }
                    let Some((u, resume)) = walk_stack.pop() else {
                        break;
                    };
                    lowlink[u] = lowlink[u].min(lowlink[v]);
                    v = u;
                    cursor = resume;
                }
            }
        }
    }

    /// Pops the component rooted at `root` off the component stack.
    fn close_component(
        &mut self,
        root: NodeIdx,
        dfs_num: &[u32],
        scc_stack: &mut Vec<NodeIdx>,
        on_stack: &mut [bool],
    ) {
        // Members are the stack suffix numbered at or after the root.
        let mut first = scc_stack.len();
        while first > 0 && dfs_num[scc_stack[first - 1]] >= dfs_num[root] {
            first -= 1;
        }
        let members = scc_stack.split_off(first);

        if members.len() > 1 {
            // Every member is still flagged on-stack here, which is what
            // makes the membership test for edge targets a pair of O(1)
            // lookups.
            for &w in &members {
                for &e in &self.nodes[w].out_edges {
                    let u = self.edges[e].spawn;
                    self.edges[e].is_scc_edge = on_stack[u] && dfs_num[u] >= dfs_num[root];
                }
            }
            let id = self.components.len();
            for &w in &members {
                on_stack[w] = false;
                self.nodes[w].component = Some(id);
            }
            self.components.push(members);
        } else {
            // Singleton: no component. A self-loop on it is not an SCC
            // edge; spawn resolution handles it through its visited set.
            for &w in &members {
                on_stack[w] = false;
            }
        }
    }
}
