use compact_str::CompactString;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Index of a node in the graph arena.
pub(crate) type NodeIdx = usize;
/// Index of an edge in the graph arena.
pub(crate) type EdgeIdx = usize;
/// Index of a multi-node strongly connected component.
pub(crate) type ComponentIdx = usize;

/// Identity of one compiled function instance mentioned in the dump.
///
/// Equality, hashing and ordering use only `(ipa_id, name)`. The location
/// fields are carried for diagnostics; two records with the same
/// `(ipa_id, name)` but different locations denote the same node.
#[derive(Debug, Clone)]
pub struct NodeId {
    /// Source-level symbol name.
    pub name: CompactString,
    /// Callgraph node id assigned by the compiler.
    pub ipa_id: u64,
    /// File the function was declared in.
    pub filename: CompactString,
    /// Declaration line.
    pub line: u32,
    /// Declaration column.
    pub column: u32,
}

impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.ipa_id == other.ipa_id && self.name == other.name
    }
}

impl Eq for NodeId {}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ipa_id.hash(state);
        self.name.hash(state);
    }
}

impl Ord for NodeId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ipa_id
            .cmp(&other.ipa_id)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for NodeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How a spawn relates to the function it was derived from.
///
/// Everything except [`EdgeKind::Inlined`] marks the spawn as an IPA
/// optimization clone of the original. `DuplicateOptClone` is never parsed
/// from a dump; the rewrite pass assigns it to inlining edges that turn out
/// to be duplications of an existing clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Plain inlining ("inlining to").
    Inlined,
    /// Interprocedural scalar replacement of aggregates.
    Isra,
    /// Constant-propagation specialization.
    ConstProp,
    /// Function splitting.
    Part,
    /// A duplication recorded as inlining; assigned by the rewrite pass only.
    DuplicateOptClone,
}

/// One compiled function instance and its adjacency.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) id: NodeId,
    /// Set by a `Callgraph removal` record.
    pub(crate) removed: bool,
    pub(crate) out_edges: SmallVec<[EdgeIdx; 4]>,
    pub(crate) in_edges: SmallVec<[EdgeIdx; 4]>,
    /// Multi-node strongly connected component, if any. Singletons stay
    /// `None`, distinct from a genuine cycle.
    pub(crate) component: Option<ComponentIdx>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            removed: false,
            out_edges: SmallVec::new(),
            in_edges: SmallVec::new(),
            component: None,
        }
    }
}

/// Directed edge `original -> spawn`. Identity is the
/// `(original, spawn, kind)` triple; duplicate insertions are no-ops.
#[derive(Debug)]
pub(crate) struct Edge {
    pub(crate) original: NodeIdx,
    pub(crate) spawn: NodeIdx,
    /// Mutable exactly once: `Inlined -> DuplicateOptClone` in the rewrite
    /// pass. Read-only everywhere else.
    pub(crate) kind: EdgeKind,
    /// True iff both endpoints share the same multi-node component.
    /// Finalized by SCC decomposition.
    pub(crate) is_scc_edge: bool,
}

impl Edge {
    pub(crate) fn is_inline(&self) -> bool {
        matches!(self.kind, EdgeKind::Inlined)
    }
}

/// Frozen clone graph over one complete dump.
///
/// Nodes and edges live in arenas addressed by index; adjacency lists and
/// component membership store indices, never references. Built once by
/// [`CloneGraph::parse`], immutable afterwards.
#[derive(Debug)]
pub struct CloneGraph {
    /// All nodes, in first-seen order.
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    /// Distinct `ipa_id`s may share a name; values keep first-seen order.
    pub(crate) by_name: FxHashMap<CompactString, Vec<NodeIdx>>,
    /// Multi-node strongly connected components only.
    pub(crate) components: Vec<Vec<NodeIdx>>,
}

impl CloneGraph {
    /// A node is an IPA optimization clone iff some incoming edge is not
    /// plain inlining.
    pub(crate) fn is_opt_clone(&self, node: NodeIdx) -> bool {
        self.nodes[node]
            .in_edges
            .iter()
            .any(|&e| !self.edges[e].is_inline())
    }
}
