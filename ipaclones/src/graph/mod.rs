//! Clone graph built from a GCC `-fdump-ipa-clones` callgraph dump.
//!
//! The dump records three kinds of interprocedural-optimization events:
//! function inlining, specialization clones (isra/constprop/part) and
//! dead-code removals. This module turns a complete dump into a frozen
//! directed graph and answers two questions about it:
//!
//! - [`CloneGraph::resolve_spawns`]: which compiled instances does a
//!   source-level symbol name become, and are any of them optimizer-generated
//!   duplicates?
//! - [`CloneGraph::all_removed`]: was every compiled instance of a name
//!   eliminated by the optimizer?
//!
//! Construction runs three phases in order: parse + intern (builder),
//! reclassification of inlining edges that are really duplications (rewrite),
//! and strongly-connected-component decomposition (scc). After that the graph
//! never changes and both queries are pure lookups.

mod builder;
mod errors;
mod rewrite;
mod scc;
mod spawns;
mod stats;
mod types;

pub use errors::FormatError;
pub use stats::GraphStats;
pub use types::{CloneGraph, EdgeKind, NodeId};
