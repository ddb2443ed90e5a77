//! Analyzer for GCC `-fdump-ipa-clones` callgraph dumps.
//!
//! The optimizer may split, duplicate or eliminate a source function, so a
//! single source-level symbol can correspond to several distinct binary
//! symbols, or to none at all. This crate builds a clone graph from one
//! complete dump and answers, for a given symbol name:
//!
//! - [`CloneGraph::resolve_spawns`] — which compiled instances the symbol
//!   becomes, and whether any of them are optimizer-generated duplicates;
//! - [`CloneGraph::all_removed`] — whether every instance was eliminated.
//!
//! Symbol-externalization tooling for live patching consumes these queries;
//! the bundled `ipaclones` binary exposes the same queries on the command
//! line.

pub mod commands;
pub mod graph;

pub use graph::{CloneGraph, EdgeKind, FormatError, GraphStats, NodeId};
