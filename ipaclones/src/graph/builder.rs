//! Dump parsing and graph construction.
//!
//! Each line is one `;`-separated record. `Callgraph clone` records come in
//! two layouts distinguished by field count: the legacy 14-field layout with
//! literal `<-` and `optimization:` markers, and the condensed 12-field
//! layout. `Callgraph removal` records have exactly 6 fields. Anything else
//! is fatal.

use super::errors::FormatError;
use super::types::{CloneGraph, Edge, EdgeKind, Node, NodeId, NodeIdx};
use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

impl CloneGraph {
    /// Reads a dump file and builds the graph from it.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Builds the graph from complete dump text.
    ///
    /// `origin` identifies the dump in diagnostics (a path, or something
    /// like `<stdin>`). Construction is all-or-nothing: the first malformed
    /// line aborts the build.
    pub fn parse(text: &str, origin: &str) -> Result<Self, FormatError> {
        let mut builder = Builder::new(origin);
        for line in text.lines() {
            builder.record(line.trim())?;
        }
        let mut graph = builder.finish();
        graph.rewrite_duplicate_clones();
        graph.find_strongly_connected_components();
        Ok(graph)
    }
}

struct Builder<'a> {
    origin: &'a str,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_id: FxHashMap<(u64, CompactString), NodeIdx>,
    by_name: FxHashMap<CompactString, Vec<NodeIdx>>,
    seen_edges: FxHashSet<(NodeIdx, NodeIdx, EdgeKind)>,
}

impl<'a> Builder<'a> {
    fn new(origin: &'a str) -> Self {
        Self {
            origin,
            nodes: Vec::new(),
            edges: Vec::new(),
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            seen_edges: FxHashSet::default(),
        }
    }

    fn record(&mut self, line: &str) -> Result<(), FormatError> {
        let fields: Vec<&str> = line.split(';').collect();
        match fields[0] {
            "Callgraph clone" => self.clone_record(line, &fields),
            "Callgraph removal" => self.removal_record(line, &fields),
            _ => Err(self.unrecognized(line)),
        }
    }

    fn clone_record(&mut self, line: &str, fields: &[&str]) -> Result<(), FormatError> {
        let (original, spawn) = match fields.len() {
            // Legacy layout: literal markers at fixed positions.
            14 => {
                if fields[6] != "<-" || fields[12] != "optimization:" {
                    return Err(self.unrecognized(line));
                }
                (
                    self.node_id(line, &fields[1..6])?,
                    self.node_id(line, &fields[7..12])?,
                )
            }
            // Condensed layout: the two 5-tuples back to back.
            12 => (
                self.node_id(line, &fields[1..6])?,
                self.node_id(line, &fields[6..11])?,
            ),
            _ => return Err(self.unrecognized(line)),
        };

        let kind = match fields[fields.len() - 1] {
            "inlining to" => EdgeKind::Inlined,
            "isra" => EdgeKind::Isra,
            "constprop" => EdgeKind::ConstProp,
            "part" => EdgeKind::Part,
            token => {
                return Err(FormatError::UnknownOptimization {
                    origin: self.origin.to_owned(),
                    token: token.to_owned(),
                })
            }
        };

        let original = self.intern(original);
        let spawn = self.intern(spawn);

        // Re-declared edges are silently ignored.
        if self.seen_edges.insert((original, spawn, kind)) {
            let idx = self.edges.len();
            self.edges.push(Edge {
                original,
                spawn,
                kind,
                is_scc_edge: false,
            });
            self.nodes[original].out_edges.push(idx);
            self.nodes[spawn].in_edges.push(idx);
        }
        Ok(())
    }

    fn removal_record(&mut self, line: &str, fields: &[&str]) -> Result<(), FormatError> {
        if fields.len() != 6 {
            return Err(self.unrecognized(line));
        }
        let id = self.node_id(line, &fields[1..6])?;
        let node = self.intern(id);
        self.nodes[node].removed = true;
        Ok(())
    }

    /// Parses one `(name, ipa_id, filename, line, column)` 5-tuple.
    fn node_id(&self, line: &str, fields: &[&str]) -> Result<NodeId, FormatError> {
        Ok(NodeId {
            name: CompactString::from(fields[0]),
            ipa_id: self.integer(line, "ipa_id", fields[1])?,
            filename: CompactString::from(fields[2]),
            line: self.integer(line, "line", fields[3])?,
            column: self.integer(line, "column", fields[4])?,
        })
    }

    fn integer<T: std::str::FromStr>(
        &self,
        line: &str,
        field: &'static str,
        value: &str,
    ) -> Result<T, FormatError> {
        value.parse().map_err(|_| FormatError::InvalidInteger {
            origin: self.origin.to_owned(),
            field,
            line: line.to_owned(),
        })
    }

    /// First occurrence of an `(ipa_id, name)` creates the node; later
    /// mentions reuse it, accumulating edges and removed state.
    fn intern(&mut self, id: NodeId) -> NodeIdx {
        if let Some(&idx) = self.by_id.get(&(id.ipa_id, id.name.clone())) {
            return idx;
        }
        let idx = self.nodes.len();
        self.by_id.insert((id.ipa_id, id.name.clone()), idx);
        self.by_name.entry(id.name.clone()).or_default().push(idx);
        self.nodes.push(Node::new(id));
        idx
    }

    fn unrecognized(&self, line: &str) -> FormatError {
        FormatError::UnrecognizedLine {
            origin: self.origin.to_owned(),
            line: line.to_owned(),
        }
    }

    fn finish(self) -> CloneGraph {
        CloneGraph {
            nodes: self.nodes,
            edges: self.edges,
            by_name: self.by_name,
            components: Vec::new(),
        }
    }
}
