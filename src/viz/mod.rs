//! Directed-graph container
//!
//! A renderer-agnostic store for nodes and edges plus their style
//! attributes. Nodes are keyed by identifier in insertion order; adding a
//! node with an existing identifier overwrites it. The container performs no
//! validation of style keys — they pass through to the renderer untouched.

pub mod render;

pub use render::{render_to_string, write_html};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Open mapping of renderer-defined style keys
pub type StyleAttrs = IndexMap<String, String>;

/// One rendered node: identifier, display label, and style attributes.
#[derive(Debug, Clone, Serialize)]
pub struct VizNode {
    /// Canonical identifier, referenced by edges
    pub id: String,
    /// Display label; newlines are stored as `<br/>` for the HTML renderer
    pub label: String,
    /// Node outline shape
    pub shape: String,
    /// Remaining style attributes, flattened into the exported dictionary
    #[serde(flatten)]
    pub attrs: StyleAttrs,
}

impl VizNode {
    /// Create a node, converting label newlines to HTML line breaks and
    /// splitting the `shape` style key out of the open attribute map.
    pub fn new(id: impl Into<String>, label: impl Into<String>, mut attrs: StyleAttrs) -> Self {
        let label = label.into().replace('\n', "<br/>");
        let shape = attrs
            .shift_remove("shape")
            .unwrap_or_else(|| "rect".to_string());
        Self {
            id: id.into(),
            label,
            shape,
            attrs,
        }
    }
}

/// One directed edge between node identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct VizEdge {
    /// Source node identifier
    pub source: String,
    /// Target node identifier
    pub target: String,
    /// Style attributes, flattened into the exported dictionary
    #[serde(flatten)]
    pub attrs: StyleAttrs,
}

/// Directed graph of [`VizNode`]s and [`VizEdge`]s.
#[derive(Debug, Default)]
pub struct Digraph {
    name: String,
    attrs: StyleAttrs,
    nodes: IndexMap<String, VizNode>,
    edges: Vec<VizEdge>,
}

impl Digraph {
    /// Create an empty named graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an empty named graph with graph-level attributes
    pub fn with_attrs(name: impl Into<String>, attrs: StyleAttrs) -> Self {
        Self {
            name: name.into(),
            attrs,
            ..Default::default()
        }
    }

    /// Graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a node. A duplicate identifier replaces the earlier node and
    /// keeps its position.
    pub fn node(&mut self, id: impl Into<String>, label: impl Into<String>, attrs: StyleAttrs) {
        let id = id.into();
        self.nodes.insert(id.clone(), VizNode::new(id, label, attrs));
    }

    /// Add a directed edge. Endpoints are not checked against the node set;
    /// the renderer drops dangling references.
    pub fn edge(&mut self, source: impl Into<String>, target: impl Into<String>, attrs: StyleAttrs) {
        self.edges.push(VizEdge {
            source: source.into(),
            target: target.into(),
            attrs,
        });
    }

    /// Whether a node with this identifier exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &VizNode> {
        self.nodes.values()
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &VizEdge> {
        self.edges.iter()
    }

    /// Export the graph as a dictionary for embedding or serialization
    pub fn to_dict(&self) -> Value {
        json!({
            "directed": true,
            "name": &self.name,
            "attrs": &self.attrs,
            "nodes": self.nodes.values().collect::<Vec<_>>(),
            "edges": &self.edges,
        })
    }
}
