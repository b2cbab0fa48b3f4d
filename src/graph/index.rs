//! Graph index for tensor classification
//!
//! `GraphIndex` is built once from the top-level graph and consulted for
//! every tensor the walker encounters: which declaration set it belongs to,
//! and what shape (if any) was resolved for it.

use rustc_hash::FxHashSet;

use crate::proto::GraphProto;

use super::shapes::{build_shape_map, ShapeMap, ShapeSpec};

/// Classification of a tensor by its declarations in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorKind {
    /// Declared graph input
    Input,
    /// Declared graph output
    Output,
    /// Constant tensor baked into the model
    Initializer,
    /// Produced and consumed inside the graph
    Intermediate,
}

/// Immutable lookup tables shared by every recursive walk call.
///
/// Only the top-level graph feeds the index; tensors local to nested
/// subgraphs that are not also declared at the top level classify as
/// intermediate with unknown shape.
#[derive(Debug)]
pub struct GraphIndex {
    /// Tensor name → resolved shape
    pub shapes: ShapeMap,

    /// Declared graph input names
    pub inputs: FxHashSet<String>,

    /// Declared graph output names
    pub outputs: FxHashSet<String>,

    /// Constant tensor names
    pub initializers: FxHashSet<String>,
}

impl GraphIndex {
    /// Build the index from a graph
    pub fn new(graph: &GraphProto) -> Self {
        Self {
            shapes: build_shape_map(graph),
            inputs: graph.input.iter().map(|vi| vi.name.clone()).collect(),
            outputs: graph.output.iter().map(|vi| vi.name.clone()).collect(),
            initializers: graph.initializer.iter().map(|t| t.name.clone()).collect(),
        }
    }

    /// Classify a tensor name; first match wins in input → output →
    /// initializer priority order.
    pub fn classify(&self, name: &str) -> TensorKind {
        if self.inputs.contains(name) {
            TensorKind::Input
        } else if self.outputs.contains(name) {
            TensorKind::Output
        } else if self.initializers.contains(name) {
            TensorKind::Initializer
        } else {
            TensorKind::Intermediate
        }
    }

    /// Look up the resolved shape for a tensor, if any
    pub fn shape(&self, name: &str) -> Option<&ShapeSpec> {
        self.shapes.get(name)
    }
}
