//! Node and edge marshalling
//!
//! Translates walker output into the graph container's `node`/`edge` calls.
//! Style keys follow the renderer's vocabulary; the container passes them
//! through untouched.

use crate::graph::TensorKind;
use crate::viz::{Digraph, StyleAttrs};

/// Operator node fill
pub const OPERATOR_FILL: &str = "#e1f5fe";
/// Graph input fill
pub const INPUT_FILL: &str = "#c8e6c9";
/// Graph output fill
pub const OUTPUT_FILL: &str = "#ffe082";
/// Initializer fill
pub const INITIALIZER_FILL: &str = "#eeeeee";
/// Intermediate tensor fill
pub const INTERMEDIATE_FILL: &str = "#f3e5f5";

/// Fill color for a tensor kind
pub fn fill_for(kind: TensorKind) -> &'static str {
    match kind {
        TensorKind::Input => INPUT_FILL,
        TensorKind::Output => OUTPUT_FILL,
        TensorKind::Initializer => INITIALIZER_FILL,
        TensorKind::Intermediate => INTERMEDIATE_FILL,
    }
}

fn style(pairs: &[(&str, &str)]) -> StyleAttrs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Emit an operator node
pub fn operator(out: &mut Digraph, id: &str, label: &str) {
    out.node(
        id,
        label,
        style(&[
            ("class", "node-oval"),
            ("shape", "box"),
            ("style", "filled"),
            ("fillcolor", OPERATOR_FILL),
            ("margin", "0.3"),
            ("width", "1.2"),
            ("height", "0.6"),
            ("fixedsize", "true"),
        ]),
    );
}

/// Emit a tensor node styled by its kind
pub fn tensor(out: &mut Digraph, id: &str, label: &str, kind: TensorKind) {
    out.node(
        id,
        label,
        style(&[
            ("class", "node-box"),
            ("shape", "box"),
            ("style", "filled, rounded"),
            ("fillcolor", fill_for(kind)),
            ("margin", "0.3"),
            ("width", "1.8"),
            ("height", "0.6"),
            ("fixedsize", "true"),
            ("fontsize", "10"),
        ]),
    );
}

/// Emit a directed edge between escaped identifiers
pub fn edge(out: &mut Digraph, source: &str, target: &str) {
    out.edge(
        source,
        target,
        style(&[("penwidth", "0.5"), ("arrowsize", "0.5")]),
    );
}
