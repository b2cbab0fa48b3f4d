//! Model graph walker
//!
//! Recursive depth-first extraction of the computation graph: one pass over
//! the operator list of the top-level graph and of every nested control-flow
//! subgraph, emitting operator nodes, tensor nodes, and directed edges into
//! the output container.
//!
//! Traversal state is threaded explicitly: an immutable [`GraphIndex`]
//! shared by all recursive calls, plus a mutable accumulator holding the
//! drawn-set and the warning log. Nested subgraphs share both with their
//! ancestor scopes, so a tensor drawn in an outer scope is reused rather
//! than duplicated.
//!
//! A failure while processing one operator is logged and recorded; the walk
//! always continues with the next operator. Partial graphs are an accepted
//! output.

pub mod emit;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::error::{VizError, VizResult};
use crate::graph::GraphIndex;
use crate::label::{attr_summary, clean_name, escape_name, format_shape_opt};
use crate::proto::attribute_proto::AttributeType;
use crate::proto::{GraphProto, ModelProto, NodeProto};
use crate::viz::{Digraph, StyleAttrs};

/// Accumulated outcome of one walk.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Operator nodes emitted
    pub operators: usize,
    /// Tensor nodes emitted
    pub tensors: usize,
    /// Edges emitted
    pub edges: usize,
    /// Operators skipped after a processing failure
    pub operators_skipped: usize,
    /// Human-readable warnings collected along the way
    pub warnings: Vec<String>,
}

/// Mutable accumulator threaded through every recursive call.
#[derive(Debug, Default)]
struct WalkAcc {
    /// Raw tensor names already materialized as nodes
    drawn: FxHashSet<String>,
    report: WalkReport,
}

/// Extract the displayable graph from a model.
///
/// Fails only when the model carries no graph at all; every problem below
/// that surfaces as a warning in the returned [`WalkReport`].
pub fn build_graph(model: &ModelProto) -> VizResult<(Digraph, WalkReport)> {
    let graph = model
        .graph
        .as_ref()
        .ok_or_else(|| VizError::MissingField("model.graph".to_string()))?;

    let title = if graph.name.is_empty() {
        "ONNX Model Graph".to_string()
    } else {
        graph.name.clone()
    };
    let graph_attrs: StyleAttrs = [("rankdir", "TB"), ("splines", "ortho")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut out = Digraph::with_attrs(title, graph_attrs);
    let index = GraphIndex::new(graph);
    let mut acc = WalkAcc::default();

    process_graph(graph, &index, &mut acc, &mut out);

    Ok((out, acc.report))
}

/// Walk one operator list, recursing into control-flow subgraphs.
fn process_graph(graph: &GraphProto, index: &GraphIndex, acc: &mut WalkAcc, out: &mut Digraph) {
    for (op_seq, node) in graph.node.iter().enumerate() {
        if let Err(err) = process_node(node, op_seq, index, acc, out) {
            let op = fallback_id(node, op_seq);
            warn!(operator = %op, error = %err, "skipping operator");
            acc.report.warnings.push(format!("operator '{op}': {err}"));
            acc.report.operators_skipped += 1;
        }
    }
}

/// Explicit node name, or `op_<seq>` scoped to the current subgraph.
fn fallback_id(node: &NodeProto, op_seq: usize) -> String {
    if node.name.is_empty() {
        format!("op_{op_seq}")
    } else {
        node.name.clone()
    }
}

/// Domain-qualified operator type for display.
fn display_op_type(node: &NodeProto) -> String {
    if node.domain.is_empty() {
        node.op_type.clone()
    } else if node.domain.starts_with("com.microsoft") {
        format!("ms::{}", node.op_type)
    } else {
        format!("{}::{}", node.domain, node.op_type)
    }
}

fn process_node(
    node: &NodeProto,
    op_seq: usize,
    index: &GraphIndex,
    acc: &mut WalkAcc,
    out: &mut Digraph,
) -> VizResult<()> {
    let op_id = fallback_id(node, op_seq);
    let op_node_id = escape_name(&op_id);

    // Fallback ids restart per subgraph, so two unnamed operators at the
    // same position in different scopes merge into one node
    if node.name.is_empty() && out.has_node(&op_node_id) {
        warn!(operator = %op_id, "fallback id reused across subgraph scopes");
        acc.report
            .warnings
            .push(format!("fallback id '{op_id}' reused; operator nodes merge"));
    }

    let mut label = format!(
        "{}\n(#{})",
        clean_name(&display_op_type(node)),
        clean_name(&op_id)
    );
    let attrs = attr_summary(node);
    if !attrs.is_empty() {
        label.push('\n');
        label.push_str(&attrs.join(", "));
    }

    emit::operator(out, &op_node_id, &label);
    acc.report.operators += 1;

    // Empty names are unused optional slots, not tensors
    for input in node.input.iter().filter(|n| !n.is_empty()) {
        draw_tensor(input, index, acc, out);
        emit::edge(out, &escape_name(input), &op_node_id);
        acc.report.edges += 1;
    }
    for output in node.output.iter().filter(|n| !n.is_empty()) {
        draw_tensor(output, index, acc, out);
        emit::edge(out, &op_node_id, &escape_name(output));
        acc.report.edges += 1;
    }

    // Control-flow bodies become part of the same output graph, sharing the
    // ancestor scope's drawn-set
    for attr in &node.attribute {
        match attr.kind() {
            AttributeType::Graph => {
                let g = attr.g.as_ref().ok_or_else(|| {
                    VizError::MissingField(format!(
                        "attribute '{}' declares a graph but carries none",
                        attr.name
                    ))
                })?;
                process_graph(g, index, acc, out);
            }
            AttributeType::Graphs => {
                for g in &attr.graphs {
                    process_graph(g, index, acc, out);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Materialize a tensor node once; later references reuse it.
fn draw_tensor(name: &str, index: &GraphIndex, acc: &mut WalkAcc, out: &mut Digraph) {
    if acc.drawn.contains(name) {
        return;
    }

    let kind = index.classify(name);
    let label = format!(
        "{}\n{}",
        clean_name(name),
        format_shape_opt(index.shape(name))
    );

    emit::tensor(out, &escape_name(name), &label, kind);
    acc.drawn.insert(name.to_string());
    acc.report.tensors += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::extensions::{make_node, make_tensor_value_info};
    use crate::proto::{AttributeProto, TensorProto};

    fn make_model(graph: GraphProto) -> ModelProto {
        ModelProto {
            ir_version: 8,
            graph: Some(graph),
            ..Default::default()
        }
    }

    fn linear_graph() -> GraphProto {
        GraphProto {
            name: "linear".to_string(),
            node: vec![
                make_node("MatMul", &["x", "W"], &["mm_out"], "matmul_0"),
                make_node("Relu", &["mm_out"], &["y"], "relu_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[1, 64])],
            output: vec![make_tensor_value_info("y", 1, &[1, 16])],
            initializer: vec![TensorProto {
                name: "W".to_string(),
                dims: vec![64, 16],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_build_graph_requires_graph() {
        let model = ModelProto::default();
        assert!(build_graph(&model).is_err());
    }

    #[test]
    fn test_basic_walk_counts() {
        let (out, report) = build_graph(&make_model(linear_graph())).unwrap();

        // 2 operators + 4 tensors (x, W, mm_out, y)
        assert_eq!(report.operators, 2);
        assert_eq!(report.tensors, 4);
        assert_eq!(out.node_count(), 6);
        // matmul: 2 in + 1 out; relu: 1 in + 1 out
        assert_eq!(report.edges, 5);
        assert_eq!(out.edge_count(), 5);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_drawn_set_dedup() {
        let graph = GraphProto {
            node: vec![
                make_node("Exp", &["x"], &["a"], "exp_0"),
                make_node("Log", &["x"], &["b"], "log_0"),
            ],
            input: vec![make_tensor_value_info("x", 1, &[4])],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        let x_nodes = out.nodes().filter(|n| n.id == "x").count();
        assert_eq!(x_nodes, 1);

        let x_out_edges = out.edges().filter(|e| e.source == "x").count();
        assert_eq!(x_out_edges, 2);
    }

    #[test]
    fn test_tensor_fill_by_kind() {
        let (out, _) = build_graph(&make_model(linear_graph())).unwrap();

        let fill = |id: &str| {
            out.nodes()
                .find(|n| n.id == id)
                .and_then(|n| n.attrs.get("fillcolor"))
                .cloned()
                .unwrap()
        };
        assert_eq!(fill("x"), emit::INPUT_FILL);
        assert_eq!(fill("y"), emit::OUTPUT_FILL);
        assert_eq!(fill("W"), emit::INITIALIZER_FILL);
        assert_eq!(fill("mm_out"), emit::INTERMEDIATE_FILL);
        assert_eq!(fill("matmul_0"), emit::OPERATOR_FILL);
    }

    #[test]
    fn test_shape_in_tensor_label() {
        let (out, _) = build_graph(&make_model(linear_graph())).unwrap();

        let x = out.nodes().find(|n| n.id == "x").unwrap();
        assert!(x.label.contains("[1, 64]"));

        // intermediate without value_info falls back to unknown
        let mm = out.nodes().find(|n| n.id == "mm_out").unwrap();
        assert!(mm.label.contains('?'));
    }

    #[test]
    fn test_unnamed_operator_fallback_id() {
        let graph = GraphProto {
            node: vec![make_node("Relu", &["x"], &["y"], "")],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        assert!(out.has_node("op_0"));
    }

    #[test]
    fn test_domain_qualified_display() {
        let mut ms_node = make_node("FusedGelu", &["x"], &["y"], "gelu_0");
        ms_node.domain = "com.microsoft".to_string();
        let mut custom = make_node("MyOp", &["y"], &["z"], "my_0");
        custom.domain = "ai.acme".to_string();

        let graph = GraphProto {
            node: vec![ms_node, custom],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        let gelu = out.nodes().find(|n| n.id == "gelu_0").unwrap();
        assert!(gelu.label.starts_with("ms::"));
        let my = out.nodes().find(|n| n.id == "my_0").unwrap();
        assert!(my.label.contains("ai.acme"));
    }

    #[test]
    fn test_operator_label_shows_attributes() {
        let mut node = make_node("Softmax", &["x"], &["y"], "softmax_0");
        node.attribute.push(AttributeProto::new_int("axis", -1));

        let graph = GraphProto {
            node: vec![node],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        let softmax = out.nodes().find(|n| n.id == "softmax_0").unwrap();
        assert!(softmax.label.contains("axis=-1"));
    }

    #[test]
    fn test_subgraph_recursion_shares_drawn_set() {
        // Loop body consumes the outer tensor `x` and adds its own operator
        let body = GraphProto {
            name: "body".to_string(),
            node: vec![make_node("Add", &["x", "acc_in"], &["acc_out"], "body_add")],
            ..Default::default()
        };
        let mut loop_node = make_node("Loop", &["n", "x"], &["final"], "loop_0");
        loop_node
            .attribute
            .push(AttributeProto::new_graph("body", body));

        let graph = GraphProto {
            node: vec![loop_node],
            input: vec![make_tensor_value_info("x", 1, &[2])],
            ..Default::default()
        };
        let (out, report) = build_graph(&make_model(graph)).unwrap();

        // inner operator landed in the same output graph
        assert!(out.has_node("body_add"));
        assert_eq!(report.operators, 2);

        // `x` feeds both scopes but is drawn once
        let x_nodes = out.nodes().filter(|n| n.id == "x").count();
        assert_eq!(x_nodes, 1);
        let x_edges = out.edges().filter(|e| e.source == "x").count();
        assert_eq!(x_edges, 2);
    }

    #[test]
    fn test_per_operator_failure_isolation() {
        // First operator declares a GRAPH attribute with no payload
        let mut broken = make_node("If", &["cond"], &["out"], "if_0");
        broken.attribute.push(AttributeProto {
            name: "then_branch".to_string(),
            r#type: AttributeType::Graph as i32,
            ..Default::default()
        });
        let healthy = make_node("Relu", &["out"], &["y"], "relu_0");

        let graph = GraphProto {
            node: vec![broken, healthy],
            ..Default::default()
        };
        let (out, report) = build_graph(&make_model(graph)).unwrap();

        assert_eq!(report.operators_skipped, 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("if_0"));
        // the walk continued
        assert!(out.has_node("relu_0"));
        assert!(out.edges().any(|e| e.source == "relu_0" || e.target == "relu_0"));
    }

    #[test]
    fn test_empty_tensor_names_skipped() {
        // Optional inputs appear as empty strings in ONNX
        let graph = GraphProto {
            node: vec![make_node("Clip", &["x", "", "max"], &["y"], "clip_0")],
            ..Default::default()
        };
        let (out, report) = build_graph(&make_model(graph)).unwrap();

        assert!(!out.has_node(""));
        assert_eq!(report.edges, 3); // x, max, y
    }

    #[test]
    fn test_escaped_identifiers_used_for_edges() {
        let graph = GraphProto {
            node: vec![make_node("Relu", &["weird:name"], &["y"], "relu_0")],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        assert!(out.has_node("weird<colon>name"));
        assert!(out.edges().any(|e| e.source == "weird<colon>name"));
    }

    #[test]
    fn test_subgraph_local_tensor_resolves_unknown() {
        let body = GraphProto {
            node: vec![make_node("Neg", &["inner_only"], &["inner_out"], "neg_0")],
            // shape declared inside the subgraph is deliberately not indexed
            value_info: vec![make_tensor_value_info("inner_only", 1, &[7])],
            ..Default::default()
        };
        let mut scan = make_node("Scan", &["x"], &["y"], "scan_0");
        scan.attribute.push(AttributeProto::new_graph("body", body));

        let graph = GraphProto {
            node: vec![scan],
            ..Default::default()
        };
        let (out, _) = build_graph(&make_model(graph)).unwrap();

        let inner = out.nodes().find(|n| n.id == "inner_only").unwrap();
        assert!(inner.label.contains('?'));
    }
}
