//! Model I/O and one-shot visualization
//!
//! This module provides functions for loading ONNX models and the file-level
//! entry point that ties the pipeline together.
//!
//! # Example
//!
//! ```ignore
//! use onnxviz::io::visualize_file;
//!
//! let report = visualize_file("model.onnx", "model_graph.html")?;
//! println!("{} nodes, {} edges", report.operators + report.tensors, report.edges);
//! ```

pub mod reader;

// Re-exports
pub use reader::{load_graph, load_model, load_model_from_bytes, ModelInfo};

use std::path::Path;

use crate::error::VizResult;
use crate::proto::ModelProto;
use crate::viz::{write_html, Digraph};
use crate::walk::{build_graph, WalkReport};

/// Extract the displayable graph from an in-memory model
pub fn visualize_model(model: &ModelProto) -> VizResult<(Digraph, WalkReport)> {
    build_graph(model)
}

/// Load a model, extract its graph, and write the HTML page.
///
/// This is the main entry point for file-based visualization. Recoverable
/// problems encountered during the walk are returned in the report, not
/// raised.
pub fn visualize_file<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
) -> VizResult<WalkReport> {
    let model = load_model(input)?;
    let (graph, report) = build_graph(&model)?;
    write_html(&graph, output)?;
    Ok(report)
}
