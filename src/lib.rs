//! # onnxviz
//!
//! Interactive HTML visualization of ONNX computation graphs.
//!
//! This crate extracts the directed computation graph from an ONNX model —
//! including control-flow subgraphs — deduplicates shared tensors, recovers
//! tensor shapes from the model's shape-bearing declarations, and compresses
//! verbose internal names into short display labels. The result is written
//! as a self-contained HTML page rendered in the browser with dagre-d3.
//!
//! ## Example
//!
//! ```ignore
//! use onnxviz::prelude::*;
//!
//! let report = visualize_file("model.onnx", "model_graph.html")?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;
pub mod io;
pub mod label;
pub mod proto;
pub mod viz;
pub mod walk;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module - import commonly used types with `use onnxviz::prelude::*`
pub mod prelude {
    pub use crate::error::{VizError, VizResult};
    pub use crate::graph::{GraphIndex, TensorKind};
    pub use crate::io::{load_model, visualize_file, ModelInfo};
    pub use crate::label::{clean_name, escape_name, format_shape};
    pub use crate::proto::onnx::*;
    pub use crate::viz::{write_html, Digraph};
    pub use crate::walk::{build_graph, WalkReport};
}

// ============================================================================
// Crate-level re-exports
// ============================================================================

pub use error::{VizError, VizResult};
pub use io::visualize_file;

// ============================================================================
// Version information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
