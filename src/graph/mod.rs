//! Graph analysis for ONNX models
//!
//! This module provides the lookup structures the walker consults while
//! traversing a model:
//!
//! - [`shapes`]: shape table construction from the four shape-bearing
//!   sources of a graph, with fixed precedence
//! - [`GraphIndex`]: membership sets for tensor classification plus the
//!   shape table, built once per model
//!
//! | Map | Description |
//! |-----|-------------|
//! | `shapes` | tensor name → [`ShapeSpec`] |
//! | `inputs` | declared graph input names |
//! | `outputs` | declared graph output names |
//! | `initializers` | constant tensor names |

pub mod index;
pub mod shapes;

// Re-export main types
pub use index::{GraphIndex, TensorKind};
pub use shapes::{build_shape_map, Dim, ShapeMap, ShapeSpec};
