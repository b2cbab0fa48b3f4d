//! ONNX model reader
//!
//! Load ONNX models from files or bytes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use prost::Message;

use crate::error::{VizError, VizResult};
use crate::proto::ModelProto;

/// Load an ONNX model from a file path
///
/// # Example
///
/// ```ignore
/// use onnxviz::io::load_model;
///
/// let model = load_model("model.onnx")?;
/// println!("Model IR version: {}", model.ir_version);
/// ```
pub fn load_model<P: AsRef<Path>>(path: P) -> VizResult<ModelProto> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        VizError::InvalidModel(format!("Failed to open file '{}': {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();

    reader.read_to_end(&mut buffer).map_err(|e| {
        VizError::InvalidModel(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    load_model_from_bytes(&buffer)
}

/// Load an ONNX model from bytes
pub fn load_model_from_bytes(bytes: &[u8]) -> VizResult<ModelProto> {
    ModelProto::decode(bytes)
        .map_err(|e| VizError::InvalidModel(format!("Failed to decode ONNX model: {}", e)))
}

/// Load only the graph from an ONNX model file
pub fn load_graph<P: AsRef<Path>>(path: P) -> VizResult<crate::proto::GraphProto> {
    let model = load_model(path)?;
    model
        .graph
        .ok_or_else(|| VizError::InvalidModel("Model does not contain a graph".to_string()))
}

/// Model metadata extracted from an ONNX file
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// IR version
    pub ir_version: i64,
    /// Producer name
    pub producer_name: String,
    /// Producer version
    pub producer_version: String,
    /// Model version
    pub model_version: i64,
    /// Opset imports
    pub opsets: Vec<(String, i64)>,
    /// Graph name
    pub graph_name: String,
    /// Number of nodes
    pub node_count: usize,
    /// Number of initializers
    pub initializer_count: usize,
    /// Input names
    pub inputs: Vec<String>,
    /// Output names
    pub outputs: Vec<String>,
}

impl ModelInfo {
    /// Extract metadata from a model
    pub fn from_model(model: &ModelProto) -> Self {
        let graph = model.graph.as_ref();

        Self {
            ir_version: model.ir_version,
            producer_name: model.producer_name.clone(),
            producer_version: model.producer_version.clone(),
            model_version: model.model_version,
            opsets: model
                .opset_import
                .iter()
                .map(|op| (op.domain.clone(), op.version))
                .collect(),
            graph_name: graph.map(|g| g.name.clone()).unwrap_or_default(),
            node_count: graph.map(|g| g.node.len()).unwrap_or(0),
            initializer_count: graph.map(|g| g.initializer.len()).unwrap_or(0),
            inputs: graph
                .map(|g| g.input.iter().map(|i| i.name.clone()).collect())
                .unwrap_or_default(),
            outputs: graph
                .map(|g| g.output.iter().map(|o| o.name.clone()).collect())
                .unwrap_or_default(),
        }
    }
}
