//! Static HTML writer
//!
//! Embeds the serialized graph into a self-contained HTML page. Layout and
//! interaction (ranked layout, zoom, neighborhood highlighting) run in the
//! browser via dagre-d3; nothing is computed here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{VizError, VizResult};

use super::Digraph;

const TEMPLATE: &str = include_str!("template.html");

/// Render a graph to an HTML string
pub fn render_to_string(graph: &Digraph) -> VizResult<String> {
    let title = if graph.name().is_empty() {
        "Graph Visualization"
    } else {
        graph.name()
    };
    let data = serde_json::to_string(&graph.to_dict())?;

    Ok(TEMPLATE
        .replace("__TITLE__", title)
        .replace("__GRAPH_DATA__", &data))
}

/// Render a graph and write it to an HTML file
pub fn write_html<P: AsRef<Path>>(graph: &Digraph, path: P) -> VizResult<()> {
    let path = path.as_ref();
    let html = render_to_string(graph)?;

    let file = File::create(path).map_err(|e| {
        VizError::RenderFailed(format!("Failed to create file '{}': {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes()).map_err(|e| {
        VizError::RenderFailed(format!("Failed to write file '{}': {}", path.display(), e))
    })?;

    writer.flush().map_err(|e| {
        VizError::RenderFailed(format!("Failed to flush file '{}': {}", path.display(), e))
    })?;

    Ok(())
}
