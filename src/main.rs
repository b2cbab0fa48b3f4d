//! Command-line entry point
//!
//! Loads an ONNX model, prints a short summary, and writes the interactive
//! HTML visualization.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use onnxviz::io::{load_model, visualize_model, ModelInfo};
use onnxviz::viz::write_html;

#[derive(Parser)]
#[command(name = "onnxviz", version, about = "Visualize an ONNX model graph as HTML")]
struct Cli {
    /// Path to the ONNX model file
    #[arg(value_name = "MODEL", default_value = "model.onnx")]
    model: PathBuf,

    /// Output HTML file
    #[arg(short, long, value_name = "PATH", default_value = "model_graph.html")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    println!("Processing model: {}", cli.model.display());

    let model = match load_model(&cli.model) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("Failed to load model: {err}");
            return ExitCode::FAILURE;
        }
    };

    let info = ModelInfo::from_model(&model);
    println!("  IR version: {}", info.ir_version);
    if !info.producer_name.is_empty() {
        println!("  Producer: {} {}", info.producer_name, info.producer_version);
    }
    println!("  Graph: {}", info.graph_name);
    println!("  Nodes: {}", info.node_count);
    println!("  Initializers: {}", info.initializer_count);

    let (graph, report) = match visualize_model(&model) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Failed to extract graph: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_html(&graph, &cli.output) {
        eprintln!("Failed to write output: {err}");
        return ExitCode::FAILURE;
    }

    println!(
        "Rendered {} operators, {} tensors, {} edges to {}",
        report.operators,
        report.tensors,
        report.edges,
        cli.output.display()
    );
    if report.operators_skipped > 0 {
        println!("  Skipped operators: {}", report.operators_skipped);
    }
    for warning in &report.warnings {
        eprintln!("  warning: {warning}");
    }

    ExitCode::SUCCESS
}
