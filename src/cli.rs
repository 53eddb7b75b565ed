//! Command handlers: load a model file, reflect it, and hand the graph to
//! the selected writer.

use crate::adapters::dot::DotWriter;
use crate::adapters::json::{JsonModelSource, JsonWriter};
use crate::adapters::mermaid::MermaidWriter;
use crate::domain::builder::ModelReflector;
use crate::domain::graph::ModelGraph;
use crate::domain::model::TypeKind;
use crate::domain::ports::{DiagramWriter, ModelSource};
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use std::path::Path;
use tracing::info;

/// Output markup selection for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Mermaid `classDiagram` markup.
    Mermaid,
    /// Graphviz `digraph` markup.
    Dot,
    /// Machine-readable graph dump.
    Json,
}

impl OutputFormat {
    fn writer(self) -> Box<dyn DiagramWriter> {
        match self {
            OutputFormat::Mermaid => Box::new(MermaidWriter),
            OutputFormat::Dot => Box::new(DotWriter),
            OutputFormat::Json => Box::new(JsonWriter),
        }
    }
}

fn reflect_model(model_path: &Path) -> Result<ModelGraph> {
    let source = JsonModelSource::new(model_path);
    let types = source.load()?;
    info!(types = types.len(), "loaded model descriptors");
    let graph = ModelReflector::new()
        .reflect(&types)
        .context("failed to reflect model into a graph")?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "reflected model graph"
    );
    Ok(graph)
}

/// Reflect the model file and write diagram markup to `output`, or to stdout
/// when no output path is given.
pub fn generate(model_path: &Path, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    let graph = reflect_model(model_path)?;
    let rendered = format.writer().render(&graph)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            println!(
                "Wrote {} nodes, {} edges to {}",
                graph.node_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Reflect the model file and print a summary of the resulting graph.
pub fn stats(model_path: &Path) -> Result<()> {
    let graph = reflect_model(model_path)?;

    let classes = graph
        .nodes()
        .filter(|n| n.kind == TypeKind::Class)
        .count();
    let enums = graph.nodes().filter(|n| n.kind == TypeKind::Enum).count();
    let attributes: usize = graph.nodes().map(|n| n.attributes.len()).sum();

    println!("Model graph summary:");
    println!("  Nodes:      {}", graph.node_count());
    println!("    Classes:  {}", classes);
    println!("    Enums:    {}", enums);
    println!("  Attributes: {}", attributes);
    println!("  Edges:      {}", graph.edge_count());
    Ok(())
}
