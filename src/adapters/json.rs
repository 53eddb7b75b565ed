//! JSON adapters: descriptor files in, machine-readable graph dumps out.

use crate::domain::graph::ModelGraph;
use crate::domain::model::TypeDescriptor;
use crate::domain::ports::{DiagramWriter, ModelSource};
use anyhow::{Context as _, Result};
use petgraph::visit::EdgeRef as _;
use std::path::{Path, PathBuf};

/// Loads a model from a JSON file holding an array of type descriptors.
pub struct JsonModelSource {
    path: PathBuf,
}

impl JsonModelSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ModelSource for JsonModelSource {
    fn load(&self) -> Result<Vec<TypeDescriptor>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read model file: {}", self.path.display()))?;
        let types: Vec<TypeDescriptor> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse model file: {}", self.path.display()))?;
        Ok(types)
    }
}

/// Renders the graph as a JSON document: counts, nodes with their attributes
/// and outgoing references, and the edge list.
pub struct JsonWriter;

impl DiagramWriter for JsonWriter {
    fn render(&self, graph: &ModelGraph) -> Result<String> {
        let mut nodes = Vec::new();
        for idx in graph.graph.node_indices() {
            let node = graph.node(idx);
            let attributes: Vec<serde_json::Value> = node
                .attributes
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name,
                        "type": a.type_name(),
                    })
                })
                .collect();
            let references: Vec<serde_json::Value> = graph
                .graph
                .edges(idx)
                .map(|e| {
                    serde_json::json!({
                        "to": graph.node(e.target()).name,
                        "kind": e.weight(),
                    })
                })
                .collect();
            nodes.push(serde_json::json!({
                "id": node.id,
                "name": node.name,
                "kind": node.kind,
                "attributes": attributes,
                "references": references,
            }));
        }

        let edges: Vec<serde_json::Value> = graph
            .edges()
            .map(|(from, to, kind)| {
                serde_json::json!({
                    "from": from.name,
                    "to": to.name,
                    "kind": kind,
                })
            })
            .collect();

        let output = serde_json::json!({
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "nodes": nodes,
            "edges": edges,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
