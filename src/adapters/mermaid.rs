//! Mermaid `classDiagram` writer.
//!
//! One `class` block per node (with an `<<enumeration>>` stereotype for enum
//! nodes), `+Type name` attribute lines, and one `From --> To` association
//! per edge. Direct and indirect references render identically; the diagram
//! shows associations, not how they were detected.

use crate::domain::graph::ModelGraph;
use crate::domain::model::TypeKind;
use crate::domain::ports::DiagramWriter;
use anyhow::Result;

pub struct MermaidWriter;

impl DiagramWriter for MermaidWriter {
    fn render(&self, graph: &ModelGraph) -> Result<String> {
        let mut output = String::from("classDiagram\n");

        for node in graph.nodes() {
            output.push_str(&format!("    class {} {{\n", node.name));
            match node.kind {
                TypeKind::Enum => {
                    output.push_str("        <<enumeration>>\n");
                    for attr in &node.attributes {
                        output.push_str(&format!("        {}\n", attr.name));
                    }
                }
                TypeKind::Class => {
                    for attr in &node.attributes {
                        output.push_str(&format!("        +{} {}\n", attr.type_name(), attr.name));
                    }
                }
            }
            output.push_str("    }\n");
        }

        for (from, to, _) in graph.edges() {
            output.push_str(&format!("    {} --> {}\n", from.name, to.name));
        }

        Ok(output)
    }
}
