//! Graphviz writer: renders the graph as a `digraph` via `petgraph::dot`
//! over a name-labelled view, so node weights print as type names and edge
//! weights as their reference kind.

use crate::domain::graph::ModelGraph;
use crate::domain::ports::DiagramWriter;
use anyhow::Result;
use petgraph::dot::Dot;

pub struct DotWriter;

impl DiagramWriter for DotWriter {
    fn render(&self, graph: &ModelGraph) -> Result<String> {
        let labelled = graph
            .graph
            .map(|_, node| node.name.clone(), |_, kind| *kind);
        Ok(format!("{}", Dot::new(&labelled)))
    }
}
