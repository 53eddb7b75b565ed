//! The reflected model graph: petgraph storage plus a name-keyed lookup so
//! downstream code can ask "does type T have a node?" without scanning.

use crate::domain::edge::ReferenceKind;
use crate::domain::node::Node;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Directed graph of eligible types and the references between them.
///
/// Node indices follow insertion order, which the builder fixes to the
/// first-seen order of eligible descriptors in the input; iteration over
/// [`ModelGraph::nodes`] is therefore deterministic for a given input set.
#[derive(Debug)]
pub struct ModelGraph {
    /// The directed graph of nodes and reference edges.
    pub graph: DiGraph<Node, ReferenceKind>,

    /// Mapping from type name (descriptor identity) to node index.
    type_to_node: HashMap<String, NodeIndex>,
}

impl ModelGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            type_to_node: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, type_name: String, node: Node) -> NodeIndex {
        let idx = self.graph.add_node(node);
        self.type_to_node.insert(type_name, idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, kind: ReferenceKind) {
        self.graph.add_edge(from, to, kind);
    }

    /// Node for the type with the given name, when one exists.
    pub fn node_for(&self, type_name: &str) -> Option<NodeIndex> {
        self.type_to_node.get(type_name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Edges as (from, to, kind) triples, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, ReferenceKind)> {
        self.graph.edge_indices().map(|e| {
            let (from, to) = self
                .graph
                .edge_endpoints(e)
                .expect("edge index from edge_indices");
            (&self.graph[from], &self.graph[to], self.graph[e])
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ModelGraph {
    fn default() -> Self {
        Self::new()
    }
}
