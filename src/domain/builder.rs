//! Model reflection: turns a sequence of type descriptors into a
//! [`ModelGraph`].

use crate::domain::attributes::collect_attributes;
use crate::domain::filter::is_eligible;
use crate::domain::graph::ModelGraph;
use crate::domain::model::TypeDescriptor;
use crate::domain::node::{Node, NodeId};
use crate::domain::resolver::resolve_reference;
use anyhow::Result;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Reflects type descriptors into a model graph.
///
/// Stateless; a fresh graph is produced per call, so one reflector can be
/// reused across calls or threads.
pub struct ModelReflector;

impl ModelReflector {
    pub fn new() -> Self {
        Self
    }

    /// Two-pass build: allocate one node per eligible descriptor in
    /// first-seen order (attributes attached immediately), then wire edges
    /// by resolving every attribute against the eligible set.
    ///
    /// Node and edge sets are a function of the input *set*: reordering the
    /// input only permutes the sequences, never their content, and edge
    /// direction is always owner → target. Edges are deduplicated per
    /// (from, to) pair, so two attributes resolving to the same target
    /// contribute one edge. Self-loops from indirect resolution are kept.
    ///
    /// The only error is a malformed descriptor set with a base-type cycle,
    /// surfaced from attribute collection.
    pub fn reflect(&self, types: &[TypeDescriptor]) -> Result<ModelGraph> {
        // Identity registry over the full input, ineligible bases included.
        // First descriptor wins a duplicated name.
        let mut registry: HashMap<&str, &TypeDescriptor> = HashMap::new();
        for descriptor in types {
            if registry.contains_key(descriptor.name.as_str()) {
                warn!(name = %descriptor.name, "duplicate type name; keeping first descriptor");
                continue;
            }
            registry.insert(descriptor.name.as_str(), descriptor);
        }

        let eligible: Vec<&TypeDescriptor> = types
            .iter()
            .filter(|d| {
                registry
                    .get(d.name.as_str())
                    .is_some_and(|kept| std::ptr::eq(*kept, *d))
            })
            .filter(|d| is_eligible(d))
            .collect();
        let eligible_by_name: HashMap<&str, &TypeDescriptor> =
            eligible.iter().map(|d| (d.name.as_str(), *d)).collect();

        // Pass 1: node allocation.
        let mut graph = ModelGraph::new();
        for descriptor in &eligible {
            let attributes = collect_attributes(descriptor, &registry)?;
            let node = Node::new(
                graph.node_count() as NodeId,
                descriptor.name.clone(),
                descriptor.kind,
                attributes,
            );
            graph.add_node(descriptor.name.clone(), node);
        }

        // Pass 2: edge wiring, attribute-local, deduplicated per endpoint pair.
        let mut wired: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        for descriptor in &eligible {
            let from = graph
                .node_for(&descriptor.name)
                .expect("eligible descriptor allocated in pass 1");
            let attributes = graph.node(from).attributes.clone();
            for attribute in &attributes {
                if let Some((target, kind)) =
                    resolve_reference(descriptor, attribute, &eligible_by_name)
                {
                    let to = graph
                        .node_for(&target.name)
                        .expect("resolver targets come from the eligible set");
                    if wired.insert((from, to)) {
                        debug!(
                            from = %descriptor.name,
                            to = %target.name,
                            attribute = %attribute.name,
                            %kind,
                            "reference edge"
                        );
                        graph.add_edge(from, to, kind);
                    }
                }
            }
        }

        Ok(graph)
    }
}

impl Default for ModelReflector {
    fn default() -> Self {
        Self::new()
    }
}
