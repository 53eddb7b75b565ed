//! Ports between the reflection core and its collaborators: where type
//! metadata comes from and where the finished graph goes.

use crate::domain::graph::ModelGraph;
use crate::domain::model::TypeDescriptor;
use anyhow::Result;

/// Type metadata provider port (implemented by adapters).
///
/// The core makes no assumption about where descriptors come from: a parsed
/// source tree, an introspection dump, or hand-built fixtures all satisfy
/// the contract.
pub trait ModelSource {
    fn load(&self) -> Result<Vec<TypeDescriptor>>;
}

/// Diagram renderer port: turns a finished graph into output markup.
pub trait DiagramWriter {
    fn render(&self, graph: &ModelGraph) -> Result<String>;
}
