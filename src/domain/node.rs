//! Output side of the reflection pass: graph vertices and their attributes.

use crate::domain::model::{TypeKind, TypeRef};
use serde::Serialize;

/// Unique identifier for a node in the graph, assigned in insertion order.
pub type NodeId = u32;

/// One outwardly visible member of a node: a name-deduplicated class member
/// or a single enumerant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub type_ref: TypeRef,
}

impl Attribute {
    pub fn new(name: &str, type_ref: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            type_ref,
        }
    }

    /// Type label shown next to the attribute in diagram output.
    pub fn type_name(&self) -> String {
        self.type_ref.display()
    }
}

/// Graph vertex representing one eligible type.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: TypeKind,
    pub attributes: Vec<Attribute>,
}

impl Node {
    pub fn new(id: NodeId, name: String, kind: TypeKind, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            name,
            kind,
            attributes,
        }
    }
}
