//! Structural type model: contract between a metadata source (parsed source,
//! an introspection dump, or hand-built fixtures) and the reflection pipeline.
//!
//! Descriptors are plain serializable data. Types refer to each other by name
//! (`TypeRef::Named`, `TypeDescriptor::base`); resolution against the actual
//! input set happens later, in the builder. Nothing here touches I/O.

use serde::{Deserialize, Serialize};

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Enum,
}

/// A member's declared value type.
///
/// This is a closed set of shapes: everything a source adapter cannot express
/// maps to the most conservative variant, which produces no reference. Graph
/// candidates are `Named` (and `Generic` wrappers around one); `OpaqueId` is
/// the trigger for the indirect, naming-convention reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// Built-in scalar (`int`, `string`, `bool`, ...). Never a reference.
    Primitive { name: String },
    /// Opaque identifier type (Guid/Uuid-style key). Candidate for the
    /// indirect `...Id` naming-convention reference.
    OpaqueId { name: String },
    /// A declared type, referenced by name.
    Named { name: String },
    /// Generic wrapper (`List<T>`, `Option<T>`, ...) with its type arguments.
    Generic { wrapper: String, args: Vec<TypeRef> },
    /// Function or delegate shape. Never a reference.
    Function,
}

impl TypeRef {
    /// Human-readable rendering, used for attribute type labels in diagrams.
    pub fn display(&self) -> String {
        match self {
            TypeRef::Primitive { name } | TypeRef::OpaqueId { name } | TypeRef::Named { name } => {
                name.clone()
            }
            TypeRef::Generic { wrapper, args } => {
                let args: Vec<String> = args.iter().map(TypeRef::display).collect();
                format!("{}<{}>", wrapper, args.join(", "))
            }
            TypeRef::Function => "fn".to_string(),
        }
    }

    /// Whether this type is an opaque identifier, i.e. eligible for indirect
    /// (foreign-key-style) resolution.
    pub fn is_opaque_identifier(&self) -> bool {
        matches!(self, TypeRef::OpaqueId { .. })
    }
}

/// A declared member: field, property, or enumerant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Declared value type. For enumerants the source adapter conventionally
    /// uses the owning enum itself; attribute collection does the same when
    /// the field is absent.
    pub value_type: TypeRef,
    /// Set when this member redeclares (hides) a same-named member of a base
    /// type. Informational: collection resolves hiding by name regardless.
    #[serde(default)]
    pub hides_base: bool,
}

/// A declared type as supplied by the upstream metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Source-meaningful type name; also the descriptor's identity.
    pub name: String,
    pub kind: TypeKind,
    /// Externally visible (public) declaration.
    #[serde(default = "default_true")]
    pub is_public: bool,
    /// Declared inside another type rather than at top level.
    #[serde(default)]
    pub is_nested: bool,
    /// Compiler- or reflection-synthesized (anonymous) type.
    #[serde(default)]
    pub is_synthesized: bool,
    /// Declared members in declaration order. For enums, one per enumerant.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Base type name, classes only. Resolved against the full input set.
    #[serde(default)]
    pub base: Option<String>,
}

fn default_true() -> bool {
    true
}

impl TypeDescriptor {
    /// A public, top-level class with the given members.
    pub fn class(name: &str, members: Vec<Member>) -> Self {
        Self {
            name: name.to_string(),
            kind: TypeKind::Class,
            is_public: true,
            is_nested: false,
            is_synthesized: false,
            members,
            base: None,
        }
    }

    /// A public, top-level enum with the given enumerant names.
    pub fn enumeration(name: &str, enumerants: &[&str]) -> Self {
        let members = enumerants
            .iter()
            .map(|e| Member {
                name: e.to_string(),
                value_type: TypeRef::Named {
                    name: name.to_string(),
                },
                hides_base: false,
            })
            .collect();
        Self {
            name: name.to_string(),
            kind: TypeKind::Enum,
            is_public: true,
            is_nested: false,
            is_synthesized: false,
            members,
            base: None,
        }
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    pub fn internal(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn nested(mut self) -> Self {
        self.is_nested = true;
        self
    }

    pub fn synthesized(mut self) -> Self {
        self.is_synthesized = true;
        self
    }
}

impl Member {
    pub fn new(name: &str, value_type: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            hides_base: false,
        }
    }

    pub fn hiding(name: &str, value_type: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            hides_base: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_display_renders_generics() {
        let t = TypeRef::Generic {
            wrapper: "List".to_string(),
            args: vec![TypeRef::Named {
                name: "Order".to_string(),
            }],
        };
        assert_eq!(t.display(), "List<Order>");
    }

    #[test]
    fn type_ref_display_renders_nested_generics() {
        let t = TypeRef::Generic {
            wrapper: "Map".to_string(),
            args: vec![
                TypeRef::Primitive {
                    name: "string".to_string(),
                },
                TypeRef::Generic {
                    wrapper: "List".to_string(),
                    args: vec![TypeRef::Primitive {
                        name: "int".to_string(),
                    }],
                },
            ],
        };
        assert_eq!(t.display(), "Map<string, List<int>>");
    }

    #[test]
    fn only_opaque_id_counts_as_identifier() {
        let opaque = TypeRef::OpaqueId {
            name: "Guid".to_string(),
        };
        let primitive = TypeRef::Primitive {
            name: "Guid".to_string(),
        };
        assert!(opaque.is_opaque_identifier());
        assert!(!primitive.is_opaque_identifier());
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let json = r#"{"name": "Customer", "kind": "class"}"#;
        let d: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert!(d.is_public);
        assert!(!d.is_nested);
        assert!(!d.is_synthesized);
        assert!(d.members.is_empty());
        assert!(d.base.is_none());
    }

    #[test]
    fn type_ref_deserializes_tagged() {
        let json = r#"{"kind": "generic", "wrapper": "List", "args": [{"kind": "named", "name": "Order"}]}"#;
        let t: TypeRef = serde_json::from_str(json).unwrap();
        assert_eq!(
            t,
            TypeRef::Generic {
                wrapper: "List".to_string(),
                args: vec![TypeRef::Named {
                    name: "Order".to_string()
                }],
            }
        );
    }
}
