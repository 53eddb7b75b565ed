//! Descriptor fixtures for integration tests, modeled on a small
//! domain-model assembly: public and internal classes, a nesting pair, an
//! enum, a hiding hierarchy, and direct/indirect reference holders.
#![allow(dead_code)]

use modelgraph::domain::model::{Member, TypeDescriptor, TypeRef};

pub fn int() -> TypeRef {
    TypeRef::Primitive {
        name: "int".to_string(),
    }
}

pub fn guid() -> TypeRef {
    TypeRef::OpaqueId {
        name: "Guid".to_string(),
    }
}

pub fn named(name: &str) -> TypeRef {
    TypeRef::Named {
        name: name.to_string(),
    }
}

pub fn list_of(arg: TypeRef) -> TypeRef {
    TypeRef::Generic {
        wrapper: "List".to_string(),
        args: vec![arg],
    }
}

pub fn public_class() -> TypeDescriptor {
    TypeDescriptor::class("PublicClass", vec![Member::new("MyProperty", int())])
}

pub fn internal_class() -> TypeDescriptor {
    TypeDescriptor::class("InternalClass", vec![Member::new("MyProperty", int())]).internal()
}

pub fn anonymous_type() -> TypeDescriptor {
    TypeDescriptor::class(
        "<>f__AnonymousType0",
        vec![Member::new("A", int()), Member::new("B", int())],
    )
    .synthesized()
}

pub fn nesting_class() -> TypeDescriptor {
    TypeDescriptor::class(
        "NestingClass",
        vec![Member::new("NestedProperty", named("NestedClass"))],
    )
}

pub fn nested_class() -> TypeDescriptor {
    TypeDescriptor::class("NestedClass", vec![]).nested()
}

pub fn public_enum() -> TypeDescriptor {
    TypeDescriptor::enumeration("PublicEnum", &["One", "Two", "Three"])
}

pub fn base_class() -> TypeDescriptor {
    TypeDescriptor::class("BaseClass", vec![Member::new("BaseProperty", TypeRef::Function)])
}

pub fn derived_base_class() -> TypeDescriptor {
    TypeDescriptor::class(
        "DerivedBaseClass",
        vec![Member::hiding("BaseProperty", TypeRef::Function)],
    )
    .with_base("BaseClass")
}

pub fn direct_reference_to_public_class() -> TypeDescriptor {
    TypeDescriptor::class(
        "DirectReferenceToPublicClass",
        vec![Member::new("TestClass1", named("PublicClass"))],
    )
}

pub fn indirect_reference_to_public_class() -> TypeDescriptor {
    TypeDescriptor::class(
        "IndirectReferenceToPublicClass",
        vec![Member::new("PublicClassId", guid())],
    )
}

pub fn primitive_collection_class() -> TypeDescriptor {
    TypeDescriptor::class("TestClass3", vec![Member::new("Count", list_of(int()))])
}
