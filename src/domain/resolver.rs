//! Reference resolution: decides whether an attribute links its owner to
//! another eligible type, either structurally or by naming convention.

use crate::domain::edge::ReferenceKind;
use crate::domain::model::{TypeDescriptor, TypeRef};
use crate::domain::node::Attribute;
use std::collections::HashMap;

/// Resolve one attribute against the eligible set. Direct resolution is
/// tried first, then the indirect naming-convention heuristic. Resolution is
/// attribute-local: it never recurses into the target's own members, so
/// cyclic models terminate trivially.
pub fn resolve_reference<'a>(
    owner: &TypeDescriptor,
    attribute: &Attribute,
    eligible: &HashMap<&str, &'a TypeDescriptor>,
) -> Option<(&'a TypeDescriptor, ReferenceKind)> {
    if let Some(target) = direct_target(owner, &attribute.type_ref, eligible) {
        return Some((target, ReferenceKind::Direct));
    }
    if let Some(target) = indirect_target(attribute, eligible) {
        return Some((target, ReferenceKind::Indirect));
    }
    None
}

/// Structural match: the declared type is an eligible type other than the
/// owner, or a generic wrapper directly parameterized by one. Primitives,
/// identifiers, and function shapes never match; nested wrappers are
/// conservatively ignored.
fn direct_target<'a>(
    owner: &TypeDescriptor,
    type_ref: &TypeRef,
    eligible: &HashMap<&str, &'a TypeDescriptor>,
) -> Option<&'a TypeDescriptor> {
    match type_ref {
        TypeRef::Named { name } if name != &owner.name => eligible.get(name.as_str()).copied(),
        TypeRef::Generic { args, .. } => args.iter().find_map(|arg| match arg {
            TypeRef::Named { name } if name != &owner.name => eligible.get(name.as_str()).copied(),
            _ => None,
        }),
        _ => None,
    }
}

/// Naming-convention match: an opaque-identifier attribute whose name, with
/// one trailing `Id` token stripped (case-sensitive), equals an eligible
/// type's name. A foreign-key convention, not a type fact; false positives
/// and negatives are expected and acceptable.
fn indirect_target<'a>(
    attribute: &Attribute,
    eligible: &HashMap<&str, &'a TypeDescriptor>,
) -> Option<&'a TypeDescriptor> {
    if !attribute.type_ref.is_opaque_identifier() {
        return None;
    }
    let stem = attribute.name.strip_suffix("Id")?;
    if stem.is_empty() {
        return None;
    }
    eligible.get(stem).copied()
}
