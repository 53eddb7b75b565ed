//! Attribute collection: flattens a type's outwardly visible members into an
//! ordered attribute list, resolving member hiding across the base chain.

use crate::domain::model::{TypeDescriptor, TypeKind};
use crate::domain::node::Attribute;
use anyhow::{Result, bail};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Collect the ordered attributes of one (eligible) descriptor.
///
/// Enums yield one attribute per enumerant in declaration order; no base
/// logic applies. Classes walk the base chain most-derived first, keeping an
/// override table keyed by member name so a name redeclared lower in the
/// chain (hiding) contributes exactly one attribute, the most-derived one.
///
/// `registry` maps every supplied type name to its descriptor; base names
/// are resolved against it. A base name absent from the registry ends the
/// walk. A base cycle is the one malformed-input case and fails fast.
pub fn collect_attributes(
    descriptor: &TypeDescriptor,
    registry: &HashMap<&str, &TypeDescriptor>,
) -> Result<Vec<Attribute>> {
    if descriptor.kind == TypeKind::Enum {
        return Ok(descriptor
            .members
            .iter()
            .map(|m| Attribute::new(&m.name, m.value_type.clone()))
            .collect());
    }

    let mut attributes = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut visited: HashSet<&str> = HashSet::new();

    let mut current = descriptor;
    loop {
        if !visited.insert(current.name.as_str()) {
            bail!(
                "base type cycle through `{}` while collecting attributes of `{}`",
                current.name,
                descriptor.name
            );
        }

        for member in &current.members {
            if seen_names.insert(member.name.as_str()) {
                attributes.push(Attribute::new(&member.name, member.value_type.clone()));
            } else {
                debug!(
                    owner = %descriptor.name,
                    member = %member.name,
                    declared_in = %current.name,
                    "member hidden by a more derived declaration"
                );
            }
        }

        match &current.base {
            Some(base_name) => match registry.get(base_name.as_str()) {
                Some(base) => current = base,
                None => {
                    warn!(
                        owner = %descriptor.name,
                        base = %base_name,
                        "base type not in input set; stopping member walk"
                    );
                    break;
                }
            },
            None => break,
        }
    }

    Ok(attributes)
}
