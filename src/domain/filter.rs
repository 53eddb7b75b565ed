//! Eligibility predicate: which supplied descriptors become graph nodes.

use crate::domain::model::TypeDescriptor;

/// Whether a descriptor becomes a node. Pure; rejection order matters only
/// for log readability, not for the result.
///
/// Rejected: synthesized (anonymous) types, nested types, non-public types.
/// Classes and enums are otherwise treated alike.
pub fn is_eligible(descriptor: &TypeDescriptor) -> bool {
    if descriptor.is_synthesized {
        return false;
    }
    if descriptor.is_nested {
        return false;
    }
    if !descriptor.is_public {
        return false;
    }
    true
}
