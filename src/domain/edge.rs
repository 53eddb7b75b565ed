//! Edge weight: how a reference between two nodes was established.

use serde::Serialize;
use std::fmt;

/// Classification of a reference edge. Diagram writers render both as plain
/// associations; the distinction exists for logs and the JSON dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// The attribute's declared type is (or directly wraps) the target type.
    Direct,
    /// Inferred from the `<TargetName>Id` naming convention on an opaque
    /// identifier attribute. A heuristic, not a structural type fact.
    Indirect,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Direct => write!(f, "direct"),
            ReferenceKind::Indirect => write!(f, "indirect"),
        }
    }
}
