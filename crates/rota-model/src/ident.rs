// SPDX-License-Identifier: Apache-2.0
//! Identifier types.
//!
//! Entity identifiers are opaque strings assigned by whatever persistence
//! layer the engine is embedded in; the engine never mints them. The one
//! exception is [`ViolationId`], which the engine derives deterministically
//! from a violation's coordinates so that recomputing an unchanged roster
//! reproduces byte-identical ids.

use std::fmt;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a host-assigned identifier string.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

entity_id!(
    /// Strongly typed identifier for a staff member.
    MemberId
);
entity_id!(
    /// Strongly typed identifier for a shift-type template.
    ShiftTypeId
);
entity_id!(
    /// Strongly typed identifier for an assignment occurrence.
    AssignmentId
);
entity_id!(
    /// Strongly typed identifier for a roster-level rule.
    RuleId
);
entity_id!(
    /// Strongly typed identifier for a draft-scoped override.
    OverrideId
);
entity_id!(
    /// Strongly typed identifier for a roster draft.
    DraftId
);

/// Deterministic 256-bit identifier for a computed violation.
///
/// Derived via [`make_violation_id`] from the violation's stable
/// coordinates; displayed as lowercase hex. Two evaluations of identical
/// engine state produce identical `ViolationId`s, which is what makes
/// cached violation sets comparable across recomputes.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ViolationId(pub [u8; 32]);

impl ViolationId {
    /// Returns the canonical byte representation of this id.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ViolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Produces a stable, domain-separated violation identifier (prefix
/// `b"violation:"`) using BLAKE3.
///
/// `tag` discriminates the finding family (e.g. a rule kind key or
/// `"overlap"`), `window` is the ISO-8601 date the finding's window starts
/// on, and `assignments` are the implicated assignment ids in canonical
/// (sorted) order. Every component is length-delimited by construction:
/// ids are hashed with a separator byte so concatenation ambiguity cannot
/// produce colliding coordinates.
pub fn make_violation_id(
    draft: &DraftId,
    member: &MemberId,
    tag: &str,
    window: &str,
    assignments: &[AssignmentId],
) -> ViolationId {
    let mut hasher = Hasher::new();
    hasher.update(b"violation:");
    hasher.update(draft.as_str().as_bytes());
    hasher.update(&[0]);
    hasher.update(member.as_str().as_bytes());
    hasher.update(&[0]);
    hasher.update(tag.as_bytes());
    hasher.update(&[0]);
    hasher.update(window.as_bytes());
    hasher.update(&[0]);
    for a in assignments {
        hasher.update(a.as_str().as_bytes());
        hasher.update(&[0]);
    }
    ViolationId(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_id_stable_under_recompute() {
        let draft = DraftId::from("d1");
        let member = MemberId::from("m1");
        let ids = [AssignmentId::from("a1"), AssignmentId::from("a2")];
        let first = make_violation_id(&draft, &member, "max_hours_week", "2024-01-01", &ids);
        let second = make_violation_id(&draft, &member, "max_hours_week", "2024-01-01", &ids);
        assert_eq!(first, second);
    }

    #[test]
    fn violation_id_separates_coordinates() {
        let draft = DraftId::from("d1");
        let member = MemberId::from("m1");
        let base = make_violation_id(&draft, &member, "max_hours_week", "2024-01-01", &[]);
        let other_tag = make_violation_id(&draft, &member, "max_shifts_week", "2024-01-01", &[]);
        let other_window = make_violation_id(&draft, &member, "max_hours_week", "2024-01-08", &[]);
        assert_ne!(base, other_tag);
        assert_ne!(base, other_window);
    }

    #[test]
    fn entity_ids_do_not_cross_compare_textually() {
        // Wrapper types keep member and shift ids from being swapped at
        // compile time; the string payloads themselves are opaque.
        let m = MemberId::from("x");
        assert_eq!(m.as_str(), "x");
        assert_eq!(m.to_string(), "x");
    }
}
