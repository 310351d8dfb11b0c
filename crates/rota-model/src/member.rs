// SPDX-License-Identifier: Apache-2.0
//! Staff members and their roles.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ident::MemberId;

/// Staff role used for rule scoping and shift eligibility.
///
/// The well-known clinical roles are first-class variants; anything else
/// round-trips through [`Role::Other`] so organizations can define their
/// own without a schema change. Serialized as a plain string either way.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Doctor.
    Doctor,
    /// Nurse.
    Nurse,
    /// Registrar.
    Registrar,
    /// Consultant.
    Consultant,
    /// Intern.
    Intern,
    /// Administrative staff.
    Admin,
    /// Organization-defined role outside the built-in set.
    Other(String),
}

impl Role {
    /// Canonical display/serialization name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Doctor => "Doctor",
            Self::Nurse => "Nurse",
            Self::Registrar => "Registrar",
            Self::Consultant => "Consultant",
            Self::Intern => "Intern",
            Self::Admin => "Admin",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Doctor" => Self::Doctor,
            "Nurse" => Self::Nurse,
            "Registrar" => Self::Registrar,
            "Consultant" => Self::Consultant,
            "Intern" => Self::Intern,
            "Admin" => Self::Admin,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// A staff entity, owned by the organization.
///
/// Assignments and overrides reference members by id only; the engine
/// receives members through a read-only directory and never mutates them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Role, used for rule scoping.
    pub role: Role,
    /// Contracted ceiling on shifts per week.
    pub max_shifts_per_week: u32,
    /// Fractional full-time-equivalent weight.
    pub fte: f64,
    /// Free-form scheduling tags (e.g. "No Nights").
    #[serde(default)]
    pub tags: BTreeSet<String>,
}
