// SPDX-License-Identifier: Apache-2.0
//! Draft-scoped rule overrides.

use serde::{Deserialize, Serialize};

use crate::ident::{DraftId, MemberId, OverrideId, RuleId};
use crate::rule::Unit;

/// Who produced an override.
///
/// Data only: the engine treats user- and assistant-authored overrides
/// identically. The tag exists so hosts can render provenance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideOrigin {
    /// Created by a roster editor.
    User,
    /// Created by an external scheduling assistant.
    Ai,
}

/// A per-draft, per-member replacement threshold for one rule.
///
/// Applies only within its draft. At most one override is active per
/// (draft, rule, member) triple; on conflict the most recently upserted
/// wins. An override whose rule has been deleted is void and ignored.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RuleOverride {
    /// Unique identifier.
    pub id: OverrideId,
    /// Rule being overridden.
    pub rule_id: RuleId,
    /// Member the replacement value applies to.
    pub member_id: MemberId,
    /// Draft the override is scoped to.
    pub draft_id: DraftId,
    /// Replacement threshold, in `unit`.
    pub value: f64,
    /// Threshold unit; must match the referenced rule's unit.
    pub unit: Unit,
    /// Free-text justification.
    pub reason: String,
    /// Provenance tag.
    pub origin: OverrideOrigin,
}
