// SPDX-License-Identifier: Apache-2.0
//! Computed compliance findings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ident::{AssignmentId, DraftId, MemberId, RuleId, ViolationId};
use crate::rule::{RuleKind, Severity};

/// What a violation detected.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Finding {
    /// An effective rule was exceeded over one window.
    Breach {
        /// The rule that was breached (post-override identity).
        rule_id: RuleId,
        /// Constraint family.
        kind: RuleKind,
        /// Effective threshold the member was evaluated against.
        limit: f64,
        /// Observed value.
        actual: f64,
        /// First day of the offending window.
        window_start: NaiveDate,
        /// Implicated assignments, sorted by id.
        assignment_ids: Vec<AssignmentId>,
    },
    /// Two assignments for the same member overlap in wall-clock time.
    ///
    /// Not tied to any rule: overlap is structurally invalid and is
    /// reported whenever present, rule set or no rule set.
    Overlap {
        /// Day the earlier of the two shifts starts on.
        window_start: NaiveDate,
        /// The two overlapping assignments, sorted by id.
        assignment_ids: Vec<AssignmentId>,
    },
    /// Evaluation could not run for this member; surfaced as data so one
    /// bad record never blocks reads for other members.
    EvaluationFailed {
        /// Rule being evaluated when the fault occurred, if any.
        rule_id: Option<RuleId>,
        /// Human-readable fault description.
        detail: String,
    },
}

/// One detected breach of an effective rule (or structural fault),
/// referencing the assignments that caused it.
///
/// Violations are regenerated on demand and never independently mutated.
/// Their ids are deterministic over the finding's coordinates, so an
/// unchanged roster always reproduces an identical violation list.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Violation {
    /// Stable, content-derived identifier.
    pub id: ViolationId,
    /// Member the finding is about.
    pub member_id: MemberId,
    /// Draft the finding was evaluated under.
    pub draft_id: DraftId,
    /// Hard block vs advisory.
    pub severity: Severity,
    /// Renderable description (e.g. `Exceeds max 50 hours/week (55 hours)`).
    pub message: String,
    /// Structured detail.
    pub finding: Finding,
}

impl Violation {
    /// The assignments implicated by this finding, if any.
    #[must_use]
    pub fn assignment_ids(&self) -> &[AssignmentId] {
        match &self.finding {
            Finding::Breach { assignment_ids, .. } | Finding::Overlap { assignment_ids, .. } => {
                assignment_ids
            }
            Finding::EvaluationFailed { .. } => &[],
        }
    }

    /// First day of the finding's window, when the finding has one.
    #[must_use]
    pub fn window_start(&self) -> Option<NaiveDate> {
        match &self.finding {
            Finding::Breach { window_start, .. } | Finding::Overlap { window_start, .. } => {
                Some(*window_start)
            }
            Finding::EvaluationFailed { .. } => None,
        }
    }
}
