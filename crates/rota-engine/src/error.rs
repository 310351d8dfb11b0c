// SPDX-License-Identifier: Apache-2.0
//! Mutation-boundary errors.

use rota_model::{AssignmentId, MemberId, OverrideId, RuleId, RuleKind, ShiftTypeId, Unit};
use thiserror::Error;

/// Errors returned by [`crate::ComplianceIndex`] mutation operations.
///
/// Every variant is a validation failure rejected at the boundary: when a
/// mutation returns an error, engine state is unchanged. Computation
/// faults during evaluation are never raised as errors; they land in the
/// affected member's violation set as `EvaluationFailed` entries so one
/// bad record cannot block reads for other members.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The referenced member is not in the roster directory.
    #[error("unknown member: {0}")]
    UnknownMember(MemberId),
    /// The referenced shift type is not in the roster directory.
    #[error("unknown shift type: {0}")]
    UnknownShiftType(ShiftTypeId),
    /// The referenced rule does not exist.
    #[error("unknown rule: {0}")]
    UnknownRule(RuleId),
    /// The referenced override does not exist.
    #[error("unknown override: {0}")]
    UnknownOverride(OverrideId),
    /// The referenced assignment does not exist.
    #[error("unknown assignment: {0}")]
    UnknownAssignment(AssignmentId),
    /// An assignment with this id is already recorded; moves mutate in
    /// place, re-recording does not.
    #[error("duplicate assignment id: {0}")]
    DuplicateAssignment(AssignmentId),
    /// A rule was supplied with a unit other than its kind's canonical one.
    #[error("rule unit mismatch: {kind} thresholds are expressed in {expected}, got {supplied}")]
    RuleUnitMismatch {
        /// Constraint family of the offending rule.
        kind: RuleKind,
        /// The kind's canonical unit.
        expected: Unit,
        /// The unit actually supplied.
        supplied: Unit,
    },
    /// An override's unit does not match its referenced rule's unit.
    #[error("override unit mismatch: rule {rule} uses {expected}, override supplied {supplied}")]
    OverrideUnitMismatch {
        /// The referenced rule.
        rule: RuleId,
        /// The rule's unit.
        expected: Unit,
        /// The unit actually supplied.
        supplied: Unit,
    },
}
