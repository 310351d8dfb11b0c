// SPDX-License-Identifier: Apache-2.0
//! Assignment occurrences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ident::{AssignmentId, DraftId, MemberId, ShiftTypeId};

/// One member working one shift-type occurrence on one calendar day.
///
/// The date is a calendar day, not a timestamp: the concrete start and end
/// instants are derived by combining the date with the shift type's times
/// of day. Moves (date, shift type, or member reassignment) retain the
/// assignment id.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier, stable across moves.
    pub id: AssignmentId,
    /// Member working the shift.
    pub member_id: MemberId,
    /// Shift-type template being worked.
    pub shift_type_id: ShiftTypeId,
    /// Calendar day the shift starts on.
    pub date: NaiveDate,
    /// Draft this assignment belongs to.
    pub draft_id: DraftId,
}
