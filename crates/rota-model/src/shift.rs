// SPDX-License-Identifier: Apache-2.0
//! Shift-type templates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ident::ShiftTypeId;
use crate::member::Role;
use crate::time::TimeOfDay;

/// A template describing a recurring shift slot.
///
/// An end time at or before the start time means the shift runs past
/// midnight into the next calendar day. `color` is presentation data the
/// engine carries but never reads.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique identifier.
    pub id: ShiftTypeId,
    /// Short code shown on calendar cells (e.g. `D-AM`).
    pub code: String,
    /// Display name (e.g. "Day Morning").
    pub name: String,
    /// Presentation color, engine-irrelevant.
    pub color: String,
    /// Start time of day.
    pub start: TimeOfDay,
    /// End time of day; `end <= start` wraps overnight.
    pub end: TimeOfDay,
    /// Roles allowed to work this shift.
    #[serde(default)]
    pub allowed_roles: BTreeSet<Role>,
}

impl ShiftType {
    /// Shift length in fractional hours, with overnight wrap applied.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.start.span_hours(self.end)
    }

    /// Whether the shift crosses midnight.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night_shift() -> ShiftType {
        ShiftType {
            id: ShiftTypeId::from("t3"),
            code: "D-ND".to_owned(),
            name: "Day Night".to_owned(),
            color: "#8b5cf6".to_owned(),
            start: match TimeOfDay::new(21, 0) {
                Some(t) => t,
                None => unreachable!(),
            },
            end: match TimeOfDay::new(8, 0) {
                Some(t) => t,
                None => unreachable!(),
            },
            allowed_roles: BTreeSet::new(),
        }
    }

    #[test]
    fn overnight_duration_is_positive() {
        let shift = night_shift();
        assert!(shift.is_overnight());
        assert!((shift.duration_hours() - 11.0).abs() < 1e-9);
    }
}
