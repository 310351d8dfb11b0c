// SPDX-License-Identifier: Apache-2.0
//! Member timelines.
//!
//! Evaluators work on resolved shift occurrences, not raw assignments: a
//! `ShiftSpan` carries concrete start/end instants (overnight wrap pushes
//! the end into the next day), the duration in fractional hours, and the
//! night flag. Spans are sorted by (start, assignment id) so every
//! downstream computation sees the same order.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use rota_model::{Assignment, AssignmentId, ShiftTypeId, TimeOfDay};

use crate::config::EngineConfig;
use crate::directory::RosterDirectory;

/// One resolved shift occurrence on a member's timeline.
#[derive(Clone, PartialEq, Debug)]
pub struct ShiftSpan {
    /// Assignment this span was resolved from.
    pub assignment_id: AssignmentId,
    /// Shift type worked.
    pub shift_type_id: ShiftTypeId,
    /// Calendar day the shift starts on.
    pub date: NaiveDate,
    /// Concrete start instant.
    pub start: NaiveDateTime,
    /// Concrete end instant; after `start` by construction.
    pub end: NaiveDateTime,
    /// Shift length in fractional hours.
    pub hours: f64,
    /// Whether the start time falls in the configured night window.
    pub night: bool,
}

/// An assignment the timeline could not resolve.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct TimelineFault {
    /// The unresolvable assignment.
    pub assignment_id: AssignmentId,
    /// Human-readable cause.
    pub detail: String,
}

/// A member's resolved, sorted timeline plus any resolution faults.
#[derive(Default, Debug)]
pub(crate) struct Timeline {
    pub spans: Vec<ShiftSpan>,
    pub faults: Vec<TimelineFault>,
}

fn naive_time(t: TimeOfDay) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(u32::from(t.hour()), u32::from(t.minute()), 0)
}

/// Resolves `assignments` (one member, one draft) against the directory.
///
/// Assignments whose shift type is missing from the directory, or whose
/// times of day cannot be represented, become faults rather than panics;
/// the remaining spans still evaluate normally.
pub(crate) fn build_timeline<D: RosterDirectory>(
    assignments: &[&Assignment],
    directory: &D,
    config: &EngineConfig,
) -> Timeline {
    let mut timeline = Timeline::default();
    for assignment in assignments {
        let Some(shift) = directory.shift_type(&assignment.shift_type_id) else {
            timeline.faults.push(TimelineFault {
                assignment_id: assignment.id.clone(),
                detail: format!("shift type {} not in directory", assignment.shift_type_id),
            });
            continue;
        };
        let Some(start_time) = naive_time(shift.start) else {
            timeline.faults.push(TimelineFault {
                assignment_id: assignment.id.clone(),
                detail: format!("unrepresentable start time for shift type {}", shift.id),
            });
            continue;
        };
        let start = assignment.date.and_time(start_time);
        let hours = shift.duration_hours();
        // Durations are whole minutes by construction (times of day have
        // minute resolution), so the round-trip through f64 is exact.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = (hours * 60.0).round() as i64;
        let end = start + Duration::minutes(minutes);
        timeline.spans.push(ShiftSpan {
            assignment_id: assignment.id.clone(),
            shift_type_id: shift.id.clone(),
            date: assignment.date,
            start,
            end,
            hours,
            night: config.night_window.contains(shift.start),
        });
    }
    timeline
        .spans
        .sort_by(|a, b| (a.start, &a.assignment_id).cmp(&(b.start, &b.assignment_id)));
    timeline
        .faults
        .sort_by(|a, b| a.assignment_id.cmp(&b.assignment_id));
    timeline
}
