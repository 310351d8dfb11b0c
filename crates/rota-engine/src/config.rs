// SPDX-License-Identifier: Apache-2.0
//! Engine configuration.

use chrono::NaiveDate;
use rota_model::{TimeOfDay, TimeWindow};

/// Minutes-since-midnight constructor that cannot fail for literals.
fn tod(minutes: u16) -> TimeOfDay {
    TimeOfDay::from_minutes_clamped(minutes)
}

/// Tunables the compliance evaluators depend on.
///
/// Both fields resolve deliberate product ambiguities: the night-shift
/// window has no authoritative definition yet, and "per fortnight" limits
/// are anchored to a fixed date rather than rolling so evaluation stays
/// deterministic. Hosts override the defaults per roster as needed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EngineConfig {
    /// A shift counts as a night shift when its start time of day falls
    /// in this (possibly midnight-wrapping) window.
    pub night_window: TimeWindow,
    /// Anchor for calendar fortnights: day zero of fortnight bucket zero.
    /// Typically the roster's start date.
    pub roster_start: NaiveDate,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // 20:00 inclusive through 06:00 exclusive.
            night_window: TimeWindow::new(tod(20 * 60), tod(6 * 60)),
            // A Monday, so default fortnights line up with ISO weeks.
            roster_start: NaiveDate::from_ymd_opt(1970, 1, 5).unwrap_or(NaiveDate::MIN),
        }
    }
}
