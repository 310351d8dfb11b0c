// SPDX-License-Identifier: Apache-2.0
//! Roster-level compliance rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ident::RuleId;
use crate::member::Role;

/// The six supported constraint families.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Cap on worked hours per ISO calendar week.
    MaxHoursWeek,
    /// Cap on worked hours per calendar fortnight.
    MaxHoursFortnight,
    /// Minimum rest gap between temporally adjacent shifts.
    MinRestHours,
    /// Cap on consecutive calendar days with a night shift.
    MaxConsecutiveNights,
    /// Cap on assignment count per ISO calendar week.
    MaxShiftsWeek,
    /// Cap on worked weekends within a rolling month.
    MaxWeekendFrequency,
}

impl RuleKind {
    /// All kinds, in canonical evaluation order.
    pub const ALL: [Self; 6] = [
        Self::MaxHoursWeek,
        Self::MaxHoursFortnight,
        Self::MinRestHours,
        Self::MaxConsecutiveNights,
        Self::MaxShiftsWeek,
        Self::MaxWeekendFrequency,
    ];

    /// Stable snake_case key, used in serialized form and violation ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::MaxHoursWeek => "max_hours_week",
            Self::MaxHoursFortnight => "max_hours_fortnight",
            Self::MinRestHours => "min_rest_hours",
            Self::MaxConsecutiveNights => "max_consecutive_nights",
            Self::MaxShiftsWeek => "max_shifts_week",
            Self::MaxWeekendFrequency => "max_weekend_frequency",
        }
    }

    /// Human label as the roster settings UI names it.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MaxHoursWeek => "Max Hours per Week",
            Self::MaxHoursFortnight => "Max Hours per Fortnight",
            Self::MinRestHours => "Min Rest Between Shifts",
            Self::MaxConsecutiveNights => "Max Consecutive Night Shifts",
            Self::MaxShiftsWeek => "Max Shifts per Week",
            Self::MaxWeekendFrequency => "Max Weekend Frequency",
        }
    }

    /// Canonical unit for thresholds of this kind.
    #[must_use]
    pub fn unit(self) -> Unit {
        match self {
            Self::MaxHoursWeek | Self::MaxHoursFortnight | Self::MinRestHours => Unit::Hours,
            Self::MaxConsecutiveNights | Self::MaxShiftsWeek => Unit::Shifts,
            Self::MaxWeekendFrequency => Unit::PerMonth,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unit a rule threshold is expressed in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Fractional hours.
    Hours,
    /// Shift occurrences.
    Shifts,
    /// Occurrences per rolling month.
    PerMonth,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Shifts => "shifts",
            Self::PerMonth => "per month",
        })
    }
}

/// Whether a breached rule blocks or merely advises.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Hard block.
    Error,
    /// Advisory.
    Warning,
}

/// Who a rule applies to.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// Every member of the roster.
    All,
    /// Only members holding the given role.
    Role(Role),
}

impl RuleScope {
    /// Whether the scope covers a member with the given role.
    #[must_use]
    pub fn covers(&self, role: &Role) -> bool {
        match self {
            Self::All => true,
            Self::Role(scoped) => scoped == role,
        }
    }
}

/// An atomic constraint definition, global to the roster.
///
/// At most one rule per (kind, scope) pair is enforced at evaluation time;
/// when duplicates exist the most recently upserted wins. Draft overrides
/// can replace the threshold per member without touching the rule itself.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier.
    pub id: RuleId,
    /// Constraint family.
    pub kind: RuleKind,
    /// Numeric threshold, in `unit`.
    pub value: f64,
    /// Threshold unit; must match `kind.unit()` for the rule to be valid.
    pub unit: Unit,
    /// Hard block vs advisory.
    pub severity: Severity,
    /// Who the rule applies to.
    pub scope: RuleScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_keys_are_snake_case_and_unique() {
        let keys: Vec<&str> = RuleKind::ALL.iter().map(|k| k.key()).collect();
        for key in &keys {
            assert_eq!(*key, key.to_lowercase());
        }
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn scope_covers_role_and_all() {
        assert!(RuleScope::All.covers(&Role::Nurse));
        assert!(RuleScope::Role(Role::Doctor).covers(&Role::Doctor));
        assert!(!RuleScope::Role(Role::Doctor).covers(&Role::Nurse));
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&RuleKind::MinRestHours).unwrap_or_default();
        assert_eq!(json, "\"min_rest_hours\"");
    }
}
