// SPDX-License-Identifier: Apache-2.0
//! One-line constructors for assignments, rules, and overrides.

use chrono::NaiveDate;

use rota_model::{
    Assignment, AssignmentId, DraftId, MemberId, OverrideId, OverrideOrigin, Rule, RuleId,
    RuleKind, RuleOverride, RuleScope, Severity, ShiftTypeId, Unit,
};

/// Builds a date from literals; panics on invalid components.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid literals")
}

/// Builds an assignment.
pub fn assignment(id: &str, member: &str, shift: &str, day: NaiveDate, draft: &str) -> Assignment {
    Assignment {
        id: AssignmentId::from(id),
        member_id: MemberId::from(member),
        shift_type_id: ShiftTypeId::from(shift),
        date: day,
        draft_id: DraftId::from(draft),
    }
}

/// Builds an error-severity rule with its kind's canonical unit.
pub fn rule(id: &str, kind: RuleKind, value: f64, scope: RuleScope) -> Rule {
    rule_with_severity(id, kind, value, scope, Severity::Error)
}

/// Builds a rule with explicit severity.
pub fn rule_with_severity(
    id: &str,
    kind: RuleKind,
    value: f64,
    scope: RuleScope,
    severity: Severity,
) -> Rule {
    Rule {
        id: RuleId::from(id),
        kind,
        value,
        unit: kind.unit(),
        severity,
        scope,
    }
}

/// Builds an hours-unit override authored by a user.
pub fn hours_override(id: &str, rule: &str, member: &str, draft: &str, value: f64) -> RuleOverride {
    RuleOverride {
        id: OverrideId::from(id),
        rule_id: RuleId::from(rule),
        member_id: MemberId::from(member),
        draft_id: DraftId::from(draft),
        value,
        unit: Unit::Hours,
        reason: "fixture".to_owned(),
        origin: OverrideOrigin::User,
    }
}
