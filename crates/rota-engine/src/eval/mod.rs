// SPDX-License-Identifier: Apache-2.0
//! Violation evaluators.
//!
//! One pure function per rule kind, each consuming a member's sorted
//! timeline and returning violations in stable order (window start date,
//! then implicated assignment ids). Comparisons are done in whole minutes
//! wherever the inputs allow it, so float accumulation can never tip an
//! exactly-at-threshold week over the line.

mod hours;
mod nights;
mod rest;
mod weekend;

use chrono::NaiveDate;

use rota_model::{
    make_violation_id, AssignmentId, DraftId, Finding, MemberId, RuleId, RuleKind, Severity,
    Violation,
};

use crate::config::EngineConfig;
use crate::resolver::EffectiveRule;
use crate::timeline::ShiftSpan;

/// Shared evaluation inputs: who and where, plus the engine tunables.
#[derive(Clone, Copy)]
pub(crate) struct EvalContext<'a> {
    pub draft: &'a DraftId,
    pub member: &'a MemberId,
    pub config: &'a EngineConfig,
}

/// Evaluates one effective rule over a member's timeline.
pub(crate) fn evaluate(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    if spans.is_empty() {
        return Vec::new();
    }
    match rule.kind {
        RuleKind::MaxHoursWeek => hours::max_hours_week(rule, spans, ctx),
        RuleKind::MaxHoursFortnight => hours::max_hours_fortnight(rule, spans, ctx),
        RuleKind::MinRestHours => rest::min_rest_hours(rule, spans, ctx),
        RuleKind::MaxConsecutiveNights => nights::max_consecutive_nights(rule, spans, ctx),
        RuleKind::MaxShiftsWeek => hours::max_shifts_week(rule, spans, ctx),
        RuleKind::MaxWeekendFrequency => weekend::max_weekend_frequency(rule, spans, ctx),
    }
}

/// Detects pairs of assignments overlapping in wall-clock time.
///
/// Structural check, independent of any rule: runs on every recompute.
/// The sweep keeps every still-open predecessor, so all overlapping
/// pairs are reported, sibling shifts engulfed by a longer one included.
pub(crate) fn detect_overlaps(spans: &[ShiftSpan], ctx: &EvalContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut open: Vec<&ShiftSpan> = Vec::new();
    for span in spans {
        // Spans are sorted by start, so anything ending at or before this
        // start is closed for every later span as well.
        open.retain(|prev| prev.end > span.start);
        for prev in open.iter().copied() {
            violations.push(overlap(prev, span, ctx));
        }
        open.push(span);
    }
    violations
}

fn overlap(earlier: &ShiftSpan, later: &ShiftSpan, ctx: &EvalContext<'_>) -> Violation {
    let mut ids = vec![earlier.assignment_id.clone(), later.assignment_id.clone()];
    ids.sort_unstable();
    let window_start = earlier.date.min(later.date);
    let id = make_violation_id(
        ctx.draft,
        ctx.member,
        "overlap",
        &window_start.to_string(),
        &ids,
    );
    Violation {
        id,
        member_id: ctx.member.clone(),
        draft_id: ctx.draft.clone(),
        severity: Severity::Error,
        message: format!(
            "Overlapping shifts on {window_start} ({} and {})",
            ids[0], ids[1]
        ),
        finding: Finding::Overlap {
            window_start,
            assignment_ids: ids,
        },
    }
}

/// Builds a breach violation with a deterministic id.
fn breach(
    rule: &EffectiveRule,
    ctx: &EvalContext<'_>,
    window_start: NaiveDate,
    mut assignment_ids: Vec<AssignmentId>,
    actual: f64,
    message: String,
) -> Violation {
    assignment_ids.sort_unstable();
    assignment_ids.dedup();
    let id = make_violation_id(
        ctx.draft,
        ctx.member,
        rule.kind.key(),
        &window_start.to_string(),
        &assignment_ids,
    );
    Violation {
        id,
        member_id: ctx.member.clone(),
        draft_id: ctx.draft.clone(),
        severity: rule.severity,
        message,
        finding: Finding::Breach {
            rule_id: rule.rule_id.clone(),
            kind: rule.kind,
            limit: rule.limit,
            actual,
            window_start,
            assignment_ids,
        },
    }
}

/// Builds an evaluation-failure entry with a deterministic id.
pub(crate) fn eval_failed(
    ctx: &EvalContext<'_>,
    rule_id: Option<RuleId>,
    detail: String,
) -> Violation {
    let tag = rule_id
        .as_ref()
        .map_or_else(|| "eval_failed".to_owned(), |r| format!("eval_failed:{r}"));
    let id = make_violation_id(ctx.draft, ctx.member, &tag, &detail, &[]);
    Violation {
        id,
        member_id: ctx.member.clone(),
        draft_id: ctx.draft.clone(),
        severity: Severity::Error,
        message: format!("Evaluation failed: {detail}"),
        finding: Finding::EvaluationFailed { rule_id, detail },
    }
}

/// Exact minute length of a span.
fn span_minutes(span: &ShiftSpan) -> i64 {
    (span.end - span.start).num_minutes()
}

/// Renders a quantity the way the product does: integers bare, anything
/// fractional with one decimal (`55 hours`, `9.5 hours`).
pub(crate) fn fmt_quantity(v: f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = rounded as i64;
        format!("{whole}")
    } else {
        format!("{v:.1}")
    }
}
