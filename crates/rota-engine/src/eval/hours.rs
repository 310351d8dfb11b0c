// SPDX-License-Identifier: Apache-2.0
//! Window-bucketed evaluators: weekly hours, fortnightly hours, weekly
//! shift counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use rota_model::Violation;

use crate::calendar::{fortnight_start, week_start};
use crate::resolver::EffectiveRule;
use crate::timeline::ShiftSpan;

use super::{breach, fmt_quantity, span_minutes, EvalContext};

fn bucket_by<'a>(
    spans: &'a [ShiftSpan],
    key: impl Fn(NaiveDate) -> NaiveDate,
) -> BTreeMap<NaiveDate, Vec<&'a ShiftSpan>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&ShiftSpan>> = BTreeMap::new();
    for span in spans {
        buckets.entry(key(span.date)).or_default().push(span);
    }
    buckets
}

fn hours_over_windows(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
    key: impl Fn(NaiveDate) -> NaiveDate,
    window_label: &str,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (window, members) in bucket_by(spans, key) {
        let total_minutes: i64 = members.iter().map(|s| span_minutes(s)).sum();
        let actual = total_minutes as f64 / 60.0;
        if total_minutes as f64 > rule.limit * 60.0 {
            let ids = members.iter().map(|s| s.assignment_id.clone()).collect();
            let message = format!(
                "Exceeds max {} hours/{window_label} ({} hours)",
                fmt_quantity(rule.limit),
                fmt_quantity(actual),
            );
            violations.push(breach(rule, ctx, window, ids, actual, message));
        }
    }
    violations
}

/// `max_hours_week`: sum shift durations per ISO calendar week.
pub(super) fn max_hours_week(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    hours_over_windows(rule, spans, ctx, week_start, "week")
}

/// `max_hours_fortnight`: sum shift durations per calendar fortnight
/// anchored at the configured roster start.
pub(super) fn max_hours_fortnight(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    let anchor = ctx.config.roster_start;
    hours_over_windows(rule, spans, ctx, |d| fortnight_start(d, anchor), "fortnight")
}

/// `max_shifts_week`: count assignments per ISO calendar week.
pub(super) fn max_shifts_week(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (window, members) in bucket_by(spans, week_start) {
        let count = members.len();
        if count as f64 > rule.limit {
            let ids = members.iter().map(|s| s.assignment_id.clone()).collect();
            let message = format!(
                "Exceeds max {} shifts/week ({count} shifts)",
                fmt_quantity(rule.limit),
            );
            violations.push(breach(rule, ctx, window, ids, count as f64, message));
        }
    }
    violations
}
