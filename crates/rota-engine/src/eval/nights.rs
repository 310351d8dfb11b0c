// SPDX-License-Identifier: Apache-2.0
//! Consecutive-night-run evaluator.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use rota_model::{AssignmentId, Violation};

use crate::resolver::EffectiveRule;
use crate::timeline::ShiftSpan;

use super::{breach, fmt_quantity, EvalContext};

/// `max_consecutive_nights`: count maximal runs of consecutive calendar
/// days that each contain at least one night shift; any run longer than
/// the threshold emits one violation for the whole run.
pub(super) fn max_consecutive_nights(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    // Multiple night shifts on one date collapse into a single run day but
    // keep all their assignments on the finding.
    let mut nights: BTreeMap<NaiveDate, Vec<AssignmentId>> = BTreeMap::new();
    for span in spans.iter().filter(|s| s.night) {
        nights
            .entry(span.date)
            .or_default()
            .push(span.assignment_id.clone());
    }

    let mut violations = Vec::new();
    let mut run_start: Option<NaiveDate> = None;
    let mut run_days: u32 = 0;
    let mut run_ids: Vec<AssignmentId> = Vec::new();
    let mut prev: Option<NaiveDate> = None;

    let mut flush = |start: Option<NaiveDate>, days: u32, ids: &mut Vec<AssignmentId>| {
        if let Some(start) = start {
            if f64::from(days) > rule.limit {
                let message = format!(
                    "Exceeds max {} consecutive nights ({days} nights)",
                    fmt_quantity(rule.limit),
                );
                violations.push(breach(
                    rule,
                    ctx,
                    start,
                    std::mem::take(ids),
                    f64::from(days),
                    message,
                ));
            }
        }
        ids.clear();
    };

    for (date, ids) in &nights {
        let consecutive = prev.is_some_and(|p| *date - p == Duration::days(1));
        if !consecutive {
            flush(run_start, run_days, &mut run_ids);
            run_start = Some(*date);
            run_days = 0;
        }
        run_days += 1;
        run_ids.extend(ids.iter().cloned());
        prev = Some(*date);
    }
    flush(run_start, run_days, &mut run_ids);
    violations
}
