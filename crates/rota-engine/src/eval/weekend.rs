// SPDX-License-Identifier: Apache-2.0
//! Weekend-frequency evaluator.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use rota_model::{AssignmentId, Violation};

use crate::calendar::weekend_key;
use crate::resolver::EffectiveRule;
use crate::timeline::ShiftSpan;

use super::{breach, fmt_quantity, EvalContext};

/// Rolling-month window length in days: four weekend cycles.
const MONTH_WINDOW_DAYS: i64 = 28;

/// `max_weekend_frequency`: count distinct worked weekends (Sat+Sun
/// pairs, keyed by their Saturday) inside a rolling 28-day window. When a
/// window exceeds the threshold one violation covers it, and the scan
/// resumes past the window so overlapping windows cannot duplicate the
/// same finding.
pub(super) fn max_weekend_frequency(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    let mut weekends: BTreeMap<NaiveDate, Vec<AssignmentId>> = BTreeMap::new();
    for span in spans {
        if let Some(key) = weekend_key(span.date) {
            weekends
                .entry(key)
                .or_default()
                .push(span.assignment_id.clone());
        }
    }
    let keys: Vec<NaiveDate> = weekends.keys().copied().collect();

    let mut violations = Vec::new();
    let mut i = 0;
    while i < keys.len() {
        let window_end = keys[i] + Duration::days(MONTH_WINDOW_DAYS - 1);
        let mut j = i;
        while j < keys.len() && keys[j] <= window_end {
            j += 1;
        }
        let count = j - i;
        if count as f64 > rule.limit {
            let ids: Vec<AssignmentId> = keys[i..j]
                .iter()
                .filter_map(|k| weekends.get(k))
                .flatten()
                .cloned()
                .collect();
            let message = format!(
                "Exceeds max {} weekends/month ({count} weekends)",
                fmt_quantity(rule.limit),
            );
            violations.push(breach(rule, ctx, keys[i], ids, count as f64, message));
            i = j;
        } else {
            i += 1;
        }
    }
    violations
}
