// SPDX-License-Identifier: Apache-2.0
//! Rest-gap evaluator.

use rota_model::Violation;

use crate::resolver::EffectiveRule;
use crate::timeline::ShiftSpan;

use super::{breach, fmt_quantity, EvalContext};

/// `min_rest_hours`: for every pair of temporally adjacent assignments,
/// the gap between the earlier end and the later start must reach the
/// threshold. A negative gap (overlap) trivially violates; the structural
/// overlap finding is reported separately by the index sweep.
pub(super) fn min_rest_hours(
    rule: &EffectiveRule,
    spans: &[ShiftSpan],
    ctx: &EvalContext<'_>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for pair in spans.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        let gap_minutes = (later.start - earlier.end).num_minutes();
        if (gap_minutes as f64) < rule.limit * 60.0 {
            let actual = gap_minutes.max(0) as f64 / 60.0;
            let ids = vec![earlier.assignment_id.clone(), later.assignment_id.clone()];
            let message = format!(
                "Less than {} hours rest between shifts ({} hours)",
                fmt_quantity(rule.limit),
                fmt_quantity(actual),
            );
            violations.push(breach(rule, ctx, earlier.date, ids, actual, message));
        }
    }
    violations
}
