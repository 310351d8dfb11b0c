// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use rota_engine::ComplianceIndex;
use rota_fixtures::{assignment, date, demo_roster, rule, shift_type};
use rota_model::{DraftId, Finding, MemberId, RuleKind, RuleScope};

#[test]
fn hours_split_across_week_boundary_do_not_sum() {
    let mut roster = demo_roster();
    // 07:00-22:00: a 15-hour long-day shift.
    roster.insert_shift_type(shift_type("t-long", "LD", "07:00", "22:00"));
    let mut index = ComplianceIndex::new(roster);
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();

    // 30 hours in ISO week 1 (Mon 1st, Tue 2nd) and 30 in week 2
    // (Mon 8th, Tue 9th): 60 in total, but no single week exceeds 50.
    for (id, day) in [("a1", 1), ("a2", 2), ("a3", 8), ("a4", 9)] {
        index
            .record_assignment(assignment(id, "m1", "t-long", date(2024, 1, day), "d1"))
            .unwrap();
    }

    assert!(index.get_violations(&DraftId::from("d1")).is_empty());
}

#[test]
fn week_over_limit_reports_with_its_assignments() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();

    // Five 11-hour nights Mon-Fri: 55 hours in one ISO week.
    for day in 1..=5 {
        index
            .record_assignment(assignment(
                &format!("a{day}"),
                "m1",
                "t3",
                date(2024, 1, day),
                "d1",
            ))
            .unwrap();
    }

    let violations = index.member_violations(&DraftId::from("d1"), &MemberId::from("m1"));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Exceeds max 50 hours/week (55 hours)");
    match &violations[0].finding {
        Finding::Breach {
            window_start,
            assignment_ids,
            ..
        } => {
            assert_eq!(*window_start, date(2024, 1, 1));
            assert_eq!(assignment_ids.len(), 5);
        }
        other => panic!("expected Breach, got {other:?}"),
    }
}

#[test]
fn zero_threshold_is_always_violated_when_work_exists() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 0.0, RuleScope::All))
        .unwrap();
    index
        .record_assignment(assignment("a1", "m1", "t1", date(2024, 1, 1), "d1"))
        .unwrap();

    let violations = index.get_violations(&DraftId::from("d1"));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Exceeds max 0 hours/week (8 hours)");
}

#[test]
fn fortnight_buckets_follow_the_roster_anchor() {
    let mut roster = demo_roster();
    roster.insert_shift_type(shift_type("t-long", "LD", "07:00", "22:00"));
    let config = rota_engine::EngineConfig {
        roster_start: date(2024, 1, 1),
        ..rota_engine::EngineConfig::default()
    };
    let mut index = ComplianceIndex::with_config(roster, config);
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursFortnight, 80.0, RuleScope::All))
        .unwrap();

    // Fortnights are anchored at the roster start, so Jan 1-14 is one
    // bucket. Six 15-hour days inside it total 90 hours.
    for (id, day) in [
        ("a1", 1),
        ("a2", 2),
        ("a3", 3),
        ("a4", 8),
        ("a5", 9),
        ("a6", 10),
    ] {
        index
            .record_assignment(assignment(id, "m1", "t-long", date(2024, 1, day), "d1"))
            .unwrap();
    }

    let violations = index.member_violations(&DraftId::from("d1"), &MemberId::from("m1"));
    assert_eq!(violations.len(), 1, "{violations:?}");
    assert_eq!(
        violations[0].message,
        "Exceeds max 80 hours/fortnight (90 hours)"
    );

    // The same 90 hours split across two fortnights is fine.
    for (id, day) in [("a4", 8), ("a5", 9), ("a6", 10)] {
        index.remove_assignment(&id.into()).unwrap();
        index
            .record_assignment(assignment(id, "m1", "t-long", date(2024, 1, day + 14), "d1"))
            .unwrap();
    }
    assert!(index.get_violations(&DraftId::from("d1")).is_empty());
}

#[test]
fn shift_count_cap_reports_per_week() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxShiftsWeek, 5.0, RuleScope::All))
        .unwrap();

    // Six day shifts Mon-Sat in one ISO week.
    for day in 1..=6 {
        index
            .record_assignment(assignment(
                &format!("a{day}"),
                "m1",
                "t1",
                date(2024, 1, day),
                "d1",
            ))
            .unwrap();
    }

    let violations = index.member_violations(&DraftId::from("d1"), &MemberId::from("m1"));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Exceeds max 5 shifts/week (6 shifts)");
}
