// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]
use std::cell::Cell;
use std::rc::Rc;

use rota_engine::{ComplianceIndex, EngineError, RosterDirectory};
use rota_fixtures::{assignment, date, demo_roster, hours_override, member, rule, shift_type};
use rota_model::{
    AssignmentId, DraftId, Finding, MemberId, OverrideId, Role, RuleKind, RuleScope, ShiftTypeId,
    Unit,
};

fn heavy_week(index: &mut ComplianceIndex<rota_engine::InMemoryRoster>) {
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
}

#[test]
fn removing_an_assignment_clears_violations_that_referenced_it() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();
    heavy_week(&mut index);

    let before = index.get_violations(&DraftId::from("d1"));
    assert_eq!(before.len(), 1);
    assert!(before[0]
        .assignment_ids()
        .contains(&AssignmentId::from("a3")));

    // Dropping one night leaves 44 hours: under the cap.
    index.remove_assignment(&AssignmentId::from("a3")).unwrap();
    let after = index.get_violations(&DraftId::from("d1"));
    assert!(after.is_empty(), "stale violation survived: {after:?}");
}

#[test]
fn moving_an_assignment_recomputes_both_members() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();
    heavy_week(&mut index);
    assert_eq!(index.get_violations(&DraftId::from("d1")).len(), 1);

    // Handing one night to m3 drops m1 to 44 hours; m3 sits at 11.
    index
        .move_assignment(
            &AssignmentId::from("a5"),
            date(2024, 1, 5),
            ShiftTypeId::from("t3"),
            MemberId::from("m3"),
        )
        .unwrap();

    assert!(index
        .member_violations(&DraftId::from("d1"), &MemberId::from("m1"))
        .is_empty());
    assert!(index
        .member_violations(&DraftId::from("d1"), &MemberId::from("m3"))
        .is_empty());

    // And the move is visible immediately: handing it back restores the
    // original violation.
    index
        .move_assignment(
            &AssignmentId::from("a5"),
            date(2024, 1, 5),
            ShiftTypeId::from("t3"),
            MemberId::from("m1"),
        )
        .unwrap();
    assert_eq!(index.get_violations(&DraftId::from("d1")).len(), 1);
}

#[test]
fn rejected_mutations_leave_state_unchanged() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();
    heavy_week(&mut index);
    let baseline = index.get_violations(&DraftId::from("d1"));

    let err = index
        .record_assignment(assignment("a1", "m1", "t3", date(2024, 1, 6), "d1"))
        .unwrap_err();
    assert_eq!(err, EngineError::DuplicateAssignment(AssignmentId::from("a1")));

    let err = index
        .record_assignment(assignment("x1", "ghost", "t3", date(2024, 1, 6), "d1"))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownMember(MemberId::from("ghost")));

    let err = index
        .record_assignment(assignment("x2", "m1", "ghost", date(2024, 1, 6), "d1"))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownShiftType(ShiftTypeId::from("ghost")));

    let err = index
        .remove_assignment(&AssignmentId::from("nope"))
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownAssignment(AssignmentId::from("nope")));

    assert_eq!(index.get_violations(&DraftId::from("d1")), baseline);
}

#[test]
fn override_validation_enforces_references_and_units() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();

    let err = index
        .upsert_override(hours_override("o1", "missing", "m1", "d1", 55.0))
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownRule(_)));

    let err = index
        .upsert_override(hours_override("o1", "r1", "ghost", "d1", 55.0))
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownMember(_)));

    let mut mismatched = hours_override("o1", "r1", "m1", "d1", 55.0);
    mismatched.unit = Unit::Shifts;
    let err = index.upsert_override(mismatched).unwrap_err();
    assert!(matches!(err, EngineError::OverrideUnitMismatch { .. }));

    let err = index
        .delete_override(&OverrideId::from("nope"))
        .unwrap_err();
    assert!(matches!(err, EngineError::UnknownOverride(_)));
}

#[test]
fn rule_added_after_recording_sweeps_only_covered_members() {
    let mut index = ComplianceIndex::new(demo_roster());
    // 55 hours each for a Doctor and a Registrar, recorded before any
    // rule exists.
    for day in 1..=5 {
        index
            .record_assignment(assignment(
                &format!("doc{day}"),
                "m1",
                "t3",
                date(2024, 1, day),
                "d1",
            ))
            .unwrap();
        index
            .record_assignment(assignment(
                &format!("reg{day}"),
                "m2",
                "t3",
                date(2024, 1, day),
                "d1",
            ))
            .unwrap();
    }
    assert!(index.get_violations(&DraftId::from("d1")).is_empty());

    index
        .upsert_rule(rule(
            "r-doc",
            RuleKind::MaxHoursWeek,
            50.0,
            RuleScope::Role(Role::Doctor),
        ))
        .unwrap();
    assert_eq!(
        index
            .member_violations(&DraftId::from("d1"), &MemberId::from("m1"))
            .len(),
        1
    );
    assert!(index
        .member_violations(&DraftId::from("d1"), &MemberId::from("m2"))
        .is_empty());
}

#[test]
fn rule_unit_must_match_its_kind() {
    let mut index = ComplianceIndex::new(demo_roster());
    let mut bad = rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All);
    bad.unit = Unit::Shifts;
    let err = index.upsert_rule(bad).unwrap_err();
    assert!(matches!(err, EngineError::RuleUnitMismatch { .. }));
    assert!(index.rule_book().is_empty());
}

#[test]
fn deleting_an_override_restores_the_base_threshold() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();
    index
        .upsert_override(hours_override("o1", "r1", "m1", "d1", 56.0))
        .unwrap();
    heavy_week(&mut index);
    assert!(index.get_violations(&DraftId::from("d1")).is_empty());

    index.delete_override(&OverrideId::from("o1")).unwrap();
    assert_eq!(index.get_violations(&DraftId::from("d1")).len(), 1);
}

#[test]
fn zero_assignment_member_has_no_violations() {
    let mut index = ComplianceIndex::new(demo_roster());
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();
    assert!(index
        .member_violations(&DraftId::from("d1"), &MemberId::from("m2"))
        .is_empty());
    assert!(index.get_violations(&DraftId::from("d9")).is_empty());
}

#[test]
fn overlapping_shifts_are_detected_without_any_rules() {
    let mut index = ComplianceIndex::new(demo_roster());

    // D-AM runs 07:00-15:00, D-PM 14:00-22:00: one hour of overlap.
    index
        .record_assignment(assignment("am", "m1", "t1", date(2024, 1, 1), "d1"))
        .unwrap();
    index
        .record_assignment(assignment("pm", "m1", "t2", date(2024, 1, 1), "d1"))
        .unwrap();

    let violations = index.member_violations(&DraftId::from("d1"), &MemberId::from("m1"));
    assert_eq!(violations.len(), 1, "{violations:?}");
    assert!(matches!(violations[0].finding, Finding::Overlap { .. }));

    // Moving the evening shift a day later clears it.
    index
        .move_assignment(
            &AssignmentId::from("pm"),
            date(2024, 1, 2),
            ShiftTypeId::from("t2"),
            MemberId::from("m1"),
        )
        .unwrap();
    assert!(index.get_violations(&DraftId::from("d1")).is_empty());
}

#[test]
fn engulfing_shift_reports_every_overlapping_pair() {
    let mut roster = rota_engine::InMemoryRoster::new();
    roster.insert_member(member("m1", "Dr. Sarah Connor", Role::Doctor));
    roster.insert_shift_type(shift_type("long", "D-LONG", "07:00", "22:00"));
    roster.insert_shift_type(shift_type("s1", "D-S1", "08:00", "10:00"));
    roster.insert_shift_type(shift_type("s2", "D-S2", "09:00", "11:00"));
    let mut index = ComplianceIndex::new(roster);
    index
        .record_assignment(assignment("a1", "m1", "long", date(2024, 1, 1), "d1"))
        .unwrap();
    index
        .record_assignment(assignment("a2", "m1", "s1", date(2024, 1, 1), "d1"))
        .unwrap();
    index
        .record_assignment(assignment("a3", "m1", "s2", date(2024, 1, 1), "d1"))
        .unwrap();

    // The long shift overlaps both short ones, and the short ones overlap
    // each other: three distinct pairs.
    let violations = index.get_violations(&DraftId::from("d1"));
    assert_eq!(violations.len(), 3, "{violations:?}");
    assert!(violations
        .iter()
        .all(|v| matches!(v.finding, Finding::Overlap { .. })));
    let pairs: Vec<Vec<&str>> = violations
        .iter()
        .map(|v| v.assignment_ids().iter().map(AssignmentId::as_str).collect())
        .collect();
    assert!(pairs.contains(&vec!["a1", "a2"]));
    assert!(pairs.contains(&vec!["a1", "a3"]));
    assert!(pairs.contains(&vec!["a2", "a3"]));
}

/// Directory whose host can yank a shift type out from under recorded
/// assignments, modelling an out-of-band catalogue edit.
struct FlakyDirectory {
    inner: rota_engine::InMemoryRoster,
    hidden: Rc<Cell<bool>>,
}

impl RosterDirectory for FlakyDirectory {
    fn member(&self, id: &MemberId) -> Option<&rota_model::Member> {
        self.inner.member(id)
    }

    fn shift_type(&self, id: &ShiftTypeId) -> Option<&rota_model::ShiftType> {
        if self.hidden.get() && id.as_str() == "t1" {
            return None;
        }
        self.inner.shift_type(id)
    }

    fn member_ids(&self) -> Vec<MemberId> {
        self.inner.member_ids()
    }
}

#[test]
fn evaluation_faults_stay_on_the_affected_member() {
    let hidden = Rc::new(Cell::new(false));
    let directory = FlakyDirectory {
        inner: demo_roster(),
        hidden: Rc::clone(&hidden),
    };
    let mut index = ComplianceIndex::new(directory);
    index
        .record_assignment(assignment("a1", "m1", "t1", date(2024, 1, 1), "d1"))
        .unwrap();
    index
        .record_assignment(assignment("a2", "m2", "t2", date(2024, 1, 1), "d1"))
        .unwrap();

    // The catalogue loses t1 behind the engine's back; the next rebuild
    // of m1 must surface the dangling reference instead of erroring.
    hidden.set(true);
    index
        .upsert_rule(rule("r1", RuleKind::MaxHoursWeek, 50.0, RuleScope::All))
        .unwrap();

    let m1 = index.member_violations(&DraftId::from("d1"), &MemberId::from("m1"));
    assert_eq!(m1.len(), 1, "{m1:?}");
    assert!(matches!(m1[0].finding, Finding::EvaluationFailed { .. }));
    assert!(m1[0].message.starts_with("Evaluation failed:"));

    // m2 reads stay clean regardless.
    assert!(index
        .member_violations(&DraftId::from("d1"), &MemberId::from("m2"))
        .is_empty());
}
