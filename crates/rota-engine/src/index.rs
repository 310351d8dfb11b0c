// SPDX-License-Identifier: Apache-2.0
//! The incremental compliance index.
//!
//! Owns the rule book, the assignment table, and the violation cache.
//! Every mutation validates its references, applies, then synchronously
//! recomputes exactly the (draft, member) entries it touched; reads are
//! served from the cache and never observe a half-applied mutation. The
//! cache is reachable only through this type's methods.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use rota_model::{
    Assignment, AssignmentId, DraftId, MemberId, OverrideId, Rule, RuleId, RuleKind, RuleOverride,
    RuleScope, ShiftTypeId, Violation,
};

use crate::config::EngineConfig;
use crate::directory::RosterDirectory;
use crate::error::EngineError;
use crate::eval::{self, EvalContext};
use crate::resolver::RuleBook;
use crate::timeline::build_timeline;

/// Incrementally maintained map from (draft, member) to that member's
/// current violation list.
///
/// Single logical writer: all operations are synchronous and run to
/// completion before returning. Hosts serving concurrent editors must
/// serialize mutations per draft (a mutex around the index is the
/// expected discipline); interleaved invalidation and recompute would
/// leave the cache describing a half-applied state.
pub struct ComplianceIndex<D: RosterDirectory> {
    directory: D,
    config: EngineConfig,
    rules: RuleBook,
    assignments: FxHashMap<AssignmentId, Assignment>,
    cache: FxHashMap<DraftId, FxHashMap<MemberId, Vec<Violation>>>,
}

impl<D: RosterDirectory> ComplianceIndex<D> {
    /// Creates an index over the given directory with default config.
    pub fn new(directory: D) -> Self {
        Self::with_config(directory, EngineConfig::default())
    }

    /// Creates an index with explicit engine tunables.
    pub fn with_config(directory: D, config: EngineConfig) -> Self {
        Self {
            directory,
            config,
            rules: RuleBook::new(),
            assignments: FxHashMap::default(),
            cache: FxHashMap::default(),
        }
    }

    /// The directory the index resolves members and shift types against.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The engine tunables in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the rule state.
    pub fn rule_book(&self) -> &RuleBook {
        &self.rules
    }

    /// Records a new assignment and recomputes its (draft, member).
    ///
    /// # Errors
    /// Rejects duplicate assignment ids and references to members or
    /// shift types the directory cannot resolve; state is unchanged on
    /// error.
    pub fn record_assignment(&mut self, assignment: Assignment) -> Result<(), EngineError> {
        if self.assignments.contains_key(&assignment.id) {
            return Err(EngineError::DuplicateAssignment(assignment.id));
        }
        if self.directory.member(&assignment.member_id).is_none() {
            return Err(EngineError::UnknownMember(assignment.member_id));
        }
        if self
            .directory
            .shift_type(&assignment.shift_type_id)
            .is_none()
        {
            return Err(EngineError::UnknownShiftType(assignment.shift_type_id));
        }
        let draft = assignment.draft_id.clone();
        let member = assignment.member_id.clone();
        self.assignments.insert(assignment.id.clone(), assignment);
        self.rebuild(&draft, &member);
        Ok(())
    }

    /// Removes an assignment and recomputes its former (draft, member).
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownAssignment`] when the id is not
    /// recorded.
    pub fn remove_assignment(&mut self, id: &AssignmentId) -> Result<(), EngineError> {
        let Some(removed) = self.assignments.remove(id) else {
            return Err(EngineError::UnknownAssignment(id.clone()));
        };
        self.rebuild(&removed.draft_id, &removed.member_id);
        Ok(())
    }

    /// Moves an assignment to a new date, shift type, and/or member,
    /// retaining its id; recomputes the old and new members.
    ///
    /// # Errors
    /// Unknown assignment, member, or shift-type references are rejected
    /// with state unchanged.
    pub fn move_assignment(
        &mut self,
        id: &AssignmentId,
        new_date: NaiveDate,
        new_shift_type: ShiftTypeId,
        new_member: MemberId,
    ) -> Result<(), EngineError> {
        if !self.assignments.contains_key(id) {
            return Err(EngineError::UnknownAssignment(id.clone()));
        }
        if self.directory.member(&new_member).is_none() {
            return Err(EngineError::UnknownMember(new_member));
        }
        if self.directory.shift_type(&new_shift_type).is_none() {
            return Err(EngineError::UnknownShiftType(new_shift_type));
        }
        let Some(record) = self.assignments.get_mut(id) else {
            return Err(EngineError::UnknownAssignment(id.clone()));
        };
        let draft = record.draft_id.clone();
        let old_member = record.member_id.clone();
        record.date = new_date;
        record.shift_type_id = new_shift_type;
        record.member_id = new_member.clone();
        self.rebuild(&draft, &old_member);
        if new_member != old_member {
            self.rebuild(&draft, &new_member);
        }
        Ok(())
    }

    /// Inserts or replaces a rule, then recomputes every cached member the
    /// rule's scope (and, on replacement, the previous scope) covers.
    ///
    /// # Errors
    /// Rejects rules whose unit is not their kind's canonical unit.
    pub fn upsert_rule(&mut self, rule: Rule) -> Result<(), EngineError> {
        let expected = rule.kind.unit();
        if rule.unit != expected {
            return Err(EngineError::RuleUnitMismatch {
                kind: rule.kind,
                expected,
                supplied: rule.unit,
            });
        }
        let old_scope = self.rules.rule(&rule.id).map(|r| r.scope.clone());
        let new_scope = rule.scope.clone();
        self.rules.upsert_rule(rule);
        if let Some(old_scope) = old_scope.filter(|s| *s != new_scope) {
            self.rebuild_scope(&old_scope);
        }
        self.rebuild_scope(&new_scope);
        Ok(())
    }

    /// Deletes a rule; its overrides become void. Recomputes every cached
    /// member the rule's scope covered.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownRule`] when the id is not present.
    pub fn delete_rule(&mut self, id: &RuleId) -> Result<(), EngineError> {
        let Some(removed) = self.rules.delete_rule(id) else {
            return Err(EngineError::UnknownRule(id.clone()));
        };
        let orphans = self.rules.overrides_referencing(id);
        if orphans > 0 {
            warn!(rule = %id, orphans, "deleted rule leaves orphaned overrides (now void)");
        }
        self.rebuild_scope(&removed.scope);
        Ok(())
    }

    /// Inserts or replaces an override, then recomputes the single
    /// (draft, member) it targets.
    ///
    /// # Errors
    /// The referenced rule and member must exist, and the override's unit
    /// must match the rule's; otherwise the mutation is rejected with
    /// state unchanged.
    pub fn upsert_override(&mut self, rule_override: RuleOverride) -> Result<(), EngineError> {
        let Some(rule) = self.rules.rule(&rule_override.rule_id) else {
            return Err(EngineError::UnknownRule(rule_override.rule_id));
        };
        if rule_override.unit != rule.unit {
            return Err(EngineError::OverrideUnitMismatch {
                rule: rule.id.clone(),
                expected: rule.unit,
                supplied: rule_override.unit,
            });
        }
        if self.directory.member(&rule_override.member_id).is_none() {
            return Err(EngineError::UnknownMember(rule_override.member_id));
        }
        // Replacing an override by id may retarget it; refresh both homes.
        let previous = self
            .rules
            .rule_override(&rule_override.id)
            .map(|o| (o.draft_id.clone(), o.member_id.clone()));
        let draft = rule_override.draft_id.clone();
        let member = rule_override.member_id.clone();
        self.rules.upsert_override(rule_override);
        if let Some((old_draft, old_member)) =
            previous.filter(|(d, m)| *d != draft || *m != member)
        {
            self.rebuild(&old_draft, &old_member);
        }
        self.rebuild(&draft, &member);
        Ok(())
    }

    /// Deletes an override and recomputes its (draft, member).
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownOverride`] when the id is not
    /// present.
    pub fn delete_override(&mut self, id: &OverrideId) -> Result<(), EngineError> {
        let Some(removed) = self.rules.delete_override(id) else {
            return Err(EngineError::UnknownOverride(id.clone()));
        };
        self.rebuild(&removed.draft_id, &removed.member_id);
        Ok(())
    }

    /// All violations for a draft, ordered by member id and then each
    /// member's canonical finding order. Never fails; an unknown draft is
    /// an empty list.
    pub fn get_violations(&self, draft: &DraftId) -> Vec<Violation> {
        let Some(per_member) = self.cache.get(draft) else {
            return Vec::new();
        };
        let mut member_ids: Vec<&MemberId> = per_member.keys().collect();
        member_ids.sort_unstable();
        member_ids
            .into_iter()
            .filter_map(|m| per_member.get(m))
            .flatten()
            .cloned()
            .collect()
    }

    /// One member's violations for a draft, in canonical finding order.
    /// Never fails; absence of data is an empty list.
    pub fn member_violations(&self, draft: &DraftId, member: &MemberId) -> Vec<Violation> {
        self.cache
            .get(draft)
            .and_then(|per_member| per_member.get(member))
            .cloned()
            .unwrap_or_default()
    }

    /// Recomputes one (draft, member) cache entry from scratch.
    fn rebuild(&mut self, draft: &DraftId, member: &MemberId) {
        let assigned: Vec<&Assignment> = {
            let mut v: Vec<&Assignment> = self
                .assignments
                .values()
                .filter(|a| a.draft_id == *draft && a.member_id == *member)
                .collect();
            v.sort_by(|a, b| a.id.cmp(&b.id));
            v
        };
        let ctx = EvalContext {
            draft,
            member,
            config: &self.config,
        };
        let mut violations: Vec<Violation> = Vec::new();
        if let Some(member_rec) = self.directory.member(member) {
            let timeline = build_timeline(&assigned, &self.directory, &self.config);
            for fault in &timeline.faults {
                warn!(
                    member = %member,
                    assignment = %fault.assignment_id,
                    detail = %fault.detail,
                    "timeline fault surfaced as evaluation failure"
                );
                violations.push(eval::eval_failed(
                    &ctx,
                    None,
                    format!("assignment {}: {}", fault.assignment_id, fault.detail),
                ));
            }
            violations.extend(eval::detect_overlaps(&timeline.spans, &ctx));
            for kind in RuleKind::ALL {
                if let Some(effective) = self.rules.effective_rule(draft, member_rec, kind) {
                    violations.extend(eval::evaluate(&effective, &timeline.spans, &ctx));
                }
            }
        } else if !assigned.is_empty() {
            // The directory dropped a member that still has assignments;
            // surface it on that member without failing reads.
            violations.push(eval::eval_failed(
                &ctx,
                None,
                format!("member {member} not in directory"),
            ));
        }

        // Canonical order: evaluation failures (no window) first, then by
        // window start, implicated assignments, and id as total tiebreak.
        violations.sort_by(|a, b| {
            (a.window_start(), a.assignment_ids().first(), &a.id).cmp(&(
                b.window_start(),
                b.assignment_ids().first(),
                &b.id,
            ))
        });

        debug!(
            draft = %draft,
            member = %member,
            assignments = assigned.len(),
            violations = violations.len(),
            "recomputed member violations"
        );

        if assigned.is_empty() && violations.is_empty() {
            // Drop empty entries so departed members do not linger.
            if let Some(per_member) = self.cache.get_mut(draft) {
                per_member.remove(member);
                if per_member.is_empty() {
                    self.cache.remove(draft);
                }
            }
        } else {
            self.cache
                .entry(draft.clone())
                .or_default()
                .insert(member.clone(), violations);
        }
    }

    /// Recomputes every known draft against every member the scope covers.
    fn rebuild_scope(&mut self, scope: &RuleScope) {
        let mut drafts: BTreeSet<DraftId> = BTreeSet::new();
        for assignment in self.assignments.values() {
            drafts.insert(assignment.draft_id.clone());
        }
        drafts.extend(self.cache.keys().cloned());

        // Whole-roster sweep: every directory member the scope covers,
        // plus any member with recorded data the directory no longer
        // resolves, where the rebuild surfaces the dangling reference.
        let mut members: BTreeSet<MemberId> = self
            .directory
            .member_ids()
            .into_iter()
            .filter(|id| {
                self.directory
                    .member(id)
                    .is_some_and(|m| scope.covers(&m.role))
            })
            .collect();
        for assignment in self.assignments.values() {
            if self.directory.member(&assignment.member_id).is_none() {
                members.insert(assignment.member_id.clone());
            }
        }
        for per_member in self.cache.values() {
            for member in per_member.keys() {
                if self.directory.member(member).is_none() {
                    members.insert(member.clone());
                }
            }
        }

        let mut touched = 0usize;
        for draft in &drafts {
            for member in &members {
                self.rebuild(draft, member);
                touched += 1;
            }
        }
        debug!(pairs = touched, "rule change recompute sweep");
    }
}
