// SPDX-License-Identifier: Apache-2.0
//! Effective-rule resolution.
//!
//! The engine's rule state is global rules plus draft-scoped overrides.
//! What an evaluator actually enforces for one member is the *effective
//! rule*: the winning rule for the member's role with its threshold
//! replaced by the newest matching override, if any. Precedence is
//! "more specific wins, then last write wins": a role-scoped rule beats
//! an all-scope rule of the same kind, and within one (kind, scope)
//! bucket the most recently upserted rule is enforced.

use rustc_hash::FxHashMap;

use rota_model::{
    DraftId, Member, OverrideId, Rule, RuleId, RuleKind, RuleOverride, RuleScope, Severity,
};

/// Where an effective threshold came from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EffectiveSource {
    /// The rule's own threshold.
    Base,
    /// Replaced by the given draft override.
    Overridden(OverrideId),
}

/// The rule value actually enforced for one member under one draft.
#[derive(Clone, PartialEq, Debug)]
pub struct EffectiveRule {
    /// Identity of the winning rule.
    pub rule_id: RuleId,
    /// Constraint family.
    pub kind: RuleKind,
    /// Threshold to enforce (post-override).
    pub limit: f64,
    /// Severity carried from the rule; overrides never change it.
    pub severity: Severity,
    /// Base threshold or override provenance.
    pub source: EffectiveSource,
}

/// Owns rules and overrides and answers effective-rule queries.
///
/// Insertion order is tracked with a monotonic sequence so last-write-wins
/// conflicts resolve deterministically without reading any clock.
#[derive(Debug, Default)]
pub struct RuleBook {
    rules: FxHashMap<RuleId, (u64, Rule)>,
    overrides: FxHashMap<OverrideId, (u64, RuleOverride)>,
    seq: u64,
}

impl RuleBook {
    /// Creates an empty rule book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a rule; the replacement takes a fresh sequence
    /// number and therefore wins any (kind, scope) conflict.
    pub fn upsert_rule(&mut self, rule: Rule) {
        self.seq += 1;
        self.rules.insert(rule.id.clone(), (self.seq, rule));
    }

    /// Removes a rule, returning it when present. Overrides referencing
    /// the rule become void (skipped at resolution) but are retained.
    pub fn delete_rule(&mut self, id: &RuleId) -> Option<Rule> {
        self.rules.remove(id).map(|(_, rule)| rule)
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn rule(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.get(id).map(|(_, rule)| rule)
    }

    /// Inserts or replaces an override; newest wins per
    /// (draft, rule, member) triple.
    pub fn upsert_override(&mut self, rule_override: RuleOverride) {
        self.seq += 1;
        self.overrides
            .insert(rule_override.id.clone(), (self.seq, rule_override));
    }

    /// Removes an override, returning it when present.
    pub fn delete_override(&mut self, id: &OverrideId) -> Option<RuleOverride> {
        self.overrides.remove(id).map(|(_, o)| o)
    }

    /// Looks up an override by id.
    #[must_use]
    pub fn rule_override(&self, id: &OverrideId) -> Option<&RuleOverride> {
        self.overrides.get(id).map(|(_, o)| o)
    }

    /// Number of live overrides referencing `rule`.
    #[must_use]
    pub fn overrides_referencing(&self, rule: &RuleId) -> usize {
        self.overrides
            .values()
            .filter(|(_, o)| &o.rule_id == rule)
            .count()
    }

    /// Resolves the effective rule of `kind` for `member` under `draft`.
    ///
    /// Returns `None` when no rule of that kind covers the member's role:
    /// absence means unconstrained, never a zero threshold.
    #[must_use]
    pub fn effective_rule(
        &self,
        draft: &DraftId,
        member: &Member,
        kind: RuleKind,
    ) -> Option<EffectiveRule> {
        // Winning rule: highest (specificity, seq). Selection by maximum is
        // independent of map iteration order, which keeps this deterministic.
        let (_, rule) = self
            .rules
            .values()
            .filter(|(_, r)| r.kind == kind && r.scope.covers(&member.role))
            .max_by_key(|(seq, r)| (specificity(&r.scope), *seq))?;

        let winning_override = self
            .overrides
            .values()
            .filter(|(_, o)| {
                o.rule_id == rule.id && o.draft_id == *draft && o.member_id == member.id
            })
            .max_by_key(|(seq, _)| *seq);

        let (limit, source) = match winning_override {
            Some((_, o)) => (o.value, EffectiveSource::Overridden(o.id.clone())),
            None => (rule.value, EffectiveSource::Base),
        };
        Some(EffectiveRule {
            rule_id: rule.id.clone(),
            kind,
            limit,
            severity: rule.severity,
            source,
        })
    }

    /// Whether the book holds no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn specificity(scope: &RuleScope) -> u8 {
    match scope {
        RuleScope::All => 0,
        RuleScope::Role(_) => 1,
    }
}
