// SPDX-License-Identifier: Apache-2.0
//! rota-model: pure domain data for the Rota compliance engine.
//!
//! Members, shift types, assignments, rules, overrides, drafts, and the
//! computed `Violation` output type. No engine logic lives here; the types
//! are plain data with deterministic identity and serde support so hosts
//! can persist or transport them.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::multiple_crate_versions,
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::use_self
)]

mod assignment;
mod draft;
mod ident;
mod member;
mod overrides;
mod rule;
mod shift;
mod time;
mod violation;

// Re-exports for stable public API
/// One member working one shift-type occurrence on one calendar day.
pub use assignment::Assignment;
/// Draft metadata (named, timestamped roster version).
pub use draft::Draft;
/// Opaque host-assigned identifiers plus the derived `ViolationId`.
pub use ident::{
    make_violation_id, AssignmentId, DraftId, MemberId, OverrideId, RuleId, ShiftTypeId,
    ViolationId,
};
/// Staff member and role enumeration.
pub use member::{Member, Role};
/// Draft-scoped per-member rule replacement.
pub use overrides::{OverrideOrigin, RuleOverride};
/// Constraint definitions and their enumerations.
pub use rule::{Rule, RuleKind, RuleScope, Severity, Unit};
/// Recurring shift slot template.
pub use shift::ShiftType;
/// Clock-face time and wrapping window arithmetic.
pub use time::{TimeOfDay, TimeParseError, TimeWindow};
/// Computed compliance findings.
pub use violation::{Finding, Violation};
