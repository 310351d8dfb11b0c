// SPDX-License-Identifier: Apache-2.0
//! rota-engine: the roster compliance engine.
//!
//! Given shift assignments, staffing rules, and per-draft overrides, the
//! engine computes the set of compliance violations for every affected
//! member and re-derives it incrementally whenever the inputs change.
//! Everything is synchronous and deterministic: identical state yields
//! byte-identical violation lists, which is what makes the cache (and the
//! tests) honest.
//!
//! The engine is a library, not a service. Hosts supply a read-only
//! [`RosterDirectory`] for member and shift-type lookups, push mutations
//! through [`ComplianceIndex`], and read ordered [`rota_model::Violation`]
//! lists back out.
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
    clippy::option_if_let_else,
    clippy::use_self
)]

mod calendar;
mod config;
mod directory;
mod error;
mod eval;
mod index;
mod resolver;
mod timeline;

// Re-exports for stable public API
/// Engine tunables (night window, fortnight anchor).
pub use config::EngineConfig;
/// Read-only environment lookups and the in-memory implementation.
pub use directory::{InMemoryRoster, RosterDirectory};
/// Mutation-boundary errors.
pub use error::EngineError;
/// The incremental compliance index.
pub use index::ComplianceIndex;
/// Effective-rule resolution results.
pub use resolver::{EffectiveRule, EffectiveSource, RuleBook};
/// Resolved shift occurrences on a member's timeline.
pub use timeline::ShiftSpan;
