// SPDX-License-Identifier: Apache-2.0
//! Shared test doubles and fixtures for Rota crates.
//!
//! Builders panic on malformed literals; they exist so tests can state
//! rosters in one line, not to validate input. Never use outside tests.
//!
//! # Modules
//!
//! - [`records`] - One-line constructors for assignments, rules, overrides
//! - [`roster`] - Member/shift-type builders and the seeded demo roster
#![forbid(unsafe_code)]

pub mod records;
pub mod roster;

// Re-export commonly used items at crate root for convenience
pub use records::{assignment, date, hours_override, rule, rule_with_severity};
pub use roster::{demo_roster, member, shift_type, shift_type_for_roles};
