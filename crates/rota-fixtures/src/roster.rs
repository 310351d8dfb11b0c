// SPDX-License-Identifier: Apache-2.0
//! Member and shift-type builders, plus the seeded demo roster.

use std::collections::BTreeSet;

use rota_engine::InMemoryRoster;
use rota_model::{Member, MemberId, Role, ShiftType, ShiftTypeId, TimeOfDay};

/// Builds a member with full-time defaults.
pub fn member(id: &str, name: &str, role: Role) -> Member {
    Member {
        id: MemberId::from(id),
        name: name.to_owned(),
        role,
        max_shifts_per_week: 5,
        fte: 1.0,
        tags: BTreeSet::new(),
    }
}

fn parse_time(raw: &str) -> TimeOfDay {
    raw.parse().expect("fixture times are HH:MM literals")
}

/// Builds a shift type open to any role.
pub fn shift_type(id: &str, code: &str, start: &str, end: &str) -> ShiftType {
    shift_type_for_roles(id, code, start, end, &[])
}

/// Builds a shift type restricted to the given roles (empty = any).
pub fn shift_type_for_roles(
    id: &str,
    code: &str,
    start: &str,
    end: &str,
    roles: &[Role],
) -> ShiftType {
    ShiftType {
        id: ShiftTypeId::from(id),
        code: code.to_owned(),
        name: code.to_owned(),
        color: "#3b82f6".to_owned(),
        start: parse_time(start),
        end: parse_time(end),
        allowed_roles: roles.iter().cloned().collect(),
    }
}

/// The demo roster the product seeds: three clinicians and the three
/// standard day/evening/night shift templates.
///
/// - `m1` Dr. Sarah Connor (Doctor), `m2` Dr. Kyle Reese (Registrar),
///   `m3` Dr. John Connor (Doctor)
/// - `t1` D-AM 07:00-15:00, `t2` D-PM 14:00-22:00, `t3` D-ND 21:00-08:00
pub fn demo_roster() -> InMemoryRoster {
    let mut roster = InMemoryRoster::new();
    roster.insert_member(member("m1", "Dr. Sarah Connor", Role::Doctor));
    roster.insert_member(member("m2", "Dr. Kyle Reese", Role::Registrar));
    roster.insert_member(member("m3", "Dr. John Connor", Role::Doctor));
    roster.insert_shift_type(shift_type("t1", "D-AM", "07:00", "15:00"));
    roster.insert_shift_type(shift_type("t2", "D-PM", "14:00", "22:00"));
    roster.insert_shift_type(shift_type("t3", "D-ND", "21:00", "08:00"));
    roster
}
