// SPDX-License-Identifier: Apache-2.0
//! Read-only environment lookups.
//!
//! The engine does not own members or shift types; whatever persistence
//! layer it is embedded in supplies them through this port. The in-memory
//! implementation exists for hosts that keep everything in process (and
//! for tests).

use std::collections::BTreeMap;

use rota_model::{Member, MemberId, ShiftType, ShiftTypeId};

/// Read-only member and shift-type lookups supplied by the host.
pub trait RosterDirectory {
    /// Looks up a member by id.
    fn member(&self, id: &MemberId) -> Option<&Member>;
    /// Looks up a shift type by id.
    fn shift_type(&self, id: &ShiftTypeId) -> Option<&ShiftType>;
    /// All resolvable member ids, in id order, for whole-roster sweeps.
    fn member_ids(&self) -> Vec<MemberId>;
}

impl<T: RosterDirectory + ?Sized> RosterDirectory for &T {
    fn member(&self, id: &MemberId) -> Option<&Member> {
        (**self).member(id)
    }

    fn shift_type(&self, id: &ShiftTypeId) -> Option<&ShiftType> {
        (**self).shift_type(id)
    }

    fn member_ids(&self) -> Vec<MemberId> {
        (**self).member_ids()
    }
}

/// In-memory [`RosterDirectory`] backed by ordered maps.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRoster {
    members: BTreeMap<MemberId, Member>,
    shift_types: BTreeMap<ShiftTypeId, ShiftType>,
}

impl InMemoryRoster {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a member.
    pub fn insert_member(&mut self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    /// Inserts or replaces a shift type.
    pub fn insert_shift_type(&mut self, shift_type: ShiftType) {
        self.shift_types.insert(shift_type.id.clone(), shift_type);
    }

    /// Removes a member, returning it when present.
    pub fn remove_member(&mut self, id: &MemberId) -> Option<Member> {
        self.members.remove(id)
    }

    /// Removes a shift type, returning it when present.
    pub fn remove_shift_type(&mut self, id: &ShiftTypeId) -> Option<ShiftType> {
        self.shift_types.remove(id)
    }

}

impl RosterDirectory for InMemoryRoster {
    fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    fn shift_type(&self, id: &ShiftTypeId) -> Option<&ShiftType> {
        self.shift_types.get(id)
    }

    fn member_ids(&self) -> Vec<MemberId> {
        self.members.keys().cloned().collect()
    }
}
