// SPDX-License-Identifier: Apache-2.0
//! Draft metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ident::DraftId;

/// A named, timestamped version of a roster's assignment set.
///
/// Assignments and overrides are scoped to a draft id; which draft is
/// "active" for editing is the host's concern, not the engine's. The
/// engine only ever sees draft ids on the records it ingests.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Draft {
    /// Unique identifier.
    pub id: DraftId,
    /// Display name (e.g. "Week 1").
    pub name: String,
    /// Creation timestamp, host-assigned.
    pub created_at: NaiveDateTime,
}
