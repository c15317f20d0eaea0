use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Someone who can take part in gift exchanges.
///
/// A child account is a proxy run by a parent (the `managed_by` link); for
/// pairing purposes it is an ordinary participant and is shuffled like
/// anyone else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: Id<Participant>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub managed_by: Option<Id<Participant>>,
}

impl Participant {
    pub fn create(username: String, first_name: String, last_name: String) -> Self {
        Self {
            id: Id::generate(),
            username,
            first_name,
            last_name,
            managed_by: None,
        }
    }

    pub fn create_child(
        parent_id: Id<Participant>,
        username: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let mut p = Self::create(username, first_name, last_name);
        p.managed_by = Some(parent_id);
        p
    }

    pub fn is_child(&self) -> bool {
        self.managed_by.is_some()
    }

    /// Friendly label for display.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
