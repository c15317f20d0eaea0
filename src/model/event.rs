use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::participant::Participant;

/// A named gift exchange with a fixed window. Owns its roster (ordered,
/// duplicate-free) and its persisted pairs; deleting the event removes both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Id<Event>,
    pub title: String,
    pub description: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub participant_ids: Vec<Id<Participant>>,
}

impl Event {
    pub fn create(
        title: String,
        description: Option<String>,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    ) -> Self {
        Self {
            id: Id::generate(),
            title,
            description,
            starts_on,
            ends_on,
            participant_ids: Vec::new(),
        }
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.starts_on <= today && today <= self.ends_on
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        today < self.starts_on
    }

    pub fn has_participant(&self, id: Id<Participant>) -> bool {
        self.participant_ids.contains(&id)
    }
}
