use serde::{Deserialize, Serialize};

use super::event::Event;
use super::ids::Id;
use super::participant::Participant;

/// One gifter's persisted assignment for one event.
///
/// Identity is `(event_id, gifter_id)`: a reshuffle overwrites `giftee_id`
/// in place rather than inserting a second row. `gifter_id != giftee_id`
/// always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pair {
    pub event_id: Id<Event>,
    pub gifter_id: Id<Participant>,
    pub giftee_id: Id<Participant>,
    /// Set by the schema on first insert; untouched by reshuffles.
    pub created_at: Option<String>,
}

impl Pair {
    pub fn new(
        event_id: Id<Event>,
        gifter_id: Id<Participant>,
        giftee_id: Id<Participant>,
    ) -> Self {
        Self {
            event_id,
            gifter_id,
            giftee_id,
            created_at: None,
        }
    }
}
