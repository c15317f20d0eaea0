use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::{event_repo, participant_repo};
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Event, Id, Participant};

/// Roster in insertion order, resolved to participants.
pub fn roster(conn: &Connection, event_id: Id<Event>) -> GiftedResult<Vec<Participant>> {
    let ids = event_repo::find_roster_ids(conn, event_id)?;

    let mut participants = Vec::with_capacity(ids.len());
    for id in ids {
        let participant = participant_repo::find_by_id(conn, id)?.ok_or_else(|| {
            GiftedError::ParticipantNotFound { id: id.to_string() }
        })?;
        participants.push(participant);
    }

    Ok(participants)
}

/// Events whose window contains `today`.
pub fn active_events(conn: &Connection, today: NaiveDate) -> GiftedResult<Vec<Event>> {
    Ok(event_repo::all(conn)?
        .into_iter()
        .filter(|e| e.is_active(today))
        .collect())
}

/// Events that have not started yet.
pub fn upcoming_events(conn: &Connection, today: NaiveDate) -> GiftedResult<Vec<Event>> {
    Ok(event_repo::all(conn)?
        .into_iter()
        .filter(|e| e.is_upcoming(today))
        .collect())
}

/// Case-insensitive title lookup, first match wins.
pub fn find_by_title(conn: &Connection, title: &str) -> GiftedResult<Option<Event>> {
    Ok(event_repo::all(conn)?
        .into_iter()
        .find(|e| e.title.eq_ignore_ascii_case(title.trim())))
}
