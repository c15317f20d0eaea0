use rusqlite::Connection;

use crate::db::participant_repo;
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Id, Participant};
use crate::validation;

pub fn register(
    conn: &Connection,
    username: &str,
    first_name: &str,
    last_name: &str,
) -> GiftedResult<Participant> {
    let username = validation::non_blank(username, "username")?;
    let first_name = validation::non_blank(first_name, "first name")?;
    let last_name = validation::non_blank(last_name, "last name")?;

    if participant_repo::find_by_username(conn, &username)?.is_some() {
        return Err(GiftedError::UsernameTaken { username });
    }

    let participant = Participant::create(username, first_name, last_name);
    participant_repo::insert(conn, &participant)?;
    Ok(participant)
}

/// Register a proxy account managed by `parent_id`. Children join rosters
/// and are shuffled like any other participant.
pub fn register_child(
    conn: &Connection,
    parent_id: Id<Participant>,
    username: &str,
    first_name: &str,
    last_name: &str,
) -> GiftedResult<Participant> {
    let parent = participant_repo::find_by_id(conn, parent_id)?
        .ok_or_else(|| GiftedError::ParticipantNotFound {
            id: parent_id.to_string(),
        })?;

    let username = validation::non_blank(username, "username")?;
    let first_name = validation::non_blank(first_name, "first name")?;
    let last_name = validation::non_blank(last_name, "last name")?;

    if participant_repo::find_by_username(conn, &username)?.is_some() {
        return Err(GiftedError::UsernameTaken { username });
    }

    let child = Participant::create_child(parent.id, username, first_name, last_name);
    participant_repo::insert(conn, &child)?;
    Ok(child)
}

pub fn update_participant(
    conn: &Connection,
    participant_id: Id<Participant>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> GiftedResult<Participant> {
    let participant = participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftedError::ParticipantNotFound {
            id: participant_id.to_string(),
        })?;

    let mut updated = participant;

    if let Some(first) = first_name {
        updated.first_name = validation::non_blank(first, "first name")?;
    }
    if let Some(last) = last_name {
        updated.last_name = validation::non_blank(last, "last name")?;
    }

    participant_repo::update(conn, &updated)?;
    Ok(updated)
}

/// Remove a participant entirely. Roster rows and pair rows that reference
/// them go with them (schema cascade).
pub fn delete_participant(conn: &Connection, participant_id: Id<Participant>) -> GiftedResult<()> {
    participant_repo::find_by_id(conn, participant_id)?
        .ok_or_else(|| GiftedError::ParticipantNotFound {
            id: participant_id.to_string(),
        })?;

    participant_repo::delete(conn, participant_id)
}
