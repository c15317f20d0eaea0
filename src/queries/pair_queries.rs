use rusqlite::Connection;

use crate::db::{pair_repo, participant_repo};
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Event, Id, Pair, Participant};

/// Who a gifter is buying for, resolved to the participant. `None` when the
/// gifter has not been shuffled yet.
pub fn giftee_for(
    conn: &Connection,
    event_id: Id<Event>,
    gifter_id: Id<Participant>,
) -> GiftedResult<Option<Participant>> {
    match pair_repo::find_by_gifter(conn, event_id, gifter_id)? {
        Some(pair) => participant_repo::find_by_id(conn, pair.giftee_id),
        None => Ok(None),
    }
}

/// All assignments for an event with both sides resolved, in stable
/// (creation, gifter) order.
pub fn assignments_for_event(
    conn: &Connection,
    event_id: Id<Event>,
) -> GiftedResult<Vec<(Participant, Participant)>> {
    let pairs = pair_repo::find_by_event(conn, event_id)?;

    let mut resolved = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let gifter = require_participant(conn, pair.gifter_id)?;
        let giftee = require_participant(conn, pair.giftee_id)?;
        resolved.push((gifter, giftee));
    }

    Ok(resolved)
}

pub fn pairs_for_event(conn: &Connection, event_id: Id<Event>) -> GiftedResult<Vec<Pair>> {
    pair_repo::find_by_event(conn, event_id)
}

/// Roster members who have no pair row yet (never included in a shuffle).
pub fn unpaired_participants(
    conn: &Connection,
    event_id: Id<Event>,
) -> GiftedResult<Vec<Participant>> {
    let paired: Vec<Id<Participant>> = pair_repo::find_by_event(conn, event_id)?
        .into_iter()
        .map(|pair| pair.gifter_id)
        .collect();

    let roster = crate::queries::event_queries::roster(conn, event_id)?;
    Ok(roster
        .into_iter()
        .filter(|p| !paired.contains(&p.id))
        .collect())
}

fn require_participant(conn: &Connection, id: Id<Participant>) -> GiftedResult<Participant> {
    participant_repo::find_by_id(conn, id)?.ok_or_else(|| GiftedError::ParticipantNotFound {
        id: id.to_string(),
    })
}
