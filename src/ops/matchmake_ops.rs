use rand::Rng;
use rusqlite::Connection;

use crate::db::pair_repo;
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Event, Id, Pair, Participant};
use crate::ops::event_ops::require_event;
use crate::pairing::{self, Assignments};

/// Shuffle a selected subset of an event's roster and persist the result.
///
/// The caller re-queries persisted pairs if it needs to display them; a
/// failure at any stage leaves previously persisted pairs untouched.
pub fn matchmake<R: Rng + ?Sized>(
    conn: &Connection,
    event_id: Id<Event>,
    participant_ids: &[Id<Participant>],
    rng: &mut R,
) -> GiftedResult<()> {
    let assignments = pairing::generate(participant_ids, rng)?;
    reconcile(conn, event_id, &assignments)
}

/// Shuffle the full event roster.
pub fn matchmake_all<R: Rng + ?Sized>(
    conn: &Connection,
    event_id: Id<Event>,
    rng: &mut R,
) -> GiftedResult<()> {
    let event = require_event(conn, event_id)?;
    let assignments = pairing::generate(&event.participant_ids, rng)?;
    reconcile(conn, event_id, &assignments)
}

/// Persist a gifter-to-giftee mapping: overwrite the giftee on each gifter's
/// existing pair row, insert a fresh row for gifters shuffled for the first
/// time. Keyed by `(event, gifter)`, so re-running with the same mapping is
/// idempotent and a reshuffle never accumulates duplicate rows.
pub fn reconcile(
    conn: &Connection,
    event_id: Id<Event>,
    assignments: &Assignments,
) -> GiftedResult<()> {
    let event = require_event(conn, event_id)?;

    // Check the whole mapping against the roster before the first write, so
    // a referential error never leaves a partial result behind.
    for (&gifter, &giftee) in assignments {
        ensure_on_roster(&event, gifter)?;
        ensure_on_roster(&event, giftee)?;
    }

    for (&gifter, &giftee) in assignments {
        match pair_repo::find_by_gifter(conn, event_id, gifter)? {
            Some(_) => pair_repo::update_giftee(conn, event_id, gifter, giftee)?,
            None => pair_repo::insert(conn, &Pair::new(event_id, gifter, giftee))?,
        }
    }

    Ok(())
}

fn ensure_on_roster(event: &Event, participant_id: Id<Participant>) -> GiftedResult<()> {
    if event.has_participant(participant_id) {
        Ok(())
    } else {
        Err(GiftedError::NotInEvent {
            participant_id: participant_id.to_string(),
            event_id: event.id.to_string(),
        })
    }
}
