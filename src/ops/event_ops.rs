use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::{event_repo, participant_repo};
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Event, Id, Participant};
use crate::validation::{self, trim_optional};

pub fn create_event(
    conn: &Connection,
    title: &str,
    description: Option<&str>,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    participant_ids: Vec<Id<Participant>>,
) -> GiftedResult<Event> {
    let valid_title = validation::non_blank(title, "title")?;
    validation::date_range(starts_on, ends_on)?;

    // Filter to known participant ids
    let roster: Vec<Id<Participant>> = participant_ids
        .into_iter()
        .filter(|id| {
            participant_repo::find_by_id(conn, *id)
                .ok()
                .flatten()
                .is_some()
        })
        .collect();

    let mut event = Event::create(valid_title, trim_optional(description), starts_on, ends_on);
    event.participant_ids = roster;

    event_repo::insert(conn, &event)?;
    Ok(event)
}

pub fn update_event(
    conn: &Connection,
    event_id: Id<Event>,
    title: Option<&str>,
    description: Option<Option<&str>>,
    starts_on: Option<NaiveDate>,
    ends_on: Option<NaiveDate>,
) -> GiftedResult<Event> {
    let mut event = require_event(conn, event_id)?;

    if let Some(t) = title {
        event.title = validation::non_blank(t, "title")?;
    }
    if let Some(desc) = description {
        event.description = trim_optional(desc);
    }
    if let Some(start) = starts_on {
        event.starts_on = start;
    }
    if let Some(end) = ends_on {
        event.ends_on = end;
    }
    validation::date_range(event.starts_on, event.ends_on)?;

    event_repo::update(conn, &event)?;
    Ok(event)
}

pub fn add_participants(
    conn: &Connection,
    event_id: Id<Event>,
    participant_ids: Vec<Id<Participant>>,
) -> GiftedResult<Event> {
    let event = require_event(conn, event_id)?;

    let known: Vec<Id<Participant>> = participant_ids
        .into_iter()
        .filter(|id| {
            participant_repo::find_by_id(conn, *id)
                .ok()
                .flatten()
                .is_some()
        })
        .collect();

    event_repo::add_participants(conn, event_id, &known)?;

    // Re-fetch to get the updated roster
    Ok(event_repo::find_by_id(conn, event_id)?.unwrap_or(event))
}

pub fn remove_participants(
    conn: &Connection,
    event_id: Id<Event>,
    participant_ids: Vec<Id<Participant>>,
) -> GiftedResult<Event> {
    let event = require_event(conn, event_id)?;

    event_repo::remove_participants(conn, event_id, &participant_ids)?;

    Ok(event_repo::find_by_id(conn, event_id)?.unwrap_or(event))
}

pub fn delete_event(conn: &Connection, event_id: Id<Event>) -> GiftedResult<()> {
    require_event(conn, event_id)?;
    event_repo::delete(conn, event_id)
}

pub(crate) fn require_event(conn: &Connection, event_id: Id<Event>) -> GiftedResult<Event> {
    event_repo::find_by_id(conn, event_id)?.ok_or_else(|| GiftedError::EventNotFound {
        id: event_id.to_string(),
    })
}
