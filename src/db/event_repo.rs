use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::db::participant_repo::parse_id;
use crate::error::{GiftedError, GiftedResult};
use crate::model::{Event, Id, Participant};

pub fn insert(conn: &Connection, event: &Event) -> GiftedResult<()> {
    conn.execute(
        "INSERT INTO events (id, title, description, starts_on, ends_on) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.id.value.to_string(),
            event.title,
            event.description,
            event.starts_on.to_string(),
            event.ends_on.to_string(),
        ],
    )?;

    for (position, participant_id) in event.participant_ids.iter().enumerate() {
        conn.execute(
            "INSERT INTO event_participants (event_id, participant_id, position) VALUES (?1, ?2, ?3)",
            params![
                event.id.value.to_string(),
                participant_id.value.to_string(),
                position as i64,
            ],
        )?;
    }

    Ok(())
}

pub fn update(conn: &Connection, event: &Event) -> GiftedResult<()> {
    conn.execute(
        "UPDATE events SET title = ?1, description = ?2, starts_on = ?3, ends_on = ?4 WHERE id = ?5",
        params![
            event.title,
            event.description,
            event.starts_on.to_string(),
            event.ends_on.to_string(),
            event.id.value.to_string(),
        ],
    )?;
    Ok(())
}

/// Remove an event together with its roster rows and pairs.
pub fn delete(conn: &Connection, event_id: Id<Event>) -> GiftedResult<()> {
    conn.execute(
        "DELETE FROM pairs WHERE event_id = ?1",
        params![event_id.value.to_string()],
    )?;
    conn.execute(
        "DELETE FROM event_participants WHERE event_id = ?1",
        params![event_id.value.to_string()],
    )?;
    conn.execute(
        "DELETE FROM events WHERE id = ?1",
        params![event_id.value.to_string()],
    )?;
    Ok(())
}

pub fn add_participants(
    conn: &Connection,
    event_id: Id<Event>,
    participant_ids: &[Id<Participant>],
) -> GiftedResult<()> {
    for participant_id in participant_ids {
        let next: i64 = conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM event_participants WHERE event_id = ?1",
            params![event_id.value.to_string()],
            |row| row.get(0),
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO event_participants (event_id, participant_id, position)
             VALUES (?1, ?2, ?3)",
            params![
                event_id.value.to_string(),
                participant_id.value.to_string(),
                next,
            ],
        )?;
    }
    Ok(())
}

/// Drop roster rows, along with any pair rows that reference the removed
/// participants as gifter or giftee.
pub fn remove_participants(
    conn: &Connection,
    event_id: Id<Event>,
    participant_ids: &[Id<Participant>],
) -> GiftedResult<()> {
    for participant_id in participant_ids {
        conn.execute(
            "DELETE FROM event_participants WHERE event_id = ?1 AND participant_id = ?2",
            params![
                event_id.value.to_string(),
                participant_id.value.to_string(),
            ],
        )?;
        conn.execute(
            "DELETE FROM pairs WHERE event_id = ?1 AND (gifter_id = ?2 OR giftee_id = ?2)",
            params![
                event_id.value.to_string(),
                participant_id.value.to_string(),
            ],
        )?;
    }
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Event>) -> GiftedResult<Option<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, starts_on, ends_on FROM events WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.value.to_string()], |row| {
        let id_str: String = row.get(0)?;
        let title: String = row.get(1)?;
        let description: Option<String> = row.get(2)?;
        let starts_on: String = row.get(3)?;
        let ends_on: String = row.get(4)?;
        Ok((id_str, title, description, starts_on, ends_on))
    });

    match result {
        Ok(fields) => Ok(Some(build_event(conn, fields)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn all(conn: &Connection) -> GiftedResult<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, starts_on, ends_on FROM events ORDER BY starts_on",
    )?;

    let rows: Vec<(String, String, Option<String>, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut events = Vec::new();
    for fields in rows {
        events.push(build_event(conn, fields)?);
    }

    Ok(events)
}

/// Roster ids in insertion order.
pub fn find_roster_ids(conn: &Connection, event_id: Id<Event>) -> GiftedResult<Vec<Id<Participant>>> {
    let mut stmt = conn.prepare(
        "SELECT participant_id FROM event_participants WHERE event_id = ?1 ORDER BY position",
    )?;

    let ids = stmt
        .query_map(params![event_id.value.to_string()], |row| {
            let id_str: String = row.get(0)?;
            Ok(id_str)
        })?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|s| parse_id(&s))
        .collect::<GiftedResult<Vec<_>>>()?;

    Ok(ids)
}

fn build_event(
    conn: &Connection,
    (id_str, title, description, starts_on, ends_on): (String, String, Option<String>, String, String),
) -> GiftedResult<Event> {
    let event_id = parse_id(&id_str)?;
    Ok(Event {
        id: event_id,
        title,
        description,
        starts_on: parse_date(&starts_on)?,
        ends_on: parse_date(&ends_on)?,
        participant_ids: find_roster_ids(conn, event_id)?,
    })
}

fn parse_date(s: &str) -> GiftedResult<NaiveDate> {
    s.parse()
        .map_err(|e| GiftedError::Other(format!("Invalid date: {}", e)))
}
