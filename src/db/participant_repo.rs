use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::error::{GiftedError, GiftedResult};
use crate::model::{Id, Participant};

pub fn insert(conn: &Connection, participant: &Participant) -> GiftedResult<()> {
    conn.execute(
        "INSERT INTO participants (id, username, first_name, last_name, managed_by)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            participant.id.value.to_string(),
            participant.username,
            participant.first_name,
            participant.last_name,
            participant.managed_by.map(|id| id.value.to_string()),
        ],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, participant: &Participant) -> GiftedResult<()> {
    conn.execute(
        "UPDATE participants SET username = ?1, first_name = ?2, last_name = ?3, managed_by = ?4
         WHERE id = ?5",
        params![
            participant.username,
            participant.first_name,
            participant.last_name,
            participant.managed_by.map(|id| id.value.to_string()),
            participant.id.value.to_string(),
        ],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, id: Id<Participant>) -> GiftedResult<()> {
    conn.execute(
        "DELETE FROM participants WHERE id = ?1",
        params![id.value.to_string()],
    )?;
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: Id<Participant>) -> GiftedResult<Option<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, first_name, last_name, managed_by
         FROM participants WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.value.to_string()], |row| {
        Ok(row_to_participant(row))
    });

    match result {
        Ok(participant) => Ok(Some(participant?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_username(conn: &Connection, username: &str) -> GiftedResult<Option<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, first_name, last_name, managed_by
         FROM participants WHERE username = ?1 COLLATE NOCASE",
    )?;

    let result = stmt.query_row(params![username], |row| Ok(row_to_participant(row)));

    match result {
        Ok(participant) => Ok(Some(participant?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn all(conn: &Connection) -> GiftedResult<Vec<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, first_name, last_name, managed_by
         FROM participants ORDER BY username",
    )?;

    let participants = stmt
        .query_map([], |row| Ok(row_to_participant(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(participants)
}

/// Children (proxy accounts) managed by the given parent.
pub fn find_children(conn: &Connection, parent_id: Id<Participant>) -> GiftedResult<Vec<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, first_name, last_name, managed_by
         FROM participants WHERE managed_by = ?1 ORDER BY username",
    )?;

    let participants = stmt
        .query_map(params![parent_id.value.to_string()], |row| {
            Ok(row_to_participant(row))
        })?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(participants)
}

fn row_to_participant(row: &Row) -> GiftedResult<Participant> {
    let id_str: String = row.get(0)?;
    let username: String = row.get(1)?;
    let first_name: String = row.get(2)?;
    let last_name: String = row.get(3)?;
    let managed_by: Option<String> = row.get(4)?;

    Ok(Participant {
        id: parse_id(&id_str)?,
        username,
        first_name,
        last_name,
        managed_by: managed_by.as_deref().map(parse_id).transpose()?,
    })
}

pub(crate) fn parse_id<T>(s: &str) -> GiftedResult<Id<T>> {
    Ok(Id::new(Uuid::parse_str(s).map_err(|e| {
        GiftedError::Other(format!("Invalid UUID: {}", e))
    })?))
}
