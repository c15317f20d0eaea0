use rusqlite::{params, Connection, Row};

use crate::db::participant_repo::parse_id;
use crate::error::GiftedResult;
use crate::model::{Event, Id, Pair, Participant};

pub fn insert(conn: &Connection, pair: &Pair) -> GiftedResult<()> {
    conn.execute(
        "INSERT INTO pairs (event_id, gifter_id, giftee_id) VALUES (?1, ?2, ?3)",
        params![
            pair.event_id.value.to_string(),
            pair.gifter_id.value.to_string(),
            pair.giftee_id.value.to_string(),
        ],
    )?;
    Ok(())
}

/// Overwrite the giftee for an existing `(event, gifter)` row. Touches no
/// other column, so `created_at` survives reshuffles.
pub fn update_giftee(
    conn: &Connection,
    event_id: Id<Event>,
    gifter_id: Id<Participant>,
    giftee_id: Id<Participant>,
) -> GiftedResult<()> {
    conn.execute(
        "UPDATE pairs SET giftee_id = ?1 WHERE event_id = ?2 AND gifter_id = ?3",
        params![
            giftee_id.value.to_string(),
            event_id.value.to_string(),
            gifter_id.value.to_string(),
        ],
    )?;
    Ok(())
}

pub fn find_by_gifter(
    conn: &Connection,
    event_id: Id<Event>,
    gifter_id: Id<Participant>,
) -> GiftedResult<Option<Pair>> {
    let mut stmt = conn.prepare(
        "SELECT event_id, gifter_id, giftee_id, created_at
         FROM pairs WHERE event_id = ?1 AND gifter_id = ?2",
    )?;

    let result = stmt.query_row(
        params![event_id.value.to_string(), gifter_id.value.to_string()],
        |row| Ok(row_to_pair(row)),
    );

    match result {
        Ok(pair) => Ok(Some(pair?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_event(conn: &Connection, event_id: Id<Event>) -> GiftedResult<Vec<Pair>> {
    let mut stmt = conn.prepare(
        "SELECT event_id, gifter_id, giftee_id, created_at
         FROM pairs WHERE event_id = ?1 ORDER BY created_at, gifter_id",
    )?;

    let pairs = stmt
        .query_map(params![event_id.value.to_string()], |row| {
            Ok(row_to_pair(row))
        })?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pairs)
}

fn row_to_pair(row: &Row) -> GiftedResult<Pair> {
    let event_id: String = row.get(0)?;
    let gifter_id: String = row.get(1)?;
    let giftee_id: String = row.get(2)?;
    let created_at: Option<String> = row.get(3)?;

    Ok(Pair {
        event_id: parse_id(&event_id)?,
        gifter_id: parse_id(&gifter_id)?,
        giftee_id: parse_id(&giftee_id)?,
        created_at,
    })
}
