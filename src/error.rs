use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftedError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("event cannot end before it starts ({starts_on}..{ends_on})")]
    InvalidDateRange {
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    },

    #[error("need at least 2 participants to shuffle, got {count}")]
    TooFewParticipants { count: usize },

    #[error("duplicate participant in shuffle input: {id}")]
    DuplicateParticipant { id: String },

    #[error("event not found: {id}")]
    EventNotFound { id: String },

    #[error("participant not found: {id}")]
    ParticipantNotFound { id: String },

    #[error("participant {participant_id} is not part of event {event_id}")]
    NotInEvent {
        participant_id: String,
        event_id: String,
    },

    #[error("username already taken: {username}")]
    UsernameTaken { username: String },

    #[error("gave up shuffling after {attempts} attempts")]
    ShuffleExhausted { attempts: usize },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type GiftedResult<T> = Result<T, GiftedError>;
