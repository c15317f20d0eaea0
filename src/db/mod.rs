pub mod schema;
pub mod participant_repo;
pub mod event_repo;
pub mod pair_repo;
