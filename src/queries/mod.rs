pub mod event_queries;
pub mod pair_queries;
