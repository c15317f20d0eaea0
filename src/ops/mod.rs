pub mod participant_ops;
pub mod event_ops;
pub mod matchmake_ops;
