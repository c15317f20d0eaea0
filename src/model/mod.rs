pub mod ids;
pub mod participant;
pub mod event;
pub mod pair;

// Re-exports for convenience
pub use event::Event;
pub use ids::Id;
pub use pair::Pair;
pub use participant::Participant;
