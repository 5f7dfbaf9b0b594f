//! Document processor Lambda handler and its pipeline steps

pub mod deliver;
pub mod handler;
pub mod summarize;

// Re-export the main handler for convenience
pub use handler::{handler, process_event};
