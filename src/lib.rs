// Domain layer - board state and tick rules
pub mod domain;

// Application layer - session coordination
pub mod application;

// Infrastructure layer - console driver
pub mod console;

// Re-exports for convenience
pub use application::{MAX_EDITS_PER_TICK, Session, SessionError};
pub use domain::{Cell, GridError, LifeGrid, Pattern, presets};
