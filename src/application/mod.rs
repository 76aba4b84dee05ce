mod session;

pub use session::{MAX_EDITS_PER_TICK, Session, SessionError};
