//! Session state and pure transitions shared by every front end

mod state;

pub use state::{Action, Event, Session};
