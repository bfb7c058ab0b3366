//! Data models shared between the client and the server.

mod register;

pub use register::{Field, RegisterData, RegisterOutcome};
