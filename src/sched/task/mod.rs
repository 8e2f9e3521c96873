//! Descritor de thread
//!
//! O registro de handoff que o criador entrega à thread nova.

pub mod start;

pub use start::{ThreadEntry, ThreadStart};
pub(crate) use start::Handoff;
