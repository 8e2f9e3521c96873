//! Traits do HAL
//!
//! Define as interfaces abstratas para o SO.

pub mod platform;

pub use platform::*;
