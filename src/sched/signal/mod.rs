//! Controle de sinais durante o spawn

pub mod mask;

pub use mask::SignalGuard;
