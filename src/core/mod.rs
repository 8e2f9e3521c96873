//! Núcleo da ponte: boot, falhas fatais e logging

pub mod boot;
pub mod fatal;
pub mod logging;
