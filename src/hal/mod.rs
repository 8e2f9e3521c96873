//! # Hardware/OS Abstraction Layer
//!
//! A ponte não fala com o SO diretamente: tudo passa pelo trait
//! [`Platform`](traits::Platform). Isso mantém o protocolo de spawn testável
//! (plataformas instrumentadas, injeção de falhas) e isola os quirks de cada
//! família de SO num único lugar.
//!
//! - `traits`  : superfície de capacidades exigida (threads, sinais, alocação, abort)
//! - `posix`   : implementação real sobre pthreads via `libc`
//! - `console` : saída de diagnóstico async-signal-safe em stderr

pub mod console;
pub mod posix;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use posix::PosixPlatform;
pub use traits::{Platform, Quirks, StartRoutine, ThreadAttr};
