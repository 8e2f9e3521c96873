//! Núcleo de execução: ponto de entrada das threads novas

pub mod entry;

pub use entry::thread_entry;
