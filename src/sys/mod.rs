//! Definições de Sistema
//!
//! Tipos compartilhados com o scheduler gerenciado (contexto "G", limites de
//! pilha, callback de registro) e a taxonomia de erros fatais da ponte.

pub mod error;
pub mod types;

pub use error::{FatalError, FatalResult};
pub use types::{GRef, SetgFn, Stack, G};
