//! systhread: ponte de bootstrap de threads do SO.
//!
//! Permite que o runtime gerenciado do Redstone (contextos leves com limites
//! de pilha explícitos) crie threads reais do SO sem uma camada de FFI
//! completa. Para cada thread nova a ponte:
//! 1. pede ao SO uma thread com tamanho de pilha conhecido;
//! 2. informa à thread qual contexto gerenciado ("G") ela executa, antes de
//!    qualquer código gerenciado;
//! 3. calcula e grava os limites de pilha desse G.
//!
//! Pontos de entrada: [`init`] uma vez no startup, [`thread_start`] a cada
//! thread nova. Para plataformas customizadas, use [`Bridge`] diretamente.

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (closures de entrada em Box)
extern crate alloc;

// --- Módulos de Baixo Nível (SO) ---
pub mod hal; // Superfície POSIX, console de diagnóstico

// --- Módulos Centrais ---
pub mod core; // Boot, falhas fatais, logging
pub mod sched; // Descritor, spawn, trampolim, pilha
pub mod sys; // Tipos compartilhados e erros

pub use crate::core::boot::{init, thread_start};
pub use crate::hal::{Platform, PosixPlatform};
pub use crate::sched::{Bridge, ThreadEntry, ThreadStart};
pub use crate::sys::{FatalError, GRef, SetgFn, Stack, G};
