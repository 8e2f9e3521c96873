//! # Thread Bootstrap Subsystem
//!
//! O módulo `sched` é o caminho único pelo qual o runtime gerenciado ganha
//! threads reais do SO. O scheduler gerenciado pede; a ponte cria a thread,
//! diz a ela qual G executar e registra os limites de pilha desse G.
//!
//! ## 🎯 Propósito e Responsabilidade
//! - **Descritor:** `ThreadStart` carrega G + função de entrada para a thread nova.
//! - **Spawn:** cria a thread com todos os sinais bloqueados.
//! - **Trampolim:** registra o G antes de qualquer código gerenciado.
//! - **Pilha:** calcula `[lo, hi)` para o stack-guard do runtime.
//!
//! ## 🏗️ Arquitetura
//! 1. `Bridge::init` (em `core::boot`) roda uma vez e fixa a configuração.
//! 2. `Bridge::spawn` monta o handoff e chama `pthread_create`.
//! 3. `thread_entry` consome o handoff na thread nova.
//!
//! Não é uma API de threads de uso geral: sem join, sem cancelamento, sem retry.

pub mod bridge;
pub mod config;
pub mod core;
pub mod signal;
pub mod spawn;
pub mod stack;
pub mod task;


pub use bridge::Bridge;
pub use task::{ThreadEntry, ThreadStart};
