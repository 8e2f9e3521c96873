//! Falhas fatais
//!
//! Ponto final de falhas irrecuperáveis da ponte: criação de thread recusada,
//! alocação falhou, spawn antes do init. Não há retry nem modo degradado.
//!
//! O diagnóstico é emitido SEMPRE, independente das features de log: é a
//! última coisa que o processo diz antes de morrer.

use crate::hal::console;
use crate::hal::Platform;
use crate::sys::FatalError;

/// Emite o diagnóstico e termina o processo via `platform.abort()`.
#[cold]
#[inline(never)]
pub fn fatal<P: Platform>(platform: &P, err: FatalError) -> ! {
    console::emit_str("systhread: ");
    console::emit_str(err.as_str());
    if let Some(code) = err.code() {
        console::emit_str(": ");
        console::emit_i32(code);
    }
    console::emit_nl();

    crate::kerror!("(Fatal) Abortando processo");
    platform.abort()
}
