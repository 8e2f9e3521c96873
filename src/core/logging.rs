// =============================================================================
// SYSTHREAD LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging da ponte de threads com custo ZERO quando desligado.
//
// ARQUITETURA:
// - Usa features do Cargo para filtragem em tempo de compilação
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - nada de formatação, nada de alocação
// - Escreve APENAS em stderr via write(2) (async-signal-safe)
//
// O último ponto é o que importa aqui: o trampolim roda com todos os sinais
// bloqueados e antes de o runtime conhecer a thread. Só é permitido chamar
// funções async-signal-safe, então nada de std::io nem de locks.
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal (init, configuração)
// - DEBUG: Informações de debugging
// - TRACE: Cada spawn, cada entrada de thread
//
// COMO USAR:
//   crate::kinfo!("(Boot) Bridge pronta");          // Apenas string
//   crate::ktrace!("(Spawn) g=", g.addr());          // String + hex
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

/// Emite uma linha completa: prefixo + mensagem.
#[doc(hidden)]
#[inline(never)]
pub fn emit_line(prefix: &str, msg: &str) {
    crate::hal::console::emit_str(prefix);
    crate::hal::console::emit_str(msg);
    crate::hal::console::emit_nl();
}

/// Emite uma linha completa: prefixo + mensagem + valor em hex.
#[doc(hidden)]
#[inline(never)]
pub fn emit_line_hex(prefix: &str, msg: &str, val: u64) {
    crate::hal::console::emit_str(prefix);
    crate::hal::console::emit_str(msg);
    crate::hal::console::emit_hex(val);
    crate::hal::console::emit_nl();
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(all(feature = "log_error", not(feature = "no_logs")))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_ERROR, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_ERROR, $msg, $val as u64);
    }};
}

#[cfg(not(all(feature = "log_error", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================
//
// Mesmo gate do ERROR: avisos da ponte são raros e sempre indicam uso indevido.
//

#[cfg(all(feature = "log_error", not(feature = "no_logs")))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_WARN, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_WARN, $msg, $val as u64);
    }};
}

#[cfg(not(all(feature = "log_error", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(all(feature = "log_info", not(feature = "no_logs")))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_INFO, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_INFO, $msg, $val as u64);
    }};
}

#[cfg(not(all(feature = "log_info", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(all(feature = "log_debug", not(feature = "no_logs")))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_DEBUG, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_DEBUG, $msg, $val as u64);
    }};
}

#[cfg(not(all(feature = "log_debug", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(all(feature = "log_trace", not(feature = "no_logs")))]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::core::logging::emit_line($crate::core::logging::P_TRACE, $msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_line_hex($crate::core::logging::P_TRACE, $msg, $val as u64);
    }};
}

#[cfg(not(all(feature = "log_trace", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE STATUS
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]). Mesmo gate do INFO.
#[cfg(all(feature = "log_info", not(feature = "no_logs")))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::core::logging::emit_line("\x1b[32m[OK]\x1b[0m ", $msg);
    }};
}

#[cfg(not(all(feature = "log_info", not(feature = "no_logs"))))]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}
