//! Boot da ponte e superfície global
//!
//! `init` e `thread_start` são os dois pontos de entrada que o runtime
//! gerenciado usa. A configuração fica num `spin::Once`: escrita uma vez no
//! init, só lida depois. A ordem "init antes do primeiro spawn" é garantida
//! pelo chamador; spawn sem init é fatal.

pub mod init;

use spin::Once;

use crate::core::fatal::fatal;
use crate::hal::{Platform, PosixPlatform};
use crate::sched::{Bridge, ThreadStart};
use crate::sys::{FatalError, GRef, SetgFn};

/// Ponte global do processo
static BRIDGE: Once<Bridge<PosixPlatform>> = Once::new();

/// Inicializa a ponte global. Chamadas depois da primeira são ignoradas.
pub fn init(g: GRef, setg: SetgFn) {
    let mut fresh = false;
    BRIDGE.call_once(|| {
        fresh = true;
        Bridge::init(PosixPlatform, g, setg)
    });

    if !fresh {
        crate::kwarn!("(Boot) init chamado de novo; configuração original mantida. g=", g.addr());
    }
}

/// Cria uma thread do SO para `start` usando a ponte global.
pub fn thread_start(start: ThreadStart) {
    dispatch(BRIDGE.get(), &PosixPlatform, start);
}

/// Spawn pela ponte, ou falha fatal em `platform` se ainda não houver ponte.
pub(crate) fn dispatch<P: Platform>(bridge: Option<&Bridge<P>>, platform: &P, start: ThreadStart) {
    match bridge {
        Some(bridge) => bridge.spawn(start),
        None => fatal(platform, FatalError::NotInitialized),
    }
}

/// Ponte global, se já inicializada
pub fn bridge() -> Option<&'static Bridge<PosixPlatform>> {
    BRIDGE.get()
}
