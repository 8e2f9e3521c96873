//! Spawner com sinais bloqueados
//!
//! Protocolo (a ordem importa):
//! 1. Bloquear todos os sinais na thread chamadora, guardando a máscara.
//! 2. Criar o objeto de atributos e consultar o tamanho de pilha padrão.
//! 3. Registrar esse tamanho no descritor, sem modificação.
//! 4. Alocar o descritor e criar a thread apontada para o trampolim.
//! 5. Restaurar a máscara (sucesso ou falha).
//! 6. Falha na criação é fatal: libera o descritor, reporta, aborta.

use crate::core::fatal::fatal;
use crate::hal::{Platform, ThreadAttr};
use crate::sched::bridge::Bridge;
use crate::sched::core::entry::thread_entry;
use crate::sched::signal::SignalGuard;
use crate::sched::task::{Handoff, ThreadStart};
use crate::sys::FatalError;

impl<P: Platform> Bridge<P> {
    /// Cria uma thread do SO que executa `start.g` a partir de `start.entry`.
    ///
    /// Não retorna erro: se o SO recusar a thread, o processo termina.
    pub fn spawn(&self, mut start: ThreadStart) {
        let platform = &self.platform;
        crate::ktrace!("(Spawn) g=", start.g.addr());

        let signals = SignalGuard::block_all(platform);

        let attr = match platform.thread_attr() {
            Ok(attr) => attr,
            Err(err) => {
                signals.restore();
                fatal(platform, err);
            }
        };

        let size = match attr.stack_size() {
            Ok(size) => size,
            Err(err) => {
                drop(attr);
                signals.restore();
                fatal(platform, err);
            }
        };
        // Valor cru: o fallback para zero é aplicado no trampolim.
        start.set_stack_size(size);
        crate::ktrace!("(Spawn) stack size=", size);

        let handoff = Handoff {
            start,
            setg: self.setg,
            platform: platform.clone(),
        };

        let raw = match handoff.into_raw() {
            Ok(raw) => raw,
            Err(handoff) => {
                drop(handoff);
                signals.restore();
                fatal(platform, FatalError::OutOfMemory);
            }
        };

        // SAFETY: em Ok o bloco passa a pertencer à thread nova.
        let created =
            unsafe { platform.create_thread(&attr, thread_entry::<P>, raw.as_ptr().cast()) };

        drop(attr);
        signals.restore();

        if let Err(code) = created {
            // A thread nunca existiu: o descritor ainda é nosso.
            // SAFETY: `raw` veio de into_raw e ninguém mais o consumiu.
            drop(unsafe { Handoff::take(raw) });
            fatal(platform, FatalError::ThreadCreate(code));
        }
    }
}
