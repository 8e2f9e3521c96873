//! Guard de máscara de sinais
//!
//! Bloqueia todos os sinais na thread atual enquanto está vivo e restaura a
//! máscara anterior ao ser liberado. A thread criada nesse intervalo herda a
//! máscara cheia: nenhum handler roda nela antes do G ser registrado.

use crate::hal::Platform;

/// Bloqueio de todos os sinais com restauração automática
pub struct SignalGuard<'a, P: Platform> {
    platform: &'a P,
    saved: Option<P::SignalMask>,
}

impl<'a, P: Platform> SignalGuard<'a, P> {
    /// Bloqueia tudo e guarda a máscara anterior
    pub fn block_all(platform: &'a P) -> Self {
        let saved = platform.block_all_signals();
        Self {
            platform,
            saved: Some(saved),
        }
    }

    /// Restaura a máscara salva agora (equivale a dropar o guard)
    pub fn restore(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mask) = self.saved.take() {
            self.platform.restore_signals(&mask);
        }
    }
}

impl<P: Platform> Drop for SignalGuard<'_, P> {
    fn drop(&mut self) {
        self.release();
    }
}
