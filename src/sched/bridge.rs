//! Configuração injetada da ponte
//!
//! `Bridge` é o resultado do init: a plataforma e o callback de registro,
//! imutáveis depois de criados. Cada spawn copia os dois para o bloco de
//! handoff, então o trampolim nunca consulta estado global.

use crate::hal::Platform;
use crate::sys::SetgFn;

/// Ponte de bootstrap configurada
pub struct Bridge<P: Platform> {
    pub(crate) platform: P,
    pub(crate) setg: SetgFn,
}

impl<P: Platform> Bridge<P> {
    /// Callback de registro capturado no init
    pub fn setg(&self) -> SetgFn {
        self.setg
    }
}
