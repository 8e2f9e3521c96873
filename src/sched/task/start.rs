//! ThreadStart: descritor de criação de thread
//!
//! Ciclo de vida:
//! 1. O scheduler constrói o `ThreadStart` (G alvo + função de entrada).
//! 2. O spawner o move para um `Handoff`, escrito em memória do alocador do
//!    host, e passa o ponteiro cru para `pthread_create`.
//! 3. O trampolim copia o `Handoff` para fora e libera a memória na hora.
//!
//! Criador e thread nova nunca tocam o descritor ao mesmo tempo: a escrita
//! termina antes de `pthread_create`, a leitura acontece na thread nova.

use alloc::boxed::Box;
use core::alloc::Layout;
use core::fmt;
use core::ptr::{self, NonNull};

use crate::hal::Platform;
use crate::sys::{GRef, SetgFn, Stack};

/// Função de entrada de uma thread.
///
/// Espera-se que não retorne (vira o loop permanente da thread). Se retornar,
/// a thread termina.
pub enum ThreadEntry {
    /// Função sem argumentos
    Func(fn()),
    /// Closure que viaja para a thread nova
    Boxed(Box<dyn FnOnce() + Send + 'static>),
}

impl ThreadEntry {
    pub fn boxed<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::Boxed(Box::new(f))
    }

    /// Executa a entrada, consumindo-a
    pub fn call(self) {
        match self {
            Self::Func(f) => f(),
            Self::Boxed(f) => f(),
        }
    }
}

impl From<fn()> for ThreadEntry {
    fn from(f: fn()) -> Self {
        Self::Func(f)
    }
}

impl fmt::Debug for ThreadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(func) => f.debug_tuple("Func").field(&(*func as usize)).finish(),
            Self::Boxed(_) => f.write_str("Boxed(..)"),
        }
    }
}

/// Descritor de criação de thread
#[derive(Debug)]
pub struct ThreadStart {
    /// Contexto gerenciado que a thread nova vai executar
    pub g: GRef,
    /// Função de entrada
    pub entry: ThreadEntry,
    /// Limites de pilha. Entre o spawn e o trampolim, `hi` carrega o TAMANHO
    /// da pilha, cru como o SO reportou; o trampolim converte para endereços
    /// absolutos.
    pub(crate) stack: Stack,
}

impl ThreadStart {
    pub fn new(g: GRef, entry: ThreadEntry) -> Self {
        Self {
            g,
            entry,
            stack: Stack::EMPTY,
        }
    }

    /// Registra o tamanho da pilha, ainda sem base absoluta
    pub(crate) fn set_stack_size(&mut self, size: usize) {
        self.stack = Stack::new(0, size);
    }

    /// Tamanho registrado pelo spawner
    pub(crate) fn stack_size(&self) -> usize {
        self.stack.hi
    }
}

/// Bloco entregue à thread nova: o descritor mais a configuração injetada
/// (callback de registro e plataforma).
pub(crate) struct Handoff<P: Platform> {
    pub start: ThreadStart,
    pub setg: SetgFn,
    pub platform: P,
}

impl<P: Platform> Handoff<P> {
    const LAYOUT: Layout = Layout::new::<Self>();

    /// Move o bloco para memória do alocador do host.
    ///
    /// Em falha de alocação devolve o bloco intacto para o chamador descartar.
    pub fn into_raw(self) -> Result<NonNull<Self>, Self> {
        // SAFETY: Handoff nunca tem tamanho zero (contém um GRef).
        let mem = unsafe { self.platform.alloc(Self::LAYOUT) };
        match NonNull::new(mem.cast::<Self>()) {
            Some(raw) => {
                // SAFETY: memória nova, alinhada e do tamanho de Self.
                unsafe { ptr::write(raw.as_ptr(), self) };
                Ok(raw)
            }
            None => Err(self),
        }
    }

    /// Copia o bloco para fora e libera a memória. Nenhum acesso depois disso.
    ///
    /// # Safety
    ///
    /// `raw` deve ter vindo de `into_raw` e ser consumido exatamente uma vez.
    pub unsafe fn take(raw: NonNull<Self>) -> Self {
        let handoff = ptr::read(raw.as_ptr());
        handoff.platform.free(raw.as_ptr().cast(), Self::LAYOUT);
        handoff
    }
}
