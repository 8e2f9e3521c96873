//! Trait de Plataforma
//!
//! Superfície de capacidades que a ponte exige do SO e do alocador do host.
//! Nada aqui é específico de pthreads, mas os nomes seguem POSIX porque é o
//! único alvo real.

use core::alloc::Layout;
use core::ffi::c_void;

use crate::sys::{FatalResult, Stack};

/// Assinatura da rotina de entrada de uma thread nativa
pub type StartRoutine = extern "C" fn(*mut c_void) -> *mut c_void;

bitflags::bitflags! {
    /// Comportamentos herdados pela thread nova que precisam de correção.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Quirks: u32 {
        /// A thread nova herda a pilha alternativa de sinais da criadora
        /// (NetBSD). Conflita com a pilha que o runtime instala depois.
        const INHERITS_SIGNAL_STACK = 1 << 0;
    }
}

/// Objeto de atributos de thread (pthread_attr_t)
pub trait ThreadAttr {
    /// Tamanho de pilha padrão reportado pelo SO, em bytes (cru, pode ser 0)
    fn stack_size(&self) -> FatalResult<usize>;
}

/// Abstração do SO usada pela ponte
pub trait Platform: Clone + Send + Sync + 'static {
    /// Máscara de sinais salva
    type SignalMask;

    /// Atributos de criação de thread
    type ThreadAttr: ThreadAttr;

    /// Bloqueia todos os sinais na thread atual, retornando a máscara anterior
    fn block_all_signals(&self) -> Self::SignalMask;

    /// Restaura uma máscara salva por `block_all_signals`
    fn restore_signals(&self, mask: &Self::SignalMask);

    /// Cria um objeto de atributos com os valores padrão do SO
    fn thread_attr(&self) -> FatalResult<Self::ThreadAttr>;

    /// Cria uma thread do SO rodando `start(arg)`.
    ///
    /// Retorna o código de erro do SO em caso de falha. Nunca tenta de novo.
    ///
    /// # Safety
    ///
    /// `arg` passa a pertencer à thread nova se (e somente se) retornar Ok.
    unsafe fn create_thread(
        &self,
        attr: &Self::ThreadAttr,
        start: StartRoutine,
        arg: *mut c_void,
    ) -> Result<(), i32>;

    /// Pilha real da thread atual `[base, topo)`, se o SO sabe informar.
    fn current_stack(&self) -> Option<Stack>;

    /// Quirks desta família de SO
    fn quirks(&self) -> Quirks;

    /// Desabilita a pilha alternativa de sinais da thread atual
    fn disable_signal_stack(&self);

    /// Aloca um bloco cru no alocador do host (nulo em falha)
    ///
    /// # Safety
    ///
    /// `layout` deve ter tamanho não nulo.
    unsafe fn alloc(&self, layout: Layout) -> *mut u8;

    /// Libera um bloco obtido de `alloc`
    ///
    /// # Safety
    ///
    /// `ptr` deve ter vindo de `alloc` com o mesmo `layout` e não ter sido liberado.
    unsafe fn free(&self, ptr: *mut u8, layout: Layout);

    /// Termina o processo imediatamente
    fn abort(&self) -> !;

    /// Hook pós-criação, executado incondicionalmente no trampolim.
    ///
    /// Corrige o estado herdado que a plataforma declara em `quirks`. É no-op
    /// onde nenhum quirk se aplica.
    fn post_create(&self) {
        if self.quirks().contains(Quirks::INHERITS_SIGNAL_STACK) {
            self.disable_signal_stack();
        }
    }
}
