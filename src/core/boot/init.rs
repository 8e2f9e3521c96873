//! Arquivo: core/boot/init.rs
//!
//! Propósito: Inicialização única da ponte.
//! Roda na thread de bootstrap, antes do primeiro spawn, chamada pela
//! sequência de startup do runtime com o G da thread de bootstrap e o
//! callback de registro.
//!
//! Detalhes de Implementação:
//! - Guarda o callback na configuração injetada (`Bridge`).
//! - Força uma alocação no heap antes de qualquer outra coisa. Alguns
//!   sanitizers de memória invalidam a primeira alocação se um mmap veio
//!   antes; alocar aqui garante que essa "primeira" não seja de ninguém.
//!   O bloco é escrito para que o compilador não elimine a chamada.
//! - Consulta o tamanho de pilha padrão e fixa os limites do G de bootstrap,
//!   restritos à pilha real da thread quando a plataforma a conhece.

use core::alloc::Layout;
use core::ptr::{self, NonNull};

use crate::core::fatal::fatal;
use crate::hal::{Platform, ThreadAttr};
use crate::sched::stack;
use crate::sched::Bridge;
use crate::sys::{FatalError, GRef, SetgFn};

impl<P: Platform> Bridge<P> {
    /// Inicializa a ponte e os limites de pilha do G de bootstrap.
    ///
    /// Falha de alocação é fatal (mesmo tratamento de falha de criação de thread).
    pub fn init(platform: P, g: GRef, setg: SetgFn) -> Self {
        let reference = stack::frame_address();
        let bridge = Self { platform, setg };
        let platform = &bridge.platform;

        let layout = defensive_layout::<P>();
        // SAFETY: layout tem tamanho não nulo.
        let block = unsafe { platform.alloc(layout) };
        let Some(block) = NonNull::new(block) else {
            fatal(platform, FatalError::OutOfMemory);
        };
        // SAFETY: bloco recém-alocado com pelo menos um byte.
        unsafe { ptr::write_volatile(block.as_ptr(), 0) };

        let size = match platform.thread_attr().and_then(|attr| attr.stack_size()) {
            Ok(size) => size,
            Err(err) => fatal(platform, err),
        };

        let bounds = stack::bounds_within(reference, size, platform.current_stack());
        // SAFETY: nenhuma outra thread existe ainda para este G.
        unsafe { g.set_stack(bounds) };

        // SAFETY: mesmo layout da alocação acima.
        unsafe { platform.free(block.as_ptr(), layout) };

        crate::kok!("(Boot) Bridge inicializada");
        crate::kinfo!("(Boot) g=", g.addr());
        crate::kdebug!("(Boot) stack.lo=", bounds.lo);
        crate::kdebug!("(Boot) stack.hi=", bounds.hi);

        bridge
    }
}

/// Layout da alocação defensiva: um objeto de atributos de thread.
fn defensive_layout<P: Platform>() -> Layout {
    let layout = Layout::new::<P::ThreadAttr>();
    if layout.size() == 0 {
        Layout::new::<usize>()
    } else {
        layout
    }
}
