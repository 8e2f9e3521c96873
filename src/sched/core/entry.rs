//! Trampolim de entrada para threads novas
//!
//! Primeiro código a rodar em toda thread criada pelo spawner, antes de
//! qualquer código gerenciado. Todos os sinais ainda estão bloqueados (a
//! máscara cheia foi herdada da criadora). Responsável por:
//! 1. Copiar o descritor para fora e liberá-lo.
//! 2. Rodar o hook pós-criação da plataforma (pilha de sinais herdada).
//! 3. Converter o tamanho de pilha em limites absolutos, restritos à pilha
//!    real da thread quando a plataforma a conhece, e gravá-los no G.
//! 4. Chamar o callback de registro com o G.
//! 5. Pular para a função de entrada.
//!
//! Logs daqui usam só write(2), sem formatação nem alocação.

use core::ffi::c_void;
use core::ptr::{self, NonNull};

use crate::hal::Platform;
use crate::sched::stack;
use crate::sched::task::Handoff;

/// Rotina passada a `pthread_create`. `arg` é o `Handoff<P>` do spawner.
pub extern "C" fn thread_entry<P: Platform>(arg: *mut c_void) -> *mut c_void {
    let Some(raw) = NonNull::new(arg.cast::<Handoff<P>>()) else {
        return ptr::null_mut();
    };

    // SAFETY: o spawner entregou a posse do bloco a esta thread.
    let Handoff {
        start,
        setg,
        platform,
    } = unsafe { Handoff::take(raw) };

    // Na criadora a pilha alternativa pode ter vindo junto. Remover aqui é
    // seguro: com tudo bloqueado, nenhum sinal chega no meio.
    platform.post_create();

    let reference = stack::frame_address();
    let bounds = stack::bounds_within(reference, start.stack_size(), platform.current_stack());
    // SAFETY: nenhum código gerenciado roda neste G ainda.
    unsafe { start.g.set_stack(bounds) };

    crate::ktrace!("(Entry) g=", start.g.addr());
    crate::ktrace!("(Entry) stack.lo=", bounds.lo);

    setg(start.g);

    start.entry.call();

    ptr::null_mut()
}
