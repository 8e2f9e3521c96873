//! Cálculo de limites de pilha
//!
//! Aritmética pura: a partir do tamanho de pilha reportado pelo SO e de um
//! endereço de referência dentro da pilha atual, deriva `[lo, hi)`.
//!
//! A pilha cresce para baixo. A referência é aproximada (endereço de uma
//! variável local), por isso `lo` fica uma página acima do mínimo teórico.
//! Quando a plataforma conhece a pilha real da thread, `lo` nunca desce
//! abaixo da base real mais a margem: acima da referência ainda há TLS e
//! frames de partida que o `reference - size` não enxerga.

use super::config::{FALLBACK_STACK_SIZE, STACK_GUARD_MARGIN};
use crate::sys::Stack;

/// Tamanho efetivo: o reportado pelo SO, ou o fallback se vier zero.
#[inline]
pub const fn effective_size(reported: usize) -> usize {
    if reported == 0 {
        FALLBACK_STACK_SIZE
    } else {
        reported
    }
}

/// Limite inferior: `reference - size + margem`, saturado e nunca acima de `reference`.
#[inline]
pub const fn low_bound(reference: usize, size: usize) -> usize {
    let lo = reference.saturating_sub(size).saturating_add(STACK_GUARD_MARGIN);
    if lo > reference {
        reference
    } else {
        lo
    }
}

/// Limites absolutos com `hi = reference`. `size` é o valor cru do SO.
#[inline]
pub const fn bounds_from(reference: usize, size: usize) -> Stack {
    Stack::new(low_bound(reference, effective_size(size)), reference)
}

/// Restringe `bounds` à pilha real `real`, mantendo a margem sobre a base.
#[inline]
pub const fn clamp_to(bounds: Stack, real: Stack) -> Stack {
    let floor = real.lo.saturating_add(STACK_GUARD_MARGIN);
    let hi = if bounds.hi < real.hi { bounds.hi } else { real.hi };
    let lo = if bounds.lo > floor { bounds.lo } else { floor };
    let lo = if lo > hi { hi } else { lo };
    Stack::new(lo, hi)
}

/// `bounds_from`, restrito à pilha real quando ela é conhecida.
#[inline]
pub const fn bounds_within(reference: usize, size: usize, real: Option<Stack>) -> Stack {
    let bounds = bounds_from(reference, size);
    match real {
        Some(real) => clamp_to(bounds, real),
        None => bounds,
    }
}

/// Endereço aproximado do frame atual.
///
/// `#[inline(always)]` para que a variável fique no frame de quem chama.
#[inline(always)]
pub fn frame_address() -> usize {
    let anchor = 0u8;
    core::hint::black_box(core::ptr::addr_of!(anchor)) as usize
}
