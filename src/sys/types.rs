//! Tipos compartilhados com o scheduler gerenciado

use core::ptr::{self, NonNull};

/// Limites de pilha de um contexto gerenciado.
///
/// `lo` e `hi` são endereços absolutos: o runtime pode usar `[lo, hi)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stack {
    pub lo: usize,
    pub hi: usize,
}

impl Stack {
    /// Limites ainda não calculados
    pub const EMPTY: Self = Self { lo: 0, hi: 0 };

    pub const fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Tamanho da região (0 se vazia)
    pub const fn size(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    /// Verifica se `addr` cai dentro de `[lo, hi)`
    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.lo && addr < self.hi
    }
}

/// Cabeçalho do contexto de execução gerenciado ("G").
///
/// O scheduler embute este cabeçalho no offset 0 da sua própria estrutura de
/// contexto (`#[repr(C)]`). A ponte só escreve os dois limites de pilha.
#[repr(C)]
#[derive(Debug, Default)]
pub struct G {
    pub stack: Stack,
}

impl G {
    pub const fn new() -> Self {
        Self { stack: Stack::EMPTY }
    }
}

/// Referência opaca a um G do scheduler.
///
/// É só um ponteiro: a ponte não controla o tempo de vida do contexto. O
/// scheduler garante que o G vive enquanto a thread que o executa existir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GRef(NonNull<G>);

// SAFETY: o G é alocado pelo scheduler antes do spawn e seus limites são
// escritos uma única vez, antes de qualquer código gerenciado rodar.
unsafe impl Send for GRef {}
unsafe impl Sync for GRef {}

impl GRef {
    /// Cria a referência a partir de um ponteiro cru (None se nulo).
    ///
    /// # Safety
    ///
    /// `ptr` deve apontar para um `G` válido que sobreviva a todas as threads
    /// que o recebem.
    pub unsafe fn from_raw(ptr: *mut G) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    /// Cria a referência a partir de um G que vive para sempre.
    pub fn from_static(g: &'static mut G) -> Self {
        Self(NonNull::from(g))
    }

    /// Endereço do G (para logs)
    pub fn addr(self) -> usize {
        self.0.as_ptr() as usize
    }

    /// Lê os limites de pilha atuais.
    ///
    /// # Safety
    ///
    /// Nenhuma outra thread pode estar escrevendo nos limites.
    pub unsafe fn stack(self) -> Stack {
        ptr::read(ptr::addr_of!((*self.0.as_ptr()).stack))
    }

    /// Escreve os limites de pilha.
    ///
    /// # Safety
    ///
    /// Só a thread dona do G (ou o init, antes de haver outras) pode chamar.
    pub(crate) unsafe fn set_stack(self, stack: Stack) {
        ptr::write(ptr::addr_of_mut!((*self.0.as_ptr()).stack), stack);
    }
}

/// Callback de registro: "esta thread do SO agora executa este G".
pub type SetgFn = fn(GRef);
