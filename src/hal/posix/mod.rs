//! Plataforma POSIX (pthreads)
//!
//! Implementação real de [`Platform`] sobre `libc`:
//! - máscara de sinais via `pthread_sigmask`
//! - atributos e criação via `pthread_attr_*` / `pthread_create`
//! - pilha alternativa via `sigaltstack`
//! - alocação via `posix_memalign` / `free`
//! - pilha real da thread via `pthread_getattr_np` (Linux) ou
//!   `pthread_get_stackaddr_np` (macOS)

use core::alloc::Layout;
use core::ffi::c_void;
use core::mem::{self, MaybeUninit};
use core::ptr;

use crate::hal::traits::{Platform, Quirks, StartRoutine, ThreadAttr};
use crate::sys::{FatalError, FatalResult, Stack};

/// Alinhamento mínimo aceito por posix_memalign
const MIN_ALIGN: usize = mem::size_of::<usize>();

/// Plataforma POSIX. Sem estado: tudo vive no SO.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPlatform;

/// `pthread_attr_t` inicializado, destruído no Drop.
pub struct PthreadAttr {
    raw: libc::pthread_attr_t,
}

impl PthreadAttr {
    /// Inicializa com os padrões do SO. Threads saem destacadas (detached):
    /// ninguém faz join nelas.
    pub fn new() -> FatalResult<Self> {
        let mut raw = MaybeUninit::<libc::pthread_attr_t>::uninit();

        // SAFETY: pthread_attr_init inicializa o objeto apontado.
        let rc = unsafe { libc::pthread_attr_init(raw.as_mut_ptr()) };
        if rc != 0 {
            return Err(FatalError::ThreadAttr(rc));
        }

        // SAFETY: inicializado acima com sucesso.
        let mut attr = Self { raw: unsafe { raw.assume_init() } };

        // SAFETY: attr.raw é um atributo válido.
        let rc = unsafe {
            libc::pthread_attr_setdetachstate(&mut attr.raw, libc::PTHREAD_CREATE_DETACHED)
        };
        if rc != 0 {
            return Err(FatalError::ThreadAttr(rc));
        }

        Ok(attr)
    }

    pub fn as_ptr(&self) -> *const libc::pthread_attr_t {
        &self.raw
    }
}

impl ThreadAttr for PthreadAttr {
    fn stack_size(&self) -> FatalResult<usize> {
        let mut size: libc::size_t = 0;
        // SAFETY: atributo válido; getstacksize só escreve em `size`.
        let rc = unsafe { libc::pthread_attr_getstacksize(&self.raw, &mut size) };
        if rc != 0 {
            return Err(FatalError::ThreadAttr(rc));
        }
        Ok(size)
    }
}

impl Drop for PthreadAttr {
    fn drop(&mut self) {
        // SAFETY: inicializado em `new`, destruído uma única vez.
        unsafe { libc::pthread_attr_destroy(&mut self.raw) };
    }
}

/// Lê a máscara de sinais atual sem alterá-la.
pub fn current_signal_mask() -> libc::sigset_t {
    let mut cur = MaybeUninit::<libc::sigset_t>::uninit();
    // SAFETY: SIG_BLOCK com conjunto nulo só consulta a máscara.
    unsafe {
        libc::sigemptyset(cur.as_mut_ptr());
        libc::pthread_sigmask(libc::SIG_BLOCK, ptr::null(), cur.as_mut_ptr());
        cur.assume_init()
    }
}

/// Indica se `current_stack` tem implementação neste alvo
pub const KNOWS_THREAD_STACK: bool = cfg!(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos"
));

/// Pilha da thread atual segundo a libc.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn thread_stack() -> Option<Stack> {
    let mut attr = MaybeUninit::<libc::pthread_attr_t>::uninit();

    // SAFETY: getattr_np inicializa `attr` em sucesso; destruído logo depois.
    unsafe {
        if libc::pthread_getattr_np(libc::pthread_self(), attr.as_mut_ptr()) != 0 {
            return None;
        }

        let mut addr: *mut c_void = ptr::null_mut();
        let mut size: libc::size_t = 0;
        let rc = libc::pthread_attr_getstack(attr.as_ptr(), &mut addr, &mut size);
        libc::pthread_attr_destroy(attr.as_mut_ptr());

        if rc != 0 || addr.is_null() || size == 0 {
            return None;
        }
        let lo = addr as usize;
        Some(Stack::new(lo, lo.saturating_add(size)))
    }
}

/// Pilha da thread atual segundo a libc.
#[cfg(target_os = "macos")]
pub fn thread_stack() -> Option<Stack> {
    // SAFETY: consultas somente leitura sobre a própria thread.
    let (hi, size) = unsafe {
        let this = libc::pthread_self();
        (
            libc::pthread_get_stackaddr_np(this) as usize,
            libc::pthread_get_stacksize_np(this),
        )
    };
    if hi == 0 || size == 0 {
        return None;
    }
    Some(Stack::new(hi.saturating_sub(size), hi))
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
pub fn thread_stack() -> Option<Stack> {
    None
}

impl Platform for PosixPlatform {
    type SignalMask = libc::sigset_t;
    type ThreadAttr = PthreadAttr;

    fn block_all_signals(&self) -> libc::sigset_t {
        let mut all = MaybeUninit::<libc::sigset_t>::uninit();
        let mut old = MaybeUninit::<libc::sigset_t>::uninit();

        // SAFETY: ambos os conjuntos são inicializados antes do uso.
        unsafe {
            libc::sigfillset(all.as_mut_ptr());
            libc::sigemptyset(old.as_mut_ptr());
            libc::pthread_sigmask(libc::SIG_SETMASK, all.as_ptr(), old.as_mut_ptr());
            old.assume_init()
        }
    }

    fn restore_signals(&self, mask: &libc::sigset_t) {
        // SAFETY: `mask` veio de block_all_signals.
        unsafe { libc::pthread_sigmask(libc::SIG_SETMASK, mask, ptr::null_mut()) };
    }

    fn thread_attr(&self) -> FatalResult<PthreadAttr> {
        PthreadAttr::new()
    }

    unsafe fn create_thread(
        &self,
        attr: &PthreadAttr,
        start: StartRoutine,
        arg: *mut c_void,
    ) -> Result<(), i32> {
        let mut tid = MaybeUninit::<libc::pthread_t>::uninit();
        match libc::pthread_create(tid.as_mut_ptr(), attr.as_ptr(), start, arg) {
            0 => Ok(()),
            err => Err(err),
        }
    }

    fn current_stack(&self) -> Option<Stack> {
        thread_stack()
    }

    fn quirks(&self) -> Quirks {
        if cfg!(target_os = "netbsd") {
            Quirks::INHERITS_SIGNAL_STACK
        } else {
            Quirks::empty()
        }
    }

    fn disable_signal_stack(&self) {
        // SAFETY: stack_t zerado + SS_DISABLE é a forma documentada de
        // remover a pilha alternativa; ss_sp e ss_size são ignorados.
        unsafe {
            let mut ss: libc::stack_t = mem::zeroed();
            ss.ss_flags = libc::SS_DISABLE;
            libc::sigaltstack(&ss, ptr::null_mut());
        }
    }

    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let mut out: *mut c_void = ptr::null_mut();
        let align = layout.align().max(MIN_ALIGN);
        match libc::posix_memalign(&mut out, align, layout.size()) {
            0 => out.cast(),
            _ => ptr::null_mut(),
        }
    }

    unsafe fn free(&self, ptr: *mut u8, _layout: Layout) {
        libc::free(ptr.cast());
    }

    fn abort(&self) -> ! {
        // SAFETY: abort(3) não retorna.
        unsafe { libc::abort() }
    }
}
