//! Plataforma instrumentada para testes
//!
//! Delega tudo à `PosixPlatform` (as threads são reais), mas conta
//! alocações, liberações, criações e aborts, e permite injetar falhas. O
//! `abort` entra em pânico para que o caminho fatal seja observável com
//! `catch_unwind`.

use core::alloc::Layout;
use core::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::hal::posix::{PosixPlatform, PthreadAttr};
use crate::hal::traits::{Platform, Quirks, StartRoutine, ThreadAttr};
use crate::sys::{FatalError, FatalResult, Stack};

/// Sinais capturáveis que precisam estar bloqueados no trampolim
pub const CATCHABLE: &[libc::c_int] = &[
    libc::SIGHUP,
    libc::SIGINT,
    libc::SIGQUIT,
    libc::SIGUSR1,
    libc::SIGUSR2,
    libc::SIGPIPE,
    libc::SIGALRM,
    libc::SIGTERM,
    libc::SIGCHLD,
    libc::SIGURG,
];

#[derive(Debug, Default)]
pub struct Counters {
    pub allocs: AtomicUsize,
    pub frees: AtomicUsize,
    pub creates: AtomicUsize,
    pub aborts: AtomicUsize,
    pub signal_stack_resets: AtomicUsize,
}

impl Counters {
    pub fn allocs(&self) -> usize {
        self.allocs.load(Ordering::SeqCst)
    }

    pub fn frees(&self) -> usize {
        self.frees.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn aborts(&self) -> usize {
        self.aborts.load(Ordering::SeqCst)
    }

    pub fn signal_stack_resets(&self) -> usize {
        self.signal_stack_resets.load(Ordering::SeqCst)
    }
}

/// Atributos reais, com falha opcional na consulta do tamanho de pilha
pub struct TestAttr {
    inner: PthreadAttr,
    fail_stack_size: Option<i32>,
}

impl ThreadAttr for TestAttr {
    fn stack_size(&self) -> FatalResult<usize> {
        match self.fail_stack_size {
            Some(code) => Err(FatalError::ThreadAttr(code)),
            None => self.inner.stack_size(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestPlatform {
    inner: PosixPlatform,
    pub counters: Arc<Counters>,
    fail_create: Option<i32>,
    fail_alloc: bool,
    fail_stack_size: Option<i32>,
    quirks: Quirks,
}

impl TestPlatform {
    pub fn new() -> Self {
        Self {
            inner: PosixPlatform,
            counters: Arc::new(Counters::default()),
            fail_create: None,
            fail_alloc: false,
            fail_stack_size: None,
            quirks: Quirks::empty(),
        }
    }

    /// pthread_create sempre falha com `code`
    pub fn failing_create(code: i32) -> Self {
        Self {
            fail_create: Some(code),
            ..Self::new()
        }
    }

    /// Toda alocação retorna nulo
    pub fn failing_alloc() -> Self {
        Self {
            fail_alloc: true,
            ..Self::new()
        }
    }

    /// pthread_attr_getstacksize sempre falha com `code`
    pub fn failing_stack_size(code: i32) -> Self {
        Self {
            fail_stack_size: Some(code),
            ..Self::new()
        }
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        Self {
            quirks,
            ..Self::new()
        }
    }
}

impl Platform for TestPlatform {
    type SignalMask = libc::sigset_t;
    type ThreadAttr = TestAttr;

    fn block_all_signals(&self) -> libc::sigset_t {
        self.inner.block_all_signals()
    }

    fn restore_signals(&self, mask: &libc::sigset_t) {
        self.inner.restore_signals(mask)
    }

    fn thread_attr(&self) -> FatalResult<TestAttr> {
        Ok(TestAttr {
            inner: self.inner.thread_attr()?,
            fail_stack_size: self.fail_stack_size,
        })
    }

    unsafe fn create_thread(
        &self,
        attr: &TestAttr,
        start: StartRoutine,
        arg: *mut c_void,
    ) -> Result<(), i32> {
        self.counters.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.fail_create {
            return Err(code);
        }
        self.inner.create_thread(&attr.inner, start, arg)
    }

    fn current_stack(&self) -> Option<Stack> {
        self.inner.current_stack()
    }

    fn quirks(&self) -> Quirks {
        self.quirks
    }

    fn disable_signal_stack(&self) {
        self.counters.signal_stack_resets.fetch_add(1, Ordering::SeqCst);
        self.inner.disable_signal_stack()
    }

    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if self.fail_alloc {
            return core::ptr::null_mut();
        }
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.counters.allocs.fetch_add(1, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn free(&self, ptr: *mut u8, layout: Layout) {
        self.counters.frees.fetch_add(1, Ordering::SeqCst);
        self.inner.free(ptr, layout)
    }

    fn abort(&self) -> ! {
        self.counters.aborts.fetch_add(1, Ordering::SeqCst);
        panic!("systhread test abort");
    }
}

/// Compara duas máscaras nos sinais padrão (1..32)
pub fn same_mask(a: &libc::sigset_t, b: &libc::sigset_t) -> bool {
    // SAFETY: ambos os conjuntos estão inicializados.
    (1..32).all(|sig| unsafe { libc::sigismember(a, sig) == libc::sigismember(b, sig) })
}

/// Verifica se todos os sinais capturáveis estão na máscara
pub fn all_catchable_blocked(mask: &libc::sigset_t) -> bool {
    // SAFETY: conjunto inicializado.
    CATCHABLE
        .iter()
        .all(|&sig| unsafe { libc::sigismember(mask, sig) == 1 })
}

/// Bloqueia `sig` na thread atual (para montar máscaras não triviais)
pub fn block_signal(sig: libc::c_int) {
    // SAFETY: conjunto local inicializado antes do uso.
    unsafe {
        let mut set = core::mem::MaybeUninit::<libc::sigset_t>::uninit();
        libc::sigemptyset(set.as_mut_ptr());
        libc::sigaddset(set.as_mut_ptr(), sig);
        libc::pthread_sigmask(libc::SIG_BLOCK, set.as_ptr(), core::ptr::null_mut());
    }
}

/// Desbloqueia `sig` na thread atual
pub fn unblock_signal(sig: libc::c_int) {
    // SAFETY: conjunto local inicializado antes do uso.
    unsafe {
        let mut set = core::mem::MaybeUninit::<libc::sigset_t>::uninit();
        libc::sigemptyset(set.as_mut_ptr());
        libc::sigaddset(set.as_mut_ptr(), sig);
        libc::pthread_sigmask(libc::SIG_UNBLOCK, set.as_ptr(), core::ptr::null_mut());
    }
}
