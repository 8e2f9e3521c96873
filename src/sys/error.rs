//! Tipos de Erro da Ponte de Threads
//!
//! Nenhum destes erros é recuperável nesta camada: um runtime que não consegue
//! criar threads de trabalho não progride. Eles existem para que o diagnóstico
//! emitido antes do abort diga exatamente o que falhou.

/// Falhas fatais da ponte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    /// Alocação do descritor ou alocação defensiva do init falhou
    OutOfMemory,
    /// pthread_attr_init (ou configuração do atributo) falhou; carrega o errno
    ThreadAttr(i32),
    /// pthread_create recusou a thread; carrega o errno
    ThreadCreate(i32),
    /// Spawn antes do init (violação de pré-condição do scheduler)
    NotInitialized,
}

impl FatalError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfMemory => "malloc failed",
            Self::ThreadAttr(_) => "pthread_attr_init failed",
            Self::ThreadCreate(_) => "pthread_create failed",
            Self::NotInitialized => "thread_start called before init",
        }
    }

    /// Código de erro do SO, quando houver
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::ThreadAttr(code) | Self::ThreadCreate(code) => Some(*code),
            Self::OutOfMemory | Self::NotInitialized => None,
        }
    }
}

impl core::fmt::Display for FatalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}: {}", self.as_str(), code),
            None => f.write_str(self.as_str()),
        }
    }
}

/// Tipo Result para operações que só falham de forma fatal
pub type FatalResult<T> = Result<T, FatalError>;
