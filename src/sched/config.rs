//! Constantes de configuração da ponte de threads

/// Tamanho de página assumido para a margem de segurança da pilha
pub const PAGE_SIZE: usize = 4096;

/// Margem acima do mínimo teórico do limite inferior da pilha.
///
/// O endereço de referência é o de uma variável local, não o frame pointer
/// real; uma página absorve a diferença.
pub const STACK_GUARD_MARGIN: usize = PAGE_SIZE;

/// Pilha assumida quando o SO reporta tamanho zero (2 MiB, padrão glibc)
pub const FALLBACK_STACK_SIZE: usize = 2 * 1024 * 1024;
