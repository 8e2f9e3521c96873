// =============================================================================
// STDERR CONSOLE - ZERO OVERHEAD
// =============================================================================
//
// Saída de diagnóstico da ponte de threads, direto no descritor 2.
//
// ARQUITETURA:
// - SEM Mutex/Spinlock - cada chamada é um write(2) independente
// - SEM core::fmt - números convertidos à mão em buffers de pilha
// - SEM alocação - Apenas strings e valores imediatos
// - write(2) é async-signal-safe: pode ser chamado no trampolim
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal (0x + 16 dígitos)
// - emit_dec(v)      : Envia usize em decimal
// - emit_nl()        : Envia newline
//
// NOTA IMPORTANTE:
// Não há exclusão mútua entre threads. Linhas de threads diferentes podem se
// intercalar. Isso é aceitável para debugging.
//
// =============================================================================

const STDERR: libc::c_int = libc::STDERR_FILENO;

/// Escreve todos os bytes, repetindo em escritas parciais.
///
/// Erros são ignorados: não há para onde reportar falha do próprio log.
fn write_all(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: ponteiro e tamanho vêm de um slice válido.
        let n = unsafe { libc::write(STDERR, bytes.as_ptr().cast(), bytes.len()) };
        if n <= 0 {
            return;
        }
        bytes = &bytes[n as usize..];
    }
}

/// Envia um único byte.
#[inline]
pub fn emit(byte: u8) {
    write_all(&[byte]);
}

/// Envia uma string.
#[inline(never)]
pub fn emit_str(s: &str) {
    write_all(s.as_bytes());
}

/// Envia newline.
#[inline(never)]
pub fn emit_nl() {
    emit(b'\n');
}

/// Converte um nibble (0..=15) em ASCII maiúsculo.
#[inline(always)]
const fn nibble_to_ascii(nibble: u8) -> u8 {
    match nibble {
        0..=9 => b'0' + nibble,
        _ => b'A' + (nibble - 10),
    }
}

/// Formata `value` como 0x0123456789ABCDEF (sempre 18 caracteres).
pub(crate) const fn format_hex(value: u64) -> [u8; 18] {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    let mut i = 0;
    while i < 16 {
        let shift = 60 - (i * 4);
        buf[2 + i] = nibble_to_ascii(((value >> shift) & 0xF) as u8);
        i += 1;
    }
    buf
}

/// Formata `value` em decimal no fim do buffer. Retorna a posição inicial.
///
/// Buffer de 20 bytes (máximo para u64).
pub(crate) fn format_dec(mut value: usize, buf: &mut [u8; 20]) -> usize {
    let mut pos = buf.len();

    if value == 0 {
        pos -= 1;
        buf[pos] = b'0';
        return pos;
    }

    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    pos
}

/// Envia um valor u64 em hexadecimal.
#[inline(never)]
pub fn emit_hex(value: u64) {
    write_all(&format_hex(value));
}

/// Envia um valor usize em decimal.
#[inline(never)]
pub fn emit_dec(value: usize) {
    let mut buf = [0u8; 20];
    let start = format_dec(value, &mut buf);
    write_all(&buf[start..]);
}

/// Envia um i32 em decimal (códigos de erro do SO).
pub fn emit_i32(value: i32) {
    if value < 0 {
        emit(b'-');
    }
    emit_dec(value.unsigned_abs() as usize);
}
