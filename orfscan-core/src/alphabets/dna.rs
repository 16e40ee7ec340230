use crate::alphabets::Alphabet;
use crate::error::{OrfError, OrfResult};
use std::sync::LazyLock;

/// Unambiguous nucleotides, the only symbols allowed in a codon.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// Symbols that survive complementation.
pub fn n_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTNacgtn")
}

const NO_COMPLEMENT: u8 = 0;

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [NO_COMPLEMENT; 256];
    b"AGCTN"
        .iter()
        .zip(b"TCGAN".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a as usize + 32] = b + 32;
        });
    comp
});

/// Watson-Crick complement; `None` for anything outside `ACGTN`.
#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        NO_COMPLEMENT => None,
        c => Some(c),
    }
}

/// Reverse complement of `text`. The error names the leftmost base that has no
/// complement, as an index into `text`.
pub fn reverse_complement(text: &[u8]) -> OrfResult<Vec<u8>> {
    if let Some((pos, ch)) = n_alphabet().first_foreign(text) {
        return Err(OrfError::InvalidBase {
            ch: ch as char,
            pos,
        });
    }
    Ok(text
        .iter()
        .rev()
        .filter_map(|&a| complement(a))
        .collect())
}
