use crate::alphabets::dna;
use crate::error::{OrfError, OrfResult};
use std::fmt;
use std::sync::LazyLock;

pub type Codon = [u8; 3];

pub const DEFAULT_STARTS: &[&str] = &["ATG"];
pub const DEFAULT_STOPS: &[&str] = &["TAA", "TGA", "TAG"];

/// Ordered, duplicate-free set of codons. Every member is checked
/// independently; there is no preference among them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonSet {
    codons: Vec<Codon>,
}

impl CodonSet {
    pub fn new<I, S>(codons: I) -> OrfResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Codon> = Vec::new();
        for codon in codons {
            let codon = parse_codon(codon.as_ref())?;
            if !out.contains(&codon) {
                out.push(codon);
            }
        }
        if out.is_empty() {
            return Err(OrfError::config("codon set must not be empty"));
        }
        Ok(Self { codons: out })
    }

    pub fn default_starts() -> Self {
        Self::from_static(DEFAULT_STARTS)
    }

    pub fn default_stops() -> Self {
        Self::from_static(DEFAULT_STOPS)
    }

    fn from_static(codons: &[&str]) -> Self {
        Self {
            codons: codons
                .iter()
                .map(|c| {
                    let b = c.as_bytes();
                    [b[0], b[1], b[2]]
                })
                .collect(),
        }
    }

    #[inline]
    pub fn contains(&self, window: &[u8]) -> bool {
        self.codons.iter().any(|c| c.as_slice() == window)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Codon> {
        self.codons.iter()
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

impl fmt::Display for CodonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, codon) in self.codons.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&String::from_utf8_lossy(codon))?;
        }
        Ok(())
    }
}

fn parse_codon(raw: &str) -> OrfResult<Codon> {
    let bytes = raw.trim().as_bytes();
    if bytes.len() != 3 || !dna::alphabet().is_word(bytes) {
        return Err(OrfError::config(format!(
            "invalid codon '{raw}' (expected three of A, C, G, T)"
        )));
    }
    let mut codon = [0u8; 3];
    for (dst, src) in codon.iter_mut().zip(bytes) {
        *dst = src.to_ascii_uppercase();
    }
    Ok(codon)
}

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (i, &b) in b"ACGT".iter().enumerate() {
        map[b as usize] = i as u8;
        map[b.to_ascii_lowercase() as usize] = i as u8;
    }
    map
});

/// Standard genetic code, indexed by base ranks A=0, C=1, G=2, T=3.
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Translate whole codons of `bytes`; codons with a non-ACGT base become `X`
/// and trailing bases that do not fill a codon are dropped.
pub fn translate(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() / 3);
    for codon in bytes.chunks_exact(3) {
        let i1 = BASE_INDEX[codon[0] as usize];
        let i2 = BASE_INDEX[codon[1] as usize];
        let i3 = BASE_INDEX[codon[2] as usize];
        let aa = if i1 < 4 && i2 < 4 && i3 < 4 {
            let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
            CODON_TABLE[idx]
        } else {
            b'X'
        };
        out.push(aa);
    }
    out
}
