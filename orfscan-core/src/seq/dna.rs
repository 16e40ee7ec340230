use crate::alphabets::dna;
use crate::error::OrfResult;

/// Upper-cased nucleotide buffer. Contents are not validated on construction;
/// unknown bases surface when the reverse strand is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn from_bytes(mut bytes: Vec<u8>) -> Self {
        bytes.make_ascii_uppercase();
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse_complement(&self) -> OrfResult<Self> {
        let out = dna::reverse_complement(self.as_bytes())?;
        Ok(Self { bytes: out })
    }

    /// Half-open, 0-based sub-sequence, clamped to the sequence bounds.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        let start = start.min(end);
        Self {
            bytes: self.bytes[start..end].to_vec(),
        }
    }
}

impl From<&str> for DnaSeq {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes().to_vec())
    }
}
