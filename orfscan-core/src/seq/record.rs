use crate::seq::dna::DnaSeq;

/// One FASTA entry. The header is kept verbatim (minus the `>` marker and
/// trailing whitespace) so reports can echo it unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: Box<str>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn new(header: impl Into<Box<str>>, seq: DnaSeq) -> Self {
        Self {
            header: header.into(),
            seq,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }

    pub fn desc(&self) -> Option<&str> {
        let header = self.header.trim_start();
        let idx = header.find(|c: char| c.is_whitespace())?;
        let desc = header[idx..].trim();
        if desc.is_empty() {
            None
        } else {
            Some(desc)
        }
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_seq(self) -> DnaSeq {
        self.seq
    }
}
