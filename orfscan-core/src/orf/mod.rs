pub mod batch;
pub mod reporter;
pub mod scanner;

pub use batch::{scan_record, scan_records, OrfReport};
pub use reporter::OrfReporter;
pub use scanner::OrfScanner;

use crate::error::{OrfError, OrfResult};
use crate::seq::codon::{self, CodonSet};
use crate::seq::dna::DnaSeq;
use std::fmt;


pub const DEFAULT_MIN_LEN: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn sign(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// An ORF in forward-strand coordinates (1-based, inclusive).
///
/// On the reverse strand `start` is where the stop codon ends and `stop` is
/// where the start codon begins, both read on the forward strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orf {
    pub strand: Strand,
    /// Reading frame on its own strand, 1..=3.
    pub frame: u8,
    pub start: usize,
    pub stop: usize,
}

impl Orf {
    pub fn length(&self) -> usize {
        self.stop - self.start + 1
    }

    /// Strand and frame as `+1`..`-3`.
    pub fn label(&self) -> String {
        format!("{}{}", self.strand.sign(), self.frame)
    }

    /// Nucleotides of the ORF read 5'->3' on its own strand.
    pub fn extract(&self, seq: &DnaSeq) -> OrfResult<DnaSeq> {
        let first = self
            .start
            .checked_sub(1)
            .ok_or_else(|| OrfError::config("orf coordinates are 1-based"))?;
        let fwd = seq.slice(first, self.stop);
        match self.strand {
            Strand::Forward => Ok(fwd),
            Strand::Reverse => fwd.reverse_complement(),
        }
    }

    pub fn translate(&self, seq: &DnaSeq) -> OrfResult<String> {
        let nt = self.extract(seq)?;
        let protein = codon::translate(nt.as_bytes());
        Ok(String::from_utf8_lossy(&protein).into_owned())
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} ..{:>5} {:>5}",
            self.label(),
            self.start,
            self.stop,
            self.length()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub starts: CodonSet,
    pub stops: CodonSet,
    pub min_len: usize,
    /// Report only the single longest ORF per sequence.
    pub longest_only: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            starts: CodonSet::default_starts(),
            stops: CodonSet::default_stops(),
            min_len: DEFAULT_MIN_LEN,
            longest_only: false,
        }
    }
}

impl ScanConfig {
    pub fn new<I, J, S, T>(starts: I, stops: J, min_len: usize) -> OrfResult<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let config = Self {
            starts: CodonSet::new(starts)?,
            stops: CodonSet::new(stops)?,
            min_len,
            longest_only: false,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_longest_only(mut self, longest_only: bool) -> Self {
        self.longest_only = longest_only;
        self
    }

    pub fn validate(&self) -> OrfResult<()> {
        if self.min_len == 0 {
            return Err(OrfError::config("minimum ORF length must be positive"));
        }
        if self.starts.is_empty() || self.stops.is_empty() {
            return Err(OrfError::config("start and stop codon sets must not be empty"));
        }
        Ok(())
    }
}

/// Scan both strands of `seq` and return the reported ORF set.
pub fn find_orfs(seq: &DnaSeq, config: &ScanConfig) -> OrfResult<Vec<Orf>> {
    let candidates = OrfScanner::new(seq, config)?.scan()?;
    Ok(OrfReporter::new(config.longest_only).finalize(candidates))
}
