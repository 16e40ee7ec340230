use crate::error::OrfResult;
use crate::orf::{Orf, ScanConfig, Strand};
use crate::seq::dna::DnaSeq;
use log::debug;
use std::collections::VecDeque;

/// Finds every stop-terminated ORF candidate on both strands of one sequence.
pub struct OrfScanner<'a> {
    seq: &'a DnaSeq,
    config: &'a ScanConfig,
}

impl<'a> OrfScanner<'a> {
    pub fn new(seq: &'a DnaSeq, config: &'a ScanConfig) -> OrfResult<Self> {
        config.validate()?;
        Ok(Self { seq, config })
    }

    /// Candidates from the forward strand followed by the reverse strand, in
    /// the order their stop codons were reached. Fails only if the sequence
    /// holds a base that cannot be complemented.
    pub fn scan(&self) -> OrfResult<Vec<Orf>> {
        let len = self.seq.len();
        let mut orfs = Vec::new();

        scan_strand(self.seq.as_bytes(), self.config, |frame, start, end| {
            orfs.push(Orf {
                strand: Strand::Forward,
                frame,
                start: start + 1,
                stop: end,
            });
        });

        let reverse = self.seq.reverse_complement()?;
        scan_strand(reverse.as_bytes(), self.config, |frame, start, end| {
            orfs.push(Orf {
                strand: Strand::Reverse,
                frame,
                start: len - end + 1,
                stop: len - start,
            });
        });

        debug!("{} orf candidates in {len} bases", orfs.len());
        Ok(orfs)
    }
}

/// Single pass over one strand. `emit` receives the 1-based frame and the
/// 0-based half-open span `[start, end)` from the start codon through the
/// stop codon.
fn scan_strand<F>(bytes: &[u8], config: &ScanConfig, mut emit: F)
where
    F: FnMut(u8, usize, usize),
{
    let mut pending: [VecDeque<usize>; 3] = Default::default();

    for (i, window) in bytes.windows(3).enumerate() {
        let frame = i % 3;
        if config.starts.contains(window) {
            pending[frame].push_back(i);
        } else if config.stops.contains(window) {
            let end = i + 3;
            // one stop closes every open start in its frame
            while let Some(start) = pending[frame].pop_front() {
                if end - start >= config.min_len {
                    emit(frame as u8 + 1, start, end);
                }
            }
        }
    }
}
