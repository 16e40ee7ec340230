use crate::orf::{Orf, Strand};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Turns raw scanner candidates into the reported ORF set.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrfReporter {
    longest_only: bool,
}

impl OrfReporter {
    pub fn new(longest_only: bool) -> Self {
        Self { longest_only }
    }

    /// Sort by length (descending) then forward start (ascending), and drop
    /// candidates that share an outer boundary with an ORF already kept:
    /// the stop position on `+`, the forward start position on `-`.
    pub fn finalize(&self, mut candidates: Vec<Orf>) -> Vec<Orf> {
        candidates.sort_by(report_order);

        let mut seen_stops: HashSet<usize> = HashSet::new();
        let mut seen_starts: HashSet<usize> = HashSet::new();
        candidates.retain(|orf| match orf.strand {
            Strand::Forward => seen_stops.insert(orf.stop),
            Strand::Reverse => seen_starts.insert(orf.start),
        });

        if self.longest_only {
            candidates.truncate(1);
        }
        candidates
    }
}

fn report_order(a: &Orf, b: &Orf) -> Ordering {
    b.length()
        .cmp(&a.length())
        .then_with(|| a.start.cmp(&b.start))
}
