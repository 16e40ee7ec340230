pub mod codon;
pub mod dna;
pub mod record;

pub use codon::{Codon, CodonSet};
pub use dna::DnaSeq;
pub use record::SeqRecord;
