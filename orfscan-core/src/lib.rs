//! Open reading frame detection on both strands of DNA sequences.
//!
//! A scan pairs every start codon with the next in-frame stop codon in all
//! three frames of the forward and reverse-complement strands, then the
//! reporter sorts and deduplicates the candidates into the final set.

#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod orf;
pub mod seq;

pub use error::{OrfError, OrfResult};
pub use orf::{find_orfs, Orf, OrfReport, ScanConfig, Strand};
pub use seq::{DnaSeq, SeqRecord};
