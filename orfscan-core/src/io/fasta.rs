use crate::error::{OrfError, OrfResult};
use crate::io::normalize_seq_bytes;
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Lazy FASTA reader yielding one record at a time.
///
/// Text before the first `>` line is skipped. A stream that ends before any
/// header is seen yields a single `MalformedInput` error.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<String>,
    seen_header: bool,
    finished: bool,
    buf_line: Vec<u8>,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            seen_header: false,
            finished: false,
            buf_line: Vec::new(),
            seq_buf: Vec::new(),
        }
    }

    fn first_header(&mut self) -> OrfResult<Option<String>> {
        let mut skipped = 0usize;
        loop {
            self.buf_line.clear();
            if self.reader.read_until(b'\n', &mut self.buf_line)? == 0 {
                return Err(OrfError::MalformedInput {
                    msg: "no header line starting with '>' before end of input",
                    line: self.line_no,
                });
            }
            self.line_no += 1;
            if self.buf_line.starts_with(b">") {
                if skipped > 0 {
                    warn!("skipped {skipped} line(s) before the first fasta header");
                }
                return Ok(Some(parse_header(&self.buf_line)));
            }
            if !self.buf_line.trim_ascii().is_empty() {
                skipped += 1;
            }
        }
    }

    fn next_header(&mut self) -> OrfResult<Option<String>> {
        if let Some(pending) = self.pending_header.take() {
            return Ok(Some(pending));
        }
        if !self.seen_header {
            self.seen_header = true;
            return self.first_header();
        }
        Ok(None)
    }

    fn read_record(&mut self) -> OrfResult<Option<SeqRecord>> {
        let header = match self.next_header()? {
            Some(header) => header,
            None => return Ok(None),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            if self.reader.read_until(b'\n', &mut self.buf_line)? == 0 {
                break;
            }
            self.line_no += 1;
            if self.buf_line.starts_with(b">") {
                self.pending_header = Some(parse_header(&self.buf_line));
                break;
            }
            self.seq_buf.extend(normalize_seq_bytes(&self.buf_line));
        }

        let bytes = std::mem::take(&mut self.seq_buf);
        Ok(Some(SeqRecord::new(header, DnaSeq::from_bytes(bytes))))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = OrfResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead>(reader: R) -> OrfResult<Vec<SeqRecord>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_path(path: impl AsRef<Path>) -> OrfResult<Vec<SeqRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_fasta_records_from_reader(reader)
}

pub fn read_fasta_records_from_bytes(data: &[u8]) -> OrfResult<Vec<SeqRecord>> {
    let reader = BufReader::new(Cursor::new(data));
    read_fasta_records_from_reader(reader)
}

/// Headers are decoded lossily; sequence lines stay raw bytes so a stray
/// non-ASCII byte surfaces as an invalid base of that record alone.
fn parse_header(header_line: &[u8]) -> String {
    let header = header_line.strip_prefix(b">").unwrap_or(header_line);
    String::from_utf8_lossy(header.trim_ascii_end()).into_owned()
}
