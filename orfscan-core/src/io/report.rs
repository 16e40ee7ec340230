use crate::error::OrfResult;
use crate::orf::OrfReport;
use crate::seq::dna::DnaSeq;
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// Header line followed by one `+1     1 ..    9     9` line per ORF.
pub fn write_text_report<W: Write>(out: &mut W, report: &OrfReport) -> OrfResult<()> {
    writeln!(out, "{}", report.header)?;
    for orf in &report.orfs {
        writeln!(out, "{orf}")?;
    }
    Ok(())
}

/// Tab-separated ORF table, one row per ORF across all records.
pub struct TsvReportWriter<W: Write> {
    inner: Writer<W>,
    translate: bool,
}

impl<W: Write> TsvReportWriter<W> {
    pub fn new(out: W, translate: bool) -> OrfResult<Self> {
        let mut inner = WriterBuilder::new().delimiter(b'\t').from_writer(out);
        let mut header = vec!["id", "strand_frame", "start", "stop", "length"];
        if translate {
            header.push("protein");
        }
        inner.write_record(&header)?;
        Ok(Self { inner, translate })
    }

    /// `seq` is required for the protein column; without it the column is
    /// left empty.
    pub fn write_report(&mut self, report: &OrfReport, seq: Option<&DnaSeq>) -> OrfResult<()> {
        for orf in &report.orfs {
            let mut row = vec![
                report.id().to_string(),
                orf.label(),
                orf.start.to_string(),
                orf.stop.to_string(),
                orf.length().to_string(),
            ];
            if self.translate {
                let protein = match seq {
                    Some(seq) => orf.translate(seq)?,
                    None => String::new(),
                };
                row.push(protein);
            }
            self.inner.write_record(&row)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> OrfResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> OrfResult<W> {
        self.inner
            .into_inner()
            .map_err(|err| err.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orf::{Orf, Strand};

    fn report() -> OrfReport {
        OrfReport {
            header: "seq1 test record".into(),
            orfs: vec![
                Orf {
                    strand: Strand::Reverse,
                    frame: 1,
                    start: 10,
                    stop: 21,
                },
                Orf {
                    strand: Strand::Forward,
                    frame: 1,
                    start: 1,
                    stop: 9,
                },
            ],
        }
    }

    #[test]
    fn text_layout() {
        let mut out = Vec::new();
        write_text_report(&mut out, &report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "seq1 test record\n-1    10 ..   21    12\n+1     1 ..    9     9\n"
        );
    }

    #[test]
    fn text_layout_without_orfs() {
        let mut out = Vec::new();
        let empty = OrfReport {
            header: "empty".into(),
            orfs: Vec::new(),
        };
        write_text_report(&mut out, &empty).unwrap();
        assert_eq!(out, b"empty\n");
    }

    #[test]
    fn tsv_with_protein() {
        let seq = DnaSeq::from("ATGAAATAGCTACCCGGGCAT");
        let mut writer = TsvReportWriter::new(Vec::new(), true).unwrap();
        writer.write_report(&report(), Some(&seq)).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "id\tstrand_frame\tstart\tstop\tlength\tprotein\n\
             seq1\t-1\t10\t21\t12\tMPG*\n\
             seq1\t+1\t1\t9\t9\tMK*\n"
        );
    }

    #[test]
    fn tsv_without_protein() {
        let mut writer = TsvReportWriter::new(Vec::new(), false).unwrap();
        writer.write_report(&report(), None).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "id\tstrand_frame\tstart\tstop\tlength");
        assert_eq!(lines[2], "seq1\t+1\t1\t9\t9");
    }
}
