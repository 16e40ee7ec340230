use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use orfscan_core::error::{OrfError, OrfResult};
use orfscan_core::io::fasta::fasta_records_from_reader;
use orfscan_core::io::report::{write_text_report, TsvReportWriter};
use orfscan_core::io::{OnError, SkippedRecord};
use orfscan_core::orf::{scan_record, OrfReport};
use orfscan_core::seq::DnaSeq;

use crate::cli::{CliArgs, OutputFormat};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub orfs: usize,
    pub skipped: Vec<SkippedRecord>,
}

enum Sink<W: Write> {
    Text(W),
    Tsv(TsvReportWriter<W>),
}

impl<W: Write> Sink<W> {
    fn new(out: W, format: OutputFormat, translate: bool) -> OrfResult<Self> {
        if translate && format == OutputFormat::Text {
            warn!("--translate only applies to tsv output");
        }
        Ok(match format {
            OutputFormat::Text => Sink::Text(out),
            OutputFormat::Tsv => Sink::Tsv(TsvReportWriter::new(out, translate)?),
        })
    }

    fn write(&mut self, report: &OrfReport, seq: &DnaSeq) -> OrfResult<()> {
        match self {
            Sink::Text(out) => write_text_report(out, report),
            Sink::Tsv(writer) => writer.write_report(report, Some(seq)),
        }
    }

    fn finish(self) -> OrfResult<()> {
        match self {
            Sink::Text(mut out) => out.flush()?,
            Sink::Tsv(mut writer) => writer.flush()?,
        }
        Ok(())
    }
}

/// Stream records from `input`, scanning and reporting each one before the
/// next is read.
pub fn run<R: BufRead, W: Write>(args: &CliArgs, input: R, out: W) -> OrfResult<RunSummary> {
    let config = args.scan_config()?;
    let mut sink = Sink::new(out, args.format, args.translate)?;
    let mut summary = RunSummary::default();

    for (index, record) in fasta_records_from_reader(input).enumerate() {
        let record = record?;
        summary.records += 1;
        match scan_record(&record, &config) {
            Ok(report) => {
                summary.orfs += report.orfs.len();
                sink.write(&report, record.seq())?;
            }
            Err(err) if args.on_error == OnError::Skip && err.is_record_local() => {
                warn!("skipping record {index} ({}): {err}", record.id());
                summary.skipped.push(SkippedRecord {
                    index,
                    id: Some(record.id().into()),
                    message: err.to_string().into_boxed_str(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    sink.finish()?;
    info!(
        "scanned {} records, reported {} orfs, skipped {}",
        summary.records,
        summary.orfs,
        summary.skipped.len()
    );
    Ok(summary)
}

pub fn open_input(path: Option<&Path>) -> OrfResult<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

pub fn open_output(path: Option<&Path>) -> OrfResult<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

/// Process exit code for a fatal error.
pub fn exit_code(err: &OrfError) -> u8 {
    match err {
        OrfError::Configuration { .. } => 2,
        OrfError::MalformedInput { .. } => 3,
        OrfError::InvalidBase { .. } => 4,
        OrfError::Io(_) | OrfError::TableWrite(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn args(extra: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("orfscan").chain(extra.iter().copied())).unwrap()
    }

    fn run_text(args: &CliArgs, fasta: &str) -> OrfResult<(String, RunSummary)> {
        let mut out = Vec::new();
        let summary = run(args, Cursor::new(fasta.as_bytes()), &mut out)?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    fn long_orf_fasta() -> String {
        // 102-base forward ORF followed by a record without any ORF
        let body = format!("ATG{}TAA", "AAA".repeat(32));
        format!(">seq1 demo\n{}\n{}\n>seq2\nCCCC\n", &body[..50], &body[50..])
    }

    #[test]
    fn text_report_per_record() {
        let (text, summary) = run_text(&args(&[]), &long_orf_fasta()).unwrap();
        assert_eq!(text, "seq1 demo\n+1     1 ..  102   102\nseq2\n");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.orfs, 1);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn min_gene_filters() {
        let (text, summary) = run_text(&args(&["-m", "200"]), &long_orf_fasta()).unwrap();
        assert_eq!(text, "seq1 demo\nseq2\n");
        assert_eq!(summary.orfs, 0);
    }

    #[test]
    fn invalid_record_is_skipped() {
        let fasta = ">bad\nATGRAATAG\n>good\natgaaatag\n";
        let (text, summary) = run_text(&args(&["-s", "ATG", "-t", "TAG"]), fasta).unwrap();
        // default min length hides the 9-base ORF; only the header is printed
        assert_eq!(text, "good\n");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].id.as_deref(), Some("bad"));
    }

    #[test]
    fn non_utf8_record_is_skipped() {
        let mut fasta = b">bad\nAT\xffG\n>good\n".to_vec();
        fasta.extend(format!("ATG{}TAA\n", "AAA".repeat(32)).bytes());
        let mut out = Vec::new();
        let summary = run(&args(&[]), Cursor::new(fasta), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "good\n+1     1 ..  102   102\n"
        );
        assert_eq!(summary.records, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].id.as_deref(), Some("bad"));
        assert!(summary.skipped[0].message.contains("position 2"));
    }

    #[test]
    fn invalid_record_aborts_under_raise() {
        let fasta = ">bad\nATGRAATAG\n>good\nATGAAATAG\n";
        let err = run_text(&args(&["--on-error", "raise"]), fasta).unwrap_err();
        assert!(matches!(err, OrfError::InvalidBase { ch: 'R', .. }));
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn headerless_input_is_fatal() {
        let err = run_text(&args(&[]), "ACGTACGT\n").unwrap_err();
        assert!(matches!(err, OrfError::MalformedInput { .. }));
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn bad_codon_is_fatal() {
        let err = run_text(&args(&["-t", "TA"]), ">s\nATG\n").unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn longest_gene_keeps_one_line() {
        let body = format!("ATG{}TAA", "AAA".repeat(32));
        // a 105-base ORF on the reverse strand follows the forward one
        let fasta = format!(">s\n{body}CTA{}CAT\n", "GGG".repeat(33));
        let (all, _) = run_text(&args(&[]), &fasta).unwrap();
        let (longest, _) = run_text(&args(&["-l"]), &fasta).unwrap();
        assert_eq!(all, "s\n-1   103 ..  207   105\n+1     1 ..  102   102\n");
        assert_eq!(longest, "s\n-1   103 ..  207   105\n");
    }

    #[test]
    fn tsv_with_translation() {
        let fasta = ">s1 x\nATGAAATAGCTACCCGGGCAT\n";
        let mut out = Vec::new();
        let a = CliArgs {
            min_gene: 3,
            stops: vec!["TAG".into()],
            ..args(&["-f", "tsv", "--translate"])
        };
        run(&a, Cursor::new(fasta.as_bytes()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "id\tstrand_frame\tstart\tstop\tlength\tprotein\n\
             s1\t-1\t10\t21\t12\tMPG*\n\
             s1\t+1\t1\t9\t9\tMK*\n"
        );
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.fa");
        std::fs::write(&path, long_orf_fasta()).unwrap();

        let input = open_input(Some(path.as_path())).unwrap();
        let mut out = Vec::new();
        let summary = run(&args(&[]), input, &mut out).unwrap();
        assert_eq!(summary.records, 2);
        assert!(String::from_utf8(out).unwrap().contains("  102"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = match open_input(Some(dir.path().join("nope.fa").as_path())) {
            Ok(_) => panic!("expected missing file to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, OrfError::Io(_)));
        assert_eq!(exit_code(&err), 1);
    }
}
