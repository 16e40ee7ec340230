use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use orfscan_core::error::OrfResult;
use orfscan_core::io::OnError;
use orfscan_core::orf::ScanConfig;
use orfscan_core::seq::codon::{DEFAULT_STARTS, DEFAULT_STOPS};

pub const MIN_GENE_CHOICES: [&str; 5] = ["100", "200", "300", "500", "1000"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Tsv,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub min_gene: usize,
    /// Empty means the default codon set.
    pub starts: Vec<String>,
    pub stops: Vec<String>,
    pub longest_gene: bool,
    pub format: OutputFormat,
    pub translate: bool,
    pub on_error: OnError,
    pub log_level: Option<LevelFilter>,
}

pub fn command() -> Command {
    Command::new("orfscan")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .about("Find open reading frames on both strands of FASTA sequences")
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Input FASTA file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("min-gene")
                .short('m')
                .long("min-gene")
                .alias("minGene")
                .value_name("LENGTH")
                .value_parser(MIN_GENE_CHOICES)
                .default_value("100")
                .help("Minimum ORF length in bases"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("CODON")
                .action(ArgAction::Append)
                .help("Start codon, repeatable (default: ATG)"),
        )
        .arg(
            Arg::new("stop")
                .short('t')
                .long("stop")
                .value_name("CODON")
                .action(ArgAction::Append)
                .help("Stop codon, repeatable (default: TAA, TGA, TAG)"),
        )
        .arg(
            Arg::new("longest-gene")
                .short('l')
                .long("longest-gene")
                .alias("longestGene")
                .action(ArgAction::SetTrue)
                .help("Report only the longest ORF of each sequence"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["text", "tsv"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("translate")
                .long("translate")
                .action(ArgAction::SetTrue)
                .help("Add a protein column (tsv only)"),
        )
        .arg(
            Arg::new("on-error")
                .long("on-error")
                .value_parser(["skip", "raise"])
                .default_value("skip")
                .help("Skip sequences that cannot be scanned, or abort the run"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Log level on stderr (default: $ORFSCAN_LOG or warn)"),
        )
}

impl CliArgs {
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(itr)?;
        Self::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let min_gene = matches
            .get_one::<String>("min-gene")
            .map(|s| s.parse::<usize>())
            .transpose()
            .map_err(|err| clap::Error::raw(ErrorKind::InvalidValue, err))?
            .unwrap_or(orfscan_core::orf::DEFAULT_MIN_LEN);

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("tsv") => OutputFormat::Tsv,
            _ => OutputFormat::Text,
        };

        let on_error = match matches.get_one::<String>("on-error").map(String::as_str) {
            Some("raise") => OnError::Raise,
            _ => OnError::Skip,
        };

        let log_level = matches
            .get_one::<String>("log-level")
            .and_then(|s| s.parse::<LevelFilter>().ok());

        Ok(Self {
            input: matches.get_one::<PathBuf>("input").cloned(),
            output: matches.get_one::<PathBuf>("output").cloned(),
            min_gene,
            starts: codons(matches, "start"),
            stops: codons(matches, "stop"),
            longest_gene: matches.get_flag("longest-gene"),
            format,
            translate: matches.get_flag("translate"),
            on_error,
            log_level,
        })
    }

    /// Supplied codons replace the defaults rather than extending them.
    pub fn scan_config(&self) -> OrfResult<ScanConfig> {
        let starts: Vec<&str> = if self.starts.is_empty() {
            DEFAULT_STARTS.to_vec()
        } else {
            self.starts.iter().map(String::as_str).collect()
        };
        let stops: Vec<&str> = if self.stops.is_empty() {
            DEFAULT_STOPS.to_vec()
        } else {
            self.stops.iter().map(String::as_str).collect()
        };
        Ok(ScanConfig::new(starts, stops, self.min_gene)?.with_longest_only(self.longest_gene))
    }
}

fn codons(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orfscan_core::OrfError;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("orfscan").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.min_gene, 100);
        assert!(!args.longest_gene);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.on_error, OnError::Skip);
        assert_eq!(args.log_level, None);

        let config = args.scan_config().unwrap();
        assert_eq!(config, ScanConfig::default());
    }

    #[test]
    fn legacy_aliases() {
        let args = parse(&["--minGene", "300", "--longestGene", "in.fa"]).unwrap();
        assert_eq!(args.min_gene, 300);
        assert!(args.longest_gene);
        assert_eq!(args.input, Some(PathBuf::from("in.fa")));
        assert!(args.scan_config().unwrap().longest_only);
    }

    #[test]
    fn short_v_prints_version() {
        for flag in ["-v", "--version"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn min_gene_restricted_to_choices() {
        let err = parse(&["-m", "150"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn codons_replace_defaults() {
        let args = parse(&["-s", "GTG", "-s", "ttg", "-t", "TAA"]).unwrap();
        assert_eq!(args.starts, vec!["GTG", "ttg"]);
        let config = args.scan_config().unwrap();
        assert!(config.starts.contains(b"GTG"));
        assert!(config.starts.contains(b"TTG"));
        assert!(!config.starts.contains(b"ATG"));
        assert_eq!(config.stops.len(), 1);
    }

    #[test]
    fn bad_codon_is_configuration_error() {
        let args = parse(&["-s", "AUG"]).unwrap();
        assert!(matches!(
            args.scan_config(),
            Err(OrfError::Configuration { .. })
        ));
    }

    #[test]
    fn output_options() {
        let args = parse(&[
            "-f",
            "tsv",
            "--translate",
            "--on-error",
            "raise",
            "--log-level",
            "debug",
            "-o",
            "out.tsv",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Tsv);
        assert!(args.translate);
        assert_eq!(args.on_error, OnError::Raise);
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
        assert_eq!(args.output, Some(PathBuf::from("out.tsv")));
    }
}
