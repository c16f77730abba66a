use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, log_enabled, Level, LevelFilter};

use rs_sim_core::model::{DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_N, DEFAULT_PRECISION};
use rs_sim_core::{format_score, write_score, ComparisonInput, Detector, Result};

/// Computes the n-gram similarity of two text files and writes the score.
#[derive(Parser, Debug)]
#[command(name = "rs-sim", version, about)]
struct Cli {
	/// Original document
	original: PathBuf,

	/// Document suspected of plagiarism
	suspect: PathBuf,

	/// File receiving the score
	output: PathBuf,

	/// Window size in bytes
	#[arg(short = 'n', long = "window", default_value_t = DEFAULT_N)]
	n: usize,

	/// Bytes read from each document, the rest is ignored
	#[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_DOCUMENT_SIZE)]
	max_size: usize,

	/// Fail when a document has more distinct n-grams than this
	#[arg(long, value_name = "K")]
	max_ngrams: Option<usize>,

	/// Fractional digits of the written score
	#[arg(short, long, default_value_t = DEFAULT_PRECISION)]
	precision: usize,

	/// Write the full report as JSON instead of the bare score
	#[arg(long)]
	json: bool,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// Only log warnings and errors
	#[arg(short, long, conflicts_with = "verbose")]
	quiet: bool,
}

impl Cli {
	/// Maps command line flags onto validated comparison parameters.
	fn comparison_input(&self) -> Result<ComparisonInput> {
		let mut input = ComparisonInput::default();
		input.set_n(self.n)?;
		input.set_max_document_size(self.max_size)?;
		input.set_max_distinct_ngrams(self.max_ngrams)?;
		input.set_precision(self.precision)?;
		Ok(input)
	}

	fn log_level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Warn;
		}
		match self.verbose {
			0 => LevelFilter::Info,
			1 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	let input = cli.comparison_input()?;
	if log_enabled!(Level::Debug) {
		debug!("parameters: {}", input.to_json()?);
	}

	info!("original: {}", cli.original.display());
	info!("suspect: {}", cli.suspect.display());
	info!("output: {}", cli.output.display());

	info!("computing similarity...");
	let detector = Detector::new(input);
	let report = detector.compare_files(&cli.original, &cli.suspect)?;

	let text = if cli.json {
		report.to_json()?
	} else {
		format_score(report.score, detector.input().precision())
	};
	write_score(&cli.output, &text)?;

	println!("similarity: {:.2}%", report.percent());
	info!("result saved to {}", cli.output.display());
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.log_level())
		.parse_default_env()
		.init();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::from(e.exit_code() as u8)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rs_sim_core::SimilarityError;
	use std::fs;
	use std::path::Path;
	use tempfile::tempdir;

	/// Writes both documents into `dir` and parses the command line with extra flags.
	fn cli_for(dir: &Path, original: &str, suspect: &str, flags: &[&str]) -> Cli {
		let original_path = dir.join("orig.txt");
		let suspect_path = dir.join("orig_add.txt");
		fs::write(&original_path, original).unwrap();
		fs::write(&suspect_path, suspect).unwrap();

		let mut args = vec![
			"rs-sim".to_owned(),
			original_path.display().to_string(),
			suspect_path.display().to_string(),
			dir.join("ans.txt").display().to_string(),
		];
		args.extend(flags.iter().map(|flag| flag.to_string()));
		Cli::try_parse_from(args).unwrap()
	}

	#[test]
	fn three_paths_are_required() {
		assert!(Cli::try_parse_from(["rs-sim", "a.txt", "b.txt"]).is_err());
		assert!(Cli::try_parse_from(["rs-sim", "a.txt", "b.txt", "c.txt", "d.txt"]).is_err());

		let cli = Cli::try_parse_from(["rs-sim", "a.txt", "b.txt", "ans.txt"]).unwrap();
		assert_eq!(cli.original, PathBuf::from("a.txt"));
		assert_eq!(cli.output, PathBuf::from("ans.txt"));
		assert_eq!(cli.comparison_input().unwrap(), ComparisonInput::default());
		assert_eq!(cli.log_level(), LevelFilter::Info);
	}

	#[test]
	fn flags_reach_comparison_input() {
		let cli = Cli::try_parse_from([
			"rs-sim", "a", "b", "c", "-n", "4", "--max-size", "128", "--max-ngrams", "50000", "-p", "3", "-vv",
		])
		.unwrap();
		let input = cli.comparison_input().unwrap();
		assert_eq!(input.n(), 4);
		assert_eq!(input.max_document_size(), 128);
		assert_eq!(input.max_distinct_ngrams(), Some(50_000));
		assert_eq!(input.precision(), 3);
		assert_eq!(cli.log_level(), LevelFilter::Trace);
	}

	#[test]
	fn invalid_values_become_parameter_errors() {
		let cli = Cli::try_parse_from(["rs-sim", "a", "b", "c", "-n", "0"]).unwrap();
		let err = cli.comparison_input().unwrap_err();
		assert!(matches!(err, SimilarityError::InvalidParameter(_)));
		assert_eq!(err.exit_code(), 2);
	}

	#[test]
	fn run_writes_two_digit_score() {
		let dir = tempdir().unwrap();
		let cli = cli_for(dir.path(), "abcdef", "abcxyz", &[]);
		run(&cli).unwrap();
		assert_eq!(fs::read_to_string(&cli.output).unwrap(), "0.14\n");
	}

	#[test]
	fn run_honours_precision() {
		let dir = tempdir().unwrap();
		let cli = cli_for(dir.path(), "abcdef", "abcxyz", &["-p", "4"]);
		run(&cli).unwrap();
		assert_eq!(fs::read_to_string(&cli.output).unwrap(), "0.1429\n");
	}

	#[test]
	fn run_writes_json_report() {
		let dir = tempdir().unwrap();
		let cli = cli_for(dir.path(), "abcdef", "abcxyz", &["--json"]);
		run(&cli).unwrap();
		let written = fs::read_to_string(&cli.output).unwrap();
		let report: rs_sim_core::SimilarityReport = serde_json::from_str(&written).unwrap();
		assert_eq!(report.intersection, 1);
		assert_eq!(report.union, 7);
	}

	#[test]
	fn run_maps_cap_overflow_to_usage_exit_code() {
		let dir = tempdir().unwrap();
		let cli = cli_for(dir.path(), "abcabc", "abcdefgh", &["--max-ngrams", "3"]);
		let err = run(&cli).unwrap_err();
		assert!(matches!(err, SimilarityError::CapacityExceeded { limit: 3 }));
		assert_eq!(err.exit_code(), 2);
		assert!(!cli.output.exists());
	}

	#[test]
	fn run_maps_missing_source_to_io_exit_code() {
		let dir = tempdir().unwrap();
		let mut cli = cli_for(dir.path(), "abcdef", "abcxyz", &[]);
		cli.original = dir.path().join("missing.txt");
		let err = run(&cli).unwrap_err();
		assert!(matches!(err, SimilarityError::Read { .. }));
		assert_eq!(err.exit_code(), 1);
	}

	#[test]
	fn parameters_log_as_json() {
		let cli = Cli::try_parse_from(["rs-sim", "a", "b", "c", "-n", "4", "--max-ngrams", "10"]).unwrap();
		let json = cli.comparison_input().unwrap().to_json().unwrap();
		assert_eq!(json, r#"{"n":4,"max_document_size":1000000,"max_distinct_ngrams":10,"precision":2}"#);
	}

	#[test]
	fn quiet_and_verbose_conflict() {
		assert!(Cli::try_parse_from(["rs-sim", "a", "b", "c", "-q", "-v"]).is_err());
		let cli = Cli::try_parse_from(["rs-sim", "a", "b", "c", "-q"]).unwrap();
		assert_eq!(cli.log_level(), LevelFilter::Warn);
	}
}
