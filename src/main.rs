//! bucketstat - main entrypoint.
//!
//! Loads configuration, initializes logging, reads the word list and prints
//! the bucket distribution report.

use bucketstat_lib::analysis::{self, OutputFormat, RunPolicy};
use bucketstat_lib::config::{BucketstatConfig, ConfigLoader, LogConfig, Validate, ENV_PREFIX};
use bucketstat_lib::error::{
    report_error, set_error_reporter, BucketstatError, BucketstatResult, ErrorContext,
    TracingErrorReporter,
};
use bucketstat_lib::hasher::HashStrategy;
use bucketstat_lib::wordlist::WordList;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{info, info_span};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Command line arguments for bucketstat.
#[derive(Parser, Debug)]
#[clap(name = "bucketstat", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the bucket distribution of a word list
    Analyze(AnalyzeArgs),

    /// Print the bucket of each given word
    Hash {
        /// Words to hash
        #[clap(required = true)]
        words: Vec<String>,

        #[clap(flatten)]
        hashing: HashingArgs,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Overrides for the hash function.
#[derive(ClapArgs, Debug, Default)]
struct HashingArgs {
    /// Number of buckets
    #[clap(short, long)]
    buckets: Option<usize>,

    /// Hash strategy to evaluate
    #[clap(short, long, value_enum)]
    strategy: Option<HashStrategy>,
}

/// Overrides for the analysis and the report.
#[derive(ClapArgs, Debug, Default)]
struct AnalyzeArgs {
    /// Word list to read
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    #[clap(flatten)]
    hashing: HashingArgs,

    /// Whether a run reaching the end of the word list is scored
    #[clap(long, value_enum)]
    run_policy: Option<RunPolicy>,

    /// Report format
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Append the supplementary distribution metrics
    #[clap(short, long)]
    extended: bool,
}

impl HashingArgs {
    fn apply(&self, config: &mut BucketstatConfig) {
        if let Some(buckets) = self.buckets {
            config.analysis.bucket_count = buckets;
        }
        if let Some(strategy) = self.strategy {
            config.analysis.strategy = strategy;
        }
    }
}

impl AnalyzeArgs {
    fn apply(&self, config: &mut BucketstatConfig) {
        if let Some(words) = &self.words {
            config.analysis.word_list = words.clone();
        }
        self.hashing.apply(config);
        if let Some(policy) = self.run_policy {
            config.analysis.run_policy = policy;
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if self.extended {
            config.report.extended = true;
        }
    }
}

/// Initialize the logging system. Logs go to stderr so stdout only carries the report.
fn init_logging(log: &LogConfig) -> BucketstatResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let result = if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .finish()
            .with(ErrorLayer::default())
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .finish()
            .with(ErrorLayer::default())
            .try_init()
    };

    result.map_err(|e| BucketstatError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration, or exits if it is invalid.
fn load_config(loader: &ConfigLoader) -> BucketstatConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => fail(e.into(), "config"),
    }
}

/// Reports a fatal error and exits with status 1.
///
/// The span trace, if any, was captured where the error was raised.
fn fail(error: BucketstatError, component: &str) -> ! {
    report_error(ErrorContext::new(error, component));
    process::exit(1);
}

fn run_analysis(config: &BucketstatConfig) -> BucketstatResult<()> {
    let settings = &config.analysis;
    let _span = info_span!("run_analysis", path = %settings.word_list.display()).entered();
    info!("Loading word list");
    let words = WordList::load(&settings.word_list)
        .map_err(|e| BucketstatError::from(e).in_current_span())?;

    let hasher = settings.strategy.build(settings.bucket_count);
    let report = analysis::analyze(&words, hasher.as_ref(), settings.run_policy)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out, config.report.format, config.report.extended)?;
    out.flush()?;
    Ok(())
}

fn run_hash(config: &BucketstatConfig, words: &[String]) -> BucketstatResult<()> {
    let hasher = config
        .analysis
        .strategy
        .build(config.analysis.bucket_count);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in words {
        writeln!(out, "{word}\t{}", hasher.bucket(word)?)?;
    }
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Analyze(AnalyzeArgs::default())) {
        Command::Analyze(overrides) => {
            let mut config = load_config(&loader);
            overrides.apply(&mut config);
            if let Err(e) = config.validate() {
                fail(e.into(), "config");
            }
            start_logging(&config.log);

            if let Err(e) = run_analysis(&config) {
                fail(e, "analysis");
            }
        }
        Command::Hash { words, hashing } => {
            let mut config = load_config(&loader);
            hashing.apply(&mut config);
            if let Err(e) = config.validate() {
                fail(e.into(), "config");
            }
            start_logging(&config.log);

            if let Err(e) = run_hash(&config, &words) {
                fail(e, "hasher");
            }
        }
        Command::Validate => {
            let config = load_config(&loader);
            start_logging(&config.log);
            info!("Configuration validated successfully");
            println!("Configuration is valid");
        }
        Command::GenConfig { output } => {
            if let Err(e) = write_default_config(&output) {
                fail(e, "gen-config");
            }
        }
    }
}

fn start_logging(log: &LogConfig) {
    if let Err(e) = init_logging(log) {
        fail(e, "logging");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));
}

fn write_default_config(output: &Path) -> BucketstatResult<()> {
    let default_config = BucketstatConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| BucketstatError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let args = Args::try_parse_from(std::iter::once("bucketstat").chain(argv.iter().copied()))
            .unwrap();
        match args.command {
            Some(Command::Analyze(overrides)) => overrides,
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_flags_override_config() {
        let mut config = BucketstatConfig::default();
        analyze_args(&[
            "analyze",
            "-w",
            "words.txt",
            "-b",
            "16",
            "-s",
            "bytes",
            "--run-policy",
            "preserve",
            "-f",
            "json",
            "-e",
        ])
        .apply(&mut config);

        assert_eq!(config.analysis.word_list, PathBuf::from("words.txt"));
        assert_eq!(config.analysis.bucket_count, 16);
        assert_eq!(config.analysis.strategy, HashStrategy::Bytes);
        assert_eq!(config.analysis.run_policy, RunPolicy::Preserve);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.extended);
    }

    #[test]
    fn test_absent_flags_keep_loaded_values() {
        let mut config = BucketstatConfig::default();
        config.analysis.bucket_count = 128;
        config.analysis.strategy = HashStrategy::Fnv;
        config.report.extended = true;

        analyze_args(&["analyze"]).apply(&mut config);

        assert_eq!(config.analysis.bucket_count, 128);
        assert_eq!(config.analysis.strategy, HashStrategy::Fnv);
        assert!(config.report.extended);
    }

    #[test]
    fn test_zero_bucket_flag_fails_validation() {
        let mut config = BucketstatConfig::default();
        analyze_args(&["analyze", "--buckets", "0"]).apply(&mut config);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hash_command_parses_words_and_overrides() {
        let args = Args::try_parse_from(["bucketstat", "hash", "-b", "8", "hello", "world"]).unwrap();
        let Some(Command::Hash { words, hashing }) = args.command else {
            panic!("expected hash command");
        };

        let mut config = BucketstatConfig::default();
        hashing.apply(&mut config);
        assert_eq!(words, ["hello", "world"]);
        assert_eq!(config.analysis.bucket_count, 8);
        assert_eq!(config.analysis.strategy, HashStrategy::Chars);
    }

    #[test]
    fn test_write_default_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("bucketstat.toml");

        write_default_config(&path).unwrap();
        let loaded = ConfigLoader::new(Some(&path), "BUCKETSTAT_GEN_CONFIG_TEST")
            .load()
            .unwrap();

        assert_eq!(loaded.analysis.bucket_count, 64);
        assert_eq!(loaded.analysis.word_list, PathBuf::from("english.txt"));
        assert_eq!(loaded.report.format, OutputFormat::Text);
    }
}
