//! Command line argument parsing for Spendcat CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::Category;

/// Spendcat - classify transaction descriptions into spending categories
#[derive(Parser, Debug, Clone)]
#[command(name = "spendcat")]
#[command(about = "Classify transaction descriptions into spending categories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Spendcat Contributors")]
#[command(long_about = None)]
pub struct SpendcatArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "SPENDCAT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Train on this labeled JSON file instead of the built-in corpus
    #[arg(
        long,
        value_name = "TRAINING_FILE",
        env = "SPENDCAT_TRAINING_DATA",
        global = true
    )]
    pub training_data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpendcatArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single description
    Classify(ClassifyArgs),

    /// Classify one description per line of a file
    Batch(BatchArgs),

    /// Show statistics of the trained model
    Stats,

    /// List the training examples
    Corpus(CorpusArgs),

    /// Measure accuracy against a labeled JSON file
    Evaluate(EvaluateArgs),
}

/// Arguments for classifying a description
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Description words (joined with spaces)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Transaction title, used when no description is given
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for batch classification
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one description per line; blank lines are skipped
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,
}

/// Arguments for listing the corpus
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Only list examples of this category
    #[arg(short, long)]
    pub category: Option<Category>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Labeled JSON file (array of {"description", "category"})
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// List every misclassified description
    #[arg(long)]
    pub show_errors: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args =
            SpendcatArgs::try_parse_from(["spendcat", "classify", "coffee", "shop"]).unwrap();

        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.text, vec!["coffee", "shop"]);
                assert!(classify.title.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            SpendcatArgs::try_parse_from(["spendcat", "stats", "--format", "json", "-vv"])
                .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
        assert!(matches!(args.command, Command::Stats));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = SpendcatArgs::try_parse_from(["spendcat", "-vvv", "-q", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_corpus_category_filter() {
        let args =
            SpendcatArgs::try_parse_from(["spendcat", "corpus", "--category", "travel"]).unwrap();

        match args.command {
            Command::Corpus(corpus) => assert_eq!(corpus.category, Some(Category::Travel)),
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(SpendcatArgs::try_parse_from(["spendcat", "corpus", "-c", "pets"]).is_err());
    }
}
