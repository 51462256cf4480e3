//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::classifier::{Category, ModelStats, TrainingExample};
use crate::cli::args::{OutputFormat, SpendcatArgs};
use crate::error::{Result, SpendcatError};

/// Result structure for a single classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub category: Category,
}

/// Result structure for batch classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub results: Vec<ClassificationResult>,
    pub skipped_lines: usize,
    pub duration_ms: u64,
    pub descriptions_per_second: f64,
}

/// Training examples listed by the corpus command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusListing {
    pub examples: Vec<TrainingExample>,
}

/// Accuracy of one category during evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryAccuracy {
    pub category: Category,
    pub correct: usize,
    pub total: usize,
}

/// A description whose predicted category differs from its label.
#[derive(Debug, Serialize, Deserialize)]
pub struct Misclassification {
    pub description: String,
    pub expected: Category,
    pub predicted: Category,
}

/// Evaluation results.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResults {
    pub total: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub per_category: Vec<CategoryAccuracy>,
    pub misclassified: Option<Vec<Misclassification>>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self, out: &mut String) -> std::fmt::Result;
}

impl HumanOutput for ClassificationResult {
    fn render_human(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.category)
    }
}

impl HumanOutput for BatchResults {
    fn render_human(&self, out: &mut String) -> std::fmt::Result {
        for result in &self.results {
            writeln!(out, "{:<15} {}", result.category.as_str(), result.text)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Classified {} descriptions in {}ms ({:.1}/s)",
            self.results.len(),
            self.duration_ms,
            self.descriptions_per_second
        )?;
        if self.skipped_lines > 0 {
            writeln!(out, "Skipped {} blank lines", self.skipped_lines)?;
        }
        Ok(())
    }
}

impl HumanOutput for ModelStats {
    fn render_human(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "Total documents: {}", self.total_documents)?;
        writeln!(out, "Vocabulary size: {}", self.vocabulary_size)?;
        writeln!(out, "Smoothing: {}", self.smoothing)?;
        writeln!(out, "Fallback: {}", self.fallback)?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<15} {:>9} {:>7} {:>9}",
            "CATEGORY", "DOCUMENTS", "TOKENS", "DISTINCT"
        )?;
        for stats in &self.categories {
            writeln!(
                out,
                "{:<15} {:>9} {:>7} {:>9}",
                stats.category.as_str(),
                stats.documents,
                stats.tokens,
                stats.distinct_tokens
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for CorpusListing {
    fn render_human(&self, out: &mut String) -> std::fmt::Result {
        for example in &self.examples {
            writeln!(
                out,
                "{:<15} {}",
                example.category.as_str(),
                example.description
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{} examples", self.examples.len())
    }
}

impl HumanOutput for EvaluationResults {
    fn render_human(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            "Accuracy: {:.2}% ({}/{})",
            self.accuracy * 100.0,
            self.correct,
            self.total
        )?;
        writeln!(out)?;
        for entry in &self.per_category {
            writeln!(
                out,
                "{:<15} {:>4}/{:<4}",
                entry.category.as_str(),
                entry.correct,
                entry.total
            )?;
        }

        if let Some(misclassified) = &self.misclassified {
            if !misclassified.is_empty() {
                writeln!(out)?;
                writeln!(out, "Misclassified:")?;
                for miss in misclassified {
                    writeln!(
                        out,
                        "  {} (expected {}, got {})",
                        miss.description, miss.expected, miss.predicted
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpendcatArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    print!("{}", format_result(message, result, args)?);
    Ok(())
}

/// Render a result the way [`output_result`] prints it.
pub fn format_result<T>(message: &str, result: &T, args: &SpendcatArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => format_human(message, result, args),
        OutputFormat::Json => format_json(result, args),
    }
}

fn format_human<T: HumanOutput>(message: &str, result: &T, args: &SpendcatArgs) -> Result<String> {
    let mut out = String::new();
    if args.verbosity() > 1 {
        out.push_str(message);
        out.push_str("\n\n");
    }

    result
        .render_human(&mut out)
        .map_err(|e| SpendcatError::other(format!("Failed to format output: {e}")))?;
    Ok(out)
}

fn format_json<T: Serialize>(result: &T, args: &SpendcatArgs) -> Result<String> {
    let mut json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    json.push('\n');
    Ok(json)
}
