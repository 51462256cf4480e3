//! Command implementations for Spendcat CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{debug, info, warn};

use crate::classifier::{
    Category, NaiveBayesClassifier, NaiveBayesConfig, TrainingExample, TransactionInput,
    default_training_examples, load_training_data,
};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpendcatError};

/// Execute a CLI command.
pub fn execute_command(args: SpendcatArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_text(classify_args, &args),
        Command::Batch(batch_args) => classify_file(batch_args, &args),
        Command::Stats => show_stats(&args),
        Command::Corpus(corpus_args) => list_corpus(corpus_args, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
    }
}

/// Load the configuration named by `--config`, or the defaults.
fn load_config(cli_args: &SpendcatArgs) -> Result<NaiveBayesConfig> {
    match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            NaiveBayesConfig::from_json_file(path)
        }
        None => Ok(NaiveBayesConfig::default()),
    }
}

/// The examples named by `--training-data`, or the built-in corpus.
fn load_examples(cli_args: &SpendcatArgs) -> Result<Vec<TrainingExample>> {
    match &cli_args.training_data {
        Some(path) => {
            info!("Loading training data from: {}", path.display());
            load_training_data(path)
        }
        None => Ok(default_training_examples()),
    }
}

fn build_classifier(cli_args: &SpendcatArgs) -> Result<NaiveBayesClassifier> {
    let config = load_config(cli_args)?;
    let examples = load_examples(cli_args)?;

    let start = Instant::now();
    let classifier = NaiveBayesClassifier::train(&examples, config)?;
    info!(
        "Trained on {} examples in {:?} (vocabulary {})",
        classifier.total_documents(),
        start.elapsed(),
        classifier.vocabulary_size()
    );

    Ok(classifier)
}

fn classify_text(args: &ClassifyArgs, cli_args: &SpendcatArgs) -> Result<()> {
    let description = args.text.join(" ");
    if description.trim().is_empty() && args.title.is_none() {
        return Err(SpendcatError::invalid_argument(
            "provide description text or --title",
        ));
    }

    let input = TransactionInput {
        title: args.title.clone().unwrap_or_default(),
        description: Some(description),
    };
    let text = input.classification_text();
    debug!("Classifying: {text:?}");

    let classifier = build_classifier(cli_args)?;
    let category = classifier.classify(text)?;

    let result = ClassificationResult {
        text: text.to_string(),
        category,
    };
    output_result("Classification result", &result, cli_args)
}

/// Read one description per line, skipping blank lines.
fn read_descriptions(reader: impl BufRead) -> Result<(Vec<String>, usize)> {
    let mut descriptions = Vec::new();
    let mut skipped = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            warn!("Skipping blank line {}", line_num + 1);
            skipped += 1;
            continue;
        }
        descriptions.push(trimmed.to_string());
    }

    Ok((descriptions, skipped))
}

fn classify_file(args: &BatchArgs, cli_args: &SpendcatArgs) -> Result<()> {
    info!("Classifying descriptions from: {}", args.input.display());

    let file = File::open(&args.input)?;
    let (descriptions, skipped_lines) = read_descriptions(BufReader::new(file))?;
    let classifier = build_classifier(cli_args)?;

    let start = Instant::now();
    let categories = classifier.classify_batch(&descriptions)?;
    let elapsed = start.elapsed();

    let descriptions_per_second = if elapsed.as_secs_f64() > 0.0 {
        descriptions.len() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    let results = descriptions
        .into_iter()
        .zip(categories)
        .map(|(text, category)| ClassificationResult { text, category })
        .collect();

    let result = BatchResults {
        results,
        skipped_lines,
        duration_ms: elapsed.as_millis() as u64,
        descriptions_per_second,
    };
    output_result("Batch classification results", &result, cli_args)
}

fn show_stats(cli_args: &SpendcatArgs) -> Result<()> {
    let classifier = build_classifier(cli_args)?;
    output_result("Model statistics", &classifier.stats(), cli_args)
}

fn list_corpus(args: &CorpusArgs, cli_args: &SpendcatArgs) -> Result<()> {
    let examples = load_examples(cli_args)?
        .into_iter()
        .filter(|example| args.category.is_none_or(|c| c == example.category))
        .collect();

    output_result("Training examples", &CorpusListing { examples }, cli_args)
}

/// Score `predictions` against the labels in `examples`.
fn score_predictions(
    examples: &[TrainingExample],
    predictions: &[Category],
    categories: &[Category],
    collect_errors: bool,
) -> EvaluationResults {
    let mut per_category: Vec<CategoryAccuracy> = categories
        .iter()
        .map(|&category| CategoryAccuracy {
            category,
            correct: 0,
            total: 0,
        })
        .collect();
    let mut misclassified = Vec::new();
    let mut correct = 0;

    for (example, &predicted) in examples.iter().zip(predictions) {
        let hit = predicted == example.category;
        if hit {
            correct += 1;
        } else if collect_errors {
            misclassified.push(Misclassification {
                description: example.description.clone(),
                expected: example.category,
                predicted,
            });
        }

        let index = match per_category
            .iter()
            .position(|entry| entry.category == example.category)
        {
            Some(index) => index,
            None => {
                per_category.push(CategoryAccuracy {
                    category: example.category,
                    correct: 0,
                    total: 0,
                });
                per_category.len() - 1
            }
        };
        per_category[index].total += 1;
        if hit {
            per_category[index].correct += 1;
        }
    }

    per_category.retain(|entry| entry.total > 0);

    EvaluationResults {
        total: examples.len(),
        correct,
        accuracy: correct as f64 / examples.len() as f64,
        per_category,
        misclassified: collect_errors.then_some(misclassified),
    }
}

fn evaluate(args: &EvaluateArgs, cli_args: &SpendcatArgs) -> Result<()> {
    info!("Evaluating against: {}", args.data.display());

    let examples = load_training_data(&args.data)?;
    if examples.is_empty() {
        return Err(SpendcatError::invalid_argument(format!(
            "no labeled examples in {}",
            args.data.display()
        )));
    }

    let classifier = build_classifier(cli_args)?;
    let descriptions: Vec<&str> = examples.iter().map(|e| e.description.as_str()).collect();
    let predictions = classifier.classify_batch(&descriptions)?;

    let result = score_predictions(
        &examples,
        &predictions,
        classifier.categories(),
        args.show_errors,
    );
    output_result("Evaluation results", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_descriptions_skips_blank_lines() {
        let input = Cursor::new("coffee shop\n\n   \n taxi fare \nphone bill\n");
        let (descriptions, skipped) = read_descriptions(input).unwrap();

        assert_eq!(descriptions, vec!["coffee shop", "taxi fare", "phone bill"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_score_predictions() {
        let examples = vec![
            TrainingExample::new("coffee shop", Category::Food),
            TrainingExample::new("purchase", Category::Food),
            TrainingExample::new("taxi fare", Category::Transportation),
        ];
        let predictions = vec![Category::Food, Category::Other, Category::Transportation];

        let result = score_predictions(&examples, &predictions, &Category::ALL, true);

        assert_eq!(result.total, 3);
        assert_eq!(result.correct, 2);
        assert!((result.accuracy - 2.0 / 3.0).abs() < 1e-12);

        // Categories without labeled examples are left out.
        assert_eq!(result.per_category.len(), 2);
        assert_eq!(result.per_category[0].category, Category::Food);
        assert_eq!(result.per_category[0].correct, 1);
        assert_eq!(result.per_category[0].total, 2);
        assert_eq!(result.per_category[1].category, Category::Transportation);
        assert_eq!(result.per_category[1].correct, 1);

        let misclassified = result.misclassified.unwrap();
        assert_eq!(misclassified.len(), 1);
        assert_eq!(misclassified[0].description, "purchase");
        assert_eq!(misclassified[0].predicted, Category::Other);
    }

    #[test]
    fn test_score_predictions_without_errors() {
        let examples = vec![TrainingExample::new("purchase", Category::Food)];
        let result = score_predictions(&examples, &[Category::Other], &[], false);

        assert!(result.misclassified.is_none());
        assert_eq!(result.per_category.len(), 1);
        assert_eq!(result.per_category[0].correct, 0);
    }

    #[test]
    fn test_default_corpus_self_evaluation() {
        let classifier = NaiveBayesClassifier::train_default().unwrap();
        let examples = default_training_examples();
        let descriptions: Vec<&str> = examples.iter().map(|e| e.description.as_str()).collect();
        let predictions = classifier.classify_batch(&descriptions).unwrap();

        let result = score_predictions(&examples, &predictions, classifier.categories(), false);

        assert_eq!(result.total, 100);
        assert_eq!(result.per_category.len(), 10);
        assert!(result.per_category.iter().all(|entry| entry.total == 10));
        assert!(result.accuracy > 0.5);
    }
}
