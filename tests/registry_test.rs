use std::sync::Arc;
use std::thread;

use spendcat::classifier::registry::{self, ClassifierRegistry, TransactionInput};
use spendcat::classifier::{Category, NaiveBayesClassifier, NaiveBayesConfig, TrainingExample};
use spendcat::error::{Result, SpendcatError};

#[test]
fn global_registry_serves_transactions_after_init() -> Result<()> {
    let first = registry::init_default()?;
    let second = registry::init_default()?;
    assert!(Arc::ptr_eq(&first, &second));

    let cases = [
        (TransactionInput::new("Taxi fare"), Category::Transportation),
        (
            TransactionInput::new("March").with_description("electricity bill"),
            Category::Utilities,
        ),
        (
            TransactionInput::new("monthly salary payment").with_description(""),
            Category::Salary,
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(registry::classify_transaction(&input)?, expected);
    }
    Ok(())
}

#[test]
fn registry_reports_missing_model() {
    let registry = ClassifierRegistry::new();
    assert!(matches!(
        registry.classify("taxi fare"),
        Err(SpendcatError::NotInitialized)
    ));
}

#[test]
fn readers_keep_their_model_across_a_swap() -> Result<()> {
    let registry = Arc::new(ClassifierRegistry::new());
    registry.install(NaiveBayesClassifier::train_default()?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || -> Result<()> {
                let model = registry.current()?;
                for _ in 0..100 {
                    assert_eq!(model.classify("taxi fare")?, Category::Transportation);
                }
                Ok(())
            })
        })
        .collect();

    let replacement = NaiveBayesClassifier::train(
        &[TrainingExample::new("taxi fare", Category::Travel)],
        NaiveBayesConfig::default(),
    )?;
    registry.install(replacement);

    for handle in handles {
        handle.join().unwrap()?;
    }
    assert_eq!(registry.classify("taxi fare")?, Category::Travel);
    Ok(())
}
