//! The built-in training corpus.
//!
//! Ten hand-written descriptions per category, grouped by category. The
//! grouping matters: categories are registered in the order they first
//! appear, which decides ties during classification, so `Food` comes first.

use std::fs;
use std::path::Path;

use super::category::Category::{self, *};
use super::types::TrainingExample;
use crate::error::Result;

/// Labeled descriptions the default classifier is trained on.
pub static TRAINING_CORPUS: &[(&str, Category)] = &[
    // Food
    ("grocery store purchase", Food),
    ("restaurant dinner", Food),
    ("coffee shop", Food),
    ("supermarket shopping", Food),
    ("food delivery", Food),
    ("lunch at work", Food),
    ("breakfast cafe", Food),
    ("grocery delivery", Food),
    ("food truck", Food),
    ("bakery purchase", Food),

    // Transportation
    ("gas station", Transportation),
    ("uber ride", Transportation),
    ("public transport", Transportation),
    ("taxi fare", Transportation),
    ("car maintenance", Transportation),
    ("parking fee", Transportation),
    ("auto repair", Transportation),
    ("bus ticket", Transportation),
    ("train fare", Transportation),
    ("car insurance", Transportation),

    // Entertainment
    ("movie tickets", Entertainment),
    ("concert tickets", Entertainment),
    ("amusement park", Entertainment),
    ("streaming service", Entertainment),
    ("video games", Entertainment),
    ("sports event", Entertainment),
    ("theater show", Entertainment),
    ("museum visit", Entertainment),
    ("gaming subscription", Entertainment),
    ("music festival", Entertainment),

    // Utilities
    ("electricity bill", Utilities),
    ("water bill", Utilities),
    ("internet service", Utilities),
    ("phone bill", Utilities),
    ("gas bill", Utilities),
    ("cable tv", Utilities),
    ("home internet", Utilities),
    ("mobile plan", Utilities),
    ("utility payment", Utilities),
    ("internet provider", Utilities),

    // Shopping
    ("clothing store", Shopping),
    ("electronics purchase", Shopping),
    ("online shopping", Shopping),
    ("department store", Shopping),
    ("furniture store", Shopping),
    ("shoe store", Shopping),
    ("bookstore", Shopping),
    ("gift shop", Shopping),
    ("jewelry store", Shopping),
    ("sporting goods", Shopping),

    // Healthcare
    ("doctor visit", Healthcare),
    ("pharmacy purchase", Healthcare),
    ("hospital bill", Healthcare),
    ("dental care", Healthcare),
    ("medical supplies", Healthcare),
    ("health insurance", Healthcare),
    ("prescription drugs", Healthcare),
    ("medical test", Healthcare),
    ("eye care", Healthcare),
    ("health clinic", Healthcare),

    // Education
    ("tuition payment", Education),
    ("school supplies", Education),
    ("online course", Education),
    ("textbook purchase", Education),
    ("university fees", Education),
    ("educational software", Education),
    ("workshop fee", Education),
    ("training course", Education),
    ("student loan", Education),
    ("educational materials", Education),

    // Travel
    ("hotel booking", Travel),
    ("flight tickets", Travel),
    ("vacation rental", Travel),
    ("travel insurance", Travel),
    ("car rental", Travel),
    ("tour package", Travel),
    ("cruise booking", Travel),
    ("travel agency", Travel),
    ("airport parking", Travel),
    ("travel expenses", Travel),

    // Salary
    ("monthly salary", Salary),
    ("paycheck deposit", Salary),
    ("salary payment", Salary),
    ("wage deposit", Salary),
    ("income deposit", Salary),
    ("payroll deposit", Salary),
    ("salary credit", Salary),
    ("monthly income", Salary),
    ("wage payment", Salary),
    ("salary transfer", Salary),

    // Other
    ("miscellaneous expense", Other),
    ("unknown transaction", Other),
    ("general purchase", Other),
    ("various items", Other),
    ("mixed purchase", Other),
    ("general expense", Other),
    ("uncategorized", Other),
    ("misc purchase", Other),
    ("general transaction", Other),
    ("various expenses", Other),
];

/// The built-in corpus as owned training examples, in corpus order.
pub fn default_training_examples() -> Vec<TrainingExample> {
    TRAINING_CORPUS
        .iter()
        .map(|&(description, category)| TrainingExample::new(description, category))
        .collect()
}

/// Load training examples from a JSON file.
///
/// The file holds an array of `{"description": ..., "category": ...}`
/// objects; categories use their upper-case labels.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let content = fs::read_to_string(path)?;
    let examples: Vec<TrainingExample> = serde_json::from_str(&content)?;
    Ok(examples)
}
