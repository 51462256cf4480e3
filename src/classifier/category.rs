//! Transaction categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpendcatError;

/// The closed set of labels a transaction can be classified into.
///
/// The serialized form is the upper-case label (`"FOOD"`, `"SALARY"`, ...),
/// which is also what callers persist as a transaction's category field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Groceries, restaurants, cafes.
    Food,
    /// Fuel, rides, public transport, car upkeep.
    Transportation,
    /// Tickets, streaming, games, events.
    Entertainment,
    /// Power, water, phone, internet.
    Utilities,
    /// Retail purchases.
    Shopping,
    /// Doctors, pharmacy, insurance.
    Healthcare,
    /// Tuition, courses, books.
    Education,
    /// Hotels, flights, rentals.
    Travel,
    /// Income.
    Salary,
    /// Fallback label.
    #[default]
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Salary,
        Category::Other,
    ];

    /// The serialized label of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Transportation => "TRANSPORTATION",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Utilities => "UTILITIES",
            Category::Shopping => "SHOPPING",
            Category::Healthcare => "HEALTHCARE",
            Category::Education => "EDUCATION",
            Category::Travel => "TRAVEL",
            Category::Salary => "SALARY",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SpendcatError;

    /// Parse a label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| SpendcatError::unknown_category(label))
    }
}
