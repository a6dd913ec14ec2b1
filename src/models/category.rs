//! Category model
//!
//! Transactions and budgets are classified into a fixed set of spending
//! categories. Each category has a display color used by chart-style reports;
//! the mapping lives in [`CategoryPalette`] so callers can override it from
//! settings instead of reaching for a global table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Color used for any category the palette has no entry for
pub const FALLBACK_COLOR: &str = "#95A5A6";

/// One of the fixed spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories, in registry order
    pub const ALL: [Category; 10] = [
        Category::FoodDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsUtilities,
        Category::Healthcare,
        Category::Travel,
        Category::Education,
        Category::PersonalCare,
        Category::Other,
    ];

    /// Human-readable name, as stored on disk
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FoodDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Other => "Other",
        }
    }

    /// Shell-friendly identifier (e.g. `food-dining`)
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::FoodDining => "food-dining",
            Self::Transportation => "transportation",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::BillsUtilities => "bills-utilities",
            Self::Healthcare => "healthcare",
            Self::Travel => "travel",
            Self::Education => "education",
            Self::PersonalCare => "personal-care",
            Self::Other => "other",
        }
    }

    /// Default chart color for this category
    pub const fn default_color(&self) -> &'static str {
        match self {
            Self::FoodDining => "#FF6B6B",
            Self::Transportation => "#4ECDC4",
            Self::Shopping => "#45B7D1",
            Self::Entertainment => "#96CEB4",
            Self::BillsUtilities => "#FFEAA7",
            Self::Healthcare => "#DDA0DD",
            Self::Travel => "#98D8C8",
            Self::Education => "#F7DC6F",
            Self::PersonalCare => "#BB8FCE",
            Self::Other => "#85C1E9",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Accepts the display name (case-insensitive) or the slug
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.name().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CategoryParseError::Unknown(needle.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(
                f,
                "Unknown category '{}'. Run 'finflow categories' to see valid names",
                s
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

/// Read-only category -> display color table with a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    colors: HashMap<Category, String>,
    fallback: String,
}

impl CategoryPalette {
    /// A palette with no entries; every lookup yields the fallback
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            colors: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Set or replace the color for a category
    pub fn with_color(mut self, category: Category, color: impl Into<String>) -> Self {
        self.colors.insert(category, color.into());
        self
    }

    /// Remove a category's entry so it uses the fallback color
    pub fn without(mut self, category: Category) -> Self {
        self.colors.remove(&category);
        self
    }

    /// Color for a category, or the fallback if unmapped
    pub fn color_for(&self, category: Category) -> &str {
        self.colors
            .get(&category)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Category::ALL
            .iter()
            .fold(Self::empty(FALLBACK_COLOR), |palette, c| {
                palette.with_color(*c, c.default_color())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_name_and_slug() {
        assert_eq!("Food & Dining".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("food & dining".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("bills-utilities".parse::<Category>().unwrap(), Category::BillsUtilities);
        assert_eq!(" Travel ".parse::<Category>().unwrap(), Category::Travel);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError::Unknown("Groceries".into()));
    }

    #[test]
    fn test_serialization_uses_display_name() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();
        assert_eq!(json, "\"Personal Care\"");
        let back: Category = serde_json::from_str("\"Bills & Utilities\"").unwrap();
        assert_eq!(back, Category::BillsUtilities);
    }

    #[test]
    fn test_names_unique_and_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.name().parse::<Category>().unwrap(), c);
            assert_eq!(c.slug().parse::<Category>().unwrap(), c);
            assert_eq!(c.to_string(), c.name());
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = CategoryPalette::default();
        assert_eq!(palette.color_for(Category::FoodDining), "#FF6B6B");
        assert_eq!(palette.color_for(Category::Other), "#85C1E9");
        assert_eq!(palette.fallback(), FALLBACK_COLOR);
    }

    #[test]
    fn test_palette_fallback_for_unmapped() {
        let palette = CategoryPalette::default().without(Category::Travel);
        assert_eq!(palette.color_for(Category::Travel), FALLBACK_COLOR);

        let empty = CategoryPalette::empty("#000000");
        assert_eq!(empty.color_for(Category::Shopping), "#000000");
    }

    #[test]
    fn test_palette_override() {
        let palette = CategoryPalette::default().with_color(Category::Shopping, "#123456");
        assert_eq!(palette.color_for(Category::Shopping), "#123456");
    }
}
