//! Category display formatting

use crate::models::{Category, CategoryPalette};

/// List every category with its slug and chart color
pub fn format_category_list(palette: &CategoryPalette) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<20} {:<18} {}\n", "Category", "Slug", "Color"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for category in Category::ALL {
        output.push_str(&format!(
            "{:<20} {:<18} {}\n",
            category.name(),
            category.slug(),
            palette.color_for(category)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_categories() {
        let output = format_category_list(&CategoryPalette::default());
        for category in Category::ALL {
            assert!(output.contains(category.name()));
        }
        assert!(output.contains("bills-utilities"));
        assert!(output.contains("#FF6B6B"));
    }
}
