//! Product-name heuristic: the name is usually in the first few lines
//! of the label, above the ingredient list.

pub const DEFAULT_PRODUCT_NAME: &str = "Food Product";

/// Lines containing these are label boilerplate, not product names.
const BOILERPLATE: &[&str] = &["ingredients", "nutrition", "calories", "serving"];

/// Pick a product name from the first five non-empty lines, or fall
/// back to a generic placeholder.
pub fn extract_product_name(raw_text: &str) -> String {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| {
            let lower = line.to_lowercase();
            lower.len() > 3 && !BOILERPLATE.iter().any(|word| lower.contains(word))
        })
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_clean_line_wins() {
        let text = "Crunchy Oat Bars\nIngredients: oats, honey";
        assert_eq!(extract_product_name(text), "Crunchy Oat Bars");
    }

    #[test]
    fn boilerplate_lines_are_skipped() {
        let text = "Nutrition Facts\nCalories 100\nChoco Crisps\nIngredients: cocoa";
        assert_eq!(extract_product_name(text), "Choco Crisps");
    }

    #[test]
    fn short_lines_are_skipped() {
        assert_eq!(extract_product_name("abc\nTrail Mix Deluxe"), "Trail Mix Deluxe");
    }

    #[test]
    fn falls_back_to_generic_name() {
        assert_eq!(extract_product_name(""), DEFAULT_PRODUCT_NAME);
        assert_eq!(
            extract_product_name("Ingredients: sugar\nNutrition Facts"),
            DEFAULT_PRODUCT_NAME
        );
    }
}
