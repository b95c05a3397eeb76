//! Keyword-based business type detection.

use serde::{Deserialize, Serialize};

/// Business category inferred from a free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessType {
    Bakery,
    Restaurant,
    TechCompany,
    Shop,
    Agency,
    #[default]
    Generic,
}

impl BusinessType {
    /// Copy-facing label, interpolated into generated section text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bakery => "bakery",
            Self::Restaurant => "restaurant",
            Self::TechCompany => "tech company",
            Self::Shop => "shop",
            Self::Agency => "agency",
            Self::Generic => "business",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered keyword table. Rows are checked top to bottom and the first row
/// with a matching keyword decides the category, so a prompt mentioning both
/// a bakery and a restaurant classifies as a bakery.
const CLASSIFICATION_TABLE: &[(&[&str], BusinessType)] = &[
    (&["bakery", "bread", "cake"], BusinessType::Bakery),
    (&["restaurant", "food", "dining"], BusinessType::Restaurant),
    (&["tech", "software", "app"], BusinessType::TechCompany),
    (&["shop", "store", "retail"], BusinessType::Shop),
    (&["agency", "marketing", "design"], BusinessType::Agency),
];

/// Classifies a prompt by case-insensitive substring containment against
/// [`CLASSIFICATION_TABLE`]. Total over all inputs; anything unmatched
/// (including the empty string) falls through to [`BusinessType::Generic`].
#[must_use]
pub fn classify(prompt: &str) -> BusinessType {
    let haystack = prompt.to_lowercase();

    CLASSIFICATION_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map_or(BusinessType::Generic, |(_, business)| *business)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_category() {
        assert_eq!(classify("artisan bread and pastries"), BusinessType::Bakery);
        assert_eq!(classify("fine dining downtown"), BusinessType::Restaurant);
        assert_eq!(classify("a software consultancy"), BusinessType::TechCompany);
        assert_eq!(classify("vintage clothing store"), BusinessType::Shop);
        assert_eq!(classify("full service marketing team"), BusinessType::Agency);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("BAKERY"), BusinessType::Bakery);
        assert_eq!(classify("Tech Startup"), BusinessType::TechCompany);
        assert_eq!(classify("ReTaIl outlet"), BusinessType::Shop);
    }

    #[test]
    fn earlier_rows_take_precedence() {
        // "food" (row 2) and "app" (row 3) both present.
        assert_eq!(classify("food delivery app"), BusinessType::Restaurant);
        // "cake" (row 1) beats "shop" (row 4).
        assert_eq!(classify("cake shop"), BusinessType::Bakery);
    }

    #[test]
    fn keyword_matches_inside_words() {
        // Substring containment, not word boundaries.
        assert_eq!(classify("seafood platters"), BusinessType::Restaurant);
        assert_eq!(classify("happiness coaching"), BusinessType::TechCompany);
    }

    #[test]
    fn unmatched_prompts_fall_back_to_generic() {
        assert_eq!(classify("a law firm in Cairo"), BusinessType::Generic);
        assert_eq!(classify(""), BusinessType::Generic);
        assert_eq!(classify("   "), BusinessType::Generic);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(BusinessType::Bakery.label(), "bakery");
        assert_eq!(BusinessType::TechCompany.label(), "tech company");
        assert_eq!(BusinessType::Generic.label(), "business");
        assert_eq!(BusinessType::Agency.to_string(), "agency");
    }
}
