//! Generated website copy and the persisted record shape.

use serde::{Deserialize, Serialize};

use super::RecordId;
use super::classifier::BusinessType;

/// One block of suggested website copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    pub content: String,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Provenance derived once at creation time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub source: String,

    pub timestamp: String,

    pub prompt_processed: String,

    pub sections_generated: i32,
}

/// The persisted unit: a prompt, its generated deck, and provenance.
///
/// Records are immutable after creation; the only lifecycle transition is
/// deletion. `updated_at` is assigned alongside `created_at` and carries no
/// further meaning since no update operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    pub id: RecordId,

    pub prompt: String,

    pub sections: Vec<Section>,

    pub metadata: GenerationMetadata,

    pub created_at: String,

    pub updated_at: String,
}

/// Produces the fixed three-section deck for a classified business type.
///
/// Always exactly three sections, in order Hero, About, Contact. Hero and
/// About interpolate the business label; Contact is fixed copy.
#[must_use]
pub fn generate_sections(business: BusinessType) -> Vec<Section> {
    let label = business.label();

    vec![
        Section::new("Hero", format!("Welcome to our {label}!")),
        Section::new(
            "About",
            format!("We provide the best {label} services in the area."),
        ),
        Section::new(
            "Contact",
            "Find us in Cairo or contact us for more information.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::classify;

    #[test]
    fn deck_is_always_three_sections_in_order() {
        for business in [
            BusinessType::Bakery,
            BusinessType::Restaurant,
            BusinessType::TechCompany,
            BusinessType::Shop,
            BusinessType::Agency,
            BusinessType::Generic,
        ] {
            let sections = generate_sections(business);
            assert_eq!(sections.len(), 3);
            assert_eq!(sections[0].title, "Hero");
            assert_eq!(sections[1].title, "About");
            assert_eq!(sections[2].title, "Contact");
        }
    }

    #[test]
    fn hero_and_about_carry_the_label() {
        let sections = generate_sections(BusinessType::Agency);
        assert!(sections[0].content.contains("agency"));
        assert!(sections[1].content.contains("agency"));
    }

    #[test]
    fn bakery_prompt_produces_reference_deck() {
        let business = classify("I want a bakery website");
        let sections = generate_sections(business);

        assert_eq!(sections[0].content, "Welcome to our bakery!");
        assert_eq!(
            sections[1].content,
            "We provide the best bakery services in the area."
        );
        assert_eq!(
            sections[2].content,
            "Find us in Cairo or contact us for more information."
        );
    }

    #[test]
    fn section_serialization_shape() {
        let section = Section::new("Hero", "Welcome to our shop!");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["title"], "Hero");
        assert_eq!(json["content"], "Welcome to our shop!");
    }

    #[test]
    fn metadata_uses_camel_case_keys() {
        let metadata = GenerationMetadata {
            source: "Generation Service".to_string(),
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            prompt_processed: "a shop".to_string(),
            sections_generated: 3,
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("promptProcessed").is_some());
        assert!(json.get("sectionsGenerated").is_some());
        assert!(json.get("prompt_processed").is_none());
    }
}
