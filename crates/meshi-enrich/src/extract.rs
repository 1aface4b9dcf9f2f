//! Keyword and regex extraction over Japanese meetup text.
//!
//! Deterministic: fixed vocabularies, first match in list order wins, and
//! every step is a pure function of its input.

pub mod hashtags;
pub mod structured;
pub mod title;
pub mod vocab;

use meshi_core::StructuredData;

/// Everything derived from one free-text description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub structured: StructuredData,
    pub hashtags: Vec<String>,
    pub title: String,
    pub description: String,
}

/// Run the full free-text pipeline.
pub fn enrich(content: &str) -> Enrichment {
    let structured = structured::extract(content);
    let hashtags = hashtags::generate(content, &structured);
    let (title, description) = title::synthesize(content, &structured);

    Enrichment {
        structured,
        hashtags,
        title,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_full_example() {
        let result = enrich("今日の夜、渋谷で焼肉サクッと食べたい。予算5000円で個室希望");

        assert_eq!(result.structured.food_genre.as_deref(), Some("焼肉"));
        assert_eq!(result.structured.location.as_deref(), Some("渋谷"));
        assert_eq!(result.structured.budget.as_deref(), Some("5000円"));
        assert_eq!(
            result.structured.other_requirements,
            vec!["個室希望".to_string(), "サクッと食べたい".to_string()]
        );
        assert_eq!(
            result.hashtags,
            vec!["#焼肉", "#渋谷", "#ディナー", "#今日", "#個室"]
        );
        assert_eq!(result.title, "【焼肉募集@渋谷】予算5000円");
        assert_eq!(
            result.description,
            "今日の夜、渋谷で焼肉サクッと食べたい。予算5000円で個室希望"
        );
    }

    #[test]
    fn test_enrich_empty_content() {
        let result = enrich("");
        assert_eq!(result.structured, StructuredData::default());
        assert!(result.hashtags.is_empty());
        assert_eq!(result.title, "【食事募集】");
        assert_eq!(result.description, "");
    }
}
