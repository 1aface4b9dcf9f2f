//! Hashtag generation from extracted data and time cues in the text.

use super::vocab::PRIVATE_ROOM;
use meshi_core::StructuredData;

pub const MAX_HASHTAGS: usize = 5;

const LUNCH_MARKERS: &[&str] = &["ランチ", "お昼"];
const DINNER_MARKERS: &[&str] = &["ディナー", "夜"];

/// Build up to [`MAX_HASHTAGS`] tags in fixed category order: genre,
/// location, time of day, day, private room.
pub fn generate(content: &str, structured: &StructuredData) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(genre) = &structured.food_genre {
        tags.push(format!("#{}", genre));
    }
    if let Some(location) = &structured.location {
        tags.push(format!("#{}", location));
    }

    if contains_any(content, LUNCH_MARKERS) {
        tags.push("#ランチ".to_string());
    } else if contains_any(content, DINNER_MARKERS) {
        tags.push("#ディナー".to_string());
    }

    if content.contains("今日") {
        tags.push("#今日".to_string());
    } else if content.contains("明日") {
        tags.push("#明日".to_string());
    }

    if structured.other_requirements.iter().any(|r| r == PRIVATE_ROOM) {
        tags.push("#個室".to_string());
    }

    tags.truncate(MAX_HASHTAGS);
    tags
}

fn contains_any(content: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| content.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::structured::extract;

    fn tags_for(content: &str) -> Vec<String> {
        generate(content, &extract(content))
    }

    #[test]
    fn test_lunch_beats_dinner() {
        assert_eq!(tags_for("お昼か夜に"), vec!["#ランチ"]);
        assert_eq!(tags_for("ディナーどう"), vec!["#ディナー"]);
    }

    #[test]
    fn test_today_beats_tomorrow() {
        assert_eq!(tags_for("今日か明日"), vec!["#今日"]);
        assert_eq!(tags_for("明日のランチ"), vec!["#ランチ", "#明日"]);
    }

    #[test]
    fn test_category_order_is_fixed() {
        let tags = tags_for("個室で明日の夜、銀座で寿司");
        assert_eq!(tags, vec!["#寿司", "#銀座", "#ディナー", "#明日", "#個室"]);
    }

    #[test]
    fn test_private_room_requires_label() {
        let structured = StructuredData {
            other_requirements: vec!["奢り".into()],
            ..Default::default()
        };
        assert!(generate("個室", &structured).is_empty());
    }

    #[test]
    fn test_explicit_structured_fields_are_tagged_verbatim() {
        let structured = StructuredData {
            food_genre: Some("カレー".into()),
            location: Some("神田".into()),
            ..Default::default()
        };
        assert_eq!(generate("", &structured), vec!["#カレー", "#神田"]);
    }

    #[test]
    fn test_never_more_than_five() {
        let samples = [
            "",
            "今日の夜、渋谷で焼肉サクッと食べたい。予算5000円で個室希望",
            "ランチ ディナー 今日 明日 個室 焼肉 ラーメン 渋谷 新宿 奢り サクッと",
        ];
        for s in samples {
            assert!(tags_for(s).len() <= MAX_HASHTAGS);
        }
    }
}
