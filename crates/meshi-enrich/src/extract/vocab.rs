//! Fixed vocabularies and the single scan that reads them.

/// Ordered `(keyword, canonical value)` pairs. Earlier entries win ties.
pub type Vocabulary = &'static [(&'static str, &'static str)];

pub const FOOD_GENRES: Vocabulary = &[
    ("焼肉", "焼肉"),
    ("ラーメン", "ラーメン"),
    ("寿司", "寿司"),
    ("イタリアン", "イタリアン"),
    ("中華", "中華"),
];

pub const LOCATIONS: Vocabulary = &[
    ("渋谷", "渋谷"),
    ("新宿", "新宿"),
    ("池袋", "池袋"),
    ("銀座", "銀座"),
    ("六本木", "六本木"),
    ("恵比寿", "恵比寿"),
    ("表参道", "表参道"),
    ("原宿", "原宿"),
];

/// Trigger phrase → requirement label, in check order.
pub const REQUIREMENTS: Vocabulary = &[
    ("個室", PRIVATE_ROOM),
    ("サクッと", "サクッと食べたい"),
    ("奢り", "奢り"),
];

/// Requirement label that also earns a hashtag.
pub const PRIVATE_ROOM: &str = "個室希望";

/// Canonical value of the first vocabulary entry found anywhere in `text`.
///
/// Position in the vocabulary decides, not position in the text.
pub fn first_match(text: &str, vocabulary: Vocabulary) -> Option<&'static str> {
    vocabulary
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, canonical)| *canonical)
}

/// Canonical values of every entry found in `text`, in vocabulary order.
pub fn all_matches(text: &str, vocabulary: Vocabulary) -> Vec<&'static str> {
    vocabulary
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, canonical)| *canonical)
        .collect()
}
