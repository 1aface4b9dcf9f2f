//! Display title and description.

use meshi_core::StructuredData;

pub const MAX_TITLE_CHARS: usize = 20;
const TITLE_KEEP_CHARS: usize = 17;
pub const MAX_DESCRIPTION_CHARS: usize = 100;
const DESCRIPTION_KEEP_CHARS: usize = 97;
pub const ELLIPSIS: &str = "...";

/// Title used when no genre was found.
pub const DEFAULT_TITLE: &str = "【食事募集】";

/// Build `(title, description)` for a free-text meetup.
pub fn synthesize(content: &str, structured: &StructuredData) -> (String, String) {
    let mut title = match &structured.food_genre {
        Some(genre) => {
            let mut t = format!("【{}募集", genre);
            if let Some(location) = &structured.location {
                t.push('@');
                t.push_str(location);
            }
            t.push('】');
            t
        }
        None => DEFAULT_TITLE.to_string(),
    };

    if let Some(budget) = &structured.budget {
        title.push_str("予算");
        title.push_str(budget);
    }

    let title = truncate_chars(&title, MAX_TITLE_CHARS, TITLE_KEEP_CHARS);
    let description = truncate_chars(content, MAX_DESCRIPTION_CHARS, DESCRIPTION_KEEP_CHARS);

    (title, description)
}

/// If `text` has more than `limit` characters, keep the first `keep` and
/// append [`ELLIPSIS`]. Counts characters, not bytes.
pub fn truncate_chars(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let mut out: String = text.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        text.to_string()
    }
}
