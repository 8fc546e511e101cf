//! Sentence splitting and slug generation.

const SLUG_WORDS: usize = 3;
const SLUG_MAX_LEN: usize = 32;
const SLUG_FALLBACK: &str = "sentence";

/// Split text into sentences on period characters.
///
/// Fragments are trimmed; empty and whitespace-only fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a file-name-safe slug from the first words of a sentence.
///
/// Words are lowercased and stripped of anything but alphanumerics, then
/// joined with `_`. Returns `"sentence"` when nothing usable remains.
pub fn slug(sentence: &str) -> String {
    let words: Vec<String> = sentence
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .take(SLUG_WORDS)
        .collect();

    let mut slug = words.join("_");
    if slug.chars().count() > SLUG_MAX_LEN {
        slug = slug.chars().take(SLUG_MAX_LEN).collect();
        while slug.ends_with('_') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}
