//! Text preparation: sentence splitting and output-name slugs.

mod sentences;

pub use sentences::{slug, split_sentences};

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // split_sentences tests
    // ===========================================

    #[test]
    fn test_split_simple_sentences() {
        let sentences = split_sentences("Hallo Welt. Wie geht es dir. Gut");

        assert_eq!(sentences, vec!["Hallo Welt", "Wie geht es dir", "Gut"]);
    }

    #[test]
    fn test_split_drops_empty_fragments() {
        let sentences = split_sentences("...First.. . Second.   .");

        assert_eq!(sentences, vec!["First", "Second"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences(" . . ").is_empty());
    }

    #[test]
    fn test_split_without_period_returns_whole_text() {
        let sentences = split_sentences("  no period here  ");

        assert_eq!(sentences, vec!["no period here"]);
    }

    #[test]
    fn test_split_never_returns_blank_entries() {
        let inputs = [
            "a.b.c",
            ". leading",
            "trailing .",
            "\n\tTabs.\nNewlines.\n",
            "Mehrere   Leerzeichen .  hier",
            "....",
        ];

        for input in inputs {
            for sentence in split_sentences(input) {
                assert!(!sentence.trim().is_empty(), "blank entry for {input:?}");
                assert_eq!(sentence, sentence.trim());
            }
        }
    }

    #[test]
    fn test_split_rejoin_reconstructs_content() {
        let input = " One. Two three.  Four ";
        let rejoined = split_sentences(input).join(".");

        assert_eq!(rejoined, "One.Two three.Four");
    }

    // ===========================================
    // slug tests
    // ===========================================

    #[test]
    fn test_slug_takes_first_three_words() {
        assert_eq!(slug("The quick brown fox jumps"), "the_quick_brown");
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(slug("Hello, world! (test)"), "hello_world_test");
    }

    #[test]
    fn test_slug_keeps_unicode_letters() {
        assert_eq!(slug("Grüße aus Köln"), "grüße_aus_köln");
    }

    #[test]
    fn test_slug_fallback_for_symbols_only() {
        assert_eq!(slug("!!! ??? ..."), "sentence");
        assert_eq!(slug(""), "sentence");
    }

    #[test]
    fn test_slug_is_length_limited() {
        let long = slug("Supercalifragilisticexpialidocious antidisestablishmentarianism words");

        assert!(long.chars().count() <= 32);
        assert!(!long.ends_with('_'));
        assert!(long.starts_with("supercalifragilistic"));
    }
}
