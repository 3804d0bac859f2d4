//! Rule-based mock grammar feedback.
//!
//! Stands in for the real checker: a reply must end with a period, and the
//! "polish" is a fixed template over the normalized input.

use std::sync::OnceLock;

use regex::Regex;

use crate::practice::chat::GrammarReview;

fn trailing_period_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.+\s*$").expect("trailing period pattern"))
}

fn collectable_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S{1,20}$").expect("collectable word pattern"))
}

/// Review a user sentence: append the missing final period and produce the
/// templated polish line.
pub fn review(text: &str) -> GrammarReview {
    let text = text.trim();
    let ends_with_period = text.ends_with('.');
    let corrected = if ends_with_period {
        text.to_string()
    } else {
        format!("{text}.")
    };
    let note = if ends_with_period {
        "语法正确"
    } else {
        "句子应该以句号结尾。"
    };
    GrammarReview {
        corrected,
        note: note.to_string(),
        polish: polish(text),
    }
}

/// "I think …" rewrite with normalized casing and exactly one final period.
pub fn polish(text: &str) -> String {
    let templated = format!("I think {}", text.trim().to_lowercase());
    let stripped = trailing_period_re().replace(&templated, "");
    format!("{stripped}.")
}

/// A collectable word is a single token: no whitespace, at most 20
/// characters. Used by the word-collection drag on the report page.
pub fn is_collectable_word(text: &str) -> bool {
    collectable_word_re().is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_with_period_passes() {
        let review = review("I have seen the movies.");
        assert_eq!(review.corrected, "I have seen the movies.");
        assert_eq!(review.note, "语法正确");
    }

    #[test]
    fn missing_period_is_appended_and_noted() {
        let review = review("I have seen the movies");
        assert_eq!(review.corrected, "I have seen the movies.");
        assert_eq!(review.note, "句子应该以句号结尾。");
    }

    #[test]
    fn polish_normalizes_case_and_final_period() {
        assert_eq!(polish("It Was Great."), "I think it was great.");
        assert_eq!(polish("it was great"), "I think it was great.");
    }

    #[test]
    fn collectable_words_are_single_short_tokens() {
        assert!(is_collectable_word("cozy"));
        assert!(is_collectable_word(" cozy "));
        assert!(!is_collectable_word("two words"));
        assert!(!is_collectable_word(""));
        assert!(!is_collectable_word("averyveryverylongtokenindeed"));
    }
}
