//! Length measures used for translation-density scoring

use regex::Regex;
use std::sync::LazyLock;

static HAN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}").expect("han script regex"));

/// Count whitespace-delimited tokens
pub fn count_english_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count Han-script characters, ignoring punctuation, digits and Latin text
pub fn count_chinese_han_chars(text: &str) -> usize {
    HAN_CHAR.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_english_words() {
        assert_eq!(count_english_words("Sentence one."), 2);
        assert_eq!(count_english_words("  spaced   out\twords\n"), 3);
        assert_eq!(count_english_words(""), 0);
        assert_eq!(count_english_words("   "), 0);
    }

    #[test]
    fn test_count_chinese_han_chars_skips_punctuation() {
        assert_eq!(count_chinese_han_chars("句子一。"), 3);
        assert_eq!(count_chinese_han_chars("“你好！”他说。"), 4);
        assert_eq!(count_chinese_han_chars("第3章 ABC"), 2);
        assert_eq!(count_chinese_han_chars("。，！？"), 0);
        assert_eq!(count_chinese_han_chars(""), 0);
    }
}
