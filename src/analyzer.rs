//! String analyzer / 字符串分析器
//!
//! Pure functions mapping a value to its derived [`Properties`]. Each
//! property is computed from the raw value independently.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use crate::models::Properties;

/// SHA-256 of the raw UTF-8 bytes, lowercase hex / 计算SHA256摘要
pub fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Analyze a value. Total over all input including the empty string / 分析字符串
pub fn analyze(value: &str) -> Properties {
    let character_frequency_map = character_frequency(value);

    Properties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: word_count(value),
        sha256_hash: digest(value),
        character_frequency_map,
    }
}

/// Case and punctuation insensitive palindrome check / 回文判断（忽略大小写和标点）
///
/// Only ASCII letters and digits survive sanitization, so an input with none
/// of them is trivially a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let sanitized: Vec<char> = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    sanitized.iter().eq(sanitized.iter().rev())
}

/// Whitespace-delimited token count / 单词数
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Occurrences per character of the unsanitized value / 字符频率统计
pub fn character_frequency(value: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for c in value.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_hex() {
        let a = digest("hello");
        assert_eq!(a, digest("hello"));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(
            a,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_ne!(a, digest("hellp"));
    }

    #[test]
    fn test_empty_string() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.character_frequency_map.is_empty());
        assert_eq!(
            props.sha256_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_palindrome_sanitized() {
        assert!(analyze("A man, a plan, a canal: Panama").is_palindrome);
        assert!(analyze("A man a plan a canal Panama").is_palindrome);
        assert!(analyze("racecar").is_palindrome);
        assert!(analyze("!!!").is_palindrome);
        assert!(!analyze("hello").is_palindrome);
        assert!(analyze("12321").is_palindrome);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("hello world").word_count, 2);
        assert_eq!(analyze("  hello   world  ").word_count, 2);
        assert_eq!(analyze("   ").word_count, 0);
        assert_eq!(analyze("one\ttwo\nthree").word_count, 3);
    }

    #[test]
    fn test_frequency_is_raw_and_case_sensitive() {
        let props = analyze("Aa, a!");
        assert_eq!(props.character_frequency_map.get(&'a'), Some(&2));
        assert_eq!(props.character_frequency_map.get(&'A'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&','), Some(&1));
        assert_eq!(props.character_frequency_map.get(&' '), Some(&1));
        assert_eq!(props.unique_characters, 5);
    }

    #[test]
    fn test_counts_are_consistent() {
        for value in ["", "racecar", "héllo wörld", "日本語 テキスト", "aaa bbb"] {
            let props = analyze(value);
            assert_eq!(props.unique_characters, props.character_frequency_map.len());
            assert_eq!(
                props.character_frequency_map.values().sum::<usize>(),
                props.length
            );
        }
    }

    #[test]
    fn test_length_counts_code_points() {
        assert_eq!(analyze("héllo").length, 5);
        assert_eq!(analyze("日本").length, 2);
    }
}
