//! Filter predicates and evaluator / 过滤条件与过滤器
//!
//! Explicit query parameters are parsed leniently: a value that does not
//! parse is dropped, producing a laxer filter rather than a rejection.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::StringRecord;

/// Independent optional constraints, combined with AND / 过滤条件集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicateSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterPredicateSet {
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Parse raw query parameters, dropping anything malformed / 解析查询参数
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let number = |key: &str| params.get(key).and_then(|v| v.trim().parse::<usize>().ok());

        Self {
            is_palindrome: params.get("is_palindrome").and_then(|v| parse_bool(v)),
            min_length: number("min_length"),
            max_length: number("max_length"),
            word_count: number("word_count"),
            contains_character: params
                .get("contains_character")
                .and_then(|v| single_char(v)),
        }
    }

    /// Whether one record satisfies every present constraint / 判断记录是否匹配
    ///
    /// `contains_character` is matched verbatim, case-sensitive.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            if !record.value.contains(c) {
                return false;
            }
        }
        true
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Stable filter over `records`, echoing the predicates applied / 执行过滤
pub fn evaluate(
    records: Vec<StringRecord>,
    predicates: &FilterPredicateSet,
) -> (Vec<StringRecord>, FilterPredicateSet) {
    let matches = records
        .into_iter()
        .filter(|record| predicates.matches(record))
        .collect();
    (matches, predicates.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    fn record(value: &str) -> StringRecord {
        StringRecord::new(value.to_string(), analyze(value))
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_min_length_keeps_order() {
        let records = vec![record("abc"), record("abcde"), record("abcdefgh")];
        let predicates = FilterPredicateSet {
            min_length: Some(5),
            ..Default::default()
        };
        let (matches, applied) = evaluate(records, &predicates);
        let values: Vec<_> = matches.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["abcde", "abcdefgh"]);
        assert_eq!(applied, predicates);
    }

    #[test]
    fn test_conjunction() {
        let records = vec![
            record("racecar"),
            record("level up"),
            record("noon"),
            record("hello"),
        ];
        let predicates = FilterPredicateSet {
            is_palindrome: Some(true),
            word_count: Some(1),
            max_length: Some(5),
            ..Default::default()
        };
        let (matches, _) = evaluate(records, &predicates);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "noon");
    }

    #[test]
    fn test_max_length_is_inclusive() {
        let records = vec![record("abcd"), record("abcde"), record("abcdef")];
        let predicates = FilterPredicateSet {
            max_length: Some(5),
            ..Default::default()
        };
        let (matches, _) = evaluate(records, &predicates);
        let values: Vec<_> = matches.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["abcd", "abcde"]);
    }

    #[test]
    fn test_is_palindrome_false_keeps_non_palindromes() {
        let records = vec![
            record("racecar"),
            record("hello"),
            record("noon"),
            record("world"),
        ];
        let predicates =
            FilterPredicateSet::from_params(&params(&[("is_palindrome", "false")]));
        assert_eq!(predicates.is_palindrome, Some(false));
        let (matches, _) = evaluate(records, &predicates);
        let values: Vec<_> = matches.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["hello", "world"]);
    }

    #[test]
    fn test_contains_character_same_on_both_paths() {
        let records = vec![record("Zebra"), record("pizza"), record("apple")];
        let explicit =
            FilterPredicateSet::from_params(&params(&[("contains_character", "z")]));
        let interpreted = crate::query::interpret("strings containing the letter Z");
        assert_eq!(explicit, interpreted);

        let (from_params, _) = evaluate(records.clone(), &explicit);
        let (from_query, _) = evaluate(records, &interpreted);
        assert_eq!(from_params, from_query);
        assert_eq!(from_query.len(), 1);
        assert_eq!(from_query[0].value, "pizza");
    }

    #[test]
    fn test_contains_character_is_case_sensitive() {
        let records = vec![record("Apple"), record("banana")];
        let predicates = FilterPredicateSet {
            contains_character: Some('a'),
            ..Default::default()
        };
        let (matches, _) = evaluate(records, &predicates);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "banana");
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let records = vec![record("a"), record("b")];
        let (matches, applied) = evaluate(records, &FilterPredicateSet::default());
        assert_eq!(matches.len(), 2);
        assert!(applied.is_empty());
    }

    #[test]
    fn test_from_params_drops_malformed_values() {
        let parsed = FilterPredicateSet::from_params(&params(&[
            ("is_palindrome", "yes"),
            ("min_length", "abc"),
            ("max_length", "10"),
            ("word_count", "-1"),
            ("contains_character", "ab"),
            ("unknown", "1"),
        ]));
        assert_eq!(
            parsed,
            FilterPredicateSet {
                max_length: Some(10),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_from_params_all_fields() {
        let parsed = FilterPredicateSet::from_params(&params(&[
            ("is_palindrome", "True"),
            ("min_length", "2"),
            ("max_length", "9"),
            ("word_count", "1"),
            ("contains_character", "é"),
        ]));
        assert_eq!(parsed.is_palindrome, Some(true));
        assert_eq!(parsed.min_length, Some(2));
        assert_eq!(parsed.max_length, Some(9));
        assert_eq!(parsed.word_count, Some(1));
        assert_eq!(parsed.contains_character, Some('é'));
    }

    #[test]
    fn test_applied_echo_skips_absent_fields() {
        let predicates = FilterPredicateSet {
            min_length: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&predicates).unwrap();
        assert_eq!(json, serde_json::json!({ "min_length": 3 }));
    }
}
