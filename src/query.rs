//! Natural language query interpreter / 自然语言查询解析
//!
//! A fixed set of lexical rules, each applied independently in order.
//! Later rules may overwrite `contains_character` set by earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::FilterPredicateSet;

static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than ([0-9]+)").expect("valid regex"));

static CONTAINS_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:s|ing) the (?:letter|character) (\w)").expect("valid regex")
});

/// Rules see the lowercased query / 规则只匹配小写查询
type Rule = fn(&str, &mut FilterPredicateSet);

const RULES: &[Rule] = &[
    palindrome_rule,
    single_word_rule,
    longer_than_rule,
    contains_letter_rule,
    first_vowel_rule,
];

fn palindrome_rule(lower: &str, set: &mut FilterPredicateSet) {
    if lower.contains("palindromic") || lower.contains("palindrome") {
        set.is_palindrome = Some(true);
    }
}

fn single_word_rule(lower: &str, set: &mut FilterPredicateSet) {
    if lower.contains("single word") || lower.contains("one word") {
        set.word_count = Some(1);
    }
}

/// "longer than N" means at least N + 1 / 长于N即至少N+1
///
/// An N past `usize::MAX` saturates, so nothing can match.
fn longer_than_rule(lower: &str, set: &mut FilterPredicateSet) {
    if let Some(caps) = LONGER_THAN.captures(lower) {
        let min = caps[1]
            .parse::<usize>()
            .map_or(usize::MAX, |n| n.saturating_add(1));
        set.min_length = Some(min);
    }
}

fn contains_letter_rule(lower: &str, set: &mut FilterPredicateSet) {
    if let Some(c) = CONTAINS_LETTER
        .captures(lower)
        .and_then(|caps| caps[1].chars().next())
    {
        set.contains_character = Some(c);
    }
}

fn first_vowel_rule(lower: &str, set: &mut FilterPredicateSet) {
    if lower.contains("first vowel") {
        set.contains_character = Some('a');
    }
}

/// Interpret a free-text query. Returns an empty set when no rule fires / 解析查询
pub fn interpret(query: &str) -> FilterPredicateSet {
    let lower = query.to_lowercase();
    let mut set = FilterPredicateSet::default();
    for rule in RULES {
        rule(&lower, &mut set);
    }
    set
}
