#![allow(clippy::uninlined_format_args)]

// Work around dead code warnings: rust-lang issue #46379
pub mod common;

use common::*;
use rbregex::{Regexp, IGNORECASE};

#[test]
fn basic_match_and_mismatch() {
    let re = compile("(https?://[^/]+)[-a-zA-Z0-9./]+");
    assert!(re
        .find("http://masamitsu-murase.12345/hoge.html")
        .unwrap()
        .is_some());
    assert!(re
        .find("http:///masamitsu-murase.12345/hoge.html")
        .unwrap()
        .is_none());
}

#[test]
fn capture_groups_and_surroundings() {
    let m = match1("a(b)c", "xxabcxx");
    assert_eq!(m.begin(0).unwrap(), Some(2));
    assert_eq!(m.end(0).unwrap(), Some(5));
    assert_eq!(m.as_str(), "abc");
    assert_eq!(m.captures(), &[Some("b".to_string())]);
    assert_eq!(m.begin(1).unwrap(), Some(3));
    assert_eq!(m.end(1).unwrap(), Some(4));
    assert_eq!(m.pre_match(), "xx");
    assert_eq!(m.post_match(), "xx");
}

#[test]
fn line_anchors_without_flags() {
    // Ruby dialect: ^ and $ anchor at line boundaries by default, while
    // `.` stops at a line terminator.
    assert_eq!(match1(".*", "abcd\nefg").as_str(), "abcd");
    assert_eq!(match1("^a.", "abcd\naefg").as_str(), "ab");
    assert_eq!(match1("^a.", "bacd\naefg").as_str(), "ae");
    assert_eq!(match1(".$", "bacd\naefg").as_str(), "d");
}

#[test]
fn multiline_dot_spans_line_terminators() {
    assert_eq!(match1f(".*", "m", "abcd\nefg").as_str(), "abcd\nefg");
}

#[test]
fn ignorecase_matching() {
    assert_eq!(match1f("aBcD", "ix", "00AbcDef").as_str(), "AbcD");
    assert_eq!(match1f("0x[a-f]+", "ix", "00XaBCdefG").as_str(), "0XaBCdef");
    assert_eq!(match1f("0x[^c-f]+", "ix", "00XaBCdefG").as_str(), "0XaB");
}

#[test]
fn ignorecase_by_bitmask() {
    let re = Regexp::with_flags("ABC", IGNORECASE).unwrap();
    assert!(re.is_casefold());
    let m = re.find_from("xx abc xx", 0).unwrap().unwrap();
    assert_eq!(m.begin(0).unwrap(), Some(3));
    assert_eq!(m.end(0).unwrap(), Some(6));
}

#[test]
fn extended_syntax_ignores_pattern_whitespace() {
    let m = match1f("a b  c", "x", "xxabcxx");
    assert_eq!(m.as_str(), "abc");
}

#[test]
fn search_from_offset() {
    let re = compile("a(b)c");
    // The match at 2 lies before the requested offset and nothing
    // follows it.
    assert!(re.find_from("xxabcxx", 3).unwrap().is_none());

    let re = compile("abc");
    let m = re.find_from("abcabc", 1).unwrap().unwrap();
    assert_eq!(m.begin(0).unwrap(), Some(3));
    assert_eq!(m.end(0).unwrap(), Some(6));
}

#[test]
fn out_of_range_offsets_are_no_match() {
    let re = compile(".*");
    assert!(re.find_from("abc", 3).unwrap().is_none());
    assert!(re.find_from("abc", 10).unwrap().is_none());
    // The empty subject has no in-range offset at all.
    assert!(re.find("").unwrap().is_none());
}

#[test]
fn empty_width_match_at_line_end() {
    let m = match1("$", "ab");
    assert_eq!(m.offset(0).unwrap(), Some((2, 2)));
    assert_eq!(m.as_str(), "");
    assert_eq!(m.pre_match(), "ab");
    assert_eq!(m.post_match(), "");
}

#[test]
fn find_iter_yields_nonoverlapping_matches() {
    let re = compile("an");
    let matches: Vec<String> = re
        .find_iter("banana")
        .map(|m| m.unwrap().as_str().to_string())
        .collect();
    assert_eq!(matches, vec!["an", "an"]);
}

#[test]
fn find_iter_makes_progress_over_empty_matches() {
    let re = compile("a*");
    let matches: Vec<String> = re
        .find_iter("bb")
        .map(|m| m.unwrap().as_str().to_string())
        .collect();
    assert_eq!(matches, vec!["", ""]);

    let matches: Vec<String> = re
        .find_iter("baa")
        .map(|m| m.unwrap().as_str().to_string())
        .collect();
    assert_eq!(matches, vec!["", "aa"]);
}

#[test]
fn find_iter_from_skips_earlier_matches() {
    let re = compile("an");
    let starts: Vec<usize> = re
        .find_iter_from("banana", 2)
        .map(|m| m.unwrap().range().start)
        .collect();
    assert_eq!(starts, vec![3]);
}

#[test]
fn split_around_matches() {
    let re = compile(",");
    assert_eq!(re.split("a,b,c").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(re.split("a,b,").unwrap(), vec!["a", "b", ""]);
    assert_eq!(re.split("abc").unwrap(), vec!["abc"]);
}

#[test]
fn replace_first_match() {
    let re = compile("b+");
    assert_eq!(re.replace("abbbc", "X").unwrap(), "aXc");
    assert_eq!(re.replace("xyz", "X").unwrap(), "xyz");
}
