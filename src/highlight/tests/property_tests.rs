//! Behavioral guarantees of `highlight()`
//!
//! Round-trip, determinism, longest-match precedence, whole-word boundaries,
//! case handling, visibility gating and empty inputs.

use crate::highlight::engine::highlight;
use crate::highlight::types::{reconstruct, KeywordRecord, Token};
use crate::highlight::visibility::CategoryVisibility;

fn kw(term: &str, category: &str) -> KeywordRecord {
    KeywordRecord::new(term, category, 1)
}

fn annotated(tokens: &[Token]) -> Vec<(&str, &str)> {
    tokens
        .iter()
        .filter_map(|t| t.category().map(|c| (t.text(), c)))
        .collect()
}

fn hidden(categories: &[&str]) -> CategoryVisibility {
    categories.iter().map(|&c| (c, false)).collect()
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_round_trip_across_fixtures() {
    let texts = [
        "",
        " ",
        "machine learning engineer",
        "Senior Machine-Learning Engineer\n\n  * Python, SQL & C++\t(required)\r\n",
        "Équipe données — café, CAFÉ, naïve résumé",
        "react native, React-Native, reactnative",
        "go go go gopher",
        "🚀 Rust 🦀 rust!",
    ];
    let keyword_sets = vec![
        vec![],
        vec![kw("learning", "a"), kw("machine learning", "b")],
        vec![kw("python", "t"), kw("sql", "t"), kw("c++", "t"), kw("engineer", "role")],
        vec![kw("café", "x"), kw("résumé", "y"), kw("naïve", "z")],
        vec![kw("react", "a"), kw("react native", "b"), kw("react-native", "c")],
        vec![kw("go", "a"), kw("go go", "b"), kw("rust", "c")],
    ];
    let visibilities = vec![CategoryVisibility::new(), hidden(&["a", "t"]), hidden(&["b", "x", "role"])];

    for text in texts {
        for keywords in &keyword_sets {
            for visibility in &visibilities {
                let tokens = highlight(text, keywords, visibility);
                assert_eq!(reconstruct(&tokens), text, "round-trip failed for {:?}", text);
                assert!(
                    tokens.iter().all(|t| !t.text().is_empty()),
                    "empty token emitted for {:?}",
                    text
                );
            }
        }
    }
}

#[test]
fn test_no_adjacent_literals() {
    let tokens = highlight(
        "Python and SQL and Rust",
        &[kw("python", "t"), kw("sql", "t"), kw("rust", "t")],
        &CategoryVisibility::new(),
    );
    for pair in tokens.windows(2) {
        assert!(
            pair[0].is_annotated() || pair[1].is_annotated(),
            "two literals in a row: {:?}",
            pair
        );
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_idempotent_rerun() {
    let text = "Senior data scientist: machine learning, deep learning, Python";
    let keywords = vec![
        kw("learning", "a"),
        kw("machine learning", "b"),
        kw("deep learning", "b"),
        kw("python", "c"),
        kw("data scientist", "role"),
    ];
    let visibility = hidden(&["c"]);

    let first = highlight(text, &keywords, &visibility);
    let second = highlight(text, &keywords, &visibility);
    assert_eq!(first, second);
}

#[test]
fn test_keyword_input_order_does_not_change_winners() {
    let text = "machine learning engineer";
    let forward = highlight(text, &[kw("learning", "a"), kw("machine learning", "b")], &CategoryVisibility::new());
    let backward = highlight(text, &[kw("machine learning", "b"), kw("learning", "a")], &CategoryVisibility::new());
    assert_eq!(forward, backward);
}

// ============================================================================
// Longest-match precedence
// ============================================================================

#[test]
fn test_longest_match_precedence() {
    let tokens = highlight(
        "machine learning engineer",
        &[kw("learning", "A"), kw("machine learning", "B")],
        &CategoryVisibility::new(),
    );
    assert_eq!(annotated(&tokens), vec![("machine learning", "B")]);
}

#[test]
fn test_shorter_keyword_still_matches_elsewhere() {
    let tokens = highlight(
        "machine learning and continuous learning",
        &[kw("learning", "A"), kw("machine learning", "B")],
        &CategoryVisibility::new(),
    );
    assert_eq!(annotated(&tokens), vec![("machine learning", "B"), ("learning", "A")]);
}

#[test]
fn test_nested_phrase_chain() {
    let tokens = highlight(
        "senior machine learning engineer",
        &[
            kw("machine learning engineer", "role"),
            kw("machine learning", "tech"),
            kw("engineer", "role-short"),
        ],
        &CategoryVisibility::new(),
    );
    assert_eq!(annotated(&tokens), vec![("machine learning engineer", "role")]);
}

// ============================================================================
// Whole-word boundary
// ============================================================================

#[test]
fn test_whole_word_boundary() {
    let tokens = highlight("javascript", &[kw("java", "t")], &CategoryVisibility::new());
    assert!(annotated(&tokens).is_empty());
    assert_eq!(tokens, vec![Token::literal("javascript")]);
}

#[test]
fn test_symbol_edged_terms_need_word_class_change() {
    let keywords = [kw("c++", "t"), kw("+", "t"), kw(".net", "t")];
    let text = "use C++ daily and .NET";
    let tokens = highlight(text, &keywords, &CategoryVisibility::new());
    assert_eq!(tokens, vec![Token::literal(text)]);

    let tokens = highlight("asp.net core", &keywords, &CategoryVisibility::new());
    assert_eq!(annotated(&tokens), vec![(".net", "t")]);
}

#[test]
fn test_hyphenated_term_is_one_unit() {
    let tokens = highlight(
        "react-native and react",
        &[kw("react", "a"), kw("react-native", "b")],
        &CategoryVisibility::new(),
    );
    assert_eq!(annotated(&tokens), vec![("react-native", "b"), ("react", "a")]);
}

// ============================================================================
// Case handling
// ============================================================================

#[test]
fn test_case_insensitive_original_casing_preserved() {
    let tokens = highlight("Python and PYTHON", &[kw("python", "t")], &CategoryVisibility::new());
    assert_eq!(annotated(&tokens), vec![("Python", "t"), ("PYTHON", "t")]);
}

#[test]
fn test_annotated_token_carries_weight() {
    let tokens = highlight(
        "Kubernetes",
        &[KeywordRecord::new("kubernetes", "t", 7)],
        &CategoryVisibility::new(),
    );
    match &tokens[0] {
        Token::Annotated { weight, .. } => assert_eq!(*weight, 7),
        other => panic!("expected annotated token, got {:?}", other),
    }
}

// ============================================================================
// Visibility gating
// ============================================================================

#[test]
fn test_visibility_gating_without_starvation() {
    let tokens = highlight(
        "senior machine learning engineer",
        &[kw("machine learning", "A"), kw("learning", "B")],
        &hidden(&["A"]),
    );
    assert_eq!(annotated(&tokens), vec![("learning", "B")]);
}

#[test]
fn test_missing_visibility_entry_is_visible() {
    let visibility = hidden(&["unrelated"]);
    let tokens = highlight("lead", &[kw("lead", "role")], &visibility);
    assert_eq!(annotated(&tokens), vec![("lead", "role")]);
}

#[test]
fn test_all_hidden_yields_single_literal() {
    let text = "Python and SQL";
    let tokens = highlight(text, &[kw("python", "t"), kw("sql", "t")], &hidden(&["t"]));
    assert_eq!(tokens, vec![Token::literal(text)]);
}

#[test]
fn test_uncategorized_keyword_gated_as_other() {
    let tokens = highlight("agile team", &[kw("agile", "")], &hidden(&["other"]));
    assert!(annotated(&tokens).is_empty());

    let tokens = highlight("agile team", &[kw("agile", "")], &CategoryVisibility::new());
    assert_eq!(annotated(&tokens), vec![("agile", "other")]);
}

// ============================================================================
// Empty inputs
// ============================================================================

#[test]
fn test_empty_text() {
    let tokens = highlight("", &[kw("python", "t")], &CategoryVisibility::new());
    assert!(tokens.is_empty());
    assert_eq!(reconstruct(&tokens), "");
}

#[test]
fn test_empty_keywords() {
    let text = "No keywords at all.";
    let tokens = highlight(text, &[], &CategoryVisibility::new());
    assert_eq!(tokens, vec![Token::literal(text)]);
}

#[test]
fn test_blank_terms_ignored() {
    let text = "  spaced  ";
    let tokens = highlight(text, &[kw("   ", "t"), kw("", "t")], &CategoryVisibility::new());
    assert_eq!(tokens, vec![Token::literal(text)]);
}
