//! Two-tier match filter.
//!
//! Every keystroke recomputes the visible list from the full, sorted
//! candidate list:
//!
//! ```text
//! candidates (sorted) ──► pass 1: folded prefix matches     ──┐
//!                     └─► pass 2: folded interior matches   ──┴─► visible
//! ```
//!
//! Prefix matches always come first. Within each pass the order of the
//! input list is kept, so nothing is re-sorted here.

/// How a candidate matched the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// Folded candidate starts with the folded input.
    Prefix,
    /// Folded input occurs in the folded candidate, but not at offset 0.
    Interior,
}

/// Classify a single candidate against an already folded input.
fn match_kind(candidate: &str, folded_input: &str) -> Option<MatchKind> {
    match candidate.to_lowercase().find(folded_input) {
        Some(0) => Some(MatchKind::Prefix),
        Some(_) => Some(MatchKind::Interior),
        None => None,
    }
}

/// Derive the visible list for `input` from the full candidate list.
///
/// Empty input matches everything as a prefix, so the result is the
/// input list unchanged.
pub fn filter_choices(choices: &[String], input: &str) -> Vec<String> {
    let folded_input = input.to_lowercase();
    let kinds: Vec<Option<MatchKind>> = choices
        .iter()
        .map(|choice| match_kind(choice, &folded_input))
        .collect();

    let pass = |wanted: MatchKind| {
        choices
            .iter()
            .zip(&kinds)
            .filter(move |(_, kind)| **kind == Some(wanted))
            .map(|(choice, _)| choice.clone())
    };

    pass(MatchKind::Prefix)
        .chain(pass(MatchKind::Interior))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_matches_before_interior_matches() {
        let choices = list(&["Application", "apple", "banana", "pineapple"]);
        assert_eq!(
            filter_choices(&choices, "app"),
            list(&["Application", "apple", "pineapple"])
        );
    }

    #[test]
    fn test_order_within_pass_follows_input_list() {
        // Not re-sorted: "apple" stays ahead of "Application" here.
        let choices = list(&["apple", "Application", "banana", "pineapple"]);
        assert_eq!(
            filter_choices(&choices, "app"),
            list(&["apple", "Application", "pineapple"])
        );
    }

    #[test]
    fn test_empty_input_is_identity() {
        let choices = list(&["Zed", "awk", "bash", "zsh"]);
        assert_eq!(filter_choices(&choices, ""), choices);
    }

    #[test]
    fn test_no_match_is_empty() {
        let choices = list(&["awk", "bash"]);
        assert!(filter_choices(&choices, "xyz").is_empty());
        assert!(filter_choices(&[], "a").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let choices = list(&["Firefox", "gfire", "thunderbird"]);
        let lower = filter_choices(&choices, "fire");
        assert_eq!(lower, list(&["Firefox", "gfire"]));
        assert_eq!(filter_choices(&choices, "FIRE"), lower);
        assert_eq!(filter_choices(&choices, "fIrE"), lower);
    }

    #[test]
    fn test_no_duplicates_when_input_repeats_in_candidate() {
        // "aa" occurs at 0 and again later; still a single prefix match.
        let choices = list(&["aaXaa", "baa"]);
        assert_eq!(filter_choices(&choices, "aa"), list(&["aaXaa", "baa"]));
    }

    #[test]
    fn test_result_is_exactly_the_substring_matches() {
        let choices = list(&["cat", "concat", "dog", "locate", "scatter"]);
        let visible = filter_choices(&choices, "cat");

        let mut expected: Vec<String> = choices
            .iter()
            .filter(|c| c.to_lowercase().contains("cat"))
            .cloned()
            .collect();
        let mut got = visible.clone();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);

        assert_eq!(visible, list(&["cat", "concat", "locate", "scatter"]));
    }

    #[test]
    fn test_match_kind() {
        assert_eq!(match_kind("Firefox", "fire"), Some(MatchKind::Prefix));
        assert_eq!(match_kind("GFire", "fire"), Some(MatchKind::Interior));
        assert_eq!(match_kind("bash", "fire"), None);
        assert_eq!(match_kind("bash", ""), Some(MatchKind::Prefix));
    }
}
