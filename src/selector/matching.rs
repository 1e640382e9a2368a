//! Case-insensitive literal text matching used for filtering and marking
//! option labels.
//!
//! Search text comes straight from the user, so it is only ever compared
//! character by character. Nothing here compiles it into a pattern.

/// Piece of an option label, marked when it matches the search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegment {
    pub text: String,
    pub marked: bool,
}

impl LabelSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: true,
        }
    }
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns the byte length of the prefix of `rest` that matches `needle`
/// case-insensitively, if the whole needle matches on a char boundary.
fn match_len_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut expected = needle.iter();
    let mut remaining = needle.len();
    let mut consumed = 0;

    for ch in rest.chars() {
        if remaining == 0 {
            break;
        }
        for lower in ch.to_lowercase() {
            match expected.next() {
                Some(want) if *want == lower => remaining -= 1,
                _ => return None,
            }
        }
        consumed += ch.len_utf8();
    }

    (remaining == 0).then_some(consumed)
}

fn find_from(haystack: &str, needle: &[char], mut pos: usize) -> Option<(usize, usize)> {
    while pos < haystack.len() {
        if let Some(len) = match_len_at(&haystack[pos..], needle) {
            return Some((pos, len));
        }
        pos += haystack[pos..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Substring test ignoring case. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle);
    needle.is_empty() || find_from(haystack, &needle, 0).is_some()
}

/// Full-string equality ignoring case.
pub fn equals_ignore_case(left: &str, right: &str) -> bool {
    fold(left) == fold(right)
}

/// Splits `label` into plain and marked segments around every
/// non-overlapping occurrence of the trimmed `query`.
pub fn highlight_segments(label: &str, query: &str) -> Vec<LabelSegment> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return vec![LabelSegment::plain(label)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while let Some((start, len)) = find_from(label, &needle, pos) {
        if plain_start < start {
            segments.push(LabelSegment::plain(&label[plain_start..start]));
        }
        segments.push(LabelSegment::marked(&label[start..start + len]));
        pos = start + len;
        plain_start = pos;
    }
    if plain_start < label.len() || segments.is_empty() {
        segments.push(LabelSegment::plain(&label[plain_start..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(segments: &[LabelSegment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|segment| segment.marked)
            .map(|segment| segment.text.as_str())
            .collect()
    }

    #[test]
    fn contains_is_substring_not_prefix() {
        assert!(contains_ignore_case("Groceries", "CER"));
        assert!(contains_ignore_case("Groceries", ""));
        assert!(!contains_ignore_case("Groceries", "rent"));
    }

    #[test]
    fn pattern_characters_are_literal() {
        assert!(contains_ignore_case("a.b plan", "a.b"));
        assert!(!contains_ignore_case("axb plan", "a.b"));
        assert!(contains_ignore_case("Fees (bank)", "(bank"));
        assert!(!contains_ignore_case("Rent", ".*"));
    }

    #[test]
    fn marks_every_occurrence_preserving_original_case() {
        let segments = highlight_segments("Banana bar", "BA");
        assert_eq!(marked(&segments), vec!["Ba", "ba"]);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, "Banana bar");
    }

    #[test]
    fn blank_query_leaves_label_unmarked() {
        assert_eq!(
            highlight_segments("Food", "   "),
            vec![LabelSegment::plain("Food")]
        );
    }

    #[test]
    fn query_is_trimmed_before_marking() {
        assert_eq!(marked(&highlight_segments("Food", " oo ")), vec!["oo"]);
    }

    #[test]
    fn non_ascii_labels_split_on_char_boundaries() {
        let segments = highlight_segments("Café Crème", "É");
        assert_eq!(marked(&segments), vec!["é"]);
        assert!(equals_ignore_case("CAFÉ", "café"));
    }

    #[test]
    fn unmatched_query_yields_single_plain_segment() {
        assert_eq!(
            highlight_segments("Rent", "xyz"),
            vec![LabelSegment::plain("Rent")]
        );
    }
}
