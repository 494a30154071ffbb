//! Substring search returning every match position.

/// Whether [`find_all`] distinguishes letter case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// `"A"` and `"a"` are different.
    #[default]
    Sensitive,
    /// ASCII letters compare equal regardless of case.
    Insensitive,
}

/// Byte offsets of every occurrence of `pattern` in `text`, in ascending
/// order.
///
/// Matches may overlap: after a hit at `i` the search resumes at `i + 1`,
/// so `"aa"` occurs in `"aaaa"` at 0, 1 and 2. An empty pattern matches
/// nowhere. With [`CaseSensitivity::Insensitive`] only ASCII letters are
/// folded, which keeps byte offsets valid in the original text.
pub fn find_all(text: &str, pattern: &str, case: CaseSensitivity) -> Vec<usize> {
    let needle = pattern.as_bytes();
    if needle.is_empty() || needle.len() > text.len() {
        return Vec::new();
    }
    let matches = |window: &[u8]| match case {
        CaseSensitivity::Sensitive => window == needle,
        CaseSensitivity::Insensitive => window.eq_ignore_ascii_case(needle),
    };
    text.as_bytes()
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| matches(window))
        .map(|(index, _)| index)
        .collect()
}
