use std::collections::HashSet;

/// Splits the raw tag string typed by an author into tag names.
pub trait TagParser: Send + Sync {
    fn parse(&self, raw: &str) -> Vec<String>;
}

/// Splits on a fixed set of delimiter characters.
///
/// Names are trimmed, blanks dropped, and repeats removed case-insensitively
/// (the first spelling wins). Order of first appearance is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTagParser {
    delimiters: Vec<char>,
}

impl DelimitedTagParser {
    pub fn new(delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }
}

impl Default for DelimitedTagParser {
    fn default() -> Self {
        Self::new([','])
    }
}

impl TagParser for DelimitedTagParser {
    fn parse(&self, raw: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        raw.split(|c| self.delimiters.contains(&c))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter(|name| seen.insert(name.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}
