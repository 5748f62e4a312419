use std::fmt;

use serde::Serialize;

/// A trimmed, non-empty movie title as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` when the input trims to nothing; generation must never
    /// be triggered for an empty title.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-case form used only where the prompt instructs the display
    /// heading; the lookup clause always carries the title verbatim.
    pub fn title_cased(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absent means "no image found", never an error.
pub type PosterUrl = String;

/// Display-ready result handed to the rendering shell, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPayload {
    /// HTML fragment carrying the class hooks the shell's stylesheet targets.
    pub html: String,
    /// False when the generated text did not match the expected section
    /// layout; the shell should fall back to plain-text rendering.
    pub structured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = SearchQuery::new("  Parasite  ").unwrap();
        assert_eq!(query.as_str(), "Parasite");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(SearchQuery::new("").is_none());
        assert!(SearchQuery::new("   \t\n").is_none());
    }

    #[test]
    fn title_casing_normalizes_case_and_whitespace() {
        let query = SearchQuery::new("the  GODFATHER   part II").unwrap();
        assert_eq!(query.title_cased(), "The Godfather Part Ii");
    }

    #[test]
    fn title_casing_does_not_change_the_stored_query() {
        let query = SearchQuery::new("el laberinto del fauno").unwrap();
        let _ = query.title_cased();
        assert_eq!(query.as_str(), "el laberinto del fauno");
    }
}
