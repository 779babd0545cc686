//! Review output types and token cleaning.

use std::sync::LazyLock;

use ahash::AHashMap;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

static EDGE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\W+|\W+$").expect("valid edge pattern"));

/// Strip leading and trailing non-word characters and lower-case the rest.
///
/// Interior punctuation is kept: `"don't,"` becomes `"don't"`.
pub fn clean_word(token: &str) -> String {
    EDGE_NON_WORD.replace_all(token, "").to_lowercase()
}

/// Suggestions recorded for one surface token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSuggestion {
    /// The token exactly as it appeared in the text.
    pub token: String,
    /// Replacement candidates, best first.
    pub alternatives: Vec<String>,
}

/// Mapping from surface tokens to suggested replacements.
///
/// Keys keep the order in which tokens first appeared in the reviewed text.
#[derive(Debug, Clone, Default)]
pub struct SuggestionMap {
    suggestions: Vec<WordSuggestion>,
    index: AHashMap<String, usize>,
}

impl PartialEq for SuggestionMap {
    fn eq(&self, other: &Self) -> bool {
        self.suggestions == other.suggestions
    }
}

impl Eq for SuggestionMap {}

impl SuggestionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record suggestions for a token. A token seen before keeps its position.
    pub fn insert(&mut self, token: String, alternatives: Vec<String>) {
        match self.index.get(&token) {
            Some(&position) => self.suggestions[position].alternatives = alternatives,
            None => {
                self.index.insert(token.clone(), self.suggestions.len());
                self.suggestions.push(WordSuggestion {
                    token,
                    alternatives,
                });
            }
        }
    }

    /// Suggestions for a surface token.
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.index
            .get(token)
            .map(|&position| self.suggestions[position].alternatives.as_slice())
    }

    /// Whether the token has suggestions.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of distinct tokens with suggestions.
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Whether no token received suggestions.
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Iterate in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, WordSuggestion> {
        self.suggestions.iter()
    }

    /// Surface tokens in first-appearance order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.suggestions.iter().map(|s| s.token.as_str())
    }
}

impl<'a> IntoIterator for &'a SuggestionMap {
    type Item = &'a WordSuggestion;
    type IntoIter = std::slice::Iter<'a, WordSuggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}

impl Serialize for SuggestionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.suggestions.len()))?;
        for suggestion in &self.suggestions {
            map.serialize_entry(&suggestion.token, &suggestion.alternatives)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_word() {
        assert_eq!(clean_word("access"), "access");
        assert_eq!(clean_word("Access."), "access");
        assert_eq!(clean_word("\"(Use)\","), "use");
        assert_eq!(clean_word("don't,"), "don't");
        assert_eq!(clean_word("e-mail!"), "e-mail");
        assert_eq!(clean_word("snake_case"), "snake_case");
        assert_eq!(clean_word("..."), "");
        assert_eq!(clean_word(""), "");
    }

    #[test]
    fn test_clean_word_unicode() {
        assert_eq!(clean_word("«Café»"), "café");
        assert_eq!(clean_word("ÜBER!"), "über");
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = SuggestionMap::new();
        map.insert("use".to_string(), vec!["employ".to_string()]);
        map.insert("help".to_string(), vec!["aid".to_string()]);
        map.insert("use".to_string(), vec!["apply".to_string()]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.tokens().collect::<Vec<_>>(), vec!["use", "help"]);
        assert_eq!(map.get("use").unwrap(), ["apply"]);
        assert!(map.contains("help"));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let mut map = SuggestionMap::new();
        map.insert("zeta".to_string(), vec!["z".to_string()]);
        map.insert("alpha".to_string(), vec!["a".to_string(), "b".to_string()]);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":["z"],"alpha":["a","b"]}"#);
    }

    #[test]
    fn test_empty_map() {
        let map = SuggestionMap::new();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }
}
