//! Built-in synonym table.

use crate::error::Result;
use crate::review::table::SynonymTable;

const ENGLISH: &[(&str, &[&str])] = &[
    ("access", &["gain entry", "retrieve", "obtain", "reach", "approach"]),
    ("use", &["utilize", "employ", "apply", "leverage"]),
    ("help", &["assist", "aid", "support", "facilitate"]),
    ("start", &["begin", "commence", "initiate", "launch"]),
    ("end", &["finish", "conclude", "terminate", "complete"]),
    ("show", &["demonstrate", "display", "exhibit", "reveal"]),
    ("buy", &["purchase", "acquire", "procure"]),
    ("need", &["require", "necessitate"]),
    ("try", &["attempt", "endeavor", "strive"]),
    ("enough", &["sufficient", "adequate", "ample"]),
    ("about", &["approximately", "roughly", "around"]),
    ("change", &["modify", "alter", "adjust", "transform"]),
    ("build", &["construct", "assemble", "fabricate"]),
    ("find", &["locate", "discover", "identify", "detect"]),
    ("tell", &["inform", "notify", "advise"]),
    ("send", &["transmit", "dispatch", "forward"]),
    ("many", &["numerous", "multiple", "various"]),
    ("important", &["crucial", "essential", "vital", "significant"]),
    ("improve", &["enhance", "upgrade", "refine", "optimize"]),
    ("ask", &["inquire", "request", "query"]),
    ("give", &["provide", "supply", "furnish"]),
    ("keep", &["retain", "maintain", "preserve"]),
];

/// Built-in synonym tables.
pub struct BuiltinTable;

impl BuiltinTable {
    /// Plain-English table: each canonical term is the plain word, its
    /// alternatives are the more formal or more specific variants.
    pub fn english() -> SynonymTable {
        // The literal above is covered by the invariant tests below.
        SynonymTable::from_pairs(ENGLISH).unwrap_or_default()
    }

    /// Build the built-in table, reporting invariant violations.
    pub fn try_english() -> Result<SynonymTable> {
        SynonymTable::from_pairs(ENGLISH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = BuiltinTable::try_english().unwrap();
        assert_eq!(table.len(), ENGLISH.len());
        assert_eq!(BuiltinTable::english(), table);
    }

    #[test]
    fn test_every_term_appears_once() {
        let table = BuiltinTable::english();
        let all_terms: Vec<&str> = table.iter().flat_map(|entry| entry.terms()).collect();
        let unique: HashSet<&str> = all_terms.iter().copied().collect();

        assert_eq!(
            all_terms.len(),
            unique.len(),
            "every word must appear exactly once in the table"
        );
    }

    #[test]
    fn test_alternatives_are_non_empty() {
        for entry in &BuiltinTable::english() {
            assert!(
                !entry.alternatives.is_empty(),
                "'{}' has no alternatives",
                entry.canonical
            );
        }
    }

    #[test]
    fn test_canonical_terms_are_lowercase() {
        // Matching lower-cases the token, so an upper-case key could never match.
        for entry in &BuiltinTable::english() {
            assert_eq!(entry.canonical, entry.canonical.to_lowercase());
        }
    }

    #[test]
    fn test_access_entry() {
        let table = BuiltinTable::english();
        assert_eq!(
            table.get("access").unwrap(),
            ["gain entry", "retrieve", "obtain", "reach", "approach"]
        );
    }
}
