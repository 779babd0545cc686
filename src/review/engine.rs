//! Word suggestion engine.
//!
//! The engine owns a [`SynonymTable`] and reviews text token by token. For
//! every token whose cleaned form is a canonical term or one of its
//! alternatives, it proposes replacements:
//!
//! - a canonical term is offered its alternatives;
//! - an alternative is offered its canonical term first, then the remaining
//!   alternatives of the same entry.
//!
//! When a term appears under several entries (only possible through
//! [`SuggestionEngine::add_replacement`]), the entry that comes first in the
//! table wins.
//!
//! # Examples
//!
//! ```
//! use wordsmith::review::{BuiltinTable, SuggestionEngine};
//!
//! let engine = SuggestionEngine::new(BuiltinTable::english());
//! let suggestions = engine.review_text("Please access the system.");
//!
//! assert_eq!(
//!     suggestions.get("access").unwrap(),
//!     ["gain entry", "retrieve", "obtain", "reach", "approach"]
//! );
//! assert!(suggestions.get("system.").is_none());
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::review::builtin::BuiltinTable;
use crate::review::suggestion::{SuggestionMap, clean_word};
use crate::review::table::SynonymTable;

/// Reviews text against a synonym table.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    table: SynonymTable,
    /// Term -> position of the first entry whose canonical term or
    /// alternatives contain it.
    term_index: AHashMap<String, usize>,
}

impl SuggestionEngine {
    /// Create an engine over the given table.
    pub fn new(table: SynonymTable) -> Self {
        let term_index = build_term_index(&table);
        SuggestionEngine { table, term_index }
    }

    /// The table the engine reviews against.
    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Consume the engine and return its table.
    pub fn into_table(self) -> SynonymTable {
        self.table
    }

    /// Suggest replacements for a single cleaned word.
    pub fn suggest(&self, clean: &str) -> Option<Vec<String>> {
        let position = *self.term_index.get(clean)?;
        let entry = self.table.entry(position)?;

        let remaining = entry
            .alternatives
            .iter()
            .filter(|alternative| alternative.as_str() != clean)
            .cloned();

        if entry.canonical == clean {
            Some(remaining.collect())
        } else {
            Some(
                std::iter::once(entry.canonical.clone())
                    .chain(remaining)
                    .collect(),
            )
        }
    }

    /// Review text and collect suggestions keyed by surface token.
    pub fn review_text(&self, text: &str) -> SuggestionMap {
        let mut suggestions = SuggestionMap::new();

        for token in text.split_whitespace() {
            if let Some(alternatives) = self.suggest(&clean_word(token)) {
                suggestions.insert(token.to_string(), alternatives);
            }
        }

        debug!(
            "Reviewed {} bytes, {} tokens with suggestions",
            text.len(),
            suggestions.len()
        );
        suggestions
    }

    /// Review many texts in parallel. Results are in input order.
    pub fn review_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<SuggestionMap> {
        texts
            .par_iter()
            .map(|text| self.review_text(text.as_ref()))
            .collect()
    }

    /// Insert or overwrite the entry for `word`.
    ///
    /// No invariant checking happens here. A term added under a second entry
    /// stays shadowed by the entry that comes first in the table.
    pub fn add_replacement<S: Into<String>>(&mut self, word: S, alternatives: Vec<String>) {
        self.table.insert(word, alternatives);
        self.term_index = build_term_index(&self.table);
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(BuiltinTable::english())
    }
}

fn build_term_index(table: &SynonymTable) -> AHashMap<String, usize> {
    let mut index = AHashMap::new();

    for (position, entry) in table.iter().enumerate() {
        for term in entry.terms() {
            index.entry(term.to_string()).or_insert(position);
        }
    }

    debug!(
        "Indexed {} terms from {} synonym entries",
        index.len(),
        table.len()
    );
    index
}

/// Thread-safe handle to a [`SuggestionEngine`].
///
/// Reviews take a read lock and may run concurrently; replacements take the
/// write lock.
#[derive(Debug, Clone)]
pub struct SharedSuggestionEngine {
    inner: Arc<RwLock<SuggestionEngine>>,
}

impl SharedSuggestionEngine {
    /// Wrap an engine.
    pub fn new(engine: SuggestionEngine) -> Self {
        SharedSuggestionEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Review text under a read lock.
    pub fn review_text(&self, text: &str) -> SuggestionMap {
        self.inner.read().review_text(text)
    }

    /// Insert or overwrite an entry under the write lock.
    pub fn add_replacement<S: Into<String>>(&self, word: S, alternatives: Vec<String>) {
        self.inner.write().add_replacement(word, alternatives);
    }

    /// Snapshot of the current table.
    pub fn table(&self) -> SynonymTable {
        self.inner.read().table().clone()
    }
}

impl From<SuggestionEngine> for SharedSuggestionEngine {
    fn from(engine: SuggestionEngine) -> Self {
        Self::new(engine)
    }
}
