//! Synonym table mapping canonical terms to their alternatives.
//!
//! The table is an ordered list of entries. Order matters: when a term appears
//! under more than one entry, the entry that comes first wins during review.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsmithError};

/// A canonical term together with its ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// The preferred word, used as the table key.
    pub canonical: String,
    /// Alternatives offered for the canonical term, in preference order.
    pub alternatives: Vec<String>,
}

impl SynonymEntry {
    /// Create a new entry.
    pub fn new<S: Into<String>>(canonical: S, alternatives: Vec<String>) -> Self {
        SynonymEntry {
            canonical: canonical.into(),
            alternatives,
        }
    }

    /// Iterate over the canonical term followed by every alternative.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}

/// Ordered synonym table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// Build a table from entries, rejecting tables that break the invariants.
    pub fn new(entries: Vec<SynonymEntry>) -> Result<Self> {
        let table = SynonymTable { entries };
        table.validate()?;
        debug!("Built synonym table with {} entries", table.len());
        Ok(table)
    }

    /// Build a table without validation.
    pub fn from_entries_unchecked(entries: Vec<SynonymEntry>) -> Self {
        SynonymTable { entries }
    }

    /// Build a table from string literals, as used for built-in tables.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Result<Self> {
        let entries = pairs
            .iter()
            .map(|(canonical, alternatives)| {
                SynonymEntry::new(
                    *canonical,
                    alternatives.iter().map(|alt| alt.to_string()).collect(),
                )
            })
            .collect();
        Self::new(entries)
    }

    /// Check the table invariants.
    ///
    /// Every alternative list must be non-empty, no term may be empty, and
    /// every term (canonical or alternative) must appear exactly once across
    /// the whole table.
    pub fn validate(&self) -> Result<()> {
        let mut seen: AHashMap<&str, &str> = AHashMap::new();

        for entry in &self.entries {
            if entry.canonical.is_empty() {
                return Err(WordsmithError::table("canonical term must not be empty"));
            }
            if entry.alternatives.is_empty() {
                return Err(WordsmithError::table(format!(
                    "'{}' has no alternatives",
                    entry.canonical
                )));
            }

            for term in entry.terms() {
                if term.is_empty() {
                    return Err(WordsmithError::table(format!(
                        "'{}' lists an empty alternative",
                        entry.canonical
                    )));
                }
                if let Some(owner) = seen.insert(term, &entry.canonical) {
                    return Err(WordsmithError::table(format!(
                        "term '{}' appears under both '{}' and '{}'",
                        term, owner, entry.canonical
                    )));
                }
            }
        }

        Ok(())
    }

    /// Insert a new entry at the end, or overwrite an existing entry in place.
    ///
    /// Returns the previous alternatives when an entry was overwritten.
    pub fn insert<S: Into<String>>(
        &mut self,
        canonical: S,
        alternatives: Vec<String>,
    ) -> Option<Vec<String>> {
        let canonical = canonical.into();

        match self.position(&canonical) {
            Some(index) => {
                warn!("Overwriting synonym entry '{canonical}'");
                Some(std::mem::replace(
                    &mut self.entries[index].alternatives,
                    alternatives,
                ))
            }
            None => {
                self.entries.push(SynonymEntry::new(canonical, alternatives));
                None
            }
        }
    }

    /// Position of the entry with the given canonical term.
    pub fn position(&self, canonical: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.canonical == canonical)
    }

    /// Get the alternatives for a canonical term.
    pub fn get(&self, canonical: &str) -> Option<&[String]> {
        self.position(canonical)
            .map(|index| self.entries[index].alternatives.as_slice())
    }

    /// Get an entry by position.
    pub fn entry(&self, index: usize) -> Option<&SynonymEntry> {
        self.entries.get(index)
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    /// Iterate over entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, SynonymEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct terms across all entries.
    pub fn term_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(SynonymEntry::terms)
            .collect::<AHashSet<_>>()
            .len()
    }

    /// Load and validate a table from a JSON file.
    ///
    /// The file holds an array of entries; array order is table order:
    /// ```json
    /// [
    ///   { "canonical": "use", "alternatives": ["utilize", "employ"] },
    ///   { "canonical": "help", "alternatives": ["assist", "aid"] }
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            WordsmithError::table(format!(
                "Failed to read synonym table '{}': {}",
                path.display(),
                e
            ))
        })?;

        let entries: Vec<SynonymEntry> = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} synonym entries from {}",
            entries.len(),
            path.display()
        );
        Self::new(entries)
    }

    /// Save the table as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SynonymTable {
    type Item = &'a SynonymEntry;
    type IntoIter = std::slice::Iter<'a, SynonymEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
