//! # Wordsmith
//!
//! A word suggestion reviewer: given a block of text, propose alternative
//! wording for every word found in a synonym table.
//!
//! ## Features
//!
//! - Ordered synonym tables with invariant checking
//! - Deterministic first-match-wins lookups
//! - Parallel batch review
//! - Interactive acceptance of suggestions

pub mod cli;
pub mod error;
pub mod review;

pub mod prelude {
    pub use crate::error::{Result, WordsmithError};
    pub use crate::review::{
        BuiltinTable, Prompt, SuggestionEngine, SuggestionMap, SynonymEntry, SynonymTable,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
