//! Word suggestion review.
//!
//! This module reviews text against a synonym table and proposes alternative
//! wording for every word the table knows about. Suggestions can be accepted
//! interactively through a [`Prompt`].

pub mod builtin;
pub mod engine;
pub mod interactive;
pub mod suggestion;
pub mod table;

// Re-export commonly used types
pub use builtin::BuiltinTable;
pub use engine::{SharedSuggestionEngine, SuggestionEngine};
pub use interactive::{ConsolePrompt, Prompt, ScriptedPrompt, display_suggestions};
pub use suggestion::{SuggestionMap, WordSuggestion, clean_word};
pub use table::{SynonymEntry, SynonymTable};
