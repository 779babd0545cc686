//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordsmithArgs};
use crate::error::Result;
use crate::review::SuggestionMap;

/// Result structure for text review.
#[derive(Debug, Serialize)]
pub struct ReviewResult {
    pub text: String,
    pub suggestions: SuggestionMap,
}

/// Result structure for an interactive session.
#[derive(Debug, Serialize)]
pub struct InteractiveResult {
    pub original: String,
    pub revised: String,
}

/// Result structure for table validation.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub source: String,
    pub entries: usize,
    pub terms: usize,
}

/// Result structure for table export.
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub path: String,
    pub entries: usize,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for ReviewResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if self.suggestions.is_empty() {
            writeln!(out, "No suggestions.")?;
            return Ok(());
        }

        writeln!(out, "Suggestions:")?;
        writeln!(out, "────────────")?;
        let width = self
            .suggestions
            .tokens()
            .map(|token| token.chars().count())
            .max()
            .unwrap_or(0);

        for suggestion in &self.suggestions {
            writeln!(
                out,
                "{:<width$}  ->  {}",
                suggestion.token,
                suggestion.alternatives.join(", ")
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for InteractiveResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Original text: {}", self.original)?;
        writeln!(out, "Revised text: {}", self.revised)?;
        Ok(())
    }
}

impl HumanOutput for ValidationResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Table: {}", self.source)?;
        writeln!(out, "Entries: {}", self.entries)?;
        writeln!(out, "Terms: {}", self.terms)?;
        Ok(())
    }
}

impl HumanOutput for ExportResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Wrote {} entries to {}", self.entries, self.path)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &WordsmithArgs,
    out: &mut dyn Write,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args, out),
        OutputFormat::Json => output_json(result, args, out),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(
    message: &str,
    result: &T,
    args: &WordsmithArgs,
    out: &mut dyn Write,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out)
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordsmithArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
