//! Command implementations for the Wordsmith CLI.

use std::io::{self, BufRead, Read, Write};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WordsmithError};
use crate::review::{BuiltinTable, ConsolePrompt, SuggestionEngine, SynonymTable, display_suggestions};

/// Execute a CLI command against the process stdin and stdout.
pub fn execute_command(args: WordsmithArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn run_command(
    args: &WordsmithArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match &args.command {
        Command::Review(review_args) => review(review_args, args, input, out),
        Command::Interactive => interactive(args, input, out),
        Command::Validate => validate_table(args, out),
        Command::Export(export_args) => export_table(export_args, args, out),
    }
}

/// Load the table named on the command line, or the built-in one.
fn load_table(args: &WordsmithArgs) -> Result<SynonymTable> {
    match &args.table {
        Some(path) => {
            info!("Loading synonym table from {}", path.display());
            SynonymTable::load_from_file(path)
        }
        None => {
            debug!("Using built-in synonym table");
            BuiltinTable::try_english()
        }
    }
}

fn table_source(args: &WordsmithArgs) -> String {
    args.table
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}

/// Review text given as an argument or read from input.
fn review(
    review_args: &ReviewArgs,
    cli_args: &WordsmithArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let engine = SuggestionEngine::new(load_table(cli_args)?);

    let text = match &review_args.text {
        Some(text) => text.clone(),
        None => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            text
        }
    };

    let suggestions = engine.review_text(&text);
    info!("{} tokens with suggestions", suggestions.len());

    output_result(
        "Review complete",
        &ReviewResult { text, suggestions },
        cli_args,
        out,
    )
}

/// Read one line, prompt for every token with suggestions, print the result.
fn interactive(cli_args: &WordsmithArgs, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    let engine = SuggestionEngine::new(load_table(cli_args)?);

    write!(out, "Enter text to review: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WordsmithError::invalid_argument("no text to review"));
    }
    let original = line.trim_end_matches(['\r', '\n']).to_string();

    let suggestions = engine.review_text(&original);
    let revised = {
        let mut prompt = ConsolePrompt::new(&mut *input, &mut *out);
        display_suggestions(&original, &suggestions, &mut prompt)?
    };

    writeln!(out)?;
    output_result(
        "Review complete",
        &InteractiveResult { original, revised },
        cli_args,
        out,
    )
}

/// Validate the active table.
fn validate_table(cli_args: &WordsmithArgs, out: &mut dyn Write) -> Result<()> {
    let table = load_table(cli_args)?;
    // Tables are checked on load; this covers tables built by other means.
    table.validate()?;

    output_result(
        "Table is valid",
        &ValidationResult {
            source: table_source(cli_args),
            entries: table.len(),
            terms: table.term_count(),
        },
        cli_args,
        out,
    )
}

/// Write the active table to a JSON file.
fn export_table(export_args: &ExportArgs, cli_args: &WordsmithArgs, out: &mut dyn Write) -> Result<()> {
    if export_args.output_path.exists() && !export_args.force {
        return Err(WordsmithError::invalid_operation(format!(
            "{} already exists. Use --force to overwrite.",
            export_args.output_path.display()
        )));
    }

    let table = load_table(cli_args)?;
    table.save_to_file(&export_args.output_path)?;
    info!(
        "Exported {} entries to {}",
        table.len(),
        export_args.output_path.display()
    );

    output_result(
        "Export complete",
        &ExportResult {
            path: export_args.output_path.display().to_string(),
            entries: table.len(),
        },
        cli_args,
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> WordsmithArgs {
        let mut full = vec!["wordsmith"];
        full.extend_from_slice(argv);
        WordsmithArgs::try_parse_from(full).unwrap()
    }

    fn run(argv: &[&str], input: &str) -> Result<String> {
        let args = parse(argv);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        run_command(&args, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_review_text_argument() {
        let output = run(&["-f", "json", "review", "Please access the system."], "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value["suggestions"]["access"],
            serde_json::json!(["gain entry", "retrieve", "obtain", "reach", "approach"])
        );
    }

    #[test]
    fn test_review_reads_stdin() {
        let output = run(&["-f", "json", "review"], "we need help\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["text"], "we need help\n");
        assert!(value["suggestions"]["need"].is_array());
        assert!(value["suggestions"]["help"].is_array());
    }

    #[test]
    fn test_interactive_session() {
        let output = run(&["interactive"], "Please access the system.\n3\n").unwrap();

        assert!(output.starts_with("Enter text to review: Suggestions for 'access':"));
        assert!(output.contains("  3: obtain\n"));
        assert!(output.ends_with(
            "Original text: Please access the system.\nRevised text: Please obtain the system.\n"
        ));
    }

    #[test]
    fn test_interactive_without_input() {
        let err = run(&["interactive"], "").unwrap_err();
        assert!(matches!(err, WordsmithError::InvalidArgument(_)));
    }

    #[test]
    fn test_validate_builtin() {
        let output = run(&["validate"], "").unwrap();
        assert!(output.starts_with("Table: built-in\n"));
    }

    #[test]
    fn test_export_then_review_with_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("table.json");
        let path_str = path.to_str().unwrap();

        run(&["export", path_str], "").unwrap();
        assert!(path.exists());

        let err = run(&["export", path_str], "").unwrap_err();
        assert!(matches!(err, WordsmithError::InvalidOperation(_)));
        run(&["export", "--force", path_str], "").unwrap();

        let output = run(&["--table", path_str, "-f", "json", "review", "buy"], "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["suggestions"]["buy"][0], "purchase");
    }

    #[test]
    fn test_invalid_table_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"canonical": "a", "alternatives": ["b"]}, {"canonical": "c", "alternatives": ["b"]}]"#,
        )
        .unwrap();

        let err = run(&["--table", path.to_str().unwrap(), "validate"], "").unwrap_err();
        assert!(matches!(err, WordsmithError::Table(_)));
    }
}
