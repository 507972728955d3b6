//! Command dispatch for the `struct-tags` entrypoint.

use std::io::{self, BufRead, Read, Write};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result, bail};
use struct_tags::{StructTag, Tag, lookup, parse};
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::logging::init_logging;
use crate::output::{write_json, write_tag, write_tags};

/// Inspect `key:"value"` field annotations.
#[derive(Parser, Debug)]
#[command(name = "struct-tags", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Parse annotation strings into tags.
    Parse(ParseArgs),
    /// Look up one key in a raw field tag and parse its value.
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// Annotation strings. Read from stdin, one per line, when omitted.
    inputs: Vec<String>,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Annotation key to look up, e.g. `json`.
    #[arg(long, short)]
    key: String,
    /// Raw field tag. Read from stdin when omitted.
    input: Option<String>,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
}

/// Parse the command line, set up logging and run the selected command.
///
/// # Errors
///
/// Returns an error when configuration is invalid, input cannot be read,
/// output cannot be written, or a looked-up key is absent.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()?.apply_overrides(cli.log_level);
    init_logging(&config);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Parse(args) => handle_parse(&args),
        Commands::Lookup(args) => handle_lookup(&args),
    }
}

fn handle_parse(args: &ParseArgs) -> Result<()> {
    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        args.inputs.clone()
    };

    let tags: Vec<Tag> = inputs.iter().flat_map(|input| parse_input(input)).collect();
    info!(inputs = inputs.len(), tags = tags.len(), "parsed annotations");

    let mut stdout = io::stdout();
    if args.json {
        write_json(&mut stdout, &tags)?;
    } else {
        write_tags(&mut stdout, &tags)?;
    }
    stdout.flush().wrap_err("failed to flush tag listing to stdout")
}

fn parse_input(input: &str) -> Vec<Tag> {
    let Ok(tags) = parse(input);
    if tags.is_empty() {
        debug!(input, "no annotations found");
    }
    tags
}

fn handle_lookup(args: &LookupArgs) -> Result<()> {
    let raw = args.input.clone().map_or_else(read_stdin, Ok)?;
    let field = StructTag::new(raw.trim_end_matches(['\r', '\n']));

    let Some(tag) = lookup(&field, &args.key) else {
        if let Err(err) = field.entries() {
            bail!("no `{}` annotation: {err}", args.key);
        }
        bail!("no `{}` annotation in {:?}", args.key, field.as_str());
    };

    let mut stdout = io::stdout();
    if args.json {
        write_json(&mut stdout, &tag)?;
    } else {
        write_tag(&mut stdout, &tag)?;
    }
    stdout.flush().wrap_err("failed to flush tag to stdout")
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.wrap_err("failed to read annotations from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .wrap_err("failed to read field tag from stdin")?;
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lookup_arguments() -> eyre::Result<()> {
        let cli = Cli::try_parse_from([
            "struct-tags",
            "--log-level",
            "debug",
            "lookup",
            "-k",
            "json",
            r#"json:"id""#,
        ])?;
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        let Commands::Lookup(args) = cli.command else {
            bail!("expected lookup command");
        };
        assert_eq!(args.key, "json");
        assert_eq!(args.input.as_deref(), Some(r#"json:"id""#));
        assert!(!args.json);
        Ok(())
    }

    #[test]
    fn parse_accepts_many_inputs() -> eyre::Result<()> {
        let cli = Cli::try_parse_from(["struct-tags", "parse", "--json", "a:\"b\"", "c:\"d\""])?;
        let Commands::Parse(args) = cli.command else {
            bail!("expected parse command");
        };
        assert!(args.json);
        assert_eq!(args.inputs.len(), 2);
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["struct-tags", "--log-level", "loud", "parse"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_input_skips_text_without_annotations() {
        assert!(parse_input("nothing here").is_empty());
        assert_eq!(parse_input(r#"json:"id" xml:"id""#).len(), 2);
    }
}
