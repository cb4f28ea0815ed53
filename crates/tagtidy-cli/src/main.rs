use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tagtidy_format::{Indent, ValidationReport};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagtidy")]
#[command(about = "tagtidy: prettify, minify and check HTML markup")]
#[command(version)]
struct Cli {
    /// Log debug details to stderr (overrides TAGTIDY_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reformat markup with one tag per line
    Pretty {
        /// Input file; reads stdin when omitted or `-`
        path: Option<PathBuf>,

        /// Spaces per nesting level, or `tab`
        #[arg(short, long, default_value_t = Indent::default())]
        indent: Indent,

        /// Rewrite the input file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Strip comments and insignificant whitespace
    Minify {
        /// Input file; reads stdin when omitted or `-`
        path: Option<PathBuf>,

        /// Leave `<!-- ... -->` comments in place
        #[arg(long)]
        keep_comments: bool,

        /// Rewrite the input file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Report unbalanced or mismatched tags; exits with 1 when any are found
    Check {
        /// Input file; reads stdin when omitted or `-`
        path: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("reading stdin: {0}")]
    Stdin(io::Error),

    #[error("writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("--write needs an input file")]
    WriteWithoutPath,

    #[error("encoding report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Pretty {
            path,
            indent,
            write,
        } => cmd_pretty(input_path(&path), indent, write),
        Command::Minify {
            path,
            keep_comments,
            write,
        } => cmd_minify(input_path(&path), !keep_comments, write),
        Command::Check { path, json } => cmd_check(input_path(&path), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TAGTIDY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `-` means stdin, same as no path at all.
fn input_path(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != Path::new("-"))
}

fn label(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    let source = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CliError::NotFound(p.to_path_buf()));
            }
            std::fs::read_to_string(p).map_err(|source| CliError::Read {
                path: p.to_path_buf(),
                source,
            })?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    debug!(input = %label(path), bytes = source.len(), "read source");
    Ok(source)
}

/// Print `output`, or write it back over the input file when `write` is set.
fn emit(path: Option<&Path>, write: bool, output: &str) -> Result<(), CliError> {
    if !write {
        println!("{output}");
        return Ok(());
    }

    let path = path.ok_or(CliError::WriteWithoutPath)?;
    std::fs::write(path, format!("{output}\n")).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}

fn cmd_pretty(path: Option<&Path>, indent: Indent, write: bool) -> Result<ExitCode, CliError> {
    if write && path.is_none() {
        return Err(CliError::WriteWithoutPath);
    }
    let source = read_source(path)?;
    let output = tagtidy_format::prettify_with(&source, indent);
    emit(path, write, &output)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_minify(
    path: Option<&Path>,
    remove_comments: bool,
    write: bool,
) -> Result<ExitCode, CliError> {
    if write && path.is_none() {
        return Err(CliError::WriteWithoutPath);
    }
    let source = read_source(path)?;
    let output = tagtidy_format::minify(&source, remove_comments);
    emit(path, write, &output)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(path: Option<&Path>, json: bool) -> Result<ExitCode, CliError> {
    let source = read_source(path)?;
    let report = tagtidy_format::validate(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        eprintln!("OK: {}", label(path));
    } else {
        for line in diagnostics(&label(path), &report) {
            println!("{line}");
        }
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// One `file:line:column: message` line per validation error.
fn diagnostics(label: &str, report: &ValidationReport) -> Vec<String> {
    report
        .errors
        .iter()
        .map(|e| {
            let span = e.span();
            format!("{label}:{}:{}: {e}", span.line, span.column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pretty_defaults() {
        let cli = Cli::try_parse_from(["tagtidy", "pretty", "page.html"]).unwrap();
        match cli.command {
            Command::Pretty {
                path,
                indent,
                write,
            } => {
                assert_eq!(path, Some(PathBuf::from("page.html")));
                assert_eq!(indent, Indent::Spaces(2));
                assert!(!write);
            }
            _ => panic!("expected pretty"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_indent_tab() {
        let cli = Cli::try_parse_from(["tagtidy", "pretty", "--indent", "tab", "-v"]).unwrap();
        match cli.command {
            Command::Pretty { path, indent, .. } => {
                assert_eq!(path, None);
                assert_eq!(indent, Indent::Tab);
            }
            _ => panic!("expected pretty"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_bad_indent() {
        assert!(Cli::try_parse_from(["tagtidy", "pretty", "--indent", "huge"]).is_err());
        assert!(Cli::try_parse_from(["tagtidy", "pretty", "--indent", "99"]).is_err());
    }

    #[test]
    fn test_parse_minify_and_check() {
        let cli = Cli::try_parse_from(["tagtidy", "minify", "--keep-comments", "-"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Minify {
                keep_comments: true,
                write: false,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["tagtidy", "check", "--json", "a.html"]).unwrap();
        assert!(matches!(cli.command, Command::Check { json: true, .. }));
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(input_path(&Some(PathBuf::from("-"))), None);
        assert_eq!(input_path(&None), None);
        assert_eq!(
            input_path(&Some(PathBuf::from("a.html"))),
            Some(Path::new("a.html"))
        );
        assert_eq!(label(None), "<stdin>");
    }

    #[test]
    fn test_diagnostics_format() {
        let report = tagtidy_format::validate("<ul>\n  <li>\n</ul>");
        assert_eq!(
            diagnostics("page.html", &report),
            vec![
                "page.html:3:1: Mismatched tags: expected </li> but found </ul>",
                "page.html:1:1: Unclosed tag: <ul>",
            ]
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_source(Some(Path::new("/definitely/not/here.html"))).unwrap_err();
        assert_eq!(err.to_string(), "file not found: /definitely/not/here.html");
    }

    #[test]
    fn test_write_needs_path() {
        let err = cmd_minify(None, true, true).unwrap_err();
        assert!(matches!(err, CliError::WriteWithoutPath));
    }

    #[test]
    fn test_pretty_write_round_trip() {
        let dir = std::env::temp_dir().join(format!("tagtidy-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("page.html");
        std::fs::write(&file, "<div><p>x</p></div>").unwrap();

        cmd_pretty(Some(&file), Indent::Spaces(4), true).unwrap();
        let written = std::fs::read_to_string(&file).unwrap();
        assert_eq!(written, "<div>\n    <p>x</p>\n</div>\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
