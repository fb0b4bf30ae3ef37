use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use filescout::{RegexOptions, Workspace, WorkspaceConfig};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Glob-matched text search and replace across files", long_about = None)]
struct Cli {
    /// Root directory that relative paths and glob patterns resolve against
    #[arg(short = 'd', long, default_value = ".", global = true)]
    root: PathBuf,

    /// Path to a config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of threads for the scan fan-out
    #[arg(short = 'j', long, global = true)]
    threads: Option<NonZeroUsize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PatternOptions {
    /// Treat the pattern as a regular expression
    #[arg(short, long)]
    regex: bool,

    /// Case-insensitive matching (regex only)
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// `^` and `$` match at line boundaries (regex only)
    #[arg(short = 'm', long)]
    multiline: bool,

    /// `.` also matches newlines (regex only)
    #[arg(long)]
    dot_all: bool,
}

impl PatternOptions {
    fn to_regex_options(&self) -> RegexOptions {
        RegexOptions {
            case_insensitive: self.ignore_case,
            multi_line: self.multiline,
            dot_matches_new_line: self.dot_all,
            ignore_whitespace: false,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the files matched by a glob whose content contains a pattern
    Find {
        /// Glob pattern selecting the files to scan
        glob: String,

        /// Text or regular expression to search for
        pattern: String,

        #[command(flatten)]
        options: PatternOptions,

        /// Print the matched files as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Replace a pattern in every file matched by a glob
    Replace {
        /// Glob pattern selecting the files to rewrite
        glob: String,

        /// Text or regular expression to find
        pattern: String,

        /// Replacement text ($1-style group references in regex mode)
        replacement: String,

        #[command(flatten)]
        options: PatternOptions,

        /// Print the rewritten files as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print a file's contents
    Read {
        /// File to read, relative to the root
        file: PathBuf,
    },

    /// Overwrite a file with the given text
    Write {
        /// File to write, relative to the root
        file: PathBuf,

        /// Text to write
        text: String,

        /// Split the text on embedded newlines and write newline-terminated lines
        #[arg(long)]
        lines: bool,
    },

    /// Append text to a file, creating it if it does not exist
    Append {
        /// File to append to, relative to the root
        file: PathBuf,

        /// Text to append
        text: String,

        /// Split the text on embedded newlines and append newline-terminated lines
        #[arg(long)]
        lines: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config.as_deref() {
        Some(path) => WorkspaceConfig::load_from(Some(path))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WorkspaceConfig::load().unwrap_or_default(),
    };

    let defaults = WorkspaceConfig::default();
    let cli_overrides = WorkspaceConfig {
        root_path: cli.root.clone(),
        thread_count: cli.threads.unwrap_or(defaults.thread_count),
        log_level: cli.log_level.clone().unwrap_or(defaults.log_level),
    };
    let config = file_config.merge_with_cli(cli_overrides);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!("Using root directory: {}", config.root_path.display());

    let workspace = Workspace::with_config(config);

    match cli.command {
        Commands::Find {
            glob,
            pattern,
            options,
            json,
        } => {
            let files = if options.regex {
                workspace.find_regex_in_files(&glob, &pattern, options.to_regex_options())?
            } else {
                workspace.find_text_in_files(&glob, &pattern)?
            };
            print_file_list(&files, json, "matched")?;
        }

        Commands::Replace {
            glob,
            pattern,
            replacement,
            options,
            json,
        } => {
            let files = if options.regex {
                workspace.replace_regex_in_files(
                    &glob,
                    &pattern,
                    &replacement,
                    options.to_regex_options(),
                )?
            } else {
                workspace.replace_text_in_files(&glob, &pattern, &replacement)?
            };
            print_file_list(&files, json, "rewritten")?;
        }

        Commands::Read { file } => {
            print!("{}", workspace.read_text(&file)?);
        }

        Commands::Write { file, text, lines } => {
            if lines {
                workspace.write_lines(&file, &text.split('\n').collect::<Vec<_>>())?;
            } else {
                workspace.write_text(&file, &text)?;
            }
        }

        Commands::Append { file, text, lines } => {
            if lines {
                workspace.append_lines(&file, &text.split('\n').collect::<Vec<_>>())?;
            } else {
                workspace.append_text(&file, &text)?;
            }
        }
    }

    Ok(())
}

fn print_file_list(files: &[PathBuf], json: bool, verb: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(files)?);
        return Ok(());
    }

    for file in files {
        println!("{}", file.display().to_string().green());
    }
    println!("{}", format!("{} file(s) {}", files.len(), verb).bold());
    Ok(())
}
