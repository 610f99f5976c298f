//! Command-line client for Mark notes. `show` prints the original text, AST
//! and HTML of a note; flags turn each part off.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use mark::io;
use mark_config::Config;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mark")]
#[command(author, version)]
#[command(about = "Parse, render and format Mark notes")]
#[command(after_help = "\
EXAMPLES:

    # Show the text, AST and HTML of a note
    mark show notes/todo.mark

    # Only the HTML, resolving the note inside the notes directory
    mark show --skip-original --skip-ast todo.mark

    # Rewrite a note in canonical form
    mark fmt --write todo.mark

CONFIGURATION:

The notes directory comes from --notes, else MARK_NOTES_PATH, else
notes_path in ~/.config/mark/config.toml.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes directory used to resolve note names
    #[arg(long, global = true, value_name = "DIR")]
    pub notes: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the original text, AST and HTML of a note
    Show {
        /// Note to read, as a path or a name inside the notes directory
        input: PathBuf,

        /// Skip printing original text
        #[arg(short = 'o', long)]
        skip_original: bool,

        /// Skip printing AST
        #[arg(short = 'a', long)]
        skip_ast: bool,

        /// Skip printing HTML
        #[arg(short = 's', long)]
        skip_html: bool,

        /// How to print the AST
        #[arg(long, value_enum, default_value_t = AstFormat::Debug)]
        ast_format: AstFormat,
    },
    /// Print a note in canonical Mark form
    Fmt {
        input: PathBuf,

        /// Rewrite the note in place
        #[arg(long, conflicts_with = "check")]
        write: bool,

        /// Fail if the note is not already in canonical form
        #[arg(long)]
        check: bool,
    },
    /// List the notes in the notes directory
    List {
        /// Overrides --notes and the configured directory
        notes_dir: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AstFormat {
    Debug,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Show {
            input,
            skip_original,
            skip_ast,
            skip_html,
            ast_format,
        } => {
            let path = resolve_input(cli, input)?;
            let contents = read(&path)?;
            let doc = mark::parse(&contents);

            if !skip_original {
                writeln!(out, "{contents}\n")?;
            }
            if !skip_ast {
                match ast_format {
                    AstFormat::Debug => writeln!(out, "{doc:#?}\n")?,
                    AstFormat::Json => writeln!(out, "{}\n", serde_json::to_string_pretty(&doc)?)?,
                }
            }
            if !skip_html {
                writeln!(out, "{}\n", mark::render(&doc))?;
            }
        }
        Commands::Fmt {
            input,
            write,
            check,
        } => {
            let path = resolve_input(cli, input)?;
            let contents = read(&path)?;
            let doc = mark::parse(&contents);
            let formatted = mark::render_mark(&doc);
            if mark::parse(&formatted) != doc {
                bail!(
                    "Formatting {} would change its structure; leaving it untouched",
                    path.display()
                );
            }

            if *check {
                if formatted != contents {
                    bail!("{} is not formatted", path.display());
                }
                info!("{} is formatted", path.display());
            } else if *write {
                if formatted != contents {
                    fs::write(&path, &formatted)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("formatted {}", path.display());
                }
            } else {
                write!(out, "{formatted}")?;
            }
        }
        Commands::List { notes_dir } => {
            let root = match notes_dir {
                Some(dir) => dir.clone(),
                None => notes_dir_for(cli)?
                    .context("No notes directory given and none configured")?,
            };
            let notes = io::scan_notes(&root)
                .with_context(|| format!("Failed to list notes in {}", root.display()))?;
            for note in notes {
                writeln!(out, "{note}")?;
            }
        }
    }
    Ok(())
}

/// The notes directory from `--notes`, the environment or the config file.
fn notes_dir_for(cli: &Cli) -> Result<Option<PathBuf>> {
    if let Some(dir) = &cli.notes {
        return Ok(Some(dir.clone()));
    }
    let config = Config::load_with_env().with_context(|| {
        format!(
            "Failed to load config file at {}",
            Config::config_path().display()
        )
    })?;
    Ok(config.map(|c| c.notes_path))
}

fn resolve_input(cli: &Cli, input: &Path) -> Result<PathBuf> {
    // A readable path needs no config lookup.
    if input.is_file() {
        return Ok(input.to_path_buf());
    }
    let notes_dir = notes_dir_for(cli)?;
    debug!("resolving {} against {:?}", input.display(), notes_dir);
    io::resolve_note(input, notes_dir.as_deref())
        .with_context(|| format!("Cannot find note {}", input.display()))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
