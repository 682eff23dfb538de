use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hclquill::config::Config;
use hclquill::file::loader::{load_document_file, load_document_from_stdin};
use hclquill::output::{render, OutputFormat};

/// HCLQuill - Query HCL-style configuration documents
#[derive(Parser)]
#[command(name = "hclquill")]
#[command(version)]
#[command(about = "Query HCL-style configuration documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value(s) a query resolves to
    Get {
        /// Query such as `a.b.c[0]`, `a[]` or `a[-1]`
        query: String,

        /// Output format (default: from config file, else json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Document to read (omit or use `-` to read from stdin)
        #[arg(short = 'i', long = "in")]
        input: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with default settings and print its path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    init_logging(&config);

    if let Err(err) = run(cli, &config) {
        eprintln!("Error: {}", report(&err));
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the configured level.
fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp(None)
    .init();
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Get {
            query,
            format,
            input,
        } => {
            let doc = match input {
                Some(path) if path != Path::new("-") => load_document_file(&path)?,
                _ => load_document_from_stdin()?,
            };

            let value = doc.get(&query)?;
            let format = format.unwrap_or(config.format);

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render(&value, format))?;
            stdout.flush()?;
        }
        Command::Config {
            action: ConfigAction::Init { force },
        } => {
            let path = Config::config_path().context("Could not determine home directory")?;
            if path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
            log::info!("wrote default config to {}", path.display());
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Joins the error chain into one line, skipping causes already quoted by
/// the message above them.
fn report(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !message.contains(&text) {
            message = format!("{}: {}", message, text);
        }
    }
    message
}
