mod esv;
mod local;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use esv::EsvClient;
use local::{LocalSource, Recorded};
use std::env;
use std::path::{Path, PathBuf};
use versemark_config::Config;
use versemark_engine::{BreakStyle, PassageSource, parse_reference, render_passage};

const TOKEN_VAR: &str = "ESV_API_TOKEN";

#[derive(Parser)]
#[command(
    name = "versemark",
    version,
    about = "Render scripture passages as readable markdown"
)]
struct Cli {
    /// Config file to use instead of ~/.config/versemark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a passage and print it as markdown
    Show {
        /// Reference such as "John 3:16", "1cor2v11-13" or "ps23"
        query: String,
        /// Break lines with <br> and an em space instead of indentation
        #[arg(long)]
        strict: bool,
        /// Read raw passage text from a file ("-" for stdin) instead of the API
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Also write the raw passage text to this file
        #[arg(long, value_name = "PATH")]
        save_raw: Option<PathBuf>,
    },
    /// Print the parsed reference as JSON
    Parse {
        query: String,
    },
    /// Print the chapters before and after a reference
    Nav {
        query: String,
    },
    /// Write a config file with the default settings
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Show {
            query,
            strict,
            input,
            save_raw,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let style = if strict || config.strict {
                BreakStyle::Strict
            } else {
                BreakStyle::Plain
            };

            let markdown = match input {
                Some(path) => show(&LocalSource::from_arg(path), &query, style, save_raw.as_deref())?,
                None => {
                    let token = api_token(&config)?;
                    let client = EsvClient::new(config.api_url.as_str(), token)?;
                    show(&client, &query, style, save_raw.as_deref())?
                }
            };
            println!("{markdown}");
        }
        Commands::Parse { query } => {
            let range = parse_reference(&query)?;
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        Commands::Nav { query } => {
            let range = parse_reference(&query)?;
            println!("previous: {}", range.previous_chapter());
            println!("next: {}", range.next_chapter());
        }
        Commands::Init { force } => {
            let path = init_config(cli.config.as_deref(), force)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn show<S: PassageSource>(
    source: &S,
    query: &str,
    style: BreakStyle,
    save_raw: Option<&Path>,
) -> Result<String> {
    let recorded = Recorded::new(source);
    let rendered = render_passage(&recorded, query, style);

    // saved even when layout fails
    if let Some(path) = save_raw
        && let Some(raw) = recorded.take()
    {
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write raw passage to {}", path.display()))?;
        log::info!("raw passage saved to {}", path.display());
    }

    rendered.with_context(|| format!("Failed to render {query:?}"))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_else(|| {
        log::debug!("no config file, using defaults");
        Config::default()
    }))
}

fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }
    Config::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(path)
}

/// The environment wins over the config file.
fn api_token(config: &Config) -> Result<String> {
    let from_env = env::var(TOKEN_VAR).ok().filter(|token| !token.is_empty());
    match from_env.or_else(|| config.api_token.clone()) {
        Some(token) => Ok(token),
        None => bail!(
            "No API token: set {TOKEN_VAR} or api_token in {}",
            Config::config_path().display()
        ),
    }
}
