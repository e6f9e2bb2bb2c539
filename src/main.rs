// SPDX-License-Identifier: Apache-2.0

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use tinta::config::{self, HTTP_HOST_VAR, Settings};
use tinta::{Color, LogFile, OutputMode, Printer};

#[derive(Parser)]
#[command(name = "tinta")]
#[command(version)]
#[command(about = "Colored status messages for terminals and HTML pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output mode (defaults to markup when HTTP_HOST is set, terminal otherwise)
    #[arg(long, env = "TINTA_MODE", global = true)]
    mode: Option<OutputMode>,

    /// Page theme for markup output: dark or light
    #[arg(long, env = "TINTA_THEME", global = true)]
    theme: Option<String>,

    /// Append every message to this file
    #[arg(long = "log", env = "TINTA_LOG", global = true)]
    log_path: Option<PathBuf>,

    /// Config file (default: ~/.config/tinta/config.toml)
    #[arg(long, env = "TINTA_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
enum Commands {
    /// Print a message in any color (default: black, white on dark pages)
    Message {
        text: String,
        /// black, red, green, orange, blue, gray/grey or white
        #[arg(short, long, default_value = "black")]
        color: Color,
    },
    /// Print a red message
    Error { text: String },
    /// Print an orange message
    Warning { text: String },
    /// Print a green message
    Success { text: String },
    /// Show the color table
    Palette,
    /// Show or clear the message log
    Log {
        /// Keep lines containing this word (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
        /// Number of lines to show
        #[arg(short = 'n', long, default_value = "20")]
        lines: usize,
        /// Empty the log file
        #[arg(long)]
        clear: bool,
    },
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match cli.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path)?,
        None => Settings::default(),
    };

    let http_host = std::env::var(HTTP_HOST_VAR).ok();
    let mode = config::resolve_mode(cli.mode.or(settings.mode), http_host.as_deref());
    let theme = cli
        .theme
        .or(settings.theme)
        .unwrap_or_else(|| "dark".to_string());
    let log_path = cli.log_path.or(settings.log_path);
    tracing::debug!(%mode, %theme, log = ?log_path, "resolved options");

    match cli.command {
        Commands::Message { text, color } => {
            Printer::new(mode, log_path, &theme)?.message(&text, color)?;
        }
        Commands::Error { text } => {
            Printer::new(mode, log_path, &theme)?.error(&text)?;
        }
        Commands::Warning { text } => {
            Printer::new(mode, log_path, &theme)?.warning(&text)?;
        }
        Commands::Success { text } => {
            Printer::new(mode, log_path, &theme)?.success(&text)?;
        }
        Commands::Palette => {
            let ansi = mode == OutputMode::Terminal && std::io::stdout().is_terminal();
            println!("{}", tinta::table::palette_table(ansi));
        }
        Commands::Log {
            filter,
            lines,
            clear,
        } => {
            let log = LogFile::new(log_path.ok_or("No log file configured (use --log or TINTA_LOG)")?);
            if clear {
                log.clear()?;
                println!("Log cleared.");
                return Ok(());
            }
            let entries = log.read_tail(lines, filter.as_deref())?;
            if entries.is_empty() {
                println!("No log entries found.");
            } else {
                for entry in &entries {
                    println!("{}", entry);
                }
                println!("{}", format!("({} entries)", entries.len()).dimmed());
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tinta", &mut std::io::stdout());
        }
    }
    Ok(())
}
