use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use zcalc::calculator::copy_to_clipboard;
use zcalc::session::render_help;
use zcalc::{Config, Session};

#[derive(Parser)]
#[command(name = "zcalc", version)]
#[command(about = "A keyboard-driven arithmetic calculator")]
struct Cli {
    /// Config file to use instead of ~/.config/zcalc/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session reading key presses from stdin (default)
    Repl,

    /// Apply key presses and print the final screen
    Eval {
        /// Keys to press, e.g. "12+3=" or "5 / 0 enter"
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print the screen as JSON
        #[arg(long)]
        json: bool,

        /// Print the raw calculator state as JSON instead of the screen
        #[arg(long, conflicts_with = "json")]
        state: bool,

        /// Fail on keys the calculator does not know
        #[arg(long)]
        strict: bool,

        /// Copy the final value to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the keypad and key bindings
    Keys,

    /// Show the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    zcalc::logging::init(&config.logging);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(config),
        Command::Eval {
            keys,
            json,
            state,
            strict,
            copy,
        } => run_eval(config, &keys.join(" "), OutputFormat::new(json, state), strict, copy),
        Command::Keys => {
            print!("{}", render_help());
            Ok(())
        }
        Command::Config { path } => show_config(&config, cli.config, path),
    }
}

fn run_repl(config: Config) -> Result<()> {
    let copy_on_equals = config.session.copy_on_equals;
    let mut session = Session::new(config);

    if copy_on_equals {
        session.set_on_result(|value| {
            if let Err(e) = copy_to_clipboard(value) {
                warn!("{}", e);
            }
        });
    }

    let stdin = io::stdin();
    session
        .run(BufReader::new(stdin.lock()), io::stdout())
        .context("Session failed")
}

/// How `eval` prints its outcome.
enum OutputFormat {
    Text,
    ScreenJson,
    StateJson,
}

impl OutputFormat {
    fn new(json: bool, state: bool) -> Self {
        match (json, state) {
            (_, true) => Self::StateJson,
            (true, false) => Self::ScreenJson,
            (false, false) => Self::Text,
        }
    }
}

fn run_eval(
    mut config: Config,
    keys: &str,
    format: OutputFormat,
    strict: bool,
    copy: bool,
) -> Result<()> {
    config.session.strict_keys |= strict;
    let mut session = Session::new(config);

    let screen = session
        .feed_line(keys)
        .with_context(|| format!("Failed to evaluate {:?}", keys))?;

    match format {
        OutputFormat::Text => println!("{}", session.render(&screen)),
        OutputFormat::ScreenJson => println!("{}", serde_json::to_string_pretty(&screen)?),
        OutputFormat::StateJson => {
            let state = session.calculator().state();
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    if copy {
        match screen.text_for_clipboard() {
            Some(text) => copy_to_clipboard(text).context("Failed to copy result")?,
            None => warn!("nothing to copy"),
        }
    }

    Ok(())
}

fn show_config(config: &Config, explicit: Option<PathBuf>, path_only: bool) -> Result<()> {
    if path_only {
        match explicit.or_else(Config::default_path) {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("No config directory on this platform"),
        }
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
