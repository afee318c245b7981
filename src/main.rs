use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calcpad::calculator::copy_to_clipboard;
use calcpad::display::WriterSink;
use calcpad::{Config, Session};

/// Drive the calculator from the terminal.
///
/// Each stdin line is a sequence of key presses: named keys such as `Enter`,
/// `Escape` or `Backspace` as whole words, anything else one key per
/// character. The display is printed after every line.
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each display as a JSON object.
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let sink = WriterSink::new(io::stdout().lock()).json(cli.json);
    let mut session = Session::new(&config, sink);

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        session
            .feed_line(&line)
            .context("Failed to write display")?;
    }

    if cli.copy {
        let state = session.calculator().state();
        copy_to_clipboard(&state).context("Failed to copy result")?;
    }

    Ok(())
}
