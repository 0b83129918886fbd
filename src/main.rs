use clap::Parser;
use eyre::{Context, Result};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tasklist::{Config, Flow, Locale, Screen, TaskStore};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "tasklist - add, toggle, rename and remove to-do items in the terminal")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured locale (en, pt-BR)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the final task list as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    let store = TaskStore::with_ids(config.ids.generator());
    let mut screen = Screen::new(store, config.messages(), io::stdout().lock());

    screen.render()?;
    screen.prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input")?;
        if screen.handle_line(&line)? == Flow::Quit {
            break;
        }
        screen.prompt()?;
    }

    if cli.json {
        let (store, _) = screen.into_parts();
        let json = serde_json::to_string_pretty(&store.snapshot()).context("Failed to serialize tasks")?;
        println!("{}", json);
    }

    Ok(())
}
