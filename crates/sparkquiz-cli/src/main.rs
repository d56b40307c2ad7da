//! Sparkquiz - An animated multiple-choice quiz for the terminal
//!
//! Loads questions from a CSV file and plays them with:
//! - Click ripples, answer bursts and a cursor trail
//! - Fireworks, balloons or bubbles depending on the final score
//! - Mouse and keyboard input

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sparkquiz_core::{paths, questions, Config, PresenterOptions};

mod tui;

/// Sparkquiz - animated terminal quiz
#[derive(Parser)]
#[command(name = "sparkquiz")]
#[command(about = "An animated multiple-choice quiz for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Question CSV (overrides the config file)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Config file (defaults to ~/.sparkquiz/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible animations
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the cursor trail
    #[arg(long)]
    no_trail: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (default)
    Play,

    /// Validate a question file without starting the quiz
    Check { path: PathBuf },
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout belongs to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join("sparkquiz.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

/// Config file values with CLI flags applied on top
fn resolve_config(cli: &Cli) -> Config {
    let path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_default(&path);

    if let Some(questions) = &cli.questions {
        config.questions = questions.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_trail {
        config.show_cursor_trail = false;
    }
    config
}

fn check_questions(path: &Path) -> Result<()> {
    let parsed = questions::load_from_path(path)
        .with_context(|| format!("Failed to load questions from {}", path.display()))?;

    println!("Question file: {}", path.display());
    println!();
    for (i, question) in parsed.questions.iter().enumerate() {
        let answer = questions::OPTION_LABELS[question.correct_index()];
        println!("  {}. {} [{}]", i + 1, question.text(), answer);
        for (label, option) in questions::OPTION_LABELS.iter().zip(question.options()) {
            println!("       {}. {}", label, option);
        }
    }
    println!();
    println!(
        "  {} question(s) accepted, {} row(s) skipped",
        parsed.questions.len(),
        parsed.skipped
    );
    if parsed.questions.is_empty() {
        println!("  No valid rows: the built-in sample questions would be used.");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { path }) => check_questions(path)?,
        Some(Commands::Play) | None => {
            let config = resolve_config(&cli);
            tracing::info!(
                questions = %config.questions.display(),
                seed = ?config.seed,
                frame_ms = config.frame_ms,
                "Starting Sparkquiz"
            );

            let report = questions::load_or_fallback(&config.questions);
            if report.skipped > 0 {
                tracing::warn!("Skipped {} invalid question row(s)", report.skipped);
            }

            let options = PresenterOptions {
                seed: config.seed,
                show_trail: config.show_cursor_trail,
            };
            let mut app = tui::App::new(report.questions, options, config.frame_interval())?;
            app.run().await?;
        }
    }

    Ok(())
}
