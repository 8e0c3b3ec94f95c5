use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::io::BufReader;
use tracing::{debug, info};

use thermo::banner::{BannerInfo, print_banner, print_session_summary};
use thermo::commands::{CommandRegistry, CommandResult, SessionInfo};
use thermo::consts::prompt;
use thermo::engine::{self, Direction};
use thermo::input;
use thermo::logging;
use thermo::session::{Session, SessionConfig, render};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Celsius -> Fahrenheit
    C2f,
    /// Fahrenheit -> Celsius
    F2c,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::C2f => Direction::CelsiusToFahrenheit,
            DirectionArg::F2c => Direction::FahrenheitToCelsius,
        }
    }
}

#[derive(Parser)]
#[command(name = "thermo", version, about = "Fahrenheit <-> Celsius, live.")]
struct Cli {
    /// Initial conversion direction
    #[arg(short, long, value_enum, default_value_t = DirectionArg::F2c)]
    direction: DirectionArg,

    /// Convert a single value and exit (non-interactive)
    #[arg(short, long, allow_hyphen_values = true)]
    convert: Option<String>,

    /// Print the single-shot result as JSON
    #[arg(long, default_value_t = false, requires = "convert")]
    json: bool,

    /// Skip the startup banner
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let direction = Direction::from(cli.direction);

    // Single conversion mode
    if let Some(raw) = cli.convert {
        let state = engine::display(&raw, direction);
        debug!(raw = %raw, %direction, "single conversion");
        if cli.json {
            let json = serde_json::to_string(&state).context("failed to encode result")?;
            println!("{json}");
        } else {
            println!("{}", render(&state));
        }
        return Ok(());
    }

    if !cli.no_banner {
        print_banner(&BannerInfo { direction });
    }

    let mut session = Session::new(SessionConfig {
        direction,
        input: String::new(),
    });
    let commands = CommandRegistry::new();
    info!(%direction, "session started");

    println!("{}", render(session.display()));

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    loop {
        print!("\n{}", prompt(session.direction().label()));
        io::stdout().flush()?;

        let line = tokio::select! {
            result = input::next_line(&mut stdin, &mut buf) => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let info = SessionInfo { session: &session };
        let result = commands.dispatch(&line, &info).await;
        if result == CommandResult::Quit {
            break;
        }
        if let Some(state) = session.apply(result, &line) {
            println!("{}", render(state));
        }
    }

    info!(updates = session.updates(), "session ended");
    print_session_summary(session.updates());
    Ok(())
}
