use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use memorama::core::{Alphabet, GameConfig, Pacing};
use memorama::display::{Display, PlainDisplay, TerminalDisplay};
use memorama::logging::{setup_logging, DEFAULT_LOG_SPEC};
use memorama::Session;

#[derive(Parser, Debug)]
#[command(name = "memorama", version, about = "Two-player memory game on a 6x6 board")]
struct Config {
    /// Shuffle seed; the wall clock is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// The 18 distinct symbols to deal, e.g. "ABCDEFGHIJKLMNOPQR"
    #[arg(long)]
    symbols: Option<String>,

    /// Skip all readability pauses
    #[arg(long, default_value_t = false)]
    fast: bool,

    /// Never emit terminal escape sequences
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Log spec for stderr, e.g. "info" or "memorama=debug"
    #[arg(long, default_value = DEFAULT_LOG_SPEC)]
    log_level: String,
}

impl Config {
    fn game_config(&self) -> memorama::Result<GameConfig> {
        let mut config = GameConfig::new();
        if let Some(symbols) = &self.symbols {
            config = config.with_alphabet(Alphabet::new(symbols)?);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.fast {
            config = config.with_pacing(Pacing::instant());
        }
        Ok(config)
    }
}

fn run(cli: &Config) -> memorama::Result<()> {
    let config = cli.game_config()?;

    let display: Box<dyn Display> = if !cli.plain && io::stdout().is_terminal() {
        Box::new(TerminalDisplay::new(io::stdout()))
    } else {
        Box::new(PlainDisplay::new(io::stdout()))
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), display, config);
    let report = session.run()?;
    log::info!("session finished: {:?}", report.result);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Config::parse();

    let _logger = match setup_logging(&cli.log_level) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("memorama: {err}");
            ExitCode::FAILURE
        }
    }
}
