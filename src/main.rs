use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use morning_quest::GameState;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Get ready for the first lecture: a tiny text adventure.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Log level for diagnostics (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), String> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot open log file '{}': {e}", path.display()))?;
            WriteLogger::init(cli.log_level, Config::default(), file)
        }
        None => TermLogger::init(
            cli.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    }
    .map_err(|e| e.to_string())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    let mut game = match GameState::new() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to build the world: {e}");
            std::process::exit(1);
        }
    };

    let world = game.world();
    println!("{}", world.name);
    if !world.desc.is_empty() {
        println!("{}", world.desc);
    }
    println!("(выход - quit)\n");
    println!("{}", game.initialize());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        let bytes_read = stdin.lock().read_line(&mut input)?;
        if bytes_read == 0 {
            println!();
            break;
        }

        // Only the line terminator is stripped; the parser sees the rest verbatim.
        let line = input.trim_end_matches(['\n', '\r']);
        if line == "quit" || line == "выход" {
            break;
        }

        println!("{}", game.handle_command(line));
    }

    log::info!("session ended");
    Ok(())
}
