use std::io;

use anyhow::Result;
use clap::Parser;
use fundamentos_core::{Console, ConsoleOptions, Menu, SystemClock, PT_BR};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "fundamentos",
    author,
    version = "0.1.0",
    about = "Interactive menu of small text utilities"
)]
struct Cli {
    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(long, help = "Do not clear the screen between screens")]
    no_clear: bool,

    #[clap(long, help = "Return to the menu without waiting for Enter")]
    no_pause: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    // Logs go to stderr so they never mix with the dialogue on stdout.
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let options = ConsoleOptions {
        clear_screen: !cli.no_clear,
        pause: !cli.no_pause,
    };
    log::debug!("console options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), options);

    let mut menu = Menu::new(SystemClock, PT_BR);
    menu.run(&mut console)?;

    Ok(())
}
