use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tictactoe_minimax::driver::{Driver, Outcome};

/// Play Tic-Tac-Toe against a minimax bot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Let the bot play both sides
    #[arg(long)]
    bot_vs_bot: bool,

    /// Seed for the bot's random opening move
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut driver = Driver::new(io::stdin().lock(), io::stdout(), rng, cli.bot_vs_bot);
    match driver.run()? {
        Outcome::Win { winner, .. } => log::info!("game over, {} won", winner),
        Outcome::Tie => log::info!("game over, tie"),
    }

    Ok(())
}
