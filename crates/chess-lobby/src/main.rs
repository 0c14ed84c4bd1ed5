use anyhow::{bail, Context, Result};
use chess_core::{Color, Move};
use chess_lobby::{Lobby, LobbyConfig, MemoryGameStore, Notification, NotificationReceiver};
use chess_rules::{perft_divide, Game};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-lobby")]
#[command(about = "Run chess games through the lobby")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a list of moves between two players and print every notification
    Replay {
        /// Moves in coordinate notation, e.g. e2e4 e7e5
        moves: Vec<String>,
        /// White player name
        #[arg(long, default_value = "white")]
        white: String,
        /// Black player name
        #[arg(long, default_value = "black")]
        black: String,
    },
    /// Count leaf nodes below each legal move
    Perft {
        /// Search depth
        #[arg(short, long, default_value = "3")]
        depth: u32,
        /// Start position in FEN (defaults to the standard start)
        #[arg(long)]
        fen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LobbyConfig::load_from(path),
        None => LobbyConfig::load(),
    }
    .context("loading lobby configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Replay {
            moves,
            white,
            black,
        } => replay(config, &moves, &white, &black).await,
        Commands::Perft { depth, fen } => {
            let game = match fen {
                Some(fen) => Game::from_fen(&fen)?,
                None => Game::new(),
            };
            let results = perft_divide(&game, depth);
            let total: u64 = results.iter().map(|(_, n)| n).sum();
            for (uci, nodes) in results {
                println!("{}: {}", uci, nodes);
            }
            println!("\nNodes searched: {}", total);
            Ok(())
        }
    }
}

async fn replay(config: LobbyConfig, moves: &[String], white: &str, black: &str) -> Result<()> {
    if white.trim() == black.trim() {
        bail!("white and black must be different players");
    }

    let lobby = Lobby::new(MemoryGameStore::new(), config);
    let id = lobby.create_game("replay").await?;
    let mut rx = lobby.subscribe(id)?;
    lobby.join(id, white, Color::White).await?;
    lobby.join(id, black, Color::Black).await?;
    print_pending(&mut rx);

    for text in moves {
        let mov = Move::from_uci(text).with_context(|| format!("parsing move {text:?}"))?;
        let data = lobby.game(id).await?;
        let player = match data.game.turn() {
            Color::White => white,
            Color::Black => black,
        };
        lobby
            .make_move(id, player, mov)
            .await
            .with_context(|| format!("playing {text}"))?;
        print_pending(&mut rx);
    }

    let data = lobby.game(id).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn print_pending(rx: &mut NotificationReceiver) {
    while let Ok(notification) = rx.try_recv() {
        match notification {
            Notification::LoadGame { game } => println!("[board] {}", game.to_fen()),
            Notification::Message { text } => println!("[note]  {}", text),
        }
    }
}
