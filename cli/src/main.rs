mod config;
mod input;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tictactoe_engine::{GameState, GameStatus, Mark, find_best_move, log, logger};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match config::get_config_manager(args.config.as_deref()).get_config() {
        Ok(config) => config,
        Err(error) => {
            log!("Failed to load config, using defaults: {}", error);
            CliConfig::default()
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Tic-Tac-Toe!");

    loop {
        play_game(&config, &mut lines);

        if !prompt_play_again(&mut lines) {
            break;
        }
    }
}

fn play_game(config: &CliConfig, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let mut state = GameState::new();
    print_board(&state);

    while state.status() == GameStatus::InProgress {
        match state.current_mark() {
            Mark::X => {
                if !human_turn(&mut state, &mut *lines) {
                    continue;
                }
            }
            Mark::O => ai_turn(&mut state, config),
            Mark::Empty => unreachable!(),
        }

        print_board(&state);
    }

    match state.status() {
        GameStatus::XWon => {
            log!("Game over: human win");
            println!("Player X wins!");
        }
        GameStatus::OWon => {
            log!("Game over: AI win");
            println!("AI wins!");
        }
        GameStatus::Draw => {
            log!("Game over: draw");
            println!("It's a draw!");
        }
        GameStatus::InProgress => unreachable!(),
    }
}

/// One attempt at reading and playing a human move. Returns false when the
/// move was rejected, so the caller re-prompts without advancing the turn.
fn human_turn(
    state: &mut GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> bool {
    print!("Player X's Turn: Enter row (1-3) and column (1-3): ");
    io::stdout().flush().expect("Failed to flush stdout");

    let line = match lines.next() {
        Some(Ok(line)) => line,
        // Stdin is closed; there is no way to continue the game.
        _ => {
            log!("Input stream closed, exiting");
            std::process::exit(0);
        }
    };

    let position = match input::parse_move(&line) {
        Ok(position) => position,
        Err(_) => {
            println!("Invalid move. Try again.");
            return false;
        }
    };

    if state.place_mark(position).is_err() {
        println!("Invalid move. Try again.");
        return false;
    }

    if let Some(placed) = state.last_move() {
        log!("Player X places at ({}, {})", placed.row + 1, placed.col + 1);
    }

    true
}

fn ai_turn(state: &mut GameState, config: &CliConfig) {
    println!("AI's Turn:");
    if config.ai_move_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(config.ai_move_delay_ms));
    }

    // The loop only reaches this point while the game is in progress, so a
    // legal move always exists.
    let position = find_best_move(state.board()).expect("AI invoked with no legal moves");
    state
        .place_mark(position)
        .expect("AI selected an illegal move");

    log!("AI places O at ({}, {})", position.row + 1, position.col + 1);
}

fn prompt_play_again(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    print!("Play again? (y/n): ");
    io::stdout().flush().expect("Failed to flush stdout");

    match lines.next() {
        Some(Ok(answer)) => answer.trim().eq_ignore_ascii_case("y"),
        _ => false,
    }
}

fn print_board(state: &GameState) {
    println!();
    print!("{}", state.board());
    println!();
}
