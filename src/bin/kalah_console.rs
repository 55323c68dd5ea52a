//! Reference console front-end.
//!
//! Reads a starting keystroke, then pit indices, one per line. An illegal
//! move prints "Illegal Move" and re-prompts without touching the game.
//! The mode is the first argv argument (`3`, `4`, or `6`; default 3).
//!
//! ```text
//! kalah-console [mode]
//! ```

use std::io::{self, BufRead};

use kalah::{Game, GameError, Mode, SideId, Status};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mode = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<Mode>() {
            Ok(mode) => mode,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => Mode::ThreeStones,
    };

    if let Err(err) = run(mode) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut game = Game::new(mode);
    println!("Enter a number to start...");
    if lines.next().is_none() {
        return Ok(());
    }

    game.start()?;
    print_board(&game, true);
    announce_turn(&game);

    while let Some(line) = lines.next() {
        let line = line?;
        // Anything that doesn't parse as a pit index is an illegal move;
        // bad input never reaches the engine, let alone mutates it.
        let Ok(pit) = line.trim().parse::<usize>() else {
            println!("Illegal Move");
            continue;
        };
        match game.play(pit) {
            Ok(()) => {}
            Err(GameError::IllegalMove { .. }) => {
                println!("Illegal Move");
                continue;
            }
            Err(err @ GameError::InvalidState { .. }) => return Err(err.into()),
        }

        if game.status() == Status::Finished {
            print_board(&game, false);
            match game.winner()? {
                Some(side) => println!("Finished. {} wins.", game.side(side).name()),
                None => println!("Finished with a tie."),
            }
            return Ok(());
        }
        print_board(&game, true);
        announce_turn(&game);
    }
    Ok(())
}

fn announce_turn(game: &Game) {
    if let Some(mover) = game.status().side_to_move() {
        println!("{} Moves", game.side(mover).name());
    }
}

/// Render both sides: B's row mirrored right-to-left above A's row, houses
/// on the outside, pit index guides while the game is in play.
fn print_board(game: &Game, with_indices: bool) {
    let side_a = game.side(SideId::A);
    let side_b = game.side(SideId::B);

    let row_a: String = side_a.pits().iter().map(|count| format!("({count})")).collect();
    let row_b: String = side_b.pits().iter().rev().map(|count| format!("({count})")).collect();
    let indices_a: String = (0..side_a.pit_count()).map(|i| format!("({i})")).collect();
    let indices_b: String = (0..side_b.pit_count()).rev().map(|i| format!("({i})")).collect();

    // Name column plus house column on the B line sets the pit alignment.
    let margin = " ".repeat(side_b.name().len() + 6);

    if with_indices {
        println!("{margin}{indices_b}");
    }
    println!("{} [{:02}] {}", side_b.name(), side_b.house(), row_b);
    println!("{}      {} [{:02}]", side_a.name(), row_a, side_a.house());
    if with_indices {
        println!("{margin}{indices_a}");
    }
}
