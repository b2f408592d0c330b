//! Quick self-play run: the engine plays both sides from the start position

use chess_opponent_core::{Color, Engine, GameSession};

const DEFAULT_MAX_PLIES: usize = 80;

fn main() {
    tracing_subscriber::fmt::init();

    let max_plies = match std::env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Usage: selfplay [max-plies]");
            std::process::exit(1);
        }),
        None => DEFAULT_MAX_PLIES,
    };

    let engine = Engine::default();
    let mut rng = rand::rng();

    // Black starts as the engine's seat; it is swapped to whoever is to move
    let mut session = GameSession::new(Color::White);

    while session.history().len() < max_plies && !session.is_over() {
        if session.engine_color() != session.to_move() {
            session.swap_sides();
        }
        let mover = session.to_move();

        match session.play_engine_move(&engine, &mut rng) {
            Ok(Some(mv)) => println!("{:>3}. {} {}", session.history().len().div_ceil(2), mover, mv),
            Ok(None) => break,
            Err(e) => {
                eprintln!("Engine failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("\n{}\n", session.board());

    match session.outcome() {
        Some(outcome) => println!("Result: {:?}", outcome),
        None => println!(
            "Stopped after {} plies ({})",
            session.history().len(),
            session.status().as_str()
        ),
    }
}
