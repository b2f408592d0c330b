//! Move selection for the automated opponent.
//!
//! # Architecture
//! - `config`: difficulty knobs ([`EngineConfig`])
//! - `eval`: material evaluation
//! - `minimax`: alpha-beta search below the root
//!
//! The root is not a plain best-move search. Each decision picks a depth at
//! random, searches a shuffled sample of the legal moves, jitters their
//! scores, and finally may swap the winner for a random other legal move.
//! Together these set the opponent's playing strength.

mod config;
mod eval;
mod minimax;

pub use config::EngineConfig;
pub use eval::{evaluate, material_value};
pub use minimax::TERMINAL_SCORE;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Color, Move};
use crate::error::Result;
use crate::rules::legal_moves;

use minimax::SearchContext;

/// What a single decision produced
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `None` only when the side to move has no legal moves
    pub best: Option<Move>,
    /// Plies searched, counting the root move
    pub depth: u8,
    /// Root moves actually searched
    pub candidates: usize,
    pub nodes: u64,
    /// Whether `best` was replaced by a deliberate blunder
    pub blundered: bool,
}

/// Stateless move chooser; every call works on its own board snapshot.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Picks a move for `color` using the thread-local RNG.
    pub fn choose_move(&self, board: &Board, color: Color) -> Option<Move> {
        self.choose_move_with(board, color, &mut rand::rng())
    }

    pub fn choose_move_with<R: Rng>(&self, board: &Board, color: Color, rng: &mut R) -> Option<Move> {
        self.search(board, color, rng).best
    }

    /// Runs one full decision for `ai` and reports how it went.
    pub fn search<R: Rng>(&self, board: &Board, ai: Color, rng: &mut R) -> SearchOutcome {
        let legal = legal_moves(board, ai);
        if legal.is_empty() {
            debug!(color = %ai, "no legal moves, nothing to search");
            return SearchOutcome {
                best: None,
                depth: 0,
                candidates: 0,
                nodes: 0,
                blundered: false,
            };
        }

        let depth = if rng.random_bool(self.config.deep_search_probability) {
            self.config.deep_depth
        } else {
            self.config.shallow_depth
        };

        let mut shuffled = legal.clone();
        shuffled.shuffle(rng);
        let candidates = shuffled.len().min(self.config.root_sample);

        let mut ctx = SearchContext::new(ai);
        let mut best_move = None;
        let mut best_value = f64::NEG_INFINITY;

        for &mv in &shuffled[..candidates] {
            let value = ctx.minimax(&board.apply_move(mv), depth - 1, i32::MIN, i32::MAX, false);
            let jittered = value as f64 + self.jitter(rng);
            trace!(%mv, value, jittered, "root candidate");

            if jittered > best_value {
                best_value = jittered;
                best_move = Some(mv);
            }
        }

        let mut blundered = false;
        if rng.random_bool(self.config.blunder_probability) && legal.len() > 1 {
            let others: Vec<Move> = legal.iter().copied().filter(|mv| Some(*mv) != best_move).collect();
            if let Some(&pick) = others.choose(rng) {
                best_move = Some(pick);
                blundered = true;
            }
        }

        debug!(
            color = %ai,
            depth,
            candidates,
            legal = legal.len(),
            nodes = ctx.nodes(),
            blundered,
            chosen = ?best_move.map(|mv| mv.to_string()),
            "engine move"
        );

        SearchOutcome {
            best: best_move,
            depth,
            candidates,
            nodes: ctx.nodes(),
            blundered,
        }
    }

    fn jitter<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.config.noise > 0.0 {
            rng.random_range(-self.config.noise..self.config.noise)
        } else {
            0.0
        }
    }
}

/// Picks a move for `color` at the default difficulty.
///
/// Returns `None` when `color` has no legal move, which the caller treats as
/// the end of the game.
pub fn choose_move(board: &Board, color: Color) -> Option<Move> {
    Engine::default().choose_move(board, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn strict_engine(depth: u8) -> Engine {
        Engine::new(EngineConfig {
            deep_search_probability: 1.0,
            deep_depth: depth,
            shallow_depth: depth,
            blunder_probability: 0.0,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_no_move_when_mated() {
        let board = Board::from_placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = Engine::default().search(&board, Color::White, &mut rng);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.candidates, 0);
    }

    #[test]
    fn test_no_move_when_stalemated() {
        let board = Board::from_placement("8/8/8/8/8/1q6/2k5/K7").unwrap();
        assert_eq!(choose_move(&board, Color::White), None);
    }

    #[test]
    fn test_chosen_move_is_always_legal() {
        let board = Board::initial()
            .apply(sq("e2"), sq("e4"))
            .apply(sq("e7"), sq("e5"));
        let engine = Engine::new(EngineConfig {
            deep_search_probability: 0.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let legal = legal_moves(&board, Color::White);

        for seed in 0..12 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = engine.choose_move_with(&board, Color::White, &mut rng).unwrap();
            assert!(legal.contains(&mv), "seed {} produced {}", seed, mv);
        }
    }

    #[test]
    fn test_depth_three_takes_free_queen() {
        // Black rook d8 can take the undefended white queen on d4
        let board = Board::from_placement("k2r4/8/8/8/3Q4/8/8/7K").unwrap();
        let engine = strict_engine(3);

        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = engine.search(&board, Color::Black, &mut rng);
            assert_eq!(outcome.depth, 3);
            assert_eq!(outcome.best, Some(Move::new(sq("d8"), sq("d4"))));
            assert!(!outcome.blundered);
        }
    }

    #[test]
    fn test_root_sample_caps_candidates() {
        let engine = Engine::new(EngineConfig {
            deep_search_probability: 0.0,
            shallow_depth: 1,
            ..EngineConfig::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = engine.search(&Board::initial(), Color::White, &mut rng);
        assert_eq!(outcome.depth, 1);
        assert_eq!(outcome.candidates, 15);
        // one root node per sampled candidate at depth 0
        assert_eq!(outcome.nodes, 15);
    }

    #[test]
    fn test_sample_smaller_than_root_sample() {
        let board = Board::from_placement("k7/8/8/8/8/8/8/7K").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = strict_engine(1).search(&board, Color::White, &mut rng);
        assert_eq!(outcome.candidates, 3);
    }

    #[test]
    fn test_forced_blunder_avoids_best_move() {
        let board = Board::from_placement("k2r4/8/8/8/3Q4/8/8/7K").unwrap();
        let engine = Engine::new(EngineConfig {
            deep_search_probability: 1.0,
            blunder_probability: 1.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let legal = legal_moves(&board, Color::Black);

        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = engine.search(&board, Color::Black, &mut rng);
            let mv = outcome.best.unwrap();
            assert!(outcome.blundered);
            assert_ne!(mv, Move::new(sq("d8"), sq("d4")));
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_blunder_draws_from_every_legal_move() {
        // One searched candidate, so any other pick comes from outside the sample
        let engine = Engine::new(EngineConfig {
            deep_search_probability: 0.0,
            shallow_depth: 1,
            root_sample: 1,
            blunder_probability: 1.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let board = Board::initial();
        let legal = legal_moves(&board, Color::White);
        let mut picks = std::collections::HashSet::new();

        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = engine.search(&board, Color::White, &mut rng);
            assert_eq!(outcome.candidates, 1);
            assert!(outcome.blundered);
            picks.insert(outcome.best.unwrap());
        }

        assert_eq!(picks.len(), legal.len());
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        // Every opening move is worth 0 at depth 1
        let engine = Engine::new(EngineConfig {
            deep_search_probability: 0.0,
            shallow_depth: 1,
            noise: 0.0,
            blunder_probability: 0.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let board = Board::initial();

        for seed in 0..8 {
            let mut mirror = StdRng::seed_from_u64(seed);
            let _ = mirror.random_bool(0.0);
            let mut order = legal_moves(&board, Color::White);
            order.shuffle(&mut mirror);

            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = engine.search(&board, Color::White, &mut rng);
            assert_eq!(outcome.best, Some(order[0]), "seed {}", seed);
        }
    }

    #[test]
    fn test_jitter_stays_within_noise() {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..2000 {
            let j = engine.jitter(&mut rng);
            assert!((-0.25..0.25).contains(&j), "jitter {} out of range", j);
        }

        let quiet = Engine::new(EngineConfig {
            noise: 0.0,
            ..EngineConfig::default()
        })
        .unwrap();
        assert_eq!(quiet.jitter(&mut rng), 0.0);
    }

    #[test]
    fn test_single_legal_move_is_never_blundered_away() {
        // The g8 rook covers g1 and g2, leaving h2 as the white king's only move
        let board = Board::from_placement("k5r1/8/8/8/8/8/8/7K").unwrap();
        let legal = legal_moves(&board, Color::White);
        assert_eq!(legal.len(), 1);

        let engine = Engine::new(EngineConfig {
            blunder_probability: 1.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = engine.search(&board, Color::White, &mut rng);
        assert_eq!(outcome.best, Some(legal[0]));
        assert!(!outcome.blundered);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            deep_search_probability: -0.1,
            ..EngineConfig::default()
        };
        assert!(Engine::new(config).is_err());
    }
}
