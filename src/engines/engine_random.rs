//! Random-move engine.
//!
//! Picks uniformly among all legal moves of the side to move. Seedable so
//! games and tests can be replayed exactly.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineMove};
use crate::errors::ChessErrors;
use crate::game_state::game_state::{Game, GameStatus};

pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    /// Reseeds from the configured seed, if any.
    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        match name.to_ascii_lowercase().as_str() {
            "seed" => {
                let seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| {
                        ChessErrors::InvalidOption(format!("seed '{value}' is not a u64"))
                    })?;
                *self = Self::with_seed(seed);
                Ok(())
            }
            _ => Err(ChessErrors::InvalidOption(format!("unknown option '{name}'"))),
        }
    }

    fn choose_move(&mut self, game: &Game) -> Result<Option<EngineMove>, ChessErrors> {
        if game.status() != GameStatus::InProgress {
            return Ok(None);
        }

        let legal_moves = game.all_legal_moves(game.side_to_move())?;
        debug!(count = legal_moves.len(), "random engine move pool");

        Ok(legal_moves
            .choose(&mut self.rng)
            .map(|&(from, to)| EngineMove {
                from,
                to,
                promotion: None,
            }))
    }
}
