//! Tunables for puzzle generation

/// Configuration for generating puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Most white letters a decoy row may show
    pub max_whites: usize,
    /// Candidate draws allowed at one white cap before the cap is relaxed
    pub max_draws: usize,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl PuzzleConfig {
    pub const DEFAULT_MAX_WHITES: usize = 3;
    pub const DEFAULT_MAX_DRAWS: usize = 20_000;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_whites: Self::DEFAULT_MAX_WHITES,
            max_draws: Self::DEFAULT_MAX_DRAWS,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_max_whites(mut self, max_whites: usize) -> Self {
        self.max_whites = max_whites;
        self
    }

    #[must_use]
    pub const fn with_max_draws(mut self, max_draws: usize) -> Self {
        self.max_draws = max_draws;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.max_whites, 3);
        assert_eq!(config.max_draws, 20_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = PuzzleConfig::new()
            .with_max_whites(2)
            .with_max_draws(10)
            .with_seed(42);
        assert_eq!(config.max_whites, 2);
        assert_eq!(config.max_draws, 10);
        assert_eq!(config.seed, Some(42));
    }
}
