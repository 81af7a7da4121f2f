//! Puzzle generation survey
//!
//! Generates many puzzles in parallel and reports how hard the decoy sampler had to
//! work: draws per puzzle, how often the white cap had to be relaxed and how much
//! signal the decoy rows carry.

use crate::core::WORD_LEN;
use crate::puzzle::{DECOY_ROWS, DecoyGenerator, PuzzleConfig};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Aggregated survey statistics
#[derive(Debug)]
pub struct SurveyResult {
    pub puzzles: usize,
    pub generated: usize,
    pub failed: usize,
    pub total_draws: usize,
    pub average_draws: f64,
    pub max_draws: usize,
    /// Puzzles that needed a looser white cap than configured
    pub relaxed: usize,
    /// Decoy rows keyed by their white count
    pub white_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles and collect statistics
///
/// Each puzzle gets its own RNG derived from `config.seed` (or a random base), so a
/// seeded survey is reproducible regardless of thread scheduling.
#[must_use]
pub fn run_survey(
    dictionary: &Dictionary,
    config: &PuzzleConfig,
    count: usize,
    show_progress: bool,
) -> SurveyResult {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let generator = DecoyGenerator::new(dictionary.common_words(), config);
    let solutions = dictionary.all_words();
    let configured_cap = config.max_whites.min(WORD_LEN);

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<_> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let solution = solutions[rng.random_range(0..solutions.len())];
            let outcome = generator.generate(&solution, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut total_draws = 0;
    let mut max_draws = 0;
    let mut relaxed = 0;
    let mut failed = 0;
    let mut white_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for outcome in &outcomes {
        match outcome {
            Ok(decoys) => {
                total_draws += decoys.draws;
                max_draws = max_draws.max(decoys.draws);
                if decoys.cap > configured_cap {
                    relaxed += 1;
                }
                for row in &decoys.rows {
                    *white_distribution.entry(row.whites()).or_insert(0) += 1;
                }
            }
            Err(_) => failed += 1,
        }
    }

    let generated = count - failed;
    info!(count, generated, failed, relaxed, "survey finished");

    SurveyResult {
        puzzles: count,
        generated,
        failed,
        total_draws,
        average_draws: if generated == 0 {
            0.0
        } else {
            total_draws as f64 / generated as f64
        },
        max_draws,
        relaxed,
        white_distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

impl SurveyResult {
    /// Decoy rows counted in the white distribution
    #[must_use]
    pub fn decoy_rows(&self) -> usize {
        self.generated * DECOY_ROWS
    }
}
