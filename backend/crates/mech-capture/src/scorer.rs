use rand::Rng;

const MIN_SCORE: f64 = 7.0;
const MAX_SCORE: f64 = 10.0;

/// Produces the score attached to a fresh upload.
pub trait ScoreSource: Send + Sync {
    fn score(&self) -> f64;
}

/// Stand-in until real analysis exists: uniform in [7.0, 10.0], one decimal.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderScorer;

impl ScoreSource for PlaceholderScorer {
    fn score(&self) -> f64 {
        let raw = rand::rng().random_range(MIN_SCORE..=MAX_SCORE);
        round_to_tenth(raw)
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
