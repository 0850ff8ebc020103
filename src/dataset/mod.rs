//! The bar sequence being sorted
//!
//! A [`Dataset`] pairs the bar values with one [`Highlight`] per bar. Both
//! vectors are private so their lengths can only change together:
//!
//! - [`Dataset::random`] / [`Dataset::regenerate`] build fresh values and an
//!   all-[`Highlight::Neutral`] highlight vector in one go
//! - every other mutator works on indices within the existing length
//!
//! The engine borrows a dataset mutably for the duration of a step; the
//! renderer only ever sees `&Dataset`.

mod highlight;

pub use highlight::Highlight;

use crate::config::Config;
use rand::Rng;

/// Bar values plus their parallel highlight states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    bars: Vec<u32>,
    highlights: Vec<Highlight>,
}

impl Dataset {
    /// Build a dataset from explicit values, bypassing the random generator
    pub fn from_values(bars: Vec<u32>) -> Self {
        let highlights = vec![Highlight::Neutral; bars.len()];
        Dataset { bars, highlights }
    }

    /// Generate `config.bar_count()` values uniformly in
    /// `[config.min_value, config.max_value]`
    pub fn random<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let bars = (0..config.bar_count())
            .map(|_| rng.random_range(config.min_value..=config.max_value))
            .collect();
        Self::from_values(bars)
    }

    /// Replace both sequences with a freshly generated set
    pub fn regenerate<R: Rng>(&mut self, config: &Config, rng: &mut R) {
        *self = Self::random(config, rng);
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn value(&self, index: usize) -> u32 {
        self.bars[index]
    }

    pub fn set(&mut self, index: usize, value: u32) {
        self.bars[index] = value;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.bars.swap(a, b);
    }

    pub fn highlight(&mut self, index: usize, state: Highlight) {
        self.highlights[index] = state;
    }

    /// Reset every highlight to [`Highlight::Neutral`]
    pub fn clear_highlights(&mut self) {
        self.highlights.fill(Highlight::Neutral);
    }

    /// Iterate `(value, highlight)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, Highlight)> + '_ {
        self.bars.iter().copied().zip(self.highlights.iter().copied())
    }

    pub fn is_sorted(&self) -> bool {
        self.bars.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_respects_bounds() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = Dataset::random(&config, &mut rng);

        assert_eq!(dataset.len(), 45);
        assert_eq!(dataset.highlights().len(), dataset.len());
        assert!(dataset
            .bars()
            .iter()
            .all(|&v| (config.min_value..=config.max_value).contains(&v)));
        assert!(dataset.highlights().iter().all(|h| h.is_neutral()));
    }

    #[test]
    fn test_regenerate_resets_highlights() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut dataset = Dataset::random(&config, &mut rng);
        dataset.highlight(0, Highlight::Sorted);
        dataset.highlight(44, Highlight::Merging);

        let before = dataset.bars().to_vec();
        dataset.regenerate(&config, &mut rng);

        assert_eq!(dataset.highlights().len(), dataset.len());
        assert!(dataset.highlights().iter().all(|h| h.is_neutral()));
        assert_ne!(dataset.bars(), before.as_slice());
    }

    #[test]
    fn test_swap_keeps_highlights_in_place() {
        let mut dataset = Dataset::from_values(vec![5, 3, 8]);
        dataset.highlight(0, Highlight::ActiveA);
        dataset.swap(0, 1);

        assert_eq!(dataset.bars(), &[3, 5, 8]);
        assert_eq!(dataset.highlights()[0], Highlight::ActiveA);
        assert!(dataset.is_sorted());
    }

    #[test]
    fn test_empty_dataset_is_sorted() {
        let dataset = Dataset::from_values(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.is_sorted());
    }
}
