//! Probabilistic word substitution.
//!
//! Each token of the input is independently replaced with probability `p`.
//! A replaced token becomes one of three fresh draws from the word source,
//! picked uniformly. Draws and coin flips come from an explicit random
//! stream so a seeded run is reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error};

use crate::config::Config;
use crate::words::{LocaleWords, WordSource};

/// Number of candidate words drawn per replacement.
pub const CANDIDATES_PER_REPLACEMENT: usize = 3;

/// Split on whitespace runs. Delimiters are discarded.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Produce one variation of `text`.
///
/// Tokens are rejoined with single spaces, so `"a   b\tc"` at probability 0
/// comes back as `"a b c"`. A word source failure keeps the original token.
pub fn generate<R, W>(text: &str, probability: f64, rng: &mut R, source: &mut W) -> String
where
    R: Rng,
    W: WordSource + ?Sized,
{
    tokens(text)
        .map(|word| {
            if rng.random::<f64>() < probability {
                replace_word(word, &mut *rng, &mut *source)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn replace_word<R, W>(word: &str, rng: &mut R, source: &mut W) -> String
where
    R: Rng,
    W: WordSource + ?Sized,
{
    let candidates: Result<Vec<String>, _> = (0..CANDIDATES_PER_REPLACEMENT)
        .map(|_| source.word())
        .collect();
    match candidates {
        Ok(mut candidates) if !candidates.is_empty() => {
            let pick = rng.random_range(0..candidates.len());
            candidates.swap_remove(pick)
        }
        Ok(_) => word.to_string(),
        Err(e) => {
            error!(word, error = %e, "Error replacing word");
            word.to_string()
        }
    }
}

/// Owns the random stream and word source for a run.
pub struct Generator<W = LocaleWords> {
    rng: StdRng,
    source: W,
    probability: f64,
}

impl Generator<LocaleWords> {
    /// Set up the streams for `config`.
    ///
    /// With a seed, both the coin-flip stream and the word source are seeded
    /// from it; otherwise both come from the OS.
    pub fn from_config(config: &Config) -> Self {
        let locale = config.locale();
        let (rng, source) = match config.seed() {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                LocaleWords::seeded(locale, seed),
            ),
            None => (StdRng::from_os_rng(), LocaleWords::from_os_rng(locale)),
        };
        Self::new(rng, source, config.probability())
    }
}

impl<W: WordSource> Generator<W> {
    pub fn new(rng: StdRng, source: W, probability: f64) -> Self {
        Self {
            rng,
            source,
            probability,
        }
    }

    pub fn generate_one(&mut self, text: &str) -> String {
        generate(text, self.probability, &mut self.rng, &mut self.source)
    }

    /// Lazily produce `n` variations, each advancing the shared streams.
    pub fn variations<'a>(
        &'a mut self,
        text: &'a str,
        n: usize,
    ) -> impl Iterator<Item = String> + 'a {
        debug!(n, probability = self.probability, "Generating variations");
        (0..n).map(move |_| self.generate_one(text))
    }
}
