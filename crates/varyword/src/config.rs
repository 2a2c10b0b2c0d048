use crate::error::{ConfigError, Result};
use crate::locale::{Locale, validate_locale};

pub const DEFAULT_NUM_VARIATIONS: i64 = 1;
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_REPLACEMENT_PROBABILITY: f64 = 0.3;

/// Settings for one run.
///
/// Built through [`Config::builder`]. Only the locale is validated; a
/// negative count means no variations and the probability is kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    text: String,
    num_variations: usize,
    locale: Locale,
    seed: Option<u64>,
    probability: f64,
}

impl Config {
    pub fn builder(text: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            text: text.into(),
            num_variations: DEFAULT_NUM_VARIATIONS,
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
            probability: DEFAULT_REPLACEMENT_PROBABILITY,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn num_variations(&self) -> usize {
        self.num_variations
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Unvalidated, raw settings as they come off the command line.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    text: String,
    num_variations: i64,
    locale: String,
    seed: Option<u64>,
    probability: f64,
}

impl ConfigBuilder {
    pub fn num_variations(mut self, n: i64) -> Self {
        self.num_variations = n;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Signed seeds are reinterpreted bit-for-bit as `u64`.
    pub fn seed(mut self, seed: Option<i64>) -> Self {
        self.seed = seed.map(|s| s as u64);
        self
    }

    pub fn probability(mut self, p: f64) -> Self {
        self.probability = p;
        self
    }

    /// Validate the locale and freeze the configuration.
    ///
    /// Counts below zero become zero. The probability is passed through
    /// untouched: anything at or below 0 never replaces a word, anything at
    /// or above 1 always does, and NaN never does.
    pub fn build(self) -> Result<Config> {
        let locale = validate_locale(&self.locale)?;
        let num_variations = usize::try_from(self.num_variations.max(0))
            .map_err(|_| ConfigError::CountTooLarge(self.num_variations))?;
        Ok(Config {
            text: self.text,
            num_variations,
            locale,
            seed: self.seed,
            probability: self.probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::builder("hello world").build().unwrap();
        assert_eq!(config.text(), "hello world");
        assert_eq!(config.num_variations(), 1);
        assert_eq!(config.locale(), Locale::EnUs);
        assert_eq!(config.seed(), None);
        assert_eq!(config.probability(), 0.3);
    }

    #[test]
    fn test_all_fields() {
        let config = Config::builder("a b c")
            .num_variations(5)
            .locale("fr_FR")
            .seed(Some(42))
            .probability(1.0)
            .build()
            .unwrap();
        assert_eq!(config.num_variations(), 5);
        assert_eq!(config.locale(), Locale::FrFr);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.probability(), 1.0);
    }

    #[test]
    fn test_invalid_locale() {
        let err = Config::builder("x").locale("xx_XX").build().unwrap_err();
        assert!(matches!(err, ConfigError::Locale { ref locale, .. } if locale == "xx_XX"));
    }

    #[test]
    fn test_locale_is_the_only_check() {
        let err = Config::builder("x")
            .locale("zz")
            .num_variations(-3)
            .probability(7.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Locale { .. }));

        assert!(
            Config::builder("x")
                .num_variations(-3)
                .probability(7.0)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_zero_variations_allowed() {
        let config = Config::builder("x").num_variations(0).build().unwrap();
        assert_eq!(config.num_variations(), 0);
    }

    #[test]
    fn test_negative_variations_become_zero() {
        let config = Config::builder("x").num_variations(-1).build().unwrap();
        assert_eq!(config.num_variations(), 0);
        let config = Config::builder("x").num_variations(i64::MIN).build().unwrap();
        assert_eq!(config.num_variations(), 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_largest_count_fits() {
        let config = Config::builder("x").num_variations(i64::MAX).build().unwrap();
        assert_eq!(config.num_variations(), i64::MAX as usize);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_oversized_count_reported() {
        let err = Config::builder("x").num_variations(i64::MAX).build().unwrap_err();
        assert_eq!(err, ConfigError::CountTooLarge(i64::MAX));
    }

    #[test]
    fn test_probability_passed_through() {
        for p in [-0.5, 0.0, 0.3, 1.0, 1.5] {
            let config = Config::builder("x").probability(p).build().unwrap();
            assert_eq!(config.probability(), p);
        }
        let config = Config::builder("x").probability(f64::NAN).build().unwrap();
        assert!(config.probability().is_nan());
    }

    #[test]
    fn test_negative_seed_keeps_bits() {
        let config = Config::builder("x").seed(Some(-1)).build().unwrap();
        assert_eq!(config.seed(), Some(u64::MAX));
    }
}
