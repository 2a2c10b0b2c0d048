//! Placeholder word sources.
//!
//! The generator only needs one capability from a word source: produce a
//! word. [`LocaleWords`] is the real implementation, drawing uniformly from a
//! vocabulary compiled into the binary for each [`Locale`]. Tests and
//! embedders can plug in anything else that implements [`WordSource`].

use std::sync::LazyLock;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::error::WordSourceError;
use crate::locale::Locale;

/// Anything that can hand out replacement words.
pub trait WordSource {
    fn word(&mut self) -> Result<String, WordSourceError>;
}

impl<W: WordSource + ?Sized> WordSource for &mut W {
    fn word(&mut self) -> Result<String, WordSourceError> {
        (**self).word()
    }
}

impl<W: WordSource + ?Sized> WordSource for Box<W> {
    fn word(&mut self) -> Result<String, WordSourceError> {
        (**self).word()
    }
}

/// A newline-separated vocabulary. Blank lines and surrounding whitespace
/// are dropped.
pub struct WordList {
    words: Vec<&'static str>,
}

impl WordList {
    pub fn new(data: &'static str) -> Self {
        Self {
            words: data
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    pub fn choose(&self, rng: &mut StdRng) -> Option<&'static str> {
        self.words.choose(rng).copied()
    }
}

static EN_US: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(include_str!("../words/en_US.txt")));
static EN_GB: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(include_str!("../words/en_GB.txt")));
static FR_FR: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(include_str!("../words/fr_FR.txt")));
static DE_DE: LazyLock<WordList> =
    LazyLock::new(|| WordList::new(include_str!("../words/de_DE.txt")));

/// The embedded vocabulary for `locale`.
pub fn vocabulary(locale: Locale) -> &'static WordList {
    match locale {
        Locale::EnUs => &EN_US,
        Locale::EnGb => &EN_GB,
        Locale::FrFr => &FR_FR,
        Locale::DeDe => &DE_DE,
    }
}

/// Uniform draws from a locale's embedded vocabulary, with its own random
/// stream.
pub struct LocaleWords {
    locale: Locale,
    list: &'static WordList,
    rng: StdRng,
}

impl LocaleWords {
    pub fn new(locale: Locale, rng: StdRng) -> Self {
        Self {
            locale,
            list: vocabulary(locale),
            rng,
        }
    }

    pub fn seeded(locale: Locale, seed: u64) -> Self {
        Self::new(locale, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(locale: Locale) -> Self {
        Self::new(locale, StdRng::from_os_rng())
    }
}

impl WordSource for LocaleWords {
    fn word(&mut self) -> Result<String, WordSourceError> {
        self.list
            .choose(&mut self.rng)
            .map(str::to_string)
            .ok_or_else(|| WordSourceError::EmptyList(self.locale.to_string()))
    }
}
