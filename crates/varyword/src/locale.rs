use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Locales the word source has vocabularies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    FrFr,
    DeDe,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::EnUs, Locale::EnGb, Locale::FrFr, Locale::DeDe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EnGb => "en_GB",
            Locale::FrFr => "fr_FR",
            Locale::DeDe => "de_DE",
        }
    }

    /// The allow-list rendered for error messages, e.g. `en_US, en_GB, fr_FR, de_DE`.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(Locale::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_locale(s)
    }
}

/// Check a locale string against the allow-list.
///
/// Matching is exact: `en_us` and `en-US` are rejected.
pub fn validate_locale(locale: &str) -> Result<Locale, ConfigError> {
    Locale::ALL
        .into_iter()
        .find(|l| l.as_str() == locale)
        .ok_or_else(|| ConfigError::Locale {
            locale: locale.to_string(),
            allowed: Locale::allowed(),
        })
}
