#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod generate;
pub mod locale;
pub mod words;

pub use config::{Config, ConfigBuilder};
pub use error::{ConfigError, Result, WordSourceError};
pub use generate::{Generator, generate, tokens};
pub use locale::{Locale, validate_locale};
pub use words::{LocaleWords, WordList, WordSource};
