use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use varyword::{Config, ConfigError, Generator, config};

#[derive(Parser, Debug)]
#[command(name = "varyword")]
#[command(
    about = "Swap random words in a string for locale-flavored placeholder words",
    long_about = "Replaces each word of the input, with a given probability, by a random \
                  placeholder word from a locale vocabulary. Prints one line per variation."
)]
struct Cli {
    /// The input string to vary
    input_string: String,

    /// Number of variations to generate
    #[arg(
        short,
        long = "num_variations",
        visible_alias = "num-variations",
        default_value_t = config::DEFAULT_NUM_VARIATIONS,
        allow_negative_numbers = true
    )]
    num_variations: i64,

    /// Vocabulary locale (en_US, en_GB, fr_FR, de_DE)
    #[arg(short, long, default_value = config::DEFAULT_LOCALE)]
    locale: String,

    /// Seed for reproducible output
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Probability of replacing each word
    #[arg(
        long = "word_replacement_probability",
        visible_alias = "word-replacement-probability",
        default_value_t = config::DEFAULT_REPLACEMENT_PROBABILITY,
        allow_negative_numbers = true
    )]
    word_replacement_probability: f64,
}

impl Cli {
    fn into_config(self) -> Result<Config, ConfigError> {
        Config::builder(self.input_string)
            .num_variations(self.num_variations)
            .locale(self.locale)
            .seed(self.seed)
            .probability(self.word_replacement_probability)
            .build()
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("varyword=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    debug!(
        locale = %config.locale(),
        seed = ?config.seed(),
        "Starting generation"
    );
    let mut generator = Generator::from_config(config);
    for line in generator.variations(config.text(), config.num_variations()) {
        writeln!(out, "{}", line).context("Failed to write variation to stdout")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = cli
        .into_config()
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(config_err) = e.downcast_ref::<ConfigError>() {
                error!("Invalid input: {}", config_err);
            } else {
                error!("An unexpected error occurred: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
