use std::{num::NonZeroUsize, path::PathBuf};

use thiserror::Error;

use super::init::{DEFAULT_FILL_RATE, DEFAULT_SEED};
use crate::Strategy;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Settings of a single simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length of the square interior.
    pub size: usize,
    pub iterations: u64,
    pub output_dir: PathBuf,
    pub seed: u64,
    /// Probability of an interior cell being alive initially.
    pub fill_rate: f64,
    pub strategy: Strategy,
    /// Size of a dedicated rayon pool; `None` uses the global pool.
    pub threads: Option<NonZeroUsize>,
    /// Also run the sequential reference and compare.
    pub verify: bool,
    /// Print the grid before and after the run.
    pub print: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 1000,
            iterations: 1000,
            output_dir: PathBuf::from("."),
            seed: DEFAULT_SEED,
            fill_rate: DEFAULT_FILL_RATE,
            strategy: Strategy::default(),
            threads: None,
            verify: false,
            print: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name,
        value: value.to_owned(),
        reason: e.to_string(),
    })
}

impl Config {
    pub const USAGE: &'static str = "\
Usage: halo_life <problem size> <iterations> [output dir] [options]

Options:
    --strategy <seq|scoped|rayon>   how cells of a step are distributed (default: rayon)
    --threads <N>                   worker count for the scoped and rayon strategies
    --seed <S>                      seed of the initial state (default: 54321)
    --fill-rate <P>                 probability of a cell being alive (default: 0.5)
    --verify                        compare with the sequential reference
    --print                         print the grid before and after the run";

    /// Parse command line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            let mut value_of = |name: &'static str| {
                args.next().ok_or(ConfigError::MissingArgument(name))
            };
            match arg.as_str() {
                "--strategy" => {
                    config.strategy = parse_value("--strategy", &value_of("strategy")?)?
                }
                "--threads" => config.threads = Some(parse_value("--threads", &value_of("N")?)?),
                "--seed" => config.seed = parse_value("--seed", &value_of("S")?)?,
                "--fill-rate" => config.fill_rate = parse_value("--fill-rate", &value_of("P")?)?,
                "--verify" => config.verify = true,
                "--print" => config.print = true,
                s if s.starts_with("--") => return Err(ConfigError::Unexpected(s.to_owned())),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let size = positional
            .next()
            .ok_or(ConfigError::MissingArgument("problem size"))?;
        config.size = parse_value("problem size", &size)?;
        let iterations = positional
            .next()
            .ok_or(ConfigError::MissingArgument("iterations"))?;
        config.iterations = parse_value("iterations", &iterations)?;
        if let Some(dir) = positional.next() {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(extra) = positional.next() {
            return Err(ConfigError::Unexpected(extra));
        }

        if let (Strategy::Scoped { .. }, Some(threads)) = (config.strategy, config.threads) {
            config.strategy = Strategy::Scoped { threads };
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "problem size",
                value: self.size.to_string(),
                reason: "must be positive".to_owned(),
            });
        }
        if !(0.0..=1.0).contains(&self.fill_rate) {
            return Err(ConfigError::InvalidValue {
                name: "--fill-rate",
                value: self.fill_rate.to_string(),
                reason: "must be within [0, 1]".to_owned(),
            });
        }
        Ok(())
    }
}
