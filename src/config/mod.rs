use crate::config::cli::Args;
use crate::error::{Result, SitemapError};
use clap::Parser;
use std::str::FromStr;
use tracing::Level;

pub(crate) mod cli;

/// Every URL in the sitemap is built on this.
pub const BASE_URL: &str = "https://trylearning.space";

pub struct Config {
    pub args: Args,
    pub log_level: Level,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = Level::from_str(&args.log_level)
            .map_err(|_| SitemapError::InvalidLogLevel(args.log_level.clone()))?;

        Ok(Self { args, log_level })
    }
}
