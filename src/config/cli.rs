use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Project root holding the `g/`, `a/` and `c/` index folders
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
