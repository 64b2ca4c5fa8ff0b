// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use owner_lines_engine::config::{Config, ConfigBuilder, MatchRules, WalkOptionsBuilder};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = WalkOptionsBuilder::default()
            .root(args.root)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        ConfigBuilder::default()
            .walk(walk)
            .output_path(args.output)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
