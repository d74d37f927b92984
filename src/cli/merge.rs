// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::cli::{Args, Config};

impl Args {
    /// Load a configuration file and merge it into these arguments
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }

    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values.
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output (only override defaults, not explicit CLI values)
        if self.input == DEFAULT_INPUT && config.input.is_some() {
            self.input = config.input.unwrap();
        }
        if self.output == DEFAULT_OUTPUT && config.output.is_some() {
            self.output = config.output.unwrap();
        }

        // Flags: config can enable, an explicit CLI switch always wins
        if !self.dry_run {
            self.dry_run = config.dry_run.unwrap_or(false);
        }

        self
    }
}
