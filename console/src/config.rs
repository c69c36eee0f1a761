//! Console configuration.
use std::env;
use std::path::PathBuf;

use uno_engine::config::RoundConfig;

#[derive(Clone, Debug, Default)]
pub struct ConsoleConfig {
    /// Where the win/loss tally lives. Asked for interactively when unset.
    pub save_file: Option<PathBuf>,
    pub round: RoundConfig,
}

impl ConsoleConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `UNO_SAVE_FILE` - tally file path
    /// - everything [`RoundConfig::from_env`] reads
    pub fn from_env() -> Self {
        Self {
            save_file: env::var_os("UNO_SAVE_FILE").map(PathBuf::from),
            round: RoundConfig::from_env(),
        }
    }
}
