//! Command dispatch: bridges CLI args -> engine calls -> output formatting.

pub mod config_cmd;
pub mod presets;
pub mod streaming;
pub mod transfer;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Dispatch a calculator command to the appropriate handler.
pub fn dispatch(cmd: Command, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Transfer(args) => transfer::handle(args, config, global),
        Command::Streaming(args) => streaming::handle(args, config, global),
        Command::Presets(args) => {
            presets::handle(&args, config, global);
            Ok(())
        }
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
