//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Name completions are registered under.
pub const BIN_NAME: &str = "ecocalc";

/// Write the completion script for `shell`.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}
