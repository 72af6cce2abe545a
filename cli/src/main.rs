#![deny(missing_docs)]

//! # tscn-patch CLI
//!
//! Command line entry point for the one-shot player-scene patch: read the
//! scene file, apply the built-in edits, overwrite the file in place.

use clap::Parser;
use tscn_patch_core::AppResult;

mod apply;

#[derive(Parser, Debug)]
#[clap(author, version, about = "One-shot Godot player-scene patcher")]
struct Cli {
    #[clap(flatten)]
    args: apply::ApplyArgs,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    apply::execute(&cli.args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
