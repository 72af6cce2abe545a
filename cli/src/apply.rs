#![deny(missing_docs)]

//! # Apply Pipeline
//!
//! Implements the pipeline: Read Scene -> Apply Edits -> Write Back.
//!
//! Each built-in edit scans the full (possibly already-modified) document,
//! so insertions from an earlier edit are visible to later ones. The final
//! success line is printed unconditionally, whether or not any anchor
//! actually matched.

use std::fs;
use std::path::PathBuf;
use tscn_patch_core::{insert_after, player_scene_edits, AppResult, DEFAULT_SCENE_PATH};

/// Arguments for the patch run.
#[derive(clap::Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Path to the player scene file (read and overwritten in place).
    #[clap(default_value = DEFAULT_SCENE_PATH)]
    pub scene_path: PathBuf,
}

/// Executes the patch pipeline.
///
/// Reads the scene as UTF-8, applies every built-in edit in order and
/// writes the result back to the same path. No backup or atomic replace;
/// any IO failure propagates and aborts the run.
pub fn execute(args: &ApplyArgs) -> AppResult<()> {
    let content = fs::read_to_string(&args.scene_path)?;

    let patched = apply_edits(&content)?;

    fs::write(&args.scene_path, patched)?;
    println!("Player scene modified successfully!");
    Ok(())
}

/// Applies every built-in edit in sequence, reporting match counts.
fn apply_edits(content: &str) -> AppResult<String> {
    let mut patched = content.to_string();
    for edit in player_scene_edits() {
        let outcome = insert_after(&patched, edit.anchor, edit.block)?;
        println!("{}: {} insertion(s)", edit.name, outcome.matches);
        patched = outcome.text;
    }
    Ok(patched)
}
