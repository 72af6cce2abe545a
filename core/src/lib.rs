#![deny(missing_docs)]

//! # tscn-patch Core
//!
//! Core library for the one-shot Godot scene-file patch.

/// Shared error types.
pub mod error;

/// Built-in scene edit definitions.
pub mod edits;

/// Text patching logic.
pub mod patcher;

pub use edits::{player_scene_edits, SceneEdit, DEFAULT_SCENE_PATH};
pub use error::{AppError, AppResult};
pub use patcher::{insert_after, PatchOutcome};
