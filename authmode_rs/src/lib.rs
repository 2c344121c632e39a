//! # authmode
//!
//! Batch migration of `AuthenticationMode` settings across a tree of JSON
//! files. Every `.json` file under a root directory is parsed, each
//! `AuthenticationMode` holding the direction's source value is rewritten to
//! the target value, and changed files are written back with the indentation
//! width they were found with.
//!
//! ## Pipeline (per file)
//!
//! ```text
//! fs_utils::find_json_files -> codec::read_json_file
//!     -> mutator::update_auth_mode -> codec::write_json_file
//! ```
//!
//! Paths containing `LocalRunOutputs` are never touched. Per-file failures
//! (empty, undecodable, invalid JSON, unwritable) are reported and skipped.
//!
//! ## Library Usage
//!
//! ```rust
//! use authmode::mutator::update_auth_mode;
//! use authmode::types::Direction;
//! use serde_json::json;
//!
//! let mut doc = json!({"Db": {"AuthenticationMode": "ConnectionString"}});
//! assert!(update_auth_mode(&mut doc, Direction::ConnectionString2Msi));
//! assert_eq!(doc["Db"]["AuthenticationMode"], "Msi");
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! authmode --direction ConnectionString2Msi
//! authmode --direction Msi2ConnectionString --root ./deploy --strict
//! ```

/// Command-line definitions and the top-level run.
pub mod cli;

/// JSON decode/encode with indentation inference.
///
/// - [`detect_indentation`](codec::detect_indentation) - smallest leading-space run
/// - [`read_json_file`](codec::read_json_file) / [`write_json_file`](codec::write_json_file)
pub mod codec;

pub mod colors;

/// Optional `.authmode/config.toml` loading.
pub mod config;

/// Per-file error taxonomy ([`CodecError`](error::CodecError)).
pub mod error;

/// Candidate file discovery with path-marker exclusion.
pub mod fs_utils;

/// Recursive `AuthenticationMode` rewrite over a `serde_json::Value` tree.
pub mod mutator;

/// Per-file pipeline and the batch loop.
pub mod runner;

/// Shared types: [`Direction`](types::Direction), [`FileOutcome`](types::FileOutcome),
/// [`RunSummary`](types::RunSummary) and constants.
pub mod types;

pub use error::CodecError;
pub use types::{Direction, FileOutcome, RunSummary};
