//! Command-driven placeholder text generation library.
//!
//! This crate provides a small "lorem ipsum" engine including:
//! - Static word lists grouped by length tier
//! - Recursive, size-parameterized generation of words, sentences and paragraphs
//! - Link and list blocks with minimal HTML markup
//! - A compact command grammar (`p3medium`, `wrap80`, `html`, ...)
//! - Post-processing (punctuation, word wrap, HTML paragraphs)
//!
//! The crate never performs side effects itself: help and settings
//! requests are returned to the caller as [`model::command::Outcome`] values.

/// Core generation, formatting and command parsing logic.
pub mod model;

/// Error types returned by the parser and the configuration layer.
pub mod error;

/// Snapshot file helpers (load / save as JSON).
pub mod io;

pub use error::{CommandError, ConfigError};
pub use model::command::{Command, CommandParser, Lorem, MAX_UNIT_COUNT, MAX_WRAP_WIDTH, Outcome};
pub use model::configuration::{ConfigSnapshot, Configuration};
pub use model::generator::Generator;
pub use model::language::Language;
pub use model::size::{SizeTier, UnitType};
