//! Top-level module for the placeholder text system.
//!
//! This module groups:
//! - Size tiers and unit types (`SizeTier`, `UnitType`)
//! - The static word bank (`WordBank`)
//! - Display languages and their punctuation (`Language`)
//! - Per-call configuration and the external snapshot (`Configuration`, `ConfigSnapshot`)
//! - The recursive text generator (`Generator`)
//! - Post-processing (`formatter`)
//! - Command parsing and dispatch (`CommandParser`, `Lorem`)

/// Size tiers and structural unit types.
pub mod size;

/// Read-only word lists and fragment patterns.
///
/// Loaded once, never mutated.
pub mod word_bank;

/// Display languages: glyph lists, punctuation and word spacing.
pub mod language;

/// Per-command configuration, delimiter set and snapshot.
pub mod configuration;

/// Recursive generation of words, sentences, paragraphs, links and lists.
///
/// All randomness comes from an injected `rand::Rng`.
pub mod generator;

/// Punctuation substitution, word wrap and HTML wrap.
pub mod formatter;

/// Command tokenizer, option decoding and unit dispatch.
pub mod command;
