use regex::Regex;
use serde::{Deserialize, Serialize};

use super::language::Language;
use super::size::{SizeTier, UnitType};
use crate::error::ConfigError;

/// Page opened when a command asks for help.
pub const DEFAULT_HELP_URL: &str = "https://atom.io/packages/lorem";

/// Fully resolved settings for one generation.
///
/// A fresh copy is cloned from the snapshot defaults for every command,
/// then mutated option by option. It is never shared between calls.
///
/// # Invariants
/// - `wrap_width > 0`
/// - `show_help` always starts `false` (never read from a snapshot)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
	pub unit_type: UnitType,
	pub unit_count: usize,
	pub unit_size: SizeTier,
	pub is_wrapped: bool,
	pub wrap_width: usize,
	#[serde(rename = "isHTML")]
	pub is_html: bool,
	#[serde(skip)]
	pub show_help: bool,
	pub unit_language: Language,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			unit_type: UnitType::Paragraph,
			unit_count: 1,
			unit_size: SizeTier::Medium,
			is_wrapped: false,
			wrap_width: 80,
			is_html: false,
			show_help: false,
			unit_language: Language::English,
		}
	}
}

/// Literal strings splitting a raw command into options.
///
/// Kept in the order given, duplicates are ignored when compiling.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct DelimiterSet(Vec<String>);

impl DelimiterSet {
	pub fn new<I, S>(delimiters: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(delimiters.into_iter().map(Into::into).collect())
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Compiles the set into one alternation of escaped literals.
	///
	/// # Errors
	/// - `EmptyDelimiters` if the set is empty
	/// - `EmptyDelimiter` if one of the delimiters is `""`
	pub fn to_regex(&self) -> Result<Regex, ConfigError> {
		if self.0.is_empty() {
			return Err(ConfigError::EmptyDelimiters);
		}

		let mut seen: Vec<&str> = Vec::with_capacity(self.0.len());
		for delimiter in &self.0 {
			if delimiter.is_empty() {
				return Err(ConfigError::EmptyDelimiter);
			}
			if !seen.contains(&delimiter.as_str()) {
				seen.push(delimiter.as_str());
			}
		}

		let pattern = seen.iter().map(|d| regex::escape(d)).collect::<Vec<_>>().join("|");
		Ok(Regex::new(&pattern)?)
	}
}

impl Default for DelimiterSet {
	fn default() -> Self {
		Self::new(["_", " "])
	}
}

/// Command-related settings of a snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Commands {
	pub split_reg_exp: DelimiterSet,
	pub help_url: String,
}

impl Default for Commands {
	fn default() -> Self {
		Self {
			split_reg_exp: DelimiterSet::default(),
			help_url: DEFAULT_HELP_URL.to_owned(),
		}
	}
}

/// Settings handed over by whoever hosts the generator.
///
/// The host may replace it between two commands, never during one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigSnapshot {
	pub defaults: Configuration,
	pub commands: Commands,
}

impl ConfigSnapshot {
	/// Parses a snapshot from its JSON form.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Serializes the snapshot to pretty JSON.
	pub fn to_json(&self) -> Result<String, ConfigError> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
