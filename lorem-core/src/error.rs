use thiserror::Error;

/// Errors produced while decoding a raw command.
///
/// Every variant is a user input error. The message is meant to be shown
/// as-is by whatever displays the generated text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
	/// Nothing but a delimiter follows the command keyword (ex. `lorem_`).
	#[error("Unrecognized option: nothing follows the command keyword.")]
	EmptyCommand,

	/// Two delimiters next to each other produced an empty option (ex. `lorem__p3`).
	#[error("Two or more delimiter characters adjacent to each other.")]
	AdjacentDelimiters,

	/// The option matches neither `letters[digits]` nor `[digits]letters`.
	#[error("Unrecognized option \"{token}\".")]
	UnrecognizedToken { token: String },

	/// The option is well formed but its letter code has no meaning.
	#[error("Unrecognized option '{code}' in \"{token}\".")]
	UnrecognizedOption { code: String, token: String },
}

/// Errors produced while building or loading a configuration snapshot.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("the delimiter set is empty")]
	EmptyDelimiters,

	#[error("the delimiter set contains an empty delimiter")]
	EmptyDelimiter,

	#[error("invalid delimiter pattern: {0}")]
	Pattern(#[from] regex::Error),

	#[error("cannot access snapshot file: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid snapshot: {0}")]
	Json(#[from] serde_json::Error),
}
