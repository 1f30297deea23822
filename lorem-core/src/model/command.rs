use std::sync::LazyLock;

use log::{debug, trace, warn};
use rand::Rng;
use regex::Regex;

use crate::error::{CommandError, ConfigError};
use crate::model::configuration::{ConfigSnapshot, Configuration};
use crate::model::formatter;
use crate::model::generator::Generator;
use crate::model::size::{SizeTier, UnitType};

/// `letters[digits]`, ex. `p3`, `wrap80`, `html`.
static LETTERS_FIRST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([a-z?]+)(\d*)$").expect("valid literal pattern"));

/// `[digits]letters`, ex. `3p`, `80wrap`.
static DIGITS_FIRST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d*)([a-z?]+)$").expect("valid literal pattern"));

/// Largest unit count a command may ask for.
pub const MAX_UNIT_COUNT: usize = 1000;

/// Largest column width `wrap` accepts.
pub const MAX_WRAP_WIDTH: usize = 1000;

/// Action selected by the letter part of an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Directive {
	Unit(UnitType),
	Size(SizeTier),
	Wrap,
	NoWrap,
	Html,
	Help,
	Settings,
}

impl Directive {
	fn from_code(code: &str) -> Option<Self> {
		let directive = match code {
			"p" => Directive::Unit(UnitType::Paragraph),
			"w" => Directive::Unit(UnitType::Word),
			"s" => Directive::Unit(UnitType::Sentence),
			"link" => Directive::Unit(UnitType::Link),
			"ol" => Directive::Unit(UnitType::OrderedList),
			"ul" => Directive::Unit(UnitType::UnorderedList),
			"short" => Directive::Size(SizeTier::Short),
			"medium" => Directive::Size(SizeTier::Medium),
			"long" => Directive::Size(SizeTier::Long),
			"vlong" => Directive::Size(SizeTier::VeryLong),
			"wrap" => Directive::Wrap,
			"nowrap" => Directive::NoWrap,
			"html" => Directive::Html,
			"?" | "help" => Directive::Help,
			"config" => Directive::Settings,
			_ => return None,
		};
		Some(directive)
	}

	/// Upper bound of the count this directive consumes, if it consumes one.
	fn count_limit(self) -> Option<usize> {
		match self {
			Directive::Unit(_) => Some(MAX_UNIT_COUNT),
			Directive::Wrap => Some(MAX_WRAP_WIDTH),
			_ => None,
		}
	}

	/// Mutates `conf`. The count only matters for units and `wrap`.
	fn apply(self, conf: &mut Configuration, count: Option<usize>) {
		match self {
			Directive::Unit(unit_type) => {
				conf.unit_type = unit_type;
				if let Some(count) = count {
					conf.unit_count = count;
				}
			}
			Directive::Size(size) => conf.unit_size = size,
			Directive::Wrap => {
				conf.is_wrapped = true;
				if let Some(width) = count.filter(|w| *w > 0) {
					conf.wrap_width = width;
				}
			}
			Directive::NoWrap => conf.is_wrapped = false,
			Directive::Html => conf.is_html = true,
			Directive::Help => conf.show_help = true,
			// handled by the parser before any mutation
			Directive::Settings => {}
		}
	}
}

/// Splits one option into its letter code and optional count.
///
/// # Errors
/// `UnrecognizedToken` if the option matches neither shape or if the
/// digits do not fit in a `usize`.
fn lex(token: &str) -> Result<(&str, Option<usize>), CommandError> {
	let unrecognized = || CommandError::UnrecognizedToken { token: token.to_owned() };

	let (code, digits) = if let Some(caps) = LETTERS_FIRST.captures(token) {
		(caps.get(1), caps.get(2))
	} else if let Some(caps) = DIGITS_FIRST.captures(token) {
		(caps.get(2), caps.get(1))
	} else {
		return Err(unrecognized());
	};

	let code = code.map(|m| m.as_str()).ok_or_else(unrecognized)?;
	let count = match digits.map(|m| m.as_str()).filter(|d| !d.is_empty()) {
		Some(digits) => Some(digits.parse::<usize>().map_err(|_| unrecognized())?),
		None => None,
	};
	Ok((code, count))
}

/// What a successfully parsed command asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	/// Generate text with this configuration (help may still be requested).
	Generate(Configuration),
	/// Open the settings surface, nothing to generate.
	OpenSettings,
}

/// Final result handed to the caller's sink.
///
/// The side effects are only described, the caller performs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Text to insert.
	Text(String),
	/// Open this URL, no text.
	OpenHelp(String),
	/// Open the settings surface, no text.
	OpenSettings,
}

impl Outcome {
	pub fn text(&self) -> Option<&str> {
		match self {
			Outcome::Text(text) => Some(text),
			_ => None,
		}
	}
}

/// Turns raw commands into configurations.
///
/// Built from one snapshot. A new snapshot means a new parser, so a parse
/// never observes a half-replaced configuration.
#[derive(Clone, Debug)]
pub struct CommandParser {
	delimiters: Regex,
	defaults: Configuration,
}

impl CommandParser {
	/// Compiles the snapshot delimiters and captures its defaults.
	///
	/// A zero default wrap width is replaced by the built-in one, defaults
	/// above the command limits are lowered to them.
	pub fn new(snapshot: &ConfigSnapshot) -> Result<Self, ConfigError> {
		let delimiters = snapshot.commands.split_reg_exp.to_regex()?;
		let mut defaults = snapshot.defaults.clone();
		if defaults.wrap_width == 0 {
			warn!("Default wrap width is 0, using {}", Configuration::default().wrap_width);
			defaults.wrap_width = Configuration::default().wrap_width;
		}
		if defaults.wrap_width > MAX_WRAP_WIDTH {
			warn!("Default wrap width {} is above {MAX_WRAP_WIDTH}, lowered", defaults.wrap_width);
			defaults.wrap_width = MAX_WRAP_WIDTH;
		}
		if defaults.unit_count > MAX_UNIT_COUNT {
			warn!("Default unit count {} is above {MAX_UNIT_COUNT}, lowered", defaults.unit_count);
			defaults.unit_count = MAX_UNIT_COUNT;
		}
		defaults.show_help = false;
		Ok(Self { delimiters, defaults })
	}

	/// Parses `raw`, whose first option (the invoking keyword) is ignored.
	///
	/// Stops at the first invalid option, nothing decoded before it is kept.
	/// A count above the limit of its directive makes the option invalid.
	pub fn parse(&self, raw: &str) -> Result<Command, CommandError> {
		let tokens: Vec<&str> = self.delimiters.split(raw.trim()).skip(1).collect();
		let mut conf = self.defaults.clone();

		for token in &tokens {
			if token.is_empty() {
				return Err(if tokens.len() == 1 {
					CommandError::EmptyCommand
				} else {
					CommandError::AdjacentDelimiters
				});
			}

			let (code, count) = lex(token)?;
			let directive = Directive::from_code(code).ok_or_else(|| CommandError::UnrecognizedOption {
				code: code.to_owned(),
				token: (*token).to_owned(),
			})?;
			if directive.count_limit().zip(count).is_some_and(|(limit, count)| count > limit) {
				return Err(CommandError::UnrecognizedToken { token: (*token).to_owned() });
			}
			trace!("Option {token:?} -> {directive:?} (count: {count:?})");

			if directive == Directive::Settings {
				return Ok(Command::OpenSettings);
			}
			directive.apply(&mut conf, count);
		}

		debug!("Resolved configuration: {conf:?}");
		Ok(Command::Generate(conf))
	}
}

/// Entry point combining the parser, the generator and the formatter.
#[derive(Clone, Debug)]
pub struct Lorem {
	snapshot: ConfigSnapshot,
	parser: CommandParser,
}

impl Lorem {
	/// # Errors
	/// Returns an error if the snapshot delimiters cannot be compiled.
	pub fn new(snapshot: ConfigSnapshot) -> Result<Self, ConfigError> {
		let parser = CommandParser::new(&snapshot)?;
		Ok(Self { snapshot, parser })
	}

	pub fn snapshot(&self) -> &ConfigSnapshot {
		&self.snapshot
	}

	/// Parses and runs `raw` with the thread-local random source.
	pub fn execute(&self, raw: &str) -> Result<Outcome, CommandError> {
		self.execute_with_rng(raw, rand::rng())
	}

	/// Parses and runs `raw` with the given random source.
	pub fn execute_with_rng<R: Rng>(&self, raw: &str, rng: R) -> Result<Outcome, CommandError> {
		match self.parser.parse(raw)? {
			Command::Generate(conf) => Ok(self.run_command(&conf, rng)),
			Command::OpenSettings => Ok(Outcome::OpenSettings),
		}
	}

	/// Generates and formats text for `conf`.
	///
	/// A help request wins over everything else and generates nothing.
	/// Counts above `MAX_UNIT_COUNT` are lowered to it.
	pub fn run_command<R: Rng>(&self, conf: &Configuration, rng: R) -> Outcome {
		if conf.show_help {
			return Outcome::OpenHelp(self.snapshot.commands.help_url.clone());
		}

		let count = conf.unit_count.min(MAX_UNIT_COUNT);
		let mut generator = Generator::with_rng(rng, conf.unit_language);
		let text = match conf.unit_type {
			UnitType::Paragraph => generator.paragraphs(count, conf.unit_size),
			UnitType::Sentence => generator.sentences(count, conf.unit_size),
			UnitType::Word => generator.words(count, conf.unit_size),
			UnitType::Link => generator.links(count),
			UnitType::OrderedList => generator.list(count, true),
			UnitType::UnorderedList => generator.list(count, false),
		};

		Outcome::Text(formatter::finalize(&text, conf))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lex_accepts_both_orders() {
		assert_eq!(lex("p3").unwrap(), ("p", Some(3)));
		assert_eq!(lex("3p").unwrap(), ("p", Some(3)));
		assert_eq!(lex("wrap80").unwrap(), ("wrap", Some(80)));
		assert_eq!(lex("?").unwrap(), ("?", None));
	}

	#[test]
	fn lex_letters_only_is_unambiguous() {
		assert_eq!(lex("p").unwrap(), ("p", None));
		assert_eq!(lex("medium").unwrap(), ("medium", None));
	}

	#[test]
	fn lex_rejects_digits_only_and_mixed() {
		for token in ["123", "p3p", "3p3", "P3", "p-3", "p 3"] {
			assert_eq!(lex(token), Err(CommandError::UnrecognizedToken { token: token.to_owned() }), "{token}");
		}
	}

	#[test]
	fn lex_rejects_oversized_counts() {
		let token = "p99999999999999999999999999";
		assert!(matches!(lex(token), Err(CommandError::UnrecognizedToken { .. })));
	}

	#[test]
	fn only_units_and_wrap_take_a_limited_count() {
		assert_eq!(Directive::Unit(UnitType::Word).count_limit(), Some(MAX_UNIT_COUNT));
		assert_eq!(Directive::Wrap.count_limit(), Some(MAX_WRAP_WIDTH));
		assert_eq!(Directive::Size(SizeTier::Long).count_limit(), None);
		assert_eq!(Directive::Html.count_limit(), None);
	}

	#[test]
	fn oversized_defaults_are_lowered() {
		let mut snapshot = ConfigSnapshot::default();
		snapshot.defaults.unit_count = usize::MAX;
		snapshot.defaults.wrap_width = usize::MAX;
		let parser = CommandParser::new(&snapshot).unwrap();
		assert_eq!(parser.defaults.unit_count, MAX_UNIT_COUNT);
		assert_eq!(parser.defaults.wrap_width, MAX_WRAP_WIDTH);
	}

	#[test]
	fn every_code_has_a_directive() {
		for code in ["p", "w", "s", "link", "ol", "ul", "short", "medium", "long", "vlong", "wrap", "nowrap", "html", "?", "help", "config"] {
			assert!(Directive::from_code(code).is_some(), "{code}");
		}
		assert!(Directive::from_code("xyz").is_none());
	}

	#[test]
	fn size_directives_ignore_counts() {
		let mut conf = Configuration::default();
		Directive::Size(SizeTier::Long).apply(&mut conf, Some(9));
		assert_eq!(conf.unit_size, SizeTier::Long);
		assert_eq!(conf.unit_count, Configuration::default().unit_count);
	}

	#[test]
	fn zero_wrap_width_is_ignored() {
		let mut conf = Configuration::default();
		Directive::Wrap.apply(&mut conf, Some(0));
		assert!(conf.is_wrapped);
		assert_eq!(conf.wrap_width, 80);
	}

	#[test]
	fn settings_stop_the_parse() {
		let parser = CommandParser::new(&ConfigSnapshot::default()).unwrap();
		assert_eq!(parser.parse("lorem_config_xyz"), Ok(Command::OpenSettings));
		assert!(parser.parse("lorem_xyz_config").is_err());
	}
}
