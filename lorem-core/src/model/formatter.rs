//! Post-processing of generated text.
//!
//! The steps always run in this order:
//! 1. punctuation substitution
//! 2. word wrap (paragraphs, sentences and words only)
//! 3. HTML paragraph wrap (everything but lists)

use std::sync::LazyLock;

use regex::Regex;

use crate::model::configuration::Configuration;
use crate::model::language::Language;

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid literal pattern"));

/// Replaces every `,` and `.` with the language's own glyphs, in one pass.
pub fn punctuate(text: &str, language: Language) -> String {
	let (pause, stop) = (language.soft_pause(), language.full_stop());
	text.chars()
		.map(|c| match c {
			',' => pause,
			'.' => stop,
			other => other,
		})
		.collect()
}

/// Reflows every line of `text` so that no line exceeds `width` characters.
///
/// - Existing line breaks and blank lines are kept
/// - Words are packed greedily, separated by one space
/// - A word longer than `width` is cut into `width`-sized pieces
///
/// Running it twice with the same width gives the same text.
pub fn word_wrap(text: &str, width: usize) -> String {
	let width = width.max(1);
	text.split('\n').map(|line| wrap_line(line, width)).collect::<Vec<_>>().join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut current_len = 0;

	for word in line.split_whitespace() {
		for piece in split_long_word(word, width) {
			let piece_len = piece.chars().count();
			if current_len > 0 && current_len + 1 + piece_len > width {
				lines.push(std::mem::take(&mut current));
				current_len = 0;
			}
			if current_len > 0 {
				current.push(' ');
				current_len += 1;
			}
			current.push_str(piece);
			current_len += piece_len;
		}
	}
	lines.push(current);
	lines.join("\n")
}

/// Cuts `word` on char boundaries into chunks of at most `width` chars.
fn split_long_word(word: &str, width: usize) -> Vec<&str> {
	let mut pieces = Vec::new();
	let mut rest = word;
	while rest.chars().count() > width {
		let cut = rest.char_indices().nth(width).map(|(i, _)| i).unwrap_or(rest.len());
		let (head, tail) = rest.split_at(cut);
		pieces.push(head);
		rest = tail;
	}
	pieces.push(rest);
	pieces
}

/// Encloses `text` in paragraph tags.
///
/// When `split_paragraphs` is set, every blank-line separator becomes a
/// paragraph boundary.
pub fn html_wrap(text: &str, split_paragraphs: bool) -> String {
	let body = if split_paragraphs {
		BLANK_LINES.replace_all(text, "\n</p>\n<p>\n").into_owned()
	} else {
		text.to_owned()
	};
	format!("<p>\n{body}\n</p>")
}

/// Applies every formatting step allowed by `conf` to freshly generated text.
///
/// Links and lists are never wrapped, lists never get paragraph tags.
pub fn finalize(text: &str, conf: &Configuration) -> String {
	let mut text = punctuate(text, conf.unit_language);

	if conf.is_wrapped && conf.unit_type.allows_wrap() {
		text = word_wrap(&text, conf.wrap_width);
	}

	if conf.is_html && conf.unit_type.allows_html() {
		text = html_wrap(&text, conf.unit_type.splits_html_paragraphs());
	}

	text
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::size::UnitType;

	#[test]
	fn punctuation_is_substituted_once() {
		let text = "Lorem, ipsum. Dolor, sit, amet.";
		let out = punctuate(text, Language::SimplifiedChinese);
		assert_eq!(out, "Lorem， ipsum。 Dolor， sit， amet。");
		assert_eq!(out.chars().count(), text.chars().count());
		assert_eq!(punctuate(text, Language::English), text);
	}

	#[test]
	fn japanese_uses_ideographic_comma() {
		assert_eq!(punctuate("a,b.", Language::Japanese), "a、b。");
	}

	#[test]
	fn wrap_respects_width() {
		let text = "lorem ipsum dolor sit amet consectetuer adipiscing elit sed diam nonumy";
		let wrapped = word_wrap(text, 20);
		for line in wrapped.lines() {
			assert!(line.chars().count() <= 20, "{line}");
		}
		assert_eq!(wrapped.split_whitespace().collect::<Vec<_>>(), text.split_whitespace().collect::<Vec<_>>());
	}

	#[test]
	fn wrap_is_idempotent() {
		let text = "Lorem ipsum dolor sit amet.\n\nConsectetuer adipiscing elit, sed diam nonumy eirmod tempor.";
		for width in [5, 12, 30, 80] {
			let once = word_wrap(text, width);
			assert_eq!(word_wrap(&once, width), once);
		}
	}

	#[test]
	fn wrap_keeps_blank_lines() {
		assert_eq!(word_wrap("a b\n\nc d", 80), "a b\n\nc d");
	}

	#[test]
	fn wrap_cuts_unspaced_text() {
		assert_eq!(word_wrap("的一是在不了有和", 3), "的一是\n在不了\n有和");
	}

	#[test]
	fn html_wrap_splits_on_blank_lines() {
		assert_eq!(html_wrap("a\n\n\nb", true), "<p>\na\n</p>\n<p>\nb\n</p>");
		assert_eq!(html_wrap("a\n\nb", false), "<p>\na\n\nb\n</p>");
	}

	#[test]
	fn lists_are_never_wrapped_nor_tagged() {
		let conf = Configuration {
			unit_type: UnitType::OrderedList,
			is_wrapped: true,
			wrap_width: 3,
			is_html: true,
			..Configuration::default()
		};
		let list = "<ol>\n<li>\nlorem ipsum dolor\n</li>\n</ol>";
		assert_eq!(finalize(list, &conf), list);
	}

	#[test]
	fn links_get_outer_paragraph_but_no_wrap() {
		let conf = Configuration {
			unit_type: UnitType::Link,
			is_wrapped: true,
			wrap_width: 3,
			is_html: true,
			..Configuration::default()
		};
		let link = "<a href=\"x\">\nlorem ipsum\n</a>";
		assert_eq!(finalize(link, &conf), format!("<p>\n{link}\n</p>"));
	}

	#[test]
	fn steps_run_in_order() {
		let conf = Configuration {
			unit_type: UnitType::Paragraph,
			is_wrapped: true,
			wrap_width: 10,
			is_html: true,
			..Configuration::default()
		};
		let out = finalize("Lorem ipsum dolor.\n\nSit amet.", &conf);
		assert_eq!(out, "<p>\nLorem\nipsum\ndolor.\n</p>\n<p>\nSit amet.\n</p>");
	}
}
