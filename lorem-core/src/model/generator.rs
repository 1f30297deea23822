use std::sync::LazyLock;

use rand::Rng;
use rand::rngs::ThreadRng;
use regex::{Captures, Regex};

use crate::model::language::Language;
use crate::model::size::SizeTier;
use crate::model::word_bank::{WORD_BANK, WordBank};

/// Tier used when a paragraph of `Any` size is requested.
pub const DEFAULT_UNIT_SIZE: SizeTier = SizeTier::Medium;

/// Target of every generated link.
pub const LINK_HREF: &str = "https://example.com";

/// Alphabetic runs swapped for glyphs in non-Latin languages.
static ALPHA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid literal pattern"));

/// Recursive placeholder text generator.
///
/// # Responsibilities
/// - Pick words, fragments, sentences and paragraphs from the `WordBank`
/// - Build link and list blocks around fragments
/// - Apply the language glyph substitution and word spacing
///
/// # Notes
/// - The random source is owned by the generator. Production code uses the
///   thread-local `rand::rng()`, tests inject a seeded `StdRng`.
/// - Recursion depth is bounded: every recursive call lowers the tier
///   toward `Short`, so `VeryLong` doubles exactly three times.
#[derive(Debug)]
pub struct Generator<R: Rng = ThreadRng> {
	rng: R,
	bank: &'static WordBank,
	language: Language,
}

impl Generator<ThreadRng> {
	/// Creates a generator backed by the thread-local random source.
	pub fn new(language: Language) -> Self {
		Self::with_rng(rand::rng(), language)
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator with an explicit random source.
	pub fn with_rng(rng: R, language: Language) -> Self {
		Self { rng, bank: &WORD_BANK, language }
	}

	/// Uniform pick. Callers only pass non-empty bank slices.
	fn pick<T: Copy>(&mut self, items: &[T]) -> T {
		items[self.rng.random_range(0..items.len())]
	}

	fn random_size(&mut self) -> SizeTier {
		let sizes = self.bank.sizes();
		self.pick(sizes)
	}

	/// Returns one random word of the given tier.
	///
	/// `Any` picks a random concrete tier for this word only. For
	/// non-Latin languages each alphabetic run of the word is replaced by a
	/// random glyph.
	pub fn word(&mut self, size: SizeTier) -> String {
		let size = match size {
			SizeTier::Any => self.random_size(),
			concrete => concrete,
		};
		let words = self.bank.words(size).unwrap_or_default();
		let word = self.pick(words);

		let glyphs = self.language.glyphs();
		if glyphs.is_empty() {
			return word.to_owned();
		}
		ALPHA_RUN.replace_all(word, |_: &Captures| self.pick(glyphs)).into_owned()
	}

	/// Returns the words of one random fragment pattern.
	pub fn fragment(&mut self) -> String {
		let patterns = self.bank.fragment_patterns();
		let pattern = self.pick(patterns);
		pattern
			.iter()
			.map(|size| self.word(*size))
			.collect::<Vec<_>>()
			.join(self.language.word_gap())
			.trim()
			.to_owned()
	}

	/// Joint between two half sentences: a short word or a comma, 50/50.
	pub fn sentence_interconnect(&mut self) -> String {
		let gap = self.language.word_gap();
		if self.rng.random_bool(0.5) {
			format!("{gap}{}{gap}", self.word(SizeTier::Short))
		} else {
			format!(",{gap}")
		}
	}

	/// Returns a sentence (without capital or full stop).
	///
	/// - `Any`: a random concrete tier
	/// - `Short`: a single fragment
	/// - longer tiers: two sentences one tier shorter, joined by an interconnect
	pub fn sentence(&mut self, size: SizeTier) -> String {
		match size {
			SizeTier::Any => {
				let size = self.random_size();
				self.sentence(size)
			}
			SizeTier::Short => self.fragment(),
			SizeTier::Medium | SizeTier::Long | SizeTier::VeryLong => {
				let smaller = size.shorter().unwrap_or(SizeTier::Short);
				let left = self.sentence(smaller);
				let inter = self.sentence_interconnect();
				let right = self.sentence(smaller);
				format!("{left}{inter}{right}")
			}
		}
	}

	/// Returns a paragraph.
	///
	/// - `Any`: `DEFAULT_UNIT_SIZE`
	/// - `Short`: 3 or 4 capitalized sentences of random size
	/// - longer tiers: two paragraphs one tier shorter
	pub fn paragraph(&mut self, size: SizeTier) -> String {
		let gap = self.language.word_gap();
		match size {
			SizeTier::Any => self.paragraph(DEFAULT_UNIT_SIZE),
			SizeTier::Short => {
				let count = self.rng.random_range(3..=4);
				(0..count)
					.map(|_| sentence_case(&self.sentence(SizeTier::Any)))
					.collect::<Vec<_>>()
					.join(gap)
					.trim()
					.to_owned()
			}
			SizeTier::Medium | SizeTier::Long | SizeTier::VeryLong => {
				let smaller = size.shorter().unwrap_or(SizeTier::Short);
				let first = self.paragraph(smaller);
				let second = self.paragraph(smaller);
				format!("{first}{gap}{second}")
			}
		}
	}

	/// `count` words of the given tier.
	pub fn words(&mut self, count: usize, size: SizeTier) -> String {
		(0..count)
			.map(|_| self.word(size))
			.collect::<Vec<_>>()
			.join(self.language.word_gap())
			.trim()
			.to_owned()
	}

	/// `count` capitalized sentences separated by blank lines.
	pub fn sentences(&mut self, count: usize, size: SizeTier) -> String {
		(0..count)
			.map(|_| sentence_case(&self.sentence(size)))
			.collect::<Vec<_>>()
			.join("\n\n")
			.trim()
			.to_owned()
	}

	/// `count` paragraphs separated by blank lines.
	pub fn paragraphs(&mut self, count: usize, size: SizeTier) -> String {
		(0..count)
			.map(|_| self.paragraph(size))
			.collect::<Vec<_>>()
			.join("\n\n")
			.trim()
			.to_owned()
	}

	/// `count` anchor blocks, one fragment each, separated by line breaks.
	pub fn links(&mut self, count: usize) -> String {
		(0..count)
			.map(|_| format!("<a href=\"{LINK_HREF}\">\n{}\n</a>", self.fragment()))
			.collect::<Vec<_>>()
			.join("<br/>\n")
	}

	/// One list container holding `count` items.
	pub fn list(&mut self, count: usize, ordered: bool) -> String {
		let items = (0..count)
			.map(|_| format!("<li>\n{}\n</li>", self.fragment()))
			.collect::<Vec<_>>()
			.join("\n");
		let tag = if ordered { "ol" } else { "ul" };
		format!("<{tag}>\n{items}\n</{tag}>")
	}
}

/// Upper-cases the first character and appends a full stop.
pub fn sentence_case(sentence: &str) -> String {
	let sentence = sentence.trim();
	let mut chars = sentence.chars();
	match chars.next() {
		Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn seeded(seed: u64) -> Generator<StdRng> {
		Generator::with_rng(StdRng::seed_from_u64(seed), Language::English)
	}

	fn is_bank_word(word: &str) -> bool {
		SizeTier::CONCRETE
			.iter()
			.filter_map(|size| WORD_BANK.words(*size))
			.any(|words| words.contains(&word))
	}

	#[test]
	fn word_comes_from_the_requested_tier() {
		let mut generator = seeded(1);
		for size in SizeTier::CONCRETE {
			for _ in 0..20 {
				let word = generator.word(size);
				assert!(WORD_BANK.words(size).unwrap().contains(&word.as_str()), "{word} not in {size:?}");
			}
		}
	}

	#[test]
	fn any_word_comes_from_some_tier() {
		let mut generator = seeded(2);
		for _ in 0..50 {
			assert!(is_bank_word(&generator.word(SizeTier::Any)));
		}
	}

	#[test]
	fn same_seed_same_text() {
		let a = seeded(42).paragraphs(3, SizeTier::Long);
		let b = seeded(42).paragraphs(3, SizeTier::Long);
		assert_eq!(a, b);
	}

	#[test]
	fn fragment_follows_a_pattern_length() {
		let lengths: Vec<usize> = WORD_BANK.fragment_patterns().iter().map(|p| p.len()).collect();
		let mut generator = seeded(3);
		for _ in 0..50 {
			let fragment = generator.fragment();
			let words: Vec<&str> = fragment.split(' ').collect();
			assert!(lengths.contains(&words.len()));
			assert!(words.iter().all(|w| is_bank_word(w)));
		}
	}

	#[test]
	fn short_sentence_is_one_fragment() {
		let max = WORD_BANK.fragment_patterns().iter().map(|p| p.len()).max().unwrap();
		let mut generator = seeded(4);
		for _ in 0..50 {
			let sentence = generator.sentence(SizeTier::Short);
			assert!(!sentence.contains(','));
			assert!(sentence.split_whitespace().count() <= max);
		}
	}

	/// `2^doublings` fragments joined by interconnects, drawn in the same
	/// order as `sentence` draws them.
	fn doubled_fragments(generator: &mut Generator<StdRng>, doublings: u32) -> String {
		if doublings == 0 {
			return generator.fragment();
		}
		let left = doubled_fragments(generator, doublings - 1);
		let inter = generator.sentence_interconnect();
		let right = doubled_fragments(generator, doublings - 1);
		format!("{left}{inter}{right}")
	}

	#[test]
	fn very_long_sentence_is_two_long_sentences() {
		for seed in 0..20 {
			let mut expected = seeded(seed);
			let left = expected.sentence(SizeTier::Long);
			let inter = expected.sentence_interconnect();
			let right = expected.sentence(SizeTier::Long);
			assert_eq!(seeded(seed).sentence(SizeTier::VeryLong), format!("{left}{inter}{right}"), "seed {seed}");
		}
	}

	#[test]
	fn each_tier_doubles_the_fragments() {
		let tiers = [(SizeTier::Short, 0), (SizeTier::Medium, 1), (SizeTier::Long, 2), (SizeTier::VeryLong, 3)];
		for seed in 0..20 {
			for (size, doublings) in tiers {
				let sentence = seeded(seed).sentence(size);
				assert_eq!(sentence, doubled_fragments(&mut seeded(seed), doublings), "{size:?}, seed {seed}");
			}
		}
	}

	#[test]
	fn interconnect_is_word_or_comma() {
		let mut generator = seeded(6);
		let mut saw_comma = false;
		let mut saw_word = false;
		for _ in 0..100 {
			let inter = generator.sentence_interconnect();
			if inter == ", " {
				saw_comma = true;
			} else {
				assert!(inter.starts_with(' ') && inter.ends_with(' '));
				assert!(WORD_BANK.words(SizeTier::Short).unwrap().contains(&inter.trim()));
				saw_word = true;
			}
		}
		assert!(saw_comma && saw_word);
	}

	#[test]
	fn counts_are_exact() {
		let mut generator = seeded(7);
		for count in [0, 1, 5] {
			let words = generator.words(count, SizeTier::Medium);
			assert_eq!(words.split_whitespace().count(), count);

			let sentences = generator.sentences(count, SizeTier::Long);
			let units = if sentences.is_empty() { 0 } else { sentences.split("\n\n").count() };
			assert_eq!(units, count);

			let paragraphs = generator.paragraphs(count, SizeTier::Short);
			let units = if paragraphs.is_empty() { 0 } else { paragraphs.split("\n\n").count() };
			assert_eq!(units, count);
		}
	}

	#[test]
	fn sentences_are_capitalized_and_closed() {
		let mut generator = seeded(8);
		for sentence in generator.sentences(10, SizeTier::Any).split("\n\n") {
			assert!(sentence.chars().next().unwrap().is_uppercase());
			assert!(sentence.ends_with('.'));
		}
	}

	#[test]
	fn short_paragraph_has_three_or_four_sentences() {
		let mut generator = seeded(9);
		for _ in 0..30 {
			let paragraph = generator.paragraph(SizeTier::Short);
			let stops = paragraph.matches('.').count();
			assert!((3..=4).contains(&stops), "{paragraph}");
		}
	}

	#[test]
	fn longer_paragraphs_double() {
		let mut generator = seeded(10);
		let stops = generator.paragraph(SizeTier::VeryLong).matches('.').count();
		assert!((24..=32).contains(&stops), "{stops}");
	}

	#[test]
	fn links_and_lists_wrap_fragments() {
		let mut generator = seeded(11);
		let links = generator.links(3);
		assert_eq!(links.matches("<a href=").count(), 3);
		assert_eq!(links.matches("<br/>\n").count(), 2);

		let list = generator.list(3, true);
		assert!(list.starts_with("<ol>\n") && list.ends_with("\n</ol>"));
		assert_eq!(list.matches("<li>").count(), 3);

		let list = generator.list(2, false);
		assert!(list.starts_with("<ul>\n") && list.ends_with("\n</ul>"));
		assert_eq!(list.matches("</li>").count(), 2);
	}

	#[test]
	fn zero_count_is_empty() {
		let mut generator = seeded(12);
		assert_eq!(generator.words(0, SizeTier::Any), "");
		assert_eq!(generator.links(0), "");
		assert_eq!(generator.list(0, true), "<ol>\n\n</ol>");
	}

	#[test]
	fn cjk_words_use_glyphs_without_spaces() {
		let mut generator = Generator::with_rng(StdRng::seed_from_u64(13), Language::SimplifiedChinese);
		let text = generator.sentence(SizeTier::Long);
		assert!(!text.contains(' '));
		assert!(!text.chars().any(|c| c.is_ascii_alphabetic()));
	}

	#[test]
	fn sentence_case_capitalizes() {
		assert_eq!(sentence_case("lorem ipsum"), "Lorem ipsum.");
		assert_eq!(sentence_case("  "), "");
	}
}
