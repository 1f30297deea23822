use super::size::SizeTier::{self, Long as L, Medium as M, Short as S, VeryLong as V};

/// Read-only source material for the generator.
///
/// Holds one word list per concrete size tier and a table of fragment
/// patterns. A fragment pattern lists, in order, the tier of every word
/// making up one fragment.
///
/// # Invariants
/// - Exactly four word lists, indexed by `SizeTier::index`
/// - Every word list and every pattern is non-empty
/// - Patterns never contain `SizeTier::Any`
#[derive(Debug)]
pub struct WordBank {
	word_lists: [&'static [&'static str]; 4],
	fragment_patterns: &'static [&'static [SizeTier]],
}

impl WordBank {
	/// Returns the words of a concrete tier.
	///
	/// `Any` has no list of its own and yields `None`.
	pub fn words(&self, size: SizeTier) -> Option<&'static [&'static str]> {
		size.index().map(|i| self.word_lists[i])
	}

	/// Returns every fragment pattern.
	pub fn fragment_patterns(&self) -> &'static [&'static [SizeTier]] {
		self.fragment_patterns
	}

	/// Tiers eligible for a uniform random pick.
	pub fn sizes(&self) -> &'static [SizeTier] {
		&SizeTier::CONCRETE
	}
}

/// The bank shared by every generator.
pub static WORD_BANK: WordBank = WordBank {
	word_lists: [SHORT_WORDS, MEDIUM_WORDS, LONG_WORDS, VERY_LONG_WORDS],
	fragment_patterns: FRAGMENT_PATTERNS,
};

const SHORT_WORDS: &[&str] = &[
	"a", "ab", "ad", "an", "aut", "de", "do", "e", "ea", "est", "et", "eu", "ex", "hic", "id", "in",
	"ita", "ius", "mea", "mei", "mel", "mo", "ne", "nec", "nam", "no", "non", "per", "pri", "quo",
	"qui", "se", "sea", "sed", "sit", "sum", "te", "ut", "vel", "vix",
];

const MEDIUM_WORDS: &[&str] = &[
	"amet", "animi", "atqui", "audire", "causa", "clita", "dicam", "dolor", "dolore", "eirmod",
	"elitr", "enim", "ferri", "fugit", "graece", "ipsum", "justo", "labore", "lorem", "magna",
	"minim", "modus", "nibh", "nulla", "omnis", "possit", "quas", "quidam", "rebum", "sanctus",
	"semper", "summo", "tation", "tempor", "utinam", "veniam", "verear", "vidit", "vitae", "zril",
];

const LONG_WORDS: &[&str] = &[
	"accusam", "aliquip", "blandit", "commodo", "concludo", "deserunt", "dolores", "eleifend",
	"eligendi", "epicurei", "equidem", "expetenda", "facilisi", "fabulas", "feugiat", "gubergren",
	"habemus", "incorrupte", "invidunt", "lobortis", "maiestatis", "mediocrem", "molestie",
	"nostrud", "nonumy", "officiis", "omittam", "perpetua", "placerat", "postulant", "pertinax",
	"quaestio", "sadipscing", "sententiae", "suscipit", "tincidunt", "ullamcorper", "urbanitas",
	"voluptua", "vulputate",
];

const VERY_LONG_WORDS: &[&str] = &[
	"accommodare", "adipiscing", "appellantur", "comprehensam", "consectetuer", "consequuntur",
	"constituam", "definitiones", "delicatissimi", "dissentiunt", "efficiantur", "elaboraret",
	"exercitationem", "honestatis", "interesset", "intellegebat", "liberavisse", "mediocritatem",
	"necessitatibus", "neglegentur", "omnesque", "percipitur", "philosophia", "posidonium",
	"quaerendum", "reformidans", "reprehendunt", "scriptorem", "signiferumque", "suscipiantur",
	"temporibus", "theophrastus", "ullamcorper", "vituperatoribus", "voluptatibus",
];

const FRAGMENT_PATTERNS: &[&[SizeTier]] = &[
	&[S, M],
	&[M, S, L],
	&[S, M, S, M],
	&[L, S, M],
	&[M, M, S, L],
	&[S, L, S],
	&[M, V],
	&[S, V, S, M],
	&[L, M, S, S, M],
	&[M, S, M, L, S],
	&[V, S, L],
	&[S, M, M, S, L, M],
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_tier_has_words() {
		for size in SizeTier::CONCRETE {
			let words = WORD_BANK.words(size).unwrap();
			assert!(!words.is_empty(), "{size:?} has no words");
		}
		assert!(WORD_BANK.words(SizeTier::Any).is_none());
	}

	#[test]
	fn patterns_only_use_concrete_tiers() {
		assert!(!WORD_BANK.fragment_patterns().is_empty());
		for pattern in WORD_BANK.fragment_patterns() {
			assert!(!pattern.is_empty());
			assert!(pattern.iter().all(|size| *size != SizeTier::Any));
		}
	}

	#[test]
	fn random_selection_excludes_any() {
		assert_eq!(WORD_BANK.sizes().len(), 4);
		assert!(!WORD_BANK.sizes().contains(&SizeTier::Any));
	}
}
