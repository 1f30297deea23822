use serde::{Deserialize, Serialize};

/// Coarse length knob applied to words, sentences and paragraphs.
///
/// The numeric value doubles as a recursion depth: a sentence of tier `n`
/// is two sentences of tier `n - 1`, down to `Short`.
///
/// # Invariants
/// - `Any` is resolved to a concrete tier at generation time
/// - Concrete tiers are ordered `Short < Medium < Long < VeryLong`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SizeTier {
	Any = 0,
	Short = 1,
	#[default]
	Medium = 2,
	Long = 3,
	#[serde(rename = "Very Long", alias = "VeryLong")]
	VeryLong = 4,
}

impl SizeTier {
	/// All tiers except `Any`, in increasing order.
	pub const CONCRETE: [SizeTier; 4] = [SizeTier::Short, SizeTier::Medium, SizeTier::Long, SizeTier::VeryLong];

	/// Tier one step shorter, `None` for `Short` and `Any`.
	pub fn shorter(self) -> Option<SizeTier> {
		match self {
			SizeTier::Any | SizeTier::Short => None,
			SizeTier::Medium => Some(SizeTier::Short),
			SizeTier::Long => Some(SizeTier::Medium),
			SizeTier::VeryLong => Some(SizeTier::Long),
		}
	}

	/// Zero-based index into the word lists, `None` for `Any`.
	pub fn index(self) -> Option<usize> {
		match self {
			SizeTier::Any => None,
			tier => Some(tier as usize - 1),
		}
	}
}

/// Structural granularity of the generated text.
///
/// Selects the generator entry point and which formatter rules apply.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitType {
	#[default]
	Paragraph,
	Sentence,
	Word,
	Link,
	#[serde(rename = "Ordered List", alias = "OrderedList")]
	OrderedList,
	#[serde(rename = "Unordered List", alias = "UnorderedList")]
	UnorderedList,
}

impl UnitType {
	/// Links and lists carry markup that a reflow would break.
	pub fn allows_wrap(self) -> bool {
		matches!(self, UnitType::Paragraph | UnitType::Sentence | UnitType::Word)
	}

	/// Lists are already structural, they never get paragraph tags.
	pub fn allows_html(self) -> bool {
		!self.is_list()
	}

	/// Whether blank-line separators become paragraph boundaries.
	pub fn splits_html_paragraphs(self) -> bool {
		matches!(self, UnitType::Paragraph | UnitType::Sentence)
	}

	/// Ordered or unordered list, rendered as `<ol>`/`<ul>` markup.
	pub fn is_list(self) -> bool {
		matches!(self, UnitType::OrderedList | UnitType::UnorderedList)
	}
}
