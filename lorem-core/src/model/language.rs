use serde::{Deserialize, Serialize};

/// Display language of the generated text.
///
/// English keeps the Latin words untouched. Every other language swaps
/// each alphabetic run of a picked word for a random glyph of its own
/// list, drops the spaces between words and uses full-width punctuation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
	#[default]
	#[serde(rename = "en", alias = "EN")]
	English,
	#[serde(rename = "zh-CN", alias = "CN")]
	SimplifiedChinese,
	#[serde(rename = "zh-HK", alias = "HK")]
	HongKongChinese,
	#[serde(rename = "zh-TW", alias = "TW")]
	TaiwanChinese,
	#[serde(rename = "ja", alias = "JA")]
	Japanese,
}

impl Language {
	/// Tag used in snapshot files (`en`, `zh-CN`, ...).
	pub fn tag(self) -> &'static str {
		match self {
			Language::English => "en",
			Language::SimplifiedChinese => "zh-CN",
			Language::HongKongChinese => "zh-HK",
			Language::TaiwanChinese => "zh-TW",
			Language::Japanese => "ja",
		}
	}

	/// Replacement glyphs, empty when words are kept as-is.
	pub fn glyphs(self) -> &'static [&'static str] {
		match self {
			Language::English => &[],
			Language::SimplifiedChinese => SIMPLIFIED_GLYPHS,
			Language::HongKongChinese | Language::TaiwanChinese => TRADITIONAL_GLYPHS,
			Language::Japanese => JAPANESE_GLYPHS,
		}
	}

	/// Glyph substituted for a literal `,`.
	pub fn soft_pause(self) -> char {
		match self {
			Language::English => ',',
			Language::Japanese => '、',
			_ => '，',
		}
	}

	/// Glyph substituted for a literal `.`.
	pub fn full_stop(self) -> char {
		match self {
			Language::English => '.',
			_ => '。',
		}
	}

	/// Separator placed between words and sentences.
	pub fn word_gap(self) -> &'static str {
		match self {
			Language::English => " ",
			_ => "",
		}
	}
}

const SIMPLIFIED_GLYPHS: &[&str] = &[
	"的", "一", "是", "在", "不", "了", "有", "和", "人", "这", "中", "大", "为", "上", "个", "国",
	"我", "以", "要", "他", "时", "来", "用", "们", "生", "到", "作", "地", "于", "出", "就", "分",
	"对", "成", "会", "可", "主", "发", "年", "动", "同", "工", "也", "能", "下", "过", "子", "说",
];

const TRADITIONAL_GLYPHS: &[&str] = &[
	"的", "一", "是", "在", "不", "了", "有", "和", "人", "這", "中", "大", "為", "上", "個", "國",
	"我", "以", "要", "他", "時", "來", "用", "們", "生", "到", "作", "地", "於", "出", "就", "分",
	"對", "成", "會", "可", "主", "發", "年", "動", "同", "工", "也", "能", "下", "過", "子", "說",
];

const JAPANESE_GLYPHS: &[&str] = &[
	"の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
	"する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この", "ため",
	"その", "あっ", "よう", "また", "もの", "日本", "時間", "言葉", "世界", "今日", "自分",
];
