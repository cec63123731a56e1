/// Largest value a single four-digit group can hold.
pub const GROUP_MAX: u16 = 9999;

/// Large-number units that start a new four-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LargeUnit {
    /// 万, 10⁴
    Man,
    /// 億, 10⁸
    Oku,
    /// 兆, 10¹²
    Chou,
}

impl LargeUnit {
    /// Units from highest to lowest, in the order groups are read aloud.
    pub const DESCENDING: [LargeUnit; 3] = [LargeUnit::Chou, LargeUnit::Oku, LargeUnit::Man];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '万' => Some(LargeUnit::Man),
            '億' => Some(LargeUnit::Oku),
            '兆' => Some(LargeUnit::Chou),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            LargeUnit::Man => '万',
            LargeUnit::Oku => '億',
            LargeUnit::Chou => '兆',
        }
    }

    pub fn reading(self) -> &'static str {
        match self {
            LargeUnit::Man => "まん",
            LargeUnit::Oku => "おく",
            LargeUnit::Chou => "ちょう",
        }
    }

    /// The value one of this unit stands for.
    pub fn multiplier(self) -> u64 {
        match self {
            LargeUnit::Man => 10_000,
            LargeUnit::Oku => 100_000_000,
            LargeUnit::Chou => 1_000_000_000_000,
        }
    }
}

/// What immediately follows a group when it is read aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryContext {
    /// Lowest group, nothing follows.
    Bare,
    BeforeMan,
    BeforeOku,
    BeforeChou,
}

impl From<Option<LargeUnit>> for BoundaryContext {
    fn from(unit: Option<LargeUnit>) -> Self {
        match unit {
            None => BoundaryContext::Bare,
            Some(LargeUnit::Man) => BoundaryContext::BeforeMan,
            Some(LargeUnit::Oku) => BoundaryContext::BeforeOku,
            Some(LargeUnit::Chou) => BoundaryContext::BeforeChou,
        }
    }
}

impl BoundaryContext {
    pub fn is_before_unit(self) -> bool {
        self != BoundaryContext::Bare
    }
}

// Positional readings, indexed by digit. Sound changes that hold for every
// context (さんびゃく, ろっぴゃく, さんぜん, はっせん, ...) are baked in here.
const ONES: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];
const TENS: [&str; 10] = [
    "",
    "じゅう",
    "にじゅう",
    "さんじゅう",
    "よんじゅう",
    "ごじゅう",
    "ろくじゅう",
    "ななじゅう",
    "はちじゅう",
    "きゅうじゅう",
];
const HUNDREDS: [&str; 10] = [
    "",
    "ひゃく",
    "にひゃく",
    "さんびゃく",
    "よんひゃく",
    "ごひゃく",
    "ろっぴゃく",
    "ななひゃく",
    "はっぴゃく",
    "きゅうひゃく",
];
const THOUSANDS: [&str; 10] = [
    "",
    "せん",
    "にせん",
    "さんぜん",
    "よんせん",
    "ごせん",
    "ろくせん",
    "ななせん",
    "はっせん",
    "きゅうせん",
];

/// One exception to the compositional reading of a group: a group of exactly
/// `value` followed by `context` reads as `reading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingRule {
    pub context: BoundaryContext,
    pub value: u16,
    pub reading: &'static str,
}

/// Contraction rules, checked in order; the first match wins.
///
/// Only a group of exactly 1000 before a unit is forced to いっせん. 1500万 and
/// friends stay compositional (せんごひゃくまん). A group of exactly 1 before a
/// unit always keeps its いち (いちまん, いちおく, いちちょう), unlike bare
/// hundreds and thousands.
pub const RULES: &[ReadingRule] = &[
    ReadingRule {
        context: BoundaryContext::BeforeMan,
        value: 1000,
        reading: "いっせん",
    },
    ReadingRule {
        context: BoundaryContext::BeforeOku,
        value: 1000,
        reading: "いっせん",
    },
    ReadingRule {
        context: BoundaryContext::BeforeChou,
        value: 1000,
        reading: "いっせん",
    },
    ReadingRule {
        context: BoundaryContext::BeforeMan,
        value: 1,
        reading: "いち",
    },
    ReadingRule {
        context: BoundaryContext::BeforeOku,
        value: 1,
        reading: "いち",
    },
    ReadingRule {
        context: BoundaryContext::BeforeChou,
        value: 1,
        reading: "いち",
    },
];

/// Find the rule that applies to `value` in `context`, if any.
pub fn find_rule(value: u16, context: BoundaryContext) -> Option<&'static ReadingRule> {
    RULES
        .iter()
        .find(|rule| rule.context == context && rule.value == value)
}

/// Plain positional reading of 1–9999 with no boundary effects. 0 reads as "".
pub fn compose(value: u16) -> Option<String> {
    if value > GROUP_MAX {
        return None;
    }
    let digit = |place: u16| usize::from(value / place % 10);
    let mut out = String::new();
    out.push_str(THOUSANDS[digit(1000)]);
    out.push_str(HUNDREDS[digit(100)]);
    out.push_str(TENS[digit(10)]);
    out.push_str(ONES[digit(1)]);
    Some(out)
}

/// Read one four-digit group as it sounds in `context`.
///
/// Returns `None` for values above 9999. Zero renders as an empty string,
/// since embedded zero groups are silent.
pub fn render_group(value: u16, context: BoundaryContext) -> Option<String> {
    let base = compose(value)?;
    if value == 0 {
        return Some(base);
    }
    Some(match find_rule(value, context) {
        Some(rule) => rule.reading.to_string(),
        None => base,
    })
}
