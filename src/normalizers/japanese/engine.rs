use derive_builder::Builder;

use crate::{NormalizeResult, ReadingNormalizer, ReadingOrigin, SpanReading};

use super::dictionary::UserDictionary;
use super::reading::{read_value, ZeroReading};
use super::scanner::{tokenize, Token};

/// Parameters for a Japanese normalization pass.
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct JapaneseNormalizeParams {
    /// Reading used for a standalone `0`.
    pub zero_reading: ZeroReading,
    /// Convert digit runs without 万/億/兆 (`1000円`, `合計 42 件`).
    /// When `false`, only runs involving 万/億/兆 are rewritten.
    pub read_standalone_numerals: bool,
    /// Replace U+3000 in literal text with an ASCII space.
    pub fold_ideographic_space: bool,
}

impl Default for JapaneseNormalizeParams {
    fn default() -> Self {
        Self {
            zero_reading: ZeroReading::Zero,
            read_standalone_numerals: true,
            fold_ideographic_space: false,
        }
    }
}

/// Rewrite Arabic-numeral quantities in `text` into kana readings.
///
/// Dictionary entries take precedence over the reading rules. Spans that
/// cannot be read unambiguously are copied through unchanged.
pub fn normalize(text: &str, dictionary: &UserDictionary) -> String {
    normalize_with_readings(text, dictionary, &JapaneseNormalizeParams::default()).text
}

/// Like [`normalize`], also returning every rewritten span.
pub fn normalize_with_readings(
    text: &str,
    dictionary: &UserDictionary,
    params: &JapaneseNormalizeParams,
) -> NormalizeResult {
    let mut out = String::with_capacity(text.len() * 2);
    let mut readings = Vec::new();

    for token in tokenize(text, dictionary, params.read_standalone_numerals) {
        match token {
            Token::Literal(literal) if params.fold_ideographic_space => {
                out.push_str(&literal.replace('\u{3000}', " "));
            }
            Token::Literal(literal) => out.push_str(literal),
            Token::Override {
                raw,
                start,
                end,
                reading,
            } => {
                out.push_str(reading);
                readings.push(SpanReading {
                    source: raw.to_string(),
                    start,
                    end,
                    reading: reading.to_string(),
                    origin: ReadingOrigin::Dictionary,
                });
            }
            Token::Numeral(span) => match read_value(span.value, params.zero_reading) {
                Some(reading) => {
                    log::debug!("Read {:?} as {reading}", span.raw);
                    out.push_str(&reading);
                    readings.push(SpanReading {
                        source: span.raw,
                        start: span.start,
                        end: span.end,
                        reading,
                        origin: ReadingOrigin::Rules,
                    });
                }
                None => {
                    log::debug!("No reading for {:?}, passing through", span.raw);
                    out.push_str(&span.raw);
                }
            },
        }
    }

    NormalizeResult {
        text: out,
        readings,
    }
}

/// Japanese numeral-reading normalizer.
///
/// Holds a read-only [`UserDictionary`]; it has no other state, so a single
/// instance can be shared across threads.
///
/// # Quick Start
///
/// ```rust
/// use yomi_rs::{ReadingNormalizer, normalizers::japanese::JapaneseNormalizer};
///
/// let normalizer = JapaneseNormalizer::new();
/// assert_eq!(normalizer.normalize("1000万円"), "いっせんまん円");
/// ```
///
/// # With a Dictionary
///
/// ```rust
/// use yomi_rs::{ReadingNormalizer, normalizers::japanese::{JapaneseNormalizer, UserDictionary}};
///
/// let dictionary = UserDictionary::from_entries([("3.14", "えんしゅうりつ")]);
/// let normalizer = JapaneseNormalizer::with_dictionary(dictionary);
/// assert_eq!(normalizer.normalize("約3.14"), "約えんしゅうりつ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JapaneseNormalizer {
    dictionary: UserDictionary,
}

impl JapaneseNormalizer {
    /// Create a normalizer with no dictionary overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: UserDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &UserDictionary {
        &self.dictionary
    }
}

impl ReadingNormalizer for JapaneseNormalizer {
    type NormalizeParams = JapaneseNormalizeParams;

    fn normalize_with_params(
        &self,
        text: &str,
        params: Option<Self::NormalizeParams>,
    ) -> NormalizeResult {
        let p = params.unwrap_or_default();
        normalize_with_readings(text, &self.dictionary, &p)
    }
}
