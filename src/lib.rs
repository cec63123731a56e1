//! # yomi-rs
//!
//! A Rust library that rewrites numerals in text into the readings a
//! text-to-speech engine should pronounce.
//!
//! ## Features
//!
//! - **Japanese numerals**: 万/億/兆 quantities to kana, with the contractions
//!   speakers actually use (`1000万` → いっせんまん)
//! - **User Dictionaries**: Force a reading for any literal containing digits
//! - **Reading Previews**: Structured span → reading output for debugging
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! yomi-rs = { version = "2026.10", features = ["japanese"] }
//! ```
//!
//! ```
//! use yomi_rs::{normalizers::japanese::JapaneseNormalizer, ReadingNormalizer};
//!
//! let normalizer = JapaneseNormalizer::new();
//!
//! let text = normalizer.normalize("予算は1000万円です");
//! assert_eq!(text, "予算はいっせんまん円です");
//!
//! println!("{}", normalizer.annotate("1億2000万人"));
//! ```

pub mod normalizers;

use serde::{Deserialize, Serialize};

/// Where a span's reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingOrigin {
    /// A caller-supplied dictionary entry.
    Dictionary,
    /// The built-in reading rules.
    Rules,
}

impl ReadingOrigin {
    /// Lowercase name, as used in JSON and annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingOrigin::Dictionary => "dictionary",
            ReadingOrigin::Rules => "rules",
        }
    }
}

/// One rewritten span of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanReading {
    /// The span as written in the input
    pub source: String,
    /// Byte offset of the span in the input
    pub start: usize,
    /// Byte offset one past the end of the span
    pub end: usize,
    /// Reading substituted for the span
    pub reading: String,
    /// Whether the reading came from the dictionary or the rules
    pub origin: ReadingOrigin,
}

/// The result of a normalization pass.
///
/// Contains the rewritten text and every span that was replaced, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeResult {
    /// Input text with numeral spans replaced by readings
    pub text: String,
    /// Rewritten spans, with offsets into the original input
    pub readings: Vec<SpanReading>,
}

impl NormalizeResult {
    /// True if at least one span was rewritten.
    pub fn is_changed(&self) -> bool {
        !self.readings.is_empty()
    }

    /// Render the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable preview of the original text, its reading, and each span.
    pub fn annotation(&self, original: &str) -> String {
        let mut out = format!("原文: {original}\n読み: {}", self.text);
        for span in &self.readings {
            out.push_str(&format!(
                "\n  [{}..{}] {} -> {} ({})",
                span.start,
                span.end,
                span.source,
                span.reading,
                span.origin.as_str()
            ));
        }
        out
    }
}

/// Common interface for text-to-reading normalizers.
///
/// Normalizers are pure: they never fail and never change their own state, so
/// every method takes `&self`. Text that cannot be read is passed through.
pub trait ReadingNormalizer {
    /// Parameters for configuring a normalization pass.
    type NormalizeParams: Default;

    /// Normalize `text`, returning the rewritten text and the rewritten spans.
    fn normalize_with_params(
        &self,
        text: &str,
        params: Option<Self::NormalizeParams>,
    ) -> NormalizeResult;

    /// Normalize `text` with default parameters.
    fn normalize(&self, text: &str) -> String {
        self.normalize_with_params(text, None).text
    }

    /// Show-reading preview of `text` with default parameters.
    ///
    /// Default implementation calls `normalize_with_params()` then
    /// `NormalizeResult::annotation()`.
    fn annotate(&self, text: &str) -> String {
        self.normalize_with_params(text, None).annotation(text)
    }
}
