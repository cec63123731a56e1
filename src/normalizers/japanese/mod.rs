//! Japanese numeral-reading normalizer.
//!
//! Rewrites Arabic-numeral quantities combined with the large units 万 (10⁴),
//! 億 (10⁸) and 兆 (10¹²) into the kana a speaker would say, so that a speech
//! engine downstream pronounces them correctly. Everything that is not a
//! numeral span is copied through untouched.
//!
//! # Pipeline
//!
//! 1. Full-width digits (`０`-`９`) are matched as if they were ASCII.
//! 2. A [`UserDictionary`] is consulted first; the longest matching literal
//!    wins and its reading is used verbatim. An entry must cover whole digit
//!    runs (`100` never matches inside `1000万`), and may cover one link of a
//!    chain (`2000万` inside `1億2000万`).
//! 3. Other digit runs are parsed into chains (`1億2000万`) and checked for
//!    ambiguity. Anything ambiguous is passed through as written.
//! 4. The value is split into four-digit groups at 万/億/兆 boundaries and each
//!    group is read with the rules in [`rules`], high groups first.
//!
//! # Contraction Rules
//!
//! | Input | Reading | Why |
//! |---|---|---|
//! | `1000` | せん | bare thousand drops いち |
//! | `1000万` / `1000億` / `1000兆` | いっせんまん / いっせんおく / いっせんちょう | exactly 1000 before a unit |
//! | `1500万` | せんごひゃくまん | not exactly 1000, stays compositional |
//! | `100万` | ひゃくまん | hundreds never take いち |
//! | `1万` / `1億` | いちまん / いちおく | a lone 1 before a unit keeps いち |
//! | `1兆` / `8兆` / `10兆` | いちちょう / はちちょう / じゅうちょう | no gemination before ちょう |
//!
//! # Pass-through
//!
//! Digit runs glued to letters (`A100`, `100km`), joined by separators
//! (`03-1234-5678`, `3.14`, `12:30`), with leading zeros (`007`), or beyond 兆
//! (`1京`) are left exactly as written. Counters do not block a reading:
//! `1000円` becomes せん円 unless `read_standalone_numerals` is off.
//!
//! # Examples
//!
//! ```rust
//! use yomi_rs::normalizers::japanese::{normalize, UserDictionary};
//!
//! let dictionary = UserDictionary::new();
//! assert_eq!(
//!     normalize("予算は1000万円、人口は1億2000万人", &dictionary),
//!     "予算はいっせんまん円、人口はいちおくにせんまん人"
//! );
//! ```

pub mod dictionary;
pub mod engine;
pub mod reading;
pub mod rules;
pub mod scanner;

pub use dictionary::{DictionaryError, UserDictionary};
pub use engine::{
    normalize, normalize_with_readings, JapaneseNormalizeParams, JapaneseNormalizeParamsBuilder,
    JapaneseNormalizer,
};
pub use reading::ZeroReading;
