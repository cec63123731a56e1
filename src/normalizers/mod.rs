//! Text-to-reading normalizers.
//!
//! This module contains implementations of numeral-reading normalizers.
//!
//! # Available Normalizers
//!
//! Enable normalizers via Cargo features:
//! - `japanese` - Arabic numerals with 万/億/兆 to kana (enabled by default)

#[cfg(feature = "japanese")]
pub mod japanese;
