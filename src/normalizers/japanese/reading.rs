use serde::{Deserialize, Serialize};

use super::rules::{render_group, BoundaryContext, LargeUnit, GROUP_MAX};

/// Largest value that can be read with 兆 as the top unit (10¹⁶ − 1).
pub const MAX_VALUE: u64 = 9_999_999_999_999_999;

/// How a standalone `0` is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroReading {
    #[default]
    Zero,
    Rei,
}

impl ZeroReading {
    pub fn kana(self) -> &'static str {
        match self {
            ZeroReading::Zero => "ゼロ",
            ZeroReading::Rei => "れい",
        }
    }
}

/// A four-digit chunk of a number, aligned to a 万/億/兆 boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    value: u16,
    unit: Option<LargeUnit>,
    leading: bool,
}

impl DigitGroup {
    pub fn value(&self) -> u16 {
        self.value
    }

    /// The unit read after this group; `None` for the ones group.
    pub fn unit(&self) -> Option<LargeUnit> {
        self.unit
    }

    /// True for the highest non-zero group of the number.
    pub fn is_leading(&self) -> bool {
        self.leading
    }

    pub fn is_before_unit(&self) -> bool {
        self.unit.is_some()
    }

    pub fn context(&self) -> BoundaryContext {
        BoundaryContext::from(self.unit)
    }

    /// Reading of the group followed by its unit, or "" for a zero group.
    pub fn render(&self) -> String {
        if self.value == 0 {
            return String::new();
        }
        let mut out = render_group(self.value, self.context()).unwrap_or_default();
        if let Some(unit) = self.unit {
            out.push_str(unit.reading());
        }
        out
    }
}

/// Split `value` into groups from 兆 down to the ones group.
///
/// Groups above the highest non-zero one are omitted; zero groups below it
/// are kept so callers can see the full shape. Returns `None` above
/// [`MAX_VALUE`].
pub fn decompose(value: u64) -> Option<Vec<DigitGroup>> {
    if value > MAX_VALUE {
        return None;
    }

    let units = LargeUnit::DESCENDING.iter().map(|&unit| Some(unit));
    let mut groups = Vec::with_capacity(4);
    for unit in units.chain(std::iter::once(None)) {
        let scale = unit.map_or(1, LargeUnit::multiplier);
        let chunk = (value / scale % 10_000) as u16;
        debug_assert!(chunk <= GROUP_MAX);
        if groups.is_empty() && chunk == 0 {
            continue;
        }
        groups.push(DigitGroup {
            value: chunk,
            unit,
            leading: groups.is_empty(),
        });
    }
    Some(groups)
}

/// Read a whole value, high groups first. Zero groups contribute nothing.
pub fn read_value(value: u64, zero: ZeroReading) -> Option<String> {
    if value == 0 {
        return Some(zero.kana().to_string());
    }
    let groups = decompose(value)?;
    Some(groups.iter().map(DigitGroup::render).collect())
}

#[cfg(test)]
mod tests {
    use super::{decompose, read_value, ZeroReading, MAX_VALUE};
    use crate::normalizers::japanese::rules::LargeUnit;

    fn read(value: u64) -> String {
        read_value(value, ZeroReading::Zero).unwrap()
    }

    #[test]
    fn decomposes_into_unit_aligned_groups() {
        let groups = decompose(1_2000_0000).unwrap();
        let shape: Vec<_> = groups.iter().map(|g| (g.value(), g.unit())).collect();
        assert_eq!(
            shape,
            vec![
                (1, Some(LargeUnit::Oku)),
                (2000, Some(LargeUnit::Man)),
                (0, None)
            ]
        );
        assert!(groups[0].is_leading());
        assert!(!groups[1].is_leading());
        assert!(groups[1].is_before_unit());
        assert!(!groups[2].is_before_unit());
    }

    #[test]
    fn small_values_are_a_single_ones_group() {
        let groups = decompose(42).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].unit(), None);
        assert!(groups[0].is_leading());
        assert!(decompose(0).unwrap().is_empty());
    }

    #[test]
    fn rejects_values_beyond_chou() {
        assert!(decompose(MAX_VALUE).is_some());
        assert!(decompose(MAX_VALUE + 1).is_none());
        assert!(read_value(MAX_VALUE + 1, ZeroReading::Zero).is_none());
    }

    #[test]
    fn reads_large_unit_boundaries() {
        assert_eq!(read(1000_0000), "いっせんまん");
        assert_eq!(read(1000_0000_0000), "いっせんおく");
        assert_eq!(read(1000_0000_0000_0000), "いっせんちょう");
        assert_eq!(read(1_0000_0000), "いちおく");
        assert_eq!(read(100_0000), "ひゃくまん");
        assert_eq!(read(1500_0000), "せんごひゃくまん");
        assert_eq!(read(1_0000), "いちまん");
        assert_eq!(read(1_0000_0000_0000), "いちちょう");
        assert_eq!(read(8_0000_0000_0000), "はちちょう");
        assert_eq!(read(10_0000_0000_0000), "じゅうちょう");
    }

    #[test]
    fn skips_embedded_zero_groups() {
        assert_eq!(read(1_0000_0005), "いちおくご");
        assert_eq!(read(3_0000_0000_0000), "さんちょう");
        assert_eq!(read(1_2000_0000), "いちおくにせんまん");
    }

    #[test]
    fn reads_bare_numbers_with_the_positional_renderer() {
        assert_eq!(read(1000), "せん");
        assert_eq!(read(12_345), "いちまんにせんさんびゃくよんじゅうご");
        assert_eq!(read(0), "ゼロ");
        assert_eq!(read_value(0, ZeroReading::Rei).as_deref(), Some("れい"));
    }
}
