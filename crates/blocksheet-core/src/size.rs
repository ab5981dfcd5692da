//! Row height and column width rules
//!
//! A [`SizeRule`] covers the 1-based positions `min..=max` and expands into
//! concrete [`SizeRange`] triples. Column ranges are written as-is; row
//! ranges are flattened into a per-row height lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One size or a sequence of sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    /// Same size for every position in the rule
    Uniform(f64),
    /// Per-position sizes, repeated cyclically when the rule has a `max`
    Sequence(Vec<f64>),
}

impl From<f64> for SizeValue {
    fn from(size: f64) -> Self {
        SizeValue::Uniform(size)
    }
}

impl From<Vec<f64>> for SizeValue {
    fn from(sizes: Vec<f64>) -> Self {
        SizeValue::Sequence(sizes)
    }
}

/// Declarative size rule (`{min, max?, size}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRule {
    /// First position (1-based)
    pub min: u32,
    /// Last position (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    pub size: SizeValue,
}

impl SizeRule {
    /// Rule for a single position
    pub fn single(index: u32, size: f64) -> Self {
        Self {
            min: index,
            max: None,
            size: SizeValue::Uniform(size),
        }
    }

    /// Rule for the positions `min..=max`
    pub fn range<V: Into<SizeValue>>(min: u32, max: u32, size: V) -> Self {
        Self {
            min,
            max: Some(max),
            size: size.into(),
        }
    }

    /// Sequence of sizes starting at `min`, one position per entry
    pub fn sequence(min: u32, sizes: Vec<f64>) -> Self {
        Self {
            min,
            max: None,
            size: SizeValue::Sequence(sizes),
        }
    }
}

/// Concrete size for the positions `min..=max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
    pub size: f64,
}

impl SizeRange {
    pub fn new(min: u32, max: u32, size: f64) -> Self {
        Self { min, max, size }
    }
}

fn usable(size: f64) -> bool {
    size.is_finite() && size >= 0.0
}

/// Clamp the positions `min..=max` to `1..=limit`
fn clamp_span(min: u32, max: u32, limit: u32) -> Option<(u32, u32)> {
    let (lo, hi) = (min.max(1), max.min(limit));
    if lo > hi {
        log::warn!("skipping size rule for positions {}..={}", min, max);
        return None;
    }
    if (lo, hi) != (min, max) {
        log::warn!("size rule {}..={} clamped to {}..={}", min, max, lo, hi);
    }
    Some((lo, hi))
}

/// Expand size rules into concrete ranges
///
/// Positions are kept within `1..=limit` (the sheet's row or column count).
/// Sequence entries that are negative or not finite are skipped without
/// emitting a range for their position.
pub fn expand_sizes(rules: &[SizeRule], limit: u32) -> Vec<SizeRange> {
    let mut ranges = Vec::new();

    for rule in rules {
        match &rule.size {
            SizeValue::Uniform(size) => {
                let max = rule.max.unwrap_or(rule.min);
                if let Some((min, max)) = clamp_span(rule.min, max, limit) {
                    ranges.push(SizeRange::new(min, max, *size));
                }
            }
            SizeValue::Sequence(sizes) => match rule.max {
                Some(max) if max >= rule.min => {
                    if sizes.is_empty() {
                        continue;
                    }
                    let Some((lo, hi)) = clamp_span(rule.min, max, limit) else {
                        continue;
                    };
                    for i in lo..=hi {
                        let size = sizes[((i - rule.min) as usize) % sizes.len()];
                        if usable(size) {
                            ranges.push(SizeRange::new(i, i, size));
                        } else {
                            log::warn!("skipping invalid size {} at position {}", size, i);
                        }
                    }
                }
                _ => {
                    for (offset, &size) in sizes.iter().enumerate() {
                        let Some(i) = u32::try_from(offset)
                            .ok()
                            .and_then(|o| rule.min.checked_add(o))
                            .filter(|i| *i <= limit)
                        else {
                            log::warn!("size sequence at {} runs past position {}", rule.min, limit);
                            break;
                        };
                        if i < 1 {
                            log::warn!("skipping size {} at position 0", size);
                        } else if usable(size) {
                            ranges.push(SizeRange::new(i, i, size));
                        } else {
                            log::warn!("skipping invalid size {} at position {}", size, i);
                        }
                    }
                }
            },
        }
    }

    ranges
}

/// Flatten ranges into a position -> size lookup; later ranges win
pub fn flatten_sizes(ranges: &[SizeRange]) -> BTreeMap<u32, f64> {
    let mut sizes = BTreeMap::new();
    for range in ranges {
        for i in range.min..=range.max {
            sizes.insert(i, range.size);
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIMIT: u32 = 16_384;

    #[test]
    fn test_uniform_rule() {
        let ranges = expand_sizes(
            &[SizeRule::single(2, 40.0), SizeRule::range(3, 6, 30.0)],
            LIMIT,
        );
        assert_eq!(
            ranges,
            vec![SizeRange::new(2, 2, 40.0), SizeRange::new(3, 6, 30.0)]
        );
    }

    #[test]
    fn test_sequence_cycles_with_max() {
        let ranges = expand_sizes(&[SizeRule::range(1, 4, vec![10.0, 20.0])], LIMIT);
        assert_eq!(
            ranges,
            vec![
                SizeRange::new(1, 1, 10.0),
                SizeRange::new(2, 2, 20.0),
                SizeRange::new(3, 3, 10.0),
                SizeRange::new(4, 4, 20.0),
            ]
        );
    }

    #[test]
    fn test_sequence_without_max() {
        let ranges = expand_sizes(&[SizeRule::sequence(2, vec![5.0, 7.0, 9.0])], LIMIT);
        assert_eq!(
            ranges,
            vec![
                SizeRange::new(2, 2, 5.0),
                SizeRange::new(3, 3, 7.0),
                SizeRange::new(4, 4, 9.0),
            ]
        );
    }

    #[test]
    fn test_sequence_with_max_below_min_does_not_cycle() {
        let ranges = expand_sizes(&[SizeRule::range(5, 2, vec![1.0, 2.0])], LIMIT);
        assert_eq!(
            ranges,
            vec![SizeRange::new(5, 5, 1.0), SizeRange::new(6, 6, 2.0)]
        );
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let ranges = expand_sizes(
            &[
                SizeRule::sequence(1, vec![10.0, -1.0, f64::NAN, 12.0]),
                SizeRule::range(10, 13, vec![3.0, -3.0]),
                SizeRule::range(20, 22, Vec::new()),
            ],
            LIMIT,
        );
        assert_eq!(
            ranges,
            vec![
                SizeRange::new(1, 1, 10.0),
                SizeRange::new(4, 4, 12.0),
                SizeRange::new(10, 10, 3.0),
                SizeRange::new(12, 12, 3.0),
            ]
        );
    }

    #[test]
    fn test_positions_below_one_are_skipped() {
        let ranges = expand_sizes(
            &[
                SizeRule::single(0, 20.0),
                SizeRule::range(0, 2, 30.0),
                SizeRule::sequence(0, vec![1.0, 2.0]),
                SizeRule::range(0, 1, vec![4.0, 5.0]),
            ],
            LIMIT,
        );
        assert_eq!(
            ranges,
            vec![
                SizeRange::new(1, 2, 30.0),
                SizeRange::new(1, 1, 2.0),
                SizeRange::new(1, 1, 5.0),
            ]
        );
    }

    #[test]
    fn test_positions_are_clamped_to_limit() {
        let ranges = expand_sizes(
            &[
                SizeRule::range(1, u32::MAX, 20.0),
                SizeRule::range(LIMIT - 1, u32::MAX, vec![3.0, 4.0]),
                SizeRule::sequence(LIMIT, vec![5.0, 6.0]),
                SizeRule::single(LIMIT + 1, 7.0),
            ],
            LIMIT,
        );
        assert_eq!(
            ranges,
            vec![
                SizeRange::new(1, LIMIT, 20.0),
                SizeRange::new(LIMIT - 1, LIMIT - 1, 3.0),
                SizeRange::new(LIMIT, LIMIT, 4.0),
                SizeRange::new(LIMIT, LIMIT, 5.0),
            ]
        );
        assert_eq!(flatten_sizes(&ranges).len(), LIMIT as usize);
    }

    #[test]
    fn test_flatten_sizes() {
        let sizes = flatten_sizes(&[SizeRange::new(1, 3, 20.0), SizeRange::new(2, 2, 40.0)]);
        assert_eq!(
            sizes.into_iter().collect::<Vec<_>>(),
            vec![(1, 20.0), (2, 40.0), (3, 20.0)]
        );
    }

    #[test]
    fn test_deserialize_rules() {
        let rules: Vec<SizeRule> =
            serde_json::from_str(r#"[{"min": 2, "size": [10, 20, 20]}, {"min": 3, "max": 6, "size": 30}]"#)
                .unwrap();
        assert_eq!(rules[0], SizeRule::sequence(2, vec![10.0, 20.0, 20.0]));
        assert_eq!(rules[1], SizeRule::range(3, 6, 30.0));
    }
}
