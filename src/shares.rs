//! Proportional share normalization
//!
//! Ratios and percentages are rounded independently per entry, which can
//! leave their sums off by a small epsilon. The entry with the largest raw
//! byte count absorbs the residual so the set sums to exactly 1 and 100
//! within the declared precision.

use crate::types::languages::{language_color, LanguageBreakdown, LanguageStat, Share};

const RATIO_PRECISION: f64 = 1e6;
const PERCENT_PRECISION: f64 = 1e2;

fn round_to(value: f64, precision: f64) -> f64 {
    (value * precision).round() / precision
}

/// Apportion byte counts into shares summing exactly to 1 / 100
///
/// Entries are ordered by descending byte count, stable on ties. When the
/// whole set has zero bytes every share is zero and no division happens.
pub fn normalize_shares(stats: Vec<LanguageStat>) -> Vec<LanguageBreakdown> {
    let mut stats = stats;
    stats.sort_by(|a, b| b.total_bytes.cmp(&a.total_bytes));

    let total_bytes: u64 = stats.iter().map(|s| s.total_bytes).sum();

    let mut breakdown: Vec<LanguageBreakdown> = stats
        .into_iter()
        .map(|stat| {
            let share = if total_bytes == 0 {
                Share {
                    ratio: 0.0,
                    percentage: 0.0,
                }
            } else {
                let ratio = stat.total_bytes as f64 / total_bytes as f64;
                Share {
                    ratio: round_to(ratio, RATIO_PRECISION),
                    percentage: round_to(ratio * 100.0, PERCENT_PRECISION),
                }
            };
            LanguageBreakdown {
                color: language_color(&stat.name),
                display_name: stat.name.clone(),
                name: stat.name,
                total_bytes: stat.total_bytes,
                total_lines: stat.total_lines,
                share,
            }
        })
        .collect();

    if total_bytes > 0 && !breakdown.is_empty() {
        let ratio_sum: f64 = breakdown.iter().map(|b| b.share.ratio).sum();
        let percent_sum: f64 = breakdown.iter().map(|b| b.share.percentage).sum();

        // After the descending sort the largest raw count sits first
        let largest = &mut breakdown[0].share;
        largest.ratio =
            round_to((largest.ratio + (1.0 - ratio_sum)).clamp(0.0, 1.0), RATIO_PRECISION);
        largest.percentage = round_to(
            (largest.percentage + (100.0 - percent_sum)).clamp(0.0, 100.0),
            PERCENT_PRECISION,
        );
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, bytes: u64) -> LanguageStat {
        LanguageStat {
            name: name.to_string(),
            total_bytes: bytes,
            total_lines: bytes / 10,
        }
    }

    fn assert_sums(breakdown: &[LanguageBreakdown]) {
        let ratio_sum: f64 = breakdown.iter().map(|b| b.share.ratio).sum();
        let percent_sum: f64 = breakdown.iter().map(|b| b.share.percentage).sum();
        assert!(
            (ratio_sum - 1.0).abs() < 1e-9,
            "ratio sum was {}",
            ratio_sum
        );
        assert!(
            (percent_sum - 100.0).abs() < 1e-9,
            "percentage sum was {}",
            percent_sum
        );
    }

    #[test]
    fn test_shares_sum_exactly() {
        let breakdown = normalize_shares(vec![
            stat("Rust", 3333),
            stat("Go", 3333),
            stat("Python", 3334),
        ]);
        assert_sums(&breakdown);
    }

    #[test]
    fn test_shares_sum_for_all_permutations() {
        let inputs = [
            vec![stat("A", 1), stat("B", 1), stat("C", 1)],
            vec![stat("B", 1), stat("C", 1), stat("A", 1)],
            vec![stat("C", 1), stat("A", 1), stat("B", 1)],
            vec![stat("A", 7), stat("B", 13), stat("C", 29)],
            vec![stat("C", 29), stat("B", 13), stat("A", 7)],
        ];
        for input in inputs {
            let breakdown = normalize_shares(input);
            assert_sums(&breakdown);
        }
    }

    #[test]
    fn test_residual_absorbed_by_largest() {
        let breakdown = normalize_shares(vec![
            stat("Big", 1_000_000),
            stat("Small", 1),
        ]);
        assert_eq!(breakdown[0].name, "Big");
        assert_sums(&breakdown);
    }

    #[test]
    fn test_zero_total_yields_zero_shares() {
        let breakdown = normalize_shares(vec![stat("Rust", 0), stat("Go", 0)]);
        assert_eq!(breakdown.len(), 2);
        for entry in &breakdown {
            assert_eq!(entry.share.ratio, 0.0);
            assert_eq!(entry.share.percentage, 0.0);
        }
    }

    #[test]
    fn test_descending_order_stable_on_ties() {
        let breakdown = normalize_shares(vec![
            stat("First", 10),
            stat("Second", 10),
            stat("Bigger", 20),
        ]);
        let names: Vec<&str> = breakdown.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Bigger", "First", "Second"]);
    }

    #[test]
    fn test_single_language_is_whole() {
        let breakdown = normalize_shares(vec![stat("Rust", 42)]);
        assert_eq!(breakdown[0].share.ratio, 1.0);
        assert_eq!(breakdown[0].share.percentage, 100.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_shares(Vec::new()).is_empty());
    }
}
