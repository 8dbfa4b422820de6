use crate::ValueDistribution;
use serde::{Deserialize, Serialize};

/// Ties go to the attacker: margin 0 succeeds.
pub const SUCCESS_MARGIN: i64 = 0;
/// A raise is a success with five or more to spare.
pub const RAISE_MARGIN: i64 = 5;

/// The two published rates, as whole percentages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateResult {
    pub success_rate: u8,
    pub raise_rate: u8,
}

/// Reduces a margin distribution to its success and raise percentages,
/// rounded to the nearest whole percent.
pub fn aggregate(margins: &ValueDistribution) -> AggregateResult {
    let total = margins.total();
    AggregateResult {
        success_rate: rate(margins.count_at_least(SUCCESS_MARGIN), total),
        raise_rate: rate(margins.count_at_least(RAISE_MARGIN), total),
    }
}

fn rate(part: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_or_nothing() {
        let wins: ValueDistribution = [(3, 10)].into_iter().collect();
        assert_eq!(
            aggregate(&wins),
            AggregateResult {
                success_rate: 100,
                raise_rate: 0,
            }
        );
        let losses: ValueDistribution = [(-2, 10)].into_iter().collect();
        assert_eq!(
            aggregate(&losses),
            AggregateResult {
                success_rate: 0,
                raise_rate: 0,
            }
        );
    }

    #[test]
    fn ties_count_as_success() {
        let dist: ValueDistribution = [(0, 1), (-1, 1)].into_iter().collect();
        assert_eq!(aggregate(&dist).success_rate, 50);
    }

    #[test]
    fn raise_needs_margin_five() {
        let dist: ValueDistribution = [(4, 1), (5, 1), (6, 2)].into_iter().collect();
        let result = aggregate(&dist);
        assert_eq!(result.success_rate, 100);
        assert_eq!(result.raise_rate, 75);
    }

    #[test]
    fn exact_halves_round_up() {
        // 1 success in 200 is 0.5%, which rounds away from zero.
        let dist: ValueDistribution = [(0, 1), (-1, 199)].into_iter().collect();
        assert_eq!(aggregate(&dist).success_rate, 1);
    }

    #[test]
    fn raise_never_exceeds_success() {
        let dist: ValueDistribution = [(-3, 7), (0, 5), (5, 2), (11, 1)].into_iter().collect();
        let result = aggregate(&dist);
        assert!(result.raise_rate <= result.success_rate);
    }
}
