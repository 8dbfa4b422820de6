use crate::{draw_distribution, DuelError, FlipSpec, ValueDistribution};
use serde::{Deserialize, Serialize};

/// Margin assigned to attacker outcomes gated out by the target number in
/// an opposed duel. Strictly negative so a forced failure can never read
/// as a success.
pub const FORCED_FAIL_MARGIN: i64 = -1;

/// One duel to evaluate. Flips arrive already parsed; `from_tokens` is
/// the front-end path that parses them here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuelConfig {
    pub attacker_stat: i64,
    pub defender_stat: Option<i64>,
    pub target_number: Option<i64>,
    pub attacker_flip: FlipSpec,
    pub defender_flip: FlipSpec,
}

/// Duel topology. A defender stat makes the duel opposed, with the
/// target number as an optional attacker-side gate; a target number
/// alone makes it simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelKind {
    Simple {
        target: i64,
    },
    Opposed {
        defender_stat: i64,
        target: Option<i64>,
    },
}

impl DuelConfig {
    pub fn from_tokens(
        attacker_stat: i64,
        defender_stat: Option<i64>,
        target_number: Option<i64>,
        attacker_token: &str,
        defender_token: &str,
    ) -> Result<Self, DuelError> {
        Ok(Self {
            attacker_stat,
            defender_stat,
            target_number,
            attacker_flip: FlipSpec::parse(attacker_token)?,
            defender_flip: FlipSpec::parse(defender_token)?,
        })
    }

    pub fn kind(&self) -> Result<DuelKind, DuelError> {
        match (self.defender_stat, self.target_number) {
            (Some(defender_stat), target) => Ok(DuelKind::Opposed {
                defender_stat,
                target,
            }),
            (None, Some(target)) => Ok(DuelKind::Simple { target }),
            (None, None) => Err(DuelError::AmbiguousDuelType),
        }
    }
}

/// Builds the full margin distribution for a duel. Totals come out at
/// C(54, a) for simple duels and C(54, a) * C(54, d) for opposed ones.
pub fn margin_distribution(config: &DuelConfig) -> Result<ValueDistribution, DuelError> {
    let kind = config.kind()?;
    let attacker = draw_distribution(config.attacker_flip)?.offset(config.attacker_stat);
    match kind {
        DuelKind::Simple { target } => Ok(attacker.offset(-target)),
        DuelKind::Opposed {
            defender_stat,
            target,
        } => {
            let defender = draw_distribution(config.defender_flip)?.offset(defender_stat);
            let (attacker, forced_fails) = match target {
                Some(target) => attacker.split_below(target),
                None => (attacker, 0),
            };
            let mut margins = attacker.convolve_sub(&defender);
            // The gate depends on the attacker alone, so the failed mass
            // pairs with every defender outcome.
            margins.add(FORCED_FAIL_MARGIN, forced_fails * defender.total());
            Ok(margins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FateDeck;

    #[test]
    fn kind_selection() {
        let base = DuelConfig {
            attacker_stat: 5,
            defender_stat: None,
            target_number: None,
            attacker_flip: FlipSpec::none(),
            defender_flip: FlipSpec::none(),
        };
        assert_eq!(base.kind(), Err(DuelError::AmbiguousDuelType));

        let simple = DuelConfig {
            target_number: Some(7),
            ..base
        };
        assert_eq!(simple.kind(), Ok(DuelKind::Simple { target: 7 }));

        let opposed = DuelConfig {
            defender_stat: Some(3),
            ..base
        };
        assert_eq!(
            opposed.kind(),
            Ok(DuelKind::Opposed {
                defender_stat: 3,
                target: None
            })
        );

        let gated = DuelConfig {
            defender_stat: Some(3),
            target_number: Some(8),
            ..base
        };
        assert_eq!(
            gated.kind(),
            Ok(DuelKind::Opposed {
                defender_stat: 3,
                target: Some(8)
            })
        );
    }

    #[test]
    fn from_tokens_propagates_flip_errors() {
        let result = DuelConfig::from_tokens(5, Some(3), None, "+-", "");
        assert!(matches!(result, Err(DuelError::InvalidModifier(_))));
        let result = DuelConfig::from_tokens(5, Some(3), None, "", "@");
        assert!(matches!(result, Err(DuelError::InvalidModifier(_))));
    }

    #[test]
    fn simple_margin_total() {
        let config = DuelConfig::from_tokens(5, None, Some(7), "", "").unwrap();
        let margins = margin_distribution(&config).unwrap();
        assert_eq!(margins.total(), FateDeck::hands(1));
    }

    #[test]
    fn opposed_margin_total_with_flips() {
        let config = DuelConfig::from_tokens(5, Some(3), None, "++", "-").unwrap();
        let margins = margin_distribution(&config).unwrap();
        assert_eq!(margins.total(), FateDeck::hands(3) * FateDeck::hands(2));
    }

    #[test]
    fn unreachable_target_forces_every_margin_negative() {
        // Offset attacker values top out at 14 + 5 = 19, under the gate.
        let config = DuelConfig::from_tokens(5, Some(0), Some(20), "", "").unwrap();
        let margins = margin_distribution(&config).unwrap();
        assert_eq!(margins.count_at(FORCED_FAIL_MARGIN), margins.total());
    }
}
