use crate::{DuelError, Selection, HIGH_WILD, LOW_WILD};
use serde::{Deserialize, Serialize};

/// One step of the draw-resolution policy. Wild rules fire when the named
/// card is anywhere in the draw; the selection rules always fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawRule {
    Wild(i64),
    BestOf,
    WorstOf,
}

impl DrawRule {
    fn apply(self, cards: &[i64]) -> Option<i64> {
        match self {
            DrawRule::Wild(value) => cards.contains(&value).then_some(value),
            DrawRule::BestOf => cards.iter().copied().max(),
            DrawRule::WorstOf => cards.iter().copied().min(),
        }
    }
}

/// The rule list for a multi-card draw, in firing order. The low wild
/// outranks the high wild, and both outrank the selection, so a joker in
/// the draw gives the same outcome whichever polarity the flip had.
pub fn resolution_rules(selection: Selection) -> Result<[DrawRule; 3], DuelError> {
    let last = match selection {
        Selection::Best => DrawRule::BestOf,
        Selection::Worst => DrawRule::WorstOf,
        Selection::None => return Err(DuelError::InconsistentDraw),
    };
    Ok([DrawRule::Wild(LOW_WILD), DrawRule::Wild(HIGH_WILD), last])
}

/// Resolves a drawn hand to its effective card value. A single card is
/// taken literally, jokers included; larger hands go through the rule
/// list.
pub fn resolve_draw(cards: &[i64], selection: Selection) -> Result<i64, DuelError> {
    if let [card] = cards {
        return Ok(*card);
    }
    let rules = resolution_rules(selection)?;
    rules
        .iter()
        .find_map(|rule| rule.apply(cards))
        .ok_or(DuelError::InconsistentDraw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_card_is_literal() {
        assert_eq!(resolve_draw(&[7], Selection::None).unwrap(), 7);
        assert_eq!(resolve_draw(&[0], Selection::None).unwrap(), 0);
        assert_eq!(resolve_draw(&[14], Selection::None).unwrap(), 14);
        // A lone card ignores whatever selection rides along.
        assert_eq!(resolve_draw(&[7], Selection::Best).unwrap(), 7);
    }

    #[test]
    fn low_wild_dominates() {
        assert_eq!(resolve_draw(&[0, 5], Selection::Best).unwrap(), 0);
        assert_eq!(resolve_draw(&[0, 5, 10], Selection::Best).unwrap(), 0);
        assert_eq!(resolve_draw(&[0, 5, 10], Selection::Worst).unwrap(), 0);
        // Both wilds in hand: the low one wins.
        assert_eq!(resolve_draw(&[0, 14], Selection::Best).unwrap(), 0);
        assert_eq!(resolve_draw(&[0, 14, 7], Selection::Worst).unwrap(), 0);
    }

    #[test]
    fn high_wild_dominates_selection() {
        assert_eq!(resolve_draw(&[14, 3], Selection::Worst).unwrap(), 14);
        assert_eq!(resolve_draw(&[14, 3, 8], Selection::Worst).unwrap(), 14);
        assert_eq!(resolve_draw(&[14, 3], Selection::Best).unwrap(), 14);
    }

    #[test]
    fn best_and_worst() {
        assert_eq!(resolve_draw(&[3, 7, 2], Selection::Best).unwrap(), 7);
        assert_eq!(resolve_draw(&[3, 7, 2], Selection::Worst).unwrap(), 2);
        assert_eq!(resolve_draw(&[1, 13], Selection::Best).unwrap(), 13);
        assert_eq!(resolve_draw(&[1, 13], Selection::Worst).unwrap(), 1);
    }

    #[test]
    fn multi_card_without_selection_fails() {
        assert_eq!(
            resolve_draw(&[3, 7], Selection::None),
            Err(DuelError::InconsistentDraw)
        );
        assert_eq!(
            resolve_draw(&[3, 7, 10], Selection::None),
            Err(DuelError::InconsistentDraw)
        );
    }
}
