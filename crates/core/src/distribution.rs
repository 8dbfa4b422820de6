use crate::{
    choose, DuelError, FateDeck, FlipSpec, Selection, COPIES_PER_RANK, HIGH_WILD, LOW_WILD,
    RANK_MAX, RANK_MIN,
};
use std::collections::BTreeMap;

/// How many deck combinations land on each outcome value. Doubles as the
/// margin distribution once sides are combined, so keys are open-range
/// integers rather than card values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueDistribution {
    counts: BTreeMap<i64, u64>,
}

impl ValueDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: i64, count: u64) {
        if count > 0 {
            *self.counts.entry(value).or_insert(0) += count;
        }
    }

    pub fn count_at(&self, value: i64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    pub fn count_at_least(&self, threshold: i64) -> u64 {
        self.counts.range(threshold..).map(|(_, &count)| count).sum()
    }

    /// Shifts every outcome by a flat bonus (a side's stat).
    pub fn offset(&self, delta: i64) -> Self {
        let counts = self
            .counts
            .iter()
            .map(|(&value, &count)| (value + delta, count))
            .collect();
        Self { counts }
    }

    /// Splits off everything under `threshold`, returning the kept part
    /// and the number of combinations that fell below.
    pub fn split_below(&self, threshold: i64) -> (Self, u64) {
        let mut kept = Self::new();
        let mut below = 0;
        for (value, count) in self.iter() {
            if value < threshold {
                below += count;
            } else {
                kept.add(value, count);
            }
        }
        (kept, below)
    }

    /// Margin distribution of two independent sides: for every pair of
    /// outcomes, `self` minus `other`, weighted by the product of counts.
    /// Both supports are bounded, so this stays a handful of multiplies
    /// where the raw pairing would be hundreds of millions.
    pub fn convolve_sub(&self, other: &Self) -> Self {
        let mut margins = Self::new();
        for (ours, our_count) in self.iter() {
            for (theirs, their_count) in other.iter() {
                margins.add(ours - theirs, our_count * their_count);
            }
        }
        margins
    }
}

impl FromIterator<(i64, u64)> for ValueDistribution {
    fn from_iter<T: IntoIterator<Item = (i64, u64)>>(iter: T) -> Self {
        let mut dist = Self::new();
        for (value, count) in iter {
            dist.add(value, count);
        }
        dist
    }
}

/// Counts the resolved outcome of every `C(54, draw_count)` hand without
/// enumerating them. Hands are classified by wild content: the low wild
/// claims every hand it appears in, the high wild claims the rest of the
/// hands it appears in, and wild-free hands are counted per candidate
/// rank with prefix/suffix binomials over the 52 ordinary cards.
pub fn draw_distribution(flip: FlipSpec) -> Result<ValueDistribution, DuelError> {
    let n = flip.draw_count as u64;
    if n == 1 {
        return Ok(FateDeck::values()
            .map(|value| (value, FateDeck::copies_of(value)))
            .collect());
    }

    let mut dist = ValueDistribution::new();
    dist.add(LOW_WILD, choose(FateDeck::SIZE - 1, n - 1));
    dist.add(HIGH_WILD, choose(FateDeck::SIZE - 2, n - 1));

    let cards_up_to = |rank: i64| COPIES_PER_RANK * rank as u64;
    let cards_from = |rank: i64| COPIES_PER_RANK * (RANK_MAX - rank + 1) as u64;
    for rank in RANK_MIN..=RANK_MAX {
        let count = match flip.selection {
            Selection::Best => choose(cards_up_to(rank), n) - choose(cards_up_to(rank - 1), n),
            Selection::Worst => choose(cards_from(rank), n) - choose(cards_from(rank + 1), n),
            Selection::None => return Err(DuelError::InconsistentDraw),
        };
        dist.add(rank, count);
    }
    Ok(dist)
}
