/// The fate deck: four copies of each rank 1..=13 plus two singleton
/// wild jokers, the low one worth 0 and the high one worth 14.
pub struct FateDeck;

pub const LOW_WILD: i64 = 0;
pub const HIGH_WILD: i64 = 14;
pub const RANK_MIN: i64 = 1;
pub const RANK_MAX: i64 = 13;
pub const COPIES_PER_RANK: u64 = 4;

impl FateDeck {
    pub const SIZE: u64 = 54;

    /// Number of cards in the deck carrying the given value.
    pub fn copies_of(value: i64) -> u64 {
        match value {
            LOW_WILD | HIGH_WILD => 1,
            RANK_MIN..=RANK_MAX => COPIES_PER_RANK,
            _ => 0,
        }
    }

    /// All distinct card values, low wild first.
    pub fn values() -> impl Iterator<Item = i64> {
        LOW_WILD..=HIGH_WILD
    }

    /// The full 54-card multiset, one entry per physical card.
    pub fn cards() -> Vec<i64> {
        let mut cards = Vec::with_capacity(Self::SIZE as usize);
        for value in Self::values() {
            for _ in 0..Self::copies_of(value) {
                cards.push(value);
            }
        }
        cards
    }

    /// How many hands of `draw_count` cards the deck offers.
    pub fn hands(draw_count: u8) -> u64 {
        choose(Self::SIZE, draw_count as u64)
    }
}

/// Binomial coefficient. Returns 0 when k > n, which the closed-form
/// counts rely on for small draws.
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
