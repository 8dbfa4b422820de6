use crate::DuelError;
use serde::{Deserialize, Serialize};

/// Tie-break rule when a side draws more than one card.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    None,
    Best,
    Worst,
}

/// A validated flip modifier: how many cards the side draws and which of
/// them counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FlipSpec {
    pub draw_count: u8,
    pub selection: Selection,
}

impl FlipSpec {
    /// The unmodified single-card draw.
    pub fn none() -> Self {
        Self {
            draw_count: 1,
            selection: Selection::None,
        }
    }

    /// Parses a flip token: a run of `+` or `-`, length 0..=2, one
    /// polarity only. Each mark adds one card to the draw; `+` keeps the
    /// best card, `-` the worst.
    pub fn parse(token: &str) -> Result<Self, DuelError> {
        if token.is_empty() {
            return Ok(Self::none());
        }
        if token.chars().any(|mark| mark != '+' && mark != '-') {
            return Err(DuelError::InvalidModifier(format!(
                "unknown flip mark in {token:?}"
            )));
        }
        let marks = token.chars().count();
        if marks > 2 {
            return Err(DuelError::InvalidModifier(format!(
                "more than two flip marks in {token:?}"
            )));
        }
        let positive = token.starts_with('+');
        if token.chars().any(|mark| (mark == '+') != positive) {
            return Err(DuelError::InvalidModifier(format!(
                "mixed positive and negative flips in {token:?}"
            )));
        }
        Ok(Self {
            draw_count: marks as u8 + 1,
            selection: if positive {
                Selection::Best
            } else {
                Selection::Worst
            },
        })
    }
}
