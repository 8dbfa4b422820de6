use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DuelError {
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    /// A multi-card draw reached resolution without a tie-break rule.
    /// Unreachable through a parsed `FlipSpec`; kept recoverable so the
    /// engine never panics on a hand-built draw.
    #[error("multi-card draw without a selection rule")]
    InconsistentDraw,
    #[error("ambiguous duel type: need a defender stat or a target number")]
    AmbiguousDuelType,
}
