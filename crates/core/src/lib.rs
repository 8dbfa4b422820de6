//! Exact duel odds over the 54-card fate deck. Keep this crate free of IO
//! and platform concerns.

pub mod aggregate;
pub mod deck;
pub mod distribution;
pub mod duel;
pub mod error;
pub mod flip;
pub mod resolve;

pub use aggregate::*;
pub use deck::*;
pub use distribution::*;
pub use duel::*;
pub use error::*;
pub use flip::*;
pub use resolve::*;

/// Runs a full duel calculation: validate, build distributions, reduce to
/// the two published rates. Fails before any counting starts.
pub fn evaluate(config: &DuelConfig) -> Result<AggregateResult, DuelError> {
    let margins = margin_distribution(config)?;
    Ok(aggregate(&margins))
}
