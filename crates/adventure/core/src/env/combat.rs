use crate::state::{HeroId, Position};

/// Combat outcome predictor.
///
/// Both evaluations are opaque to the rules: they are only compared against
/// the army that is still alive along the current chain.
pub trait CombatOracle: Send + Sync {
    /// Projected threat at `position` for `hero`. `committing` is set when the
    /// caller intends to fight there rather than merely pass by.
    fn evaluate_danger(&self, position: Position, hero: HeroId, committing: bool) -> u64;

    /// Projected army value lost when `hero` with `army_value` engages `danger`.
    fn evaluate_army_loss(&self, hero: HeroId, army_value: u64, danger: u64) -> u64;
}
