//! Traits describing the world the edge rules consult.
//!
//! Oracles expose guard placement, quest state and the combat predictor. The
//! [`Env`] aggregate bundles them so the rules can access everything they need
//! without hard coupling to a concrete world representation.
mod combat;
mod error;
mod world;

pub use combat::CombatOracle;
pub use error::OracleError;
pub use world::WorldOracle;

/// Aggregates read-only oracles required by the edge rules.
pub struct Env<'a, W, C>
where
    W: WorldOracle + ?Sized,
    C: CombatOracle + ?Sized,
{
    world: Option<&'a W>,
    combat: Option<&'a C>,
}

// Manual impls: the derives would demand `W: Clone`, which trait objects never are.
impl<W, C> Clone for Env<'_, W, C>
where
    W: WorldOracle + ?Sized,
    C: CombatOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, C> Copy for Env<'_, W, C>
where
    W: WorldOracle + ?Sized,
    C: CombatOracle + ?Sized,
{
}

pub type PathfinderEnv<'a> = Env<'a, dyn WorldOracle + 'a, dyn CombatOracle + 'a>;

impl<'a, W, C> Env<'a, W, C>
where
    W: WorldOracle + ?Sized,
    C: CombatOracle + ?Sized,
{
    pub fn new(world: Option<&'a W>, combat: Option<&'a C>) -> Self {
        Self { world, combat }
    }

    pub fn with_all(world: &'a W, combat: &'a C) -> Self {
        Self::new(Some(world), Some(combat))
    }

    pub fn empty() -> Self {
        Self {
            world: None,
            combat: None,
        }
    }

    /// Returns the WorldOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WorldNotAvailable` if no world oracle was provided.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the CombatOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CombatNotAvailable` if no combat oracle was provided.
    pub fn combat(&self) -> Result<&'a C, OracleError> {
        self.combat.ok_or(OracleError::CombatNotAvailable)
    }
}

impl<'a, W, C> Env<'a, W, C>
where
    W: WorldOracle + 'a,
    C: CombatOracle + 'a,
{
    /// Converts this environment into a trait-object based `PathfinderEnv`.
    pub fn into_pathfinder_env(self) -> PathfinderEnv<'a> {
        let world: Option<&'a dyn WorldOracle> = self.world.map(|world| world as _);
        let combat: Option<&'a dyn CombatOracle> = self.combat.map(|combat| combat as _);
        Env::new(world, combat)
    }
}
