//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// The edge rules cannot classify anything without the world and combat
/// oracles, so a missing oracle is fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// WorldOracle is not available in the environment.
    #[error("WorldOracle not available")]
    WorldNotAvailable,

    /// CombatOracle is not available in the environment.
    #[error("CombatOracle not available")]
    CombatNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WorldNotAvailable => "ORACLE_WORLD_NOT_AVAILABLE",
            Self::CombatNotAvailable => "ORACLE_COMBAT_NOT_AVAILABLE",
        }
    }
}
