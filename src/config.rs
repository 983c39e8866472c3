//! Engine configuration: search depth, algorithm and evaluation heuristic.

use crate::constants::{MAX_DEPTH, SEARCH_DEPTH};
use crate::eval::EvaluatorKind;
use crate::search::Algorithm;

/// Rejected engine settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth {depth} is out of range (1-{max})")]
    DepthOutOfRange { depth: u32, max: u32 },
}

/// How the engine searches for a move.
///
/// Only [`EngineConfig::new`] and [`EngineConfig::with_depth`] set the
/// depth, so it is always in `1..=MAX_DEPTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below the current position, in `1..=MAX_DEPTH`.
    depth: u32,
    algorithm: Algorithm,
    evaluator: EvaluatorKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            algorithm: Algorithm::AlphaBeta,
            evaluator: EvaluatorKind::Window,
        }
    }
}

impl EngineConfig {
    /// Create a configuration, rejecting depths outside `1..=MAX_DEPTH`.
    pub fn new(
        depth: u32,
        algorithm: Algorithm,
        evaluator: EvaluatorKind,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_depth(depth)
            .map(|config| Self {
                algorithm,
                evaluator,
                ..config
            })
    }

    /// Plies searched below the current position.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Plain minimax or alpha-beta.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Heuristic applied at the depth cutoff.
    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }

    /// Same configuration with another search depth.
    pub fn with_depth(self, depth: u32) -> Result<Self, ConfigError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(ConfigError::DepthOutOfRange {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(Self { depth, ..self })
    }

    /// Same configuration with another search algorithm.
    pub fn with_algorithm(self, algorithm: Algorithm) -> Self {
        Self { algorithm, ..self }
    }

    /// Same configuration with another heuristic.
    pub fn with_evaluator(self, evaluator: EvaluatorKind) -> Self {
        Self { evaluator, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.depth(), 4);
        assert_eq!(config.algorithm(), Algorithm::AlphaBeta);
        assert_eq!(config.evaluator(), EvaluatorKind::Window);
    }

    #[test]
    fn test_depth_validation() {
        assert!(EngineConfig::new(1, Algorithm::Minimax, EvaluatorKind::Runs).is_ok());
        assert!(EngineConfig::default().with_depth(MAX_DEPTH).is_ok());
        assert_eq!(
            EngineConfig::default().with_depth(0),
            Err(ConfigError::DepthOutOfRange { depth: 0, max: MAX_DEPTH })
        );
        assert!(EngineConfig::default().with_depth(MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn test_rejected_depth_leaves_no_config() {
        for depth in [0, MAX_DEPTH + 1, u32::MAX] {
            assert!(EngineConfig::new(depth, Algorithm::AlphaBeta, EvaluatorKind::Window).is_err());
        }
        let config = EngineConfig::default().with_depth(3).unwrap();
        assert!(config.with_depth(0).is_err());
        assert_eq!(config.depth(), 3);
    }

    #[test]
    fn test_new_keeps_choices() {
        let config = EngineConfig::new(2, Algorithm::Minimax, EvaluatorKind::Runs).unwrap();
        assert_eq!(config.depth(), 2);
        assert_eq!(config.algorithm(), Algorithm::Minimax);
        assert_eq!(config.evaluator(), EvaluatorKind::Runs);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DepthOutOfRange { depth: 11, max: 10 };
        assert_eq!(err.to_string(), "search depth 11 is out of range (1-10)");
    }
}
