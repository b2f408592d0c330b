//! Difficulty calibration for the automated opponent

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Knobs for [`Engine`](super::Engine).
///
/// The defaults are the medium difficulty the opponent plays at: a 70%
/// chance of a 3-ply search (2-ply otherwise), 15 sampled root moves,
/// ±0.25 of score noise and a 20% chance of a deliberate blunder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chance of searching `deep_depth` plies instead of `shallow_depth`
    pub deep_search_probability: f64,
    pub deep_depth: u8,
    pub shallow_depth: u8,
    /// Root moves searched after shuffling
    pub root_sample: usize,
    /// Half-width of the uniform noise added to each root score
    pub noise: f64,
    /// Chance of replacing the best move with a random other legal move
    pub blunder_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deep_search_probability: 0.7,
            deep_depth: 3,
            shallow_depth: 2,
            root_sample: 15,
            noise: 0.25,
            blunder_probability: 0.2,
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("deep_search_probability", self.deep_search_probability),
            ("blunder_probability", self.blunder_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Config(format!("{} must be within [0, 1], got {}", name, p)));
            }
        }
        if self.deep_depth == 0 || self.shallow_depth == 0 {
            return Err(Error::Config("search depths must be at least 1".into()));
        }
        if self.root_sample == 0 {
            return Err(Error::Config("root_sample must be at least 1".into()));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(Error::Config(format!("noise must be a non-negative number, got {}", self.noise)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "blunder_probability": 0.0, "root_sample": 8 }"#).unwrap();
        assert_eq!(config.blunder_probability, 0.0);
        assert_eq!(config.root_sample, 8);
        assert_eq!(config.deep_depth, 3);
        assert_eq!(config.noise, 0.25);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "blunder_probability": 1.5 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "shallow_depth": 0 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "root_sample": 0 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "noise": -1.0 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(EngineConfig::from_json("not json"), Err(Error::Json(_))));
    }
}
