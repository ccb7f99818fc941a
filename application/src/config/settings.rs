//! Runtime settings for the orchestrator
//!
//! Settings are constructed once by the config layer and passed into the
//! orchestrator by value; the core never reads ambient process-wide state.

use serde::{Deserialize, Serialize};
use smartgpt_domain::{Mode, Model, Verbosity};
use thiserror::Error;

/// Configuration problems caught before any gateway call is made
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("model identifier is empty")]
    EmptyModel,

    #[error("at least one generator temperature is required")]
    NoGenerators,

    #[error("minimum generator quorum must be at least 2, got {0}")]
    QuorumTooSmall(usize),

    #[error("minimum generator quorum {min} exceeds fan-out width {width}")]
    QuorumExceedsWidth { min: usize, width: usize },

    #[error("temperature {0} is outside the valid range 0.0..=2.0")]
    TemperatureOutOfRange(f32),
}

/// Read-only configuration snapshot for one orchestrator
///
/// The fan-out width of the resolver pipeline is the number of generator
/// temperatures: one generator agent is created per entry, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pipeline strategy to run
    pub mode: Mode,
    /// Model identifier, passed through to the gateway unchanged
    pub model: Model,
    /// How much intermediate output to attach to responses
    pub verbosity: Verbosity,
    /// One generator per entry; the value is that generator's sampling
    /// temperature
    pub generator_temps: Vec<f32>,
    pub researcher_temp: f32,
    pub resolver_temp: f32,
    /// Minimum generators that must succeed for the resolver pipeline to
    /// proceed past fan-out
    pub min_generators: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Resolver,
            model: Model::default(),
            verbosity: Verbosity::Some,
            generator_temps: vec![0.7, 0.7, 0.7],
            researcher_temp: 0.5,
            resolver_temp: 0.5,
            min_generators: 2,
        }
    }
}

impl Settings {
    /// Fan-out width of the resolver pipeline
    pub fn num_generators(&self) -> usize {
        self.generator_temps.len()
    }

    /// Fail fast on configurations no pipeline could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if self.generator_temps.is_empty() {
            return Err(ConfigError::NoGenerators);
        }
        if self.min_generators < 2 {
            return Err(ConfigError::QuorumTooSmall(self.min_generators));
        }
        if self.min_generators > self.num_generators() {
            return Err(ConfigError::QuorumExceedsWidth {
                min: self.min_generators,
                width: self.num_generators(),
            });
        }
        for &temp in self
            .generator_temps
            .iter()
            .chain([&self.researcher_temp, &self.resolver_temp])
        {
            if !(0.0..=2.0).contains(&temp) {
                return Err(ConfigError::TemperatureOutOfRange(temp));
            }
        }
        Ok(())
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_generator_temps(mut self, temps: Vec<f32>) -> Self {
        self.generator_temps = temps;
        self
    }

    pub fn with_min_generators(mut self, min: usize) -> Self {
        self.min_generators = min;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.mode, Mode::Resolver);
        assert_eq!(settings.num_generators(), 3);
        assert_eq!(settings.min_generators, 2);
    }

    #[test]
    fn test_empty_model_rejected() {
        let settings = Settings::default().with_model("  ");
        assert_eq!(settings.validate(), Err(ConfigError::EmptyModel));
    }

    #[test]
    fn test_no_generators_rejected() {
        let settings = Settings::default().with_generator_temps(vec![]);
        assert_eq!(settings.validate(), Err(ConfigError::NoGenerators));
    }

    #[test]
    fn test_quorum_bounds() {
        let too_small = Settings::default().with_min_generators(1);
        assert_eq!(too_small.validate(), Err(ConfigError::QuorumTooSmall(1)));

        let too_large = Settings::default().with_min_generators(5);
        assert_eq!(
            too_large.validate(),
            Err(ConfigError::QuorumExceedsWidth { min: 5, width: 3 })
        );
    }

    #[test]
    fn test_temperature_range() {
        let settings = Settings::default().with_generator_temps(vec![0.7, 2.5]);
        assert_eq!(
            settings.validate(),
            Err(ConfigError::TemperatureOutOfRange(2.5))
        );
    }
}
