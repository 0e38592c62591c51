//! Synapses and spike-driven plasticity
//!
//! This module provides the scalar synaptic connection and its learning
//! rules: a simplified spike-timing dependent plasticity (STDP) update that
//! reacts to the pre- and post-synaptic firing flags of a single time step,
//! and the clamped additive adjustment used by reward-modulated training.

use crate::error::{Result, SpikelabError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simplified STDP configuration
///
/// Both spike flags passed to [`Synapse::stdp_update`] refer to the same
/// time step, so the rule collapses the classical timing window to a
/// coincidence test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct STDPConfig {
    /// Weight increase on coincident pre- and post-synaptic spikes
    pub a_plus: f64,
    /// Weight decrease when only the pre-synaptic neuron spikes
    pub a_minus: f64,
    /// Minimum weight value
    pub w_min: f64,
    /// Maximum weight value
    pub w_max: f64,
}

impl Default for STDPConfig {
    fn default() -> Self {
        Self {
            a_plus: 0.1,   // long-term potentiation step
            a_minus: 0.05, // long-term depression step
            w_min: 0.0,    // no negative weights
            w_max: 1.0,    // normalized maximum
        }
    }
}

impl STDPConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.a_plus.is_finite() || self.a_plus < 0.0 {
            return Err(SpikelabError::invalid_plasticity_config(
                "Potentiation step must be non-negative and finite",
            ));
        }
        if !self.a_minus.is_finite() || self.a_minus < 0.0 {
            return Err(SpikelabError::invalid_plasticity_config(
                "Depression step must be non-negative and finite",
            ));
        }
        if !self.w_min.is_finite() || !self.w_max.is_finite() || self.w_min >= self.w_max {
            return Err(SpikelabError::invalid_plasticity_config("Invalid weight bounds"));
        }
        Ok(())
    }
}

/// Reward-modulated plasticity configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardConfig {
    /// Per-trial weight adjustment applied to a whole output column
    pub delta: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self { delta: 0.05 }
    }
}

impl RewardConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.delta.is_finite() || self.delta < 0.0 {
            return Err(SpikelabError::invalid_plasticity_config(
                "Reward delta must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

/// A synaptic connection with a plastic scalar weight
///
/// The weight stays inside the configured bounds after every update; the
/// bounds are enforced by clamping, not by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Synapse {
    weight: f64,
}

impl Synapse {
    /// Create a synapse with the given initial weight
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }

    /// Get the current weight
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Overwrite the weight (for testing/initialization)
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Apply the simplified STDP rule for one time step
    ///
    /// Cases, in order of precedence:
    /// - pre and post spiked: potentiate by `a_plus`, capped at `w_max`
    /// - only pre spiked: depress by `a_minus`, floored at `w_min`
    /// - pre silent: no change, whatever the post-synaptic neuron did
    ///
    /// Learning reacts to pre-synaptic activity only. A post-only spike
    /// leaving the weight untouched is intentional and load-bearing; the
    /// training loop relies on it.
    pub fn stdp_update(&mut self, pre_spiked: bool, post_spiked: bool, config: &STDPConfig) {
        if pre_spiked && post_spiked {
            self.weight = (self.weight + config.a_plus).min(config.w_max);
        } else if pre_spiked {
            self.weight = (self.weight - config.a_minus).max(config.w_min);
        }
    }

    /// Clamped additive weight adjustment
    ///
    /// Used by reward-modulated training to nudge a whole output column up
    /// or down; the result stays inside `[w_min, w_max]`.
    pub fn adjust(&mut self, delta: f64, config: &STDPConfig) {
        self.weight = (self.weight + delta).max(config.w_min).min(config.w_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdp_config_validation() {
        let config = STDPConfig::default();
        assert!(config.validate().is_ok());

        let mut config = STDPConfig::default();
        config.a_plus = -0.1;
        assert!(config.validate().is_err());

        let mut config = STDPConfig::default();
        config.w_min = 1.0;
        config.w_max = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reward_config_validation() {
        assert!(RewardConfig::default().validate().is_ok());
        assert!(RewardConfig { delta: -0.05 }.validate().is_err());
        assert!(RewardConfig { delta: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_potentiation_and_depression_sequence() {
        let config = STDPConfig::default();
        let mut synapse = Synapse::new(0.5);

        synapse.stdp_update(true, true, &config);
        assert!((synapse.weight() - 0.6).abs() < 1e-12);

        synapse.stdp_update(true, false, &config);
        assert!((synapse.weight() - 0.55).abs() < 1e-12);

        synapse.stdp_update(false, false, &config);
        assert!((synapse.weight() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_post_only_spike_changes_nothing() {
        let config = STDPConfig::default();
        let mut synapse = Synapse::new(0.42);
        synapse.stdp_update(false, true, &config);
        assert_eq!(synapse.weight(), 0.42);
    }

    #[test]
    fn test_repeated_potentiation_saturates_at_max() {
        let config = STDPConfig::default();
        let mut synapse = Synapse::new(0.95);
        let mut previous = synapse.weight();

        for _ in 0..20 {
            synapse.stdp_update(true, true, &config);
            assert!(synapse.weight() >= previous);
            assert!(synapse.weight() <= config.w_max);
            previous = synapse.weight();
        }
        assert_eq!(synapse.weight(), config.w_max);
    }

    #[test]
    fn test_repeated_depression_saturates_at_min() {
        let config = STDPConfig::default();
        let mut synapse = Synapse::new(0.12);
        let mut previous = synapse.weight();

        for _ in 0..20 {
            synapse.stdp_update(true, false, &config);
            assert!(synapse.weight() <= previous);
            assert!(synapse.weight() >= config.w_min);
            previous = synapse.weight();
        }
        assert_eq!(synapse.weight(), config.w_min);
    }

    #[test]
    fn test_adjust_clamps_both_ends() {
        let config = STDPConfig::default();

        let mut synapse = Synapse::new(0.98);
        synapse.adjust(0.05, &config);
        assert_eq!(synapse.weight(), 1.0);

        let mut synapse = Synapse::new(0.02);
        synapse.adjust(-0.05, &config);
        assert_eq!(synapse.weight(), 0.0);

        let mut synapse = Synapse::new(0.5);
        synapse.adjust(0.05, &config);
        assert!((synapse.weight() - 0.55).abs() < 1e-12);
    }
}
