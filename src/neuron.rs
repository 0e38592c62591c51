//! Neuron models and dynamics for spiking neural networks
//!
//! This module provides the leaky integrate-and-fire (LIF) neuron, the
//! simplest spiking model: the membrane potential integrates input current,
//! leaks a fixed fraction per step, and fires when it crosses a threshold.

use crate::error::{Result, SpikelabError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a leaky integrate-and-fire neuron
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LIFConfig {
    /// Firing threshold the membrane potential must reach
    pub threshold: f64,
    /// Multiplicative per-step retention factor in [0, 1)
    pub decay: f64,
}

impl Default for LIFConfig {
    fn default() -> Self {
        Self {
            threshold: 1.0, // normalized firing threshold
            decay: 0.9,     // 10% leak per step
        }
    }
}

impl LIFConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(SpikelabError::invalid_neuron_config(
                "Threshold must be positive and finite",
            ));
        }
        if !self.decay.is_finite() || !(0.0..1.0).contains(&self.decay) {
            return Err(SpikelabError::invalid_neuron_config(
                "Decay must lie within [0, 1)",
            ));
        }
        Ok(())
    }
}

/// Leaky integrate-and-fire neuron
///
/// Discrete-time dynamics per [`update`](LIFNeuron::update) call: the
/// potential first leaks, then integrates the input current, then fires and
/// resets to zero if it reached the threshold. The potential is not clamped
/// below, so negative input currents are accepted and simply drive it
/// negative.
#[derive(Debug, Clone, PartialEq)]
pub struct LIFNeuron {
    potential: f64,
    spiked: bool,
    config: LIFConfig,
}

impl LIFNeuron {
    /// Create a neuron with the default configuration
    pub fn new() -> Self {
        Self::with_config(LIFConfig::default())
    }

    /// Create a neuron with an explicit configuration
    ///
    /// Parameters are taken as given; callers accepting untrusted values
    /// should run [`LIFConfig::validate`] first.
    pub fn with_config(config: LIFConfig) -> Self {
        Self {
            potential: 0.0,
            spiked: false,
            config,
        }
    }

    /// Advance the neuron one time step and report whether it fired
    ///
    /// The leak is applied before the input is added, so a fresh input is
    /// not attenuated on the step it arrives.
    pub fn update(&mut self, input_current: f64) -> bool {
        self.potential *= self.config.decay;
        self.potential += input_current;

        if self.potential >= self.config.threshold {
            self.potential = 0.0;
            self.spiked = true;
            return true;
        }

        self.spiked = false;
        false
    }

    /// Clear all transient state (potential and firing flag)
    pub fn reset(&mut self) {
        self.potential = 0.0;
        self.spiked = false;
    }

    /// Get the current membrane potential
    pub fn potential(&self) -> f64 {
        self.potential
    }

    /// Whether the most recent update fired the neuron
    pub fn spiked(&self) -> bool {
        self.spiked
    }

    /// Set the membrane potential (for testing/initialization)
    pub fn set_potential(&mut self, potential: f64) {
        self.potential = potential;
    }

    /// Get this neuron's configuration
    pub fn config(&self) -> LIFConfig {
        self.config
    }
}

impl Default for LIFNeuron {
    fn default() -> Self {
        Self::new()
    }
}
