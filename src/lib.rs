//! # spikelab
//!
//! Educational spiking neural network primitives:
//!
//! - **LIF Neurons**: discrete-time leaky integrate-and-fire dynamics
//! - **STDP Synapses**: simplified spike-timing dependent plasticity with
//!   clamped weights
//! - **Toy Classifier**: a fixed 4-input / 2-output network that labels a
//!   pattern by counting output spikes over a short simulation
//! - **Training Drivers**: reward-modulated training and evaluation that
//!   return structured reports instead of printing
//!
//! ## Quick Start
//!
//! ```rust
//! use spikelab::prelude::*;
//!
//! // Deterministic construction from a seed
//! let mut network = Network::seeded(42);
//!
//! // Classify a left-heavy pattern without learning
//! let class = network.forward(&[1.0, 0.8, 0.1, 0.2], false).unwrap();
//! assert!(class < 2);
//!
//! // Run a full reward-modulated training pass
//! let report = train(&mut network, &canonical_patterns(), 50, 10).unwrap();
//! assert_eq!(report.checkpoints.len(), 5);
//! ```
//!
//! All randomness enters through the generator handed to the network
//! constructor, so every simulation is reproducible from a seed.

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export important types for convenience
pub use crate::{
    error::{Result, SpikelabError},
    network::{Network, NetworkSnapshot, WeightMatrix},
    neuron::{LIFConfig, LIFNeuron},
    synapse::{RewardConfig, STDPConfig, Synapse},
    training::{EvaluationReport, LabeledPattern, Pattern, TrainingReport},
};

// Core modules
pub mod error;
pub mod network;
pub mod neuron;
pub mod synapse;
pub mod training;

// Prelude module for common imports
pub mod prelude {
    //! Common imports for spikelab users

    pub use crate::{error::*, network::*, neuron::*, synapse::*, training::*};
}

/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the spikelab library
///
/// Sets up logging; call once at the beginning of your application.
pub fn init() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::try_init().ok();

    log::info!("spikelab v{}", VERSION);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }
}
