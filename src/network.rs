//! Fixed feed-forward spiking network: 4 inputs, 2 outputs
//!
//! This module couples an input layer to an output layer through a dense
//! synapse matrix and runs a fixed-length discrete-time simulation per
//! classification call. Synaptic weights are the only state that survives
//! across calls; neuron transients are cleared at the start of every run.

use crate::{
    error::{Result, SpikelabError},
    neuron::{LIFConfig, LIFNeuron},
    synapse::{RewardConfig, STDPConfig, Synapse},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of input neurons in the fixed topology
pub const INPUT_COUNT: usize = 4;

/// Number of output neurons (one per class)
pub const OUTPUT_COUNT: usize = 2;

/// Number of simulation steps per forward pass
pub const TICKS: usize = 20;

/// Scaling factor applied to raw input values before injection
pub const INPUT_SCALE: f64 = 0.5;

/// Lower bound (inclusive) of the initial random weight range
pub const INITIAL_WEIGHT_MIN: f64 = 0.3;

/// Upper bound (exclusive) of the initial random weight range
pub const INITIAL_WEIGHT_MAX: f64 = 0.7;

/// Read-only view of the synaptic weight matrix, input-major:
/// `matrix[i][j]` is the weight from input neuron `i` to output neuron `j`
pub type WeightMatrix = [[f64; OUTPUT_COUNT]; INPUT_COUNT];

/// Plain-data snapshot of network state for reporting layers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkSnapshot {
    /// Synaptic weights at the time of the snapshot
    pub weights: WeightMatrix,
    /// Neuron configuration shared by both layers
    pub neuron_config: LIFConfig,
    /// STDP configuration
    pub stdp_config: STDPConfig,
    /// Reward configuration
    pub reward_config: RewardConfig,
}

/// Fully connected two-layer spiking network
///
/// Every input neuron connects to every output neuron; there are no
/// recurrent or lateral connections. The matrix dimensions are fixed for
/// the lifetime of the instance.
///
/// `forward` and `train_with_reward` take `&mut self`, so overlapping calls
/// on one instance are ruled out by the borrow checker; the internal spike
/// tally and neuron transients are only consistent within a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_neurons: [LIFNeuron; INPUT_COUNT],
    output_neurons: [LIFNeuron; OUTPUT_COUNT],
    synapses: [[Synapse; OUTPUT_COUNT]; INPUT_COUNT],
    neuron_config: LIFConfig,
    stdp: STDPConfig,
    reward: RewardConfig,
}

impl Network {
    /// Create a network with default configurations
    ///
    /// Each synapse is seeded with an independent uniform-random weight in
    /// the half-open range `[INITIAL_WEIGHT_MIN, INITIAL_WEIGHT_MAX)` drawn
    /// from the given generator. The generator is the only source of
    /// randomness in the crate, so identical generator state yields
    /// identical networks.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::build(
            LIFConfig::default(),
            STDPConfig::default(),
            RewardConfig::default(),
            rng,
        )
    }

    /// Create a network from a fixed seed (convenience for deterministic runs)
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Create a network with explicit configurations
    pub fn with_configs(
        neuron_config: LIFConfig,
        stdp: STDPConfig,
        reward: RewardConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        neuron_config.validate()?;
        stdp.validate()?;
        reward.validate()?;
        Ok(Self::build(neuron_config, stdp, reward, rng))
    }

    fn build(
        neuron_config: LIFConfig,
        stdp: STDPConfig,
        reward: RewardConfig,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            input_neurons: std::array::from_fn(|_| LIFNeuron::with_config(neuron_config)),
            output_neurons: std::array::from_fn(|_| LIFNeuron::with_config(neuron_config)),
            synapses: std::array::from_fn(|_| {
                std::array::from_fn(|_| {
                    Synapse::new(rng.gen_range(INITIAL_WEIGHT_MIN..INITIAL_WEIGHT_MAX))
                })
            }),
            neuron_config,
            stdp,
            reward,
        }
    }

    /// Run the fixed-length simulation and return the winning class
    ///
    /// All neuron transients are reset first, then the network is simulated
    /// for [`TICKS`] steps. Per step, in order:
    ///
    /// 1. input neurons integrate the scaled external drive
    /// 2. each input that spiked this step adds its synaptic weights to the
    ///    per-output current accumulator
    /// 3. output neurons integrate those currents and output spikes are
    ///    tallied
    /// 4. with `learn` set, every synapse sees the spike flags both layers
    ///    produced this step
    ///
    /// This order is a contract, not an accident of iteration. The output
    /// with the higher spike tally wins; ties resolve to class 0.
    ///
    /// Fails fast if `inputs` does not have exactly [`INPUT_COUNT`] elements.
    pub fn forward(&mut self, inputs: &[f64], learn: bool) -> Result<usize> {
        if inputs.len() != INPUT_COUNT {
            return Err(SpikelabError::invalid_input(INPUT_COUNT, inputs.len()));
        }

        for neuron in &mut self.input_neurons {
            neuron.reset();
        }
        for neuron in &mut self.output_neurons {
            neuron.reset();
        }

        let mut spike_tally = [0u32; OUTPUT_COUNT];

        for _ in 0..TICKS {
            for (neuron, &value) in self.input_neurons.iter_mut().zip(inputs) {
                neuron.update(value * INPUT_SCALE);
            }

            let mut currents = [0.0f64; OUTPUT_COUNT];
            for (i, row) in self.synapses.iter().enumerate() {
                if self.input_neurons[i].spiked() {
                    for (j, synapse) in row.iter().enumerate() {
                        currents[j] += synapse.weight();
                    }
                }
            }

            for (j, neuron) in self.output_neurons.iter_mut().enumerate() {
                if neuron.update(currents[j]) {
                    spike_tally[j] += 1;
                }
            }

            if learn {
                for (i, row) in self.synapses.iter_mut().enumerate() {
                    let pre_spiked = self.input_neurons[i].spiked();
                    for (j, synapse) in row.iter_mut().enumerate() {
                        synapse.stdp_update(pre_spiked, self.output_neurons[j].spiked(), &self.stdp);
                    }
                }
            }
        }

        Ok(if spike_tally[0] >= spike_tally[1] { 0 } else { 1 })
    }

    /// Run one reward-modulated training trial
    ///
    /// Performs a learning forward pass (which already applies per-step
    /// STDP), then adjusts one output column once: the correct column is
    /// reinforced when the prediction was right, otherwise the column that
    /// won incorrectly is punished.
    ///
    /// Fails fast if `correct_class` is not a valid class index or the
    /// input vector has the wrong length.
    pub fn train_with_reward(&mut self, inputs: &[f64], correct_class: usize) -> Result<()> {
        if correct_class >= OUTPUT_COUNT {
            return Err(SpikelabError::invalid_class_label(correct_class, OUTPUT_COUNT));
        }

        let predicted = self.forward(inputs, true)?;

        if predicted == correct_class {
            for row in &mut self.synapses {
                row[correct_class].adjust(self.reward.delta, &self.stdp);
            }
        } else {
            for row in &mut self.synapses {
                row[predicted].adjust(-self.reward.delta, &self.stdp);
            }
        }

        Ok(())
    }

    /// Get a copy of the full weight matrix
    pub fn weights(&self) -> WeightMatrix {
        std::array::from_fn(|i| std::array::from_fn(|j| self.synapses[i][j].weight()))
    }

    /// Overwrite a single synaptic weight (for testing/initialization)
    pub fn set_weight(&mut self, input: usize, output: usize, weight: f64) -> Result<()> {
        if input >= INPUT_COUNT {
            return Err(SpikelabError::index_out_of_range(input, INPUT_COUNT));
        }
        if output >= OUTPUT_COUNT {
            return Err(SpikelabError::index_out_of_range(output, OUTPUT_COUNT));
        }
        self.synapses[input][output].set_weight(weight);
        Ok(())
    }

    /// Take a plain-data snapshot of the current network state
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            weights: self.weights(),
            neuron_config: self.neuron_config,
            stdp_config: self.stdp,
            reward_config: self.reward,
        }
    }

    /// Get the STDP configuration
    pub fn stdp_config(&self) -> STDPConfig {
        self.stdp
    }

    /// Get the reward configuration
    pub fn reward_config(&self) -> RewardConfig {
        self.reward
    }

    /// Get the neuron configuration shared by both layers
    pub fn neuron_config(&self) -> LIFConfig {
        self.neuron_config
    }
}

/// JSON serialization helpers
#[cfg(feature = "serde")]
pub mod json {
    use super::*;

    /// Serialize a network snapshot to a JSON string
    pub fn serialize_snapshot(snapshot: &NetworkSnapshot) -> Result<String> {
        serde_json::to_string(snapshot)
            .map_err(|e| SpikelabError::serialization_error(format!("JSON serialization failed: {}", e)))
    }

    /// Deserialize a network snapshot from a JSON string
    pub fn deserialize_snapshot(json: &str) -> Result<NetworkSnapshot> {
        serde_json::from_str(json)
            .map_err(|e| SpikelabError::serialization_error(format!("JSON deserialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_network(weight: f64) -> Network {
        let mut network = Network::seeded(0);
        for i in 0..INPUT_COUNT {
            for j in 0..OUTPUT_COUNT {
                network.set_weight(i, j, weight).unwrap();
            }
        }
        network
    }

    #[test]
    fn test_construction_weight_range() {
        let network = Network::seeded(99);
        for row in network.weights() {
            for weight in row {
                assert!((INITIAL_WEIGHT_MIN..INITIAL_WEIGHT_MAX).contains(&weight));
            }
        }
    }

    #[test]
    fn test_same_seed_same_network() {
        let a = Network::seeded(7);
        let b = Network::seeded(7);
        assert_eq!(a.weights(), b.weights());
    }

    #[test]
    fn test_with_configs_validates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bad = LIFConfig::default();
        bad.decay = 1.5;
        assert!(Network::with_configs(
            bad,
            STDPConfig::default(),
            RewardConfig::default(),
            &mut rng,
        )
        .is_err());

        assert!(Network::with_configs(
            LIFConfig::default(),
            STDPConfig::default(),
            RewardConfig::default(),
            &mut rng,
        )
        .is_ok());
    }

    #[test]
    fn test_forward_rejects_wrong_length() {
        let mut network = Network::seeded(3);
        assert_eq!(
            network.forward(&[1.0, 0.5], false),
            Err(SpikelabError::invalid_input(INPUT_COUNT, 2))
        );
        assert!(network.forward(&[0.1; 5], false).is_err());
    }

    #[test]
    fn test_train_rejects_bad_label() {
        let mut network = Network::seeded(3);
        assert_eq!(
            network.train_with_reward(&[1.0, 0.8, 0.1, 0.2], 2),
            Err(SpikelabError::invalid_class_label(2, OUTPUT_COUNT))
        );
    }

    #[test]
    fn test_forward_without_learning_leaves_weights_unchanged() {
        let mut network = Network::seeded(11);
        let before = network.weights();
        network.forward(&[1.0, 0.8, 0.1, 0.2], false).unwrap();
        assert_eq!(network.weights(), before);
    }

    #[test]
    fn test_forward_with_learning_changes_weights() {
        // A saturating drive makes every input spike, so the first
        // coincident step potentiates all eight synapses away from their
        // initial values (which start strictly below the maximum).
        let mut network = Network::seeded(11);
        let before = network.weights();
        network.forward(&[1.0, 1.0, 1.0, 1.0], true).unwrap();
        assert_ne!(network.weights(), before);
    }

    #[test]
    fn test_dominant_column_wins() {
        let mut network = uniform_network(0.0);
        for i in 0..INPUT_COUNT {
            network.set_weight(i, 0, 1.0).unwrap();
        }
        assert_eq!(network.forward(&[1.0, 1.0, 1.0, 1.0], false).unwrap(), 0);

        let mut network = uniform_network(0.0);
        for i in 0..INPUT_COUNT {
            network.set_weight(i, 1, 1.0).unwrap();
        }
        assert_eq!(network.forward(&[1.0, 1.0, 1.0, 1.0], false).unwrap(), 1);
    }

    #[test]
    fn test_silent_network_ties_to_class_zero() {
        let mut network = uniform_network(0.0);
        assert_eq!(network.forward(&[0.0, 0.0, 0.0, 0.0], false).unwrap(), 0);
    }

    #[test]
    fn test_set_weight_bounds_checked() {
        let mut network = Network::seeded(5);
        assert!(network.set_weight(INPUT_COUNT, 0, 0.5).is_err());
        assert!(network.set_weight(0, OUTPUT_COUNT, 0.5).is_err());
        assert!(network.set_weight(3, 1, 0.5).is_ok());
        assert_eq!(network.weights()[3][1], 0.5);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let network = Network::seeded(21);
        let snapshot = network.snapshot();
        assert_eq!(snapshot.weights, network.weights());
        assert_eq!(snapshot.neuron_config, network.neuron_config());
        assert_eq!(snapshot.stdp_config, network.stdp_config());
        assert_eq!(snapshot.reward_config, network.reward_config());
    }
}
