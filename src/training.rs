//! Training and evaluation drivers
//!
//! The functions here run labeled trials against a network and return
//! structured reports. Nothing in this module prints or formats anything;
//! rendering results is the caller's job.

use crate::{
    error::Result,
    network::{Network, WeightMatrix, INPUT_COUNT},
};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single input pattern for the fixed four-input topology
pub type Pattern = [f64; INPUT_COUNT];

/// An input pattern together with its expected output class
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabeledPattern {
    /// Input feature vector
    pub pattern: Pattern,
    /// Expected output class
    pub label: usize,
}

/// The six canonical training patterns
///
/// Three left-heavy patterns labeled class 0 and three right-heavy patterns
/// labeled class 1.
pub fn canonical_patterns() -> [LabeledPattern; 6] {
    [
        LabeledPattern { pattern: [1.0, 0.8, 0.1, 0.2], label: 0 },
        LabeledPattern { pattern: [0.9, 1.0, 0.2, 0.1], label: 0 },
        LabeledPattern { pattern: [0.8, 0.9, 0.0, 0.1], label: 0 },
        LabeledPattern { pattern: [0.1, 0.2, 1.0, 0.8], label: 1 },
        LabeledPattern { pattern: [0.2, 0.1, 0.9, 1.0], label: 1 },
        LabeledPattern { pattern: [0.0, 0.1, 0.8, 0.9], label: 1 },
    ]
}

/// Accuracy measured at a training checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccuracyCheckpoint {
    /// Number of completed epochs at the time of measurement
    pub epoch: usize,
    /// Correctly classified patterns
    pub correct: usize,
    /// Total patterns evaluated
    pub total: usize,
}

impl AccuracyCheckpoint {
    /// Fraction of correctly classified patterns (0.0 for an empty set)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Outcome of a training run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingReport {
    /// Number of epochs trained
    pub epochs: usize,
    /// Accuracy measurements taken during training
    pub checkpoints: Vec<AccuracyCheckpoint>,
    /// Weight matrix before the first trial
    pub initial_weights: WeightMatrix,
    /// Weight matrix after the last trial
    pub final_weights: WeightMatrix,
}

/// Outcome of an evaluation pass over a pattern set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationReport {
    /// Predicted class per pattern, in input order
    pub predictions: Vec<usize>,
    /// Correctly classified patterns
    pub correct: usize,
    /// Total patterns evaluated
    pub total: usize,
}

impl EvaluationReport {
    /// Fraction of correctly classified patterns (0.0 for an empty set)
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Train the network for a number of epochs over a labeled pattern set
///
/// Each epoch runs one reward-modulated trial per pattern, in the order
/// given. When `checkpoint_interval` is non-zero, a no-learning evaluation
/// over the same patterns is recorded every `checkpoint_interval` epochs.
pub fn train(
    network: &mut Network,
    patterns: &[LabeledPattern],
    epochs: usize,
    checkpoint_interval: usize,
) -> Result<TrainingReport> {
    let initial_weights = network.weights();
    let mut checkpoints = Vec::new();

    for epoch in 0..epochs {
        for labeled in patterns {
            network.train_with_reward(&labeled.pattern, labeled.label)?;
        }

        if checkpoint_interval > 0 && (epoch + 1) % checkpoint_interval == 0 {
            let evaluation = evaluate(network, patterns)?;
            trace!(
                "epoch {}: {}/{} patterns correct",
                epoch + 1,
                evaluation.correct,
                evaluation.total
            );
            checkpoints.push(AccuracyCheckpoint {
                epoch: epoch + 1,
                correct: evaluation.correct,
                total: evaluation.total,
            });
        }
    }

    debug!("trained {} epochs over {} patterns", epochs, patterns.len());

    Ok(TrainingReport {
        epochs,
        checkpoints,
        initial_weights,
        final_weights: network.weights(),
    })
}

/// Classify every pattern without learning and report accuracy
pub fn evaluate(network: &mut Network, patterns: &[LabeledPattern]) -> Result<EvaluationReport> {
    let mut predictions = Vec::with_capacity(patterns.len());
    let mut correct = 0;

    for labeled in patterns {
        let predicted = network.forward(&labeled.pattern, false)?;
        if predicted == labeled.label {
            correct += 1;
        }
        predictions.push(predicted);
    }

    Ok(EvaluationReport {
        predictions,
        correct,
        total: patterns.len(),
    })
}
