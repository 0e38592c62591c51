//! Error types and handling for spikelab
//!
//! The simulation core itself has no fault paths; every error in this crate
//! is a boundary violation caught before any state is mutated.

use core::fmt;

/// Result type alias for spikelab operations
pub type Result<T> = core::result::Result<T, SpikelabError>;

/// Main error type for spikelab operations
#[derive(Debug, Clone, PartialEq)]
pub enum SpikelabError {
    /// Input vector has the wrong number of elements
    InvalidInput {
        /// Number of elements the network expects
        expected: usize,
        /// Number of elements the caller supplied
        actual: usize,
    },

    /// Class label outside the valid range
    InvalidClassLabel {
        /// The offending label
        label: usize,
        /// Number of classes the network distinguishes
        classes: usize,
    },

    /// Invalid neuron configuration
    InvalidNeuronConfig {
        /// Description of the configuration issue
        reason: &'static str,
    },

    /// Invalid plasticity configuration
    InvalidPlasticityConfig {
        /// Description of the configuration issue
        reason: &'static str,
    },

    /// Index outside the fixed network topology
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Exclusive upper bound for the index
        limit: usize,
    },

    /// Serialization errors
    #[cfg(feature = "serde")]
    SerializationError {
        /// Description of the serialization issue
        reason: String,
    },

    /// Generic error for cases not covered by specific variants
    Generic {
        /// Error message
        message: &'static str,
    },
}

impl fmt::Display for SpikelabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpikelabError::InvalidInput { expected, actual } => {
                write!(f, "Invalid input vector: expected {} elements, got {}", expected, actual)
            }
            SpikelabError::InvalidClassLabel { label, classes } => {
                write!(f, "Invalid class label {}: network has {} classes", label, classes)
            }
            SpikelabError::InvalidNeuronConfig { reason } => {
                write!(f, "Invalid neuron configuration: {}", reason)
            }
            SpikelabError::InvalidPlasticityConfig { reason } => {
                write!(f, "Invalid plasticity configuration: {}", reason)
            }
            SpikelabError::IndexOutOfRange { index, limit } => {
                write!(f, "Index {} out of range (limit {})", index, limit)
            }
            #[cfg(feature = "serde")]
            SpikelabError::SerializationError { reason } => {
                write!(f, "Serialization error: {}", reason)
            }
            SpikelabError::Generic { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for SpikelabError {}

// Convenience constructors for common errors
impl SpikelabError {
    /// Create an invalid input vector error
    pub fn invalid_input(expected: usize, actual: usize) -> Self {
        Self::InvalidInput { expected, actual }
    }

    /// Create an invalid class label error
    pub fn invalid_class_label(label: usize, classes: usize) -> Self {
        Self::InvalidClassLabel { label, classes }
    }

    /// Create an invalid neuron configuration error
    pub fn invalid_neuron_config(reason: &'static str) -> Self {
        Self::InvalidNeuronConfig { reason }
    }

    /// Create an invalid plasticity configuration error
    pub fn invalid_plasticity_config(reason: &'static str) -> Self {
        Self::InvalidPlasticityConfig { reason }
    }

    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, limit: usize) -> Self {
        Self::IndexOutOfRange { index, limit }
    }

    /// Create a serialization error
    #[cfg(feature = "serde")]
    pub fn serialization_error(reason: String) -> Self {
        Self::SerializationError { reason }
    }

    /// Create a generic error
    pub fn generic(message: &'static str) -> Self {
        Self::Generic { message }
    }
}
