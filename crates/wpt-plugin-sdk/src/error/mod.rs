//! Failure types for context access, generation and the plugin runtime.
//!
//! Missing inputs are not errors: generators return an empty list. The
//! variants here cover the fatal paths only. [`RuntimeError`] is the single
//! cause the process boundary translates into stderr text and a non-zero
//! exit status.

use std::io;

use serde_json::Value;
use thiserror::Error;

/// A context value that could not be read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A named property held a value of the wrong kind.
    #[error("property '{name}' must be {expected}, got {found}")]
    InvalidProperty {
        /// Property name.
        name: String,
        /// Human-readable description of the accepted values.
        expected: &'static str,
        /// JSON rendering of the rejected value.
        found: String,
    },

    /// An interaction input was present but malformed.
    #[error("interaction input '{id}' is not a valid {expected}: {message}")]
    InvalidInteraction {
        /// Input identifier.
        id: String,
        /// Primitive kind the generator asked for.
        expected: &'static str,
        /// Decoder message.
        message: String,
    },
}

impl ContextError {
    pub(crate) fn invalid_property(name: &str, expected: &'static str, value: &Value) -> Self {
        Self::InvalidProperty {
            name: name.to_owned(),
            expected,
            found: value.to_string(),
        }
    }
}

/// Failure raised from inside a generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The context could not be read.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The generator gave up for a reason of its own.
    #[error("{message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}

impl GenerateError {
    /// Creates a free-form generator failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Fatal failures of one plugin invocation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Reading the input channel failed.
    #[error("failed to read plugin context: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input channel did not hold a valid context document.
    #[error("invalid plugin context JSON: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The generator raised an error.
    #[error("generator '{generator}' failed: {source}")]
    Generate {
        /// Name of the generator that failed.
        generator: &'static str,
        /// Error raised by the generator.
        #[source]
        source: GenerateError,
    },

    /// The result could not be encoded as JSON.
    #[error("failed to serialise plugin output: {source}")]
    Serialize {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Writing to the output channel failed.
    #[error("failed to write plugin output: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A manifest that would confuse the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// The plugin name is blank.
    #[error("plugin name must not be empty")]
    EmptyName,

    /// The executable name is blank.
    #[error("plugin '{name}' must declare an executable")]
    MissingExecutable {
        /// Plugin name.
        name: String,
    },

    /// Two inputs share an identifier.
    #[error("plugin '{name}' declares input '{id}' more than once")]
    DuplicateInput {
        /// Plugin name.
        name: String,
        /// Repeated input identifier.
        id: String,
    },

    /// Two properties share a name.
    #[error("plugin '{name}' declares property '{property}' more than once")]
    DuplicateProperty {
        /// Plugin name.
        name: String,
        /// Repeated property name.
        property: String,
    },
}

#[cfg(test)]
mod tests;
