//! Error types for the Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating pay, reporting
//! hours, or saving employee fields.

use thiserror::Error;

/// The main error type for the Compensation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::UnknownRole {
///     role: "contractor".to_string(),
/// };
/// assert_eq!(error.to_string(), "No compensation strategy registered for role 'contractor'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input was malformed (negative hours, negative allowance, empty id).
    ///
    /// The API recognises this variant inside serde messages by its
    /// "Invalid value for" prefix.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No compensation strategy could be resolved for a role.
    #[error("No compensation strategy registered for role '{role}'")]
    UnknownRole {
        /// The role tag that could not be resolved.
        role: String,
    },

    /// The backing store failed while saving employee fields.
    #[error("Failed to persist employee '{id}': {message}")]
    Persistence {
        /// The ID of the employee being saved.
        id: String,
        /// A description of the store failure.
        message: String,
    },

    /// No stored employee exists with the given ID.
    #[error("Employee not found: {id}")]
    NotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
