//! Error types for geofence operations.

use thiserror::Error;

/// Errors that can occur while building or parsing a geofence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeofenceError {
    /// The requested shape cannot be built from the given inputs.
    #[error("invalid geometry in {operation}: {reason}")]
    InvalidGeometry {
        /// The builder that rejected the input.
        operation: &'static str,
        /// What was wrong with the input.
        reason: String,
    },

    /// A serialized geofence description does not match the expected
    /// format.
    #[error("malformed geofence description: {reason}: {offending:?}")]
    MalformedDescription {
        /// What the parser expected.
        reason: &'static str,
        /// The substring that failed to parse.
        offending: String,
    },

    /// The description's type tag names a shape this crate does not
    /// support.
    #[error("unsupported geofence type {tag:?}")]
    UnsupportedGeofenceType {
        /// The unrecognized tag, upper-cased.
        tag: String,
    },
}
