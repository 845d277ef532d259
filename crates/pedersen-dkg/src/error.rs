//! error types for pedersen-dkg

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DkgError>;

/// Errors that can occur while generating, validating or verifying DKG data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DkgError {
    /// Point is off the curve, the identity, non-canonically encoded, or
    /// otherwise unusable (e.g. a `g2` equal to the base point)
    #[error("invalid {group} point {encoding}: {reason}")]
    InvalidCurvePoint {
        group: &'static str,
        /// hex of the offending encoding (empty for in-memory points)
        encoding: String,
        reason: &'static str,
    },

    /// Scalar is zero where zero is forbidden, or not below the group order
    #[error("invalid {group} scalar at index {index}: {reason}")]
    InvalidCurveScalar {
        group: &'static str,
        index: usize,
        reason: &'static str,
    },

    /// One or more coefficient violations in a secret polynomial.
    /// Coefficients themselves are never carried.
    #[error("invalid {group} {polynomial} of length {length}: {errors:?}")]
    InvalidPolynomial {
        group: &'static str,
        polynomial: &'static str,
        length: usize,
        errors: Vec<DkgError>,
    },

    #[error("empty polynomial")]
    EmptyPolynomial,

    #[error("scalar polynomial lengths don't match: {first} != {second}")]
    MismatchedPolynomialLength { first: usize, second: usize },

    /// Secret polynomials disagree with the configured threshold
    #[error("polynomial length {got} does not match threshold {expected}")]
    ThresholdMismatch { expected: usize, got: usize },

    /// Staging another peer would exceed the configured bound
    #[error("participant limit {limit} reached")]
    TooManyParticipants { limit: usize },

    /// Verification requested for a peer we hold no shares/commitments for
    #[error("participant {participant} not in node {node} participant list")]
    ParticipantNotFound { node: String, participant: String },

    #[error("lagrange interpolation failed: {0}")]
    Interpolation(&'static str),

    #[error("node identifier must be non-zero")]
    InvalidIdentifier,

    /// A share failed verification where a verified share was required
    #[error("shares from participant {0} failed verification")]
    ShareRejected(String),

    #[error("unsupported message version {0}")]
    UnsupportedVersion(u8),

    #[error("malformed message: {0}")]
    Encoding(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DkgError {
    /// Scalar errors collected during polynomial validation
    pub fn scalar_errors(&self) -> &[DkgError] {
        match self {
            Self::InvalidPolynomial { errors, .. } => errors,
            _ => &[],
        }
    }
}
