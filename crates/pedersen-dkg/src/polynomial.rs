//! Secret scalar polynomials
//!
//! A polynomial of threshold t holds coefficients `[c_0, ..., c_{t-1}]`,
//! coefficient i being the degree-i term. Evaluating it at a peer's
//! identifier yields the share sent privately to that peer.

use core::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{DkgError, Result};
use crate::group::{DkgGroup, DkgScalar};
use crate::secret::Secret;

/// Which coefficient values a secret polynomial may hold
///
/// Coefficients are always in [0, N) by construction. `RejectZero` further
/// forbids zero coefficients; a uniformly sampled coefficient is zero with
/// negligible probability, so this only ever trips on supplied polynomials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientPolicy {
    AllowZero,
    #[default]
    RejectZero,
}

/// Polynomial over the scalar field of `G`
pub struct ScalarPolynomial<G: DkgGroup> {
    coefficients: Vec<Secret<G::Scalar>>,
}

impl<G: DkgGroup> ScalarPolynomial<G> {
    /// Wrap coefficients without validating them
    pub fn from_coefficients(coefficients: Vec<G::Scalar>) -> Self {
        Self::from_secrets(coefficients.into_iter().map(Secret::new).collect())
    }

    fn from_secrets(coefficients: Vec<Secret<G::Scalar>>) -> Self {
        Self { coefficients }
    }

    /// Small-integer coefficients, mostly for fixtures and reference vectors
    pub fn from_u64s(coefficients: &[u64]) -> Self {
        Self::from_coefficients(coefficients.iter().map(|&c| G::Scalar::from_u64(c)).collect())
    }

    /// Decode big-endian coefficient bytes, reporting every out-of-range or
    /// policy-violating coefficient at once
    pub fn from_bytes(
        label: &'static str,
        encoded: &[[u8; 32]],
        policy: CoefficientPolicy,
    ) -> Result<Self> {
        let mut errors = Vec::new();
        let mut coefficients = Vec::with_capacity(encoded.len());
        for (index, bytes) in encoded.iter().enumerate() {
            match G::decode_scalar(index, bytes) {
                Ok(c) => coefficients.push(Secret::new(c)),
                Err(e) => {
                    errors.push(e);
                    coefficients.push(Secret::default());
                }
            }
        }

        let poly = Self::from_secrets(coefficients);
        if encoded.is_empty() {
            errors.push(DkgError::EmptyPolynomial);
        } else {
            // decode failures already hold a placeholder zero
            let violations: Vec<DkgError> = poly
                .validate(policy)
                .into_iter()
                .filter(|e| !is_reported(e, &errors))
                .collect();
            errors.extend(violations);
        }

        if errors.is_empty() {
            Ok(poly)
        } else {
            Err(DkgError::InvalidPolynomial {
                group: G::NAME,
                polynomial: label,
                length: encoded.len(),
                errors,
            })
        }
    }

    /// Draw `threshold` independent uniform coefficients
    pub fn generate<R: rand_core::RngCore + rand_core::CryptoRng>(
        threshold: usize,
        policy: CoefficientPolicy,
        rng: &mut R,
    ) -> Result<Self> {
        let coefficients = (0..threshold)
            .map(|_| Secret::new(G::Scalar::random(rng)))
            .collect();
        Self::from_secrets(coefficients).into_validated("generated polynomial", policy)
    }

    /// All violations, empty when the polynomial is usable
    pub fn validate(&self, policy: CoefficientPolicy) -> Vec<DkgError> {
        if self.coefficients.is_empty() {
            return vec![DkgError::EmptyPolynomial];
        }

        let mut errors = Vec::new();
        if policy == CoefficientPolicy::RejectZero {
            for (index, c) in self.coefficients().enumerate() {
                if c.is_zero() {
                    errors.push(DkgError::InvalidCurveScalar {
                        group: G::NAME,
                        index,
                        reason: "zero coefficient",
                    });
                }
            }
        }
        errors
    }

    /// Validate, wrapping any violations into one aggregate error
    pub fn into_validated(self, label: &'static str, policy: CoefficientPolicy) -> Result<Self> {
        let errors = self.validate(policy);
        if errors.is_empty() {
            return Ok(self);
        }
        Err(DkgError::InvalidPolynomial {
            group: G::NAME,
            polynomial: label,
            length: self.coefficients.len(),
            errors,
        })
    }

    /// Number of coefficients (threshold t)
    #[inline]
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficients in degree order
    pub fn coefficients(&self) -> impl ExactSizeIterator<Item = &G::Scalar> + '_ {
        self.coefficients.iter().map(Secret::expose)
    }

    #[inline]
    pub fn coefficient(&self, index: usize) -> Option<&G::Scalar> {
        self.coefficients.get(index).map(Secret::expose)
    }

    #[inline]
    pub fn constant_term(&self) -> Option<&G::Scalar> {
        self.coefficient(0)
    }

    /// Σ c_i · x^i mod N
    ///
    /// Incremental power accumulation: one multiply-add per coefficient, no
    /// data-dependent branches.
    pub fn evaluate(&self, x: &G::Scalar) -> G::Scalar {
        let mut result = G::Scalar::zero();
        let mut x_pow = G::Scalar::one();
        for coeff in self.coefficients() {
            result = result.add(&coeff.mul(&x_pow));
            x_pow = x_pow.mul(x);
        }
        result
    }
}

fn is_reported(error: &DkgError, reported: &[DkgError]) -> bool {
    let DkgError::InvalidCurveScalar { index, .. } = error else {
        return false;
    };
    reported
        .iter()
        .any(|e| matches!(e, DkgError::InvalidCurveScalar { index: i, .. } if i == index))
}

impl<G: DkgGroup> Clone for ScalarPolynomial<G> {
    fn clone(&self) -> Self {
        Self::from_secrets(self.coefficients.clone())
    }
}

impl<G: DkgGroup> Zeroize for ScalarPolynomial<G> {
    fn zeroize(&mut self) {
        self.coefficients.zeroize();
    }
}

impl<G: DkgGroup> Drop for ScalarPolynomial<G> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// Prevent Debug from leaking coefficients
impl<G: DkgGroup> fmt::Debug for ScalarPolynomial<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarPolynomial")
            .field("group", &G::NAME)
            .field("threshold", &self.coefficients.len())
            .field("coefficients", &"[REDACTED]")
            .finish()
    }
}
