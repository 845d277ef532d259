//! Pedersen verification points
//!
//! For secret polynomials f1, f2 and second generator H the published tuple is
//!
//! ```text
//! C_i = f1_i · G + f2_i · H        i = 0..t-1
//! ```
//!
//! which commits to both polynomials at once: hiding because of the random
//! f2 coefficients, binding as long as log_G(H) is unknown. Any share pair
//! (s1, s2) = (f1(j), f2(j)) then satisfies
//!
//! ```text
//! s1 · G + s2 · H == Σ C_i · j^i
//! ```

use crate::error::{DkgError, Result};
use crate::group::{DkgGroup, DkgPoint, DkgScalar};
use crate::polynomial::ScalarPolynomial;

/// Ordered commitments, index i matching coefficient index i
#[derive(Clone, Debug, PartialEq)]
pub struct PointTuple<G: DkgGroup> {
    points: Vec<G::Point>,
}

impl<G: DkgGroup> PointTuple<G> {
    pub fn from_points(points: Vec<G::Point>) -> Self {
        Self { points }
    }

    /// Commit to a pair of secret polynomials under (G, `g2`)
    pub fn commit(
        poly1: &ScalarPolynomial<G>,
        poly2: &ScalarPolynomial<G>,
        g2: &G::Point,
    ) -> Result<Self> {
        if poly1.threshold() != poly2.threshold() {
            return Err(DkgError::MismatchedPolynomialLength {
                first: poly1.threshold(),
                second: poly2.threshold(),
            });
        }

        let points = poly1
            .coefficients()
            .zip(poly2.coefficients())
            .map(|(c1, c2)| G::add(&G::scalar_base_mult(c1), &G::scalar_mult(g2, c2)))
            .collect();

        Ok(Self { points })
    }

    /// Number of commitments, equal to the committed threshold
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[G::Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&G::Point> {
        self.points.get(index)
    }

    /// Evaluate the committed polynomials "in the exponent" at `x`
    ///
    /// Returns Σ C_i · x^i. The i = 0 term is added unscaled.
    pub fn evaluate_at(&self, x: &G::Scalar) -> G::Point {
        let mut powers = Vec::with_capacity(self.points.len());
        let mut x_pow = G::Scalar::one();
        for _ in 0..self.points.len() {
            powers.push(x_pow.clone());
            x_pow = x_pow.mul(x);
        }
        G::Point::multiscalar_mul(&powers, &self.points)
    }

    /// Compressed byte size
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.points.len() * G::Point::ENCODED_SIZE
    }

    /// Concatenated point encodings
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.byte_size());
        for p in &self.points {
            buf.extend_from_slice(&p.to_bytes());
        }
        buf
    }

    /// Decode exactly `count` points, validating each one
    pub fn from_bytes(bytes: &[u8], count: usize) -> Result<Self> {
        let size = G::Point::ENCODED_SIZE;
        let expected = count.checked_mul(size).ok_or_else(|| {
            DkgError::Encoding(format!("point count {} overflows", count))
        })?;
        if bytes.len() != expected {
            return Err(DkgError::Encoding(format!(
                "expected {} bytes for {} points, got {}",
                expected,
                count,
                bytes.len()
            )));
        }

        let points = bytes
            .chunks_exact(size)
            .map(G::decode_point)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { points })
    }
}
