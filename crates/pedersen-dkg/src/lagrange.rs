//! Lagrange interpolation at zero
//!
//! Given samples (x_j, f(x_j)) of a polynomial of degree < k, the constant
//! term is recovered as f(0) = Σ w_j · f(x_j) with
//!
//! w_j = Π_{m ≠ j} x_m / (x_m - x_j)
//!
//! The weights are computed with the common denominator technique:
//!
//! w_j = ξ · ρ_j · d̄^{-1}
//!
//! Where:
//! - ξ = Π_m x_m
//! - d_j = x_j · Π_{m ≠ j} (x_m - x_j)
//! - ρ_j = Π_{m ≠ j} d_m
//! - d̄ = Π_j d_j
//!
//! This requires only ONE field inversion instead of k. d̄ is zero exactly
//! when some x_j is zero or two x-coordinates coincide, so the single
//! inversion doubles as the distinctness check.

use tracing::debug;

use crate::error::{DkgError, Result};
use crate::group::{DkgPoint, DkgScalar};

/// Compute the weights w_j for interpolating at zero from `xs`
///
/// Fails on an empty set, a zero x-coordinate, or duplicate x-coordinates.
pub fn lagrange_coefficients_at_zero<S: DkgScalar>(xs: &[S]) -> Result<Vec<S>> {
    let k = xs.len();
    if k == 0 {
        return Err(DkgError::Interpolation("no samples"));
    }

    // Compute ξ = Π x_m
    let xi: S = xs.iter().fold(S::one(), |acc, x| acc.mul(x));

    // Compute d_j = x_j · Π_{m ≠ j} (x_m - x_j)
    let mut d_values: Vec<S> = Vec::with_capacity(k);
    for j in 0..k {
        let mut d = xs[j].clone();
        for m in 0..k {
            if m != j {
                d = d.mul(&xs[m].sub(&xs[j]));
            }
        }
        d_values.push(d);
    }

    // ρ_j via prefix products, then suffix products
    let mut rho: Vec<S> = vec![S::one(); k];
    for j in 1..k {
        rho[j] = rho[j - 1].mul(&d_values[j - 1]);
    }
    let mut suffix = S::one();
    for j in (0..k).rev() {
        rho[j] = rho[j].mul(&suffix);
        suffix = suffix.mul(&d_values[j]);
    }

    // d̄ = Π d_j, the one inversion
    let d_bar_inv = suffix.invert().ok_or_else(|| {
        if xs.iter().any(|x| x.is_zero()) {
            DkgError::Interpolation("zero x-coordinate")
        } else {
            DkgError::Interpolation("duplicate x-coordinates")
        }
    })?;

    let delta = xi.mul(&d_bar_inv);
    Ok(rho.iter().map(|rho_j| delta.mul(rho_j)).collect())
}

/// Reconstruct f(0) from samples (x_j, f(x_j))
///
/// Correct only when at least `threshold` samples of a degree `threshold - 1`
/// polynomial are supplied; fewer samples silently describe a different
/// polynomial.
pub fn interpolate_at_zero<S: DkgScalar>(points: &[(S, S)]) -> Result<S> {
    let xs: Vec<S> = points.iter().map(|(x, _)| x.clone()).collect();
    let weights = lagrange_coefficients_at_zero(&xs)?;
    debug!(samples = points.len(), "interpolating at zero");

    Ok(points
        .iter()
        .zip(weights.iter())
        .fold(S::zero(), |acc, ((_, y), w)| acc.add(&w.mul(y))))
}

/// Reconstruct f(0)·G from public samples (x_j, f(x_j)·G)
pub fn interpolate_in_exponent<P: DkgPoint>(points: &[(P::Scalar, P)]) -> Result<P> {
    let xs: Vec<P::Scalar> = points.iter().map(|(x, _)| x.clone()).collect();
    let weights = lagrange_coefficients_at_zero(&xs)?;
    let ys: Vec<P> = points.iter().map(|(_, y)| y.clone()).collect();
    Ok(P::multiscalar_mul(&weights, &ys))
}

#[cfg(all(test, feature = "ristretto255"))]
mod tests {
    use super::*;
    use crate::group::ristretto::Ristretto255;
    use crate::group::DkgGroup;
    use crate::polynomial::{CoefficientPolicy, ScalarPolynomial};
    use curve25519_dalek::scalar::Scalar;
    use rand::rngs::OsRng;

    fn s(v: u64) -> Scalar {
        Scalar::from(v)
    }

    #[test]
    fn test_lagrange_single() {
        let coeffs = lagrange_coefficients_at_zero(&[s(1)]).unwrap();
        assert_eq!(coeffs, vec![Scalar::ONE]);
    }

    #[test]
    fn test_lagrange_two_points() {
        // For xs = {1, 2}:
        // w_1 = 2 / (2 - 1) = 2
        // w_2 = 1 / (1 - 2) = -1
        let coeffs = lagrange_coefficients_at_zero(&[s(1), s(2)]).unwrap();
        assert_eq!(coeffs[0], s(2));
        assert_eq!(coeffs[1], -Scalar::ONE);
    }

    #[test]
    fn test_lagrange_three_points() {
        // w_1 = (2 * 3) / ((2-1) * (3-1)) = 3
        // w_2 = (1 * 3) / ((1-2) * (3-2)) = -3
        // w_3 = (1 * 2) / ((1-3) * (2-3)) = 1
        let coeffs = lagrange_coefficients_at_zero(&[s(1), s(2), s(3)]).unwrap();
        assert_eq!(coeffs[0], s(3));
        assert_eq!(coeffs[1], -s(3));
        assert_eq!(coeffs[2], Scalar::ONE);
    }

    #[test]
    fn test_interpolate_non_consecutive() {
        // f(x) = 1 + 2x + 3x², f(1) = 6, f(3) = 34, f(5) = 86
        let points = [(s(1), s(6)), (s(3), s(34)), (s(5), s(86))];
        assert_eq!(interpolate_at_zero(&points).unwrap(), Scalar::ONE);
    }

    #[test]
    fn test_partition_of_unity() {
        for k in 1..=10u64 {
            let xs: Vec<Scalar> = (1..=k).map(s).collect();
            let coeffs = lagrange_coefficients_at_zero(&xs).unwrap();
            let sum = coeffs.iter().fold(Scalar::ZERO, |acc, c| acc + c);
            assert_eq!(sum, Scalar::ONE, "weights should sum to 1 for k={}", k);
        }
    }

    fn check_random_polynomial(t: usize) {
        let mut rng = OsRng;
        let poly = ScalarPolynomial::<Ristretto255>::generate(t, CoefficientPolicy::RejectZero, &mut rng)
            .unwrap();

        // random, distinct sample positions
        let points: Vec<(Scalar, Scalar)> = (0..t)
            .map(|_| {
                let x = Scalar::random(&mut rng);
                (x, poly.evaluate(&x))
            })
            .collect();

        assert_eq!(
            interpolate_at_zero(&points).unwrap(),
            *poly.constant_term().unwrap()
        );

        // one sample short gives a different answer
        assert_ne!(
            interpolate_at_zero(&points[1..]).unwrap(),
            *poly.constant_term().unwrap()
        );
    }

    #[test]
    fn test_interpolate_threshold_two() {
        check_random_polynomial(2);
    }

    #[test]
    fn test_interpolate_threshold_ten() {
        check_random_polynomial(10);
    }

    #[test]
    fn test_interpolate_in_exponent() {
        let mut rng = OsRng;
        let poly = ScalarPolynomial::<Ristretto255>::generate(4, CoefficientPolicy::RejectZero, &mut rng)
            .unwrap();
        let points: Vec<_> = [3u64, 7, 11, 13]
            .iter()
            .map(|&j| (s(j), Ristretto255::scalar_base_mult(&poly.evaluate(&s(j)))))
            .collect();

        assert_eq!(
            interpolate_in_exponent(&points).unwrap(),
            Ristretto255::scalar_base_mult(poly.constant_term().unwrap())
        );
    }

    #[test]
    fn test_duplicate_x_fails() {
        let points = [(s(1), s(6)), (s(3), s(34)), (s(3), s(34))];
        assert_eq!(
            interpolate_at_zero(&points),
            Err(DkgError::Interpolation("duplicate x-coordinates"))
        );
    }

    #[test]
    fn test_zero_x_fails() {
        let points = [(s(0), s(1)), (s(1), s(6))];
        assert_eq!(
            interpolate_at_zero(&points),
            Err(DkgError::Interpolation("zero x-coordinate"))
        );
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(
            interpolate_at_zero::<Scalar>(&[]),
            Err(DkgError::Interpolation("no samples"))
        );
    }
}
