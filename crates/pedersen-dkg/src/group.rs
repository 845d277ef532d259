//! Group abstraction for the DKG
//!
//! Every curve backend provides a scalar field and a prime-order point group
//! through [`DkgScalar`], [`DkgPoint`] and [`DkgGroup`]. The protocol code is
//! generic over [`DkgGroup`] and never sees backend representations:
//! - NIST P-256 (reference vectors)
//! - secp256k1 (Bitcoin compatible)
//! - ristretto255 (Polkadot/sr25519 compatible)
//! - Pallas (Zcash Orchard compatible)
//!
//! Scalars always serialize as 32 big-endian bytes, whatever the backend's
//! native byte order. Point decoding doubles as the curve membership check:
//! a byte string either decodes to a valid non-identity point or it is
//! rejected.

use core::fmt::Debug;

use sha2::{Digest, Sha256};

use crate::error::{DkgError, Result};

/// Scalar field element trait
pub trait DkgScalar: Clone + Copy + Debug + Default + Sized + PartialEq + Send + Sync {
    /// The zero element
    fn zero() -> Self;

    /// The one element
    fn one() -> Self;

    /// Create from u64
    fn from_u64(v: u64) -> Self;

    /// Addition mod N
    fn add(&self, other: &Self) -> Self;

    /// Subtraction mod N
    fn sub(&self, other: &Self) -> Self;

    /// Multiplication mod N
    fn mul(&self, other: &Self) -> Self;

    /// Negation mod N
    fn neg(&self) -> Self;

    /// Multiplicative inverse, `None` for zero
    fn invert(&self) -> Option<Self>;

    /// Generate uniformly random scalar in [0, N)
    fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self;

    /// Serialize to 32 big-endian bytes
    fn to_bytes(&self) -> [u8; 32];

    /// Deserialize from canonical big-endian bytes, `None` unless 0 <= x < N
    fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self>;

    /// Field division, `None` when the divisor is zero
    fn div(&self, other: &Self) -> Option<Self> {
        other.invert().map(|inv| self.mul(&inv))
    }

    /// Exponentiation by a public integer exponent
    ///
    /// Fixed 64-round square-and-multiply: the sequence of field operations
    /// does not depend on the exponent or the base.
    fn pow(&self, exp: u64) -> Self {
        let mut result = Self::one();
        for bit in (0..64).rev() {
            result = result.mul(&result);
            let multiplied = result.mul(self);
            if (exp >> bit) & 1 == 1 {
                result = multiplied;
            }
        }
        result
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Normalization check `0 <= x < N` on raw bytes
    fn is_normalized(bytes: &[u8; 32]) -> bool {
        Self::from_canonical_bytes(bytes).is_some()
    }

    /// Hex of the big-endian encoding, for identifiers in logs and errors
    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

/// Curve point trait
pub trait DkgPoint: Clone + Debug + Sized + PartialEq + Send + Sync {
    type Scalar: DkgScalar;

    /// Encoded point size in bytes (33 for SEC1 curves, 32 otherwise)
    const ENCODED_SIZE: usize;

    /// The identity element
    fn identity() -> Self;

    /// The base point G
    fn generator() -> Self;

    /// Scalar multiplication
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Point addition
    fn add(&self, other: &Self) -> Self;

    /// Encode to exactly `ENCODED_SIZE` bytes (identity encodes as zeros)
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode, rejecting wrong lengths, off-curve data, non-canonical
    /// coordinates and the identity
    fn from_bytes(bytes: &[u8]) -> Option<Self>;

    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Σ scalars[i] · points[i]
    fn multiscalar_mul(scalars: &[Self::Scalar], points: &[Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::identity(), |acc, (s, p)| acc.add(&p.mul_scalar(s)))
    }
}

/// Complete group backend: parameters plus the operations the protocol uses
pub trait DkgGroup: Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    type Scalar: DkgScalar;
    type Point: DkgPoint<Scalar = Self::Scalar>;

    /// Human readable group name
    const NAME: &'static str;

    /// Group order N, big-endian
    const ORDER: [u8; 32];

    fn base_point() -> Self::Point {
        Self::Point::generator()
    }

    /// k · G
    fn scalar_base_mult(k: &Self::Scalar) -> Self::Point {
        Self::Point::generator().mul_scalar(k)
    }

    /// k · P
    fn scalar_mult(p: &Self::Point, k: &Self::Scalar) -> Self::Point {
        p.mul_scalar(k)
    }

    fn add(a: &Self::Point, b: &Self::Point) -> Self::Point {
        a.add(b)
    }

    /// Whether `bytes` encode a valid, non-identity group element
    fn is_on_curve(bytes: &[u8]) -> bool {
        Self::Point::from_bytes(bytes).is_some()
    }

    /// Decode an untrusted point
    fn decode_point(bytes: &[u8]) -> Result<Self::Point> {
        Self::Point::from_bytes(bytes).ok_or_else(|| DkgError::InvalidCurvePoint {
            group: Self::NAME,
            encoding: hex::encode(bytes),
            reason: "not a valid encoded group element",
        })
    }

    /// Decode an untrusted scalar; `index` locates it for error reporting
    fn decode_scalar(index: usize, bytes: &[u8; 32]) -> Result<Self::Scalar> {
        Self::Scalar::from_canonical_bytes(bytes).ok_or(DkgError::InvalidCurveScalar {
            group: Self::NAME,
            index,
            reason: "not below the group order",
        })
    }

    /// Check that `p` can serve as an independent second generator
    fn validate_generator(p: &Self::Point) -> Result<()> {
        let reason = if p.is_identity() {
            "identity cannot be a generator"
        } else if *p == Self::base_point() {
            "second generator equals the base point"
        } else {
            return Ok(());
        };
        Err(DkgError::InvalidCurvePoint {
            group: Self::NAME,
            encoding: hex::encode(p.to_bytes()),
            reason,
        })
    }

    /// Nothing-up-my-sleeve generator derived from `domain`
    ///
    /// Try-and-increment over SHA-256(tag || domain || counter): the first
    /// digest that decodes to a point other than G wins. Nobody knows its
    /// discrete log relative to G, and anyone can re-derive it.
    fn hash_to_point(domain: &[u8]) -> Self::Point {
        let size = Self::Point::ENCODED_SIZE;
        let mut counter: u32 = 0;
        loop {
            let digest: [u8; 32] = Sha256::new()
                .chain_update(b"pedersen-dkg/hash-to-point")
                .chain_update(domain)
                .chain_update(counter.to_be_bytes())
                .finalize()
                .into();

            let mut encoding = vec![0u8; size];
            if size == 33 {
                // SEC1 compressed, even y
                encoding[0] = 0x02;
            }
            encoding[size - 32..].copy_from_slice(&digest);

            if let Some(point) = Self::Point::from_bytes(&encoding) {
                if point != Self::base_point() {
                    return point;
                }
            }
            counter = counter.wrapping_add(1);
        }
    }
}

// ============================================================================
// NIST P-256 implementation
// ============================================================================

#[cfg(feature = "p256")]
pub mod nist_p256 {
    use super::*;
    use p256::{
        elliptic_curve::{
            sec1::{FromEncodedPoint, ToEncodedPoint},
            Field, PrimeField,
        },
        AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar,
    };

    impl DkgScalar for Scalar {
        fn zero() -> Self {
            Scalar::ZERO
        }

        fn one() -> Self {
            Scalar::ONE
        }

        fn from_u64(v: u64) -> Self {
            Scalar::from(v)
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn sub(&self, other: &Self) -> Self {
            *self - *other
        }

        fn mul(&self, other: &Self) -> Self {
            *self * *other
        }

        fn neg(&self) -> Self {
            -(*self)
        }

        fn invert(&self) -> Option<Self> {
            <Scalar as Field>::invert(self).into()
        }

        fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self {
            <Scalar as Field>::random(rng)
        }

        fn to_bytes(&self) -> [u8; 32] {
            self.to_repr().into()
        }

        fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
            let repr: FieldBytes = (*bytes).into();
            Scalar::from_repr(repr).into()
        }
    }

    impl DkgPoint for ProjectivePoint {
        type Scalar = Scalar;

        const ENCODED_SIZE: usize = 33;

        fn identity() -> Self {
            Self::IDENTITY
        }

        fn generator() -> Self {
            Self::GENERATOR
        }

        fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
            *self * *scalar
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn to_bytes(&self) -> Vec<u8> {
            if *self == Self::IDENTITY {
                return vec![0u8; Self::ENCODED_SIZE];
            }
            AffinePoint::from(*self)
                .to_encoded_point(true)
                .as_bytes()
                .to_vec()
        }

        // accepts compressed (33) and uncompressed (65) SEC1
        fn from_bytes(bytes: &[u8]) -> Option<Self> {
            if bytes.len() != 33 && bytes.len() != 65 {
                return None;
            }
            let encoded = EncodedPoint::from_bytes(bytes).ok()?;
            let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
            let point = ProjectivePoint::from(affine?);
            (point != Self::IDENTITY).then_some(point)
        }
    }

    /// NIST P-256 (secp256r1) backend
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct NistP256;

    impl DkgGroup for NistP256 {
        type Scalar = Scalar;
        type Point = ProjectivePoint;

        const NAME: &'static str = "P-256";

        const ORDER: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84,
            0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
        ];
    }
}

// ============================================================================
// secp256k1 implementation (Bitcoin)
// ============================================================================

#[cfg(feature = "secp256k1")]
pub mod secp256k1 {
    use super::*;
    use k256::{
        elliptic_curve::{
            sec1::{FromEncodedPoint, ToEncodedPoint},
            Field, PrimeField,
        },
        AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar,
    };

    impl DkgScalar for Scalar {
        fn zero() -> Self {
            Scalar::ZERO
        }

        fn one() -> Self {
            Scalar::ONE
        }

        fn from_u64(v: u64) -> Self {
            Scalar::from(v)
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn sub(&self, other: &Self) -> Self {
            *self - *other
        }

        fn mul(&self, other: &Self) -> Self {
            *self * *other
        }

        fn neg(&self) -> Self {
            -(*self)
        }

        fn invert(&self) -> Option<Self> {
            <Scalar as Field>::invert(self).into()
        }

        fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self {
            <Scalar as Field>::random(rng)
        }

        fn to_bytes(&self) -> [u8; 32] {
            self.to_repr().into()
        }

        fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
            let repr: FieldBytes = (*bytes).into();
            Scalar::from_repr(repr).into()
        }
    }

    impl DkgPoint for ProjectivePoint {
        type Scalar = Scalar;

        const ENCODED_SIZE: usize = 33;

        fn identity() -> Self {
            Self::IDENTITY
        }

        fn generator() -> Self {
            Self::GENERATOR
        }

        fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
            *self * *scalar
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn to_bytes(&self) -> Vec<u8> {
            if *self == Self::IDENTITY {
                return vec![0u8; Self::ENCODED_SIZE];
            }
            AffinePoint::from(*self)
                .to_encoded_point(true)
                .as_bytes()
                .to_vec()
        }

        fn from_bytes(bytes: &[u8]) -> Option<Self> {
            if bytes.len() != 33 && bytes.len() != 65 {
                return None;
            }
            let encoded = EncodedPoint::from_bytes(bytes).ok()?;
            let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
            let point = ProjectivePoint::from(affine?);
            (point != Self::IDENTITY).then_some(point)
        }
    }

    /// secp256k1 curve backend (Bitcoin)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Secp256k1;

    impl DkgGroup for Secp256k1 {
        type Scalar = Scalar;
        type Point = ProjectivePoint;

        const NAME: &'static str = "secp256k1";

        const ORDER: [u8; 32] = [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
            0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
            0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
        ];
    }
}

// ============================================================================
// Ristretto255 implementation
// ============================================================================

#[cfg(feature = "ristretto255")]
pub mod ristretto {
    use super::*;
    use curve25519_dalek::{
        constants::RISTRETTO_BASEPOINT_POINT,
        ristretto::{CompressedRistretto, RistrettoPoint},
        scalar::Scalar,
        traits::{Identity, MultiscalarMul},
    };

    impl DkgScalar for Scalar {
        fn zero() -> Self {
            Scalar::ZERO
        }

        fn one() -> Self {
            Scalar::ONE
        }

        fn from_u64(v: u64) -> Self {
            Scalar::from(v)
        }

        fn add(&self, other: &Self) -> Self {
            self + other
        }

        fn sub(&self, other: &Self) -> Self {
            self - other
        }

        fn mul(&self, other: &Self) -> Self {
            self * other
        }

        fn neg(&self) -> Self {
            -self
        }

        fn invert(&self) -> Option<Self> {
            if *self == Scalar::ZERO {
                return None;
            }
            Some(Scalar::invert(self))
        }

        fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self {
            Scalar::random(rng)
        }

        // dalek is little-endian natively
        fn to_bytes(&self) -> [u8; 32] {
            let mut bytes = Scalar::to_bytes(self);
            bytes.reverse();
            bytes
        }

        fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
            let mut le = *bytes;
            le.reverse();
            Scalar::from_canonical_bytes(le).into_option()
        }
    }

    impl DkgPoint for RistrettoPoint {
        type Scalar = Scalar;

        const ENCODED_SIZE: usize = 32;

        fn identity() -> Self {
            <RistrettoPoint as Identity>::identity()
        }

        fn generator() -> Self {
            RISTRETTO_BASEPOINT_POINT
        }

        fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
            self * scalar
        }

        fn add(&self, other: &Self) -> Self {
            self + other
        }

        fn multiscalar_mul(scalars: &[Self::Scalar], points: &[Self]) -> Self {
            <RistrettoPoint as MultiscalarMul>::multiscalar_mul(scalars, points)
        }

        fn to_bytes(&self) -> Vec<u8> {
            self.compress().to_bytes().to_vec()
        }

        fn from_bytes(bytes: &[u8]) -> Option<Self> {
            let point = CompressedRistretto::from_slice(bytes).ok()?.decompress()?;
            (point != <RistrettoPoint as Identity>::identity()).then_some(point)
        }
    }

    /// Ristretto255 group backend
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Ristretto255;

    impl DkgGroup for Ristretto255 {
        type Scalar = Scalar;
        type Point = RistrettoPoint;

        const NAME: &'static str = "ristretto255";

        const ORDER: [u8; 32] = [
            0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6,
            0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
        ];
    }
}

// ============================================================================
// Pallas implementation (Zcash Orchard)
// ============================================================================

#[cfg(feature = "pallas")]
pub mod pallas {
    use super::*;
    use pasta_curves::{
        group::{
            ff::{Field, PrimeField},
            Group, GroupEncoding,
        },
        pallas::{Point, Scalar},
    };

    impl DkgScalar for Scalar {
        fn zero() -> Self {
            Scalar::ZERO
        }

        fn one() -> Self {
            Scalar::ONE
        }

        fn from_u64(v: u64) -> Self {
            Scalar::from(v)
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn sub(&self, other: &Self) -> Self {
            *self - *other
        }

        fn mul(&self, other: &Self) -> Self {
            *self * *other
        }

        fn neg(&self) -> Self {
            -(*self)
        }

        fn invert(&self) -> Option<Self> {
            <Scalar as Field>::invert(self).into()
        }

        fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self {
            <Scalar as Field>::random(rng)
        }

        // pasta reprs are little-endian
        fn to_bytes(&self) -> [u8; 32] {
            let mut bytes = self.to_repr();
            bytes.reverse();
            bytes
        }

        fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
            let mut le = *bytes;
            le.reverse();
            Scalar::from_repr(le).into()
        }
    }

    impl DkgPoint for Point {
        type Scalar = Scalar;

        const ENCODED_SIZE: usize = 32;

        fn identity() -> Self {
            <Point as Group>::identity()
        }

        fn generator() -> Self {
            <Point as Group>::generator()
        }

        fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
            self * scalar
        }

        fn add(&self, other: &Self) -> Self {
            *self + *other
        }

        fn to_bytes(&self) -> Vec<u8> {
            GroupEncoding::to_bytes(self).to_vec()
        }

        fn from_bytes(bytes: &[u8]) -> Option<Self> {
            let repr: [u8; 32] = bytes.try_into().ok()?;
            let point: Option<Point> = <Point as GroupEncoding>::from_bytes(&repr).into();
            point.filter(|p| *p != <Point as Group>::identity())
        }
    }

    /// Pallas curve backend (Zcash Orchard)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Pallas;

    impl DkgGroup for Pallas {
        type Scalar = Scalar;
        type Point = Point;

        const NAME: &'static str = "pallas";

        const ORDER: [u8; 32] = [
            0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x22, 0x46, 0x98, 0xfc, 0x09, 0x94, 0xa8, 0xdd,
            0x8c, 0x46, 0xeb, 0x21, 0x00, 0x00, 0x00, 0x01,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    /// Contract checks every backend must pass
    fn check_backend<G: DkgGroup>() {
        let mut rng = OsRng;

        // N itself is not normalized, N - 1 is, and (N - 1) + 1 wraps to zero
        assert!(!G::Scalar::is_normalized(&G::ORDER));
        let mut order_minus_one = G::ORDER;
        order_minus_one[31] -= 1;
        let max = G::Scalar::from_canonical_bytes(&order_minus_one)
            .expect("N - 1 must decode");
        assert!(max.add(&G::Scalar::one()).is_zero());
        assert_eq!(max, G::Scalar::one().neg());
        assert!(matches!(
            G::decode_scalar(3, &G::ORDER),
            Err(DkgError::InvalidCurveScalar { index: 3, .. })
        ));

        // big-endian encoding of small integers
        let mut seven = [0u8; 32];
        seven[31] = 7;
        assert_eq!(G::Scalar::from_u64(7).to_bytes(), seven);

        // inversion and division
        assert!(G::Scalar::zero().invert().is_none());
        assert!(G::Scalar::one().div(&G::Scalar::zero()).is_none());
        let x = G::Scalar::random(&mut rng);
        let inv = x.invert().expect("random scalar is non-zero");
        assert_eq!(x.mul(&inv), G::Scalar::one());

        // pow agrees with repeated multiplication
        let mut expected = G::Scalar::one();
        for e in 0..6u64 {
            assert_eq!(x.pow(e), expected);
            expected = expected.mul(&x);
        }
        assert_eq!(G::Scalar::from_u64(2).pow(10), G::Scalar::from_u64(1024));

        // point encoding round trip and membership
        let p = G::scalar_base_mult(&x);
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), G::Point::ENCODED_SIZE);
        assert!(G::is_on_curve(&bytes));
        assert_eq!(G::decode_point(&bytes).unwrap(), p);

        // identity never decodes
        let identity = G::Point::identity().to_bytes();
        assert_eq!(identity.len(), G::Point::ENCODED_SIZE);
        assert!(!G::is_on_curve(&identity));
        assert!(matches!(
            G::decode_point(&identity),
            Err(DkgError::InvalidCurvePoint { .. })
        ));
        assert!(!G::is_on_curve(&bytes[1..]));

        // group law
        let y = G::Scalar::random(&mut rng);
        let lhs = G::add(&G::scalar_base_mult(&x), &G::scalar_base_mult(&y));
        assert_eq!(lhs, G::scalar_base_mult(&x.add(&y)));
        assert_eq!(
            G::scalar_mult(&G::scalar_base_mult(&x), &y),
            G::scalar_base_mult(&x.mul(&y))
        );
        assert_eq!(
            G::Point::multiscalar_mul(&[x.clone(), y.clone()], &[G::base_point(), p.clone()]),
            G::scalar_base_mult(&x.add(&y.mul(&x)))
        );

        // derived generators are deterministic, valid and domain separated
        let h = G::hash_to_point(b"test generator");
        assert_eq!(h, G::hash_to_point(b"test generator"));
        assert_ne!(h, G::hash_to_point(b"other generator"));
        assert!(G::validate_generator(&h).is_ok());
        assert!(G::validate_generator(&G::Point::identity()).is_err());
        assert!(G::validate_generator(&G::base_point()).is_err());
    }

    #[cfg(feature = "p256")]
    #[test]
    fn test_p256_backend() {
        check_backend::<nist_p256::NistP256>();
    }

    #[cfg(feature = "p256")]
    #[test]
    fn test_p256_rejects_bad_sec1_points() {
        use nist_p256::NistP256;

        let sec1 = |x: &str, y: &str| {
            let mut bytes = vec![0x04];
            bytes.extend(hex::decode(x).unwrap());
            bytes.extend(hex::decode(y).unwrap());
            bytes
        };
        let g2x = "0a5d23f079fed8f443d7fa87d70849f846f941c07d77b1e1df139e8f7ff61a70";
        let g2y = "608e4edf904f2e1d5f54ddc708afec01fd2287fc95555139e065cbad4d5ecdba";
        // field modulus p, not a normalized coordinate
        let p = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
        let zero = "0000000000000000000000000000000000000000000000000000000000000000";
        let one = "0000000000000000000000000000000000000000000000000000000000000001";

        assert!(NistP256::is_on_curve(&sec1(g2x, g2y)));
        for (x, y) in [(zero, zero), (one, one), (p, g2y), (g2x, p), (g2x, one)] {
            assert!(!NistP256::is_on_curve(&sec1(x, y)), "accepted ({x}, {y})");
        }
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn test_secp256k1_backend() {
        check_backend::<secp256k1::Secp256k1>();
    }

    #[cfg(feature = "ristretto255")]
    #[test]
    fn test_ristretto255_backend() {
        check_backend::<ristretto::Ristretto255>();
    }

    #[cfg(feature = "pallas")]
    #[test]
    fn test_pallas_backend() {
        check_backend::<pallas::Pallas>();
    }
}
