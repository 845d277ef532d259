//! Joint-Feldman / Pedersen Distributed Key Generation
//!
//! Computational core of a Pedersen-verified DKG: nodes share the constant
//! terms of random polynomials with every peer, and each peer checks the
//! shares it receives against published commitments before accepting them.
//!
//! # Protocol
//!
//! Each node j with identifier x_j:
//!
//! 1. samples two secret polynomials f1, f2 of length t (the threshold)
//! 2. broadcasts verification points C_i = f1_i · G + f2_i · H
//! 3. sends (f1(x_k), f2(x_k)) privately to every peer k
//! 4. checks received shares: s1 · G + s2 · H == Σ C_i · x_j^i
//! 5. complains about every peer whose shares fail
//!
//! The final share of node j is Σ f1_k(x_j) over the qualified set, and t
//! of those recombine (Lagrange at zero) to the group secret Σ f1_k(0),
//! whose public key is the sum of every node's `f1(0) · G`.
//!
//! H must have no known discrete log relative to G; derive it with
//! [`DkgGroup::hash_to_point`].
//!
//! # Scope
//!
//! Only the primitives and the verification logic. Transport, round
//! scheduling, complaint resolution and resharing belong to the caller; the
//! [`messages`] module defines what the caller moves around.
//!
//! # Curve Backends
//!
//! - `p256` (default): NIST P-256
//! - `secp256k1` (default): Bitcoin compatible
//! - `ristretto255` (default): Polkadot/sr25519 compatible
//! - `pallas`: Zcash Orchard compatible
//!
//! # Example
//!
//! ```ignore
//! use pedersen_dkg::{Node, NodeConfig, Ristretto255};
//!
//! let config = NodeConfig::<Ristretto255>::from_domain(b"my run", 2);
//! let mut alice = Node::generate(config.clone(), Scalar::from(1u64), &mut rng)?;
//! let bob = Node::generate(config, Scalar::from(2u64), &mut rng)?;
//!
//! alice.handle_secret_shares(&bob.secret_shares_for(alice.id())?)?;
//! alice.handle_public_points(&bob.public_points_message())?;
//! assert!(alice.process_secret_share_verification(bob.id())?);
//! ```

pub mod commitment;
pub mod config;
mod error;
pub mod group;
pub mod lagrange;
pub mod messages;
pub mod node;
pub mod polynomial;
pub mod secret;

pub use commitment::PointTuple;
pub use config::{DkgParams, NodeConfig};
pub use error::{DkgError, Result};
pub use group::{DkgGroup, DkgPoint, DkgScalar};
pub use lagrange::{interpolate_at_zero, interpolate_in_exponent, lagrange_coefficients_at_zero};
pub use messages::{ComplaintMessage, Message, PublicPointsMessage, SecretSharesMessage};
pub use node::{aggregate_public_key, Node, Participant};
pub use polynomial::{CoefficientPolicy, ScalarPolynomial};
pub use secret::Secret;

#[cfg(feature = "p256")]
pub use group::nist_p256::NistP256;

#[cfg(feature = "secp256k1")]
pub use group::secp256k1::Secp256k1;

#[cfg(feature = "ristretto255")]
pub use group::ristretto::Ristretto255;

#[cfg(feature = "pallas")]
pub use group::pallas::Pallas;
