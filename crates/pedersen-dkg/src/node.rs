//! One participant's local DKG state
//!
//! A [`Node`] owns its two secret polynomials, publishes Pedersen
//! verification points for them, hands out shares to peers, and checks the
//! shares it receives:
//!
//! ```text
//! share1 · G + share2 · H  ==  Σ C_i · id^i
//! ```
//!
//! where C is the sender's [`PointTuple`] and id this node's identifier.
//! Peer records live in a map owned by the node; callers that share a node
//! across threads wrap it in their own lock.

use core::fmt;
use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, instrument, warn};
use zeroize::Zeroize;

use crate::commitment::PointTuple;
use crate::config::NodeConfig;
use crate::error::{DkgError, Result};
use crate::group::{DkgGroup, DkgPoint, DkgScalar};
use crate::messages::{ComplaintMessage, PublicPointsMessage, SecretSharesMessage, MAX_POINTS};
use crate::polynomial::ScalarPolynomial;
use crate::secret::Secret;

/// A node's view of one peer
///
/// Shares are wiped when the record is dropped.
#[derive(Clone)]
pub struct Participant<G: DkgGroup> {
    pub id: G::Scalar,
    /// poly1 of the peer evaluated at our id
    pub secret_share1: Secret<G::Scalar>,
    /// poly2 of the peer evaluated at our id
    pub secret_share2: Secret<G::Scalar>,
    pub verification_points: PointTuple<G>,
}

impl<G: DkgGroup> Participant<G> {
    pub fn new(
        id: G::Scalar,
        secret_share1: G::Scalar,
        secret_share2: G::Scalar,
        verification_points: PointTuple<G>,
    ) -> Self {
        Self {
            id,
            secret_share1: Secret::new(secret_share1),
            secret_share2: Secret::new(secret_share2),
            verification_points,
        }
    }
}

impl<G: DkgGroup> Drop for Participant<G> {
    fn drop(&mut self) {
        self.secret_share1.zeroize();
        self.secret_share2.zeroize();
    }
}

impl<G: DkgGroup> fmt::Debug for Participant<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id.to_hex())
            .field("secret_share1", &"[REDACTED]")
            .field("secret_share2", &"[REDACTED]")
            .field("verification_points", &self.verification_points.len())
            .finish()
    }
}

/// Halves of a participant record received so far
struct Pending<G: DkgGroup> {
    shares: Option<(Secret<G::Scalar>, Secret<G::Scalar>)>,
    points: Option<PointTuple<G>>,
}

impl<G: DkgGroup> Default for Pending<G> {
    fn default() -> Self {
        Self { shares: None, points: None }
    }
}

impl<G: DkgGroup> Drop for Pending<G> {
    fn drop(&mut self) {
        if let Some((s1, s2)) = self.shares.as_mut() {
            s1.zeroize();
            s2.zeroize();
        }
    }
}

/// Local participant in a Pedersen DKG run
pub struct Node<G: DkgGroup> {
    config: NodeConfig<G>,
    id: G::Scalar,
    secret_poly1: ScalarPolynomial<G>,
    secret_poly2: ScalarPolynomial<G>,
    public_key_part: G::Point,
    verification_points: PointTuple<G>,
    // keyed by the big-endian id encoding; an id is in at most one map
    participants: BTreeMap<[u8; 32], Participant<G>>,
    pending: BTreeMap<[u8; 32], Pending<G>>,
}

impl<G: DkgGroup> Node<G> {
    /// Validate everything and commit to the polynomials
    ///
    /// Fails without building anything if g2 is unusable, either polynomial
    /// violates the configured policy, poly1 is not `config.threshold` long,
    /// their lengths differ, or `id` is zero.
    pub fn new(
        config: NodeConfig<G>,
        id: G::Scalar,
        secret_poly1: ScalarPolynomial<G>,
        secret_poly2: ScalarPolynomial<G>,
    ) -> Result<Self> {
        G::validate_generator(&config.g2)?;

        let secret_poly1 = secret_poly1.into_validated("secret polynomial 1", config.policy)?;
        let secret_poly2 = secret_poly2.into_validated("secret polynomial 2", config.policy)?;

        if config.threshold > MAX_POINTS {
            return Err(DkgError::InvalidConfig(format!(
                "threshold must be at most {}",
                MAX_POINTS
            )));
        }
        if secret_poly1.threshold() != config.threshold {
            return Err(DkgError::ThresholdMismatch {
                expected: config.threshold,
                got: secret_poly1.threshold(),
            });
        }

        if id.is_zero() {
            return Err(DkgError::InvalidIdentifier);
        }

        let verification_points = PointTuple::commit(&secret_poly1, &secret_poly2, &config.g2)?;
        let constant = secret_poly1.constant_term().ok_or(DkgError::EmptyPolynomial)?;
        let public_key_part = G::scalar_base_mult(constant);

        debug!(
            group = G::NAME,
            node = %id.to_hex(),
            threshold = secret_poly1.threshold(),
            "dkg node created"
        );

        Ok(Self {
            config,
            id,
            secret_poly1,
            secret_poly2,
            public_key_part,
            verification_points,
            participants: BTreeMap::new(),
            pending: BTreeMap::new(),
        })
    }

    /// Sample fresh secret polynomials of length `config.threshold`
    pub fn generate<R: rand_core::RngCore + rand_core::CryptoRng>(
        config: NodeConfig<G>,
        id: G::Scalar,
        rng: &mut R,
    ) -> Result<Self> {
        let poly1 = ScalarPolynomial::generate(config.threshold, config.policy, rng)?;
        let poly2 = ScalarPolynomial::generate(config.threshold, config.policy, rng)?;
        Self::new(config, id, poly1, poly2)
    }

    pub fn id(&self) -> &G::Scalar {
        &self.id
    }

    pub fn threshold(&self) -> usize {
        self.secret_poly1.threshold()
    }

    pub fn g2(&self) -> &G::Point {
        &self.config.g2
    }

    pub fn zk_param(&self) -> Option<&G::Scalar> {
        self.config.zk_param.as_ref()
    }

    /// Advisory, for the transport
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// poly1(0) · G, this node's contribution to the group public key
    pub fn public_key_part(&self) -> &G::Point {
        &self.public_key_part
    }

    /// Commitments to broadcast
    pub fn verification_points(&self) -> &PointTuple<G> {
        &self.verification_points
    }

    /// (poly1(x), poly2(x)), the shares owed to the peer with id `x`
    pub fn evaluate_polynomials(&self, x: &G::Scalar) -> (G::Scalar, G::Scalar) {
        (self.secret_poly1.evaluate(x), self.secret_poly2.evaluate(x))
    }

    /// Private message carrying the shares owed to `peer`
    pub fn secret_shares_for(&self, peer: &G::Scalar) -> Result<SecretSharesMessage<G>> {
        if peer.is_zero() {
            return Err(DkgError::InvalidIdentifier);
        }
        let (share1, share2) = self.evaluate_polynomials(peer);
        Ok(SecretSharesMessage::new(self.id.clone(), peer.clone(), share1, share2))
    }

    pub fn public_points_message(&self) -> PublicPointsMessage<G> {
        // threshold checked against MAX_POINTS in new
        PublicPointsMessage::from_bounded(self.id.clone(), self.verification_points.clone())
    }

    pub fn complaint_against(&self, accused: &G::Scalar) -> ComplaintMessage<G> {
        ComplaintMessage::new(self.id.clone(), accused.clone())
    }

    /// Insert or replace a peer record
    ///
    /// Any half staged for the same id is discarded.
    pub fn add_participant(&mut self, participant: Participant<G>) -> Result<()> {
        if participant.id.is_zero() {
            return Err(DkgError::InvalidIdentifier);
        }
        let key = participant.id.to_bytes();
        self.pending.remove(&key);
        self.check_capacity(&key)?;
        debug!(
            node = %self.id.to_hex(),
            participant = %participant.id.to_hex(),
            "participant registered"
        );
        self.participants.insert(key, participant);
        Ok(())
    }

    /// Peers tracked, registered or staged
    pub fn tracked_peers(&self) -> usize {
        self.participants.len() + self.pending.len()
    }

    // a new id may only be tracked below the configured limit
    fn check_capacity(&self, key: &[u8; 32]) -> Result<()> {
        if self.participants.contains_key(key) || self.pending.contains_key(key) {
            return Ok(());
        }
        if self.tracked_peers() >= self.config.max_participants {
            warn!(
                node = %self.id.to_hex(),
                limit = self.config.max_participants,
                "participant limit reached"
            );
            return Err(DkgError::TooManyParticipants { limit: self.config.max_participants });
        }
        Ok(())
    }

    pub fn participant(&self, id: &G::Scalar) -> Option<&Participant<G>> {
        self.participants.get(&id.to_bytes())
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant<G>> {
        self.participants.values()
    }

    /// Stage received shares; returns the participant once its points are
    /// also known
    ///
    /// Shares from an already registered peer replace its record's shares.
    pub fn handle_secret_shares(
        &mut self,
        msg: &SecretSharesMessage<G>,
    ) -> Result<Option<&Participant<G>>> {
        if msg.to != self.id {
            return Err(DkgError::Encoding(format!(
                "shares addressed to {} delivered to {}",
                msg.to.to_hex(),
                self.id.to_hex()
            )));
        }
        if msg.from.is_zero() {
            return Err(DkgError::InvalidIdentifier);
        }

        let key = msg.from.to_bytes();
        let shares = (Secret::new(msg.share1.clone()), Secret::new(msg.share2.clone()));
        if let Some(participant) = self.participants.get_mut(&key) {
            participant.secret_share1 = shares.0;
            participant.secret_share2 = shares.1;
            return Ok(self.participants.get(&key));
        }

        self.check_capacity(&key)?;
        self.pending.entry(key).or_default().shares = Some(shares);
        self.complete(&msg.from)
    }

    /// Stage a peer's broadcast commitments; returns the participant once
    /// its shares are also known
    ///
    /// Points from an already registered peer replace its record's points.
    pub fn handle_public_points(
        &mut self,
        msg: &PublicPointsMessage<G>,
    ) -> Result<Option<&Participant<G>>> {
        let player = msg.player();
        if player.is_zero() {
            return Err(DkgError::InvalidIdentifier);
        }

        let key = player.to_bytes();
        if let Some(participant) = self.participants.get_mut(&key) {
            participant.verification_points = msg.points().clone();
            return Ok(self.participants.get(&key));
        }

        self.check_capacity(&key)?;
        self.pending.entry(key).or_default().points = Some(msg.points().clone());
        self.complete(player)
    }

    // move a peer from pending to participants once both halves are in
    fn complete(&mut self, peer: &G::Scalar) -> Result<Option<&Participant<G>>> {
        let key = peer.to_bytes();
        let ready = matches!(
            self.pending.get(&key),
            Some(Pending { shares: Some(_), points: Some(_) })
        );
        if !ready {
            return Ok(None);
        }

        let mut staged = match self.pending.remove(&key) {
            Some(staged) => staged,
            None => return Ok(None),
        };
        let (shares, points) = match (staged.shares.take(), staged.points.take()) {
            (Some(shares), Some(points)) => (shares, points),
            _ => return Ok(None),
        };
        self.add_participant(Participant {
            id: peer.clone(),
            secret_share1: shares.0,
            secret_share2: shares.1,
            verification_points: points,
        })?;
        Ok(self.participants.get(&key))
    }

    /// Check the shares received from `sender` against its commitments
    ///
    /// `Ok(false)` means the shares were checked and rejected; a missing
    /// record is an error, never a verdict.
    #[instrument(level = "debug", skip_all, fields(node = %self.id.to_hex(), sender = %sender.to_hex()))]
    pub fn process_secret_share_verification(&self, sender: &G::Scalar) -> Result<bool> {
        let participant = self.participant(sender).ok_or_else(|| DkgError::ParticipantNotFound {
            node: self.id.to_hex(),
            participant: sender.to_hex(),
        })?;

        let points = &participant.verification_points;
        if points.len() != self.threshold() {
            warn!(
                expected = self.threshold(),
                got = points.len(),
                "commitment count does not match threshold"
            );
            return Ok(false);
        }

        let lhs = G::add(
            &G::scalar_base_mult(participant.secret_share1.expose()),
            &G::scalar_mult(&self.config.g2, participant.secret_share2.expose()),
        );
        let rhs = points.evaluate_at(&self.id);

        let verified = lhs == rhs;
        if verified {
            debug!("shares verified");
        } else {
            warn!("shares failed verification");
        }
        Ok(verified)
    }

    /// Complaints against every registered peer whose shares fail
    pub fn complaints(&self) -> Result<Vec<ComplaintMessage<G>>> {
        let mut complaints = Vec::new();
        for participant in self.participants.values() {
            if !self.process_secret_share_verification(&participant.id)? {
                complaints.push(self.complaint_against(&participant.id));
            }
        }
        Ok(complaints)
    }

    /// Final secret share: poly1(id) plus share1 of every qualified peer
    ///
    /// Every peer in `qualified` other than this node must be registered and
    /// verify; the result is a Shamir share of Σ poly1_j(0).
    pub fn combined_share(&self, qualified: &[G::Scalar]) -> Result<G::Scalar> {
        let mut share = self.secret_poly1.evaluate(&self.id);
        for peer in qualified.iter().filter(|peer| **peer != self.id) {
            if !self.process_secret_share_verification(peer)? {
                return Err(DkgError::ShareRejected(peer.to_hex()));
            }
            let participant = self.participant(peer).ok_or_else(|| DkgError::ParticipantNotFound {
                node: self.id.to_hex(),
                participant: peer.to_hex(),
            })?;
            share = share.add(participant.secret_share1.expose());
        }
        Ok(share)
    }
}

/// Σ public key parts, the group public key of the qualified set
pub fn aggregate_public_key<G: DkgGroup>(parts: &[G::Point]) -> G::Point {
    parts
        .iter()
        .fold(G::Point::identity(), |acc, p| G::add(&acc, p))
}

impl<G: DkgGroup> fmt::Debug for Node<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("group", &G::NAME)
            .field("id", &self.id.to_hex())
            .field("threshold", &self.threshold())
            .field("secret_polynomials", &"[REDACTED]")
            .field("participants", &self.participants.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}
