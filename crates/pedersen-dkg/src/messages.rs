//! DKG message shapes handed to the transport
//!
//! The core never sends anything itself; these are the payloads a caller
//! moves over its private (shares) and broadcast (points, complaints)
//! channels. Encoding is fixed-field binary:
//!
//! ```text
//! version (1) || tag (1) || body
//!
//! 0x01 SecretShares   from (32) || to (32) || share1 (32) || share2 (32)
//! 0x02 Complaint      accuser (32) || accused (32)
//! 0x03 PublicPoints   player (32) || count (u32 LE) || count * point
//! ```
//!
//! Scalars are big-endian, points use the backend's `ENCODED_SIZE`.

use core::fmt;

use zeroize::Zeroizing;

use crate::commitment::PointTuple;
use crate::error::{DkgError, Result};
use crate::group::{DkgGroup, DkgScalar};

/// Current wire version
pub const MESSAGE_VERSION: u8 = 1;

/// Most points a `PublicPoints` message may carry, and so the largest
/// usable threshold
pub const MAX_POINTS: usize = u16::MAX as usize;

const TAG_SECRET_SHARES: u8 = 0x01;
const TAG_COMPLAINT: u8 = 0x02;
const TAG_PUBLIC_POINTS: u8 = 0x03;

const HEADER_LEN: usize = 2;
const SCALAR_LEN: usize = 32;

/// Private, point-to-point: the dealer's two shares for one recipient
#[derive(Clone, PartialEq)]
pub struct SecretSharesMessage<G: DkgGroup> {
    pub from: G::Scalar,
    pub to: G::Scalar,
    pub share1: G::Scalar,
    pub share2: G::Scalar,
}

impl<G: DkgGroup> SecretSharesMessage<G> {
    pub const ENCODED_LEN: usize = HEADER_LEN + 4 * SCALAR_LEN;

    pub fn new(from: G::Scalar, to: G::Scalar, share1: G::Scalar, share2: G::Scalar) -> Self {
        Self { from, to, share1, share2 }
    }

    /// Serialize; the buffer is wiped when dropped
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut buf = Zeroizing::new(Vec::with_capacity(Self::ENCODED_LEN));
        buf.extend_from_slice(&[MESSAGE_VERSION, TAG_SECRET_SHARES]);
        buf.extend_from_slice(&self.from.to_bytes());
        buf.extend_from_slice(&self.to.to_bytes());
        buf.extend_from_slice(&Zeroizing::new(self.share1.to_bytes())[..]);
        buf.extend_from_slice(&Zeroizing::new(self.share2.to_bytes())[..]);
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let body = read_header(bytes, TAG_SECRET_SHARES)?;
        expect_len(body, 4 * SCALAR_LEN)?;

        Ok(Self {
            from: read_scalar::<G>(body, 0)?,
            to: read_scalar::<G>(body, 1)?,
            share1: read_scalar::<G>(body, 2)?,
            share2: read_scalar::<G>(body, 3)?,
        })
    }
}

// Prevent Debug from leaking shares
impl<G: DkgGroup> fmt::Debug for SecretSharesMessage<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSharesMessage")
            .field("from", &self.from.to_hex())
            .field("to", &self.to.to_hex())
            .field("share1", &"[REDACTED]")
            .field("share2", &"[REDACTED]")
            .finish()
    }
}

/// Broadcast: `accuser` received shares from `accused` that failed verification
#[derive(Clone, Debug, PartialEq)]
pub struct ComplaintMessage<G: DkgGroup> {
    pub accuser: G::Scalar,
    pub accused: G::Scalar,
}

impl<G: DkgGroup> ComplaintMessage<G> {
    pub const ENCODED_LEN: usize = HEADER_LEN + 2 * SCALAR_LEN;

    pub fn new(accuser: G::Scalar, accused: G::Scalar) -> Self {
        Self { accuser, accused }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::ENCODED_LEN);
        buf.extend_from_slice(&[MESSAGE_VERSION, TAG_COMPLAINT]);
        buf.extend_from_slice(&self.accuser.to_bytes());
        buf.extend_from_slice(&self.accused.to_bytes());
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let body = read_header(bytes, TAG_COMPLAINT)?;
        expect_len(body, 2 * SCALAR_LEN)?;

        Ok(Self {
            accuser: read_scalar::<G>(body, 0)?,
            accused: read_scalar::<G>(body, 1)?,
        })
    }
}

/// Broadcast: a player's Pedersen verification points
///
/// Holds at most [`MAX_POINTS`] points.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicPointsMessage<G: DkgGroup> {
    player: G::Scalar,
    points: PointTuple<G>,
}

impl<G: DkgGroup> PublicPointsMessage<G> {
    pub fn new(player: G::Scalar, points: PointTuple<G>) -> Result<Self> {
        check_count(points.len())?;
        Ok(Self { player, points })
    }

    /// Caller guarantees `points.len() <= MAX_POINTS`
    pub(crate) fn from_bounded(player: G::Scalar, points: PointTuple<G>) -> Self {
        debug_assert!(points.len() <= MAX_POINTS);
        Self { player, points }
    }

    pub fn player(&self) -> &G::Scalar {
        &self.player
    }

    pub fn points(&self) -> &PointTuple<G> {
        &self.points
    }

    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + SCALAR_LEN + 4 + self.points.byte_size()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(&[MESSAGE_VERSION, TAG_PUBLIC_POINTS]);
        buf.extend_from_slice(&self.player.to_bytes());
        // lossless, len <= MAX_POINTS
        buf.extend_from_slice(&(self.points.len() as u32).to_le_bytes());
        buf.extend_from_slice(&self.points.to_bytes());
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let body = read_header(bytes, TAG_PUBLIC_POINTS)?;
        if body.len() < SCALAR_LEN + 4 {
            return Err(DkgError::Encoding(format!(
                "public points body too short: {} bytes",
                body.len()
            )));
        }

        let player = read_scalar::<G>(body, 0)?;
        let mut count = [0u8; 4];
        count.copy_from_slice(&body[SCALAR_LEN..SCALAR_LEN + 4]);
        let count = u32::from_le_bytes(count) as usize;
        check_count(count)?;
        let points = PointTuple::from_bytes(&body[SCALAR_LEN + 4..], count)?;

        Ok(Self { player, points })
    }
}

/// Any DKG message, dispatched on the tag byte
#[derive(Clone, Debug, PartialEq)]
pub enum Message<G: DkgGroup> {
    SecretShares(SecretSharesMessage<G>),
    Complaint(ComplaintMessage<G>),
    PublicPoints(PublicPointsMessage<G>),
}

impl<G: DkgGroup> Message<G> {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::SecretShares(m) => m.to_bytes().to_vec(),
            Self::Complaint(m) => m.to_bytes(),
            Self::PublicPoints(m) => m.to_bytes(),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.get(1) {
            Some(&TAG_SECRET_SHARES) => SecretSharesMessage::from_bytes(bytes).map(Self::SecretShares),
            Some(&TAG_COMPLAINT) => ComplaintMessage::from_bytes(bytes).map(Self::Complaint),
            Some(&TAG_PUBLIC_POINTS) => PublicPointsMessage::from_bytes(bytes).map(Self::PublicPoints),
            Some(tag) => {
                check_version(bytes[0])?;
                Err(DkgError::Encoding(format!("unknown message tag {:#04x}", tag)))
            }
            None => Err(DkgError::Encoding("missing message header".into())),
        }
    }
}

fn check_count(count: usize) -> Result<()> {
    if count > MAX_POINTS {
        return Err(DkgError::Encoding(format!(
            "{} points exceeds the limit of {}",
            count, MAX_POINTS
        )));
    }
    Ok(())
}

fn check_version(version: u8) -> Result<()> {
    if version != MESSAGE_VERSION {
        return Err(DkgError::UnsupportedVersion(version));
    }
    Ok(())
}

fn read_header(bytes: &[u8], tag: u8) -> Result<&[u8]> {
    if bytes.len() < HEADER_LEN {
        return Err(DkgError::Encoding("missing message header".into()));
    }
    check_version(bytes[0])?;
    if bytes[1] != tag {
        return Err(DkgError::Encoding(format!(
            "expected tag {:#04x}, got {:#04x}",
            tag, bytes[1]
        )));
    }
    Ok(&bytes[HEADER_LEN..])
}

fn expect_len(body: &[u8], len: usize) -> Result<()> {
    if body.len() != len {
        return Err(DkgError::Encoding(format!(
            "expected {} body bytes, got {}",
            len,
            body.len()
        )));
    }
    Ok(())
}

/// Scalar field `index` of a body made of 32-byte scalars
fn read_scalar<G: DkgGroup>(body: &[u8], index: usize) -> Result<G::Scalar> {
    let offset = index * SCALAR_LEN;
    let mut bytes = Zeroizing::new([0u8; SCALAR_LEN]);
    bytes.copy_from_slice(&body[offset..offset + SCALAR_LEN]);
    G::decode_scalar(index, &bytes)
}
