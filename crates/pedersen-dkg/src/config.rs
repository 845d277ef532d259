//! Run parameters
//!
//! [`DkgParams`] is the serializable form a deployment keeps in its own
//! config file; [`NodeConfig`] is the typed, validated form a [`Node`] is
//! built from.
//!
//! [`Node`]: crate::node::Node

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DkgError, Result};
use crate::group::DkgGroup;
use crate::messages::MAX_POINTS;
use crate::polynomial::CoefficientPolicy;

/// Advisory round timeout handed to the transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Domain used to derive the second generator when none is configured
pub const DEFAULT_G2_DOMAIN: &str = "pedersen-dkg/g2";

/// Peers a node will track, staged or registered
pub const DEFAULT_MAX_PARTICIPANTS: usize = 1024;

/// Serializable parameter set shared by all nodes of one run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DkgParams {
    /// Number of shares needed to reconstruct (polynomial length)
    pub threshold: usize,
    pub timeout_ms: u64,
    /// Domain string fed to `hash_to_point` to derive g2
    pub g2_domain: String,
    /// Reserved for proof-of-possession extensions, hex of a 32-byte
    /// big-endian scalar
    pub zk_param: Option<String>,
    pub reject_zero_coefficients: bool,
    /// Upper bound on peers accepted from the network
    pub max_participants: usize,
}

impl Default for DkgParams {
    fn default() -> Self {
        Self {
            threshold: 2,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            g2_domain: DEFAULT_G2_DOMAIN.to_string(),
            zk_param: None,
            reject_zero_coefficients: true,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl DkgParams {
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(DkgError::InvalidConfig("threshold must be at least 1".into()));
        }
        if self.threshold > MAX_POINTS {
            return Err(DkgError::InvalidConfig(format!(
                "threshold must be at most {}",
                MAX_POINTS
            )));
        }
        if self.max_participants == 0 {
            return Err(DkgError::InvalidConfig("max_participants must be positive".into()));
        }
        if self.timeout_ms == 0 {
            return Err(DkgError::InvalidConfig("timeout_ms must be positive".into()));
        }
        if self.g2_domain.is_empty() {
            return Err(DkgError::InvalidConfig("g2_domain must not be empty".into()));
        }
        if let Some(zk) = &self.zk_param {
            decode_zk_param(zk)?;
        }
        Ok(())
    }

    pub fn policy(&self) -> CoefficientPolicy {
        if self.reject_zero_coefficients {
            CoefficientPolicy::RejectZero
        } else {
            CoefficientPolicy::AllowZero
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn decode_zk_param(encoded: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(encoded)
        .map_err(|e| DkgError::InvalidConfig(format!("zk_param is not hex: {}", e)))?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        DkgError::InvalidConfig(format!("zk_param must be 32 bytes, got {}", b.len()))
    })
}

/// Construction-time parameters of a node
#[derive(Clone, Debug)]
pub struct NodeConfig<G: DkgGroup> {
    /// Second generator, with no known discrete log relative to G
    pub g2: G::Point,
    /// Required length of both secret polynomials
    pub threshold: usize,
    /// Reserved, carried but unused by the protocol
    pub zk_param: Option<G::Scalar>,
    /// Advisory only, never enforced by the core
    pub timeout: Duration,
    pub policy: CoefficientPolicy,
    pub max_participants: usize,
}

impl<G: DkgGroup> NodeConfig<G> {
    pub fn new(g2: G::Point, threshold: usize) -> Self {
        Self {
            g2,
            threshold,
            zk_param: None,
            timeout: DEFAULT_TIMEOUT,
            policy: CoefficientPolicy::default(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }

    /// Derive g2 from `domain` with [`DkgGroup::hash_to_point`]
    pub fn from_domain(domain: &[u8], threshold: usize) -> Self {
        Self::new(G::hash_to_point(domain), threshold)
    }

    pub fn from_params(params: &DkgParams) -> Result<Self> {
        params.validate()?;

        let zk_param = match &params.zk_param {
            Some(encoded) => Some(G::decode_scalar(0, &decode_zk_param(encoded)?)?),
            None => None,
        };

        Ok(Self {
            g2: G::hash_to_point(params.g2_domain.as_bytes()),
            threshold: params.threshold,
            zk_param,
            timeout: params.timeout(),
            policy: params.policy(),
            max_participants: params.max_participants,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_zk_param(mut self, zk_param: G::Scalar) -> Self {
        self.zk_param = Some(zk_param);
        self
    }

    pub fn with_policy(mut self, policy: CoefficientPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_participants(mut self, max_participants: usize) -> Self {
        self.max_participants = max_participants;
        self
    }
}
