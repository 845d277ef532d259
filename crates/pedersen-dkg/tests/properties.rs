//! Property tests for interpolation, share verification and message decoding

#![cfg(feature = "ristretto255")]

use curve25519_dalek::scalar::Scalar;
use pedersen_dkg::{
    interpolate_at_zero, CoefficientPolicy, DkgError, Message, Node, NodeConfig, Participant,
    Ristretto255, ScalarPolynomial, Secret,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

type Poly = ScalarPolynomial<Ristretto255>;

// ============================================================================
// Strategies
// ============================================================================

/// Distinct non-zero sample positions
fn distinct_xs(max: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..u64::MAX, 1..=max).prop_map(|set| set.into_iter().collect())
}

fn config(t: usize) -> NodeConfig<Ristretto255> {
    NodeConfig::from_domain(b"property tests", t)
}

// ============================================================================
// Interpolation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// t samples of a length-t polynomial always recover the constant term
    #[test]
    fn interpolation_recovers_constant(seed in any::<u64>(), xs in distinct_xs(12)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let poly = Poly::generate(xs.len(), CoefficientPolicy::AllowZero, &mut rng).unwrap();
        let points: Vec<(Scalar, Scalar)> = xs
            .iter()
            .map(|&x| (Scalar::from(x), poly.evaluate(&Scalar::from(x))))
            .collect();

        prop_assert_eq!(interpolate_at_zero(&points).unwrap(), *poly.constant_term().unwrap());
    }

    /// A repeated x-coordinate is always an error
    #[test]
    fn interpolation_rejects_duplicates(xs in distinct_xs(8), pick in any::<prop::sample::Index>()) {
        let mut points: Vec<(Scalar, Scalar)> =
            xs.iter().map(|&x| (Scalar::from(x), Scalar::from(x ^ 0x55))).collect();
        let dup = points[pick.index(points.len())];
        points.push(dup);

        prop_assert_eq!(
            interpolate_at_zero(&points),
            Err(DkgError::Interpolation("duplicate x-coordinates"))
        );
    }
}

// ============================================================================
// Share verification
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Honest shares verify, any perturbation of either share is rejected
    #[test]
    fn verification_sound_and_binding(
        seed in any::<u64>(),
        t in 1usize..6,
        receiver in 1u64..1_000_000,
        delta in 1u64..u64::MAX,
        first in any::<bool>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dealer = Node::generate(config(t), Scalar::from(receiver + 1), &mut rng).unwrap();
        let mut node = Node::generate(config(t), Scalar::from(receiver), &mut rng).unwrap();

        let (share1, share2) = dealer.evaluate_polynomials(node.id());
        let honest = Participant::new(
            *dealer.id(),
            share1,
            share2,
            dealer.verification_points().clone(),
        );
        node.add_participant(honest.clone()).unwrap();
        prop_assert!(node.process_secret_share_verification(dealer.id()).unwrap());

        let mut tampered = honest;
        if first {
            tampered.secret_share1 = Secret::new(*tampered.secret_share1.expose() + Scalar::from(delta));
        } else {
            tampered.secret_share2 = Secret::new(*tampered.secret_share2.expose() + Scalar::from(delta));
        }
        node.add_participant(tampered).unwrap();
        prop_assert!(!node.process_secret_share_verification(dealer.id()).unwrap());
    }
}

// ============================================================================
// Message decoding
// ============================================================================

proptest! {
    /// Arbitrary bytes never panic the decoder
    #[test]
    fn decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = Message::<Ristretto255>::from_bytes(&bytes);
    }

    /// Versioned headers with a random body either decode or fail cleanly
    #[test]
    fn decoder_framed_garbage(tag in 0u8..5, body in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut bytes = vec![1u8, tag];
        bytes.extend_from_slice(&body);
        if let Ok(msg) = Message::<Ristretto255>::from_bytes(&bytes) {
            prop_assert_eq!(msg.to_bytes(), bytes);
        }
    }
}
