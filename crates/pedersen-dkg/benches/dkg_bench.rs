//! DKG benchmarks
//!
//! Usage:
//!   cargo bench -p pedersen-dkg                  # run all benchmarks
//!   cargo bench -p pedersen-dkg -- verify        # share verification only
//!   cargo bench -p pedersen-dkg -- interpolate   # interpolation only

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pedersen_dkg::{
    interpolate_at_zero, CoefficientPolicy, DkgGroup, DkgScalar, Node, NodeConfig, Participant,
    ScalarPolynomial,
};
use rand::rngs::OsRng;

const THRESHOLDS: [usize; 3] = [4, 16, 64];

/// Node 1 holding honest shares from dealer 2
fn verifying_node<G: DkgGroup>(t: usize) -> Node<G> {
    let config = NodeConfig::<G>::from_domain(b"bench", t);
    let mut node = Node::generate(config.clone(), G::Scalar::from_u64(1), &mut OsRng).unwrap();
    let dealer = Node::generate(config, G::Scalar::from_u64(2), &mut OsRng).unwrap();

    let (share1, share2) = dealer.evaluate_polynomials(node.id());
    node.add_participant(Participant::new(
        dealer.id().clone(),
        share1,
        share2,
        dealer.verification_points().clone(),
    ))
    .unwrap();
    node
}

fn bench_verify_for<G: DkgGroup>(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    group.sample_size(20);

    let sender = G::Scalar::from_u64(2);
    for t in THRESHOLDS {
        let node = verifying_node::<G>(t);
        group.bench_function(BenchmarkId::new(G::NAME, t), |b| {
            b.iter(|| {
                let ok = node.process_secret_share_verification(black_box(&sender)).unwrap();
                black_box(ok)
            });
        });
    }

    group.finish();
}

fn bench_commit_for<G: DkgGroup>(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");
    group.sample_size(10);

    for t in THRESHOLDS {
        group.bench_function(BenchmarkId::new(G::NAME, t), |b| {
            b.iter(|| {
                let node = Node::<G>::generate(
                    NodeConfig::from_domain(b"bench", black_box(t)),
                    G::Scalar::from_u64(1),
                    &mut OsRng,
                )
                .unwrap();
                black_box(node.public_key_part().clone())
            });
        });
    }

    group.finish();
}

fn bench_interpolate_for<G: DkgGroup>(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");

    for t in THRESHOLDS {
        let poly = ScalarPolynomial::<G>::generate(t, CoefficientPolicy::RejectZero, &mut OsRng)
            .unwrap();
        let points: Vec<(G::Scalar, G::Scalar)> = (1..=t as u64)
            .map(|x| {
                let x = G::Scalar::from_u64(x);
                let y = poly.evaluate(&x);
                (x, y)
            })
            .collect();

        group.bench_function(BenchmarkId::new(G::NAME, t), |b| {
            b.iter(|| black_box(interpolate_at_zero(black_box(&points)).unwrap()));
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    #[cfg(feature = "p256")]
    bench_verify_for::<pedersen_dkg::NistP256>(c);
    #[cfg(feature = "secp256k1")]
    bench_verify_for::<pedersen_dkg::Secp256k1>(c);
    #[cfg(feature = "ristretto255")]
    bench_verify_for::<pedersen_dkg::Ristretto255>(c);
    #[cfg(feature = "pallas")]
    bench_verify_for::<pedersen_dkg::Pallas>(c);
}

fn bench_commit(c: &mut Criterion) {
    #[cfg(feature = "p256")]
    bench_commit_for::<pedersen_dkg::NistP256>(c);
    #[cfg(feature = "ristretto255")]
    bench_commit_for::<pedersen_dkg::Ristretto255>(c);
}

fn bench_interpolate(c: &mut Criterion) {
    #[cfg(feature = "p256")]
    bench_interpolate_for::<pedersen_dkg::NistP256>(c);
    #[cfg(feature = "ristretto255")]
    bench_interpolate_for::<pedersen_dkg::Ristretto255>(c);
}

criterion_group!(benches, bench_verify, bench_commit, bench_interpolate);
criterion_main!(benches);
