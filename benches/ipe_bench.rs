use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ipfe_rust::{BigInt, Damgard, Ddh, FunctionalEncryption};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_DIM: usize = 5;
const BOUND: i64 = 50;
const MODULUS_BITS: usize = 2048;

fn random_vector(rng: &mut StdRng, dim: usize) -> Vec<BigInt> {
    (0..dim).map(|_| BigInt::from(rng.gen_range(-BOUND..=BOUND))).collect()
}

fn benchmark_ddh(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddh");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let bound = BigInt::from(BOUND);
    let scheme = Ddh::new_precomp(VECTOR_DIM, MODULUS_BITS, &bound).unwrap();
    let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

    let x = random_vector(&mut rng, VECTOR_DIM);
    let y = random_vector(&mut rng, VECTOR_DIM);
    let cipher = scheme.encrypt(&x, &mpk, &mut rng).unwrap();
    let key = scheme.derive_key(&msk, &y).unwrap();

    group.bench_function("generate_master_keys", |b| {
        b.iter(|| scheme.generate_master_keys(&mut rng).unwrap())
    });
    group.bench_function("encrypt", |b| {
        b.iter(|| scheme.encrypt(black_box(&x), &mpk, &mut rng).unwrap())
    });
    group.bench_function("derive_key", |b| {
        b.iter(|| scheme.derive_key(&msk, black_box(&y)).unwrap())
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| scheme.decrypt(black_box(&cipher), &key, &y).unwrap())
    });
    group.finish();
}

fn benchmark_damgard(c: &mut Criterion) {
    let mut group = c.benchmark_group("damgard");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let bound = BigInt::from(BOUND);
    let scheme = Damgard::new_precomp(VECTOR_DIM, MODULUS_BITS, &bound).unwrap();
    let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();

    let x = random_vector(&mut rng, VECTOR_DIM);
    let y = random_vector(&mut rng, VECTOR_DIM);
    let cipher = scheme.encrypt(&x, &mpk, &mut rng).unwrap();
    let key = scheme.derive_key(&msk, &y).unwrap();

    group.bench_function("encrypt", |b| {
        b.iter(|| scheme.encrypt(black_box(&x), &mpk, &mut rng).unwrap())
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| scheme.decrypt(black_box(&cipher), &key, &y).unwrap())
    });
    group.finish();
}

fn benchmark_decrypt_by_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddh_decrypt_by_dimension");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(7);
    let bound = BigInt::from(BOUND);

    for dim in [1usize, 5, 20] {
        let scheme = Ddh::new_precomp(dim, MODULUS_BITS, &bound).unwrap();
        let (msk, mpk) = scheme.generate_master_keys(&mut rng).unwrap();
        let x = random_vector(&mut rng, dim);
        let y = random_vector(&mut rng, dim);
        let cipher = scheme.encrypt(&x, &mpk, &mut rng).unwrap();
        let key = scheme.derive_key(&msk, &y).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, _| {
            b.iter(|| scheme.decrypt(black_box(&cipher), &key, &y).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_ddh,
    benchmark_damgard,
    benchmark_decrypt_by_dimension
);
criterion_main!(benches);
