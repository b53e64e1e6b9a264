use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use saes_core::{decrypt_block, encrypt_block, expand_key, key_expansion, SaesKey};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("key_expansion", |b| {
        b.iter(|| key_expansion(black_box(0xA73B)));
    });
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let round_keys = expand_key(&SaesKey(0xA73B));
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let block: u16 = rng.gen();

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(block), &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(black_box(block), &round_keys));
    });
    group.bench_function("encrypt_all_blocks", |b| {
        b.iter(|| {
            (0..=u16::MAX).fold(0u16, |acc, p| acc ^ encrypt_block(p, &round_keys))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
