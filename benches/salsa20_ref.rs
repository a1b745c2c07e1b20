use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use salsa20::Salsa20;
use salsa20::cipher::{KeyIvInit, StreamCipher};
use std::hint::black_box;

pub fn bench_salsa20_ref(c: &mut Criterion) {
    let mut group = c.benchmark_group("rustcrypto salsa20");
    for size in [64usize, 1024, 16 * 1024] {
        let mut buf = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size} bytes"), |b| {
            let mut cipher = Salsa20::new_from_slices(&[0x42u8; 32], &[0x24u8; 8]).unwrap();
            b.iter(|| cipher.apply_keystream(black_box(&mut buf)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_salsa20_ref);
criterion_main!(benches);
