use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use strmap::HashMap;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(1).take(100_000).map(key).collect();
    c.bench_function("strmap::insert_fresh_100k", |b| {
        b.iter_batched(
            HashMap::<u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    let _ = m.insert(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("hashbrown::insert_fresh_100k", |b| {
        b.iter_batched(
            hashbrown::HashMap::<String, u64>::new,
            |mut m| {
                for (i, k) in keys.iter().enumerate() {
                    m.entry(k.clone()).or_insert(i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_duplicates_10k(c: &mut Criterion) {
    c.bench_function("strmap::insert_duplicate_10k_on_10k", |b| {
        let mut m = HashMap::new();
        let keys: Vec<_> = lcg(3).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            let _ = m.insert(k, i as u64);
        }
        b.iter(|| {
            for k in &keys {
                black_box(m.insert(k, 0).is_err());
            }
        })
    });
}

fn bench_find_hit_10k(c: &mut Criterion) {
    let keys: Vec<_> = lcg(7).take(100_000).map(key).collect();
    // Precompute 10k random query keys using LCG
    let n = keys.len();
    let mut s = 0x9e3779b97f4a7c15u64;
    let queries: Vec<String> = (0..10_000)
        .map(|_| {
            s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            keys[(s as usize) % n].clone()
        })
        .collect();

    c.bench_function("strmap::find_hit_10k_on_100k", |b| {
        let mut m = HashMap::new();
        for (i, k) in keys.iter().enumerate() {
            let _ = m.insert(k, i as u64);
        }
        b.iter(|| {
            for k in &queries {
                black_box(m.find(k).ok());
            }
        })
    });
    c.bench_function("hashbrown::find_hit_10k_on_100k", |b| {
        let m: hashbrown::HashMap<String, u64> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i as u64))
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(m.get(k.as_str()));
            }
        })
    });
}

fn bench_find_miss_10k(c: &mut Criterion) {
    c.bench_function("strmap::find_miss_10k_on_100k", |b| {
        let mut m = HashMap::new();
        for (i, x) in lcg(11).take(100_000).enumerate() {
            let _ = m.insert(&key(x), i as u64);
        }
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(m.find(k).ok());
            }
        })
    });
}

fn bench_cursor_and_iter(c: &mut Criterion) {
    let mut m = HashMap::new();
    for (i, x) in lcg(999).take(100_000).enumerate() {
        let _ = m.insert(&key(x), i as u64);
    }

    c.bench_function("strmap::iter_all_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in m.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });

    c.bench_function("strmap::cursor_all_100k", |b| {
        b.iter(|| {
            m.reset_cursor();
            let mut sum = 0u64;
            while let Some((_k, v)) = m.next_entry() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k, bench_insert_duplicates_10k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_find_hit_10k,
              bench_find_miss_10k,
              bench_cursor_and_iter
}
criterion_main!(benches_insert, benches_ops);
