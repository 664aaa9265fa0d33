use std::hint::black_box;

use bloomset::BloomFilter;
use bloomset::hash_utils::HashScheme;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn setup(scheme: HashScheme) -> BloomFilter {
    let false_positive_rate = 0.01; // = 1%
    let expected_elements = 1_000_000;
    BloomFilter::with_properties_and_scheme(expected_elements, false_positive_rate, scheme)
        .unwrap()
}

fn bloomfilter_add_single(c: &mut Criterion) {
    for (name, scheme) in [
        ("seeded", HashScheme::Seeded),
        ("double_hashing", HashScheme::DoubleHashing),
    ] {
        c.bench_function(&format!("bloomfilter_add_single_{}", name), |b| {
            let mut filter = setup(scheme);
            let obj = "foo bar";

            b.iter(|| {
                filter.add(black_box(obj));
            })
        });
    }
}

fn bloomfilter_contains_miss(c: &mut Criterion) {
    c.bench_function("bloomfilter_contains_miss", |b| {
        let mut filter = setup(HashScheme::DoubleHashing);
        for i in 0u64..10_000 {
            filter.add(&i.to_le_bytes());
        }
        let obj = "not in there";

        b.iter(|| filter.contains(black_box(obj)))
    });
}

fn bloomfilter_insert_many(c: &mut Criterion) {
    c.bench_function("bloomfilter_insert_many", |b| {
        b.iter_batched(
            || setup(HashScheme::DoubleHashing),
            |mut filter| {
                for i in 0u64..100 {
                    filter.add(&i.to_le_bytes());
                }
                filter
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bloomfilter_add_single,
    bloomfilter_contains_miss,
    bloomfilter_insert_many,
);
criterion_main!(benches);
