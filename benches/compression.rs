use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffzw::{huffman, lzw};

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> Vec<u8> {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len()).into_bytes()
}

/// Generate source code-like data
fn generate_source_code(size: usize) -> Vec<u8> {
    let patterns = [
        "fn main() {\n",
        "    let x = 42;\n",
        "    println!(\"Hello, world!\");\n",
        "    if x > 0 {\n",
        "        return x;\n",
        "    }\n",
        "}\n",
    ];

    let mut result = String::new();
    let mut i = 0;
    while result.len() < size {
        result.push_str(patterns[i % patterns.len()]);
        i += 1;
    }
    result.truncate(size);
    result.into_bytes()
}

/// Generate low-repetition binary data
fn generate_noise(size: usize) -> Vec<u8> {
    let mut seed = 12345u64;
    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 24) as u8
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let inputs: [(&str, fn(usize) -> Vec<u8>); 3] = [
        ("repetitive_text", generate_repetitive_text),
        ("source_code", generate_source_code),
        ("noise", generate_noise),
    ];

    for (name, generate) in inputs {
        let mut group = c.benchmark_group(format!("encode_{name}"));
        for size in sizes {
            let data = generate(size);

            group.bench_with_input(BenchmarkId::new("Huffman", size), &data, |b, data| {
                b.iter(|| huffman::encode(black_box(data)))
            });
            group.bench_with_input(BenchmarkId::new("LZW", size), &data, |b, data| {
                b.iter(|| lzw::encode(black_box(data)))
            });
        }
        group.finish();
    }
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_source_code");

    for size in [10_000, 100_000] {
        let data = generate_source_code(size);
        let (Ok(huf), Ok(lzw_container)) = (huffman::encode(&data), lzw::encode(&data)) else {
            panic!("benchmark input failed to encode");
        };

        group.bench_with_input(BenchmarkId::new("Huffman", size), &huf, |b, huf| {
            b.iter(|| huffman::decode(black_box(huf)))
        });
        group.bench_with_input(BenchmarkId::new("LZW", size), &lzw_container, |b, container| {
            b.iter(|| lzw::decode(black_box(container)))
        });
    }

    group.finish();
}

fn bench_compression_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_ratio");

    let test_cases = [
        ("repetitive", generate_repetitive_text(10_000)),
        ("source_code", generate_source_code(10_000)),
        ("noise", generate_noise(10_000)),
    ];

    for (name, data) in test_cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let huf = huffman::encode(black_box(data)).map_or(0, |c| c.len());
                let lzw_len = lzw::encode(black_box(data)).map_or(0, |c| c.len());
                (
                    huffzw::compression_ratio(data.len() as u64, huf as u64),
                    huffzw::compression_ratio(data.len() as u64, lzw_len as u64),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_compression_ratio);
criterion_main!(benches);
