use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strzip::{FILE_PATH, WORDS_EN};

const SENTENCE: &[u8] =
    b"The encoder walks the input once, replaces predicted letter pairs with \
      packed table references, and leaves everything else alone.";

fn benchmark_compress_word(c: &mut Criterion) {
    c.bench_function("compress 4-byte word", |b| {
        b.iter(|| strzip::compress(black_box(b"test")));
    });
}

fn benchmark_compress_sentence(c: &mut Criterion) {
    c.bench_function("compress 129-byte sentence", |b| {
        b.iter(|| strzip::compress(black_box(SENTENCE)));
    });
}

fn benchmark_decompress_sentence(c: &mut Criterion) {
    let packed = strzip::compress(SENTENCE);
    c.bench_function("decompress 129-byte sentence", |b| {
        b.iter(|| strzip::decompress(black_box(&packed)).unwrap());
    });
}

fn benchmark_proposed_framing(c: &mut Criterion) {
    let input = "Übergrößenträger".as_bytes();
    c.bench_function("proposed compress mixed utf-8", |b| {
        b.iter(|| strzip::proposed_compress(black_box(input)));
    });

    let packed = strzip::proposed_compress(input);
    c.bench_function("proposed decompress mixed utf-8", |b| {
        b.iter(|| strzip::proposed_decompress(black_box(&packed)).unwrap());
    });
}

fn benchmark_file_path_model(c: &mut Criterion) {
    let path = b"/home/alice/projects/codec/src/main.rs";
    c.bench_function("compress path with file_path model", |b| {
        b.iter(|| FILE_PATH.compress(black_box(path)));
    });
    c.bench_function("compress path with words_en model", |b| {
        b.iter(|| WORDS_EN.compress(black_box(path)));
    });
}

criterion_group!(
    benches,
    benchmark_compress_word,
    benchmark_compress_sentence,
    benchmark_decompress_sentence,
    benchmark_proposed_framing,
    benchmark_file_path_model
);
criterion_main!(benches);
