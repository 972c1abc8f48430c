use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use wordpass::{
    assembly::PassphraseGenerator,
    config::GenerationOptions,
    random::PassphraseRng,
    wordlist::{WordFilter, WordList},
    CaseMethod,
};

const BUNDLED: &str = include_str!("../static/common-en");

fn bundled_wordlist() -> WordList {
    WordFilter::new(3, 9, ".")
        .unwrap()
        .filter_reader(Cursor::new(BUNDLED))
        .unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let filter = WordFilter::new(4, 8, "[a-z]").unwrap();
    c.bench_function("filter_bundled_list", |b| {
        b.iter(|| filter.filter_reader(Cursor::new(black_box(BUNDLED))).unwrap())
    });
}

fn bench_generate(c: &mut Criterion) {
    let wordlist = bundled_wordlist();
    let mut rng = PassphraseRng::from_seed([1u8; 32]);

    let plain = GenerationOptions {
        case: CaseMethod::Random,
        ..GenerationOptions::words(6)
    };
    let generator = PassphraseGenerator::new(&wordlist, &plain).unwrap();
    c.bench_function("generate_six_words", |b| {
        b.iter(|| generator.generate(&mut rng).unwrap())
    });

    let acrostic = GenerationOptions::acrostic("horse");
    let generator = PassphraseGenerator::new(&wordlist, &acrostic).unwrap();
    c.bench_function("generate_acrostic", |b| {
        b.iter(|| generator.generate(&mut rng).unwrap())
    });
}

criterion_group!(benches, bench_filter, bench_generate);
criterion_main!(benches);
