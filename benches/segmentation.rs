use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tamil_tokenizer::{get_statistics, Method, Tokenizer};

const SAMPLE: &str = "வணக்கம். நீங்கள் எப்படி இருக்கிறீர்கள்? தமிழ் மொழி அழகான மொழி. \
க்ஷேத்ரம் ஸ்ரீ அஃது ௧௨௩ ஆண்டு!";

fn bench_methods(c: &mut Criterion) {
    let text = SAMPLE.repeat(50);
    let tokenizer = Tokenizer::new();

    for method in Method::ALL {
        c.bench_function(&format!("tokenize_{}", method), |b| {
            b.iter(|| tokenizer.tokenize(black_box(&text), method).unwrap())
        });
    }

    c.bench_function("get_statistics", |b| {
        b.iter(|| get_statistics(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_methods);
criterion_main!(benches);
