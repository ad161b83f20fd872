use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use greinir_engine::parse_document;

fn typical_post() -> String {
    let mut post = String::new();
    for section in 0..40 {
        post.push_str(&format!("## Kafli {section}\n"));
        post.push_str("Málsgrein með **feitletrun**, *skáletrun* og [tengli](/verd).\n");
        post.push_str("Önnur lína sömu málsgreinar.\n\n");
        post.push_str("💡 **Pro tip:** Stutt ábending.\n\n");
        post.push_str("- Fyrsti liður\n- Annar liður\n- Þriðji liður\n\n");
        post.push_str("```\nfn daemi() { println!(\"halló\"); }\n```\n\n");
    }
    post
}

fn bench_parse_document(c: &mut Criterion) {
    let post = typical_post();
    c.bench_function("parse_document/typical_post", |b| {
        b.iter(|| parse_document(black_box(&post)))
    });
}

criterion_group!(benches, bench_parse_document);
criterion_main!(benches);
