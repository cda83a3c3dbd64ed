use criterion::{black_box, criterion_group, criterion_main, Criterion};

use recall_core::config::RecallConfig;
use recall_core::traits::IRetriever;
use recall_core::Document;
use recall_retrieval::providers::FixtureProvider;
use recall_retrieval::RetrievalEngine;

fn bench_retrieve(c: &mut Criterion) {
    let engine = RetrievalEngine::new(&RecallConfig::default());
    let provider = FixtureProvider::reference_set();

    c.bench_function("retrieve_three_candidates", |b| {
        b.iter(|| {
            engine
                .retrieve(black_box("What is Swift?"), &provider)
                .unwrap()
        })
    });
}

fn bench_rescore(c: &mut Criterion) {
    let engine = RetrievalEngine::new(&RecallConfig::default());
    let dims = engine.embeddings().dimensions();

    // Seed a sizeable cache directly; rescoring cost is what we measure.
    let docs: Vec<Document> = (0..1_000)
        .map(|i| {
            let embedding: Vec<f32> = (0..dims).map(|d| ((i + d) % 97) as f32 / 97.0).collect();
            Document::new(format!("passage {i}"), embedding, "bench")
        })
        .collect();
    engine.restore(docs);

    let query = engine.embeddings().embed_text("ranking throughput").unwrap();

    c.bench_function("rescore_1k_documents", |b| {
        b.iter(|| engine.retrieve_from_cache(black_box(&query), 5))
    });
}

criterion_group!(benches, bench_retrieve, bench_rescore);
criterion_main!(benches);
