//! Query compilation and matching throughput benchmarks
//!
//! Measures:
//! - Compilation of flat and nested queries
//! - Batch evaluation against documents of growing width, where the
//!   backtracking search has to visit every sibling before matching the last
//!
//! Run benchmarks: `cargo bench --bench match_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docsieve::{BatchEvaluator, XmlDocument, compile};
use std::hint::black_box;

const QUERIES: [&str; 5] = [
    "/feed/entry/title",
    r#"/feed/entry[@id="last"]/title[contains(text(),"Entry")]"#,
    r#"/feed/entry[title[text()="Entry 0"]][link]"#,
    r#"/feed/entry[link[@rel="alternate"]]/summary"#,
    "/feed/missing",
];

/// Generate a feed with `count` entries, the last one tagged `id="last"`
fn generate_feed(count: usize) -> String {
    let mut xml = String::from("<feed>");
    for i in 0..count {
        let id = if i + 1 == count {
            "last".to_string()
        } else {
            i.to_string()
        };
        xml.push_str(&format!(
            r#"<entry id="{id}"><title>Entry {i}</title><link rel="alternate" href="/e/{i}"/></entry>"#
        ));
    }
    xml.push_str("</feed>");
    xml
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for (name, query) in [
        ("flat", "/a/b/c/d/e"),
        ("tests", r#"/a[@x="1"][text()="y"]/b[contains(text(),"z")]"#),
        ("nested", r#"/a/b[c[d[e[text()="deep"]]]][f]/g"#),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |b, query| {
            b.iter(|| compile(black_box(query)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_width");
    for count in [10, 100, 1000] {
        let xml = generate_feed(count);
        let doc = XmlDocument::parse(&xml).expect("benchmark feed is well-formed");
        let mut evaluator = BatchEvaluator::new();
        evaluator.set_queries(QUERIES);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| evaluator.evaluate(black_box(doc.root_node())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_evaluate);
criterion_main!(benches);
