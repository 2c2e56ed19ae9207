//! Object-literal extraction benchmarks.
//!
//! Measures ESTree import, the extraction pass and printing over generated
//! programs of nested object-literal declarations.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flatlit_ast::estree::from_estree_str;
use flatlit_transforms::{FlattenOptions, NodePrinter, ObjectExtractionPass};
use serde_json::{Value, json};

/// `{ p0: { p0: ..., p1: ... }, p1: ... }` with `width` properties per level.
fn nested_object(width: usize, depth: usize) -> Value {
    let properties: Vec<Value> = (0..width)
        .map(|i| {
            let value = if depth == 0 {
                json!({ "type": "Literal", "value": i as f64 })
            } else {
                nested_object(width, depth - 1)
            };
            json!({
                "type": "Property",
                "key": { "type": "Identifier", "name": format!("p{i}") },
                "value": value,
                "computed": false,
                "shorthand": false,
                "method": false,
                "kind": "init"
            })
        })
        .collect();
    json!({ "type": "ObjectExpression", "properties": properties })
}

fn generate_program(declarations: usize, width: usize, depth: usize) -> String {
    let body: Vec<Value> = (0..declarations)
        .map(|i| {
            json!({
                "type": "VariableDeclaration",
                "kind": "var",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": format!("v{i}") },
                    "init": nested_object(width, depth)
                }]
            })
        })
        .collect();
    json!({ "type": "Program", "body": body }).to_string()
}

fn bench_extract_flat(c: &mut Criterion) {
    let source = generate_program(20, 8, 0);
    let options = FlattenOptions::default();

    c.bench_function("extract_flat", |b| {
        b.iter(|| {
            let Ok((mut arena, root)) = from_estree_str(&source) else {
                return;
            };
            black_box(ObjectExtractionPass::new(&mut arena, &options).run(root));
        })
    });
}

fn bench_extract_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_nested");
    let options = FlattenOptions::default();

    for (width, depth) in [(2, 4), (4, 3), (8, 2)] {
        let source = generate_program(10, width, depth);
        let label = format!("{width}w_{depth}d");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("pass", &label), &source, |b, source| {
            b.iter(|| {
                let Ok((mut arena, root)) = from_estree_str(source) else {
                    return;
                };
                black_box(ObjectExtractionPass::new(&mut arena, &options).run(root));
            })
        });
    }

    group.finish();
}

fn bench_extract_and_print(c: &mut Criterion) {
    let source = generate_program(10, 4, 3);
    let options = FlattenOptions::default();

    c.bench_function("extract_and_print", |b| {
        b.iter(|| {
            let Ok((mut arena, root)) = from_estree_str(&source) else {
                return;
            };
            ObjectExtractionPass::new(&mut arena, &options).run(root);
            black_box(NodePrinter::emit_to_string(&arena, root))
        })
    });
}

criterion_group!(
    benches,
    bench_extract_flat,
    bench_extract_nested,
    bench_extract_and_print
);
criterion_main!(benches);
