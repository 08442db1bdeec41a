use criterion::{black_box, criterion_group, criterion_main, Criterion};
use product_catalog::core::product::{product_entity::Product, product_rules::validate};
use rust_decimal::Decimal;

fn validate_benchmark(c: &mut Criterion) {
    let product = Product::new("Widget", "", Decimal::new(1000, 2), 5);
    c.bench_function("validate", |b| {
        b.iter(|| validate(black_box(Some(product.clone()))))
    });
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
