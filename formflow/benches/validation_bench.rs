//! Benchmarks for schema validation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formflow::fields::FormData;
use formflow::validation::{validate, FieldSchema, ValidationSchema};

fn reset_schema() -> ValidationSchema {
    ValidationSchema::new()
        .field(FieldSchema::string("password").required("required").min_length(6, "too short"))
        .field(FieldSchema::string("password_confirmation").equals_field("password", "mismatch"))
}

fn wide_schema(fields: usize) -> (ValidationSchema, FormData) {
    let mut schema = ValidationSchema::new();
    let mut data = FormData::new();
    for i in 0..fields {
        let name = format!("field_{i}");
        schema = schema.field(
            FieldSchema::string(&name)
                .required("required")
                .max_length(64, "too long")
                .email("not an email"),
        );
        data.insert(name, format!("user{i}@example.com"));
    }
    (schema, data)
}

fn validation_benchmark(c: &mut Criterion) {
    let schema = reset_schema();
    let valid = FormData::new()
        .with("password", "abc123")
        .with("password_confirmation", "abc123");
    let invalid = FormData::new()
        .with("password", "")
        .with("password_confirmation", "different");

    c.bench_function("reset_valid", |b| {
        b.iter(|| validate(black_box(&schema), black_box(&valid)))
    });
    c.bench_function("reset_invalid", |b| {
        b.iter(|| validate(black_box(&schema), black_box(&invalid)))
    });

    let (schema, data) = wide_schema(50);
    c.bench_function("wide_50_fields", |b| {
        b.iter(|| validate(black_box(&schema), black_box(&data)))
    });
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
