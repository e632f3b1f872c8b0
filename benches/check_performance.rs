//! Performance benchmarks for textwatch.
//!
//! The detection check runs on every interaction signal and, with the timer
//! enabled, ten times a second. These benchmarks keep an eye on its two
//! ingredients: the lock-free field read and the notification URL build.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textwatch::dom::{InMemoryField, TextField};
use textwatch::notify::CallbackUrl;

fn bench_field_read(c: &mut Criterion) {
    let field = InMemoryField::new("some representative field content");
    c.bench_function("field_value_read", |b| b.iter(|| black_box(field.value())));
}

fn bench_unchanged_check(c: &mut Criterion) {
    let field = InMemoryField::new("unchanged value");
    let last_observed = field.value();
    c.bench_function("unchanged_check", |b| {
        b.iter(|| black_box(field.value() == last_observed))
    });
}

fn bench_url_build(c: &mut Criterion) {
    let callback = CallbackUrl::new("/notify?page=3");
    c.bench_function("callback_url_build", |b| {
        b.iter(|| black_box(callback.with_value("a value with spaces & symbols")))
    });
}

criterion_group!(
    benches,
    bench_field_read,
    bench_unchanged_check,
    bench_url_build
);
criterion_main!(benches);
