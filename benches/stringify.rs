use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use seqtools::{stringify, to_string, value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Order {
    order_id: u32,
    customer: User,
    notes: Option<String>,
    item_ids: Vec<u32>,
}

fn sample_user(id: u32) -> User {
    User {
        id,
        name: format!("user-{id}"),
        email: format!("user{id}@example.com"),
        active: id % 2 == 0,
    }
}

fn sample_order(id: u32) -> Order {
    Order {
        order_id: id,
        customer: sample_user(id),
        notes: None,
        item_ids: vec![id, id + 1, id + 2],
    }
}

fn benchmark_flat_record(c: &mut Criterion) {
    let user = sample_user(123);

    c.bench_function("to_string_flat_record", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_nested_record(c: &mut Criterion) {
    let order = sample_order(42);

    c.bench_function("to_string_nested_record", |b| {
        b.iter(|| to_string(black_box(&order)))
    });
}

fn benchmark_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify_sequence");
    for size in [10usize, 100, 1000] {
        let orders: Vec<Order> = (0..size as u32).map(sample_order).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| stringify(black_box(Some(orders.clone()))));
        });
    }
    group.finish();
}

fn benchmark_dynamic_value(c: &mut Criterion) {
    let record = value!({
        "name": "Alice",
        "age": 30,
        "tags": ["admin", "user", "ops"],
        "children": [{ "name": "Kim", "age": 9 }, { "name": "Lee", "age": 7 }]
    });

    c.bench_function("to_string_dynamic_value", |b| {
        b.iter(|| to_string(black_box(&record)))
    });
}

criterion_group!(
    benches,
    benchmark_flat_record,
    benchmark_nested_record,
    benchmark_sequences,
    benchmark_dynamic_value
);
criterion_main!(benches);
