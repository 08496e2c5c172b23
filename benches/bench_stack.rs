use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sentinel_stack::Stack;
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stack");

    for size in [100usize, 10_000] {
        let id = BenchmarkId::new("push_then_pop", size);
        group.bench_with_input(id, &size, |b, &n| {
            b.iter(|| {
                let mut stack = Stack::new();
                for i in 0..n {
                    stack.push(black_box(i));
                }
                while let Ok(value) = stack.try_pop() {
                    black_box(value);
                }
            })
        });

        let filled: Stack<usize> = (0..size).collect();
        let id = BenchmarkId::new("to_vec", size);
        group.bench_with_input(id, &filled, |b, stack| {
            b.iter(|| black_box(stack.to_vec()))
        });

        let id = BenchmarkId::new("vec_baseline", size);
        group.bench_with_input(id, &size, |b, &n| {
            b.iter(|| {
                let mut stack = Vec::new();
                for i in 0..n {
                    stack.push(black_box(i));
                }
                while let Some(value) = stack.pop() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
