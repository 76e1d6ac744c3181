// Criterion comparison of the from-scratch containers against their std
// counterparts over the same workloads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linear_collections::{Deque, Stack};
use std::collections::VecDeque;

fn deque_mixed_ends(n: usize) -> usize {
    let mut deque = Deque::new();
    for i in 0..n {
        if i % 2 == 0 {
            deque.add_last(i);
        } else {
            deque.add_first(i);
        }
    }
    let mut drained = 0;
    while deque.remove_first().is_ok() {
        drained += 1;
    }
    drained
}

fn vecdeque_mixed_ends(n: usize) -> usize {
    let mut deque = VecDeque::new();
    for i in 0..n {
        if i % 2 == 0 {
            deque.push_back(i);
        } else {
            deque.push_front(i);
        }
    }
    let mut drained = 0;
    while deque.pop_front().is_some() {
        drained += 1;
    }
    drained
}

fn stack_push_pop(n: usize) -> usize {
    let mut stack = Stack::new();
    for i in 0..n {
        stack.push(i);
    }
    let mut drained = 0;
    while stack.pop().is_ok() {
        drained += 1;
    }
    drained
}

fn vec_push_pop(n: usize) -> usize {
    let mut stack = Vec::new();
    for i in 0..n {
        stack.push(i);
    }
    let mut drained = 0;
    while stack.pop().is_some() {
        drained += 1;
    }
    drained
}

fn benchmark_deque(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_mixed_ends");

    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("from_scratch", n), &n, |b, &n| {
            b.iter(|| deque_mixed_ends(black_box(n)))
        });

        group.bench_with_input(BenchmarkId::new("std_vecdeque", n), &n, |b, &n| {
            b.iter(|| vecdeque_mixed_ends(black_box(n)))
        });
    }

    group.finish();
}

fn benchmark_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_push_pop");

    for n in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("from_scratch", n), &n, |b, &n| {
            b.iter(|| stack_push_pop(black_box(n)))
        });

        group.bench_with_input(BenchmarkId::new("std_vec", n), &n, |b, &n| {
            b.iter(|| vec_push_pop(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_deque, benchmark_stack);
criterion_main!(benches);
