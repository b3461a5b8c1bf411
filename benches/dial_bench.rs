//! Rule throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safe_dial::*;

/// Deterministic pseudo-random puzzle input with a mix of short and multi-lap moves.
fn generated_input(lines: usize) -> String {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut out = String::with_capacity(lines * 5);
    for _ in 0..lines {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let direction = if state & 1 == 0 { 'L' } else { 'R' };
        out.push(direction);
        out.push_str(&(state % 1_000).to_string());
        out.push('\n');
    }
    out
}

fn benchmark_rules(c: &mut Criterion) {
    let input = generated_input(4_096);
    let moves = parse_moves(&input).expect("generated input parses");
    let config = DialConfig::default();

    let mut group = c.benchmark_group("dial");
    group.bench_function("parse", |b| b.iter(|| parse_moves(black_box(&input))));
    group.bench_function("part 1", |b| b.iter(|| part1(black_box(&input))));
    group.bench_function("part 2", |b| b.iter(|| part2(black_box(&input))));
    group.bench_function("closed form", |b| {
        b.iter(|| simulate(black_box(&moves), &config))
    });
    group.bench_function("click sweep", |b| {
        b.iter(|| simulate_stepwise(black_box(&moves), &config))
    });
    group.finish();
}

criterion_group!(benches, benchmark_rules);
criterion_main!(benches);
