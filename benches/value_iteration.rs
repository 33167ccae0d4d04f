use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdp_value_iteration::{mdp_value_iteration, TableMdp};

/// Chain of `n` states where each state moves right for free and the last
/// hop pays a terminal reward.
fn chain(n: usize) -> TableMdp {
    let mut transitions = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let r = if i + 1 == n - 1 { 10.0 } else { 0.0 };
        transitions.push(vec![(i + 1, r, i + 1 == n - 1)]);
    }
    transitions.push(vec![(n - 1, 0.0, true)]);
    TableMdp::new(transitions).unwrap()
}

fn bench_tabular_value_iteration(c: &mut Criterion) {
    let mdp = chain(1000);
    c.bench_function("tabular_chain_1000", |b| {
        b.iter(|| mdp_value_iteration(black_box(&mdp), 2000, 0.99).unwrap())
    });
}

criterion_group!(benches, bench_tabular_value_iteration);
criterion_main!(benches);
