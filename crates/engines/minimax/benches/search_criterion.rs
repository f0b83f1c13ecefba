use criterion::{criterion_group, criterion_main, Criterion};

use cozy_adapter::CozyState;
use engine_core::{Engine, SearchLimits};
use minimax_engine::MinimaxEngine;

fn bench_fixed_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_startpos");
    for depth in [1u8, 2, 3] {
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| {
                let mut engine = MinimaxEngine::new();
                let mut state = CozyState::startpos();
                engine
                    .search(&mut state, SearchLimits::depth(depth))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed_depth);
criterion_main!(benches);
