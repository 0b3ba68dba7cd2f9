use criterion::{black_box, criterion_group, criterion_main, Criterion};

use isolation_minimax::{
    alpha_beta::{AgentOptions, MinimaxAgent, MoveOrdering},
    heuristic::Heuristic,
};
use types::{
    board::{Action, Isolation, KnightMove},
    types::{PlayerId, Position, SimulableGame},
};

fn midgame() -> Isolation {
    Isolation::default()
        .result(Action::Place(Position::new(4, 4)))
        .result(Action::Place(Position::new(6, 3)))
        .result(Action::Jump(KnightMove::SSE))
        .result(Action::Jump(KnightMove::NNW))
}

fn create_agent(
    heuristic: Heuristic,
    alpha_beta_prune: bool,
    move_ordering: MoveOrdering,
) -> MinimaxAgent {
    MinimaxAgent::new(
        PlayerId::FIRST,
        AgentOptions {
            heuristic,
            alpha_beta_prune,
            move_ordering,
            ..Default::default()
        },
    )
    .unwrap()
}

fn bench_minimax_to_depth(c: &mut Criterion, depth: usize) {
    let game = midgame();

    for heuristic in Heuristic::ALL {
        let mut group = c.benchmark_group(format!("{heuristic}: Depth {depth}"));

        group.bench_function("minimax", |b| {
            let agent = create_agent(heuristic, false, MoveOrdering::InOrder);
            b.iter(|| agent.single_minimax(black_box(&game), depth))
        });

        group.bench_function("alpha-beta", |b| {
            let agent = create_agent(heuristic, true, MoveOrdering::InOrder);
            b.iter(|| agent.single_minimax(black_box(&game), depth))
        });

        group.bench_function("alpha-beta iterative deepened best first", |b| {
            let agent = create_agent(heuristic, true, MoveOrdering::BestFirst);
            b.iter(|| agent.deepened_minimax(black_box(&game), &mut Vec::<Action>::new()))
        });

        group.finish();
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_minimax_to_depth(c, 4);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
