use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uttt_bot::engines::engine_random::RandomEngine;
use uttt_bot::protocol::dispatcher::Dispatcher;

const SETTINGS: &[&str] = &[
    "settings timebank 10000",
    "settings time_per_move 500",
    "settings player_names player1,player2",
    "settings your_bot player1",
    "settings your_botid 1",
];

fn turn_lines() -> Vec<String> {
    let mut field = vec!["."; 81];
    field[0] = "1";
    field[40] = "2";
    vec![
        "update game round 2".to_owned(),
        "update game move 3".to_owned(),
        format!("update game field {}", field.join(",")),
        "update game macroboard -1,-1,-1,-1,-1,-1,-1,-1,-1".to_owned(),
        "action move 9500".to_owned(),
    ]
}

fn bench_dispatch_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let lines = turn_lines();
    let mut dispatcher = Dispatcher::new(Box::new(RandomEngine::with_seed(17)));
    let mut sink = Vec::<u8>::with_capacity(64);
    for line in SETTINGS {
        dispatcher
            .handle_line(line, &mut sink)
            .expect("settings should dispatch");
    }

    group.bench_function("full_turn", |b| {
        b.iter(|| {
            sink.clear();
            for line in &lines {
                dispatcher
                    .handle_line(black_box(line), &mut sink)
                    .expect("turn should dispatch");
            }
            assert!(sink.starts_with(b"place_move "));
            black_box(sink.len())
        });
    });

    group.finish();
}

criterion_group!(dispatch_benches, bench_dispatch_turn);
criterion_main!(dispatch_benches);
