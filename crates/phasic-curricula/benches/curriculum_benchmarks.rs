//! Curriculum scheduling benchmarks
//!
//! Hot paths:
//! 1. StoppingCondition::evaluate() - checked on every completed episode
//! 2. SequentialMetaCurriculum::sample() - decode/encode recoding per task
//! 3. SequentialCurriculum::sample() - cursor walk per requested task
//!
//! Parsing only happens at construction but is benchmarked to keep the
//! mini-language honest about startup cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use phasic_core::{Curriculum, Task, TaskSpace};
use phasic_curricula::{
    Phase, PhaseMetrics, SequentialCurriculum, SequentialMetaCurriculum, StoppingCondition,
};

fn task_list(n: usize) -> Vec<Task> {
    (0..n).map(|i| json!({"task": i})).collect()
}

fn bench_condition_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_parse");
    for expr in [
        "steps>=100",
        "steps>=100&episodes>=5",
        "steps>=100|episodes>=5&episode_return>=0.9",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(expr), expr, |b, expr| {
            b.iter(|| StoppingCondition::parse(black_box(expr)).unwrap());
        });
    }
    group.finish();
}

fn bench_condition_evaluate(c: &mut Criterion) {
    let condition =
        StoppingCondition::parse("steps>=100000|episodes>=5000&episode_return>=0.9").unwrap();
    let mut metrics = PhaseMetrics::default();
    for i in 0..1000 {
        metrics.record(i as f64 / 1000.0, 20);
    }

    c.bench_function("condition_evaluate", |b| {
        b.iter(|| black_box(&condition).evaluate(black_box(&metrics)));
    });
}

fn bench_sequencer_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer_sample");
    for size in [16usize, 256] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut curriculum =
                SequentialCurriculum::new(task_list(size), None, true).unwrap();
            b.iter(|| curriculum.sample(black_box(size)).unwrap());
        });
    }
    group.finish();
}

fn bench_meta_sample_recode(c: &mut Criterion) {
    let tasks = task_list(64);
    let mut reversed = tasks.clone();
    reversed.reverse();

    let phase = Phase::Curriculum(Box::new(
        SequentialCurriculum::new(reversed, None, true).unwrap(),
    ));
    let mut meta =
        SequentialMetaCurriculum::new(vec![phase], vec![], TaskSpace::discrete(tasks)).unwrap();

    c.bench_function("meta_sample_recode_64", |b| {
        b.iter(|| meta.sample(black_box(64)).unwrap());
    });
}

fn bench_update_on_episode(c: &mut Criterion) {
    let tasks = task_list(4);
    let phase_a = Phase::Space(TaskSpace::discrete(tasks.clone()));
    let phase_b = Phase::Space(TaskSpace::discrete(tasks.clone()));
    let mut meta = SequentialMetaCurriculum::new(
        vec![phase_a, phase_b],
        vec![StoppingCondition::parse("episodes>=1000000000").unwrap()],
        TaskSpace::discrete(tasks.clone()),
    )
    .unwrap();

    c.bench_function("update_on_episode", |b| {
        b.iter(|| {
            meta.update_on_episode(black_box(0.5), black_box(20), &tasks[0], Some(0))
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_condition_parse,
    bench_condition_evaluate,
    bench_sequencer_sample,
    bench_meta_sample_recode,
    bench_update_on_episode
);
criterion_main!(benches);
