//! Aggregation throughput benchmark
//!
//! The consensus screens recompute on every rating keystroke, so the
//! recompute path has to stay cheap even for wide panels.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skillgauge_assessment::{aggregator, Assessment, AssessmentKind, RaterScore};

fn panel(competencies: usize, raters: usize) -> Assessment {
    let ids: Vec<String> = (0..competencies).map(|c| format!("competency-{c}")).collect();
    let mut assessment = Assessment::new("emp:bench", AssessmentKind::Panel)
        .with_competencies(ids.clone());

    for id in &ids {
        for r in 0..raters {
            let score = 1.0 + (r % 5) as f64;
            assessment.upsert_score(RaterScore::new(format!("rater:{r}"), id.clone(), score));
        }
    }
    assessment
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for (competencies, raters) in [(5, 3), (20, 5), (50, 10)] {
        let assessment = panel(competencies, raters);
        group.bench_function(format!("{competencies}x{raters}"), |b| {
            b.iter_batched(
                || assessment.clone(),
                |mut a| black_box(aggregator::recompute(&mut a)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_consensus_single(c: &mut Criterion) {
    let scores: Vec<RaterScore> = (0..10)
        .map(|r| RaterScore::new(format!("rater:{r}"), "tech", 1.0 + (r % 5) as f64))
        .collect();

    c.bench_function("consensus_for_competency/10_raters", |b| {
        b.iter(|| {
            black_box(aggregator::consensus_for_competency(
                "tech",
                black_box(&scores),
                "",
            ))
        })
    });
}

criterion_group!(benches, bench_recompute, bench_consensus_single);
criterion_main!(benches);
