use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array1;

use percept::builders::NetworkBuilder;
use percept::data::{one_hot, LearningPair};
use percept::training::{CancellationToken, TrainingConfig, TrainingLoop};

fn map_bench(c: &mut Criterion) {
    let network = NetworkBuilder::new(64, 10).hidden_layers(&[128, 64]).seed(0).build().unwrap();
    let input = Array1::from_elem(64, 0.1_f32);

    c.bench_function("map_64_128_64_10", |b| {
        b.iter(|| black_box(network.map(black_box(input.view())).unwrap()))
    });
}

fn learn_bench(c: &mut Criterion) {
    let mut network =
        NetworkBuilder::new(64, 10).hidden_layers(&[128, 64]).seed(0).build().unwrap();
    let input = Array1::from_elem(64, 0.1_f32);
    let reference = one_hot(3, 10);

    c.bench_function("learn_64_128_64_10", |b| {
        b.iter(|| network.learn(black_box(input.view()), black_box(reference.view()), 0.1).unwrap())
    });
}

fn epoch_bench(c: &mut Criterion) {
    let pairs: Vec<LearningPair> = (0..100)
        .map(|i| LearningPair::new(Array1::from_elem(16, i as f32 / 100.0), one_hot(i % 4, 4)))
        .collect();

    c.bench_function("train_epoch_100_pairs", |b| {
        b.iter_batched(
            || {
                let network = NetworkBuilder::new(16, 4).hidden_layer(16).seed(1).build().unwrap();
                let trainer = TrainingLoop::new(TrainingConfig::new(1, 0.2).with_seed(2)).unwrap();
                (network, pairs.clone(), trainer)
            },
            |(mut network, mut pairs, mut trainer)| {
                trainer
                    .run(&mut network, &mut pairs, &CancellationToken::new(), |_| {})
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, map_bench, learn_bench, epoch_bench);
criterion_main!(benches);
