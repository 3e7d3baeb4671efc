//! Benchmarks for the flat slider bearing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flat_slider::prelude::*;

fn create_bearing(domain: &Domain) -> FlatSlider {
    let friction = VelDependent::new(0.06, 0.10, 20.0).unwrap();
    let axial = ElasticNoTension::new(2.0e9);
    let rotation = Elastic::new(1.0e4);
    let config = SliderConfig::new(0.001).with_x_axis([0.0, 0.0, 1.0]);

    let mut bearing = FlatSlider::new(
        1,
        [1, 2],
        &friction,
        [&axial, &rotation, &rotation, &rotation],
        config,
    )
    .unwrap();
    bearing.set_domain(domain).unwrap();
    bearing
}

fn create_domain() -> Domain {
    let mut domain = Domain::new();
    domain.add_node(1, Node::new(0.0, 0.0, 0.0)).unwrap();
    domain.add_node(2, Node::new(0.0, 0.0, 0.2)).unwrap();
    domain
}

fn benchmark_elastic_update(c: &mut Criterion) {
    let mut domain = create_domain();
    let mut bearing = create_bearing(&domain);
    domain
        .set_trial_response(2, [1.0e-4, 0.0, -5.0e-4, 0.0, 0.0, 0.0], [0.01; 6])
        .unwrap();

    c.bench_function("update_elastic", |b| {
        b.iter(|| {
            bearing.update(black_box(&domain)).unwrap();
            black_box(bearing.basic_force());
        })
    });
}

fn benchmark_sliding_update(c: &mut Criterion) {
    let mut domain = create_domain();
    let mut bearing = create_bearing(&domain);
    domain
        .set_trial_response(
            2,
            [0.03, 0.02, -5.0e-4, 0.001, -0.002, 0.0],
            [0.4, 0.1, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();

    c.bench_function("update_sliding", |b| {
        b.iter(|| {
            bearing.update(black_box(&domain)).unwrap();
            black_box(bearing.basic_force());
        })
    });
}

fn benchmark_assembly(c: &mut Criterion) {
    let mut domain = create_domain();
    let mut bearing = create_bearing(&domain);
    domain
        .set_trial_response(2, [0.03, 0.0, -5.0e-4, 0.0, 0.0, 0.0], [0.4; 6])
        .unwrap();
    bearing.update(&domain).unwrap();

    c.bench_function("tangent_stiffness_and_force", |b| {
        b.iter(|| {
            black_box(bearing.tangent_stiffness());
            black_box(bearing.resisting_force());
        })
    });
}

fn benchmark_cyclic_history(c: &mut Criterion) {
    c.bench_function("cyclic_history_200_steps", |b| {
        b.iter(|| {
            let mut domain = create_domain();
            let mut bearing = create_bearing(&domain);
            for step in 0..200 {
                let ux = 0.05 * (step as f64 * 0.05).sin();
                domain
                    .set_trial_response(2, [ux, 0.0, -5.0e-4, 0.0, 0.0, 0.0], [0.1; 6])
                    .unwrap();
                bearing.update(&domain).unwrap();
                bearing.commit().unwrap();
                domain.commit();
            }
            black_box(&bearing);
        })
    });
}

criterion_group!(
    benches,
    benchmark_elastic_update,
    benchmark_sliding_update,
    benchmark_assembly,
    benchmark_cyclic_history,
);

criterion_main!(benches);
