use criterion::{Criterion, criterion_group, criterion_main};
use glam::IVec2;
use polyburst_core::{ParticleField, RecordingRenderer};
use rand::{SeedableRng, rngs::StdRng};

fn create_field(bursts: usize) -> (ParticleField, RecordingRenderer) {
    let renderer = RecordingRenderer::new(1920, 1080);
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = ParticleField::default();

    for i in 0..bursts {
        let click = IVec2::new((i * 37 % 1920) as i32, (i * 53 % 1080) as i32);
        field.burst(&renderer, click, &mut rng).unwrap();
    }

    (field, renderer)
}

fn bench_update(c: &mut Criterion) {
    let (field, _) = create_field(40);

    c.bench_function("field_update_200", |b| {
        b.iter_batched(
            || field.clone(),
            |mut field| field.update(1.0 / 60.0),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_draw(c: &mut Criterion) {
    let (field, mut renderer) = create_field(40);

    c.bench_function("field_draw_200", |b| {
        b.iter(|| {
            renderer.clear();
            field.draw(&mut renderer);
        })
    });
}

criterion_group!(benches, bench_update, bench_draw);
criterion_main!(benches);
