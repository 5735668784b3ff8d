use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use nalgebra::Point3;
use tetiso::{
    ThreadPool,
    iso::{self, Settings, Strategy},
    mesh::TetMesh,
};

fn gyroid(n: usize) -> (TetMesh, Vec<f64>) {
    let mesh = TetMesh::grid(
        n,
        Point3::new(-3.0, -3.0, -3.0),
        Point3::new(3.0, 3.0, 3.0),
    );
    let field = mesh.sample(|p| {
        p.x.sin() * p.y.cos() + p.y.sin() * p.z.cos() + p.z.sin() * p.x.cos()
    });
    (mesh, field)
}

pub fn gyroid_strategies(c: &mut Criterion) {
    let (mesh, field) = &gyroid(48);

    let global = &ThreadPool::Global;
    let mut group = c.benchmark_group("speed vs strategy (gyroid, 48³)");
    for strategy in [Strategy::Simple, Strategy::Standard, Strategy::Fast] {
        let settings = Settings {
            value: 0.0,
            strategy,
            threads: Some(global),
        };
        group.bench_function(
            BenchmarkId::new("extract", strategy),
            move |b| {
                b.iter(|| {
                    black_box(iso::extract(mesh, field, &settings).unwrap())
                })
            },
        );
    }
}

pub fn gyroid_thread_sweep(c: &mut Criterion) {
    let (mesh, field) = &gyroid(64);

    let mut group = c.benchmark_group("speed vs threads (gyroid, 64³)");
    for threads in [1, 2, 4, 8] {
        let pool = &ThreadPool::from(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap(),
        );
        group.bench_function(BenchmarkId::new("fast", threads), move |b| {
            let settings = Settings {
                value: 0.0,
                strategy: Strategy::Fast,
                threads: Some(pool),
            };
            b.iter(|| black_box(iso::extract(mesh, field, &settings).unwrap()))
        });
    }
}

criterion_group!(benches, gyroid_strategies, gyroid_thread_sweep);
criterion_main!(benches);
