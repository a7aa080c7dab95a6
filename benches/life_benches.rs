use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toroidal_life::{community_sizes, count_communities, Grid, Life};

fn seeded_grid() -> Grid {
    let mut grid = Grid::new(256, 256).unwrap();
    grid.randomize(12345, 0.3);
    grid
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_256x256", |b| {
        let mut life = Life::from_grid(seeded_grid());
        b.iter(|| {
            life.step();
            black_box(life.grid().live_count())
        });
    });
}

fn bench_next_grid(c: &mut Criterion) {
    c.bench_function("next_grid_256x256", |b| {
        let life = Life::from_grid(seeded_grid());
        b.iter(|| black_box(life.next_grid()));
    });
}

fn bench_communities(c: &mut Criterion) {
    let grid = seeded_grid();
    c.bench_function("count_communities_256x256", |b| {
        b.iter(|| black_box(count_communities(&grid)));
    });
    c.bench_function("community_sizes_256x256", |b| {
        b.iter(|| black_box(community_sizes(&grid)));
    });
}

criterion_group!(benches, bench_step, bench_next_grid, bench_communities);
criterion_main!(benches);
