use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use campus_routing::prelude::*;

/// Describes a `size` x `size` street grid with a Building in every corner.
fn grid_description(size: usize) -> String {
    let mut description = String::new();
    let spacing = 0.0005;
    let name = |x: usize, y: usize| format!("i{}", y * size + x);

    for y in 0..size {
        for x in 0..size {
            description += &format!(
                "node, {}, {}, {}, intersection\n",
                name(x, y),
                42.29 + y as f64 * spacing,
                -71.31 + x as f64 * spacing,
            );
        }
    }
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size {
                description += &format!("edge, {}, {}\n", name(x, y), name(x + 1, y));
            }
            if y + 1 < size {
                description += &format!("edge, {}, {}\n", name(x, y), name(x, y + 1));
            }
        }
    }

    let corners = [
        ("South West", 0, 0),
        ("South East", size - 1, 0),
        ("North West", 0, size - 1),
        ("North East", size - 1, size - 1),
    ];
    for (building, x, y) in corners {
        description += &format!(
            "node, {}, {}, {}, building\n",
            building,
            42.29 + y as f64 * spacing - spacing / 4.0,
            -71.31 + x as f64 * spacing - spacing / 4.0,
        );
        description += &format!("edge, {}, {}\n", building, name(x, y));
    }
    description
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("Load RouteGraph");
    group.sample_size(10);

    init();

    for size in [16, 64] {
        let description = grid_description(size);
        let id = format!("Load grid, Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| RouteGraph::load(description.as_bytes(), RouteConfig::default()).unwrap())
        });
    }
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shortest Path");

    for size in [16, 64, 128] {
        let graph: RouteGraph = grid_description(size).parse().unwrap();

        let id = format!("Corner to corner, Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| graph.shortest_path("South West", "North East").unwrap())
        });

        let id = format!("Neighboring corners, Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| graph.shortest_path("South West", "South East").unwrap())
        });
    }
}

#[cfg(feature = "parallel")]
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let graph: RouteGraph = grid_description(64).parse().unwrap();
    let corners = ["South West", "South East", "North West", "North East"];
    let pairs: Vec<(&str, &str)> = corners
        .iter()
        .flat_map(|&a| corners.iter().map(move |&b| (a, b)))
        .collect();

    group.bench_function("All corner pairs, Parallel, Size: (64, 64)", |b| {
        b.iter(|| graph.shortest_paths(&pairs))
    });
    group.bench_function("All corner pairs, Single Threaded, Size: (64, 64)", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|(a, b)| graph.shortest_path(a, b))
                .collect::<Vec<_>>()
        })
    });
}

#[cfg(not(feature = "parallel"))]
fn bench_batch(_: &mut Criterion) {}

criterion_group!(benches, bench_load, bench_shortest_path, bench_batch);
criterion_main!(benches);
