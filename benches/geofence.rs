use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use perimetrum::{build_circle, build_corridor, build_polygon, parse_geofence, Coordinate};
use std::f64::consts::TAU;

fn generate_ring(vertices: usize) -> Vec<Coordinate> {
    let center = Coordinate::new(31.9, 54.4);
    let mut ring: Vec<Coordinate> = (0..vertices)
        .map(|i| {
            let angle = TAU * i as f64 / vertices as f64;
            Coordinate::new(
                center.longitude + 0.05 * angle.cos(),
                center.latitude + 0.05 * angle.sin(),
            )
        })
        .collect();
    ring.push(ring[0]);
    ring
}

fn generate_route(points: usize) -> Vec<Coordinate> {
    (0..points)
        .map(|i| {
            let along = i as f64 * 0.001;
            let wiggle = if i % 2 == 0 { 0.0003 } else { -0.0003 };
            Coordinate::new(31.8 + along, 54.4 + wiggle)
        })
        .collect()
}

fn generate_probes(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Coordinate::new(31.9 + 0.08 * (t * 0.7).sin(), 54.4 + 0.08 * (t * 1.3).cos())
        })
        .collect()
}

fn generate_polygon_description(vertices: usize) -> String {
    let pairs: Vec<String> = generate_ring(vertices)
        .iter()
        .map(|c| format!("{} {}", c.latitude, c.longitude))
        .collect();
    format!("POLYGON=({})", pairs.join(", "))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("circle", |b| {
        let center = Coordinate::new(31.9424, 54.26491);
        b.iter(|| build_circle(black_box(center), black_box(500.0)))
    });

    for vertices in [8, 64, 512] {
        let ring = generate_ring(vertices);
        group.throughput(Throughput::Elements(vertices as u64));
        group.bench_with_input(BenchmarkId::new("polygon", vertices), &ring, |b, ring| {
            b.iter(|| build_polygon(black_box(ring)))
        });
    }

    for points in [10, 100, 1000] {
        let route = generate_route(points);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::new("corridor", points), &route, |b, route| {
            b.iter(|| build_corridor(black_box(route), 100.0))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("circular", |b| {
        b.iter(|| parse_geofence(black_box("CIRCULAR=(54.26491 31.94240 500)")))
    });

    group.bench_function("route", |b| {
        b.iter(|| parse_geofence(black_box("ROUTE=(31.87 54.35, 31.87 54.34)")))
    });

    for vertices in [8, 64, 512] {
        let description = generate_polygon_description(vertices);
        group.throughput(Throughput::Elements(vertices as u64));
        group.bench_with_input(
            BenchmarkId::new("polygon", vertices),
            &description,
            |b, description| b.iter(|| parse_geofence(black_box(description))),
        );
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let probes = generate_probes(1000);

    let polygon = build_polygon(&generate_ring(64)).unwrap();
    let circle = build_circle(Coordinate::new(31.9, 54.4), 500.0).unwrap();
    let corridor = build_corridor(&generate_route(100), 100.0).unwrap();

    let regions = [
        ("polygon64", &polygon),
        ("circle", &circle),
        ("corridor100", &corridor),
    ];

    for (name, region) in regions {
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("probes", name), region, |b, region| {
            b.iter(|| {
                let mut inside = 0usize;
                for probe in &probes {
                    if region.contains(black_box(*probe)) {
                        inside += 1;
                    }
                }
                inside
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_parse, bench_contains);
criterion_main!(benches);
