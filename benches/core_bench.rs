use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rerail_editor::core::{
    BorderStyle, RailwayInfo, RenderOptions, ScreenPos, StationInfo, Viewport, WorldPos,
};
use rerail_editor::{MapEngine, MapSnapshot, RailwayMap};
use std::hint::black_box;

/// Gitter aus waagerechten Strecken mit Stationen an jedem zehnten Punkt.
fn build_synthetic_map(railways: usize, points_per_railway: usize) -> MapSnapshot {
    let mut map = RailwayMap::new();

    for r in 0..railways {
        let y = (r as i64) * 40;
        let points = (0..points_per_railway).map(|i| WorldPos::new((i as i64) * 25, y + (i as i64 % 3)));
        let id = map.add_railway(
            RailwayInfo {
                name: format!("Linie {r}"),
                ..RailwayInfo::default()
            },
            points,
        );
        for index in (0..points_per_railway).step_by(10) {
            map.add_station(
                id,
                index,
                StationInfo {
                    name: format!("Halt {r}/{index}"),
                    level: (index % 4) as u8,
                },
            )
            .expect("Punkt existiert");
        }
    }

    let mut previous = None;
    for i in 0..railways {
        let id = map.add_border_point(WorldPos::new(-100, (i as i64) * 40 + 20));
        if let Some(prev) = previous {
            map.link_border_points(prev, id, BorderStyle::ALL[i % 3])
                .expect("Grenzpunkte existieren");
        }
        previous = Some(id);
    }

    map.into_snapshot()
}

fn build_query_points(count: usize) -> Vec<ScreenPos> {
    (0..count)
        .map(|i| ScreenPos::new(((i * 37) % 800) as i32, ((i * 13) % 600) as i32))
        .collect()
}

fn viewport(zoom_level: usize) -> Viewport {
    Viewport::with_zoom_level(WorldPos::new(-200, -100), 800, 600, zoom_level)
        .expect("gültige Zoomstufe")
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");
    let query_points = build_query_points(1024);

    for &points in &[100usize, 2_000usize] {
        let map = build_synthetic_map(50, points);
        let viewport = viewport(1);
        let railway = map
            .railways_in_viewport(&viewport)
            .ids
            .first()
            .copied()
            .expect("mindestens eine Strecke sichtbar");

        group.bench_with_input(
            BenchmarkId::new("nearest_segment", points),
            &map,
            |b, map| {
                b.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|&&pos| {
                            map.find_nearest_segment(&viewport, railway, black_box(pos), 10)
                                .is_some()
                        })
                        .count();
                    black_box(hits)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_border_feature", points),
            &map,
            |b, map| {
                b.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|&&pos| {
                            map.find_nearest_border_feature(&viewport, black_box(pos), 10)
                                .is_some()
                        })
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let map = build_synthetic_map(200, 500);
    let options = RenderOptions {
        show_border_markers: true,
        ..RenderOptions::default()
    };

    for &zoom_level in &[0usize, 3, 6] {
        let viewport = viewport(zoom_level);
        group.bench_with_input(
            BenchmarkId::new("primitives", zoom_level),
            &map,
            |b, map| {
                b.iter(|| {
                    let primitives = map.render(black_box(&viewport), &options);
                    black_box(primitives.lines.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_hit_testing, bench_render);
criterion_main!(core_benches);
