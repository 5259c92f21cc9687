use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use shotmap::events::{MatchTeams, filter_shots, parse_events_json};
use shotmap::figure::{FigureLayout, draw_figure};
use shotmap::geometry::PitchGeometry;
use shotmap::maps::build_shot_maps;
use shotmap::raster::RasterSurface;
use shotmap::style::ShotStyle;

const EVENTS_JSON: &str = include_str!("../tests/fixtures/match_events.json");

fn bench_events_parse(c: &mut Criterion) {
    c.bench_function("events_parse", |b| {
        b.iter(|| {
            let events = parse_events_json(black_box(EVENTS_JSON)).unwrap();
            black_box(events.len());
        })
    });
}

fn bench_shot_maps_build(c: &mut Criterion) {
    let events = parse_events_json(EVENTS_JSON).unwrap();
    let teams = MatchTeams::resolve(&events, None).unwrap();
    let shots = filter_shots(&events).unwrap();
    let style = ShotStyle::default();
    c.bench_function("shot_maps_build", |b| {
        b.iter(|| {
            let figures = build_shot_maps(
                black_box(&shots),
                &teams,
                PitchGeometry::STATSBOMB,
                &style,
            );
            black_box(figures.len());
        })
    });
}

fn bench_raster_draw(c: &mut Criterion) {
    let events = parse_events_json(EVENTS_JSON).unwrap();
    let teams = MatchTeams::resolve(&events, None).unwrap();
    let shots = filter_shots(&events).unwrap();
    let style = ShotStyle::default();
    let figures = build_shot_maps(&shots, &teams, PitchGeometry::STATSBOMB, &style);
    let full = &figures[0];
    let frame = FigureLayout::default().frame(&full.view);
    c.bench_function("raster_draw_full_map", |b| {
        b.iter(|| {
            let mut surface = RasterSurface::new(frame.width, frame.height, None);
            draw_figure(black_box(full), &style, &frame, &mut surface);
            black_box(surface.into_image().len());
        })
    });
}

criterion_group!(benches, bench_events_parse, bench_shot_maps_build, bench_raster_draw);
criterion_main!(benches);
