//! Criterion benchmarks for the per-frame hot paths: pose advance,
//! anchor projection, atom picking, and the full orchestrator frame.
// `criterion_group!` expands to undocumented functions that cannot
// satisfy the workspace-wide `missing_docs` deny.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use helika::camera::Camera;
use helika::config::{HelixOptions, Options};
use helika::helix::lattice::HelixLattice;
use helika::helix::pose::{HelixPose, PoseDriver};
use helika::orchestrator::ScrollOrchestrator;
use helika::picking::{pick_atom, PickRay};
use helika::projection::{project_precise, Viewport};
use helika::sections::{Section, Sections};

fn portfolio_sections() -> Sections {
    let section = |id: &str, marker: f32| Section {
        id: id.to_owned(),
        title: id.to_owned(),
        marker,
        color: "#ECB365".to_owned(),
        summary: Some(format!("{id} summary")),
        items: Vec::new(),
    };
    Sections::new(vec![
        section("research", 0.1),
        section("startups", 0.3),
        section("vc", 0.5),
        section("hobbies", 0.7),
        section("projects", 0.9),
    ])
    .unwrap_or_default()
}

fn pose_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let mut driver = PoseDriver::new();
    let _ = c.bench_function("pose_advance", |b| {
        b.iter(|| {
            black_box(driver.advance(
                black_box(0.42),
                true,
                1.6,
                &options.helix,
                &options.motion,
            ))
        })
    });
}

fn projection_benchmark(c: &mut Criterion) {
    let camera = Camera {
        eye: Vec3::new(0.0, 0.0, 15.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy: 40.0,
        znear: 0.1,
        zfar: 200.0,
    };
    let view_proj = camera.build_matrix();
    let viewport = Viewport::new(1920.0, 1080.0);

    let _ = c.bench_function("anchor_projection", |b| {
        b.iter(|| {
            black_box(project_precise(
                black_box(Vec3::new(1.8, -10.0, 1.2)),
                &view_proj,
                viewport,
            ))
        })
    });
}

fn picking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("atom_picking");

    for count in [150_usize, 300, 600] {
        let helix = HelixOptions {
            pair_count: count,
            ..HelixOptions::default()
        };
        let lattice = HelixLattice::build(&helix);
        let pose = HelixPose {
            rotation_y: 1.2,
            position_y: 24.0,
        };
        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, 15.0),
            direction: Vec3::NEG_Z,
        };

        let _ = group.bench_function(format!("{count}_pairs"), |b| {
            b.iter(|| black_box(pick_atom(black_box(&ray), &lattice, pose)))
        });
    }
    group.finish();
}

fn frame_benchmark(c: &mut Criterion) {
    let Ok(mut orch) =
        ScrollOrchestrator::new(Options::default(), portfolio_sections())
    else {
        return;
    };
    orch.resize(1920.0, 1080.0);
    orch.finish_loading();
    orch.begin_explore();

    let mut elapsed = 0.0_f32;
    let _ = c.bench_function("full_frame_advance", |b| {
        b.iter(|| {
            elapsed += 0.016;
            orch.set_scroll_progress(black_box((elapsed * 0.05) % 1.0));
            orch.advance(black_box(elapsed));
        })
    });
}

criterion_group!(
    benches,
    pose_benchmark,
    projection_benchmark,
    picking_benchmark,
    frame_benchmark
);
criterion_main!(benches);
