//! Rayfield entry point
//!
//! Headless demo driver: builds a world, steps it for a configured number of
//! frames, and feeds the hit-point cloud through the scene and overlay
//! layers into recording sinks. A graphical frontend would replace the
//! `DrawList`s with sinks that rasterize.

use std::path::Path;

use log::{debug, info};

use rayfield::overlay::{HeatmapLayer, MeshNetwork, TrailsLayer};
use rayfield::render::{DrawList, draw_world};
use rayfield::sim::World;
use rayfield::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    let (width, height) = (settings.world.width, settings.world.height);
    let mut world = World::new(settings.world.clone());

    let mut mesh = MeshNetwork::new();
    mesh.enabled = settings.mesh;
    let mut trails = TrailsLayer::new(width, height);
    trails.enabled = settings.trails;
    let mut heatmap = HeatmapLayer::new(width, height, 16.0);
    heatmap.enabled = settings.heatmap;

    // The scene and mesh redraw from scratch; the trails sink stands in for a
    // persistent offscreen surface, so it is never cleared.
    let mut scene = DrawList::new();
    let mut trail_surface = DrawList::new();

    let mut total_hits: u64 = 0;
    for frame in 0..settings.frames {
        world.step();
        let points = world.hit_points();
        total_hits += points.len() as u64;

        scene.clear();
        draw_world(&world, &mut scene);
        mesh.render(&points, &mut scene);
        heatmap.add(&points);
        heatmap.update_and_render(&mut scene);
        trails.add(&points, world.particles.first().map(|p| p.pos), &mut trail_surface);

        debug!(
            "frame {frame}: {} hits, {} scene commands",
            points.len(),
            scene.len()
        );
    }

    info!(
        "ran {} frames: {} total hits, avg {:.1} per frame",
        settings.frames,
        total_hits,
        total_hits as f64 / settings.frames.max(1) as f64
    );

    Ok(())
}
