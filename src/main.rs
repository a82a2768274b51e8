//! Burst FX entry point
//!
//! Runs one effect frame by frame against a recording canvas and prints a
//! JSON summary.
//!
//! Usage: `burst-fx [settings.json]`

use std::path::PathBuf;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use burst_fx::{CommandBuffer, DrawCommand, Settings, start_explosive_effect};

/// Per-frame counts
#[derive(Debug, Serialize)]
struct FrameSummary {
    frame: u32,
    particles: usize,
    pixels: usize,
    rects: usize,
    stencils: usize,
    circles: usize,
}

impl FrameSummary {
    fn new(frame: u32, particles: usize, commands: &[DrawCommand]) -> Self {
        let mut summary = Self {
            frame,
            particles,
            pixels: 0,
            rects: 0,
            stencils: 0,
            circles: 0,
        };
        for cmd in commands {
            match cmd {
                DrawCommand::Pixel { .. } => summary.pixels += 1,
                DrawCommand::Rect { .. } => summary.rects += 1,
                DrawCommand::Image { .. } => summary.stencils += 1,
                DrawCommand::Circle { .. } => summary.circles += 1,
            }
        }
        summary
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let effect = settings.effect_data();
    log::info!(
        "Burst FX: {:?} {:?} at ({}, {}) for {} ms, seed {}",
        settings.color,
        settings.shape,
        settings.x,
        settings.y,
        settings.duration,
        settings.seed
    );

    let mut source = start_explosive_effect(
        &effect,
        Vec2::new(settings.x, settings.y),
        settings.duration,
        settings.density,
        Pcg32::seed_from_u64(settings.seed),
    );

    let mut canvas = CommandBuffer::new();
    let mut frames = Vec::with_capacity(settings.frames as usize);
    for frame in 0..settings.frames {
        source.update(settings.frame_ms);
        canvas.clear();
        source.draw(&mut canvas);

        let summary = FrameSummary::new(frame, source.particles().len(), &canvas.commands);
        log::debug!("{:?}", summary);
        frames.push(summary);

        if source.is_finished() {
            log::info!("Effect finished after {} frames", frame + 1);
            break;
        }
    }

    match serde_json::to_string_pretty(&frames) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No wasm entry point; the library is used directly
}
