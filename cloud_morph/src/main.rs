//! morph_trace: run the engine headless against a scripted hand and print
//! the status it would show.
//!
//! The script opens the hand slowly, holds it, pinches it shut, then lets
//! the hand leave the tracker.

use cloud_morph::{map_reading, AnimationState, GestureReading, MorphConfig, Rgb};
use cloud_shapes::ShapeKind;

const PRINT_EVERY: u32 = 15;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              Particle Cloud Morph Trace              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let cfg = MorphConfig { particle_count: 2_000, photo_count: 20, ..Default::default() };
    let theme = Rgb::new(0.0, 210.0 / 255.0, 1.0);
    let mut cloud = match AnimationState::seeded(cfg, ShapeKind::Heart, theme, 0) {
        Ok(c)  => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let target = cloud.target_handle();

    // (frames, open ratio at end of segment; None = no hand)
    let script: [(u32, Option<f32>); 4] = [
        (120, Some(1.4)),
        (90,  Some(1.4)),
        (90,  Some(0.1)),
        (120, None),
    ];

    println!("  {:>5}  {:>7}  {:>7}  {:>9}  {:>8}  {:>8}", "tick", "target", "scale", "hand", "linked", "opacity");
    let mut ratio = 0.5f32;
    for (frames, goal) in script {
        let start = ratio;
        for f in 0..frames {
            let reading = goal.map(|g| {
                ratio = start + (g - start) * (f + 1) as f32 / frames as f32;
                GestureReading::with_open_ratio(ratio)
            });
            target.store(map_reading(reading.as_ref()));
            let s = cloud.tick();

            if cloud.ticks() % PRINT_EVERY as u64 == 0 {
                let opacity = cloud.sprites().first().map(|p| p.opacity).unwrap_or(0.0);
                println!(
                    "  {:>5}  {:>7.3}  {:>7.3}  {:>9}  {:>8}  {:>8.3}",
                    cloud.ticks(),
                    cloud.morph().target_scale,
                    s.scale_factor,
                    s.hand_state,
                    if s.is_detected { "LINKED" } else { "SEARCH" },
                    opacity,
                );
            }
        }
        if goal.is_none() {
            ratio = 0.5;
        }
    }
    println!();
}
