//! End-to-end engine scenarios: gesture → cell → tick → status and sprites.

use std::sync::Arc;
use std::thread;

use cloud_morph::reveal::{IDLE_OPACITY, INITIAL_OPACITY};
use cloud_morph::{
    map_reading, update_sprite, AnimationState, GestureReading, HandState, MorphConfig,
    PhotoSprite, Rgb, ScaleCell,
};
use cloud_shapes::{Point3D, ShapeKind};

const THEME: Rgb = Rgb::new(0.0, 0.82, 1.0);

fn cloud(shape: ShapeKind) -> AnimationState {
    let cfg = MorphConfig { particle_count: 1_000, photo_count: 10, ..Default::default() };
    AnimationState::seeded(cfg, shape, THEME, 7).expect("valid config")
}

fn assert_close(a: f32, b: f32, tol: f32, label: &str) {
    assert!((a - b).abs() <= tol, "{label}: {a} vs {b}");
}

#[test]
fn engine_scale_error_decays_geometrically() {
    let mut c = cloud(ShapeKind::Heart);
    let h = c.config().hand_sensitivity;
    let target = 0.4;
    c.target_handle().store(target);

    let initial = (c.morph().current_scale - target).abs();
    for n in 1..=40 {
        c.tick();
        let err = (c.morph().current_scale - target).abs();
        assert_close(err, (1.0 - h).powi(n) * initial, 1e-4, &format!("tick {n}"));
    }
}

#[test]
fn sprite_reveal_on_rising_scale() {
    let mut sprite = PhotoSprite::new(Point3D::new(3.0, 1.0, -2.0), THEME);
    let opacity_0 = sprite.opacity;
    assert_eq!(opacity_0, INITIAL_OPACITY);

    let mut last = opacity_0;
    let mut rising_after_threshold = true;
    for k in 1..=50 {
        let scale = 1.0 + 0.5 * k as f32 / 50.0;
        update_sprite(&mut sprite, scale, THEME, 0.08);
        if scale > 1.3 && sprite.opacity <= last {
            rising_after_threshold = false;
        }
        last = sprite.opacity;
    }

    assert!(sprite.opacity > opacity_0);
    assert!(rising_after_threshold);
    // Past the faint idle level: heading for 1.0.
    assert!(sprite.opacity > IDLE_OPACITY, "opacity {}", sprite.opacity);

    for _ in 0..200 {
        update_sprite(&mut sprite, 1.5, THEME, 0.08);
    }
    assert!(sprite.opacity > 0.99);
    assert!(sprite.tint.r > 0.99);
}

#[test]
fn open_hand_reveals_then_no_hand_hides() {
    let mut c = cloud(ShapeKind::Saturn);
    let target = c.target_handle();

    target.store(map_reading(Some(&GestureReading::with_open_ratio(1.5))));
    let s = c.advance(200);
    assert_eq!(s.hand_state, HandState::Open);
    assert!(s.is_detected);
    assert!(c.sprites().iter().all(|p| p.opacity > 0.9 && p.display_scale > 3.9));

    target.store(map_reading(None));
    let s = c.advance(400);
    assert_eq!(s.hand_state, HandState::Moving);
    assert!(!s.is_detected);
    for p in c.sprites() {
        assert_close(p.opacity, IDLE_OPACITY, 1e-3, "idle opacity");
        assert_close(p.tint.g, THEME.g, 1e-3, "idle tint");
    }
}

#[test]
fn pinched_hand_condenses_cloud() {
    let mut c = cloud(ShapeKind::Firework);
    c.target_handle().store(map_reading(Some(&GestureReading::with_open_ratio(0.0))));
    let s = c.advance(300);
    assert_eq!(s.hand_state, HandState::Closed);
    assert_close(s.scale_factor, 0.4, 1e-3, "scale");

    let scale = c.morph().current_scale;
    for (cur, base) in c.particles().current().iter().zip(c.particles().base()) {
        assert!(cur.distance(base.scaled(scale)) < 0.05);
    }
}

#[test]
fn particle_buffer_tracks_current_positions() {
    let mut c = cloud(ShapeKind::Helix);
    c.advance(3);
    let buf = c.particle_buffer();
    assert_eq!(buf.len(), c.config().particle_count * 3);
    for (i, p) in c.particles().current().iter().enumerate() {
        assert_eq!(buf[i * 3], p.x);
        assert_eq!(buf[i * 3 + 1], p.y);
        assert_eq!(buf[i * 3 + 2], p.z);
    }
}

#[test]
fn gesture_thread_and_render_loop_share_one_slot() {
    let mut c = cloud(ShapeKind::Buddha);
    let cell: Arc<ScaleCell> = c.target_handle();

    let writer = thread::spawn(move || {
        for i in 0..=100 {
            let ratio = i as f32 * 0.015;
            cell.store(map_reading(Some(&GestureReading::with_open_ratio(ratio))));
        }
    });
    for _ in 0..50 {
        let s = c.tick();
        assert!(s.scale_factor.is_finite());
    }
    writer.join().expect("writer thread");

    let s = c.advance(300);
    assert_eq!(c.morph().target_scale, 2.0);
    assert_eq!(s.hand_state, HandState::Open);
}
