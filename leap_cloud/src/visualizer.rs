//! Software-rendered viewer using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ ┌──────────────────┐                                                 │
//! │ │ MEMORY CLOUD     │           .  ·. ·  .                            │
//! │ │ STATUS  LINKED   │        · ·:·::·:·.·  ·     ▣ revealed photo     │
//! │ │ EXPANSION 135%   │       ·.:·::·:·::·:·.                           │
//! │ │ HAND  OPEN       │         ·.:·::·:·.·   ▫ idle sprite             │
//! │ │ SHAPE  HEART     │            ·.·:·.                               │
//! │ │ THEME  #00D2FF   │                                                 │
//! │ └──────────────────┘                                                 │
//! │ key legend                                                           │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Particles and sprites are blended additively over a near-black
//! background, so dense regions of the cloud glow.

use std::sync::mpsc::Sender;
use std::time::Duration;

use cloud_morph::{AppSignal, PhotoSprite, Rgb};
use cloud_shapes::{Point3D, ShapeKind};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::app::Control;
use crate::camera::{fog_visibility, Camera};
use crate::error::AppError;
use crate::gesture::SimInput;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W:          usize = 1024;
pub const WIN_H:          usize = 640;
const PANEL_X:            usize = 16;
const PANEL_Y:            usize = 16;
const PANEL_W:            usize = 236;
const PANEL_H:            usize = 146;
const TEXT_SCALE:         usize = 2;
const LINE_H:             usize = 20;
const BG_COLOR:           u32   = 0xFF050508;
const PANEL_BG:           u32   = 0xFF10131C;
const TITLE_COLOR:        u32   = 0xFFEEEEEE;
const DIM_COLOR:          u32   = 0xFF888888;
const SEARCH_COLOR:       u32   = 0xFFFF8844;

/// Base opacity of every particle before fog.
pub const PARTICLE_OPACITY: f32 = 0.8;
/// Distinct placeholder photos; sprite `i` shows photo `i % PHOTO_SLOTS`.
pub const PHOTO_SLOTS:      usize = 15;
/// Sprites fainter than this are skipped.
const MIN_SPRITE_ALPHA:     f32 = 0.003;

const DIGIT_KEYS: [Key; 6] = [Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5, Key::Key6];

// ════════════════════════════════════════════════════════════════════════════
// FrameView: one frame's worth of state, borrowed from AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct FrameView<'a> {
    /// Flat `[x0, y0, z0, x1, …]` particle positions.
    pub positions:     &'a [f32],
    pub sprites:       &'a [PhotoSprite],
    /// Cloud rotation about y, radians.
    pub rotation:      f32,
    pub theme:         Rgb,
    pub particle_size: f32,
    pub signal:        AppSignal,
    pub shape:         ShapeKind,
}

/// Status panel text, one line per row.
pub fn panel_lines(signal: &AppSignal, shape: ShapeKind, theme: Rgb) -> [String; 5] {
    let status = if signal.is_detected { "LINKED" } else { "SEARCHING..." };
    [
        format!("STATUS  {status}"),
        format!("EXPANSION  {}", signal.expansion_percent()),
        format!("HAND  {}", signal.hand_state),
        format!("SHAPE  {}", shape.label().to_uppercase()),
        format!("THEME  {}", theme.to_hex()),
    ]
}

/// Key legend for the bottom of the window.
pub fn legend(simulated: bool) -> &'static str {
    if simulated {
        "UP/DOWN=OPEN/CLOSE  H=HAND  1-6=SHAPE  C=THEME  Q=QUIT"
    } else {
        "1-6=SHAPE  C=THEME  Q=QUIT"
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Canvas: ARGB framebuffer with the drawing primitives
// ════════════════════════════════════════════════════════════════════════════

pub struct Canvas {
    width:  usize,
    height: usize,
    buf:    Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, buf: vec![BG_COLOR; width * height] }
    }

    pub fn pixels(&self) -> &[u32] { &self.buf }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buf[y * self.width + x])
    }

    pub fn clear(&mut self, color: u32) {
        self.buf.fill(color);
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buf[row * self.width + col] = color;
            }
        }
    }

    /// Blend `color` over a rectangle, `t` = 1.0 fully opaque.
    pub fn shade_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32, t: f32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                let i = row * self.width + col;
                self.buf[i] = blend(self.buf[i], color, t);
            }
        }
    }

    pub fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 { return; }
        for col in x..(x + w).min(self.width) {
            self.set_pixel(col, y,         color);
            self.set_pixel(col, y + h - 1, color);
        }
        for row in y..(y + h).min(self.height) {
            self.set_pixel(x,         row, color);
            self.set_pixel(x + w - 1, row, color);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x] = color;
        }
    }

    /// Additive blend: `dst += rgb · alpha`, saturating per channel.
    pub fn add_pixel(&mut self, x: isize, y: isize, rgb: Rgb, alpha: f32) {
        if x < 0 || y < 0 { return; }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height { return; }

        let i = y * self.width + x;
        let dst = self.buf[i];
        let add = |shift: u32, c: f32| {
            let d = (dst >> shift) & 0xFF;
            let s = (c.clamp(0.0, 1.0) * alpha.clamp(0.0, 1.0) * 255.0).round() as u32;
            (d + s).min(0xFF) << shift
        };
        self.buf[i] = 0xFF000000 | add(16, rgb.r) | add(8, rgb.g) | add(0, rgb.b);
    }

    /// Additive square of side `side` px centred on (`cx`, `cy`).
    pub fn add_square(&mut self, cx: f32, cy: f32, side: f32, rgb: Rgb, alpha: f32) {
        let side = side.max(1.0);
        let x0 = (cx - side * 0.5).round() as isize;
        let y0 = (cy - side * 0.5).round() as isize;
        let n = side.round().max(1.0) as isize;
        for dy in 0..n {
            for dx in 0..n {
                self.add_pixel(x0 + dx, y0 + dy, rgb, alpha);
            }
        }
    }

    /// Additive placeholder photo: a framed gradient card in the slot's own
    /// hue, modulated by `tint`.
    pub fn add_photo(&mut self, cx: f32, cy: f32, side: f32, tint: Rgb, alpha: f32, slot: usize) {
        let n = side.round().max(1.0) as isize;
        let x0 = (cx - side * 0.5).round() as isize;
        let y0 = (cy - side * 0.5).round() as isize;
        let frame = (n / 12).max(1);
        for dy in 0..n {
            for dx in 0..n {
                let on_frame = dx < frame || dy < frame || dx >= n - frame || dy >= n - frame;
                let texel = if on_frame {
                    Rgb::WHITE
                } else {
                    placeholder_texel(slot, dx as f32 / n as f32, dy as f32 / n as f32)
                };
                self.add_pixel(x0 + dx, y0 + dy, modulate(texel, tint), alpha);
            }
        }
    }

    /// Minimal bitmap font: 3×5 glyphs magnified by `scale`.
    pub fn draw_label(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let scale = scale.max(1);
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale;
            if cx + 4 * scale > self.width { break; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Scene
// ════════════════════════════════════════════════════════════════════════════

/// Draw the rotating cloud and its sprites into `canvas`.
pub fn render_scene(canvas: &mut Canvas, camera: &Camera, frame: &FrameView<'_>) {
    for xyz in frame.positions.chunks_exact(3) {
        let p = Point3D::new(xyz[0], xyz[1], xyz[2]).rotated_y(frame.rotation);
        let Some(s) = camera.project(p) else { continue };
        let side = camera.point_px(frame.particle_size, s.depth);
        canvas.add_square(s.x, s.y, side, frame.theme, PARTICLE_OPACITY * fog_visibility(s.depth));
    }

    for (i, sprite) in frame.sprites.iter().enumerate() {
        if sprite.opacity < MIN_SPRITE_ALPHA { continue; }
        let p = sprite.position.rotated_y(frame.rotation);
        let Some(s) = camera.project(p) else { continue };
        let side = camera.sprite_px(sprite.display_scale, s.depth);
        let alpha = sprite.opacity * fog_visibility(s.depth);
        canvas.add_photo(s.x, s.y, side, sprite.tint, alpha, i % PHOTO_SLOTS);
    }
}

fn draw_panel(canvas: &mut Canvas, frame: &FrameView<'_>, simulated: bool) {
    canvas.shade_rect(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, PANEL_BG, 0.85);
    let accent = frame.theme.to_argb();
    canvas.draw_border(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, blend(PANEL_BG, accent, 0.5));
    canvas.draw_label("MEMORY CLOUD", PANEL_X + 10, PANEL_Y + 10, TEXT_SCALE, TITLE_COLOR);

    let lines = panel_lines(&frame.signal, frame.shape, frame.theme);
    for (row, line) in lines.iter().enumerate() {
        let color = match row {
            0 if !frame.signal.is_detected => SEARCH_COLOR,
            4 => accent,
            _ => TITLE_COLOR,
        };
        let y = PANEL_Y + 16 + LINE_H * (row + 1);
        canvas.draw_label(line, PANEL_X + 10, y, TEXT_SCALE, color);
    }

    canvas.draw_label(legend(simulated), PANEL_X, WIN_H - 20, TEXT_SCALE, DIM_COLOR);
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer: window, input, presentation
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    canvas: Canvas,
    camera: Camera,
    /// Present in simulation mode only.
    sim_tx: Option<Sender<SimInput>>,
}

impl Visualizer {
    pub fn new(sim_tx: Option<Sender<SimInput>>) -> Result<Self, AppError> {
        let mut window = Window::new(
            "Leap Cloud | Gesture Particle Memories",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| AppError::Window(e.to_string()))?;

        window.limit_update_rate(Some(Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            canvas: Canvas::new(WIN_W, WIN_H),
            camera: Camera::new(WIN_W, WIN_H),
            sim_tx,
        })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll the keyboard.  Scene controls come back to the caller; hand
    /// simulation keys go straight to the gesture thread.
    pub fn poll_input(&mut self) -> Vec<Control> {
        let mut controls = Vec::new();
        if !self.window.is_open() {
            controls.push(Control::Quit);
            return controls;
        }

        // Keys that trigger on first press only
        let one_shot = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);
        // Keys that repeat while held
        let held     = |k: Key| self.window.is_key_pressed(k, KeyRepeat::Yes);

        if one_shot(Key::Q) || one_shot(Key::Escape) {
            self.send(SimInput::Quit);
            controls.push(Control::Quit);
            return controls;
        }
        for (key, shape) in DIGIT_KEYS.into_iter().zip(ShapeKind::all()) {
            if one_shot(key) {
                controls.push(Control::Shape(shape));
            }
        }
        if one_shot(Key::C) {
            controls.push(Control::NextTheme);
        }

        if held(Key::Up)     { self.send(SimInput::Open); }
        if held(Key::Down)   { self.send(SimInput::Close); }
        if one_shot(Key::H)  { self.send(SimInput::ToggleHand); }

        controls
    }

    fn send(&self, input: SimInput) {
        if let Some(tx) = &self.sim_tx {
            let _ = tx.send(input);
        }
    }

    /// Render one frame and present it.
    pub fn render(&mut self, frame: &FrameView<'_>) -> Result<(), AppError> {
        self.canvas.clear(BG_COLOR);
        render_scene(&mut self.canvas, &self.camera, frame);
        draw_panel(&mut self.canvas, frame, self.sim_tx.is_some());

        self.window
            .update_with_buffer(self.canvas.pixels(), WIN_W, WIN_H)
            .map_err(|e| AppError::Window(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Colour helpers
// ────────────────────────────────────────────────────────────────────────────

/// Per-channel product, the way a texture is tinted by a material colour.
fn modulate(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(a.r * b.r, a.g * b.g, a.b * b.b)
}

/// Stand-in photo: a soft vertical gradient, one hue per slot.
fn placeholder_texel(slot: usize, u: f32, v: f32) -> Rgb {
    let hue = slot as f32 * (360.0 / PHOTO_SLOTS as f32);
    Rgb::from_hsv(hue + 40.0 * u, 0.55, 0.95 - 0.5 * v)
}

/// Alpha-blend two ARGB colors. `t` = 0.0 → all `a`, `t` = 1.0 → all `b`.
fn blend(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |ca: u32, cb: u32| (ca as f32 * (1.0 - t) + cb as f32 * t) as u32;
    let ar = (a >> 16) & 0xFF; let br = (b >> 16) & 0xFF;
    let ag = (a >>  8) & 0xFF; let bg = (b >>  8) & 0xFF;
    let ab =  a        & 0xFF; let bb =  b        & 0xFF;
    0xFF000000 | (lerp(ar, br) << 16) | (lerp(ag, bg) << 8) | lerp(ab, bb)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        '#' => [0b101, 0b111, 0b101, 0b111, 0b101],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
