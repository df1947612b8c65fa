//! Hand reading → target scale.
//!
//! The openness of one hand is the thumb–index pinch distance measured in
//! palm lengths.  That ratio is normalised over [`CLOSED_RATIO`,
//! [`OPEN_RATIO`]] and mapped linearly onto [`MIN_SCALE`, [`MAX_SCALE`].
//! No hand means the neutral scale.
//!
//! The mapper is stateless; it runs once per detector callback at whatever
//! rate the tracker delivers.

// ════════════════════════════════════════════════════════════════════════════
// Mapping constants
// ════════════════════════════════════════════════════════════════════════════

/// Scale reported while no hand is present.
pub const NEUTRAL_SCALE: f32 = 1.0;
/// Scale for a fully pinched hand.
pub const MIN_SCALE:     f32 = 0.4;
/// Scale for a fully open hand.
pub const MAX_SCALE:     f32 = 2.0;
/// Open ratio at or below which the hand counts as closed.
pub const CLOSED_RATIO:  f32 = 0.2;
/// Open ratio at or above which the hand counts as fully open.
pub const OPEN_RATIO:    f32 = 1.2;
/// Floor on the palm length so tiny or collapsed palms cannot blow up the ratio.
pub const MIN_PALM:      f32 = 0.1;

// ════════════════════════════════════════════════════════════════════════════
// Landmarks
// ════════════════════════════════════════════════════════════════════════════

/// A landmark projected onto the detector's image (or tracking) plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }

    pub fn distance(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// Indices into a 21-point hand skeleton (wrist, then four joints per digit).
pub const WRIST:     usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;

/// The four landmarks the mapper needs from one tracked hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureReading {
    pub wrist:      Point2,
    pub thumb_tip:  Point2,
    pub index_tip:  Point2,
    /// Knuckle at the base of the index finger.
    pub index_base: Point2,
}

impl GestureReading {
    /// Pick the four landmarks out of a full 21-point hand skeleton.
    /// Returns `None` when the slice is too short.
    pub fn from_landmarks(landmarks: &[Point2]) -> Option<Self> {
        Some(GestureReading {
            wrist:      *landmarks.get(WRIST)?,
            thumb_tip:  *landmarks.get(THUMB_TIP)?,
            index_tip:  *landmarks.get(INDEX_TIP)?,
            index_base: *landmarks.get(INDEX_MCP)?,
        })
    }

    /// A synthetic hand with unit palm length whose pinch distance equals
    /// `open_ratio`.
    pub fn with_open_ratio(open_ratio: f32) -> Self {
        GestureReading {
            wrist:      Point2::new(0.0, 0.0),
            index_base: Point2::new(0.0, 1.0),
            thumb_tip:  Point2::new(0.0, 1.5),
            index_tip:  Point2::new(open_ratio, 1.5),
        }
    }

    pub fn palm_size(&self) -> f32 {
        self.index_base.distance(self.wrist)
    }

    pub fn pinch_distance(&self) -> f32 {
        self.thumb_tip.distance(self.index_tip)
    }

    /// Pinch distance in palm lengths; finite for any finite reading.
    pub fn open_ratio(&self) -> f32 {
        self.pinch_distance() / self.palm_size().max(MIN_PALM)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Mapping
// ════════════════════════════════════════════════════════════════════════════

/// Map an open ratio onto [`MIN_SCALE`, `MAX_SCALE`].
///
/// Monotonic non-decreasing and saturating at both ends.  A NaN ratio
/// (from NaN landmarks) yields [`NEUTRAL_SCALE`].
pub fn scale_for_ratio(open_ratio: f32) -> f32 {
    if open_ratio.is_nan() {
        return NEUTRAL_SCALE;
    }
    let n = ((open_ratio - CLOSED_RATIO) / (OPEN_RATIO - CLOSED_RATIO)).clamp(0.0, 1.0);
    MIN_SCALE * (1.0 - n) + MAX_SCALE * n
}

/// Target scale for one detector callback: neutral when no hand was seen.
pub fn map_reading(reading: Option<&GestureReading>) -> f32 {
    match reading {
        Some(r) => scale_for_ratio(r.open_ratio()),
        None    => NEUTRAL_SCALE,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
