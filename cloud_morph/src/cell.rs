//! Single-slot, last-write-wins scalar shared between the gesture thread and
//! the render loop.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::gesture::NEUTRAL_SCALE;

/// Latest target scale published by the gesture pipeline.
///
/// One writer (the detector callback) and one reader (the tick).  Readers
/// may see a stale value; the smoothing in the tick absorbs it.  Nothing is
/// queued because only the newest reading matters.
#[derive(Debug)]
pub struct ScaleCell(AtomicU32);

impl ScaleCell {
    pub fn new(value: f32) -> Self {
        ScaleCell(AtomicU32::new(value.to_bits()))
    }

    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Publish a new target.  Non-finite values are dropped so the tick never
    /// smooths toward NaN or infinity.
    pub fn store(&self, value: f32) {
        if value.is_finite() {
            self.0.store(value.to_bits(), Ordering::Relaxed);
        }
    }
}

impl Default for ScaleCell {
    fn default() -> Self {
        ScaleCell::new(NEUTRAL_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_neutral() {
        assert_eq!(ScaleCell::default().load(), 1.0);
    }

    #[test]
    fn last_write_wins() {
        let cell = ScaleCell::default();
        cell.store(0.4);
        cell.store(1.7);
        assert_eq!(cell.load(), 1.7);
    }

    #[test]
    fn non_finite_writes_ignored() {
        let cell = ScaleCell::new(0.9);
        cell.store(f32::NAN);
        cell.store(f32::INFINITY);
        assert_eq!(cell.load(), 0.9);
    }

    #[test]
    fn writer_thread_is_visible_after_join() {
        let cell = Arc::new(ScaleCell::default());
        let w = Arc::clone(&cell);
        thread::spawn(move || {
            for i in 0..100 {
                w.store(0.4 + i as f32 * 0.01);
            }
        })
        .join()
        .unwrap();
        assert!((cell.load() - 1.39).abs() < 1e-6);
    }
}
