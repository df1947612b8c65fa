//! Hand tracking: from LeapMotion hardware or keyboard simulation.
//!
//! Every source turns its own notion of "a hand frame" into an optional
//! [`GestureReading`], maps it with [`map_reading`] and publishes the result
//! into the shared [`ScaleCell`].  The render loop never learns which source
//! is running or how often it fires.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use cloud_morph::{map_reading, GestureReading, ScaleCell};
use tracing::debug;

// ════════════════════════════════════════════════════════════════════════════
// GestureSource trait: unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can keep a target scale up to date from hand readings.
pub trait GestureSource: Send + 'static {
    /// Publish into `target` until the source runs dry.
    fn run(self: Box<Self>, target: Arc<ScaleCell>);
}

/// Spawn a gesture source on its own thread.
pub fn spawn_gesture_source<G: GestureSource>(source: G, target: Arc<ScaleCell>) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("gesture source started");
        Box::new(source).run(target);
        debug!("gesture source stopped");
    })
}

// ════════════════════════════════════════════════════════════════════════════
// LeapGestureSource: real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Gesture source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
///
/// Each tracking frame uses the first hand only.  Its joints are projected
/// onto the horizontal (x, z) plane, which is the plane a palm-down hand
/// pinches in over the sensor.  A frame without hands publishes the
/// neutral scale.
#[cfg(feature = "leap")]
pub struct LeapGestureSource;

#[cfg(feature = "leap")]
impl GestureSource for LeapGestureSource {
    fn run(self: Box<Self>, target: Arc<ScaleCell>) {
        use leaprs::*;
        use tracing::warn;

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c)  => c,
            Err(e) => { warn!("failed to create LeapC connection: {:?}", e); return; }
        };
        if let Err(e) = connection.open() {
            warn!("failed to open LeapMotion device: {:?}", e);
            return;
        }

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands: Vec<_> = frame.hands().collect();
                let reading = hands.first().and_then(|h| reading_from_hand(h));
                target.store(map_reading(reading.as_ref()));
            }
        }
    }
}

/// Wrist, thumb tip, index tip and index knuckle of one tracked hand.
#[cfg(feature = "leap")]
fn reading_from_hand(hand: &leaprs::Hand) -> Option<GestureReading> {
    use cloud_morph::Point2;

    let fingers: Vec<_> = hand.digits().collect();
    if fingers.len() < 5 { return None; }

    // Carpal end of the middle metacarpal sits on the wrist.
    let wrist      = fingers[2].metacarpal().prev_joint();
    let thumb_tip  = fingers[0].distal().next_joint();
    let index_tip  = fingers[1].distal().next_joint();
    let index_base = fingers[1].metacarpal().next_joint();

    Some(GestureReading {
        wrist:      Point2::new(wrist.x,      wrist.z),
        thumb_tip:  Point2::new(thumb_tip.x,  thumb_tip.z),
        index_tip:  Point2::new(index_tip.x,  index_tip.z),
        index_base: Point2::new(index_base.x, index_base.z),
    })
}

// ════════════════════════════════════════════════════════════════════════════
// SimGestureSource: keyboard simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimInput {
    /// Spread thumb and index a little further (Up, repeats while held).
    Open,
    /// Pinch a little tighter (Down, repeats while held).
    Close,
    /// Hand enters or leaves the tracker (H).
    ToggleHand,
    /// Stop the simulation thread.
    Quit,
}

/// Open-ratio change per key event.
pub const SIM_STEP:      f32 = 0.05;
/// Largest simulated open ratio; anything past 1.2 already saturates.
pub const SIM_MAX_RATIO: f32 = 1.6;

/// A pretend hand: present or not, and how far its pinch is open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimHand {
    pub present:    bool,
    pub open_ratio: f32,
}

impl Default for SimHand {
    /// Absent, with a relaxed pose ready for when it appears.
    fn default() -> Self {
        SimHand { present: false, open_ratio: 0.7 }
    }
}

impl SimHand {
    /// Apply one input.  Returns false for [`SimInput::Quit`].
    ///
    /// Opening or closing an absent hand brings it into view.
    pub fn apply(&mut self, input: SimInput) -> bool {
        match input {
            SimInput::Open => {
                self.present = true;
                self.open_ratio = (self.open_ratio + SIM_STEP).min(SIM_MAX_RATIO);
            }
            SimInput::Close => {
                self.present = true;
                self.open_ratio = (self.open_ratio - SIM_STEP).max(0.0);
            }
            SimInput::ToggleHand => self.present = !self.present,
            SimInput::Quit => return false,
        }
        true
    }

    pub fn reading(&self) -> Option<GestureReading> {
        self.present.then(|| GestureReading::with_open_ratio(self.open_ratio))
    }
}

/// Gesture source driven by [`SimInput`] events from the viewer window.
///
/// The viewer forwards keys here; this thread owns the simulated hand and
/// publishes a fresh target after every change.  The source stops when the
/// window side of the channel is dropped or sends [`SimInput::Quit`].
pub struct SimGestureSource {
    pub rx: Receiver<SimInput>,
    hand:   SimHand,
}

impl SimGestureSource {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        SimGestureSource { rx, hand: SimHand::default() }
    }
}

impl GestureSource for SimGestureSource {
    fn run(self: Box<Self>, target: Arc<ScaleCell>) {
        let SimGestureSource { rx, mut hand } = *self;
        target.store(map_reading(hand.reading().as_ref()));
        for input in rx {
            if !hand.apply(input) {
                return;
            }
            target.store(map_reading(hand.reading().as_ref()));
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
