//! # leap_cloud
//!
//! Hand-tracking controller for a morphing particle cloud with hidden photo
//! memories, rendered in software.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Effect |
//! |---|---|
//! | Pinch (thumb and index together) | Cloud condenses, down to 0.4× |
//! | Open hand (thumb and index spread) | Cloud expands, up to 2.0× |
//! | Expansion past 1.3× | Photo sprites push outward and reveal |
//! | No hand | Cloud eases back to 1.0× |
//!
//! ## Feature flags
//!
//! * (default): **Simulation mode**: the keyboard stands in for the hand.
//! * `leap`: **Hardware mode**: polls a real LeapMotion controller via LeapC.
//!
//! ### Keyboard
//!
//! | Key | Action |
//! |---|---|
//! | `Up` / hold | Open the simulated hand |
//! | `Down` / hold | Pinch the simulated hand |
//! | `H` | Simulated hand enters / leaves |
//! | `1`–`6` | Heart, Rose, Saturn, Zen, Burst, Helix |
//! | `C` | Next theme colour |
//! | `Q` / `Esc` | Quit |

pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod gesture;
pub mod visualizer;

pub use app::{run, AppState, Control};
pub use config::AppConfig;
pub use error::AppError;
