//! profile-reel - animated terminal profile README
//!
//! Renders a title banner and a series of rounded-border panels one step at
//! a time, with a progress line advancing underneath. The output is meant to
//! be recorded and embedded as a profile animation.
//!
//! The output handle and the clock are passed in, so a render can be
//! captured into a buffer and replayed without sleeping.

pub mod clock;
pub mod config;
pub mod error;
pub mod panel;
pub mod panels;
pub mod progress;
pub mod render;
pub mod style;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use panel::Panel;
pub use panels::{profile_panels, PanelSet};
pub use progress::ProgressDisplay;
pub use render::{render, step_size};
pub use style::Palette;
