//! Pulse observation model and the heuristic dosha classifier.
//!
//! The classifier is a pure function: five self-reported pulse
//! characteristics go in, a dominant dosha with a confidence percentage,
//! a risk tier and static lifestyle guidance come out.

pub mod classifier;
pub mod distribution;
pub mod dosha;
pub mod error;
pub mod observation;
pub mod profile;
pub mod risk;
pub mod scoring;

pub use classifier::*;
pub use distribution::*;
pub use dosha::*;
pub use error::*;
pub use observation::*;
pub use profile::*;
pub use risk::*;
pub use scoring::*;
