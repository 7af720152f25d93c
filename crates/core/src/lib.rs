//! Core library for the Life of a Proton animation project.
//!
//! The crate scripts an educational animation as a list of self-contained
//! "beats": each beat builds its visual objects from scratch, plays a fixed
//! sequence of timed animation commands against a shared canvas/timeline
//! handle (the [`Stage`] trait), and tears everything down before the next
//! beat begins. Rendering, interpolation and encoding belong to the external
//! animation engine behind the [`Stage`] seam; [`TimelineStage`] stands in
//! for it during offline dry runs and tests.

pub mod animation;
pub mod beats;
pub mod config;
pub mod error;
pub mod object;
pub mod sequencer;
pub mod stage;

pub use animation::{Animation, Curve, Effect};
pub use beats::{Beat, BeatId, Segment};
pub use config::{Layout, Pacing, StageConfig};
pub use error::{ProtonLifeError, Result};
pub use object::{Circle, Color, Dot, Line, ObjectId, Primitive, TextLabel, Triangle};
pub use sequencer::{phase1, Phase};
pub use stage::{Stage, TimelineStage};
