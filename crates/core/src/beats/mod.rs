use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::StageConfig;
use crate::stage::{Stage, TimelineStage};
use crate::Result;

pub mod phase1;

/// Procedure implementing a beat's construct/play/teardown script.
///
/// A segment builds everything it needs from scratch on the stage it is
/// handed, plays a fixed sequence of timed commands, and removes or fades
/// out everything it created before returning. It must not depend on
/// objects created by a previous beat.
pub type Segment = fn(&mut dyn Stage, &StageConfig) -> Result<()>;

/// Identifier for a beat: phase number, position within the phase, and a
/// short kebab-case name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeatId {
    pub phase: u32,
    pub number: u32,
    pub name: String,
}

impl BeatId {
    pub fn new(phase: u32, number: u32, name: impl Into<String>) -> Self {
        Self {
            phase,
            number,
            name: name.into(),
        }
    }
}

impl fmt::Display for BeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase{}-beat{}-{}", self.phase, self.number, self.name)
    }
}

/// A named, self-contained animation unit.
///
/// Beats are constructed and torn down entirely within one invocation and
/// never reference one another; the sequencer composes them by plain ordered
/// invocation.
#[derive(Debug, Clone)]
pub struct Beat {
    pub id: BeatId,
    segment: Segment,
}

impl Beat {
    pub fn new(id: BeatId, segment: Segment) -> Self {
        Self { id, segment }
    }

    /// Runs the beat's segment against the provided stage.
    pub fn run(&self, stage: &mut dyn Stage, config: &StageConfig) -> Result<()> {
        (self.segment)(stage, config)
    }

    /// Wrapper for isolated preview/testing: supplies a fresh stage of its
    /// own, delegates to the segment, and returns the stage for inspection.
    pub fn run_standalone(&self, config: &StageConfig) -> Result<TimelineStage> {
        let mut stage = TimelineStage::new();
        self.run(&mut stage, config)?;
        Ok(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beat_id_display_is_stable() {
        let id = BeatId::new(1, 3, "qgp-wide-shot");
        assert_eq!(id.to_string(), "phase1-beat3-qgp-wide-shot");
    }
}
